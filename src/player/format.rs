/// Format seconds as `m:ss`. Non-finite input renders as `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() {
        return "0:00".to_string();
    }
    let total = secs.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
