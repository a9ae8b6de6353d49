use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_path};

/// Install the global subscriber. Output goes to a file because the
/// terminal belongs to the UI; without a usable file logs are discarded.
pub fn init(settings: &LogSettings) {
    // RUST_LOG wins over the configured level. Decoder crates are noisy.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},symphonia=error,symphonia_core=error,lofty=error",
            settings.level
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact();

    match open_log_file(settings) {
        Some(file) => {
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::sink).try_init();
        }
    }
}

fn log_path(settings: &LogSettings) -> PathBuf {
    settings
        .file
        .as_ref()
        .map(PathBuf::from)
        .or_else(default_log_path)
        .unwrap_or_else(|| std::env::temp_dir().join("soundwave.log"))
}

fn open_log_file(settings: &LogSettings) -> Option<fs::File> {
    let path = log_path(settings);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
