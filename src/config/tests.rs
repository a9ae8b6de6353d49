use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_soundwave_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SOUNDWAVE_CONFIG_PATH", "/tmp/soundwave-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/soundwave-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("soundwave")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_falls_back_to_home_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".local/state")
            .join("soundwave")
            .join("soundwave.log")
    );
}

#[test]
fn defaults_match_the_demo_player() {
    let s = Settings::default();
    assert_eq!(s.player.autoplay_delay_ms, 300);
    assert_eq!(s.player.poll_interval_ms, 100);
    assert_eq!(s.player.initial_volume, 80);
    assert!(s.player.fallback_source.ends_with("SoundHelix-Song-1.mp3"));
    assert_eq!(s.ui.brand, "SoundWave");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
autoplay_delay_ms = 0
poll_interval_ms = 250
initial_volume = 40
volume_step = 10
seek_step_percent = 2.5
fallback_source = "/tmp/silence.wav"
simulated_only = true

[ui]
brand = "Waves"
scroll_threshold = 3
track_columns = 2

[log]
level = "debug"
file = "/tmp/soundwave.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SOUNDWAVE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SOUNDWAVE__PLAYER__POLL_INTERVAL_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.autoplay_delay_ms, 0);
    assert!(s.player.autoplay);
    assert_eq!(s.player.poll_interval_ms, 250);
    assert_eq!(s.player.initial_volume, 40);
    assert_eq!(s.player.volume_step, 10);
    assert_eq!(s.player.seek_step_percent, 2.5);
    assert_eq!(s.player.fallback_source, "/tmp/silence.wav");
    assert!(s.player.simulated_only);
    assert_eq!(s.ui.brand, "Waves");
    assert_eq!(s.ui.scroll_threshold, 3);
    assert_eq!(s.ui.track_columns, 2);
    assert_eq!(s.ui.playlist_columns, 4);
    assert_eq!(s.log.level, "debug");
    assert_eq!(s.log.file.as_deref(), Some("/tmp/soundwave.log"));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
poll_interval_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SOUNDWAVE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SOUNDWAVE__PLAYER__POLL_INTERVAL_MS", "50");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.poll_interval_ms, 50);
}

#[test]
fn validate_rejects_zero_poll_interval_and_loud_volume() {
    let mut s = Settings::default();
    s.player.poll_interval_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.player.initial_volume = 101;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.player.seek_step_percent = 0.0;
    assert!(s.validate().is_err());
}

#[test]
fn partial_toml_keeps_section_defaults() {
    let s: Settings = toml::from_str(
        r#"
[player]
autoplay = false

[ui]
playlist_columns = 2
"#,
    )
    .unwrap();

    assert!(!s.player.autoplay);
    assert_eq!(s.player.autoplay_delay_ms, 300);
    assert_eq!(s.player.poll_interval_ms, 100);
    assert_eq!(s.ui.playlist_columns, 2);
    assert_eq!(s.ui.track_columns, 4);
    assert_eq!(s.log.level, "info");
    assert!(s.log.file.is_none());
}
