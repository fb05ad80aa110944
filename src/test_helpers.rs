//! Shared test helpers for setting up in-memory test environments.

use crate::config::ConfigRecord;
use crate::platform::FakeFs;

pub const HOME: &str = "/home/test";
pub const CONFIG_PATH: &str = "/home/test/.hypy.conf";

/// Build a complete config file for `alice@hv1.corp` with the given `pass` value.
pub fn make_config(pass: &str) -> String {
    format!(
        "[credentials]\n\
         user = alice\n\
         pass = {pass}\n\
         domain = corp\n\
         host = hv1\n\
         \n\
         [options]\n\
         sync_interval = 1d\n\
         protocol = wmi\n\
         ssh_port = 22\n"
    )
}

/// The standard config file with one `section.key` line removed.
pub fn config_without(key: &str) -> String {
    let (_, name) = key.split_once('.').unwrap_or(("", key));
    make_config("load")
        .lines()
        .filter(|line| !line.starts_with(&format!("{name} =")))
        .map(|line| format!("{line}\n"))
        .collect()
}

/// Create a `FakeFs` with the config file at the standard location.
pub fn setup_fs(config: &str) -> FakeFs {
    let fs = FakeFs::new(HOME);
    fs.add_file(CONFIG_PATH, config);
    fs
}

/// The record `make_config(pass)` resolves to without overrides.
pub fn base_record(pass: &str) -> ConfigRecord {
    ConfigRecord {
        user: "alice".to_string(),
        password: pass.to_string(),
        domain: "corp".to_string(),
        host: "hv1".to_string(),
        protocol: "wmi".to_string(),
        sync_interval: "1d".to_string(),
        ssh_port: "22".to_string(),
    }
}
