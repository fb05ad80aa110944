//! Print the resolved configuration for a session.
//!
//! Runs the full resolution, including any prompt or keyring access the
//! password directive asks for, then lists the merged values. The password
//! itself is never printed, only where it came from.

use anyhow::Result;

use crate::config::Overrides;
use crate::paths::collapse_tilde;
use crate::platform::{Fs, Prompter, SecretStore};
use crate::resolve::{Resolved, resolve};
use crate::secrets::PasswordOutcome;

/// Label/value rows for display.
pub fn rows(resolved: &Resolved, fs: &impl Fs) -> Vec<(&'static str, String)> {
    let record = &resolved.record;
    vec![
        ("config", collapse_tilde(&resolved.config_path, fs)),
        ("user", record.user.clone()),
        ("domain", record.domain.clone()),
        ("host", record.host.clone()),
        ("protocol", record.protocol.clone()),
        ("sync_interval", record.sync_interval.clone()),
        ("ssh_port", record.ssh_port.clone()),
        ("keyring key", record.qualified_key()),
        ("password", password_state(resolved)),
    ]
}

fn password_state(resolved: &Resolved) -> String {
    match resolved.password {
        PasswordOutcome::Prompted => "entered at prompt".to_string(),
        PasswordOutcome::Saved => "entered at prompt, saved to keyring".to_string(),
        PasswordOutcome::Loaded => "loaded from keyring".to_string(),
        PasswordOutcome::Literal => "set in configuration".to_string(),
        PasswordOutcome::Unresolved => {
            format!("unresolved ({:?})", resolved.record.password)
        }
    }
}

pub fn run(
    overrides: &Overrides,
    fs: &impl Fs,
    store: &impl SecretStore,
    prompter: &impl Prompter,
) -> Result<()> {
    let resolved = resolve(overrides, fs, store, prompter)?;
    let rows = rows(&resolved, fs);

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        println!("  {label:<width$}  {value}");
    }
    Ok(())
}
