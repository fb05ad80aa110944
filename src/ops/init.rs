//! Write a starter `~/.hypy.conf`.

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::paths::{collapse_tilde, config_path};
use crate::platform::Fs;

const TEMPLATE: &str = "\
[credentials]
user = administrator
; The password itself, or one of:
;   prompt  ask every time
;   save    ask, then store it in the system keyring
;   load    read it from the system keyring
pass = load
domain = example.local
host = hyperv-host

[options]
sync_interval = 1d
protocol = wmi
ssh_port = 22
";

/// Create the configuration file with owner-only permissions.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run(force: bool, fs: &impl Fs) -> Result<()> {
    let path = config_path(fs);
    let shown = collapse_tilde(&path, fs);

    if fs.exists(&path) && !force {
        bail!("{shown} already exists (use --force to overwrite)");
    }

    fs.write(&path, TEMPLATE.as_bytes())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    fs.set_file_mode(&path, 0o600)
        .with_context(|| format!("Failed to set permissions on {}", path.display()))?;

    info!("Created {shown}; edit it before connecting");
    Ok(())
}
