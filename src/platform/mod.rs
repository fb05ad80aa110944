//! Abstracted external dependencies for testability.
//!
//! Three traits cover all side effects: [`Fs`] for filesystem operations,
//! [`SecretStore`] for the OS credential vault, and [`Prompter`] for
//! interactive password entry.
//!
//! Production code uses the real implementations ([`RealFs`], [`KeyringStore`],
//! [`RealPrompter`]). Tests substitute fakes via generics — no trait objects needed.

mod real_fs;
mod real_prompt;
mod real_secret;

pub use real_fs::RealFs;
pub use real_prompt::RealPrompter;
pub use real_secret::KeyringStore;

#[cfg(test)]
mod fake_secret;

#[cfg(test)]
#[allow(unused_imports)]
pub use self::fake_fs::FakeFs;
#[cfg(test)]
#[allow(unused_imports)]
pub use self::fake_prompt::FakePrompter;
#[cfg(test)]
#[allow(unused_imports)]
pub use self::fake_secret::FakeSecretStore;

use anyhow::Result;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Filesystem
// ---------------------------------------------------------------------------

/// Abstraction over the handful of filesystem operations hypy needs.
pub trait Fs {
    /// Read the entire contents of a file as a UTF-8 string.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write `contents` to a file, creating it or truncating if it exists.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Set the Unix file mode (permission bits) of a file.
    fn set_file_mode(&self, path: &Path, mode: u32) -> Result<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Return the user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

// ---------------------------------------------------------------------------
// Secret store
// ---------------------------------------------------------------------------

/// Abstraction over an OS-level credential vault.
///
/// Entries are addressed by a `(service, account)` pair. A missing entry is
/// not an error: `get` returns `Ok(None)`. Any other failure is.
pub trait SecretStore {
    /// Look up the secret stored for `account` under `service`.
    fn get(&self, service: &str, account: &str) -> Result<Option<String>>;

    /// Store `secret` for `account` under `service`, replacing any previous value.
    fn set(&self, service: &str, account: &str, secret: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Prompter
// ---------------------------------------------------------------------------

/// Abstraction over interactive user prompts.
///
/// In production, delegates to `dialoguer`. In tests, returns predetermined answers.
pub trait Prompter {
    /// Show `prompt` and read one line of masked input.
    fn password(&self, prompt: &str) -> Result<String>;
}
