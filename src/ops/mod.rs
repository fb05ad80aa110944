//! Operations that implement hypy commands.
//!
//! Each submodule corresponds to a CLI subcommand and exposes a `run()` function.

pub mod init;
pub mod show;
