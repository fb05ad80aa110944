//! Real prompter implementation using `dialoguer`.

use anyhow::{Context, Result};
use dialoguer::Password;

use super::Prompter;

/// Real prompter — delegates to `dialoguer::Password` for masked terminal input.
///
/// Empty input is re-prompted by `dialoguer`, so a returned password is never empty.
pub struct RealPrompter;

impl Prompter for RealPrompter {
    fn password(&self, prompt: &str) -> Result<String> {
        Password::new()
            .with_prompt(prompt)
            .interact()
            .context("Password prompt failed")
    }
}
