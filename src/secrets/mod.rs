//! Session password resolution.
//!
//! The merged record's password field is either the password itself or a
//! directive (`prompt`, `save`, `load`, or empty). [`resolve_password`] acts on
//! the directive, consulting the [`Prompter`] and the [`SecretStore`] at most
//! once each per call, and replaces the field with the plaintext it obtained.
//! Secrets live under the [`SERVICE`] name, keyed by the record's
//! [`ConfigRecord::qualified_key`].

mod directive;

pub use directive::PasswordDirective;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::ConfigRecord;
use crate::platform::{Prompter, SecretStore};

/// Service name for hypy's entries in the secret store.
pub const SERVICE: &str = "hypy";

/// Where the session password ended up coming from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordOutcome {
    /// Entered at the prompt.
    Prompted,
    /// Entered at the prompt and written to the secret store.
    Saved,
    /// Read from the secret store.
    Loaded,
    /// The configured value was the password itself.
    Literal,
    /// Nothing was obtained; the password field still holds the directive.
    Unresolved,
}

/// Replace `record.password` with the plaintext password its directive points at.
///
/// The field is only overwritten with a non-empty value, and an empty answer
/// to a `save` prompt is not written to the store. When the secret store
/// has no entry the directive is left in place and authentication will fail
/// later, against the remote host. Prompt and secret-store errors abort.
pub fn resolve_password(
    record: &mut ConfigRecord,
    store: &impl SecretStore,
    prompter: &impl Prompter,
) -> Result<PasswordOutcome> {
    let key = record.qualified_key();
    let directive = PasswordDirective::parse(&record.password);
    debug!("Password directive for {key}: {}", describe(&directive));

    let (obtained, outcome) = match directive {
        PasswordDirective::Literal(_) => return Ok(PasswordOutcome::Literal),
        PasswordDirective::Prompt => (ask(&key, prompter)?, PasswordOutcome::Prompted),
        PasswordDirective::Save => {
            let secret = ask(&key, prompter)?;
            if !secret.is_empty() {
                store
                    .set(SERVICE, &key, &secret)
                    .with_context(|| format!("Failed to save password for {key}"))?;
                info!("Saved password for {key} to the secret store");
            }
            (secret, PasswordOutcome::Saved)
        }
        PasswordDirective::Load => {
            let secret = store
                .get(SERVICE, &key)
                .with_context(|| format!("Failed to load password for {key}"))?;
            (secret.unwrap_or_default(), PasswordOutcome::Loaded)
        }
    };

    if obtained.is_empty() {
        warn!("No password available for {key}; authentication will likely fail");
        return Ok(PasswordOutcome::Unresolved);
    }
    record.password = obtained;
    Ok(outcome)
}

fn ask(key: &str, prompter: &impl Prompter) -> Result<String> {
    prompter
        .password(&format!("Password for {key}"))
        .with_context(|| format!("Failed to read password for {key}"))
}

/// Directive name for logging; never the literal password.
fn describe(directive: &PasswordDirective) -> &'static str {
    match directive {
        PasswordDirective::Prompt => "prompt",
        PasswordDirective::Save => "save",
        PasswordDirective::Load => "load",
        PasswordDirective::Literal(_) => "literal",
    }
}
