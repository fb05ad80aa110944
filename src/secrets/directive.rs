//! Password directives accepted in `credentials.pass` and `--pass`.

/// How the session password should be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordDirective {
    /// Ask on the terminal; leave the secret store alone.
    Prompt,
    /// Ask on the terminal, then store the answer in the secret store.
    Save,
    /// Read from the secret store without prompting.
    Load,
    /// The value is the password itself.
    Literal(String),
}

impl PasswordDirective {
    /// Parse a password field. Matching is case-sensitive and an empty value
    /// means [`PasswordDirective::Load`].
    pub fn parse(value: &str) -> Self {
        match value {
            "prompt" => Self::Prompt,
            "save" => Self::Save,
            "load" | "" => Self::Load,
            literal => Self::Literal(literal.to_string()),
        }
    }
}
