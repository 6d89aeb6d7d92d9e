//! Redacting wrapper for sensitive form text.

/// Wrapper for password text entered into the form.
///
/// Keeps the value out of `Debug` output so model dumps and log events never
/// carry the plaintext.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn set(&mut self, value: String) {
        self.0 = value;
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***redacted***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let password = Password::new("hunter2");

        let printed = format!("{password:?}");

        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn set_replaces_the_value() {
        let mut password = Password::from("old");
        password.set("new".to_string());

        assert_eq!(password.as_str(), "new");
    }
}
