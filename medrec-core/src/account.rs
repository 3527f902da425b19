//! Operator credentials.

use std::fmt;

/// Credentials supplied by the operator on the command line.
///
/// Only the connection bootstrap reads these; the report engine never does.
#[derive(Clone)]
pub struct Account {
    username: String,
    password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let account = Account::new("clerk", "hunter2");
        let debug = format!("{:?}", account);

        assert!(debug.contains("clerk"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_username_accessor() {
        let account = Account::new("clerk", "");
        assert_eq!(account.username(), "clerk");
        assert!(!account.has_password());
    }
}
