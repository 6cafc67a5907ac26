use crate::models::{FieldError, User};
use crate::validation::validate_email_field;

impl User {
    /// Mock identity derived from an email: the name is the local part.
    pub fn from_email(email: Option<&str>) -> Result<Self, Vec<FieldError>> {
        let email = validate_email_field(email)?;
        let name = email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();

        Ok(Self { name, email })
    }
}

/// Explicit holder for the current mock user.
///
/// Passed to whichever layer needs identity; nothing global. There is no
/// credential check and the credit-score flow never reads it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs in with just an email, replacing any previous user.
    pub fn sign_in(&mut self, email: &str) -> Result<&User, Vec<FieldError>> {
        let user = User::from_email(Some(email))?;
        tracing::debug!("Mock sign-in for {}", user.name);
        Ok(self.user.insert(user))
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
