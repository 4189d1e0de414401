//! User: the authenticated principal behind an inbound request.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::UserId;

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Create a user after checking the name is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(id: UserId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self { id, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_with_name() {
        let id = UserId::new();
        let user = User::new(id, "Alexa Cloud").unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Alexa Cloud");
    }

    #[test]
    fn should_reject_blank_name() {
        assert_eq!(
            User::new(UserId::new(), "   "),
            Err(ValidationError::EmptyName)
        );
    }
}
