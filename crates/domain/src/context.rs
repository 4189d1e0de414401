//! Request context: attributes the work triggered by a message to a caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ContextId, UserId};

/// UTC timestamp recorded when a context is created.
pub type Timestamp = DateTime<Utc>;

/// Per-request context handed to the message handler.
///
/// Any state change caused while handling a message should carry this
/// context so it can be traced back to the user who sent it. Contexts are
/// never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Unique id of this context.
    pub id: ContextId,
    /// The user the work is attributed to, if any.
    pub user_id: Option<UserId>,
    /// The context that caused this one, if any.
    pub parent_id: Option<ContextId>,
    /// When the context was created.
    pub created_at: Timestamp,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            id: ContextId::new(),
            user_id: None,
            parent_id: None,
            created_at: Utc::now(),
        }
    }
}

impl Context {
    /// Create an anonymous context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context attributed to `user_id`.
    #[must_use]
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Derive a child context that keeps the same user.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            user_id: self.user_id,
            parent_id: Some(self.id),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_carry_user_id_when_built_for_user() {
        let user_id = UserId::new();
        let ctx = Context::for_user(user_id);
        assert_eq!(ctx.user_id, Some(user_id));
        assert!(ctx.parent_id.is_none());
    }

    #[test]
    fn should_generate_fresh_id_per_context() {
        let user_id = UserId::new();
        let a = Context::for_user(user_id);
        let b = Context::for_user(user_id);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_link_child_to_parent() {
        let parent = Context::for_user(UserId::new());
        let child = parent.child();
        assert_eq!(child.parent_id, Some(parent.id));
        assert_eq!(child.user_id, parent.user_id);
        assert_ne!(child.id, parent.id);
    }

    #[test]
    fn should_be_anonymous_by_default() {
        assert!(Context::new().user_id.is_none());
    }
}
