// Leaderboard snapshot (LeaderboardState)

use crate::models::user::UserRecord;
use std::sync::Arc;

/// Immutable leaderboard snapshot
///
/// Every dispatched action produces a new value. Rows are shared through
/// `Arc`, so `visible_users` always holds the very records of `all_users`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardState {
    /// Full roster, ranked by descending score
    pub all_users: Vec<Arc<UserRecord>>,

    /// Rows currently displayed after search and sort
    pub visible_users: Vec<Arc<UserRecord>>,

    /// Banner text, `None` when no error is shown
    pub error_message: Option<String>,

    /// Id of the last user found by search
    pub highlighted_user_id: Option<String>,
}

impl LeaderboardState {
    /// Banner text, empty when no error is shown
    pub fn error_text(&self) -> &str {
        self.error_message.as_deref().unwrap_or("")
    }

    pub fn has_visible_users(&self) -> bool {
        !self.visible_users.is_empty()
    }

    pub fn is_highlighted(&self, user: &UserRecord) -> bool {
        self.highlighted_user_id.as_deref() == Some(user.id.as_str())
    }

    /// Ids of the visible rows in display order
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible_users.iter().map(|user| user.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> Arc<UserRecord> {
        Arc::new(UserRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            score: 1,
            rank: 1,
            last_day_played: String::new(),
            longest_streak: 0,
            stars: 0,
            subscribed: false,
        })
    }

    #[test]
    fn test_default_is_empty() {
        let state = LeaderboardState::default();
        assert!(state.all_users.is_empty());
        assert!(!state.has_visible_users());
        assert_eq!(state.error_text(), "");
        assert!(state.highlighted_user_id.is_none());
    }

    #[test]
    fn test_highlight_lookup() {
        let first = user("u1");
        let second = user("u2");
        let state = LeaderboardState {
            visible_users: vec![Arc::clone(&first), Arc::clone(&second)],
            highlighted_user_id: Some("u2".to_string()),
            ..Default::default()
        };

        assert!(!state.is_highlighted(&first));
        assert!(state.is_highlighted(&second));
        assert_eq!(state.visible_ids(), vec!["u1", "u2"]);
    }
}
