use crate::core::reducer::reduce;
use crate::core::state::LeaderboardState;
use crate::models::action::Action;
use crate::stores::dataset::Dataset;
use std::sync::Arc;
use tracing::{debug, info};

/// Single-writer holder of the current leaderboard snapshot
///
/// Actions are applied one at a time in dispatch order. Readers get a shared
/// snapshot that stays valid after later dispatches replace it.
pub struct LeaderboardStore {
    dataset: Dataset,
    state: Arc<LeaderboardState>,
}

impl LeaderboardStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            state: Arc::new(LeaderboardState::default()),
        }
    }

    /// Rank the roster from the store's dataset
    pub fn mount(&mut self) -> Arc<LeaderboardState> {
        let next = reduce(&self.state, &Action::Load { dataset: &self.dataset });
        self.state = Arc::new(next);

        info!(
            users = self.state.all_users.len(),
            top_score = self.state.all_users.first().map(|user| user.score),
            "Leaderboard roster loaded"
        );

        Arc::clone(&self.state)
    }

    /// Apply an action and return the new snapshot
    pub fn dispatch(&mut self, action: &Action<'_>) -> Arc<LeaderboardState> {
        match action {
            Action::Sort { field, direction } => {
                debug!(
                    action = action.kind(),
                    field = %field,
                    direction = %direction,
                    "Dispatching action"
                );
            }
            _ => debug!(action = action.kind(), "Dispatching action"),
        }

        let next = reduce(&self.state, action);

        if let Action::Search { keyword, suppress_error } = action {
            if next.highlighted_user_id.is_none() && !keyword.trim().is_empty() {
                debug!(
                    keyword = %keyword,
                    suppress_error = *suppress_error,
                    "Search found no matching user"
                );
            }
        }

        debug!(
            visible = ?next.visible_ids(),
            highlighted = ?next.highlighted_user_id,
            has_error = next.error_message.is_some(),
            "Action applied"
        );

        self.state = Arc::new(next);
        Arc::clone(&self.state)
    }

    /// Current snapshot
    pub fn state(&self) -> Arc<LeaderboardState> {
        Arc::clone(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reducer::USER_NOT_FOUND_MESSAGE;
    use crate::models::action::{SortDirection, SortField};

    fn store() -> LeaderboardStore {
        let dataset = Dataset::from_json_str(
            r#"{"u1": {"name": "Alliyan", "bananas": 30}, "u2": {"name": "John", "bananas": 40}}"#,
        )
        .unwrap();
        LeaderboardStore::new(dataset)
    }

    #[test]
    fn test_new_store_starts_empty() {
        let store = store();
        assert_eq!(*store.state(), LeaderboardState::default());
    }

    #[test]
    fn test_mount_loads_roster() {
        let mut store = store();
        let state = store.mount();

        assert_eq!(state.all_users.len(), 2);
        assert_eq!(state.all_users[0].name, "John");
        assert!(state.visible_users.is_empty());
    }

    #[test]
    fn test_dispatch_sequence() {
        let mut store = store();
        store.mount();

        let found = store.dispatch(&Action::search("alliyan"));
        assert_eq!(found.highlighted_user_id.as_deref(), Some("u1"));

        let sorted = store.dispatch(&Action::sort(SortField::Name, SortDirection::Asc));
        assert_eq!(sorted.visible_ids(), vec!["u1", "u2"]);

        let missing = store.dispatch(&Action::search("Charlie"));
        assert_eq!(missing.error_text(), USER_NOT_FOUND_MESSAGE);
        assert_eq!(missing.visible_ids(), vec!["u1", "u2"]);

        let dismissed = store.dispatch(&Action::set_error(""));
        assert_eq!(dismissed.error_message, None);
    }

    #[test]
    fn test_earlier_snapshots_are_not_mutated() {
        let mut store = store();
        store.mount();

        let before = store.dispatch(&Action::search("john"));
        store.dispatch(&Action::search_suppressed("Charlie"));

        assert_eq!(before.highlighted_user_id.as_deref(), Some("u2"));
        assert_eq!(before.visible_users.len(), 2);
        assert!(store.state().visible_users.is_empty());
    }
}
