use crate::core::state::LeaderboardState;
use crate::models::action::{Action, SortDirection, SortField};
use crate::models::user::UserRecord;
use crate::stores::dataset::Dataset;
use crate::utils::collation::locale_compare;
use std::cmp::Ordering;
use std::sync::Arc;

/// Number of top-ranked rows shown around a search hit
pub const SEARCH_WINDOW: usize = 10;

pub const USER_NOT_FOUND_MESSAGE: &str =
    "This username does not exist! Please specify an existing user name!";

/// Apply one action to a snapshot, producing the next snapshot
pub fn reduce(state: &LeaderboardState, action: &Action<'_>) -> LeaderboardState {
    match action {
        Action::Load { dataset } => load(state, dataset),
        Action::Search {
            keyword,
            suppress_error,
        } => search(state, keyword, *suppress_error),
        Action::Sort { field, direction } => sort(state, *field, *direction),
        Action::SetError { message } => set_error(state, message),
    }
}

fn load(state: &LeaderboardState, dataset: &Dataset) -> LeaderboardState {
    let mut ranked: Vec<_> = dataset.entries().iter().collect();
    // stable: equal scores keep dataset order
    ranked.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score));

    let all_users = ranked
        .into_iter()
        .enumerate()
        .map(|(index, (id, entry))| Arc::new(UserRecord::from_entry(id, entry, index + 1)))
        .collect();

    LeaderboardState {
        all_users,
        ..state.clone()
    }
}

fn sort(state: &LeaderboardState, field: SortField, direction: SortDirection) -> LeaderboardState {
    let mut users = state.visible_users.clone();
    users.sort_by(|a, b| compare_users(a, b, field, direction));

    LeaderboardState {
        visible_users: users,
        ..state.clone()
    }
}

fn compare_users(a: &UserRecord, b: &UserRecord, field: SortField, direction: SortDirection) -> Ordering {
    match (field.numeric_key(a), field.numeric_key(b)) {
        (Some(key_a), Some(key_b)) => direction
            .apply(key_a.cmp(&key_b))
            .then_with(|| locale_compare(&a.name, &b.name)),
        _ => direction.apply(locale_compare(&a.name, &b.name)),
    }
}

fn search(state: &LeaderboardState, keyword: &str, suppress_error: bool) -> LeaderboardState {
    let needle = keyword.trim().to_lowercase();

    if needle.is_empty() {
        return LeaderboardState {
            all_users: state.all_users.clone(),
            ..LeaderboardState::default()
        };
    }

    let Some(found) = state
        .all_users
        .iter()
        .find(|user| user.name.to_lowercase().contains(&needle))
    else {
        return if suppress_error {
            LeaderboardState {
                visible_users: Vec::new(),
                error_message: None,
                highlighted_user_id: None,
                ..state.clone()
            }
        } else {
            LeaderboardState {
                error_message: Some(USER_NOT_FOUND_MESSAGE.to_string()),
                highlighted_user_id: None,
                ..state.clone()
            }
        };
    };

    let mut window: Vec<_> = state.all_users.iter().take(SEARCH_WINDOW).cloned().collect();

    if !window.iter().any(|user| Arc::ptr_eq(user, found)) {
        if let Some(last) = window.last_mut() {
            *last = Arc::clone(found);
        }
    }

    LeaderboardState {
        visible_users: window,
        error_message: None,
        highlighted_user_id: Some(found.id.clone()),
        ..state.clone()
    }
}

fn set_error(state: &LeaderboardState, message: &str) -> LeaderboardState {
    LeaderboardState {
        error_message: (!message.is_empty()).then(|| message.to_string()),
        ..state.clone()
    }
}
