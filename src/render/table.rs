use crate::core::config::DisplayConfig;
use crate::core::state::LeaderboardState;

const NAME_WIDTH: usize = 24;
const EMPTY_TEXT: &str = "No Data Found";

/// Render a snapshot as a plain-text table
///
/// The error banner, when set, is printed above the rows.
pub fn render(state: &LeaderboardState, display: &DisplayConfig) -> String {
    let mut out = String::with_capacity(64 + state.visible_users.len() * 48);
    let marker_width = display.highlight_marker.chars().count();

    if let Some(error) = &state.error_message {
        out.push_str(&format!("! {error}\n"));
    }

    if !state.has_visible_users() {
        out.push_str(EMPTY_TEXT);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("{:marker_width$} ", ""));
    if display.show_rank {
        out.push_str(&format!("{:>4}  ", "Rank"));
    }
    out.push_str(&format!("{:<NAME_WIDTH$}  {:>8}\n", "Name", "Bananas"));

    for user in &state.visible_users {
        let marker = if state.is_highlighted(user) {
            display.highlight_marker.as_str()
        } else {
            ""
        };

        out.push_str(&format!("{marker:marker_width$} "));
        if display.show_rank {
            out.push_str(&format!("{:>4}  ", user.rank));
        }
        out.push_str(&format!("{:<NAME_WIDTH$}  {:>8}\n", user.name, user.score));
    }

    out
}
