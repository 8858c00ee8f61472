use crate::core::error::ActionError;
use crate::models::user::UserRecord;
use crate::stores::dataset::Dataset;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Columns the leaderboard can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Score,
    Name,
    Rank,
    LongestStreak,
    Stars,
}

impl SortField {
    /// Numeric sort key, `None` for the name column
    pub fn numeric_key(self, user: &UserRecord) -> Option<i64> {
        match self {
            SortField::Score => Some(user.score),
            SortField::Name => None,
            SortField::Rank => Some(i64::try_from(user.rank).unwrap_or(i64::MAX)),
            SortField::LongestStreak => Some(i64::from(user.longest_streak)),
            SortField::Stars => Some(i64::from(user.stars)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Score => "bananas",
            SortField::Name => "name",
            SortField::Rank => "rank",
            SortField::LongestStreak => "longestStreak",
            SortField::Stars => "stars",
        }
    }
}

impl FromStr for SortField {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bananas" | "score" => Ok(SortField::Score),
            "name" => Ok(SortField::Name),
            "rank" => Ok(SortField::Rank),
            "longestStreak" | "streak" => Ok(SortField::LongestStreak),
            "stars" => Ok(SortField::Stars),
            other => Err(ActionError::UnknownSortField(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ActionError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State transitions understood by the leaderboard reducer
#[derive(Debug, Clone)]
pub enum Action<'a> {
    /// Rank the roster from the given dataset
    Load { dataset: &'a Dataset },
    /// Find the first user whose name contains `keyword`
    Search { keyword: String, suppress_error: bool },
    /// Reorder the visible rows
    Sort { field: SortField, direction: SortDirection },
    /// Replace the error banner, an empty message clears it
    SetError { message: String },
}

impl Action<'_> {
    pub fn search(keyword: impl Into<String>) -> Self {
        Action::Search {
            keyword: keyword.into(),
            suppress_error: false,
        }
    }

    /// Search used for live typing feedback, a miss shows no banner
    pub fn search_suppressed(keyword: impl Into<String>) -> Self {
        Action::Search {
            keyword: keyword.into(),
            suppress_error: true,
        }
    }

    pub fn sort(field: SortField, direction: SortDirection) -> Self {
        Action::Sort { field, direction }
    }

    pub fn set_error(message: impl Into<String>) -> Self {
        Action::SetError {
            message: message.into(),
        }
    }

    /// Short name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Load { .. } => "load",
            Action::Search { .. } => "search",
            Action::Sort { .. } => "sort",
            Action::SetError { .. } => "set_error",
        }
    }
}
