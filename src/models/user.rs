use crate::stores::dataset::DatasetEntry;

/// A ranked leaderboard row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    /// Dataset key, unique per user
    pub id: String,
    /// Display name, not guaranteed unique
    pub name: String,
    /// Banana count
    pub score: i64,
    /// 1-based position by descending score
    pub rank: usize,
    pub last_day_played: String,
    pub longest_streak: u32,
    pub stars: u32,
    pub subscribed: bool,
}

impl UserRecord {
    pub fn from_entry(id: &str, entry: &DatasetEntry, rank: usize) -> Self {
        Self {
            id: id.to_string(),
            name: entry.name.clone(),
            score: entry.score,
            rank,
            last_day_played: entry.last_day_played.clone(),
            longest_streak: entry.longest_streak,
            stars: entry.stars,
            subscribed: entry.subscribed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entry_passes_auxiliary_fields_through() {
        let entry = DatasetEntry {
            name: "Alliyan".to_string(),
            score: 30,
            last_day_played: "2024-05-08".to_string(),
            longest_streak: 5,
            stars: 10,
            subscribed: true,
        };

        let user = UserRecord::from_entry("u1", &entry, 2);

        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Alliyan");
        assert_eq!(user.score, 30);
        assert_eq!(user.rank, 2);
        assert_eq!(user.last_day_played, "2024-05-08");
        assert_eq!(user.longest_streak, 5);
        assert_eq!(user.stars, 10);
        assert!(user.subscribed);
    }
}
