use crate::models::action::{Action, SortDirection, SortField};

/// Alternating sort direction for the "Sort by" menu
///
/// Each selection sorts with the current direction and then flips it,
/// starting from ascending.
#[derive(Debug, Default)]
pub struct SortToggle {
    direction: SortDirection,
}

impl SortToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, field: SortField) -> Action<'static> {
        let action = Action::sort(field, self.direction);
        self.direction = self.direction.toggled();
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates_across_fields() {
        let mut toggle = SortToggle::new();

        let expected = [
            (SortField::Score, SortDirection::Asc),
            (SortField::Name, SortDirection::Desc),
            (SortField::Name, SortDirection::Asc),
            (SortField::Stars, SortDirection::Desc),
        ];

        for (field, direction) in expected {
            match toggle.next(field) {
                Action::Sort { field: f, direction: d } => {
                    assert_eq!(f, field);
                    assert_eq!(d, direction);
                }
                other => panic!("unexpected action: {other:?}"),
            }
        }
    }
}
