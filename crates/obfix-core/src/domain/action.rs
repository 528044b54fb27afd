use std::fmt::{Display, Formatter};

/// Lifecycle operation of an incoming order row.
///
/// `Cancel` rows restate only the order counter; all other detail columns are
/// exempt from validation for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Modify,
    Cancel,
}

impl Action {
    pub const ALL: [Self; 3] = [Self::Add, Self::Modify, Self::Cancel];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Modify => "Modify",
            Self::Cancel => "Cancel",
        }
    }

    /// Interpret a cell value as an action. Anything outside the closed set,
    /// including the placeholder, is invalid.
    pub fn from_cell(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == value.trim())
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_action() {
        assert_eq!(Action::from_cell("Cancel"), Some(Action::Cancel));
        assert_eq!(Action::from_cell(" Add "), Some(Action::Add));
    }

    #[test]
    fn rejects_unknown_action() {
        assert_eq!(Action::from_cell("Delete"), None);
        assert_eq!(Action::from_cell("-"), None);
    }
}
