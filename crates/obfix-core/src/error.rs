use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::domain::OrderType;

/// Reason classification for a single validation issue.
///
/// Every variant is the reason clause of the rendered message; the table
/// label, row, and column framing live on [`ValidationIssue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    #[error("must be a positive integer or '-'")]
    NotPositiveInteger,

    #[error("must be a positive integer")]
    CounterNotPositiveInteger,

    #[error("must be in format {pattern} or '-'")]
    BadDateTime { pattern: &'static str },

    #[error("must be digits_part2 where part2 is exactly 4 alphanumeric characters, or '-'")]
    BadParticipantId,

    #[error("must be exactly 3 letters (A-Z) or '-'")]
    BadSymbol,

    #[error("is required")]
    Required,

    #[error("cannot be '-'")]
    ForbiddenPlaceholder,

    #[error("is required for OrderType '{order_type}'")]
    RequiredForOrderType { order_type: OrderType },

    #[error("must be one of Add, Modify, Cancel: got '{value}'")]
    InvalidAction { value: String },

    #[error("'ActivateTime' cannot be after 'DeactivateTime'")]
    ActivateAfterDeactivate,
}

/// One validation finding, attributable to a (table, row, column) triple.
///
/// Cross-field issues reference a row without a single column. `row` is
/// 1-based for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub table: &'static str,
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<&'static str>,
    #[serde(rename = "reason", serialize_with = "serialize_kind")]
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn cell(table: &'static str, row: usize, column: &'static str, kind: IssueKind) -> Self {
        Self {
            table,
            row,
            column: Some(column),
            kind,
        }
    }

    pub fn row(table: &'static str, row: usize, kind: IssueKind) -> Self {
        Self {
            table,
            row,
            column: None,
            kind,
        }
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.column {
            Some(column) => write!(
                f,
                "[{}] Row {} in column '{}' {}.",
                self.table, self.row, column, self.kind
            ),
            None => write!(f, "[{}] Row {} {}.", self.table, self.row, self.kind),
        }
    }
}

fn serialize_kind<S>(kind: &IssueKind, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&kind.to_string())
}
