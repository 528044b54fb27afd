//! Generic column-rule application across a whole table.

use crate::domain::Table;
use crate::error::ValidationIssue;
use crate::validate::field::FieldRule;

/// Apply `rules` (column name → rule) to every row of `table` in row order,
/// accumulating every issue tagged with the table's label.
///
/// Rules naming columns outside the table's schema are skipped by contract:
/// the rule sets are shared vocabularies and a table only answers for the
/// columns it actually carries.
pub fn validate_table(table: &Table, rules: &[(&'static str, FieldRule)]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (index, cells) in table.rows().enumerate() {
        for &(column, rule) in rules {
            let Some(at) = table.role().column_index(column) else {
                continue;
            };

            if let Some(kind) = rule.check(&cells[at]) {
                issues.push(ValidationIssue::cell(table.label(), index + 1, column, kind));
            }
        }
    }

    issues
}
