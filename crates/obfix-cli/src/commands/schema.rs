use obfix_core::{Action, OrderType, TableRole};

use crate::error::CliError;

/// Print the submission vocabulary: one line per table role with its column
/// schema, then the enumerated Action and OrderType values.
pub fn run() -> Result<(), CliError> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut out = String::from("tables:\n");
    for role in TableRole::ALL {
        out.push_str(&format!("  {}: {}\n", role.label(), role.columns().join(", ")));
    }

    out.push_str(&format!(
        "actions: {}\n",
        Action::ALL.map(Action::as_str).join(", ")
    ));
    out.push_str(&format!(
        "order types: {}\n",
        OrderType::ALL.map(OrderType::as_str).join(", ")
    ));

    out
}
