use crate::cli::{CheckArgs, OutputFormat};
use crate::error::CliError;
use crate::input;

use super::report_issues;

pub fn run(args: &CheckArgs, format: OutputFormat) -> Result<(), CliError> {
    let submission = input::load(&args.input)?;
    let order_count = submission.incoming_orders.len();

    match submission.validate() {
        Ok(_) => {
            match format {
                OutputFormat::Text => println!("ok: {order_count} incoming order(s) validated"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "status": "ok", "incoming_orders": order_count })
                ),
            }
            Ok(())
        }
        Err(issues) => Err(report_issues(issues, format)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::*;

    fn write_submission(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("submission.json");
        fs::write(&path, body).expect("submission written");
        path
    }

    fn dir_entries(dir: &Path) -> usize {
        fs::read_dir(dir).expect("dir readable").count()
    }

    #[test]
    fn check_accepts_a_valid_submission_without_writing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = write_submission(
            dir.path(),
            r#"{
                "test_name": "valid",
                "incoming_orders": [{
                    "OrderCounter": 1, "Action": "Add", "Symbol": "ABC",
                    "Price": 100, "Quantity": 10, "ParticipantID": "1_AB12"
                }]
            }"#,
        );

        run(&CheckArgs { input }, OutputFormat::Text).expect("must succeed");

        // only the submission document itself remains
        assert_eq!(dir_entries(dir.path()), 1);
    }

    #[test]
    fn check_reports_issues_and_still_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = write_submission(
            dir.path(),
            r#"{"test_name": "invalid", "trades": [{"Symbol": "TOOLONG"}]}"#,
        );

        let error = run(&CheckArgs { input }, OutputFormat::Text).expect_err("must fail");

        assert!(matches!(error, CliError::Validation { count: 1 }));
        assert_eq!(dir_entries(dir.path()), 1);
    }
}
