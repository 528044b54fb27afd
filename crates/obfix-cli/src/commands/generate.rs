use std::fs;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::error::CliError;
use crate::input;

use super::report_issues;

pub fn run(args: &GenerateArgs, format: OutputFormat) -> Result<(), CliError> {
    let submission = input::load(&args.input)?;

    // validate before touching the filesystem: a failing submission must
    // leave the out-dir exactly as it was
    let fixture = match submission.validate() {
        Ok(fixture) => fixture,
        Err(issues) => return Err(report_issues(issues, format)),
    };

    fs::create_dir_all(&args.out_dir)?;
    let path = args.out_dir.join(fixture.file_name());
    fs::write(&path, fixture.render())?;

    println!("wrote {}", path.display());
    Ok(())
}
