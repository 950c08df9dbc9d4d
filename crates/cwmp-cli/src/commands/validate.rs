//! Constraint checking of a whole document.

use tabled::Tabled;

use cwmp_model::{Violation, validate};

use crate::cli::ValidateArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ViolationRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Problem")]
    message: String,
}

impl From<&Violation> for ViolationRow {
    fn from(v: &Violation) -> Self {
        Self {
            path: v.path.clone(),
            rule: v.rule.to_string(),
            message: v.message.clone(),
        }
    }
}

pub fn handle(args: &ValidateArgs, settings: &Settings) -> Result<(), CliError> {
    let (doc, _) = util::load_document(&args.file)?;
    let violations = validate::validate(doc.root());

    if violations.is_empty() {
        output::print_status(&format!("{} is valid", args.file.display()), settings.quiet);
        return Ok(());
    }

    let out = output::render_list(
        settings.output,
        &violations,
        |v| ViolationRow::from(v),
        ToString::to_string,
    )?;
    output::print_output(&out, settings.quiet);
    Err(CliError::Violations {
        count: violations.len(),
        file: args.file.display().to_string(),
    })
}
