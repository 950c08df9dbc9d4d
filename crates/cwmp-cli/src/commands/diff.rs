//! Parameter-level comparison of two documents.

use tabled::Tabled;

use cwmp_model::{Change, diff};

use crate::cli::{DiffArgs, OutputFormat};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ChangeRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "Parameter")]
    path: String,
    #[tabled(rename = "Old")]
    old: String,
    #[tabled(rename = "New")]
    new: String,
}

impl From<&Change> for ChangeRow {
    fn from(c: &Change) -> Self {
        let (marker, old, new) = match c {
            Change::Added { value, .. } => ("+", String::new(), value.clone()),
            Change::Removed { value, .. } => ("-", value.clone(), String::new()),
            Change::Modified { old, new, .. } => ("~", old.clone(), new.clone()),
        };
        Self {
            marker,
            path: c.path().to_owned(),
            old,
            new,
        }
    }
}

pub fn handle(args: &DiffArgs, settings: &Settings) -> Result<(), CliError> {
    let (old, _) = util::load_document(&args.old)?;
    let (new, _) = util::load_document(&args.new)?;

    if old.model() != new.model() {
        return Err(CliError::Validation {
            field: "documents".into(),
            reason: format!(
                "cannot compare a {} document with a {} document",
                old.model(),
                new.model()
            ),
        });
    }

    let changes = diff(old.root(), new.root());
    if changes.is_empty() {
        output::print_status("No differences", settings.quiet);
        return Ok(());
    }

    let color = settings.output == OutputFormat::Plain && output::should_color(settings.color);
    let out = output::render_list(settings.output, &changes, |c| ChangeRow::from(c), |c| {
        output::paint_change(c, color)
    })?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
