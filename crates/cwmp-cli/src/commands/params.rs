//! Parameter RPC handlers: get, names, set, add, delete.
//!
//! Reads work on a loaded document; writes load, apply the operation and
//! store the result back (or to `--write-to`) in the source encoding.

use std::path::Path;

use tabled::Tabled;

use cwmp_model::{ParamPath, ParameterInfo, ParameterValue, rpc};

use crate::cli::{GetArgs, NamesArgs, ObjectArgs, SetArgs, WriteArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "Parameter")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&ParameterValue> for ValueRow {
    fn from(p: &ParameterValue) -> Self {
        Self {
            name: p.name.clone(),
            kind: p.value.kind().to_string(),
            value: p.value.to_string(),
        }
    }
}

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Writable")]
    writable: &'static str,
}

impl From<&ParameterInfo> for NameRow {
    fn from(p: &ParameterInfo) -> Self {
        Self {
            name: p.name.clone(),
            writable: if p.writable { "yes" } else { "no" },
        }
    }
}

// ── Reads ───────────────────────────────────────────────────────────

pub fn get(args: &GetArgs, settings: &Settings) -> Result<(), CliError> {
    let (doc, _) = util::load_document(&args.file)?;
    let paths = if args.paths.is_empty() {
        vec![ParamPath::root()]
    } else {
        args.paths
            .iter()
            .map(|p| util::parse_path(p))
            .collect::<Result<Vec<_>, _>>()?
    };

    let values = rpc::get_parameter_values(doc.root(), &paths)
        .map_err(|e| CliError::in_file(e, &args.file))?;
    let out = output::render_list(settings.output, &values, |v| ValueRow::from(v), |p| {
        format!("{}={}", p.name, p.value)
    })?;
    output::print_output(&out, settings.quiet);
    Ok(())
}

pub fn names(args: &NamesArgs, settings: &Settings) -> Result<(), CliError> {
    let (doc, _) = util::load_document(&args.file)?;
    let path = util::parse_path(args.path.as_deref().unwrap_or_default())?;

    let names = rpc::get_parameter_names(doc.root(), &path, args.next_level)
        .map_err(|e| CliError::in_file(e, &args.file))?;
    let out = output::render_list(settings.output, &names, |n| NameRow::from(n), |p| {
        format!("{} {}", p.name, if p.writable { "rw" } else { "r" })
    })?;
    output::print_output(&out, settings.quiet);
    Ok(())
}

// ── Writes ──────────────────────────────────────────────────────────

fn split_assignment(raw: &str) -> Result<(&str, &str), CliError> {
    raw.split_once('=').ok_or_else(|| CliError::Validation {
        field: "assignment".into(),
        reason: format!("'{raw}' is not of the form NAME=VALUE"),
    })
}

fn target<'a>(file: &'a Path, write: &'a WriteArgs) -> &'a Path {
    write.write_to.as_deref().unwrap_or(file)
}

pub fn set(args: &SetArgs, settings: &Settings) -> Result<(), CliError> {
    let assignments = args
        .assignments
        .iter()
        .map(|a| split_assignment(a))
        .collect::<Result<Vec<_>, _>>()?;

    let (mut doc, format) = util::load_document(&args.file)?;
    rpc::set_parameter_values(doc.root_mut(), &assignments)
        .map_err(|e| CliError::in_file(e, &args.file))?;
    util::save_document(&doc, target(&args.file, &args.write), format, settings)?;

    output::print_status(
        &format!("Set {} parameter(s)", assignments.len()),
        settings.quiet,
    );
    Ok(())
}

pub fn add(args: &ObjectArgs, settings: &Settings) -> Result<(), CliError> {
    let path = util::parse_path(&args.path)?;
    let (mut doc, format) = util::load_document(&args.file)?;
    let instance =
        rpc::add_object(doc.root_mut(), &path).map_err(|e| CliError::in_file(e, &args.file))?;
    util::save_document(&doc, target(&args.file, &args.write), format, settings)?;

    // The new instance number goes to stdout for scripting
    output::print_output(&instance.to_string(), settings.quiet);
    Ok(())
}

pub fn delete(args: &ObjectArgs, settings: &Settings) -> Result<(), CliError> {
    let path = util::parse_path(&args.path)?;
    let (mut doc, format) = util::load_document(&args.file)?;
    rpc::delete_object(doc.root_mut(), &path).map_err(|e| CliError::in_file(e, &args.file))?;
    util::save_document(&doc, target(&args.file, &args.write), format, settings)?;

    output::print_status(&format!("Deleted {path}"), settings.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(
            split_assignment("Device.X.Cmd=a=b").unwrap(),
            ("Device.X.Cmd", "a=b")
        );
        assert_eq!(split_assignment("Device.X.Empty=").unwrap(), ("Device.X.Empty", ""));
        assert!(split_assignment("Device.X.Cmd").is_err());
    }
}
