//! Schema listing: declared parameters or object paths of a data model.

use tabled::Tabled;

use cwmp_model::{ParamSchema, schema};

use crate::cli::SchemaArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ParamRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Access")]
    access: String,
    #[tabled(rename = "Constraints")]
    constraints: String,
    #[tabled(rename = "Default")]
    default: String,
}

impl From<&ParamSchema> for ParamRow {
    fn from(p: &ParamSchema) -> Self {
        Self {
            path: p.path.clone(),
            kind: p.kind.to_string(),
            access: p.access.to_string(),
            constraints: p.constraints.clone(),
            default: p.default.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct ObjectRow {
    #[tabled(rename = "Object")]
    path: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &SchemaArgs, settings: &Settings) -> Result<(), CliError> {
    let model = util::parse_model(args.model.as_deref(), settings)?;
    let template = model.template();
    let prefix = args.prefix.as_deref().unwrap_or_default();

    let out = if args.objects {
        let paths: Vec<String> = schema::objects(template.root())
            .into_iter()
            .filter(|p| p.starts_with(prefix))
            .collect();
        output::render_list(
            settings.output,
            &paths,
            |p| ObjectRow { path: p.clone() },
            Clone::clone,
        )?
    } else {
        let params: Vec<ParamSchema> = schema::describe(template.root())
            .into_iter()
            .filter(|p| p.path.starts_with(prefix))
            .collect();
        output::render_list(settings.output, &params, |p| ParamRow::from(p), |p| {
            format!("{} {} {}", p.path, p.kind, p.access)
        })?
    };
    tracing::debug!(%model, prefix, "rendered schema");
    output::print_output(&out, settings.quiet);
    Ok(())
}
