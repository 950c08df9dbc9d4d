//! Data model listing.

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::Tabled;

use cwmp_model::DataModel;

use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct ModelInfo {
    model: DataModel,
    root: &'static str,
    document: &'static str,
    services: &'static [&'static str],
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Root")]
    root: &'static str,
    #[tabled(rename = "Document")]
    document: &'static str,
    #[tabled(rename = "Services")]
    services: String,
}

impl From<&ModelInfo> for ModelRow {
    fn from(m: &ModelInfo) -> Self {
        Self {
            model: m.model.to_string(),
            root: m.root,
            document: m.document,
            services: m.services.join(", "),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(settings: &Settings) -> Result<(), CliError> {
    let models: Vec<ModelInfo> = DataModel::iter()
        .map(|model| ModelInfo {
            model,
            root: model.root_name(),
            document: model.title(),
            services: DataModel::SERVICES,
        })
        .collect();
    let out = output::render_list(settings.output, &models, |m| ModelRow::from(m), |m| {
        m.model.to_string()
    })?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
