//! Shared helpers for command handlers.

use std::path::Path;

use cwmp_model::{DataModel, Document, DocumentFormat, ParamPath, validate};

use crate::config::Settings;
use crate::error::CliError;

/// Read and decode a document. The encoding comes from the extension,
/// or from the first significant character for unknown extensions.
pub fn load_document(path: &Path) -> Result<(Document, DocumentFormat), CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let format = DocumentFormat::from_path(path)
        .or_else(|| sniff_format(&text))
        .ok_or_else(|| CliError::UnknownFormat {
            path: path.display().to_string(),
        })?;
    let doc = Document::parse(&text, format).map_err(|e| CliError::decode(path, e))?;
    tracing::info!(path = %path.display(), model = %doc.model(), %format, "loaded document");
    Ok((doc, format))
}

fn sniff_format(text: &str) -> Option<DocumentFormat> {
    match text.trim_start().chars().next()? {
        '<' => Some(DocumentFormat::Xml),
        '{' => Some(DocumentFormat::Json),
        _ => Some(DocumentFormat::Yaml),
    }
}

/// Encode and write a document; the target's extension wins over
/// `fallback`.
pub fn save_document(
    doc: &Document,
    path: &Path,
    fallback: DocumentFormat,
    settings: &Settings,
) -> Result<(), CliError> {
    check_strict(doc, path, settings)?;
    let format = DocumentFormat::from_path(path).unwrap_or(fallback);
    let mut text = doc.render(format)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    std::fs::write(path, text).map_err(|e| CliError::io(path, e))?;
    tracing::info!(path = %path.display(), %format, "wrote document");
    Ok(())
}

/// With `strict_validation`, refuse to write a document that has
/// constraint violations.
pub fn check_strict(doc: &Document, target: &Path, settings: &Settings) -> Result<(), CliError> {
    if !settings.strict_validation {
        return Ok(());
    }
    let violations = validate::validate(doc.root());
    if violations.is_empty() {
        return Ok(());
    }
    Err(CliError::Violations {
        count: violations.len(),
        file: target.display().to_string(),
    })
}

pub fn parse_path(text: &str) -> Result<ParamPath, CliError> {
    Ok(ParamPath::parse(text)?)
}

pub fn parse_model(explicit: Option<&str>, settings: &Settings) -> Result<DataModel, CliError> {
    let raw = explicit.unwrap_or(&settings.model);
    raw.parse().map_err(|_| CliError::Validation {
        field: "model".into(),
        reason: format!("'{raw}' is not a data model; expected tr098 or tr181"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_by_first_character() {
        assert_eq!(sniff_format("  <Device/>"), Some(DocumentFormat::Xml));
        assert_eq!(sniff_format("{\"Device\":{}}"), Some(DocumentFormat::Json));
        assert_eq!(sniff_format("Device: {}"), Some(DocumentFormat::Yaml));
        assert_eq!(sniff_format("   "), None);
    }
}
