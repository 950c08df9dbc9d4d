//! Re-encoding: `convert` an existing document, or create a `new` one.

use std::path::Path;

use cwmp_model::{Document, DocumentFormat, rpc, xml};

use crate::cli::{ConvertArgs, Encoding, NewArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

fn encode(doc: &Document, to: Encoding) -> Result<String, CliError> {
    let text = match to {
        Encoding::Xml => doc.render(DocumentFormat::Xml)?,
        Encoding::Json => doc.render(DocumentFormat::Json)?,
        Encoding::Yaml => doc.render(DocumentFormat::Yaml)?,
        Encoding::Params => xml::parameter_list_to_xml(&rpc::flatten(doc.root()))?,
    };
    Ok(text)
}

/// Print to stdout, or write to `out` when given.
fn emit(text: &str, out: Option<&Path>, settings: &Settings) -> Result<(), CliError> {
    match out {
        Some(path) => {
            let mut text = text.to_owned();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            std::fs::write(path, text).map_err(|e| CliError::io(path, e))?;
            output::print_status(&format!("Wrote {}", path.display()), settings.quiet);
        }
        None => output::print_output(text.trim_end(), settings.quiet),
    }
    Ok(())
}

pub fn convert(args: &ConvertArgs, settings: &Settings) -> Result<(), CliError> {
    let (doc, from) = util::load_document(&args.file)?;
    tracing::debug!(%from, to = ?args.to, "converting");
    if let Some(out) = &args.write.write_to {
        util::check_strict(&doc, out, settings)?;
    }
    let text = encode(&doc, args.to)?;
    emit(&text, args.write.write_to.as_deref(), settings)
}

pub fn new(args: &NewArgs, settings: &Settings) -> Result<(), CliError> {
    let model = util::parse_model(args.model.as_deref(), settings)?;
    let doc = model.template();
    let text = encode(&doc, args.to)?;
    emit(&text, args.write.write_to.as_deref(), settings)
}
