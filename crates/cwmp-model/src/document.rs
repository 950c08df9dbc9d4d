// ── Documents ──
//
// A document is one whole parameter tree under one of the two CWMP
// roots. TR-104 and TR-196 have no root of their own: their service
// objects are mounted under `Services.` of either root.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::error::ModelError;
use crate::node::Node;
use crate::tr098::InternetGatewayDevice;
use crate::tr181::Device;
use crate::xml;

// ── DataModel ───────────────────────────────────────────────────────

/// Root data model of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataModel {
    #[strum(to_string = "tr098")]
    Tr098,
    #[strum(to_string = "tr181")]
    Tr181,
}

impl DataModel {
    /// Name of the root object (and of the XML root element).
    pub fn root_name(self) -> &'static str {
        match self {
            Self::Tr098 => "InternetGatewayDevice",
            Self::Tr181 => "Device",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Tr098 => "TR-098 Internet Gateway Device:1",
            Self::Tr181 => "TR-181 Issue 2 Device:2",
        }
    }

    /// Service documents mounted under `Services.` of either root.
    pub const SERVICES: &'static [&'static str] = &["TR-104 VoiceService:1", "TR-196 FAPService:2"];

    /// A document with every root-level object absent and all declared
    /// defaults in place.
    pub fn template(self) -> Document {
        match self {
            Self::Tr098 => Document::InternetGatewayDevice(Box::default()),
            Self::Tr181 => Document::Device(Box::default()),
        }
    }
}

impl FromStr for DataModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "tr098" | "internetgatewaydevice" | "igd" => Ok(Self::Tr098),
            "tr181" | "device" => Ok(Self::Tr181),
            _ => Err(ModelError::UnknownObject {
                path: format!("{s}."),
            }),
        }
    }
}

// ── DocumentFormat ──────────────────────────────────────────────────

/// On-disk encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DocumentFormat {
    Xml,
    Json,
    #[strum(to_string = "yaml", serialize = "yml")]
    Yaml,
}

impl DocumentFormat {
    /// Format implied by a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        ext.parse().ok()
    }
}

// ── Document ────────────────────────────────────────────────────────

/// A whole parameter tree.
///
/// JSON and YAML use the externally tagged form, `{"Device": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Document {
    InternetGatewayDevice(Box<InternetGatewayDevice>),
    Device(Box<Device>),
}

impl Document {
    pub fn model(&self) -> DataModel {
        match self {
            Self::InternetGatewayDevice(_) => DataModel::Tr098,
            Self::Device(_) => DataModel::Tr181,
        }
    }

    pub fn root(&self) -> &dyn Node {
        match self {
            Self::InternetGatewayDevice(igd) => igd.as_ref(),
            Self::Device(device) => device.as_ref(),
        }
    }

    pub fn root_mut(&mut self) -> &mut dyn Node {
        match self {
            Self::InternetGatewayDevice(igd) => igd.as_mut(),
            Self::Device(device) => device.as_mut(),
        }
    }

    // ── Codecs ──

    /// Decode the XML tree form; the root element selects the model.
    pub fn from_xml(text: &str) -> Result<Self, ModelError> {
        let model: DataModel = xml::root_name(text)?.parse()?;
        let mut doc = model.template();
        xml::read_into(text, doc.root_mut())?;
        Ok(doc)
    }

    pub fn to_xml(&self) -> Result<String, ModelError> {
        xml::to_xml(self.root())
    }

    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let doc: Self = serde_json::from_str(text)?;
        debug!(model = %doc.model(), "decoded JSON document");
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ModelError> {
        let doc: Self = serde_yaml::from_str(text)?;
        debug!(model = %doc.model(), "decoded YAML document");
        Ok(doc)
    }

    pub fn to_yaml(&self) -> Result<String, ModelError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, ModelError> {
        match format {
            DocumentFormat::Xml => Self::from_xml(text),
            DocumentFormat::Json => Self::from_json(text),
            DocumentFormat::Yaml => Self::from_yaml(text),
        }
    }

    pub fn render(&self, format: DocumentFormat) -> Result<String, ModelError> {
        match format {
            DocumentFormat::Xml => self.to_xml(),
            DocumentFormat::Json => self.to_json(),
            DocumentFormat::Yaml => self.to_yaml(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn model_names_parse() {
        assert_eq!("tr181".parse::<DataModel>().unwrap(), DataModel::Tr181);
        assert_eq!("TR-098".parse::<DataModel>().unwrap(), DataModel::Tr098);
        assert_eq!(
            "InternetGatewayDevice".parse::<DataModel>().unwrap(),
            DataModel::Tr098
        );
        assert!("tr069".parse::<DataModel>().is_err());
        assert_eq!(DataModel::Tr098.to_string(), "tr098");
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("cpe.YML")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b/cpe.xml")),
            Some(DocumentFormat::Xml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("cpe")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("cpe.toml")), None);
    }

    #[test]
    fn json_is_externally_tagged() {
        let mut doc = DataModel::Tr181.template();
        let Document::Device(device) = &mut doc else {
            panic!("expected a Device document");
        };
        device.management_server_mut().set_url("http://acs".into());

        let json = doc.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Device"]["ManagementServer"]["URL"], "http://acs");
        assert_eq!(value["Device"]["ManagementServer"]["EnableCWMP"], true);
        assert_eq!(Document::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn xml_root_selects_model() {
        let doc = Document::from_xml("<InternetGatewayDevice><Time/></InternetGatewayDevice>").unwrap();
        assert_eq!(doc.model(), DataModel::Tr098);
        assert!(Document::from_xml("<Router/>").is_err());
    }
}
