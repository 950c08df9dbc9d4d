// ── Schema listing ──
//
// Walks the type tree rather than a populated instance: absent objects
// and table entries are visited through their default templates, so the
// listing is the same for every document of a model.

use serde::Serialize;

use crate::node::{ChildKind, Node};
use crate::param::{Access, ActiveNotify, Unit};
use crate::value::ParamType;

/// One parameter of a data model, as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSchema {
    /// Full path template, e.g. `Device.Hosts.Host.{i}.PhysAddress`.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub access: Access,
    pub notify: ActiveNotify,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub constraints: String,
    /// Lexical default, when the standard declares one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Every parameter of the model rooted at `root`, in declaration order.
pub fn describe(root: &dyn Node) -> Vec<ParamSchema> {
    let mut out = Vec::new();
    walk(root, &format!("{}.", root.object_name()), &mut |node, at| {
        for info in node.params() {
            out.push(ParamSchema {
                path: format!("{at}{}", info.name),
                kind: info.kind,
                access: info.access,
                notify: info.notify,
                unit: info.unit,
                constraints: info.constraint_summary(),
                default: if info.computed {
                    None
                } else {
                    node.param(info.name).ok().flatten().map(|v| v.to_string())
                },
            });
        }
    });
    out
}

/// Path templates of every object of the model, tables as `Name.{i}.`.
pub fn objects(root: &dyn Node) -> Vec<String> {
    let mut out = Vec::new();
    walk(root, &format!("{}.", root.object_name()), &mut |_, at| {
        out.push(at.to_owned());
    });
    out
}

fn walk(node: &dyn Node, at: &str, visit: &mut dyn FnMut(&dyn Node, &str)) {
    visit(node, at);
    for child in node.children() {
        let Some(template) = node.template(child.name) else {
            continue;
        };
        let child_at = match child.kind {
            ChildKind::Object => format!("{at}{}.", child.name),
            ChildKind::Table => format!("{at}{}.{{i}}.", child.name),
        };
        walk(template.as_ref(), &child_at, visit);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tr098::InternetGatewayDevice;
    use crate::tr181::Device;

    #[test]
    fn lists_nested_tables_with_placeholders() {
        let rows = describe(&Device::default());
        let tone = rows
            .iter()
            .find(|r| {
                r.path
                    == "Device.Services.VoiceService.{i}.VoiceProfile.{i}.Tone.Description.{i}.ToneRepetitions"
            })
            .unwrap();
        assert_eq!(tone.kind, ParamType::UnsignedInt);
        assert_eq!(tone.default.as_deref(), Some("0"));
    }

    #[test]
    fn carries_access_and_defaults() {
        let rows = describe(&Device::default());
        let url = rows
            .iter()
            .find(|r| r.path == "Device.ManagementServer.URL")
            .unwrap();
        assert_eq!(url.access, Access::ReadWrite);
        assert_eq!(url.constraints, "size ..256");
        assert_eq!(url.default, None);

        let enable = rows
            .iter()
            .find(|r| r.path == "Device.ManagementServer.EnableCWMP")
            .unwrap();
        assert_eq!(enable.default.as_deref(), Some("true"));
    }

    #[test]
    fn entry_counts_have_no_default() {
        let rows = describe(&Device::default());
        let counts: Vec<_> = rows
            .iter()
            .filter(|r| r.path.ends_with("NumberOfEntries"))
            .collect();
        assert!(!counts.is_empty());
        for row in counts {
            assert_eq!(row.default, None, "{}", row.path);
            assert_eq!(row.access, Access::ReadOnly);
        }
    }

    #[test]
    fn object_paths_cover_both_roots() {
        let igd = objects(&InternetGatewayDevice::default());
        assert_eq!(igd[0], "InternetGatewayDevice.");
        assert!(igd.iter().any(|p| p == "InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}.WPS."));
        assert!(
            igd.iter()
                .any(|p| p == "InternetGatewayDevice.Services.FAPService.{i}.CellConfig.LTE.EPC.PLMNList.{i}.")
        );

        let device = objects(&Device::default());
        assert!(device.iter().any(|p| p == "Device.GRE.Tunnel.{i}.Interface.{i}.Stats."));
    }
}
