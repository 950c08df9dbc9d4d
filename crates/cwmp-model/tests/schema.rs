//! Schema-level properties of the generated data models.
#![allow(clippy::unwrap_used)]

use strum::IntoEnumIterator;

use cwmp_model::schema::{self, ParamSchema};
use cwmp_model::{ChildKind, DataModel, Node};

/// Visit every object template below `node` with its dynamic path.
fn each_object(node: &dyn Node, at: &str, visit: &mut dyn FnMut(&dyn Node, &str)) {
    visit(node, at);
    for child in node.children() {
        let template = node.template(child.name).unwrap();
        let child_at = match child.kind {
            ChildKind::Object => format!("{at}{}.", child.name),
            ChildKind::Table => format!("{at}{}.{{i}}.", child.name),
        };
        each_object(template.as_ref(), &child_at, visit);
    }
}

#[test]
fn dynamic_paths_end_with_the_declared_schema_path() {
    for model in DataModel::iter() {
        let doc = model.template();
        let root = doc.root();
        let mut seen = 0;
        each_object(root, &format!("{}.", root.object_name()), &mut |node, at| {
            assert!(
                at.ends_with(node.schema_path()),
                "{at} does not end with {}",
                node.schema_path()
            );
            seen += 1;
        });
        assert!(seen > 20, "{model}: only {seen} objects");
    }
}

#[test]
fn both_roots_mount_both_services() {
    for model in DataModel::iter() {
        let objects = schema::objects(model.template().root());
        let root = model.root_name();
        for service in ["VoiceService", "FAPService"] {
            let wanted = format!("{root}.Services.{service}.{{i}}.");
            assert!(objects.contains(&wanted), "{wanted} missing");
        }
    }
}

#[test]
fn parameter_paths_are_unique() {
    for model in DataModel::iter() {
        let params = schema::describe(model.template().root());
        let mut paths: Vec<&str> = params.iter().map(|p| p.path.as_str()).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total, "{model} declares a parameter twice");
    }
}

fn line(p: &ParamSchema) -> String {
    let mut parts = vec![p.path.clone(), p.kind.to_string(), p.access.to_string()];
    if !p.constraints.is_empty() {
        parts.push(p.constraints.clone());
    }
    if let Some(default) = &p.default {
        parts.push(format!("= {default}"));
    }
    parts.join(" ")
}

#[test]
fn management_server_schema() {
    let listing: Vec<String> = schema::describe(DataModel::Tr181.template().root())
        .iter()
        .filter(|p| p.path.starts_with("Device.ManagementServer."))
        .map(line)
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    Device.ManagementServer.EnableCWMP xsd:boolean W = true
    Device.ManagementServer.URL xsd:string W size ..256
    Device.ManagementServer.Username xsd:string W size ..256
    Device.ManagementServer.Password xsd:string W size ..256
    Device.ManagementServer.PeriodicInformEnable xsd:boolean W
    Device.ManagementServer.PeriodicInformInterval xsd:unsignedInt W range 1..
    Device.ManagementServer.PeriodicInformTime xsd:dateTime W
    Device.ManagementServer.ParameterKey xsd:string R size ..32
    Device.ManagementServer.ConnectionRequestURL xsd:string R size ..256
    Device.ManagementServer.ConnectionRequestUsername xsd:string W size ..256
    Device.ManagementServer.ConnectionRequestPassword xsd:string W size ..256
    Device.ManagementServer.UpgradesManaged xsd:boolean W
    Device.ManagementServer.DefaultActiveNotificationThrottle xsd:unsignedInt W
    Device.ManagementServer.CWMPRetryMinimumWaitInterval xsd:unsignedInt W range 1..65535 = 5
    Device.ManagementServer.CWMPRetryIntervalMultiplier xsd:unsignedInt W range 1000..65535 = 2000
    Device.ManagementServer.InstanceMode xsd:string W enum [InstanceNumber, InstanceAlias] = InstanceNumber
    Device.ManagementServer.AliasBasedAddressing xsd:boolean R
    ");
}
