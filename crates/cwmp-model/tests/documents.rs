//! Integration tests for whole documents: decoding the fixtures,
//! round trips through every encoding and parameter operations on the
//! decoded trees.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use cwmp_model::tr181::{Device, ManagementServer};
use cwmp_model::{
    Change, DataModel, Document, DocumentFormat, ModelError, ParamPath, Value, diff, rpc,
    validate, xml,
};

const DEVICE: &str = include_str!("fixtures/device.xml");
const IGD: &str = include_str!("fixtures/igd.xml");

fn path(text: &str) -> ParamPath {
    ParamPath::parse(text).unwrap()
}

fn value_of(doc: &Document, name: &str) -> Option<Value> {
    rpc::get_parameter_values(doc.root(), &[path(name)])
        .unwrap()
        .pop()
        .map(|p| p.value)
}

// ── Decoding ────────────────────────────────────────────────────────

#[test]
fn fixtures_select_their_model() {
    assert_eq!(Document::from_xml(DEVICE).unwrap().model(), DataModel::Tr181);
    assert_eq!(Document::from_xml(IGD).unwrap().model(), DataModel::Tr098);
}

#[test]
fn device_fixture_decodes_typed_values() {
    let doc = Document::from_xml(DEVICE).unwrap();
    let Document::Device(device) = &doc else {
        panic!("expected a Device document");
    };

    let info = device.device_info().unwrap();
    assert_eq!(info.up_time(), Some(&3600));
    assert_eq!(info.manufacturer_oui().map(String::as_str), Some("00D09E"));

    let hosts = device.hosts().unwrap().host();
    assert_eq!(hosts.instances().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(hosts.get(3).unwrap().active(), Some(&false));

    // Defaults survive alongside the decoded values
    let ms = device.management_server().unwrap();
    assert_eq!(ms.enable_cwmp(), Some(&true));
    assert_eq!(ms.periodic_inform_interval(), Some(&300));
}

#[test]
fn services_mount_under_the_root() {
    let doc = Document::from_xml(DEVICE).unwrap();
    assert_eq!(
        value_of(
            &doc,
            "Device.Services.VoiceService.1.VoiceProfile.1.Line.1.DirectoryNumber"
        ),
        Some(Value::String("5551234".into()))
    );
    assert_eq!(
        value_of(&doc, "Device.Services.VoiceServiceNumberOfEntries"),
        Some(Value::UnsignedInt(1))
    );
}

#[test]
fn fixtures_are_valid() {
    for text in [DEVICE, IGD] {
        let doc = Document::from_xml(text).unwrap();
        assert_eq!(validate::validate(doc.root()), vec![]);
    }
}

// ── Round trips ─────────────────────────────────────────────────────

#[test]
fn every_encoding_reproduces_the_tree() {
    for text in [DEVICE, IGD] {
        let doc = Document::from_xml(text).unwrap();
        for format in [DocumentFormat::Xml, DocumentFormat::Json, DocumentFormat::Yaml] {
            let encoded = doc.render(format).unwrap();
            let back = Document::parse(&encoded, format).unwrap();
            assert_eq!(back, doc, "{format} round trip");
        }
    }
}

#[test]
fn instance_numbers_survive_json() {
    let doc = Document::from_xml(DEVICE).unwrap();
    let json = doc.to_json().unwrap();
    assert!(json.contains("\"3\""), "{json}");
    let back = Document::from_json(&json).unwrap();
    assert_eq!(
        value_of(&back, "Device.Hosts.Host.3.HostName"),
        Some(Value::String("nas".into()))
    );
}

#[test]
fn parameter_list_carries_every_set_parameter() {
    let doc = Document::from_xml(IGD).unwrap();
    let values = rpc::flatten(doc.root());
    let list = xml::parameter_list_to_xml(&values).unwrap();
    assert_eq!(xml::parameter_list_from_xml(&list).unwrap(), values);
}

// ── Operations on decoded trees ─────────────────────────────────────

#[test]
fn partial_path_lists_a_subtree() {
    let doc = Document::from_xml(DEVICE).unwrap();
    let names: Vec<String> = rpc::get_parameter_values(doc.root(), &[path("Device.Hosts.Host.1.")])
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Device.Hosts.Host.1.Alias",
            "Device.Hosts.Host.1.PhysAddress",
            "Device.Hosts.Host.1.IPAddress",
            "Device.Hosts.Host.1.AddressSource",
            "Device.Hosts.Host.1.HostName",
            "Device.Hosts.Host.1.Active",
        ]
    );
}

#[test]
fn alias_addressing_reaches_entries() {
    let mut doc = Document::from_xml(DEVICE).unwrap();
    assert_eq!(
        value_of(&doc, "Device.Hosts.Host.[nas].IPAddress"),
        Some(Value::String("192.168.1.30".into()))
    );

    rpc::delete_object(doc.root_mut(), &path("Device.Hosts.Host.[printer].")).unwrap();
    let err = rpc::get_parameter_values(doc.root(), &[path("Device.Hosts.Host.1.")]).unwrap_err();
    assert!(matches!(err, ModelError::InstanceNotFound { .. }));
}

#[test]
fn instance_numbers_are_not_reused_after_decode() {
    let mut doc = Document::from_xml(DEVICE).unwrap();
    rpc::delete_object(doc.root_mut(), &path("Device.Hosts.Host.3.")).unwrap();
    let instance = rpc::add_object(doc.root_mut(), &path("Device.Hosts.Host.")).unwrap();
    assert_eq!(instance, 4);
}

#[test]
fn rejected_set_leaves_the_document_unchanged() {
    let mut doc = Document::from_xml(DEVICE).unwrap();
    let before = doc.clone();

    let err = rpc::set_parameter_values(
        doc.root_mut(),
        &[
            ("Device.ManagementServer.PeriodicInformInterval", "600"),
            ("Device.ManagementServer.CWMPRetryIntervalMultiplier", "10"),
        ],
    )
    .unwrap_err();
    let ModelError::SetRejected { faults } = err else {
        panic!("expected SetRejected, got {err:?}");
    };
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].code, 9007);
    assert_eq!(doc, before);
}

#[test]
fn set_then_diff_reports_the_change() {
    let old = Document::from_xml(DEVICE).unwrap();
    let mut new = old.clone();
    rpc::set_parameter_values(
        new.root_mut(),
        &[
            ("Device.ManagementServer.URL", "https://acs.example.org/"),
            ("Device.DeviceInfo.ProvisioningCode", "GOLD"),
        ],
    )
    .unwrap();

    assert_eq!(
        diff(old.root(), new.root()),
        vec![
            Change::Modified {
                path: "Device.ManagementServer.URL".into(),
                old: "http://acs.example.net/cwmp".into(),
                new: "https://acs.example.org/".into(),
            },
            Change::Added {
                path: "Device.DeviceInfo.ProvisioningCode".into(),
                value: "GOLD".into(),
            },
        ]
    );
}

// ── Snapshots ───────────────────────────────────────────────────────

#[test]
fn management_server_xml() {
    let device = Device::default()
        .with_management_server(ManagementServer::default().with_url("http://acs/".into()));
    insta::assert_snapshot!(xml::to_xml(&device).unwrap(), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <Device>
      <ManagementServer>
        <EnableCWMP>true</EnableCWMP>
        <URL>http://acs/</URL>
        <CWMPRetryMinimumWaitInterval>5</CWMPRetryMinimumWaitInterval>
        <CWMPRetryIntervalMultiplier>2000</CWMPRetryIntervalMultiplier>
        <InstanceMode>InstanceNumber</InstanceMode>
      </ManagementServer>
    </Device>
    "#);
}
