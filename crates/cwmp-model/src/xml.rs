// ── XML codecs ──
//
// Two shapes are handled here:
//
// Tree form, one element per object and parameter:
//
//   <Device>
//     <Hosts>
//       <HostNumberOfEntries>1</HostNumberOfEntries>
//       <Host instance="1">
//         <PhysAddress>00:11:22:33:44:55</PhysAddress>
//       </Host>
//     </Hosts>
//   </Device>
//
// CWMP ParameterList form, as carried in GetParameterValuesResponse and
// SetParameterValues bodies (without the SOAP envelope).

use std::io::Write;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::{debug, trace};

use crate::error::ModelError;
use crate::node::{Child, ChildKind, ChildMut, Node, TableNode};
use crate::path::ParamPath;
use crate::rpc::ParameterValue;
use crate::value::{ParamType, Value};

const INDENT: usize = 2;

// ── Tree form: writing ──────────────────────────────────────────────

/// Serialize a tree, rooted at an element named after `root`.
pub fn to_xml(root: &dyn Node) -> Result<String, ModelError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(ModelError::xml)?;
    write_object(&mut writer, root, root.object_name(), None)?;
    String::from_utf8(writer.into_inner()).map_err(ModelError::xml)
}

fn write_object<W: Write>(
    writer: &mut Writer<W>,
    node: &dyn Node,
    name: &str,
    instance: Option<u32>,
) -> Result<(), ModelError> {
    let mut start = BytesStart::new(name);
    if let Some(instance) = instance {
        start.push_attribute(("instance", instance.to_string().as_str()));
    }
    writer.write_event(Event::Start(start)).map_err(ModelError::xml)?;

    for info in node.params() {
        if let Some(value) = node.param(info.name)? {
            write_text_element(writer, info.name, &value.to_string(), None)?;
        }
    }

    for child in node.children() {
        match node.child(child.name) {
            Some(Child::Object(object)) => {
                write_object(writer, object, child.name, None)?;
            }
            Some(Child::Table(table)) => {
                for instance in table.instance_numbers() {
                    if let Some(entry) = table.entry(instance) {
                        write_object(writer, entry, child.name, Some(instance))?;
                    }
                }
            }
            None => {}
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(ModelError::xml)
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
    attribute: Option<(&str, &str)>,
) -> Result<(), ModelError> {
    let mut start = BytesStart::new(name);
    if let Some(attribute) = attribute {
        start.push_attribute(attribute);
    }
    if text.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(ModelError::xml);
    }
    writer.write_event(Event::Start(start)).map_err(ModelError::xml)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(ModelError::xml)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(ModelError::xml)
}

// ── Tree form: reading ──────────────────────────────────────────────

/// Name of the document element, used to pick the data model.
pub fn root_name(text: &str) -> Result<String, ModelError> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event().map_err(ModelError::xml)? {
            Event::Start(e) | Event::Empty(e) => return element_name(&e),
            Event::Eof => {
                return Err(ModelError::Xml {
                    message: "document has no root element".into(),
                });
            }
            _ => {}
        }
    }
}

/// Populate `root` from a tree-form document whose root element is
/// named after it.
pub fn read_into(text: &str, root: &mut dyn Node) -> Result<(), ModelError> {
    let mut reader = Reader::from_str(text);

    loop {
        match reader.read_event().map_err(ModelError::xml)? {
            Event::Start(e) => {
                let name = element_name(&e)?;
                check_root_element(&name, root)?;
                let at = ParamPath::root().child(&name);
                read_object(&mut reader, root, &at)?;
                break;
            }
            Event::Empty(e) => {
                let name = element_name(&e)?;
                check_root_element(&name, root)?;
                break;
            }
            Event::Eof => {
                return Err(ModelError::Xml {
                    message: "document has no root element".into(),
                });
            }
            _ => {}
        }
    }

    debug!(root = root.object_name(), "decoded XML document");
    Ok(())
}

fn check_root_element(name: &str, root: &dyn Node) -> Result<(), ModelError> {
    if name == root.object_name() {
        Ok(())
    } else {
        Err(ModelError::UnknownObject {
            path: format!("{name}."),
        })
    }
}

/// Read the content of the object element just opened, up to and
/// including its end tag.
fn read_object(
    reader: &mut Reader<&[u8]>,
    node: &mut dyn Node,
    at: &ParamPath,
) -> Result<(), ModelError> {
    loop {
        let (element, has_content) = match reader.read_event().map_err(ModelError::xml)? {
            Event::Start(e) => (e, true),
            Event::Empty(e) => (e, false),
            Event::End(_) => return Ok(()),
            Event::Text(t) => {
                let text = t.unescape().map_err(ModelError::xml)?;
                if text.trim().is_empty() {
                    continue;
                }
                return Err(ModelError::Xml {
                    message: format!("unexpected text '{text}' in {at}"),
                });
            }
            Event::Eof => {
                return Err(ModelError::Xml {
                    message: format!("unexpected end of document inside {at}"),
                });
            }
            _ => continue,
        };

        let name = element_name(&element)?;
        trace!(path = %at, element = %name, "element");

        if let Some(info) = node.param_info(&name) {
            let text = if has_content {
                read_text(reader, &name)?
            } else {
                String::new()
            };
            let path = at.param(&name);
            let value = Value::parse(info.kind, &text)?;
            match node.set_param(&name, value) {
                // Computed NumberOfEntries counts are re-derived from the tables.
                Ok(()) | Err(ModelError::NotWritable { .. }) => {}
                Err(ModelError::TypeMismatch { expected, .. }) => {
                    return Err(ModelError::TypeMismatch {
                        name: path.to_string(),
                        expected,
                    });
                }
                Err(other) => return Err(other),
            }
            continue;
        }

        let kind = node
            .child_info(&name)
            .map(|c| c.kind)
            .ok_or_else(|| ModelError::UnknownParameter {
                object: at.to_string(),
                name: name.clone(),
            })?;
        let instance = match kind {
            ChildKind::Table => instance_attribute(&element, at, &name)?,
            ChildKind::Object => None,
        };

        match node.child_mut(&name) {
            Some(ChildMut::Object(child)) => {
                if has_content {
                    read_object(reader, child, &at.child(&name))?;
                }
            }
            Some(ChildMut::Table(table)) => {
                let table_at = at.child(&name);
                let (instance, entry) = table_entry(table, &table_at, instance)?;
                if has_content {
                    read_object(reader, entry, &table_at.instance(instance))?;
                }
            }
            None => {
                return Err(ModelError::UnknownObject {
                    path: at.child(&name).to_string(),
                });
            }
        }
    }
}

fn table_entry<'a>(
    table: &'a mut dyn TableNode,
    at: &ParamPath,
    instance: Option<u32>,
) -> Result<(u32, &'a mut dyn Node), ModelError> {
    let instance = match instance {
        Some(instance) => {
            table.insert_entry(instance).map_err(|err| match err {
                ModelError::DuplicateInstance { instance, .. } => ModelError::DuplicateInstance {
                    path: at.to_string(),
                    instance,
                },
                other => other,
            })?;
            instance
        }
        None => table.add_entry(),
    };
    let entry = table
        .entry_mut(instance)
        .ok_or_else(|| ModelError::InstanceNotFound {
            path: at.to_string(),
            instance: instance.to_string(),
        })?;
    Ok((instance, entry))
}

fn instance_attribute(
    element: &BytesStart<'_>,
    at: &ParamPath,
    name: &str,
) -> Result<Option<u32>, ModelError> {
    let Some(attr) = element
        .try_get_attribute("instance")
        .map_err(ModelError::xml)?
    else {
        return Ok(None);
    };
    let raw = attr.unescape_value().map_err(ModelError::xml)?;
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ModelError::invalid_path(
            format!("{at}{name}.{raw}."),
            "instance numbers are positive integers",
        )),
    }
}

/// Text content of the element just opened, up to its end tag, with
/// surrounding whitespace kept.
fn read_text(reader: &mut Reader<&[u8]>, name: &str) -> Result<String, ModelError> {
    let mut text = String::new();
    loop {
        match reader.read_event().map_err(ModelError::xml)? {
            Event::Text(t) => text.push_str(&t.unescape().map_err(ModelError::xml)?),
            Event::CData(c) => {
                text.push_str(&String::from_utf8(c.into_inner().into_owned()).map_err(ModelError::xml)?);
            }
            Event::End(_) => return Ok(text),
            Event::Start(_) | Event::Empty(_) => {
                return Err(ModelError::Xml {
                    message: format!("parameter element <{name}> contains child elements"),
                });
            }
            Event::Eof => {
                return Err(ModelError::Xml {
                    message: format!("unexpected end of document inside <{name}>"),
                });
            }
            _ => {}
        }
    }
}

fn element_name(element: &BytesStart<'_>) -> Result<String, ModelError> {
    std::str::from_utf8(element.local_name().as_ref())
        .map(str::to_owned)
        .map_err(ModelError::xml)
}

// ── ParameterList form ──────────────────────────────────────────────

/// `<ParameterList>` of `ParameterValueStruct`s with `xsi:type` tags.
pub fn parameter_list_to_xml(values: &[ParameterValue]) -> Result<String, ModelError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    let array_type = format!("cwmp:ParameterValueStruct[{}]", values.len());
    let mut list = BytesStart::new("ParameterList");
    list.push_attribute(("soap-enc:arrayType", array_type.as_str()));
    writer.write_event(Event::Start(list)).map_err(ModelError::xml)?;

    for pv in values {
        writer
            .write_event(Event::Start(BytesStart::new("ParameterValueStruct")))
            .map_err(ModelError::xml)?;
        write_text_element(&mut writer, "Name", &pv.name, None)?;
        let kind = pv.value.kind().to_string();
        write_text_element(
            &mut writer,
            "Value",
            &pv.value.to_string(),
            Some(("xsi:type", kind.as_str())),
        )?;
        writer
            .write_event(Event::End(BytesEnd::new("ParameterValueStruct")))
            .map_err(ModelError::xml)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("ParameterList")))
        .map_err(ModelError::xml)?;
    String::from_utf8(writer.into_inner()).map_err(ModelError::xml)
}

/// Every `ParameterValueStruct` in `text`, wherever it is nested.
pub fn parameter_list_from_xml(text: &str) -> Result<Vec<ParameterValue>, ModelError> {
    let mut reader = Reader::from_str(text);

    let mut out = Vec::new();
    loop {
        match reader.read_event().map_err(ModelError::xml)? {
            Event::Start(e) if e.local_name().as_ref() == b"ParameterValueStruct" => {
                out.push(read_value_struct(&mut reader)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    debug!(count = out.len(), "decoded parameter list");
    Ok(out)
}

fn read_value_struct(reader: &mut Reader<&[u8]>) -> Result<ParameterValue, ModelError> {
    let mut name = None;
    let mut value = None;
    loop {
        match reader.read_event().map_err(ModelError::xml)? {
            Event::Start(e) => {
                let element = element_name(&e)?;
                let text = read_text(reader, &element)?;
                match element.as_str() {
                    "Name" => name = Some(text.trim().to_owned()),
                    "Value" => value = Some((xsi_type(&e)?, text)),
                    _ => {}
                }
            }
            Event::Empty(e) => match element_name(&e)?.as_str() {
                "Name" => name = Some(String::new()),
                "Value" => value = Some((xsi_type(&e)?, String::new())),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => {
                return Err(ModelError::Xml {
                    message: "unexpected end of document inside <ParameterValueStruct>".into(),
                });
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ModelError::Xml {
        message: "<ParameterValueStruct> without <Name>".into(),
    })?;
    let (kind, text) = value.ok_or_else(|| ModelError::Xml {
        message: format!("<ParameterValueStruct> for {name} without <Value>"),
    })?;
    let value = Value::parse(kind, &text)?;
    Ok(ParameterValue { name, value })
}

fn xsi_type(element: &BytesStart<'_>) -> Result<ParamType, ModelError> {
    for attr in element.attributes() {
        let attr = attr.map_err(ModelError::xml)?;
        if attr.key.local_name().as_ref() == b"type" {
            let raw = attr.unescape_value().map_err(ModelError::xml)?;
            return raw.parse().map_err(|_| ModelError::Xml {
                message: format!("unsupported xsi:type '{raw}'"),
            });
        }
    }
    Ok(ParamType::String)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tr181::{Device, Host, Hosts};

    #[test]
    fn writes_indented_tree() {
        let device = Device::default().with_hosts(
            Hosts::default().with_host(
                Host::default()
                    .with_alias(String::new())
                    .with_host_name("a<b".into()),
            ),
        );
        let xml = to_xml(&device).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Device>\n  \
               <Hosts>\n    \
                 <HostNumberOfEntries>1</HostNumberOfEntries>\n    \
                 <Host instance=\"1\">\n      \
                   <Alias/>\n      \
                   <HostName>a&lt;b</HostName>\n    \
                 </Host>\n  \
               </Hosts>\n\
             </Device>"
        );
    }

    #[test]
    fn reads_entries_without_instance_attribute() {
        let xml = r#"<Device><Hosts>
            <Host instance="4"><HostName>first</HostName></Host>
            <Host><HostName>second</HostName></Host>
        </Hosts></Device>"#;
        let mut device = Device::default();
        read_into(xml, &mut device).unwrap();
        let hosts = device.hosts().unwrap().host();
        assert_eq!(hosts.instances().collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(hosts.get(5).unwrap().host_name().map(String::as_str), Some("second"));
    }

    #[test]
    fn rejects_unknown_and_mistyped_elements() {
        let mut device = Device::default();
        let err = read_into("<Device><Bogus/></Device>", &mut device).unwrap_err();
        assert!(matches!(err, ModelError::UnknownParameter { .. }));

        let err = read_into(
            "<Device><DeviceInfo><UpTime>soon</UpTime></DeviceInfo></Device>",
            &mut Device::default(),
        )
        .unwrap_err();
        assert_eq!(err.fault_code(), 9007);

        let err = read_into("<InternetGatewayDevice/>", &mut Device::default()).unwrap_err();
        assert!(matches!(err, ModelError::UnknownObject { .. }));

        let err = read_into(
            r#"<Device><Hosts><Host instance="1"/><Host instance="1"/></Hosts></Device>"#,
            &mut Device::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateInstance { instance: 1, .. }));
    }

    #[test]
    fn keeps_whitespace_inside_string_values() {
        let device = Device::default().with_hosts(
            Hosts::default().with_host(Host::default().with_host_name("  my laptop ".into())),
        );
        let mut back = Device::default();
        read_into(&to_xml(&device).unwrap(), &mut back).unwrap();
        assert_eq!(back, device);

        let mut padded = Device::default();
        read_into(
            "<Device>\n  <DeviceInfo>\n    <UpTime> 42 </UpTime>\n  </DeviceInfo>\n</Device>\n",
            &mut padded,
        )
        .unwrap();
        assert_eq!(padded.device_info().unwrap().up_time(), Some(&42));
    }

    #[test]
    fn root_name_skips_prolog() {
        let name = root_name("<?xml version=\"1.0\"?>\n<!-- cpe -->\n<InternetGatewayDevice/>").unwrap();
        assert_eq!(name, "InternetGatewayDevice");
    }

    #[test]
    fn parameter_list_round_trip() {
        let values = vec![
            ParameterValue {
                name: "Device.DeviceInfo.UpTime".into(),
                value: Value::UnsignedInt(42),
            },
            ParameterValue {
                name: "Device.ManagementServer.URL".into(),
                value: Value::String("http://acs/?a=1&b=2".into()),
            },
        ];
        let xml = parameter_list_to_xml(&values).unwrap();
        assert!(xml.starts_with(
            "<ParameterList soap-enc:arrayType=\"cwmp:ParameterValueStruct[2]\">"
        ));
        assert!(xml.contains("<Value xsi:type=\"xsd:unsignedInt\">42</Value>"));
        assert_eq!(parameter_list_from_xml(&xml).unwrap(), values);
    }

    #[test]
    fn parameter_list_defaults_to_string() {
        let xml = "<ParameterList><ParameterValueStruct>\
                   <Name>Device.DeviceInfo.ProvisioningCode</Name><Value>abc</Value>\
                   </ParameterValueStruct></ParameterList>";
        let values = parameter_list_from_xml(xml).unwrap();
        assert_eq!(values[0].value, Value::String("abc".into()));
    }
}
