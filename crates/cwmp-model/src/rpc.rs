// ── Parameter operations ──
//
// In-memory counterparts of the CWMP parameter RPCs. Reads walk
// `&dyn Node`; absent child objects are stood in for by their default
// template so that names and access modes stay resolvable. Writes first
// resolve and vet every entry against a read-only view, then apply.

use std::collections::HashSet;

use serde::Serialize;
use serde::ser::SerializeStruct;
use tracing::{debug, warn};

use crate::error::{ModelError, ParameterFault, fault_code};
use crate::node::{Child, ChildKind, ChildMut, Node, TableNode};
use crate::path::{ParamPath, Segment};
use crate::validate;
use crate::value::Value;

/// `ParameterValueStruct`: a parameter's full name and typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterValue {
    pub name: String,
    pub value: Value,
}

impl Serialize for ParameterValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ParameterValue", 3)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("type", &self.value.kind())?;
        s.serialize_field("value", &self.value)?;
        s.end()
    }
}

/// `ParameterInfoStruct`: a parameter or object name and whether it can
/// be written (for objects: whether instances can be added or deleted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterInfo {
    pub name: String,
    pub writable: bool,
}

// ── Resolution ──────────────────────────────────────────────────────

/// What an object path resolves to in a read-only walk.
enum Target<'a> {
    Object(&'a dyn Node),
    Table(&'a dyn TableNode),
    /// An absent child object, stood in for by its default.
    Template(Box<dyn Node>),
    /// A table below an absent object; holds the entry template.
    EmptyTable(Box<dyn Node>),
}

impl Target<'_> {
    fn node(&self) -> Option<&dyn Node> {
        match self {
            Self::Object(node) => Some(*node),
            Self::Template(node) => Some(node.as_ref()),
            Self::Table(_) | Self::EmptyTable(_) => None,
        }
    }
}

enum TargetMut<'a> {
    Object(&'a mut dyn Node),
    Table(&'a mut dyn TableNode),
}

fn check_root(root_name: &str, path: &ParamPath) -> Result<(), ModelError> {
    match path.segments().first() {
        Some(Segment::Name(name)) if name == root_name => Ok(()),
        _ => Err(ModelError::UnknownObject {
            path: path.prefix(1).to_string(),
        }),
    }
}

/// Resolve the first `len` segments of `path` as an object or table.
fn resolve<'a>(root: &'a dyn Node, path: &ParamPath, len: usize) -> Result<Target<'a>, ModelError> {
    if path.is_root() {
        return Ok(Target::Object(root));
    }
    check_root(root.object_name(), path)?;

    let mut current = Target::Object(root);
    for (depth, segment) in path.segments()[..len].iter().enumerate().skip(1) {
        let at = || path.prefix(depth + 1).to_string();
        current = match (current, segment) {
            (Target::Object(node), Segment::Name(name)) => {
                let kind = node
                    .child_info(name)
                    .ok_or_else(|| ModelError::UnknownObject { path: at() })?
                    .kind;
                match (node.child(name), kind) {
                    (Some(Child::Object(child)), _) => Target::Object(child),
                    (Some(Child::Table(table)), _) => Target::Table(table),
                    (None, ChildKind::Object) => Target::Template(template(node, name, &at)?),
                    (None, ChildKind::Table) => Target::EmptyTable(template(node, name, &at)?),
                }
            }
            (Target::Template(node), Segment::Name(name)) => {
                let kind = node
                    .child_info(name)
                    .ok_or_else(|| ModelError::UnknownObject { path: at() })?
                    .kind;
                let template = template(node.as_ref(), name, &at)?;
                match kind {
                    ChildKind::Object => Target::Template(template),
                    ChildKind::Table => Target::EmptyTable(template),
                }
            }
            (Target::Table(table), Segment::Instance(instance)) => table
                .entry(*instance)
                .map(Target::Object)
                .ok_or_else(|| ModelError::InstanceNotFound {
                    path: path.prefix(depth).to_string(),
                    instance: instance.to_string(),
                })?,
            (Target::Table(table), Segment::Alias(alias)) => table
                .resolve_alias(alias)
                .and_then(|instance| table.entry(instance))
                .map(Target::Object)
                .ok_or_else(|| ModelError::InstanceNotFound {
                    path: path.prefix(depth).to_string(),
                    instance: format!("[{alias}]"),
                })?,
            (Target::EmptyTable(_), Segment::Instance(_) | Segment::Alias(_)) => {
                return Err(ModelError::InstanceNotFound {
                    path: path.prefix(depth).to_string(),
                    instance: segment.to_string(),
                });
            }
            (_, Segment::Placeholder) => {
                return Err(ModelError::invalid_path(
                    path.to_string(),
                    "'{i}' only appears in schema templates",
                ));
            }
            (Target::Table(_) | Target::EmptyTable(_), Segment::Name(name)) => {
                return Err(ModelError::invalid_path(
                    path.to_string(),
                    format!("expected an instance number before '{name}'"),
                ));
            }
            (Target::Object(_) | Target::Template(_), _) => {
                return Err(ModelError::invalid_path(
                    path.to_string(),
                    format!("'{segment}' follows a single-instance object"),
                ));
            }
        };
    }
    Ok(current)
}

fn template(
    node: &dyn Node,
    name: &str,
    at: &dyn Fn() -> String,
) -> Result<Box<dyn Node>, ModelError> {
    node.template(name)
        .ok_or_else(|| ModelError::UnknownObject { path: at() })
}

/// Mutable resolution. Absent child objects are created on the way down,
/// so callers vet the path with [`resolve`] first.
fn resolve_mut<'a>(
    root: &'a mut dyn Node,
    path: &ParamPath,
    len: usize,
) -> Result<TargetMut<'a>, ModelError> {
    if path.is_root() {
        return Ok(TargetMut::Object(root));
    }
    check_root(root.object_name(), path)?;

    let mut current = TargetMut::Object(root);
    for (depth, segment) in path.segments()[..len].iter().enumerate().skip(1) {
        current = match (current, segment) {
            (TargetMut::Object(node), Segment::Name(name)) => match node.child_mut(name) {
                Some(ChildMut::Object(child)) => TargetMut::Object(child),
                Some(ChildMut::Table(table)) => TargetMut::Table(table),
                None => {
                    return Err(ModelError::UnknownObject {
                        path: path.prefix(depth + 1).to_string(),
                    });
                }
            },
            (TargetMut::Table(table), Segment::Instance(instance)) => {
                let instance = *instance;
                match table.entry_mut(instance) {
                    Some(entry) => TargetMut::Object(entry),
                    None => {
                        return Err(ModelError::InstanceNotFound {
                            path: path.prefix(depth).to_string(),
                            instance: instance.to_string(),
                        });
                    }
                }
            }
            (TargetMut::Table(table), Segment::Alias(alias)) => {
                let found = table.resolve_alias(alias);
                match found.and_then(|instance| table.entry_mut(instance)) {
                    Some(entry) => TargetMut::Object(entry),
                    None => {
                        return Err(ModelError::InstanceNotFound {
                            path: path.prefix(depth).to_string(),
                            instance: format!("[{alias}]"),
                        });
                    }
                }
            }
            _ => {
                return Err(ModelError::invalid_path(
                    path.to_string(),
                    format!("unexpected segment '{segment}'"),
                ));
            }
        };
    }
    Ok(current)
}

// ── GetParameterValues ──────────────────────────────────────────────

/// Values of the named parameters, or of every set parameter below each
/// partial path. The empty path addresses the whole tree.
pub fn get_parameter_values(
    root: &dyn Node,
    paths: &[ParamPath],
) -> Result<Vec<ParameterValue>, ModelError> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_partial() {
            let at = if path.is_root() {
                ParamPath::root().child(root.object_name())
            } else {
                path.clone()
            };
            match resolve(root, path, path.segments().len())? {
                Target::Object(node) => collect_values(node, &at, &mut out),
                Target::Table(table) => collect_table_values(table, &at, &mut out),
                Target::Template(_) | Target::EmptyTable(_) => {}
            }
        } else {
            let (parent, name) = split_param(path)?;
            let target = resolve(root, path, path.segments().len() - 1)?;
            let node = target.node().ok_or_else(|| ModelError::UnknownParameter {
                object: parent.to_string(),
                name: name.to_owned(),
            })?;
            let value = node.param(name).map_err(|_| ModelError::UnknownParameter {
                object: parent.to_string(),
                name: name.to_owned(),
            })?;
            if let (Some(value), Target::Object(_)) = (value, &target) {
                out.push(ParameterValue {
                    name: path.to_string(),
                    value,
                });
            }
        }
    }
    Ok(out)
}

/// Every set parameter of the tree, in tree order.
pub fn flatten(root: &dyn Node) -> Vec<ParameterValue> {
    let mut out = Vec::new();
    collect_values(root, &ParamPath::root().child(root.object_name()), &mut out);
    out
}

fn split_param(path: &ParamPath) -> Result<(ParamPath, &str), ModelError> {
    match (path.parent(), path.param_name()) {
        (Some(parent), Some(name)) => Ok((parent, name)),
        _ => Err(ModelError::invalid_path(path.to_string(), "not a parameter path")),
    }
}

fn collect_values(node: &dyn Node, at: &ParamPath, out: &mut Vec<ParameterValue>) {
    for info in node.params() {
        if let Ok(Some(value)) = node.param(info.name) {
            out.push(ParameterValue {
                name: at.param(info.name).to_string(),
                value,
            });
        }
    }
    for child in node.children() {
        match node.child(child.name) {
            Some(Child::Object(object)) => collect_values(object, &at.child(child.name), out),
            Some(Child::Table(table)) => collect_table_values(table, &at.child(child.name), out),
            None => {}
        }
    }
}

fn collect_table_values(table: &dyn TableNode, at: &ParamPath, out: &mut Vec<ParameterValue>) {
    for instance in table.instance_numbers() {
        if let Some(entry) = table.entry(instance) {
            collect_values(entry, &at.instance(instance), out);
        }
    }
}

// ── GetParameterNames ───────────────────────────────────────────────

/// Names below `path`. With `next_level`, only the immediate parameters
/// and child objects (or table entries) of the object at `path`.
pub fn get_parameter_names(
    root: &dyn Node,
    path: &ParamPath,
    next_level: bool,
) -> Result<Vec<ParameterInfo>, ModelError> {
    let mut out = Vec::new();

    if !path.is_partial() {
        if next_level {
            return Err(ModelError::invalid_path(
                path.to_string(),
                "next-level listing needs an object path",
            ));
        }
        let (parent, name) = split_param(path)?;
        let target = resolve(root, path, path.segments().len() - 1)?;
        let info = target
            .node()
            .and_then(|node| node.param_info(name))
            .ok_or_else(|| ModelError::UnknownParameter {
                object: parent.to_string(),
                name: name.to_owned(),
            })?;
        out.push(ParameterInfo {
            name: path.to_string(),
            writable: info.is_writable(),
        });
        return Ok(out);
    }

    if path.is_root() {
        let at = ParamPath::root().child(root.object_name());
        if next_level {
            out.push(object_info(&at, false));
        } else {
            collect_names(root, &at, false, &mut out);
        }
        return Ok(out);
    }

    let is_entry = matches!(
        path.segments().last(),
        Some(Segment::Instance(_) | Segment::Alias(_))
    );
    match resolve(root, path, path.segments().len())? {
        Target::Object(node) if next_level => list_level(node, path, &mut out),
        Target::Object(node) => collect_names(node, path, is_entry, &mut out),
        Target::Template(node) if next_level => list_level(node.as_ref(), path, &mut out),
        Target::Template(node) => collect_names(node.as_ref(), path, false, &mut out),
        Target::Table(table) => {
            if !next_level {
                out.push(object_info(path, true));
            }
            for instance in table.instance_numbers() {
                let entry_at = path.instance(instance);
                match table.entry(instance) {
                    Some(entry) if !next_level => collect_names(entry, &entry_at, true, &mut out),
                    _ => out.push(object_info(&entry_at, true)),
                }
            }
        }
        Target::EmptyTable(_) => {
            if !next_level {
                out.push(object_info(path, true));
            }
        }
    }
    Ok(out)
}

fn object_info(at: &ParamPath, writable: bool) -> ParameterInfo {
    ParameterInfo {
        name: at.to_string(),
        writable,
    }
}

fn list_level(node: &dyn Node, at: &ParamPath, out: &mut Vec<ParameterInfo>) {
    for info in node.params() {
        out.push(ParameterInfo {
            name: at.param(info.name).to_string(),
            writable: info.is_writable(),
        });
    }
    for child in node.children() {
        out.push(object_info(&at.child(child.name), child.kind == ChildKind::Table));
    }
}

/// The object itself, its parameters, then every descendant. Absent
/// child objects are listed from their templates.
fn collect_names(node: &dyn Node, at: &ParamPath, writable: bool, out: &mut Vec<ParameterInfo>) {
    out.push(object_info(at, writable));
    for info in node.params() {
        out.push(ParameterInfo {
            name: at.param(info.name).to_string(),
            writable: info.is_writable(),
        });
    }
    for child in node.children() {
        let child_at = at.child(child.name);
        match node.child(child.name) {
            Some(Child::Object(object)) => collect_names(object, &child_at, false, out),
            Some(Child::Table(table)) => {
                out.push(object_info(&child_at, true));
                for instance in table.instance_numbers() {
                    if let Some(entry) = table.entry(instance) {
                        collect_names(entry, &child_at.instance(instance), true, out);
                    }
                }
            }
            None => {
                if let Some(template) = node.template(child.name) {
                    collect_names(template.as_ref(), &child_at, false, out);
                }
            }
        }
    }
}

// ── SetParameterValues ──────────────────────────────────────────────

/// Apply `(name, lexical value)` pairs atomically.
///
/// Every entry is resolved, checked for writability, parsed against its
/// declared type and checked against its declared constraints before the
/// tree is touched. Any failure rejects the whole request with
/// [`ModelError::SetRejected`], one [`ParameterFault`] per bad entry.
pub fn set_parameter_values<N, V>(root: &mut dyn Node, list: &[(N, V)]) -> Result<(), ModelError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut faults = Vec::new();
    let mut plan = Vec::with_capacity(list.len());
    let mut seen = HashSet::new();

    for (name, text) in list {
        let (name, text) = (name.as_ref(), text.as_ref());
        match plan_set(&*root, name, text) {
            Ok((path, value)) => {
                if seen.insert(path.to_string()) {
                    plan.push((path, value));
                } else {
                    faults.push(ParameterFault {
                        name: name.to_owned(),
                        code: fault_code::INVALID_ARGUMENTS,
                        message: "parameter appears more than once in the request".into(),
                    });
                }
            }
            Err(err) => faults.push(ParameterFault {
                name: name.to_owned(),
                code: err.fault_code(),
                message: err.to_string(),
            }),
        }
    }

    if !faults.is_empty() {
        warn!(faults = faults.len(), "set rejected");
        return Err(ModelError::SetRejected { faults });
    }

    for (path, value) in plan {
        let (_, name) = split_param(&path)?;
        match resolve_mut(root, &path, path.segments().len() - 1)? {
            TargetMut::Object(node) => {
                debug!(path = %path, value = %value, "set");
                node.set_param(name, value)?;
            }
            TargetMut::Table(_) => {
                return Err(ModelError::invalid_path(path.to_string(), "not a parameter path"));
            }
        }
    }
    Ok(())
}

fn plan_set(root: &dyn Node, name: &str, text: &str) -> Result<(ParamPath, Value), ModelError> {
    let path = ParamPath::parse(name)?;
    let (parent, param) = split_param(&path)?;
    let target = resolve(root, &path, path.segments().len() - 1)?;
    let path = concrete_path(root, &path)?;
    let info = target
        .node()
        .and_then(|node| node.param_info(param))
        .ok_or_else(|| ModelError::UnknownParameter {
            object: parent.to_string(),
            name: param.to_owned(),
        })?;
    if !info.is_writable() {
        return Err(ModelError::NotWritable {
            path: path.to_string(),
        });
    }
    let value = Value::parse(info.kind, text)?;
    validate::check_value(info, &value).map_err(|err| match err {
        ModelError::ConstraintViolation { reason, .. } => ModelError::ConstraintViolation {
            path: path.to_string(),
            reason,
        },
        other => other,
    })?;
    Ok((path, value))
}

/// `path` with every `[alias]` replaced by the instance number it names
/// in `root`, so that a plan stays valid while earlier entries rename
/// aliases.
fn concrete_path(root: &dyn Node, path: &ParamPath) -> Result<ParamPath, ModelError> {
    let last = path.segments().len().saturating_sub(1);
    let mut out = ParamPath::root();
    for (depth, segment) in path.segments().iter().enumerate() {
        out = match segment {
            Segment::Name(name) if depth == last && !path.is_partial() => out.param(name),
            Segment::Name(name) => out.child(name),
            Segment::Instance(instance) => out.instance(*instance),
            Segment::Alias(alias) => {
                let instance = match resolve(root, path, depth)? {
                    Target::Table(table) => table.resolve_alias(alias),
                    _ => None,
                };
                let instance = instance.ok_or_else(|| ModelError::InstanceNotFound {
                    path: path.prefix(depth).to_string(),
                    instance: format!("[{alias}]"),
                })?;
                out.instance(instance)
            }
            Segment::Placeholder => {
                return Err(ModelError::invalid_path(
                    path.to_string(),
                    "'{i}' only appears in schema templates",
                ));
            }
        };
    }
    Ok(out)
}

// ── AddObject / DeleteObject ────────────────────────────────────────

/// Create a new table entry and return its instance number.
///
/// `Table.` appends under the next instance number. `Table.[alias].`
/// creates an entry whose `Alias` is set to `alias`.
pub fn add_object(root: &mut dyn Node, path: &ParamPath) -> Result<u32, ModelError> {
    if !path.is_partial() || path.is_root() {
        return Err(ModelError::invalid_path(
            path.to_string(),
            "AddObject needs a table path ending in '.'",
        ));
    }

    let segments = path.segments();
    let (len, alias) = match segments.last() {
        Some(Segment::Alias(alias)) => (segments.len() - 1, Some(alias.as_str())),
        _ => (segments.len(), None),
    };

    {
        let (has_alias, taken) = match resolve(&*root, path, len)? {
            Target::Table(table) => (
                table.entry_template().param_info("Alias").is_some(),
                alias.and_then(|alias| table.resolve_alias(alias)).is_some(),
            ),
            Target::EmptyTable(entry) => (entry.param_info("Alias").is_some(), false),
            Target::Object(_) | Target::Template(_) => {
                return Err(ModelError::NotATable {
                    path: path.prefix(len).to_string(),
                });
            }
        };
        if let Some(alias) = alias {
            if !has_alias {
                return Err(ModelError::invalid_path(
                    path.to_string(),
                    "entries of this table have no Alias",
                ));
            }
            if taken {
                return Err(ModelError::invalid_path(
                    path.to_string(),
                    format!("alias '{alias}' is already in use"),
                ));
            }
        }
    }

    // Absent parents are created from here on.
    let TargetMut::Table(table) = resolve_mut(root, path, len)? else {
        return Err(ModelError::NotATable {
            path: path.prefix(len).to_string(),
        });
    };
    let instance = table.add_entry();
    if let (Some(alias), Some(entry)) = (alias, table.entry_mut(instance)) {
        entry.set_param("Alias", Value::String(alias.to_owned()))?;
    }

    debug!(table = %path.prefix(len), instance, "added object");
    Ok(instance)
}

/// Remove the table entry addressed by `path` (`Table.3.` or `Table.[alias].`).
pub fn delete_object(root: &mut dyn Node, path: &ParamPath) -> Result<(), ModelError> {
    let segments = path.segments();
    if !path.is_partial() || segments.len() < 2 {
        return Err(ModelError::invalid_path(
            path.to_string(),
            "DeleteObject needs an entry path such as 'Table.1.'",
        ));
    }

    let len = segments.len() - 1;
    let table_path = path.prefix(len);
    let instance = match resolve(&*root, path, len)? {
        Target::Table(table) => {
            let instance = match &segments[len] {
                Segment::Instance(instance) => Some(*instance),
                Segment::Alias(alias) => table.resolve_alias(alias),
                other => {
                    return Err(ModelError::invalid_path(
                        path.to_string(),
                        format!("'{other}' is not an instance"),
                    ));
                }
            };
            instance.filter(|instance| table.entry(*instance).is_some())
        }
        Target::EmptyTable(_) => None,
        Target::Object(_) | Target::Template(_) => {
            return Err(ModelError::NotATable {
                path: table_path.to_string(),
            });
        }
    };
    let not_found = || ModelError::InstanceNotFound {
        path: table_path.to_string(),
        instance: segments[len].to_string(),
    };
    let instance = instance.ok_or_else(not_found)?;

    let TargetMut::Table(table) = resolve_mut(root, path, len)? else {
        return Err(ModelError::NotATable {
            path: table_path.to_string(),
        });
    };
    if !table.remove_entry(instance) {
        return Err(not_found());
    }
    debug!(table = %table_path, instance, "deleted object");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tr181::{Device, DeviceInfo, Host, Hosts};

    fn path(text: &str) -> ParamPath {
        ParamPath::parse(text).unwrap()
    }

    fn sample() -> Device {
        Device::default()
            .with_device_info(DeviceInfo::default().with_manufacturer("Acme".into()).with_up_time(42))
            .with_hosts(
                Hosts::default()
                    .with_host(
                        Host::default()
                            .with_alias("printer".into())
                            .with_phys_address("00:11:22:33:44:55".into()),
                    )
                    .with_host(Host::default().with_alias("nas".into())),
            )
    }

    fn names(values: &[ParameterValue]) -> Vec<&str> {
        values.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn gpv_single_and_partial() {
        let device = sample();
        let values = get_parameter_values(&device, &[path("Device.DeviceInfo.UpTime")]).unwrap();
        assert_eq!(values[0].value, Value::UnsignedInt(42));

        let values = get_parameter_values(&device, &[path("Device.Hosts.")]).unwrap();
        assert_eq!(
            names(&values),
            vec![
                "Device.Hosts.HostNumberOfEntries",
                "Device.Hosts.Host.1.Alias",
                "Device.Hosts.Host.1.PhysAddress",
                "Device.Hosts.Host.2.Alias",
            ]
        );
    }

    #[test]
    fn gpv_unset_and_unknown() {
        let device = sample();
        assert!(
            get_parameter_values(&device, &[path("Device.DeviceInfo.SerialNumber")])
                .unwrap()
                .is_empty()
        );
        assert!(
            get_parameter_values(&device, &[path("Device.GRE.")])
                .unwrap()
                .is_empty()
        );

        let err = get_parameter_values(&device, &[path("Device.DeviceInfo.Bogus")]).unwrap_err();
        assert_eq!(err.fault_code(), 9005);
        let err = get_parameter_values(&device, &[path("Device.Hosts.Host.9.")]).unwrap_err();
        assert!(matches!(err, ModelError::InstanceNotFound { .. }));
        let err = get_parameter_values(&device, &[path("InternetGatewayDevice.")]).unwrap_err();
        assert!(matches!(err, ModelError::UnknownObject { .. }));
    }

    #[test]
    fn gpv_resolves_aliases() {
        let device = sample();
        let values = get_parameter_values(&device, &[path("Device.Hosts.Host.[nas].Alias")]).unwrap();
        assert_eq!(values[0].value, Value::String("nas".into()));
    }

    #[test]
    fn gpn_next_level() {
        let device = sample();
        let infos = get_parameter_names(&device, &path("Device.Hosts."), true).unwrap();
        assert_eq!(
            infos,
            vec![
                ParameterInfo {
                    name: "Device.Hosts.HostNumberOfEntries".into(),
                    writable: false
                },
                ParameterInfo {
                    name: "Device.Hosts.Host.".into(),
                    writable: true
                },
            ]
        );

        let infos = get_parameter_names(&device, &path("Device.Hosts.Host."), true).unwrap();
        let names: Vec<_> = infos.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Device.Hosts.Host.1.", "Device.Hosts.Host.2."]);
    }

    #[test]
    fn gpn_lists_absent_objects_from_templates() {
        let device = Device::default();
        let infos = get_parameter_names(&device, &path("Device.GRE."), false).unwrap();
        let names: Vec<_> = infos.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Device.GRE.", "Device.GRE.TunnelNumberOfEntries", "Device.GRE.Tunnel."]
        );

        let infos = get_parameter_names(&device, &path("Device.ManagementServer.URL"), false).unwrap();
        assert!(infos[0].writable);
    }

    #[test]
    fn spv_applies_all_or_nothing() {
        let mut device = sample();
        set_parameter_values(
            &mut device,
            &[
                ("Device.ManagementServer.URL", "https://acs.example.net/cwmp"),
                ("Device.ManagementServer.PeriodicInformInterval", "300"),
                ("Device.Hosts.Host.[printer].Alias", "office-printer"),
            ],
        )
        .unwrap();
        let ms = device.management_server().unwrap();
        assert_eq!(ms.url().map(String::as_str), Some("https://acs.example.net/cwmp"));
        assert_eq!(ms.periodic_inform_interval(), Some(&300));
        assert_eq!(
            device.hosts().unwrap().host().get(1).unwrap().alias().map(String::as_str),
            Some("office-printer")
        );

        let before = device.clone();
        let err = set_parameter_values(
            &mut device,
            &[
                ("Device.ManagementServer.URL", "https://other.example.net"),
                ("Device.DeviceInfo.UpTime", "7"),
                ("Device.ManagementServer.PeriodicInformInterval", "soon"),
                ("Device.ManagementServer.InstanceMode", "ByName"),
                ("Device.Nope.X", "1"),
            ],
        )
        .unwrap_err();
        let ModelError::SetRejected { faults } = err else {
            panic!("expected SetRejected");
        };
        let codes: Vec<_> = faults.iter().map(|f| f.code).collect();
        assert_eq!(codes, vec![9008, 9007, 9007, 9005]);
        assert_eq!(device, before);
    }

    #[test]
    fn spv_rejects_duplicates() {
        let mut device = Device::default();
        let err = set_parameter_values(
            &mut device,
            &[
                ("Device.ManagementServer.URL", "a"),
                ("Device.ManagementServer.URL", "b"),
            ],
        )
        .unwrap_err();
        let ModelError::SetRejected { faults } = err else {
            panic!("expected SetRejected");
        };
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].code, 9003);
        assert!(device.management_server().is_none());
    }

    fn tunnel_device() -> Device {
        let mut device = Device::default();
        add_object(&mut device, &path("Device.GRE.Tunnel.[t].")).unwrap();
        device
    }

    #[test]
    fn spv_renaming_an_alias_keeps_later_entries_on_the_same_row() {
        let mut device = tunnel_device();
        set_parameter_values(
            &mut device,
            &[
                ("Device.GRE.Tunnel.[t].Alias", "backhaul"),
                ("Device.GRE.Tunnel.[t].RemoteEndpoints", "10.0.0.1"),
            ],
        )
        .unwrap();
        let tunnel = device.gre().unwrap().tunnel().get(1).unwrap();
        assert_eq!(tunnel.alias().map(String::as_str), Some("backhaul"));
        assert_eq!(tunnel.remote_endpoints().map(String::as_str), Some("10.0.0.1"));
    }

    #[test]
    fn spv_rejects_one_parameter_named_by_number_and_alias() {
        let mut device = tunnel_device();
        let before = device.clone();
        let err = set_parameter_values(
            &mut device,
            &[
                ("Device.GRE.Tunnel.1.RemoteEndpoints", "a"),
                ("Device.GRE.Tunnel.[t].RemoteEndpoints", "b"),
            ],
        )
        .unwrap_err();
        let ModelError::SetRejected { faults } = err else {
            panic!("expected SetRejected");
        };
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].name, "Device.GRE.Tunnel.[t].RemoteEndpoints");
        assert_eq!(faults[0].code, 9003);
        assert_eq!(device, before);
    }

    #[test]
    fn failed_add_and_delete_leave_the_tree_alone() {
        let mut device = Device::default();
        assert!(matches!(
            delete_object(&mut device, &path("Device.GRE.Tunnel.1.")),
            Err(ModelError::InstanceNotFound { .. })
        ));
        assert!(matches!(
            add_object(&mut device, &path("Device.DeviceInfo.")),
            Err(ModelError::NotATable { .. })
        ));
        assert!(matches!(
            delete_object(&mut device, &path("Device.DeviceInfo.X.")),
            Err(ModelError::NotATable { .. })
        ));
        assert!(add_object(&mut device, &path("Device.Hosts.HostNumberOfEntries.")).is_err());
        assert_eq!(device, Device::default());

        let mut device = tunnel_device();
        let before = device.clone();
        assert!(add_object(&mut device, &path("Device.GRE.Tunnel.[t].")).is_err());
        assert!(delete_object(&mut device, &path("Device.GRE.Tunnel.[gone].")).is_err());
        assert!(delete_object(&mut device, &path("Device.GRE.Tunnel.1.Interface.1.")).is_err());
        assert_eq!(device, before);
    }

    #[test]
    fn add_and_delete_never_reuse_numbers() {
        let mut device = sample();
        let n = add_object(&mut device, &path("Device.Hosts.Host.")).unwrap();
        assert_eq!(n, 3);
        delete_object(&mut device, &path("Device.Hosts.Host.3.")).unwrap();
        delete_object(&mut device, &path("Device.Hosts.Host.[nas].")).unwrap();
        let n = add_object(&mut device, &path("Device.Hosts.Host.")).unwrap();
        assert_eq!(n, 4);
        assert_eq!(device.hosts().unwrap().host().instances().collect::<Vec<_>>(), vec![1, 4]);

        assert!(matches!(
            delete_object(&mut device, &path("Device.Hosts.Host.3.")),
            Err(ModelError::InstanceNotFound { .. })
        ));
        assert!(matches!(
            add_object(&mut device, &path("Device.DeviceInfo.")),
            Err(ModelError::NotATable { .. })
        ));
    }

    #[test]
    fn add_creates_missing_parents_and_alias() {
        let mut device = Device::default();
        let n = add_object(&mut device, &path("Device.GRE.Tunnel.[backhaul].")).unwrap();
        assert_eq!(n, 1);
        let tunnel = device.gre().unwrap().tunnel().get(1).unwrap();
        assert_eq!(tunnel.alias().map(String::as_str), Some("backhaul"));
        assert!(add_object(&mut device, &path("Device.GRE.Tunnel.[backhaul].")).is_err());

        let n = add_object(&mut device, &path("Device.GRE.Tunnel.[backhaul].Interface.")).unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn flatten_matches_whole_tree_gpv() {
        let device = sample();
        let all = get_parameter_values(&device, &[ParamPath::root()]).unwrap();
        assert_eq!(flatten(&device), all);
        assert_eq!(all[0].name, "Device.DeviceInfo.Manufacturer");
    }
}
