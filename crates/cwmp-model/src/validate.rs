// ── Constraint checking ──
//
// Declared constraints are metadata on `ParamInfo`; nothing enforces them
// when a field is assigned directly. `validate` walks a tree and reports
// every violation, `check_value` vets one candidate value before a set.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use serde::Serialize;
use strum::Display;
use tracing::warn;

use crate::error::ModelError;
use crate::node::{Child, Node, TableNode};
use crate::param::ParamInfo;
use crate::path::ParamPath;
use crate::value::Value;

/// Which declared constraint a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Size,
    Range,
    Pattern,
    Enumeration,
    DuplicateAlias,
    DuplicateKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub rule: Rule,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.rule)
    }
}

/// Patterns compiled once per run, anchored for whole-value matching.
#[derive(Default)]
struct Patterns {
    compiled: HashMap<&'static str, Option<Regex>>,
}

impl Patterns {
    fn get(&mut self, pattern: &'static str) -> Option<&Regex> {
        self.compiled
            .entry(pattern)
            .or_insert_with(|| match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(pattern, error = %e, "skipping uncompilable pattern");
                    None
                }
            })
            .as_ref()
    }
}

/// Check every set parameter of the tree and the uniqueness rules of
/// every table.
pub fn validate(root: &dyn Node) -> Vec<Violation> {
    let mut patterns = Patterns::default();
    let mut out = Vec::new();
    let at = ParamPath::root().child(root.object_name());
    walk(root, &at, &mut patterns, &mut out);
    out
}

/// Vet a single value against its descriptor.
pub fn check_value(info: &ParamInfo, value: &Value) -> Result<(), ModelError> {
    let mut patterns = Patterns::default();
    match check(info, value, &mut patterns).into_iter().next() {
        Some((_, reason)) => Err(ModelError::ConstraintViolation {
            path: info.name.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}

fn walk(node: &dyn Node, at: &ParamPath, patterns: &mut Patterns, out: &mut Vec<Violation>) {
    for info in node.params() {
        if let Ok(Some(value)) = node.param(info.name) {
            for (rule, message) in check(info, &value, patterns) {
                out.push(Violation {
                    path: at.param(info.name).to_string(),
                    rule,
                    message,
                });
            }
        }
    }

    for child in node.children() {
        let child_at = at.child(child.name);
        match node.child(child.name) {
            Some(Child::Object(object)) => walk(object, &child_at, patterns, out),
            Some(Child::Table(table)) => {
                check_table(table, &child_at, out);
                for instance in table.instance_numbers() {
                    if let Some(entry) = table.entry(instance) {
                        walk(entry, &child_at.instance(instance), patterns, out);
                    }
                }
            }
            None => {}
        }
    }
}

fn check(info: &ParamInfo, value: &Value, patterns: &mut Patterns) -> Vec<(Rule, String)> {
    let mut found = Vec::new();

    if matches!(value, Value::String(_)) || value.kind().is_binary() {
        let size = value.size();
        match (info.min_size, info.max_size) {
            (Some(min), _) if size < min as usize => {
                found.push((Rule::Size, format!("length {size} is below the minimum of {min}")));
            }
            (_, Some(max)) if size > max as usize => {
                found.push((Rule::Size, format!("length {size} exceeds the maximum of {max}")));
            }
            _ => {}
        }
    }

    if let (Some((min, max)), Some(n)) = (info.range, value.as_integer()) {
        if n < i128::from(min) || n > i128::from(max) {
            let message = if max == i64::MAX {
                format!("{n} is below the minimum of {min}")
            } else {
                format!("{n} is outside {min}..{max}")
            };
            found.push((Rule::Range, message));
        }
    }

    if let Value::String(text) = value {
        let mismatch = info
            .pattern
            .and_then(|pattern| patterns.get(pattern).map(|re| (pattern, re)))
            .filter(|(_, re)| !re.is_match(text));
        if let Some((pattern, _)) = mismatch {
            found.push((Rule::Pattern, format!("'{text}' does not match {pattern}")));
        }
        if !info.values.is_empty() && !info.values.contains(&text.as_str()) {
            found.push((
                Rule::Enumeration,
                format!("'{text}' is not one of [{}]", info.values.join(", ")),
            ));
        }
    }

    found
}

fn check_table(table: &dyn TableNode, at: &ParamPath, out: &mut Vec<Violation>) {
    let keys = table.entry_template().unique_keys();
    let mut aliases: HashMap<String, u32> = HashMap::new();
    let mut seen: HashMap<(&'static str, String), u32> = HashMap::new();

    for instance in table.instance_numbers() {
        let Some(entry) = table.entry(instance) else {
            continue;
        };
        if let Some(alias) = entry.alias() {
            if let Some(first) = aliases.get(&alias) {
                out.push(Violation {
                    path: at.instance(instance).param("Alias").to_string(),
                    rule: Rule::DuplicateAlias,
                    message: format!("alias '{alias}' is already used by instance {first}"),
                });
            } else {
                aliases.insert(alias, instance);
            }
        }
        for key in keys {
            let Ok(Some(value)) = entry.param(key) else {
                continue;
            };
            let text = value.to_string();
            if text.is_empty() {
                continue;
            }
            match seen.get(&(*key, text.clone())) {
                Some(first) => out.push(Violation {
                    path: at.instance(instance).param(key).to_string(),
                    rule: Rule::DuplicateKey,
                    message: format!("{key} '{text}' is already used by instance {first}"),
                }),
                None => {
                    seen.insert((*key, text), instance);
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tr181::{Device, Host, Hosts, ManagementServer};
    use crate::tr196::{Epc, EpcPlmn};
    use crate::value::ParamType;

    #[test]
    fn clean_tree_has_no_violations() {
        let device = Device::default().with_management_server(ManagementServer::default());
        assert!(validate(&device).is_empty());
    }

    #[test]
    fn reports_enum_range_and_size() {
        let mut device = Device::default();
        let ms = device.management_server_mut();
        ms.set_instance_mode("ByName".into());
        ms.set_cwmp_retry_minimum_wait_interval(0);
        ms.set_url("x".repeat(300));

        let violations = validate(&device);
        let rules: Vec<_> = violations.iter().map(|v| (v.path.as_str(), v.rule)).collect();
        assert_eq!(
            rules,
            vec![
                ("Device.ManagementServer.URL", Rule::Size),
                ("Device.ManagementServer.CWMPRetryMinimumWaitInterval", Rule::Range),
                ("Device.ManagementServer.InstanceMode", Rule::Enumeration),
            ]
        );
    }

    #[test]
    fn reports_pattern_mismatch() {
        let epc = Epc::default().with_plmn_list(EpcPlmn::default().with_plmn_id("0010".into()));
        let violations = validate(&epc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, Rule::Pattern);
        assert_eq!(violations[0].path, "EPC.PLMNList.1.PLMNID");
    }

    #[test]
    fn reports_duplicate_alias_and_key() {
        let host = |alias: &str, mac: &str| {
            Host::default()
                .with_alias(alias.into())
                .with_phys_address(mac.into())
        };
        let device = Device::default().with_hosts(
            Hosts::default()
                .with_host(host("a", "00:11:22:33:44:55"))
                .with_host(host("b", "00:11:22:33:44:66"))
                .with_host(host("a", "00:11:22:33:44:55")),
        );

        let violations = validate(&device);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].rule, Rule::DuplicateAlias);
        assert_eq!(violations[0].path, "Device.Hosts.Host.3.Alias");
        assert_eq!(violations[1].rule, Rule::DuplicateKey);
        assert!(violations[1].message.contains("instance 1"));
    }

    #[test]
    fn check_value_rejects_with_reason() {
        let info = ParamInfo::new("Channel", ParamType::UnsignedInt).rw().range(1, 255);
        assert!(check_value(&info, &Value::UnsignedInt(11)).is_ok());
        let err = check_value(&info, &Value::UnsignedInt(300)).unwrap_err();
        assert!(err.to_string().contains("300 is outside 1..255"));
        assert_eq!(err.fault_code(), 9007);
    }
}
