// ── Tree comparison ──

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::node::Node;
use crate::rpc;

/// One parameter-level difference between two trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum Change {
    Added { path: String, value: String },
    Removed { path: String, value: String },
    Modified { path: String, old: String, new: String },
}

impl Change {
    pub fn path(&self) -> &str {
        match self {
            Self::Added { path, .. } | Self::Removed { path, .. } | Self::Modified { path, .. } => {
                path
            }
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { path, value } => write!(f, "+ {path} = {value}"),
            Self::Removed { path, value } => write!(f, "- {path} = {value}"),
            Self::Modified { path, old, new } => write!(f, "~ {path}: {old} -> {new}"),
        }
    }
}

/// Parameter-level changes from `old` to `new`.
///
/// Changed and removed parameters come first, in `old`'s tree order,
/// followed by additions in `new`'s tree order. Objects or entries that
/// exist on one side only show up as their parameters.
pub fn diff(old: &dyn Node, new: &dyn Node) -> Vec<Change> {
    let flat = |root: &dyn Node| -> IndexMap<String, String> {
        rpc::flatten(root)
            .into_iter()
            .map(|pv| (pv.name, pv.value.to_string()))
            .collect()
    };
    let before = flat(old);
    let mut after = flat(new);

    let mut changes = Vec::new();
    for (path, old_value) in before {
        match after.shift_remove(&path) {
            Some(new_value) if new_value == old_value => {}
            Some(new_value) => changes.push(Change::Modified {
                path,
                old: old_value,
                new: new_value,
            }),
            None => changes.push(Change::Removed {
                path,
                value: old_value,
            }),
        }
    }
    changes.extend(
        after
            .into_iter()
            .map(|(path, value)| Change::Added { path, value }),
    );
    changes
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tr181::{Device, Host, Hosts};

    #[test]
    fn identical_trees_have_no_changes() {
        let device = Device::default().with_hosts(Hosts::default().with_host(Host::default()));
        assert!(diff(&device, &device.clone()).is_empty());
    }

    #[test]
    fn reports_modified_removed_added() {
        let old = Device::default().with_hosts(
            Hosts::default()
                .with_host(Host::default().with_host_name("laptop".into()))
                .with_host(Host::default().with_host_name("phone".into())),
        );
        let mut new = old.clone();
        new.hosts_mut().host_mut().remove(2);
        new.hosts_mut()
            .host_mut()
            .get_mut(1)
            .unwrap()
            .set_host_name("desktop".into());
        new.hosts_mut()
            .host_mut()
            .push(Host::default().with_host_name("tv".into()));

        let changes = diff(&old, &new);
        let rendered: Vec<_> = changes.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "~ Device.Hosts.Host.1.HostName: laptop -> desktop",
                "- Device.Hosts.Host.2.HostName = phone",
                "+ Device.Hosts.Host.3.HostName = tv",
            ]
        );
        assert_eq!(changes[1].path(), "Device.Hosts.Host.2.HostName");
    }

    #[test]
    fn serializes_with_change_tag() {
        let change = Change::Added {
            path: "Device.DeviceInfo.UpTime".into(),
            value: "5".into(),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["change"], "added");
        assert_eq!(json["value"], "5");
    }
}
