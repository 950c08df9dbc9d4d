// ── Object nodes ──
//
// `Node` is the object-safe view of every generated object type. The
// typed accessors on each struct are what application code uses; the
// generic tree walkers (rpc, xml, validate, schema, diff) only ever see
// `&dyn Node` / `&dyn TableNode`.

use crate::error::ModelError;
use crate::param::ParamInfo;
use crate::value::Value;

/// Whether a child of an object is a single object or a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Object,
    Table,
}

/// Static description of a child object or table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildInfo {
    pub name: &'static str,
    pub kind: ChildKind,
}

impl ChildInfo {
    pub const fn object(name: &'static str) -> Self {
        Self {
            name,
            kind: ChildKind::Object,
        }
    }

    pub const fn table(name: &'static str) -> Self {
        Self {
            name,
            kind: ChildKind::Table,
        }
    }
}

pub enum Child<'a> {
    Object(&'a dyn Node),
    Table(&'a dyn TableNode),
}

pub enum ChildMut<'a> {
    Object(&'a mut dyn Node),
    Table(&'a mut dyn TableNode),
}

/// A node of a TR-xxx parameter tree.
pub trait Node: std::fmt::Debug {
    /// Last name segment of the object's path (`WPS`, `Host`, ...).
    fn object_name(&self) -> &'static str;

    /// Path template as written in the defining document.
    fn schema_path(&self) -> &'static str;

    fn params(&self) -> &'static [ParamInfo];

    fn children(&self) -> &'static [ChildInfo];

    /// Parameters that must be unique across the entries of a table.
    fn unique_keys(&self) -> &'static [&'static str];

    /// Current value of a parameter; `Ok(None)` when unset.
    fn param(&self, name: &str) -> Result<Option<Value>, ModelError>;

    /// Store a parameter value. Only the type is checked; access mode and
    /// constraints are the caller's business.
    fn set_param(&mut self, name: &str, value: Value) -> Result<(), ModelError>;

    /// Present child object or table. Absent child objects yield `None`.
    fn child(&self, name: &str) -> Option<Child<'_>>;

    /// Mutable child, creating an absent child object on first access.
    fn child_mut(&mut self, name: &str) -> Option<ChildMut<'_>>;

    /// Default instance of a child object, or of a table's entry type.
    fn template(&self, name: &str) -> Option<Box<dyn Node>>;

    fn param_info(&self, name: &str) -> Option<&'static ParamInfo> {
        self.params().iter().find(|p| p.name == name)
    }

    fn child_info(&self, name: &str) -> Option<&'static ChildInfo> {
        self.children().iter().find(|c| c.name == name)
    }

    /// The entry's `Alias` parameter, when the object has one and it is set.
    fn alias(&self) -> Option<String> {
        match self.param("Alias") {
            Ok(Some(Value::String(alias))) => Some(alias),
            _ => None,
        }
    }
}

/// Object-safe view of a [`Table`](crate::table::Table).
pub trait TableNode: std::fmt::Debug {
    fn instance_numbers(&self) -> Vec<u32>;

    fn entry(&self, instance: u32) -> Option<&dyn Node>;

    fn entry_mut(&mut self, instance: u32) -> Option<&mut dyn Node>;

    /// Append a default entry and return its instance number.
    fn add_entry(&mut self) -> u32;

    /// Create a default entry at an explicit instance number.
    fn insert_entry(&mut self, instance: u32) -> Result<&mut dyn Node, ModelError>;

    fn remove_entry(&mut self, instance: u32) -> bool;

    fn entry_count(&self) -> usize;

    fn resolve_alias(&self, alias: &str) -> Option<u32>;

    fn entry_template(&self) -> Box<dyn Node>;
}
