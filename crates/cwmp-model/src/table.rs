// ── Multi-instance objects ──
//
// A table maps instance numbers to entries. Numbers are handed out
// monotonically and never reused: once `Host.3` is deleted, the next
// `AddObject` yields `Host.4` even if 3 was the highest.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;
use crate::node::{Node, TableNode};
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct Table<T> {
    entries: BTreeMap<u32, T>,
    next: u32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next: 1,
        }
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entry count as reported by `{Table}NumberOfEntries`.
    pub fn count(&self) -> u32 {
        u32::try_from(self.entries.len()).unwrap_or(u32::MAX)
    }

    /// Instance number the next `push` will use.
    pub fn next_instance(&self) -> u32 {
        self.next
    }

    /// Append an entry under the next instance number.
    pub fn push(&mut self, entry: T) -> u32 {
        let instance = self.next;
        self.entries.insert(instance, entry);
        self.next = instance.saturating_add(1);
        instance
    }

    /// Place an entry at an explicit instance number.
    pub fn insert(&mut self, instance: u32, entry: T) -> Result<&mut T, ModelError> {
        if instance == 0 {
            return Err(ModelError::InstanceNotFound {
                path: String::new(),
                instance: "0".into(),
            });
        }
        if self.entries.contains_key(&instance) {
            return Err(ModelError::DuplicateInstance {
                path: String::new(),
                instance,
            });
        }
        self.next = self.next.max(instance.saturating_add(1));
        Ok(self.entries.entry(instance).or_insert(entry))
    }

    pub fn get(&self, instance: u32) -> Option<&T> {
        self.entries.get(&instance)
    }

    pub fn get_mut(&mut self, instance: u32) -> Option<&mut T> {
        self.entries.get_mut(&instance)
    }

    pub fn remove(&mut self, instance: u32) -> Option<T> {
        self.entries.remove(&instance)
    }

    pub fn instances(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
        self.entries.iter_mut().map(|(k, v)| (*k, v))
    }
}

impl<T: Node> Table<T> {
    /// Entry whose `Alias` equals `alias`.
    pub fn find_alias(&self, alias: &str) -> Option<(u32, &T)> {
        self.iter()
            .find(|(_, entry)| entry.alias().as_deref() == Some(alias))
    }

    /// Entry whose parameter `name` currently holds `value`.
    pub fn find_by_key(&self, name: &str, value: &Value) -> Option<(u32, &T)> {
        self.iter()
            .find(|(_, entry)| matches!(entry.param(name), Ok(Some(ref v)) if v == value))
    }
}

impl<T: PartialEq> PartialEq for Table<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Node + Default + 'static> TableNode for Table<T> {
    fn instance_numbers(&self) -> Vec<u32> {
        self.instances().collect()
    }

    fn entry(&self, instance: u32) -> Option<&dyn Node> {
        self.get(instance).map(|e| e as &dyn Node)
    }

    fn entry_mut(&mut self, instance: u32) -> Option<&mut dyn Node> {
        self.get_mut(instance).map(|e| e as &mut dyn Node)
    }

    fn add_entry(&mut self) -> u32 {
        self.push(T::default())
    }

    fn insert_entry(&mut self, instance: u32) -> Result<&mut dyn Node, ModelError> {
        self.insert(instance, T::default())
            .map(|e| e as &mut dyn Node)
    }

    fn remove_entry(&mut self, instance: u32) -> bool {
        self.remove(instance).is_some()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn resolve_alias(&self, alias: &str) -> Option<u32> {
        self.find_alias(alias).map(|(n, _)| n)
    }

    fn entry_template(&self) -> Box<dyn Node> {
        Box::new(T::default())
    }
}

// ── serde: `{ "1": {...}, "2": {...} }` ─────────────────────────────

impl<T: Serialize> Serialize for Table<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (instance, entry) in &self.entries {
            map.serialize_entry(instance, entry)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Table<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for TableVisitor<T> {
            type Value = Table<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from instance number to entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = Table::new();
                while let Some((instance, entry)) = access.next_entry::<u32, T>()? {
                    if instance == 0 {
                        return Err(serde::de::Error::custom("instance numbers start at 1"));
                    }
                    if table.entries.insert(instance, entry).is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate instance {instance}"
                        )));
                    }
                    table.next = table.next.max(instance.saturating_add(1));
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}
