// ── Parameter metadata ──
//
// Static descriptors for leaf parameters. The Broadband Forum documents
// attach access mode, notification policy, size/range/pattern limits,
// enumerations and units to every parameter; `ParamInfo` carries those
// as `const` data next to the generated node types.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::value::ParamType;

/// Declared access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
pub enum Access {
    #[strum(to_string = "R")]
    ReadOnly,
    #[strum(to_string = "W")]
    ReadWrite,
}

/// Active-notification policy (TR-106 `activeNotify` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "camelCase")]
pub enum ActiveNotify {
    #[default]
    Normal,
    /// The CPE may reject a request to enable active notification.
    CanDeny,
    /// Active notification is always on.
    ForceEnabled,
    /// Active notification is on unless the ACS turns it off.
    ForceDefaultEnabled,
}

/// Unit declared for a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
pub enum Unit {
    #[strum(to_string = "seconds")]
    Seconds,
    #[strum(to_string = "milliseconds")]
    Milliseconds,
    #[strum(to_string = "dBm")]
    Dbm,
    #[strum(to_string = "dB")]
    Db,
    #[strum(to_string = "Hz")]
    Hz,
    #[strum(to_string = "kHz")]
    Khz,
    #[strum(to_string = "MHz")]
    Mhz,
    #[strum(to_string = "Kbps")]
    Kbps,
    #[strum(to_string = "Mbps")]
    Mbps,
    #[strum(to_string = "bytes")]
    Bytes,
    #[strum(to_string = "percent")]
    Percent,
}

/// Static descriptor of a leaf parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: &'static str,
    pub kind: ParamType,
    pub access: Access,
    pub notify: ActiveNotify,
    pub min_size: Option<u32>,
    pub max_size: Option<u32>,
    pub range: Option<(i64, i64)>,
    pub pattern: Option<&'static str>,
    pub values: &'static [&'static str],
    pub unit: Option<Unit>,
    /// Derived from the tree (a table's `NumberOfEntries`), never stored.
    pub computed: bool,
}

impl ParamInfo {
    pub const fn new(name: &'static str, kind: ParamType) -> Self {
        Self {
            name,
            kind,
            access: Access::ReadOnly,
            notify: ActiveNotify::Normal,
            min_size: None,
            max_size: None,
            range: None,
            pattern: None,
            values: &[],
            unit: None,
            computed: false,
        }
    }

    // Builder methods below are spelled the way declarations read in the
    // `cwmp_object!` blocks: `[rw, size(0, 64), unit(Unit::Seconds)]`.

    pub const fn ro(mut self) -> Self {
        self.access = Access::ReadOnly;
        self
    }

    pub const fn rw(mut self) -> Self {
        self.access = Access::ReadWrite;
        self
    }

    pub const fn notify(mut self, notify: ActiveNotify) -> Self {
        self.notify = notify;
        self
    }

    pub const fn size(mut self, min: u32, max: u32) -> Self {
        self.min_size = Some(min);
        self.max_size = Some(max);
        self
    }

    pub const fn max(mut self, max: u32) -> Self {
        self.max_size = Some(max);
        self
    }

    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub const fn min(mut self, min: i64) -> Self {
        self.range = Some((min, i64::MAX));
        self
    }

    pub const fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub const fn values(mut self, values: &'static [&'static str]) -> Self {
        self.values = values;
        self
    }

    pub const fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn is_writable(&self) -> bool {
        self.access == Access::ReadWrite
    }

    /// Human-readable summary of the declared constraints, e.g.
    /// `size 0..64, enum [Up, Down]`.
    pub fn constraint_summary(&self) -> String {
        let mut parts = Vec::new();
        match (self.min_size, self.max_size) {
            (Some(min), Some(max)) => parts.push(format!("size {min}..{max}")),
            (None, Some(max)) => parts.push(format!("size ..{max}")),
            (Some(min), None) => parts.push(format!("size {min}..")),
            (None, None) => {}
        }
        if let Some((min, max)) = self.range {
            if max == i64::MAX {
                parts.push(format!("range {min}.."));
            } else {
                parts.push(format!("range {min}..{max}"));
            }
        }
        if let Some(pattern) = self.pattern {
            parts.push(format!("pattern {pattern}"));
        }
        if !self.values.is_empty() {
            parts.push(format!("enum [{}]", self.values.join(", ")));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: ParamInfo = ParamInfo::new("Status", ParamType::String)
        .ro()
        .values(&["Up", "Down"]);

    const NAME: ParamInfo = ParamInfo::new("Name", ParamType::String)
        .rw()
        .size(0, 64)
        .notify(ActiveNotify::CanDeny);

    #[test]
    fn builders_compose_in_const_context() {
        assert_eq!(STATUS.access, Access::ReadOnly);
        assert_eq!(STATUS.values, &["Up", "Down"]);
        assert!(NAME.is_writable());
        assert_eq!(NAME.max_size, Some(64));
        assert_eq!(NAME.notify, ActiveNotify::CanDeny);
    }

    #[test]
    fn constraint_summary_lists_everything() {
        assert_eq!(STATUS.constraint_summary(), "enum [Up, Down]");
        assert_eq!(NAME.constraint_summary(), "size 0..64");

        let interval = ParamInfo::new("PeriodicInformInterval", ParamType::UnsignedInt).min(1);
        assert_eq!(interval.constraint_summary(), "range 1..");
    }

    #[test]
    fn metadata_display() {
        assert_eq!(Access::ReadWrite.to_string(), "W");
        assert_eq!(ActiveNotify::CanDeny.to_string(), "canDeny");
        assert_eq!(Unit::Dbm.to_string(), "dBm");
    }
}
