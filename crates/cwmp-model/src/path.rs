// ── Parameter path addressing ──
//
// CWMP names every object and parameter by a dot-separated path:
//
//   Device.WiFi.AccessPoint.2.AssociatedDevice.1.MACAddress   parameter
//   Device.WiFi.AccessPoint.2.                                object (partial path)
//   Device.GRE.Tunnel.{i}.Interface.{i}.                      schema template
//   Device.Hosts.Host.[laptop].HostName                       alias-based addressing

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One component of a parameter path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Name(String),
    Instance(u32),
    Alias(String),
    /// `{i}` in schema templates.
    Placeholder,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(n) => f.write_str(n),
            Self::Instance(i) => write!(f, "{i}"),
            Self::Alias(a) => write!(f, "[{a}]"),
            Self::Placeholder => f.write_str("{i}"),
        }
    }
}

/// A parsed parameter or object path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ParamPath {
    segments: Vec<Segment>,
    partial: bool,
}

impl ParamPath {
    /// The empty partial path, addressing the whole tree.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
            partial: true,
        }
    }

    pub fn parse(text: &str) -> Result<Self, ModelError> {
        if text.is_empty() {
            return Ok(Self::root());
        }
        if text.starts_with('.') {
            return Err(ModelError::invalid_path(text, "leading '.'"));
        }

        let partial = text.ends_with('.');
        let body = if partial {
            &text[..text.len() - 1]
        } else {
            text
        };

        let mut segments = Vec::new();
        let mut rest = body;
        while !rest.is_empty() {
            let (segment, tail) = if let Some(after) = rest.strip_prefix('[') {
                let close = after
                    .find(']')
                    .ok_or_else(|| ModelError::invalid_path(text, "unterminated alias '['"))?;
                let alias = &after[..close];
                if alias.is_empty() {
                    return Err(ModelError::invalid_path(text, "empty alias"));
                }
                let tail = &after[close + 1..];
                if !tail.is_empty() && !tail.starts_with('.') {
                    return Err(ModelError::invalid_path(text, "alias must end a segment"));
                }
                (Segment::Alias(alias.to_owned()), tail)
            } else {
                let end = rest.find('.').unwrap_or(rest.len());
                (parse_segment(text, &rest[..end])?, &rest[end..])
            };
            segments.push(segment);

            rest = match tail.strip_prefix('.') {
                Some("") => return Err(ModelError::invalid_path(text, "empty segment")),
                Some(next) => next,
                None => tail,
            };
        }

        if segments.is_empty() {
            return Err(ModelError::invalid_path(text, "empty segment"));
        }
        if !partial && !matches!(segments.last(), Some(Segment::Name(_))) {
            return Err(ModelError::invalid_path(
                text,
                "a parameter path must end with a parameter name",
            ));
        }

        Ok(Self { segments, partial })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// `true` for object paths (trailing `.`), `false` for parameter paths.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parameter name of a parameter path.
    pub fn param_name(&self) -> Option<&str> {
        if self.partial {
            return None;
        }
        match self.segments.last() {
            Some(Segment::Name(n)) => Some(n),
            _ => None,
        }
    }

    /// The object path containing this path's last segment.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(Self {
            segments,
            partial: true,
        })
    }

    /// The object path made of the first `len` segments.
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            segments: self.segments[..len.min(self.segments.len())].to_vec(),
            partial: true,
        }
    }

    /// Append an object name, producing a partial path.
    pub fn child(&self, name: &str) -> Self {
        self.extend(Segment::Name(name.to_owned()), true)
    }

    /// Append an instance number, producing a partial path.
    pub fn instance(&self, instance: u32) -> Self {
        self.extend(Segment::Instance(instance), true)
    }

    /// Append a parameter name, producing a parameter path.
    pub fn param(&self, name: &str) -> Self {
        self.extend(Segment::Name(name.to_owned()), false)
    }

    fn extend(&self, segment: Segment, partial: bool) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments, partial }
    }

    /// Replace every instance number and alias with `{i}`.
    pub fn schema_form(&self) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Instance(_) | Segment::Alias(_) => Segment::Placeholder,
                other => other.clone(),
            })
            .collect();
        Self {
            segments,
            partial: self.partial,
        }
    }

    /// Does this concrete path instantiate the given schema template?
    pub fn matches_schema(&self, template: &Self) -> bool {
        self.partial == template.partial
            && self.segments.len() == template.segments.len()
            && self
                .segments
                .iter()
                .zip(&template.segments)
                .all(|(seg, tpl)| match (seg, tpl) {
                    (Segment::Instance(_) | Segment::Alias(_) | Segment::Placeholder, Segment::Placeholder) => true,
                    (a, b) => a == b,
                })
    }

    /// Is `self` equal to or below the object path `prefix`?
    pub fn starts_with(&self, prefix: &Self) -> bool {
        prefix.partial
            && self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }
}

fn parse_segment(full: &str, raw: &str) -> Result<Segment, ModelError> {
    if raw.is_empty() {
        return Err(ModelError::invalid_path(full, "empty segment"));
    }
    if raw == "{i}" {
        return Ok(Segment::Placeholder);
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        let n: u32 = raw
            .parse()
            .map_err(|_| ModelError::invalid_path(full, format!("instance number '{raw}' out of range")))?;
        if n == 0 {
            return Err(ModelError::invalid_path(full, "instance numbers start at 1"));
        }
        return Ok(Segment::Instance(n));
    }

    let mut chars = raw.chars();
    let first_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(ModelError::invalid_path(
            full,
            format!("'{raw}' is not a valid name"),
        ));
    }
    Ok(Segment::Name(raw.to_owned()))
}

impl fmt::Display for ParamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        if self.partial && !self.segments.is_empty() {
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl FromStr for ParamPath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_parameter_path() {
        let p = ParamPath::parse("Device.WiFi.AccessPoint.2.AssociatedDevice.1.MACAddress").unwrap();
        assert!(!p.is_partial());
        assert_eq!(p.param_name(), Some("MACAddress"));
        assert_eq!(p.segments()[3], Segment::Instance(2));
        assert_eq!(
            p.to_string(),
            "Device.WiFi.AccessPoint.2.AssociatedDevice.1.MACAddress"
        );
    }

    #[test]
    fn parses_partial_and_root() {
        let p = ParamPath::parse("Device.Hosts.").unwrap();
        assert!(p.is_partial());
        assert_eq!(p.to_string(), "Device.Hosts.");
        assert!(ParamPath::parse("").unwrap().is_root());
    }

    #[test]
    fn parses_alias_segments() {
        let p = ParamPath::parse("Device.Hosts.Host.[laptop.lan].HostName").unwrap();
        assert_eq!(p.segments()[3], Segment::Alias("laptop.lan".into()));
        assert_eq!(p.to_string(), "Device.Hosts.Host.[laptop.lan].HostName");
    }

    #[test]
    fn rejects_malformed_paths() {
        for bad in [
            ".Device.",
            "Device..Hosts.",
            "Device.Hosts.Host.0.",
            "Device.Hosts.Host.99999999999.",
            "Device.Ho$ts.",
            "Device.Hosts.Host.[abc",
            "Device.Hosts.Host.1",
            "Device.Hosts.Host.[]",
        ] {
            assert!(ParamPath::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn schema_form_and_matching() {
        let template = ParamPath::parse("Device.GRE.Tunnel.{i}.Interface.{i}.").unwrap();
        let concrete = ParamPath::parse("Device.GRE.Tunnel.3.Interface.1.").unwrap();
        assert!(concrete.matches_schema(&template));
        assert_eq!(concrete.schema_form(), template);

        let other = ParamPath::parse("Device.GRE.Tunnel.3.Stats.").unwrap();
        assert!(!other.matches_schema(&template));
    }

    #[test]
    fn derived_paths() {
        let base = ParamPath::parse("Device.Hosts.").unwrap();
        let host = base.child("Host").instance(4);
        assert_eq!(host.to_string(), "Device.Hosts.Host.4.");
        let name = host.param("HostName");
        assert_eq!(name.to_string(), "Device.Hosts.Host.4.HostName");
        assert!(name.starts_with(&base));
        assert_eq!(name.parent().unwrap(), host);
        assert_eq!(name.prefix(2), base);
        assert_eq!(name.prefix(99).to_string(), "Device.Hosts.Host.4.HostName.");
    }
}
