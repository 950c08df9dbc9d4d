// ── Parameter types and values ──
//
// CWMP carries every parameter as text tagged with an XSD type. `Value`
// is the typed form of that text, `ParamType` the tag, and `ParamKind`
// ties the Rust field types used by the node structs to both.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};

use crate::error::ModelError;

// ── ParamType ───────────────────────────────────────────────────────

/// XSD data type of a leaf parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum ParamType {
    #[strum(to_string = "xsd:boolean", serialize = "boolean")]
    Boolean,
    #[strum(to_string = "xsd:int", serialize = "int")]
    Int,
    #[strum(to_string = "xsd:unsignedInt", serialize = "unsignedInt")]
    UnsignedInt,
    #[strum(to_string = "xsd:long", serialize = "long")]
    Long,
    #[strum(to_string = "xsd:unsignedLong", serialize = "unsignedLong")]
    UnsignedLong,
    #[strum(to_string = "xsd:string", serialize = "string")]
    String,
    #[strum(to_string = "xsd:dateTime", serialize = "dateTime")]
    DateTime,
    #[strum(to_string = "xsd:hexBinary", serialize = "hexBinary")]
    HexBinary,
    #[strum(to_string = "xsd:base64", serialize = "base64", serialize = "xsd:base64Binary")]
    Base64,
}

impl ParamType {
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int | Self::UnsignedInt | Self::Long | Self::UnsignedLong
        )
    }

    pub fn is_binary(self) -> bool {
        matches!(self, Self::HexBinary | Self::Base64)
    }
}

impl Serialize for ParamType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Value ───────────────────────────────────────────────────────────

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Boolean(bool),
    Int(i32),
    UnsignedInt(u32),
    Long(i64),
    UnsignedLong(u64),
    String(String),
    DateTime(DateTime<Utc>),
    HexBinary(Vec<u8>),
    Base64(Vec<u8>),
}

impl Value {
    /// Parse the lexical form of a value of the given type.
    pub fn parse(kind: ParamType, text: &str) -> Result<Self, ModelError> {
        let invalid = |reason: String| ModelError::InvalidValue {
            kind,
            value: text.to_owned(),
            reason,
        };

        let value = match kind {
            ParamType::Boolean => match text.trim() {
                "true" | "1" => Self::Boolean(true),
                "false" | "0" => Self::Boolean(false),
                _ => return Err(invalid("expected true, false, 1 or 0".into())),
            },
            ParamType::Int => Self::Int(text.trim().parse().map_err(|e| invalid(format!("{e}")))?),
            ParamType::UnsignedInt => {
                Self::UnsignedInt(text.trim().parse().map_err(|e| invalid(format!("{e}")))?)
            }
            ParamType::Long => Self::Long(text.trim().parse().map_err(|e| invalid(format!("{e}")))?),
            ParamType::UnsignedLong => {
                Self::UnsignedLong(text.trim().parse().map_err(|e| invalid(format!("{e}")))?)
            }
            ParamType::String => Self::String(text.to_owned()),
            ParamType::DateTime => Self::DateTime(parse_datetime(text.trim()).ok_or_else(|| {
                invalid("expected an ISO 8601 timestamp such as 2024-01-01T00:00:00Z".into())
            })?),
            ParamType::HexBinary => {
                Self::HexBinary(hex::decode(text.trim()).map_err(|e| invalid(format!("{e}")))?)
            }
            ParamType::Base64 => {
                Self::Base64(BASE64.decode(text.trim()).map_err(|e| invalid(format!("{e}")))?)
            }
        };
        Ok(value)
    }

    pub fn kind(&self) -> ParamType {
        match self {
            Self::Boolean(_) => ParamType::Boolean,
            Self::Int(_) => ParamType::Int,
            Self::UnsignedInt(_) => ParamType::UnsignedInt,
            Self::Long(_) => ParamType::Long,
            Self::UnsignedLong(_) => ParamType::UnsignedLong,
            Self::String(_) => ParamType::String,
            Self::DateTime(_) => ParamType::DateTime,
            Self::HexBinary(_) => ParamType::HexBinary,
            Self::Base64(_) => ParamType::Base64,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer view used by range checks.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(i128::from(*v)),
            Self::UnsignedInt(v) => Some(i128::from(*v)),
            Self::Long(v) => Some(i128::from(*v)),
            Self::UnsignedLong(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    /// Length used by size constraints: characters for strings, bytes for
    /// binary values, the lexical length for everything else.
    pub fn size(&self) -> usize {
        match self {
            Self::String(s) => s.chars().count(),
            Self::HexBinary(b) | Self::Base64(b) => b.len(),
            other => other.to_string().len(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UnsignedInt(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::UnsignedLong(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::DateTime(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::HexBinary(v) => f.write_str(&hex::encode(v)),
            Self::Base64(v) => f.write_str(&BASE64.encode(v)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

// ── Binary newtypes ─────────────────────────────────────────────────

/// `xsd:hexBinary` parameter content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexBinary(pub Vec<u8>);

/// `xsd:base64` parameter content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base64(pub Vec<u8>);

macro_rules! binary_newtype {
    ($name:ident, $encode:expr, $decode:expr) => {
        impl $name {
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<Vec<u8>> for $name {
            fn from(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }
        }

        impl From<&[u8]> for $name {
            fn from(bytes: &[u8]) -> Self {
                Self(bytes.to_vec())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let encode: fn(&[u8]) -> String = $encode;
                f.write_str(&encode(&self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                let decode: fn(&str) -> Result<Vec<u8>, String> = $decode;
                decode(text.trim()).map(Self).map_err(serde::de::Error::custom)
            }
        }
    };
}

binary_newtype!(HexBinary, |b| hex::encode(b), |s| hex::decode(s)
    .map_err(|e| e.to_string()));
binary_newtype!(Base64, |b| BASE64.encode(b), |s| BASE64
    .decode(s)
    .map_err(|e| e.to_string()));

// ── ParamKind ───────────────────────────────────────────────────────

/// Rust types that can back a leaf parameter field.
///
/// `Literal` is the type a declared default is written in, so that
/// defaults such as `0` or `"Disabled"` need no suffixes or conversions
/// at the declaration site.
pub trait ParamKind: Sized {
    const TYPE: ParamType;
    type Literal;

    fn from_literal(literal: Self::Literal) -> Self;
    fn to_value(&self) -> Value;
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! copy_kind {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl ParamKind for $ty {
            const TYPE: ParamType = ParamType::$variant;
            type Literal = $ty;

            fn from_literal(literal: $ty) -> Self {
                literal
            }

            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    )*};
}

copy_kind!(
    bool => Boolean,
    i32 => Int,
    u32 => UnsignedInt,
    i64 => Long,
    u64 => UnsignedLong,
    DateTime<Utc> => DateTime,
);

impl ParamKind for String {
    const TYPE: ParamType = ParamType::String;
    type Literal = &'static str;

    fn from_literal(literal: &'static str) -> Self {
        literal.to_owned()
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl ParamKind for HexBinary {
    const TYPE: ParamType = ParamType::HexBinary;
    type Literal = &'static [u8];

    fn from_literal(literal: &'static [u8]) -> Self {
        Self(literal.to_vec())
    }

    fn to_value(&self) -> Value {
        Value::HexBinary(self.0.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::HexBinary(b) => Some(Self(b)),
            _ => None,
        }
    }
}

impl ParamKind for Base64 {
    const TYPE: ParamType = ParamType::Base64;
    type Literal = &'static [u8];

    fn from_literal(literal: &'static [u8]) -> Self {
        Self(literal.to_vec())
    }

    fn to_value(&self) -> Value {
        Value::Base64(self.0.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Base64(b) => Some(Self(b)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn param_type_round_trips_xsd_names() {
        assert_eq!(ParamType::UnsignedInt.to_string(), "xsd:unsignedInt");
        assert_eq!(
            "xsd:hexBinary".parse::<ParamType>().unwrap(),
            ParamType::HexBinary
        );
        assert_eq!("boolean".parse::<ParamType>().unwrap(), ParamType::Boolean);
        assert_eq!(
            "xsd:base64Binary".parse::<ParamType>().unwrap(),
            ParamType::Base64
        );
    }

    #[test]
    fn booleans_accept_numeric_forms() {
        assert_eq!(
            Value::parse(ParamType::Boolean, "1").unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::parse(ParamType::Boolean, "false").unwrap(),
            Value::Boolean(false)
        );
        assert!(Value::parse(ParamType::Boolean, "yes").is_err());
        assert_eq!(Value::Boolean(true).to_string(), "true");
    }

    #[test]
    fn unsigned_rejects_negative() {
        let err = Value::parse(ParamType::UnsignedInt, "-5").unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidValue {
                kind: ParamType::UnsignedInt,
                ..
            }
        ));
    }

    #[test]
    fn datetime_unknown_time_round_trips() {
        let v = Value::parse(ParamType::DateTime, "0001-01-01T00:00:00Z").unwrap();
        assert_eq!(v.to_string(), "0001-01-01T00:00:00Z");
    }

    #[test]
    fn datetime_without_zone_is_utc() {
        let v = Value::parse(ParamType::DateTime, "2024-03-01T12:30:00").unwrap();
        assert_eq!(v.to_string(), "2024-03-01T12:30:00Z");

        let v = Value::parse(ParamType::DateTime, "2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(v.to_string(), "2024-03-01T10:30:00Z");
    }

    #[test]
    fn binary_forms() {
        let v = Value::parse(ParamType::HexBinary, "DEADbeef").unwrap();
        assert_eq!(v, Value::HexBinary(vec![0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(v.to_string(), "deadbeef");
        assert_eq!(v.size(), 4);

        let v = Value::parse(ParamType::Base64, "aGVsbG8=").unwrap();
        assert_eq!(v, Value::Base64(b"hello".to_vec()));
        assert_eq!(v.to_string(), "aGVsbG8=");
    }

    #[test]
    fn string_size_counts_characters() {
        assert_eq!(Value::String("Grüße".into()).size(), 5);
    }

    #[test]
    fn hex_newtype_serializes_as_text() {
        let json = serde_json::to_string(&HexBinary(vec![0x0a, 0xff])).unwrap();
        assert_eq!(json, "\"0aff\"");
        let back: HexBinary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_bytes(), &[0x0a, 0xff]);
    }

    #[test]
    fn param_kind_conversions() {
        assert_eq!(42u32.to_value(), Value::UnsignedInt(42));
        assert_eq!(u32::from_value(Value::UnsignedInt(7)), Some(7));
        assert_eq!(u32::from_value(Value::Int(7)), None);
        assert_eq!(String::from_literal("Disabled"), "Disabled");
    }
}
