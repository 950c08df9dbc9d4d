//! Typed object model of the Broadband Forum CWMP (TR-069) data models.
//!
//! Every object of the TR-098, TR-104, TR-181 and TR-196 parameter trees
//! is a plain Rust struct with typed, optional parameter fields, lazily
//! created child objects and instance tables:
//!
//! - **Node types** ([`tr098`], [`tr104`], [`tr181`], [`tr196`]): declared
//!   once each with the `cwmp_object!` generator, which
//!   emits accessors, `with_*` builders, serde derives, a
//!   [`ParamInfo`] descriptor table and the object-safe [`Node`] impl.
//!
//! - **Addressing** ([`ParamPath`]): dot-separated CWMP names including
//!   `{i}` templates and `[alias]` segments.
//!
//! - **Operations** ([`rpc`]): `GetParameterValues`, `GetParameterNames`,
//!   atomic `SetParameterValues`, `AddObject` and `DeleteObject` on an
//!   in-memory tree, reporting CWMP fault codes.
//!
//! - **Tooling**: constraint checking ([`validate`]), schema listing
//!   ([`schema`]), tree comparison ([`diff`]) and the XML / JSON / YAML
//!   codecs of [`Document`].
//!
//! There is no transport here: SOAP envelopes, sessions and Inform
//! handling belong to whatever agent embeds the model.

pub mod common;
pub mod diff;
pub mod document;
pub mod error;
pub(crate) mod macros;
pub mod node;
pub mod param;
pub mod path;
pub mod rpc;
pub mod schema;
pub mod table;
pub mod validate;
pub mod value;
pub mod xml;

pub mod tr098;
pub mod tr104;
pub mod tr181;
pub mod tr196;

// ── Primary re-exports ──────────────────────────────────────────────
pub use diff::{Change, diff};
pub use document::{DataModel, Document, DocumentFormat};
pub use error::{ModelError, ParameterFault};
pub use node::{Child, ChildInfo, ChildKind, ChildMut, Node, TableNode};
pub use param::{Access, ActiveNotify, ParamInfo, Unit};
pub use path::{ParamPath, Segment};
pub use rpc::{ParameterInfo, ParameterValue};
pub use schema::ParamSchema;
pub use table::Table;
pub use validate::{Rule, Violation};
pub use value::{Base64, HexBinary, ParamKind, ParamType, Value};
