//! miranda - a typed PDF validation-model extraction library.
//!
//! Builds a strongly-typed, link-navigable entity graph on top of a parsed
//! document's primitive object model. A conformance-rule engine drives
//! traversal entirely through [`Entity::type_tag`], [`Entity::identifier`]
//! and [`Entity::get_linked_objects`]; this crate never parses raw bytes
//! and never mutates the source document.

pub mod casting;
pub mod document;
pub mod entity;
pub mod error;
pub mod interp;
pub mod model;
pub mod resources;

pub use document::{DocumentHandle, Flavour};
pub use entity::Entity;
pub use error::{ModelError, Result};
pub use interp::{ContentOp, OperatorFactory};
pub use model::objects::{ObjRef, PdfObject, PdfStream};
pub use resources::InheritableResources;
