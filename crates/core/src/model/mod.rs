//! PDF model types - primitive objects, graphics state, and color spaces.
//!
//! This module contains the data model the entity layer is built over:
//! - `objects` - primitive object types (PdfObject, PdfStream, ObjRef)
//! - `state` - graphics state snapshots (GraphicState)
//! - `color` - color space classification (ColorSpace, ColorSpaceFamily)

pub mod color;
pub mod objects;
pub mod state;

// Re-export main types for convenience
pub use color::{ColorSpace, ColorSpaceFamily};
pub use objects::{ObjRef, PdfObject, PdfStream};
pub use state::GraphicState;
