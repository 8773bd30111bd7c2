//! Entities wrapping bare primitive values.

use crate::casting::safe_number;
use crate::model::objects::{ObjRef, PdfObject};
use std::collections::HashMap;

/// A numeric primitive surfaced into the entity graph.
///
/// Whether it is an integer or a real is carried by the enclosing
/// [`crate::entity::Entity`] variant.
#[derive(Debug, Clone)]
pub struct CosNumber<'a> {
    obj: &'a PdfObject,
}

impl<'a> CosNumber<'a> {
    /// Callers guarantee `obj` is numeric.
    pub(crate) fn new(obj: &'a PdfObject) -> Self {
        Self { obj }
    }

    /// The numeric value, coerced to f64.
    pub fn value(&self) -> f64 {
        safe_number(self.obj).unwrap_or_default()
    }
}

/// A dictionary primitive surfaced into the entity graph.
#[derive(Debug, Clone)]
pub struct CosDict<'a> {
    dict: &'a HashMap<String, PdfObject>,
    id: Option<ObjRef>,
}

impl<'a> CosDict<'a> {
    pub(crate) fn new(dict: &'a HashMap<String, PdfObject>, id: Option<ObjRef>) -> Self {
        Self { dict, id }
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.dict.len()
    }

    /// Key-presence test.
    pub fn contains(&self, key: &str) -> bool {
        self.dict.contains_key(key)
    }

    /// Entry by key.
    pub fn get(&self, key: &str) -> Option<&'a PdfObject> {
        self.dict.get(key)
    }

    pub(crate) fn objref(&self) -> Option<ObjRef> {
        self.id
    }
}
