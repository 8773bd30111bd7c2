//! Inheritable resource dictionaries.
//!
//! Nested content scopes (pages, form XObjects) each carry a resource
//! dictionary; a child inherits its parent's entries unless it defines its
//! own. The chain structurally shares ancestor nodes; extending appends one
//! link and never copies ancestor data.

use crate::document::DocumentHandle;
use crate::model::objects::PdfObject;
use std::sync::Arc;

#[derive(Debug)]
struct Node<'a> {
    parent: Option<Arc<Node<'a>>>,
    /// The scope's resource dictionary; possibly a reference, possibly not
    /// a dictionary at all. Resolved lazily at lookup time.
    scope: &'a PdfObject,
}

/// An immutable, possibly-chained resource dictionary snapshot.
#[derive(Debug, Clone, Default)]
pub struct InheritableResources<'a> {
    head: Option<Arc<Node<'a>>>,
}

impl<'a> InheritableResources<'a> {
    /// The well-known "no resources" sentinel.
    pub const fn empty() -> Self {
        Self { head: None }
    }

    /// Whether any scope has contributed resources to this chain.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Produce a new snapshot whose lookups consult `child` first and fall
    /// back to this chain for any key absent in the child.
    ///
    /// Extending the empty sentinel wraps the child alone.
    pub fn extend(&self, child: &'a PdfObject) -> Self {
        Self {
            head: Some(Arc::new(Node {
                parent: self.head.clone(),
                scope: child,
            })),
        }
    }

    /// Look up `name` within `category` (e.g. "XObject", "ColorSpace"),
    /// walking the chain child-first. A key defined in a child scope
    /// shadows the same key in every ancestor; a key absent from every
    /// level resolves to nothing.
    pub fn lookup(
        &self,
        doc: &'a DocumentHandle,
        category: &str,
        name: &str,
    ) -> Option<&'a PdfObject> {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            if let PdfObject::Dict(scope) = doc.resolve(n.scope)
                && let Some(entry) = scope.get(category)
                && let PdfObject::Dict(entries) = doc.resolve(entry)
                && let Some(obj) = entries.get(name)
            {
                return Some(obj);
            }
            node = n.parent.as_deref();
        }
        None
    }
}
