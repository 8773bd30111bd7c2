//! Document handle - the seam to the upstream parser.
//!
//! Owns the pool of indirect objects produced by the parser and performs
//! bounded indirect-reference resolution. The conformance flavour rides
//! along as opaque context for entity construction.

use crate::error::{ModelError, Result};
use crate::model::objects::{ObjRef, PdfObject};
use rustc_hash::{FxHashMap, FxHashSet};

/// Conformance profile tag. Opaque to this crate; selected by the caller
/// and carried into entities for the rule engine's benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavour {
    #[default]
    NoFlavour,
    PdfA1A,
    PdfA1B,
    PdfA2B,
    PdfA3B,
}

static NULL_OBJECT: PdfObject = PdfObject::Null;

/// Handle to a parsed document: indirect object pool plus flavour tag.
///
/// The pool is read-only once populated; there is exactly one reader
/// traversal at a time, so no locking is needed.
#[derive(Debug, Default)]
pub struct DocumentHandle {
    pool: FxHashMap<u32, PdfObject>,
    flavour: Flavour,
}

impl DocumentHandle {
    /// Create an empty document handle.
    pub fn new(flavour: Flavour) -> Self {
        Self {
            pool: FxHashMap::default(),
            flavour,
        }
    }

    /// The conformance flavour this document is being checked against.
    pub const fn flavour(&self) -> Flavour {
        self.flavour
    }

    /// Register an indirect object under its object number.
    pub fn insert(&mut self, objid: u32, mut obj: PdfObject) {
        if let PdfObject::Stream(stream) = &mut obj {
            stream.set_objid(objid, 0);
        }
        self.pool.insert(objid, obj);
    }

    /// Look up an indirect object by object number.
    pub fn get(&self, objid: u32) -> Option<&PdfObject> {
        self.pool.get(&objid)
    }

    /// Look up an indirect object by object number, erroring when absent.
    pub fn getobj(&self, objid: u32) -> Result<&PdfObject> {
        self.pool
            .get(&objid)
            .ok_or(ModelError::ObjectNotFound(objid))
    }

    /// Follow a reference chain to its target object.
    ///
    /// A revisited object number is a cycle; a missing object is a
    /// dangling reference. Both error.
    pub fn try_resolve<'a>(&'a self, obj: &'a PdfObject) -> Result<&'a PdfObject> {
        let mut current = obj;
        let mut seen = FxHashSet::default();
        while let PdfObject::Ref(r) = current {
            if !seen.insert(r.objid) {
                return Err(ModelError::CircularReference(r.objid));
            }
            current = self.getobj(r.objid)?;
        }
        Ok(current)
    }

    /// Total variant of [`Self::try_resolve`]: failures are reported to the
    /// diagnostic sink and degrade to Null.
    pub fn resolve<'a>(&'a self, obj: &'a PdfObject) -> &'a PdfObject {
        match self.try_resolve(obj) {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::debug!(%err, "indirect reference resolution failed");
                &NULL_OBJECT
            }
        }
    }

    /// Indirect coordinates of an object, when it is a reference.
    ///
    /// Used to derive entity identifiers and cycle-guard trails.
    pub fn locate(&self, obj: &PdfObject) -> Option<ObjRef> {
        match obj {
            PdfObject::Ref(r) => Some(*r),
            PdfObject::Stream(s) => s.objref(),
            _ => None,
        }
    }
}
