//! External object (XObject) classification and soft-mask resolution.
//!
//! Dispatch is a closed match over the declared subtype: forms extend the
//! inherited resource chain with their own resources, images and
//! PostScript objects keep the enclosing chain, and anything unrecognized
//! classifies to nothing. Soft-mask chains are cycle-safe: each entity
//! carries the trail of indirect identities that produced it.

use crate::document::DocumentHandle;
use crate::entity::{Entity, MAX_LINKED_ELEMENTS, ResourcesEntity};
use crate::model::objects::{ObjRef, PdfObject, PdfStream};
use crate::resources::InheritableResources;

/// Name of the link to the soft-mask image.
pub const SMASK: &str = "SMask";
/// Name of the link to a form's resource dictionary.
pub const RESOURCES: &str = "resources";

const OPI_KEY: &str = "OPI";

/// An external object: form, image, or PostScript/legacy.
///
/// Which of the three it is lives in the enclosing [`Entity`] variant; the
/// payload is shared.
#[derive(Debug, Clone)]
pub struct XObjectEntity<'a> {
    stream: &'a PdfStream,
    resources: InheritableResources<'a>,
    doc: &'a DocumentHandle,
    /// Indirect identities on the resolution path to this object.
    trail: Vec<ObjRef>,
}

/// Classify a raw external object into its entity variant.
///
/// Forms carry their own resource extension of the inherited chain; an
/// absent or unrecognized subtype classifies to `None`, not an error.
pub fn classify<'a>(
    stream: &'a PdfStream,
    inherited: &InheritableResources<'a>,
    doc: &'a DocumentHandle,
) -> Option<Entity<'a>> {
    let trail = stream.objref().into_iter().collect();
    classify_with_trail(stream, inherited, doc, trail)
}

pub(crate) fn classify_with_trail<'a>(
    stream: &'a PdfStream,
    inherited: &InheritableResources<'a>,
    doc: &'a DocumentHandle,
    trail: Vec<ObjRef>,
) -> Option<Entity<'a>> {
    let subtype = stream.get("Subtype").and_then(|o| doc.resolve(o).as_name().ok());
    match subtype {
        Some("Form") => {
            let resources = match stream.get("Resources") {
                Some(own) => inherited.extend(own),
                None => inherited.clone(),
            };
            Some(Entity::XObjectForm(XObjectEntity {
                stream,
                resources,
                doc,
                trail,
            }))
        }
        Some("Image") => Some(Entity::XObjectImage(XObjectEntity {
            stream,
            resources: inherited.clone(),
            doc,
            trail,
        })),
        Some("PS") => Some(Entity::XObjectGeneric(XObjectEntity {
            stream,
            resources: inherited.clone(),
            doc,
            trail,
        })),
        _ => {
            tracing::debug!(?subtype, "external object with unrecognized subtype");
            None
        }
    }
}

impl<'a> XObjectEntity<'a> {
    /// Declared subtype name, if any.
    pub fn subtype(&self) -> Option<&'a str> {
        self.stream
            .get("Subtype")
            .and_then(|o| self.doc.resolve(o).as_name().ok())
    }

    /// The resource chain in effect inside this object: a form's own
    /// extension, or the enclosing chain for non-forms.
    pub fn resources(&self) -> &InheritableResources<'a> {
        &self.resources
    }

    /// Whether the object's dictionary carries an OPI entry.
    pub fn contains_opi(&self) -> bool {
        self.stream.contains(OPI_KEY)
    }

    /// Whether the object's dictionary carries a soft-mask entry.
    pub fn contains_smask(&self) -> bool {
        self.stream.contains(SMASK)
    }

    pub(crate) fn objref(&self) -> Option<ObjRef> {
        self.stream.objref()
    }

    /// Resolve the soft-mask link: at most one SMaskImage entity.
    ///
    /// The mask is materialized with this object's own resources as
    /// context. Every failure mode - absent key, wrong primitive kind,
    /// already-visited reference, non-image classification - degrades to
    /// empty with a diagnostic record.
    pub(crate) fn smask(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        let Some(entry) = self.stream.get(SMASK) else {
            return out;
        };
        if let PdfObject::Ref(r) = entry
            && self.trail.contains(r)
        {
            tracing::warn!(objid = r.objid, "soft mask cycle detected");
            return out;
        }
        let Ok(mask_stream) = self.doc.resolve(entry).as_stream() else {
            tracing::debug!("soft mask entry is not a stream");
            return out;
        };
        let mut trail = self.trail.clone();
        trail.extend(self.doc.locate(entry));
        match classify_with_trail(mask_stream, &self.resources, self.doc, trail) {
            Some(Entity::XObjectImage(image)) => out.push(Entity::SMaskImage(image)),
            Some(_) | None => {
                tracing::debug!("soft mask object is not an image XObject");
            }
        }
        out
    }

    /// The form's resource chain as a terminal entity.
    pub(crate) fn resources_link(&self) -> Vec<Entity<'a>> {
        vec![Entity::Resources(ResourcesEntity::new(
            self.resources.clone(),
        ))]
    }
}
