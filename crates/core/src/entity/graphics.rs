//! Shading and color space entities.

use crate::document::DocumentHandle;
use crate::entity::{Entity, MAX_LINKED_ELEMENTS};
use crate::model::color::ColorSpace;
use crate::model::objects::{ObjRef, PdfObject};
use std::collections::HashMap;

/// Name of the link from a shading to its color space.
pub const COLOR_SPACE: &str = "colorSpace";

/// A shading pattern, backed by its attribute dictionary (shadings may be
/// dictionaries or streams; either way the attributes drive the links).
#[derive(Debug, Clone)]
pub struct ShadingEntity<'a> {
    attrs: &'a HashMap<String, PdfObject>,
    id: Option<ObjRef>,
    doc: &'a DocumentHandle,
}

impl<'a> ShadingEntity<'a> {
    pub(crate) fn new(
        attrs: &'a HashMap<String, PdfObject>,
        id: Option<ObjRef>,
        doc: &'a DocumentHandle,
    ) -> Self {
        Self { attrs, id, doc }
    }

    /// Shading type number (1-7), when declared.
    pub fn shading_type(&self) -> Option<i64> {
        self.attrs
            .get("ShadingType")
            .and_then(|o| self.doc.resolve(o).as_int().ok())
    }

    pub(crate) fn objref(&self) -> Option<ObjRef> {
        self.id
    }

    /// At most one color space entity classified from the ColorSpace entry.
    pub(crate) fn colorspace_link(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        if let Some(entry) = self.attrs.get("ColorSpace") {
            match ColorSpace::from_object(entry, self.doc) {
                Some(space) => out.push(Entity::ColorSpace(ColorSpaceEntity::new(space))),
                None => tracing::debug!("shading color space did not classify"),
            }
        }
        out
    }
}

/// A classified color space; a terminal node of the entity graph.
#[derive(Debug, Clone)]
pub struct ColorSpaceEntity {
    space: ColorSpace,
}

impl ColorSpaceEntity {
    pub(crate) fn new(space: ColorSpace) -> Self {
        Self { space }
    }

    /// Stable type tag, one per family (`"PDDeviceRGB"`, ...).
    pub fn tag(&self) -> &'static str {
        self.space.family.tag()
    }

    /// The classified color space.
    pub fn space(&self) -> &ColorSpace {
        &self.space
    }
}
