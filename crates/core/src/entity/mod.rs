//! Typed entities and link resolution.
//!
//! The rule engine sees the document exclusively through this surface:
//! every entity exposes a stable type tag, an identifier, and named links
//! resolved on demand. Link resolution is total; a link name outside a
//! variant's declared set falls through to the shared empty default so the
//! engine can probe forward-compatible names freely.

pub mod action;
pub mod graphics;
pub mod operator;
pub mod primitive;
pub mod xobject;

pub use action::ActionEntity;
pub use graphics::{ColorSpaceEntity, ShadingEntity};
pub use operator::{OperatorEntity, OperatorKind};
pub use primitive::{CosDict, CosNumber};
pub use xobject::XObjectEntity;

use crate::model::objects::{ObjRef, PdfObject};
use crate::resources::InheritableResources;

/// Semantically singular links never yield more than this many elements,
/// even when the backing data is malformed and suggests multiplicity.
pub const MAX_LINKED_ELEMENTS: usize = 1;

/// One node of the extracted object graph.
///
/// A closed sum over every entity variant the model distinguishes; the
/// classifier and link resolver match on it exhaustively.
#[derive(Debug, Clone)]
pub enum Entity<'a> {
    CosInteger(CosNumber<'a>),
    CosReal(CosNumber<'a>),
    CosDict(CosDict<'a>),
    Operator(OperatorEntity<'a>),
    XObjectForm(XObjectEntity<'a>),
    XObjectImage(XObjectEntity<'a>),
    XObjectGeneric(XObjectEntity<'a>),
    SMaskImage(XObjectEntity<'a>),
    Shading(ShadingEntity<'a>),
    Action(ActionEntity<'a>),
    ColorSpace(ColorSpaceEntity),
    Resources(ResourcesEntity<'a>),
}

impl<'a> Entity<'a> {
    /// Stable type identifier used by the rule engine.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::CosInteger(_) => "CosInteger",
            Self::CosReal(_) => "CosReal",
            Self::CosDict(_) => "CosDict",
            Self::Operator(op) => op.kind().tag(),
            Self::XObjectForm(_) => "PDXForm",
            Self::XObjectImage(_) => "PDXImage",
            Self::XObjectGeneric(_) => "PDXObject",
            Self::SMaskImage(_) => "PDSMaskImage",
            Self::Shading(_) => "PDShading",
            Self::Action(_) => "PDAction",
            Self::ColorSpace(cs) => cs.tag(),
            Self::Resources(_) => "PDResources",
        }
    }

    /// Identifier derived from the backing indirect coordinates when the
    /// entity has them (`"12 0 obj PDXImage"`), else the bare type tag.
    pub fn identifier(&self) -> String {
        match self.objref() {
            Some(r) => format!("{} {} obj {}", r.objid, r.genno, self.type_tag()),
            None => self.type_tag().to_string(),
        }
    }

    /// Resolve a named link to the ordered entities reachable through it.
    ///
    /// Unrecognized link names resolve to an empty sequence on every
    /// variant, never an error.
    pub fn get_linked_objects(&self, link: &str) -> Vec<Entity<'a>> {
        match self {
            Self::Operator(op) => op.linked(link),
            Self::XObjectForm(x) => match link {
                xobject::SMASK => x.smask(),
                xobject::RESOURCES => x.resources_link(),
                _ => Vec::new(),
            },
            Self::XObjectImage(x) | Self::XObjectGeneric(x) | Self::SMaskImage(x) => match link {
                xobject::SMASK => x.smask(),
                _ => Vec::new(),
            },
            Self::Shading(s) => match link {
                graphics::COLOR_SPACE => s.colorspace_link(),
                _ => Vec::new(),
            },
            Self::Action(a) => match link {
                action::NEXT => a.next(),
                _ => Vec::new(),
            },
            Self::CosInteger(_)
            | Self::CosReal(_)
            | Self::CosDict(_)
            | Self::ColorSpace(_)
            | Self::Resources(_) => Vec::new(),
        }
    }

    /// Backing indirect coordinates, when the entity has any.
    fn objref(&self) -> Option<ObjRef> {
        match self {
            Self::CosDict(d) => d.objref(),
            Self::XObjectForm(x)
            | Self::XObjectImage(x)
            | Self::XObjectGeneric(x)
            | Self::SMaskImage(x) => x.objref(),
            Self::Shading(s) => s.objref(),
            Self::Action(a) => a.objref(),
            Self::CosInteger(_)
            | Self::CosReal(_)
            | Self::Operator(_)
            | Self::ColorSpace(_)
            | Self::Resources(_) => None,
        }
    }

    /// Wrap a numeric primitive as the matching number entity.
    pub(crate) fn from_number(obj: &'a PdfObject) -> Option<Entity<'a>> {
        match obj {
            PdfObject::Int(_) => Some(Self::CosInteger(CosNumber::new(obj))),
            PdfObject::Real(_) => Some(Self::CosReal(CosNumber::new(obj))),
            _ => None,
        }
    }

    /// Wrap a real primitive as a real entity; integers do not qualify.
    pub(crate) fn from_real(obj: &'a PdfObject) -> Option<Entity<'a>> {
        match obj {
            PdfObject::Real(_) => Some(Self::CosReal(CosNumber::new(obj))),
            _ => None,
        }
    }

    /// Numeric payload, for number-valued entities.
    pub fn number_value(&self) -> Option<f64> {
        match self {
            Self::CosInteger(n) | Self::CosReal(n) => Some(n.value()),
            _ => None,
        }
    }
}

/// Terminal entity wrapping a resource chain snapshot.
#[derive(Debug, Clone)]
pub struct ResourcesEntity<'a> {
    resources: InheritableResources<'a>,
}

impl<'a> ResourcesEntity<'a> {
    pub(crate) fn new(resources: InheritableResources<'a>) -> Self {
        Self { resources }
    }

    /// The chain this entity wraps.
    pub fn resources(&self) -> &InheritableResources<'a> {
        &self.resources
    }
}
