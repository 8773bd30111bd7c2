//! Content-stream operator entities.
//!
//! Each operator entity owns its operand list (by reference into the
//! content-op sequence) and the graphics-state snapshot in effect when the
//! operator was encountered. Numeric operand extraction is total: malformed
//! or missing operands yield empty results.

use crate::casting::{safe_int, safe_number};
use crate::document::DocumentHandle;
use crate::entity::graphics::ShadingEntity;
use crate::entity::primitive::CosDict;
use crate::entity::xobject;
use crate::entity::{ColorSpaceEntity, Entity, MAX_LINKED_ELEMENTS};
use crate::model::color::ColorSpace;
use crate::model::objects::PdfObject;
use crate::model::state::GraphicState;
use crate::resources::InheritableResources;

// Link names for numeric operator payloads.
pub const LINE_WIDTH: &str = "lineWidth";
pub const LINE_CAP: &str = "lineCap";
pub const LINE_JOIN: &str = "lineJoin";
pub const MITER_LIMIT: &str = "miterLimit";
pub const DASH_ARRAY: &str = "dashArray";
pub const DASH_PHASE: &str = "dashPhase";
pub const FLATNESS: &str = "flatness";
pub const CHARACTER_SPACING: &str = "characterSpacing";
pub const WORD_SPACING: &str = "wordSpacing";
pub const HORIZONTAL_SCALING: &str = "horizontalScaling";
pub const LEADING: &str = "leading";
pub const RISE: &str = "rise";
pub const HORIZONTAL_OFFSET: &str = "horizontalOffset";
pub const VERTICAL_OFFSET: &str = "verticalOffset";
pub const MATRIX_VALUES: &str = "matrixValues";
pub const POSITIONING_VALUES: &str = "positioningValues";

// Link names for dictionary-backed operator payloads.
pub const EXT_G_STATE: &str = "extGState";
pub const X_OBJECT: &str = "xObject";
pub const SHADING: &str = "shading";
pub const COLOR_SPACE: &str = "colorSpace";

// Operand positions for the move-set-show operator (`"`).
const MOVE_SET_SHOW_OPERANDS: usize = 3;
const MSS_WORD_SPACING_POSITION: usize = 0;
const MSS_CHARACTER_SPACING_POSITION: usize = 1;

// Operand count for the text-move operators (`Td`, `TD`).
const TEXT_MOVE_OPERANDS: usize = 2;

/// Closed set of modeled operator mnemonics.
///
/// Anything outside the set classifies as [`OperatorKind::Undefined`],
/// which carries no links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    // General graphics state
    LineWidth,
    LineCap,
    LineJoin,
    MiterLimit,
    Dash,
    RenderingIntent,
    Flatness,
    ExtGState,
    // State stack / CTM
    Save,
    Restore,
    Concat,
    // Color
    StrokeColorSpace,
    FillColorSpace,
    StrokeGray,
    FillGray,
    StrokeRgb,
    FillRgb,
    StrokeCmyk,
    FillCmyk,
    // Text state
    CharSpacing,
    WordSpacing,
    HorizontalScaling,
    Leading,
    Rise,
    RenderMode,
    // Text positioning
    TextMove,
    TextMoveLeading,
    TextMatrix,
    NextLine,
    // Text showing
    ShowText,
    ShowTextAdjusted,
    MoveShowText,
    MoveSetShowText,
    // Text objects
    BeginText,
    EndText,
    // External objects
    InvokeXObject,
    PaintShading,
    // Everything else
    Undefined,
}

impl OperatorKind {
    /// Classify a raw operator mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Self {
        match mnemonic {
            "w" => Self::LineWidth,
            "J" => Self::LineCap,
            "j" => Self::LineJoin,
            "M" => Self::MiterLimit,
            "d" => Self::Dash,
            "ri" => Self::RenderingIntent,
            "i" => Self::Flatness,
            "gs" => Self::ExtGState,
            "q" => Self::Save,
            "Q" => Self::Restore,
            "cm" => Self::Concat,
            "CS" => Self::StrokeColorSpace,
            "cs" => Self::FillColorSpace,
            "G" => Self::StrokeGray,
            "g" => Self::FillGray,
            "RG" => Self::StrokeRgb,
            "rg" => Self::FillRgb,
            "K" => Self::StrokeCmyk,
            "k" => Self::FillCmyk,
            "Tc" => Self::CharSpacing,
            "Tw" => Self::WordSpacing,
            "Tz" => Self::HorizontalScaling,
            "TL" => Self::Leading,
            "Ts" => Self::Rise,
            "Tr" => Self::RenderMode,
            "Td" => Self::TextMove,
            "TD" => Self::TextMoveLeading,
            "Tm" => Self::TextMatrix,
            "T*" => Self::NextLine,
            "Tj" => Self::ShowText,
            "TJ" => Self::ShowTextAdjusted,
            "'" => Self::MoveShowText,
            "\"" => Self::MoveSetShowText,
            "BT" => Self::BeginText,
            "ET" => Self::EndText,
            "Do" => Self::InvokeXObject,
            "sh" => Self::PaintShading,
            _ => Self::Undefined,
        }
    }

    /// Stable type tag of the operator entity.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::LineWidth => "Op_w_line_width",
            Self::LineCap => "Op_J_line_cap",
            Self::LineJoin => "Op_j_line_join",
            Self::MiterLimit => "Op_M_miter_limit",
            Self::Dash => "Op_d",
            Self::RenderingIntent => "Op_ri",
            Self::Flatness => "Op_i",
            Self::ExtGState => "Op_gs",
            Self::Save => "Op_q",
            Self::Restore => "Op_Q",
            Self::Concat => "Op_cm",
            Self::StrokeColorSpace => "Op_CS_stroke",
            Self::FillColorSpace => "Op_cs_fill",
            Self::StrokeGray => "Op_G_stroke_gray",
            Self::FillGray => "Op_g_fill_gray",
            Self::StrokeRgb => "Op_RG_stroke_rgb",
            Self::FillRgb => "Op_rg_fill_rgb",
            Self::StrokeCmyk => "Op_K_stroke_cmyk",
            Self::FillCmyk => "Op_k_fill_cmyk",
            Self::CharSpacing => "Op_Tc",
            Self::WordSpacing => "Op_Tw",
            Self::HorizontalScaling => "Op_Tz",
            Self::Leading => "Op_TL",
            Self::Rise => "Op_Ts",
            Self::RenderMode => "Op_Tr",
            Self::TextMove => "Op_Td",
            Self::TextMoveLeading => "Op_TD",
            Self::TextMatrix => "Op_Tm",
            Self::NextLine => "Op_T_Star",
            Self::ShowText => "Op_Tj",
            Self::ShowTextAdjusted => "Op_TJ_Big",
            Self::MoveShowText => "Op_Quote",
            Self::MoveSetShowText => "Op_DoubleQuote",
            Self::BeginText => "Op_BT",
            Self::EndText => "Op_ET",
            Self::InvokeXObject => "Op_Do",
            Self::PaintShading => "Op_sh",
            Self::Undefined => "Op_Undefined",
        }
    }
}

/// A single content-stream operator with its operands and captured context.
#[derive(Debug, Clone)]
pub struct OperatorEntity<'a> {
    kind: OperatorKind,
    operands: &'a [PdfObject],
    state: GraphicState,
    resources: InheritableResources<'a>,
    doc: &'a DocumentHandle,
}

impl<'a> OperatorEntity<'a> {
    pub fn new(
        kind: OperatorKind,
        operands: &'a [PdfObject],
        state: GraphicState,
        resources: InheritableResources<'a>,
        doc: &'a DocumentHandle,
    ) -> Self {
        Self {
            kind,
            operands,
            state,
            resources,
            doc,
        }
    }

    pub const fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// Graphics state in effect when this operator was encountered.
    pub const fn state(&self) -> &GraphicState {
        &self.state
    }

    pub const fn operands(&self) -> &'a [PdfObject] {
        self.operands
    }

    /// Per-kind link resolution; unknown names fall through to empty.
    pub(crate) fn linked(&self, link: &str) -> Vec<Entity<'a>> {
        use OperatorKind as K;
        match (self.kind, link) {
            (K::LineWidth, LINE_WIDTH)
            | (K::LineCap, LINE_CAP)
            | (K::LineJoin, LINE_JOIN)
            | (K::MiterLimit, MITER_LIMIT)
            | (K::Dash, DASH_PHASE)
            | (K::Flatness, FLATNESS)
            | (K::CharSpacing, CHARACTER_SPACING)
            | (K::WordSpacing, WORD_SPACING)
            | (K::Leading, LEADING)
            | (K::Rise, RISE) => self.last_number(),
            (K::HorizontalScaling, HORIZONTAL_SCALING) => self.last_real(),
            (K::Dash, DASH_ARRAY) | (K::ShowTextAdjusted, POSITIONING_VALUES) => {
                self.all_numbers()
            }
            (K::TextMatrix, MATRIX_VALUES) => self.all_reals(),
            (K::TextMove | K::TextMoveLeading, HORIZONTAL_OFFSET) => {
                self.positional_number(TEXT_MOVE_OPERANDS, 0)
            }
            (K::TextMove | K::TextMoveLeading, VERTICAL_OFFSET) => {
                self.positional_number(TEXT_MOVE_OPERANDS, 1)
            }
            (K::MoveSetShowText, WORD_SPACING) => {
                self.positional_number(MOVE_SET_SHOW_OPERANDS, MSS_WORD_SPACING_POSITION)
            }
            (K::MoveSetShowText, CHARACTER_SPACING) => {
                self.positional_number(MOVE_SET_SHOW_OPERANDS, MSS_CHARACTER_SPACING_POSITION)
            }
            (K::ExtGState, EXT_G_STATE) => self.ext_gstate_link(),
            (K::InvokeXObject, X_OBJECT) => self.xobject_link(),
            (K::PaintShading, SHADING) => self.shading_link(),
            (K::StrokeColorSpace | K::FillColorSpace, COLOR_SPACE) => self.colorspace_link(),
            _ => Vec::new(),
        }
    }

    // ========================================================================
    // Numeric operand extraction
    // ========================================================================

    /// The single last operand, if and only if it is numeric.
    pub fn last_number(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        if let Some(last) = self.operands.last()
            && let Some(entity) = Entity::from_number(last)
        {
            out.push(entity);
        }
        out
    }

    /// The single last operand, if and only if it is a real.
    ///
    /// An integer last operand yields empty even though it is a number.
    pub fn last_real(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        if let Some(last) = self.operands.last()
            && let Some(entity) = Entity::from_real(last)
        {
            out.push(entity);
        }
        out
    }

    /// Every numeric operand in left-to-right order, expanding one level of
    /// array operands. Non-numeric elements are silently skipped.
    pub fn all_numbers(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::new();
        for operand in self.operands {
            match operand {
                PdfObject::Array(items) => {
                    out.extend(items.iter().filter_map(Entity::from_number));
                }
                _ => out.extend(Entity::from_number(operand)),
            }
        }
        out
    }

    /// As [`Self::all_numbers`], restricted to reals.
    pub fn all_reals(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::new();
        for operand in self.operands {
            match operand {
                PdfObject::Array(items) => {
                    out.extend(items.iter().filter_map(Entity::from_real));
                }
                _ => out.extend(Entity::from_real(operand)),
            }
        }
        out
    }

    /// Fixed-arity positional operand: with `total` expected operands, the
    /// operand playing role `role` sits at absolute index
    /// `len - total + role`. Too few operands, or a non-numeric operand at
    /// that index, degrade to nothing.
    pub fn operand_at(&self, total: usize, role: usize) -> Option<&'a PdfObject> {
        let size = self.operands.len();
        if size < total {
            return None;
        }
        let obj = self.operands.get(size - total + role)?;
        obj.is_number().then_some(obj)
    }

    fn positional_number(&self, total: usize, role: usize) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        if let Some(obj) = self.operand_at(total, role)
            && let Some(entity) = Entity::from_number(obj)
        {
            out.push(entity);
        }
        out
    }

    // ========================================================================
    // Dictionary-backed links (resolved through the resource chain)
    // ========================================================================

    fn named_resource(&self, category: &'static str) -> Option<&'a PdfObject> {
        let name = last_name_value(self.operands)?;
        let entry = self.resources.lookup(self.doc, category, name);
        if entry.is_none() {
            tracing::debug!(category, name, "name not present in resource chain");
        }
        entry
    }

    fn ext_gstate_link(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        if let Some(entry) = self.named_resource("ExtGState") {
            let id = self.doc.locate(entry);
            if let PdfObject::Dict(dict) = self.doc.resolve(entry) {
                out.push(Entity::CosDict(CosDict::new(dict, id)));
            } else {
                tracing::debug!("ExtGState entry is not a dictionary");
            }
        }
        out
    }

    fn xobject_link(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        if let Some(entry) = self.named_resource("XObject") {
            let trail = self.doc.locate(entry).into_iter().collect();
            match self.doc.resolve(entry).as_stream() {
                Ok(stream) => out.extend(xobject::classify_with_trail(
                    stream,
                    &self.resources,
                    self.doc,
                    trail,
                )),
                Err(_) => tracing::debug!("XObject entry is not a stream"),
            }
        }
        out
    }

    fn shading_link(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        if let Some(entry) = self.named_resource("Shading") {
            let id = self.doc.locate(entry);
            match self.doc.resolve(entry) {
                PdfObject::Dict(dict) => {
                    out.push(Entity::Shading(ShadingEntity::new(dict, id, self.doc)));
                }
                PdfObject::Stream(stream) => {
                    let id = id.or(stream.objref());
                    out.push(Entity::Shading(ShadingEntity::new(
                        &stream.attrs,
                        id,
                        self.doc,
                    )));
                }
                _ => tracing::debug!("Shading entry is neither dictionary nor stream"),
            }
        }
        out
    }

    fn colorspace_link(&self) -> Vec<Entity<'a>> {
        let mut out = Vec::with_capacity(MAX_LINKED_ELEMENTS);
        let Some(operand) = self.operands.last() else {
            return out;
        };
        let Ok(name) = operand.as_name() else {
            return out;
        };
        // A resource-defined color space shadows the predefined one.
        let classified = match self.resources.lookup(self.doc, "ColorSpace", name) {
            Some(entry) => ColorSpace::from_object(entry, self.doc),
            None => ColorSpace::from_object(operand, self.doc),
        };
        match classified {
            Some(space) => out.push(Entity::ColorSpace(ColorSpaceEntity::new(space))),
            None => tracing::debug!(name, "unrecognized color space"),
        }
        out
    }
}

// === Value-level extraction shared with the operator factory ===

pub(crate) fn last_number_value(operands: &[PdfObject]) -> Option<f64> {
    operands.last().and_then(safe_number)
}

pub(crate) fn last_int_value(operands: &[PdfObject]) -> Option<i64> {
    operands.last().and_then(safe_int)
}

pub(crate) fn last_name_value(operands: &[PdfObject]) -> Option<&str> {
    operands.last().and_then(|o| o.as_name().ok())
}
