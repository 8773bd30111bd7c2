//! Operator factory: one pass over a content-op sequence.
//!
//! Each operator entity captures the graphics state in effect *before* the
//! operator runs; a state-changing operator updates the running state for
//! subsequent operators only. Malformed operands leave the state untouched.

use crate::casting::{mult_matrix, safe_matrix, safe_number};
use crate::document::DocumentHandle;
use crate::entity::operator::{
    OperatorEntity, OperatorKind, last_int_value, last_name_value, last_number_value,
};
use crate::entity::Entity;
use crate::interp::ContentOp;
use crate::model::color::{ColorSpace, PREDEFINED_COLORSPACE};
use crate::model::objects::PdfObject;
use crate::model::state::GraphicState;
use crate::resources::InheritableResources;
use smol_str::SmolStr;

/// Builds operator entities from a content-op sequence, threading graphics
/// state and resource inheritance forward.
pub struct OperatorFactory<'a> {
    doc: &'a DocumentHandle,
    state: GraphicState,
    stack: Vec<GraphicState>,
}

impl<'a> OperatorFactory<'a> {
    pub fn new(doc: &'a DocumentHandle) -> Self {
        Self {
            doc,
            state: GraphicState::new(),
            stack: Vec::new(),
        }
    }

    /// Transform a content-op sequence into operator entities under the
    /// given resource chain.
    ///
    /// Left-to-right, single pass; every entity carries the resource chain
    /// it was built under and the pre-operator state snapshot.
    pub fn build(
        &mut self,
        ops: &'a [ContentOp],
        resources: &InheritableResources<'a>,
    ) -> Vec<Entity<'a>> {
        ops.iter()
            .map(|op| {
                let kind = OperatorKind::from_mnemonic(&op.operator);
                let entity = OperatorEntity::new(
                    kind,
                    &op.operands,
                    self.state.clone(),
                    resources.clone(),
                    self.doc,
                );
                self.apply(kind, &op.operands, resources);
                Entity::Operator(entity)
            })
            .collect()
    }

    /// Apply an operator's state effect to the running state.
    fn apply(
        &mut self,
        kind: OperatorKind,
        operands: &[PdfObject],
        resources: &InheritableResources<'a>,
    ) {
        match kind {
            OperatorKind::LineWidth => {
                if let Some(width) = last_number_value(operands) {
                    self.state.line_width = width;
                }
            }
            OperatorKind::LineCap => {
                if let Some(cap) = last_int_value(operands) {
                    self.state.line_cap = Some(cap);
                }
            }
            OperatorKind::LineJoin => {
                if let Some(join) = last_int_value(operands) {
                    self.state.line_join = Some(join);
                }
            }
            OperatorKind::MiterLimit => {
                if let Some(limit) = last_number_value(operands) {
                    self.state.miter_limit = Some(limit);
                }
            }
            OperatorKind::Flatness => {
                if let Some(flatness) = last_number_value(operands) {
                    self.state.flatness = Some(flatness);
                }
            }
            OperatorKind::Dash => self.apply_dash(operands),
            OperatorKind::RenderingIntent => {
                if let Some(intent) = last_name_value(operands) {
                    self.state.intent = Some(SmolStr::new(intent));
                }
            }
            OperatorKind::Concat => {
                if let Some(matrix) = safe_matrix(operands) {
                    self.state.ctm = mult_matrix(matrix, self.state.ctm);
                }
            }
            OperatorKind::Save => self.stack.push(self.state.clone()),
            OperatorKind::Restore => match self.stack.pop() {
                Some(state) => self.state = state,
                None => tracing::debug!("graphics state stack underflow"),
            },
            OperatorKind::StrokeGray => self.set_device_space("DeviceGray", true),
            OperatorKind::FillGray => self.set_device_space("DeviceGray", false),
            OperatorKind::StrokeRgb => self.set_device_space("DeviceRGB", true),
            OperatorKind::FillRgb => self.set_device_space("DeviceRGB", false),
            OperatorKind::StrokeCmyk => self.set_device_space("DeviceCMYK", true),
            OperatorKind::FillCmyk => self.set_device_space("DeviceCMYK", false),
            OperatorKind::StrokeColorSpace => self.set_named_space(operands, resources, true),
            OperatorKind::FillColorSpace => self.set_named_space(operands, resources, false),
            _ => {}
        }
    }

    /// `d` carries the dash array and phase as its trailing two operands;
    /// the pattern is recorded only when both are well-formed.
    fn apply_dash(&mut self, operands: &[PdfObject]) {
        let size = operands.len();
        if size < 2 {
            return;
        }
        let array = operands[size - 2]
            .as_array()
            .map(|items| items.iter().filter_map(safe_number).collect::<Vec<_>>())
            .ok();
        let phase = safe_number(&operands[size - 1]);
        if let (Some(array), Some(phase)) = (array, phase) {
            self.state.dash = Some((array, phase));
        }
    }

    fn set_device_space(&mut self, name: &str, stroking: bool) {
        if let Some(space) = PREDEFINED_COLORSPACE.get(name) {
            if stroking {
                self.state.stroke_cs = space.clone();
            } else {
                self.state.fill_cs = space.clone();
            }
        }
    }

    /// `CS`/`cs` name a color space; resource-defined spaces shadow the
    /// predefined table.
    fn set_named_space(
        &mut self,
        operands: &[PdfObject],
        resources: &InheritableResources<'a>,
        stroking: bool,
    ) {
        let Some(operand) = operands.last() else {
            return;
        };
        let Ok(name) = operand.as_name() else {
            return;
        };
        let classified = match resources.lookup(self.doc, "ColorSpace", name) {
            Some(entry) => ColorSpace::from_object(entry, self.doc),
            None => ColorSpace::from_object(operand, self.doc),
        };
        match classified {
            Some(space) => {
                if stroking {
                    self.state.stroke_cs = space;
                } else {
                    self.state.fill_cs = space;
                }
            }
            None => tracing::debug!(name, "color space operand did not classify"),
        }
    }
}
