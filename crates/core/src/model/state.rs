//! Graphics state snapshots.
//!
//! A [`GraphicState`] is copied by value into each operator entity at
//! construction and never mutated afterwards. An operator that changes
//! state produces a new snapshot for subsequent operators, not for itself;
//! the running state lives in [`crate::interp::OperatorFactory`].

use crate::casting::{MATRIX_IDENTITY, Matrix};
use crate::model::color::{ColorSpace, PREDEFINED_COLORSPACE};
use smol_str::SmolStr;

/// Graphics parameters in effect at a point in a content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicState {
    /// Line width for stroke operations
    pub line_width: f64,
    /// Line cap style (0, 1, or 2)
    pub line_cap: Option<i64>,
    /// Line join style (0, 1, or 2)
    pub line_join: Option<i64>,
    /// Miter limit for line joins
    pub miter_limit: Option<f64>,
    /// Dash pattern: (array, phase)
    pub dash: Option<(Vec<f64>, f64)>,
    /// Rendering intent name
    pub intent: Option<SmolStr>,
    /// Flatness tolerance
    pub flatness: Option<f64>,
    /// Current transformation matrix
    pub ctm: Matrix,
    /// Stroking color space
    pub stroke_cs: ColorSpace,
    /// Non-stroking (fill) color space
    pub fill_cs: ColorSpace,
}

impl GraphicState {
    /// Create a new graphics state with default values.
    pub fn new() -> Self {
        let device_gray = PREDEFINED_COLORSPACE
            .get("DeviceGray")
            .expect("DeviceGray must exist")
            .clone();

        Self {
            line_width: 0.0,
            line_cap: None,
            line_join: None,
            miter_limit: None,
            dash: None,
            intent: None,
            flatness: None,
            ctm: MATRIX_IDENTITY,
            stroke_cs: device_gray.clone(),
            fill_cs: device_gray,
        }
    }
}

impl Default for GraphicState {
    fn default() -> Self {
        Self::new()
    }
}
