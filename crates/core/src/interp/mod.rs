//! Content-stream operator intake and context propagation.
//!
//! The upstream parser delivers content streams as a sequence of
//! [`ContentOp`] tokens. [`OperatorFactory`] turns that sequence into
//! operator entities, threading the graphics state and resource chain
//! forward so entities built deeper in the content see correctly merged
//! context.

mod factory;

pub use factory::OperatorFactory;

use crate::model::objects::PdfObject;
use smol_str::SmolStr;

/// One operator invocation from the upstream parser's token stream:
/// a mnemonic plus its ordered, possibly empty operand list.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOp {
    /// Operator mnemonic as written in the content stream.
    pub operator: SmolStr,
    /// Operands preceding the operator, in source order.
    pub operands: Vec<PdfObject>,
}

impl ContentOp {
    /// Create a content op from a mnemonic and operand list.
    pub fn new(operator: &str, operands: Vec<PdfObject>) -> Self {
        Self {
            operator: SmolStr::new(operator),
            operands,
        }
    }
}
