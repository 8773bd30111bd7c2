//! Primitive PDF object types.
//!
//! The read-only object tree handed over by the upstream parser. Indirect
//! reference chains may be cyclic; they are only ever dereferenced through
//! [`crate::document::DocumentHandle::resolve`], which is bounded.

use crate::error::{ModelError, Result};
use bytes::Bytes;
use smol_str::SmolStr;
use std::collections::HashMap;

/// PDF object types - the fundamental value type in PDF.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    /// Null object
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Real (floating point) value
    Real(f64),
    /// Name object (e.g., /Type, /Font)
    Name(SmolStr),
    /// String (byte array)
    String(Vec<u8>),
    /// Array of objects
    Array(Vec<Self>),
    /// Dictionary (name -> object mapping)
    Dict(HashMap<String, Self>),
    /// Stream (dictionary + binary data)
    Stream(Box<PdfStream>),
    /// Indirect object reference
    Ref(ObjRef),
}

impl PdfObject {
    /// Create a name object from a string slice.
    pub fn name(s: &str) -> Self {
        Self::Name(SmolStr::new(s))
    }

    /// Check if this is a null object
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a numeric object (integer or real).
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Real(_))
    }

    /// Check if this is specifically a real (floating point) object.
    ///
    /// An integer is a number but never a real.
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// Get as boolean
    pub const fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(ModelError::TypeError {
                expected: "bool",
                got: self.type_name(),
            }),
        }
    }

    /// Get as integer
    pub const fn as_int(&self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            _ => Err(ModelError::TypeError {
                expected: "int",
                got: self.type_name(),
            }),
        }
    }

    /// Get as real (float)
    pub const fn as_real(&self) -> Result<f64> {
        match self {
            Self::Real(n) => Ok(*n),
            _ => Err(ModelError::TypeError {
                expected: "real",
                got: self.type_name(),
            }),
        }
    }

    /// Get numeric value (int or real coerced to f64)
    pub const fn as_num(&self) -> Result<f64> {
        match self {
            Self::Int(n) => Ok(*n as f64),
            Self::Real(n) => Ok(*n),
            _ => Err(ModelError::TypeError {
                expected: "number",
                got: self.type_name(),
            }),
        }
    }

    /// Get as name string
    pub fn as_name(&self) -> Result<&str> {
        match self {
            Self::Name(s) => Ok(s),
            _ => Err(ModelError::TypeError {
                expected: "name",
                got: self.type_name(),
            }),
        }
    }

    /// Get as byte string
    pub fn as_string(&self) -> Result<&[u8]> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(ModelError::TypeError {
                expected: "string",
                got: self.type_name(),
            }),
        }
    }

    /// Get as array
    pub const fn as_array(&self) -> Result<&Vec<Self>> {
        match self {
            Self::Array(arr) => Ok(arr),
            _ => Err(ModelError::TypeError {
                expected: "array",
                got: self.type_name(),
            }),
        }
    }

    /// Get as dictionary
    pub const fn as_dict(&self) -> Result<&HashMap<String, Self>> {
        match self {
            Self::Dict(d) => Ok(d),
            _ => Err(ModelError::TypeError {
                expected: "dict",
                got: self.type_name(),
            }),
        }
    }

    /// Get as stream
    pub fn as_stream(&self) -> Result<&PdfStream> {
        match self {
            Self::Stream(s) => Ok(s),
            _ => Err(ModelError::TypeError {
                expected: "stream",
                got: self.type_name(),
            }),
        }
    }

    /// Get as object reference
    pub const fn as_objref(&self) -> Result<&ObjRef> {
        match self {
            Self::Ref(r) => Ok(r),
            _ => Err(ModelError::TypeError {
                expected: "ref",
                got: self.type_name(),
            }),
        }
    }

    /// Get type name for error messages
    pub(crate) const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Real(_) => "real",
            Self::Name(_) => "name",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Dict(_) => "dict",
            Self::Stream(_) => "stream",
            Self::Ref(_) => "ref",
        }
    }
}

/// PDF indirect object reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjRef {
    /// Object ID
    pub objid: u32,
    /// Generation number
    pub genno: u32,
}

impl ObjRef {
    /// Create a new object reference.
    pub const fn new(objid: u32, genno: u32) -> Self {
        Self { objid, genno }
    }
}

/// PDF stream - dictionary attributes + opaque binary data.
///
/// The data is carried but never decoded here; stream filters belong to the
/// upstream parser.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfStream {
    /// Stream dictionary attributes
    pub attrs: HashMap<String, PdfObject>,
    /// Raw stream data
    data: Bytes,
    /// Object ID (set when the stream is an indirect object)
    pub objid: Option<u32>,
    /// Generation number
    pub genno: Option<u32>,
}

impl PdfStream {
    /// Create a new stream.
    pub fn new(attrs: HashMap<String, PdfObject>, data: impl Into<Bytes>) -> Self {
        Self {
            attrs,
            data: data.into(),
            objid: None,
            genno: None,
        }
    }

    /// Set object ID and generation number.
    pub const fn set_objid(&mut self, objid: u32, genno: u32) {
        self.objid = Some(objid);
        self.genno = Some(genno);
    }

    /// Indirect coordinates of this stream, when it is an indirect object.
    pub fn objref(&self) -> Option<ObjRef> {
        match (self.objid, self.genno) {
            (Some(objid), Some(genno)) => Some(ObjRef::new(objid, genno)),
            _ => None,
        }
    }

    /// Get raw stream data.
    pub fn get_data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Check if the stream dictionary contains a key.
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Get attribute by name.
    pub fn get(&self, name: &str) -> Option<&PdfObject> {
        self.attrs.get(name)
    }
}
