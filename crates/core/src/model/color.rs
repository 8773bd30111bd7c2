//! PDF color space classification.
//!
//! Maps raw color space objects (names or array forms) onto a closed family
//! set. Unrecognized input classifies to nothing rather than erroring.

use crate::document::DocumentHandle;
use crate::model::objects::PdfObject;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Closed set of color space families this model distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpaceFamily {
    DeviceGray,
    DeviceRGB,
    DeviceCMYK,
    CalGray,
    CalRGB,
    Lab,
    ICCBased,
    Indexed,
    Separation,
    DeviceN,
    Pattern,
}

impl ColorSpaceFamily {
    /// Stable type tag for the corresponding entity variant.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::DeviceGray => "PDDeviceGray",
            Self::DeviceRGB => "PDDeviceRGB",
            Self::DeviceCMYK => "PDDeviceCMYK",
            Self::CalGray => "PDCalGray",
            Self::CalRGB => "PDCalRGB",
            Self::Lab => "PDLab",
            Self::ICCBased => "PDICCBased",
            Self::Indexed => "PDIndexed",
            Self::Separation => "PDSeparation",
            Self::DeviceN => "PDDeviceN",
            Self::Pattern => "PDPattern",
        }
    }
}

/// Represents a classified PDF color space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpace {
    /// Family of the color space
    pub family: ColorSpaceFamily,
    /// Number of color components
    pub ncomponents: usize,
}

impl ColorSpace {
    /// Create a new color space.
    pub const fn new(family: ColorSpaceFamily, ncomponents: usize) -> Self {
        Self {
            family,
            ncomponents,
        }
    }

    /// Classify a raw color space object.
    ///
    /// Accepts a bare family name or an array headed by one (ICCBased,
    /// Indexed, Separation, DeviceN, and the CIE-based families). Returns
    /// `None` for anything unrecognized.
    pub fn from_object(obj: &PdfObject, doc: &DocumentHandle) -> Option<Self> {
        match doc.resolve(obj) {
            PdfObject::Name(name) => PREDEFINED_COLORSPACE.get(name.as_str()).cloned(),
            PdfObject::Array(arr) => Self::from_array(arr, doc),
            _ => None,
        }
    }

    fn from_array(arr: &[PdfObject], doc: &DocumentHandle) -> Option<Self> {
        let family = doc.resolve(arr.first()?).as_name().ok()?;
        match family {
            "ICCBased" => {
                let n = arr
                    .get(1)
                    .map(|o| doc.resolve(o))
                    .and_then(|o| o.as_stream().ok())
                    .and_then(|s| s.get("N"))
                    .and_then(|n| doc.resolve(n).as_int().ok());
                Some(Self::new(ColorSpaceFamily::ICCBased, n.unwrap_or(3) as usize))
            }
            "Indexed" => Some(Self::new(ColorSpaceFamily::Indexed, 1)),
            "Separation" => Some(Self::new(ColorSpaceFamily::Separation, 1)),
            "DeviceN" => {
                let n = arr
                    .get(1)
                    .map(|o| doc.resolve(o))
                    .and_then(|o| o.as_array().ok())
                    .map(|names| names.len());
                Some(Self::new(ColorSpaceFamily::DeviceN, n.unwrap_or(1)))
            }
            "CalGray" => Some(Self::new(ColorSpaceFamily::CalGray, 1)),
            "CalRGB" => Some(Self::new(ColorSpaceFamily::CalRGB, 3)),
            "Lab" => Some(Self::new(ColorSpaceFamily::Lab, 3)),
            "Pattern" => Some(Self::new(ColorSpaceFamily::Pattern, 1)),
            _ => None,
        }
    }
}

/// Predefined color spaces reachable by bare name.
pub static PREDEFINED_COLORSPACE: LazyLock<HashMap<&'static str, ColorSpace>> =
    LazyLock::new(|| {
        let entries = [
            ("DeviceGray", ColorSpaceFamily::DeviceGray, 1),
            ("DeviceRGB", ColorSpaceFamily::DeviceRGB, 3),
            ("DeviceCMYK", ColorSpaceFamily::DeviceCMYK, 4),
            ("CalGray", ColorSpaceFamily::CalGray, 1),
            ("CalRGB", ColorSpaceFamily::CalRGB, 3),
            ("Lab", ColorSpaceFamily::Lab, 3),
            ("Pattern", ColorSpaceFamily::Pattern, 1),
        ];

        let mut map = HashMap::with_capacity(entries.len());
        for (name, family, n) in entries {
            map.insert(name, ColorSpace::new(family, n));
        }
        map
    });
