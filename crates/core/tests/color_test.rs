//! Color space classification.

use miranda_core::document::{DocumentHandle, Flavour};
use miranda_core::model::color::{ColorSpace, ColorSpaceFamily};
use miranda_core::model::objects::{ObjRef, PdfObject, PdfStream};
use std::collections::HashMap;

#[test]
fn test_device_names() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    for (name, family, n) in [
        ("DeviceGray", ColorSpaceFamily::DeviceGray, 1),
        ("DeviceRGB", ColorSpaceFamily::DeviceRGB, 3),
        ("DeviceCMYK", ColorSpaceFamily::DeviceCMYK, 4),
        ("Lab", ColorSpaceFamily::Lab, 3),
        ("Pattern", ColorSpaceFamily::Pattern, 1),
    ] {
        let space = ColorSpace::from_object(&PdfObject::name(name), &doc).expect(name);
        assert_eq!(space.family, family);
        assert_eq!(space.ncomponents, n);
    }
}

#[test]
fn test_unknown_name_is_none() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    assert!(ColorSpace::from_object(&PdfObject::name("NotASpace"), &doc).is_none());
    assert!(ColorSpace::from_object(&PdfObject::Int(3), &doc).is_none());
}

#[test]
fn test_iccbased_reads_component_count() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    let mut attrs = HashMap::new();
    attrs.insert("N".to_string(), PdfObject::Int(4));
    doc.insert(3, PdfObject::Stream(Box::new(PdfStream::new(attrs, Vec::new()))));

    let obj = PdfObject::Array(vec![
        PdfObject::name("ICCBased"),
        PdfObject::Ref(ObjRef::new(3, 0)),
    ]);
    let space = ColorSpace::from_object(&obj, &doc).expect("ICCBased");
    assert_eq!(space.family, ColorSpaceFamily::ICCBased);
    assert_eq!(space.ncomponents, 4);
}

#[test]
fn test_iccbased_defaults_without_stream() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = PdfObject::Array(vec![PdfObject::name("ICCBased")]);
    let space = ColorSpace::from_object(&obj, &doc).expect("ICCBased");
    assert_eq!(space.ncomponents, 3);
}

#[test]
fn test_devicen_counts_names() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = PdfObject::Array(vec![
        PdfObject::name("DeviceN"),
        PdfObject::Array(vec![
            PdfObject::name("Cyan"),
            PdfObject::name("Spot1"),
        ]),
    ]);
    let space = ColorSpace::from_object(&obj, &doc).expect("DeviceN");
    assert_eq!(space.family, ColorSpaceFamily::DeviceN);
    assert_eq!(space.ncomponents, 2);
}

#[test]
fn test_separation_and_indexed() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let sep = PdfObject::Array(vec![
        PdfObject::name("Separation"),
        PdfObject::name("Spot1"),
        PdfObject::name("DeviceRGB"),
    ]);
    assert_eq!(
        ColorSpace::from_object(&sep, &doc).map(|s| s.family),
        Some(ColorSpaceFamily::Separation)
    );

    let indexed = PdfObject::Array(vec![
        PdfObject::name("Indexed"),
        PdfObject::name("DeviceRGB"),
        PdfObject::Int(255),
        PdfObject::String(vec![0, 0, 0]),
    ]);
    assert_eq!(
        ColorSpace::from_object(&indexed, &doc).map(|s| s.family),
        Some(ColorSpaceFamily::Indexed)
    );
}

#[test]
fn test_colorspace_behind_reference() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(7, PdfObject::name("DeviceRGB"));
    let obj = PdfObject::Ref(ObjRef::new(7, 0));
    assert_eq!(
        ColorSpace::from_object(&obj, &doc).map(|s| s.family),
        Some(ColorSpaceFamily::DeviceRGB)
    );
}

#[test]
fn test_empty_array_is_none() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    assert!(ColorSpace::from_object(&PdfObject::Array(vec![]), &doc).is_none());
}

#[test]
fn test_family_tags() {
    assert_eq!(ColorSpaceFamily::DeviceRGB.tag(), "PDDeviceRGB");
    assert_eq!(ColorSpaceFamily::ICCBased.tag(), "PDICCBased");
    assert_eq!(ColorSpaceFamily::DeviceN.tag(), "PDDeviceN");
}
