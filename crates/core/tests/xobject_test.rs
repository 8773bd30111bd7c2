//! External object classification and soft-mask resolution.

use miranda_core::document::{DocumentHandle, Flavour};
use miranda_core::entity::xobject;
use miranda_core::entity::Entity;
use miranda_core::model::objects::{ObjRef, PdfObject, PdfStream};
use miranda_core::resources::InheritableResources;
use std::collections::HashMap;

fn dict(entries: Vec<(&str, PdfObject)>) -> HashMap<String, PdfObject> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn stream_obj(entries: Vec<(&str, PdfObject)>) -> PdfObject {
    PdfObject::Stream(Box::new(PdfStream::new(dict(entries), Vec::new())))
}

fn xobject_resources(name: &str, value: PdfObject) -> PdfObject {
    PdfObject::Dict(dict(vec![(
        "XObject",
        PdfObject::Dict(dict(vec![(name, value)])),
    )]))
}

fn registered_stream<'a>(doc: &'a DocumentHandle, objid: u32) -> &'a PdfStream {
    doc.get(objid)
        .and_then(|obj| obj.as_stream().ok())
        .expect("stream must be registered")
}

// ============================================================================
// Subtype classification
// ============================================================================

#[test]
fn test_classify_missing_subtype_is_none() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = stream_obj(vec![("Type", PdfObject::name("XObject"))]);
    let stream = obj.as_stream().expect("stream");
    let inherited = InheritableResources::empty();
    assert!(xobject::classify(stream, &inherited, &doc).is_none());
}

#[test]
fn test_classify_unknown_subtype_is_none() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = stream_obj(vec![("Subtype", PdfObject::name("Video"))]);
    let stream = obj.as_stream().expect("stream");
    let inherited = InheritableResources::empty();
    assert!(xobject::classify(stream, &inherited, &doc).is_none());
}

#[test]
fn test_classify_image() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = stream_obj(vec![("Subtype", PdfObject::name("Image"))]);
    let stream = obj.as_stream().expect("stream");
    let inherited = InheritableResources::empty();
    let entity = xobject::classify(stream, &inherited, &doc).expect("image");
    assert_eq!(entity.type_tag(), "PDXImage");
}

#[test]
fn test_classify_postscript() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = stream_obj(vec![("Subtype", PdfObject::name("PS"))]);
    let stream = obj.as_stream().expect("stream");
    let inherited = InheritableResources::empty();
    let entity = xobject::classify(stream, &inherited, &doc).expect("generic");
    assert_eq!(entity.type_tag(), "PDXObject");
}

#[test]
fn test_classify_form_extends_inherited_resources() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let page_resources = xobject_resources("Im0", PdfObject::Int(1));
    let inherited = InheritableResources::empty().extend(&page_resources);

    let obj = stream_obj(vec![
        ("Subtype", PdfObject::name("Form")),
        ("Resources", xobject_resources("Im1", PdfObject::Int(2))),
    ]);
    let stream = obj.as_stream().expect("stream");

    let entity = xobject::classify(stream, &inherited, &doc).expect("form");
    assert_eq!(entity.type_tag(), "PDXForm");
    let Entity::XObjectForm(form) = &entity else {
        panic!("expected form variant");
    };
    // Own entry and inherited entry are both visible through the chain.
    let chain = form.resources();
    assert_eq!(
        chain.lookup(&doc, "XObject", "Im1"),
        Some(&PdfObject::Int(2))
    );
    assert_eq!(
        chain.lookup(&doc, "XObject", "Im0"),
        Some(&PdfObject::Int(1))
    );
}

#[test]
fn test_classify_form_without_own_resources_keeps_chain() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let page_resources = xobject_resources("Im0", PdfObject::Int(1));
    let inherited = InheritableResources::empty().extend(&page_resources);

    let obj = stream_obj(vec![("Subtype", PdfObject::name("Form"))]);
    let stream = obj.as_stream().expect("stream");

    let Some(Entity::XObjectForm(form)) = xobject::classify(stream, &inherited, &doc) else {
        panic!("expected form variant");
    };
    assert_eq!(
        form.resources().lookup(&doc, "XObject", "Im0"),
        Some(&PdfObject::Int(1))
    );
}

// ============================================================================
// Presence checks
// ============================================================================

#[test]
fn test_contains_checks() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = stream_obj(vec![
        ("Subtype", PdfObject::name("Image")),
        ("OPI", PdfObject::Null),
    ]);
    let stream = obj.as_stream().expect("stream");
    let inherited = InheritableResources::empty();
    let Some(Entity::XObjectImage(image)) = xobject::classify(stream, &inherited, &doc) else {
        panic!("expected image variant");
    };
    assert!(image.contains_opi());
    assert!(!image.contains_smask());
}

// ============================================================================
// Soft-mask resolution
// ============================================================================

fn image_entity(doc: &DocumentHandle, objid: u32) -> Entity<'_> {
    let stream = registered_stream(doc, objid);
    let inherited = InheritableResources::empty();
    xobject::classify(stream, &inherited, doc).expect("classifies")
}

#[test]
fn test_smask_absent_key_is_empty() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(
        1,
        stream_obj(vec![("Subtype", PdfObject::name("Image"))]),
    );
    let entity = image_entity(&doc, 1);
    assert!(entity.get_linked_objects("SMask").is_empty());
}

#[test]
fn test_smask_non_stream_target_is_empty() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(2, PdfObject::Int(5));
    doc.insert(
        1,
        stream_obj(vec![
            ("Subtype", PdfObject::name("Image")),
            ("SMask", PdfObject::Ref(ObjRef::new(2, 0))),
        ]),
    );
    let entity = image_entity(&doc, 1);
    assert!(entity.get_linked_objects("SMask").is_empty());
}

#[test]
fn test_smask_unresolved_reference_is_empty() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(
        1,
        stream_obj(vec![
            ("Subtype", PdfObject::name("Image")),
            ("SMask", PdfObject::Ref(ObjRef::new(99, 0))),
        ]),
    );
    let entity = image_entity(&doc, 1);
    assert!(entity.get_linked_objects("SMask").is_empty());
}

#[test]
fn test_smask_non_image_target_is_empty() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(2, stream_obj(vec![("Subtype", PdfObject::name("Form"))]));
    doc.insert(
        1,
        stream_obj(vec![
            ("Subtype", PdfObject::name("Image")),
            ("SMask", PdfObject::Ref(ObjRef::new(2, 0))),
        ]),
    );
    let entity = image_entity(&doc, 1);
    assert!(entity.get_linked_objects("SMask").is_empty());
}

#[test]
fn test_smask_image_target_yields_one_mask() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(7, stream_obj(vec![("Subtype", PdfObject::name("Image"))]));
    doc.insert(
        1,
        stream_obj(vec![
            ("Subtype", PdfObject::name("Image")),
            ("SMask", PdfObject::Ref(ObjRef::new(7, 0))),
        ]),
    );
    let entity = image_entity(&doc, 1);
    let masks = entity.get_linked_objects("SMask");
    assert_eq!(masks.len(), 1);
    assert_eq!(masks[0].type_tag(), "PDSMaskImage");
    assert_eq!(masks[0].identifier(), "7 0 obj PDSMaskImage");
}

#[test]
fn test_smask_self_reference_is_empty() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(
        9,
        stream_obj(vec![
            ("Subtype", PdfObject::name("Image")),
            ("SMask", PdfObject::Ref(ObjRef::new(9, 0))),
        ]),
    );
    let entity = image_entity(&doc, 9);
    assert!(entity.get_linked_objects("SMask").is_empty());
}

#[test]
fn test_smask_two_object_cycle_stops_after_one_hop() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(
        5,
        stream_obj(vec![
            ("Subtype", PdfObject::name("Image")),
            ("SMask", PdfObject::Ref(ObjRef::new(6, 0))),
        ]),
    );
    doc.insert(
        6,
        stream_obj(vec![
            ("Subtype", PdfObject::name("Image")),
            ("SMask", PdfObject::Ref(ObjRef::new(5, 0))),
        ]),
    );
    let entity = image_entity(&doc, 5);
    let masks = entity.get_linked_objects("SMask");
    assert_eq!(masks.len(), 1);
    // The second hop would return to object 5 and is cut off.
    assert!(masks[0].get_linked_objects("SMask").is_empty());
}

#[test]
fn test_smask_on_form_uses_form_resources() {
    let mut doc = DocumentHandle::new(Flavour::NoFlavour);
    doc.insert(3, stream_obj(vec![("Subtype", PdfObject::name("Image"))]));
    doc.insert(
        1,
        stream_obj(vec![
            ("Subtype", PdfObject::name("Form")),
            ("Resources", xobject_resources("Im9", PdfObject::Int(9))),
            ("SMask", PdfObject::Ref(ObjRef::new(3, 0))),
        ]),
    );
    let stream = registered_stream(&doc, 1);
    let inherited = InheritableResources::empty();
    let entity = xobject::classify(stream, &inherited, &doc).expect("form");
    let masks = entity.get_linked_objects("SMask");
    assert_eq!(masks.len(), 1);
    let Entity::SMaskImage(mask) = &masks[0] else {
        panic!("expected smask variant");
    };
    // The mask was materialized under the form's own resource chain.
    assert_eq!(
        mask.resources().lookup(&doc, "XObject", "Im9"),
        Some(&PdfObject::Int(9))
    );
}

// ============================================================================
// Form resources link
// ============================================================================

#[test]
fn test_form_resources_link() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = stream_obj(vec![
        ("Subtype", PdfObject::name("Form")),
        ("Resources", xobject_resources("Sh0", PdfObject::Int(4))),
    ]);
    let stream = obj.as_stream().expect("stream");
    let inherited = InheritableResources::empty();
    let entity = xobject::classify(stream, &inherited, &doc).expect("form");

    let linked = entity.get_linked_objects("resources");
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].type_tag(), "PDResources");
    let Entity::Resources(res) = &linked[0] else {
        panic!("expected resources variant");
    };
    assert_eq!(
        res.resources().lookup(&doc, "XObject", "Sh0"),
        Some(&PdfObject::Int(4))
    );
}

#[test]
fn test_image_has_no_resources_link() {
    let doc = DocumentHandle::new(Flavour::NoFlavour);
    let obj = stream_obj(vec![("Subtype", PdfObject::name("Image"))]);
    let stream = obj.as_stream().expect("stream");
    let inherited = InheritableResources::empty();
    let entity = xobject::classify(stream, &inherited, &doc).expect("image");
    assert!(entity.get_linked_objects("resources").is_empty());
}
