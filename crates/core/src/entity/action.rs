//! Interactive action entities.

use crate::document::DocumentHandle;
use crate::entity::Entity;
use crate::model::objects::{ObjRef, PdfObject};
use std::collections::HashMap;

/// Name of the link to the follow-up action(s).
pub const NEXT: &str = "Next";

/// An action dictionary (Launch, GoTo, URI, ...).
#[derive(Debug, Clone)]
pub struct ActionEntity<'a> {
    dict: &'a HashMap<String, PdfObject>,
    id: Option<ObjRef>,
    doc: &'a DocumentHandle,
}

impl<'a> ActionEntity<'a> {
    pub fn new(
        dict: &'a HashMap<String, PdfObject>,
        id: Option<ObjRef>,
        doc: &'a DocumentHandle,
    ) -> Self {
        Self { dict, id, doc }
    }

    /// The action kind: the value of the S entry (e.g. `"Launch"`).
    pub fn kind(&self) -> Option<&'a str> {
        self.dict
            .get("S")
            .and_then(|o| self.doc.resolve(o).as_name().ok())
    }

    pub(crate) fn objref(&self) -> Option<ObjRef> {
        self.id
    }

    /// Follow-up actions, in source order.
    ///
    /// A single dictionary yields one action; an array yields one per
    /// dictionary element; elements of any other kind are skipped.
    pub(crate) fn next(&self) -> Vec<Entity<'a>> {
        let Some(entry) = self.dict.get(NEXT) else {
            return Vec::new();
        };
        let id = self.doc.locate(entry);
        match self.doc.resolve(entry) {
            PdfObject::Dict(dict) => {
                vec![Entity::Action(ActionEntity::new(dict, id, self.doc))]
            }
            PdfObject::Array(items) => items
                .iter()
                .filter_map(|item| {
                    let id = self.doc.locate(item);
                    match self.doc.resolve(item) {
                        PdfObject::Dict(dict) => {
                            Some(Entity::Action(ActionEntity::new(dict, id, self.doc)))
                        }
                        _ => None,
                    }
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
