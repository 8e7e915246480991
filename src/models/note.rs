//! Note is one row of field values instantiated against a model.
//!
//! A note refers to its model by identifier only. When no guid is set the
//! generation server derives one from the field values.
use super::Model;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub model: i64,
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

impl Note {
    /// Creates a note for `model`, one value per model field in order.
    pub fn new<I, S>(model: &Model, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            model: model.id,
            fields: fields.into_iter().map(Into::into).collect(),
            sort_field: None,
            tags: Vec::new(),
            guid: None,
        }
    }

    pub fn set_sort_field(&mut self, sort_field: impl Into<String>) {
        self.sort_field = Some(sort_field.into());
    }

    pub fn set_guid(&mut self, guid: impl Into<String>) {
        self.guid = Some(guid.into());
    }

    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }
}
