//! Field is a named input slot on a model
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIELD_FONT: &str = "Liberation Sans";
pub const DEFAULT_FIELD_SIZE: u32 = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default)]
    pub rtl: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default)]
    pub sticky: bool,
}

impl Field {
    /// Creates a field with the default font and size filled in.
    pub fn new(name: impl Into<String>) -> Self {
        let mut field = Self::bare(name);
        field.set_font(DEFAULT_FIELD_FONT);
        field.set_size(DEFAULT_FIELD_SIZE);
        field
    }

    /// Creates a field with no font or size, leaving both to the server.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            font: None,
            rtl: false,
            size: None,
            sticky: false,
        }
    }

    pub fn set_font(&mut self, font: impl Into<String>) {
        self.font = Some(font.into());
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = Some(size);
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    pub fn set_sticky(&mut self, sticky: bool) {
        self.sticky = sticky;
    }
}
