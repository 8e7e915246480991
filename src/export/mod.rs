pub mod json;
pub mod package;
