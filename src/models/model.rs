//! Model is the schema shared by a family of notes: fields, card templates and styling.
use super::ids::{IdGenerator, RandomIds, allocate_id};
use super::{Field, Template};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL_CSS: &str = ".card {
    font-family: arial;
    font-size: 20px;
    text-align: center;
    color: black;
    background-color: white;
}";

pub const DEFAULT_LATEX_PRE: &str = "\\documentclass[12pt]{article}\n\
\\special{papersize=3in,5in}\n\
\\usepackage[utf8]{inputenc}\n\
\\usepackage{amssymb,amsmath}\n\
\\pagestyle{empty}\n\
\\setlength{\\parindent}{0in}\n\
\\begin{document}\n";

pub const DEFAULT_LATEX_POST: &str = "\\end{document}";

/// Whether cards come from templates (`Basic`) or from cloze deletions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ModelType {
    #[default]
    Basic,
    Cloze,
}

impl From<ModelType> for u8 {
    fn from(kind: ModelType) -> Self {
        match kind {
            ModelType::Basic => 0,
            ModelType::Cloze => 1,
        }
    }
}

impl TryFrom<u8> for ModelType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ModelType::Basic),
            1 => Ok(ModelType::Cloze),
            other => Err(format!("unknown model type {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default)]
    pub model_type: ModelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex_pre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latex_post: Option<String>,
    #[serde(default)]
    pub sort_field_index: usize,
}

impl Model {
    /// Creates a model with a random identifier.
    pub fn new(
        name: impl Into<String>,
        templates: impl IntoIterator<Item = Template>,
        fields: impl IntoIterator<Item = Field>,
    ) -> Self {
        Self::with_generator(&mut RandomIds, name, templates, fields)
    }

    /// Creates a model with a fixed identifier, so regenerated decks keep
    /// pointing at the same note type.
    pub fn with_id(
        id: i64,
        name: impl Into<String>,
        templates: impl IntoIterator<Item = Template>,
        fields: impl IntoIterator<Item = Field>,
    ) -> Self {
        Self::build(&mut RandomIds, &[id], name.into(), templates, fields)
    }

    /// Creates a model whose identifier comes from `ids`.
    pub fn with_generator<G: IdGenerator + ?Sized>(
        ids: &mut G,
        name: impl Into<String>,
        templates: impl IntoIterator<Item = Template>,
        fields: impl IntoIterator<Item = Field>,
    ) -> Self {
        Self::build(ids, &[], name.into(), templates, fields)
    }

    fn build<G: IdGenerator + ?Sized>(
        ids: &mut G,
        explicit: &[i64],
        name: String,
        templates: impl IntoIterator<Item = Template>,
        fields: impl IntoIterator<Item = Field>,
    ) -> Self {
        let mut model = Self {
            id: allocate_id(ids, explicit),
            name,
            templates: templates.into_iter().collect(),
            fields: fields.into_iter().collect(),
            css: None,
            model_type: ModelType::Basic,
            latex_pre: None,
            latex_post: None,
            sort_field_index: 0,
        };
        model.set_css(DEFAULT_MODEL_CSS);
        model.set_latex_pre(DEFAULT_LATEX_PRE);
        model.set_latex_post(DEFAULT_LATEX_POST);
        model
    }

    pub fn set_css(&mut self, css: impl Into<String>) {
        self.css = Some(css.into());
    }

    pub fn set_latex_pre(&mut self, latex_pre: impl Into<String>) {
        self.latex_pre = Some(latex_pre.into());
    }

    pub fn set_latex_post(&mut self, latex_post: impl Into<String>) {
        self.latex_post = Some(latex_post.into());
    }

    pub fn set_model_type(&mut self, model_type: ModelType) {
        self.model_type = model_type;
    }

    /// Index into `fields` of the field the browser sorts by.
    pub fn set_sort_field_index(&mut self, index: usize) {
        self.sort_field_index = index;
    }
}
