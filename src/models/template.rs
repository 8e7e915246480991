//! Template is one question/answer rendering pair of a model
use serde::{Deserialize, Serialize};

/// Prepended to every answer: the front side echoed back, then a divider.
pub const ANSWER_PREFIX: &str = "{{FrontSide}}\n\n<hr id=answer>\n\n";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub qfmt: String,
    pub afmt: String,
    #[serde(default)]
    pub bqfmt: String,
    #[serde(default)]
    pub bafmt: String,
    #[serde(default)]
    pub bfont: String,
    #[serde(default)]
    pub bsize: u32,
}

impl Template {
    /// Creates a template. The answer markup is stored as
    /// [`ANSWER_PREFIX`] followed by `answer`.
    pub fn new(
        name: impl Into<String>,
        question: impl Into<String>,
        answer: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.into(),
            qfmt: question.into(),
            afmt: format!("{}{}", ANSWER_PREFIX, answer.as_ref()),
            bqfmt: String::new(),
            bafmt: String::new(),
            bfont: String::new(),
            bsize: 0,
        }
    }

    /// Question markup used by the card browser instead of `qfmt`.
    pub fn set_browser_question(&mut self, bqfmt: impl Into<String>) {
        self.bqfmt = bqfmt.into();
    }

    /// Answer markup used by the card browser. Stored as given, no prefix.
    pub fn set_browser_answer(&mut self, bafmt: impl Into<String>) {
        self.bafmt = bafmt.into();
    }

    pub fn set_browser_font(&mut self, bfont: impl Into<String>) {
        self.bfont = bfont.into();
    }

    pub fn set_browser_size(&mut self, bsize: u32) {
        self.bsize = bsize;
    }
}
