//! The generation request: every deck, model and media file sent to the
//! server in one payload.
//!
//! Requests are usually assembled with [`build_request`], which sorts a mixed
//! list of [`RequestItem`]s into the three collections:
//!
//! ```
//! use genanki_request::{Deck, Field, Model, Note, RequestItem, Template, build_request};
//!
//! let model = Model::new(
//!     "Basic",
//!     vec![Template::new("Card 1", "{{Front}}", "{{Back}}")],
//!     vec![Field::new("Front"), Field::new("Back")],
//! );
//! let deck = Deck::new("Polish", vec![Note::new(&model, ["cześć", "hello"])]);
//!
//! let request = build_request([
//!     RequestItem::from(deck),
//!     model.into(),
//!     ("hello.mp3", vec![0xffu8, 0xfb]).into(),
//! ]);
//! assert_eq!(request.decks.len(), 1);
//! assert_eq!(request.models.len(), 1);
//! assert_eq!(request.files["hello.mp3"], vec![0xff, 0xfb]);
//! ```
//!
//! Only decks, models and named attachments are accepted:
//!
//! ```compile_fail
//! let request = genanki_request::build_request([42]);
//! ```

use super::{Deck, Model};
use crate::source::FileSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Attachment name to raw content. Sent base64-encoded.
    #[serde(default, with = "base64_files")]
    pub files: BTreeMap<String, Vec<u8>>,
    #[serde(default)]
    pub decks: Vec<Deck>,
    #[serde(default)]
    pub models: Vec<Model>,
}

/// One input to [`build_request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestItem {
    Deck(Deck),
    Model(Model),
    /// A media file; the name is the one templates refer to.
    Attachment { name: String, data: Vec<u8> },
}

impl From<Deck> for RequestItem {
    fn from(deck: Deck) -> Self {
        RequestItem::Deck(deck)
    }
}

impl From<Model> for RequestItem {
    fn from(model: Model) -> Self {
        RequestItem::Model(model)
    }
}

impl From<(String, Vec<u8>)> for RequestItem {
    fn from((name, data): (String, Vec<u8>)) -> Self {
        RequestItem::Attachment { name, data }
    }
}

impl From<(&str, Vec<u8>)> for RequestItem {
    fn from((name, data): (&str, Vec<u8>)) -> Self {
        RequestItem::Attachment {
            name: name.to_string(),
            data,
        }
    }
}

impl From<(&str, &[u8])> for RequestItem {
    fn from((name, data): (&str, &[u8])) -> Self {
        RequestItem::Attachment {
            name: name.to_string(),
            data: data.to_vec(),
        }
    }
}

impl<const N: usize> From<(&str, &[u8; N])> for RequestItem {
    fn from((name, data): (&str, &[u8; N])) -> Self {
        RequestItem::Attachment {
            name: name.to_string(),
            data: data.to_vec(),
        }
    }
}

/// Sorts `items` into a new request, keeping their order within each
/// collection. A later attachment with an already used name replaces the
/// earlier one.
pub fn build_request<I>(items: I) -> GenerationRequest
where
    I: IntoIterator,
    I::Item: Into<RequestItem>,
{
    let mut request = GenerationRequest::default();
    for item in items {
        request.push(item);
    }
    debug!(
        decks = request.decks.len(),
        models = request.models.len(),
        files = request.files.len(),
        "Built generation request"
    );
    request
}

impl GenerationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one item to the matching collection.
    pub fn push(&mut self, item: impl Into<RequestItem>) {
        match item.into() {
            RequestItem::Deck(deck) => self.add_deck(deck),
            RequestItem::Model(model) => self.add_model(model),
            RequestItem::Attachment { name, data } => self.add_attachment(name, data),
        }
    }

    pub fn add_deck(&mut self, deck: Deck) {
        self.decks.push(deck);
    }

    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    /// Stores `data` under `name`, replacing any attachment of the same name.
    pub fn add_attachment(&mut self, name: impl Into<String>, data: Vec<u8>) {
        let name = name.into();
        if self.files.insert(name.clone(), data).is_some() {
            debug!(name = %name, "Replaced attachment with the same name");
        }
    }

    /// Reads `path` from `source` and attaches it under its file name.
    ///
    /// Directory components are dropped, so two paths ending in the same file
    /// name share one slot and the last one read wins. Read errors are
    /// returned as they come from the source.
    pub fn add_attachment_from_source<S>(
        &mut self,
        source: &S,
        path: impl AsRef<Path>,
    ) -> io::Result<()>
    where
        S: FileSource + ?Sized,
    {
        let path = path.as_ref();
        let data = source.read(path)?;
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.to_string_lossy().into_owned(),
        };
        debug!(path = %path.display(), name = %name, bytes = data.len(), "Read attachment");
        self.add_attachment(name, data);
        Ok(())
    }
}

/// Attachment contents travel as standard base64 strings.
mod base64_files {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::de::Error;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(files: &BTreeMap<String, Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(files.len()))?;
        for (name, data) in files {
            map.serialize_entry(name, &STANDARD.encode(data))?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = BTreeMap::<String, String>::deserialize(deserializer)?;
        encoded
            .into_iter()
            .map(|(name, text)| {
                STANDARD
                    .decode(text.as_bytes())
                    .map(|data| (name, data))
                    .map_err(D::Error::custom)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Note, Template};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn create_test_model(id: i64) -> Model {
        Model::with_id(
            id,
            format!("Model {}", id),
            vec![Template::new("Card 1", "{{Front}}", "{{Back}}")],
            vec![Field::new("Front"), Field::new("Back")],
        )
    }

    /// In-memory file source keyed by path.
    struct MemoryFiles(HashMap<PathBuf, Vec<u8>>);

    impl FileSource for MemoryFiles {
        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    #[test]
    fn test_empty_request() {
        let request = build_request(Vec::<RequestItem>::new());
        assert!(request.files.is_empty());
        assert!(request.decks.is_empty());
        assert!(request.models.is_empty());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"files": {}, "decks": [], "models": []}));
    }

    #[test]
    fn test_items_sorted_into_buckets() {
        let model_a = create_test_model(1);
        let model_b = create_test_model(2);
        let deck_a = Deck::with_id(10, "Deck A", vec![Note::new(&model_a, ["x", "y"])]);

        let request = build_request([
            RequestItem::from(deck_a.clone()),
            model_a.clone().into(),
            ("file1", vec![1u8, 2, 3]).into(),
            model_b.clone().into(),
        ]);

        assert_eq!(request.models, vec![model_a, model_b]);
        assert_eq!(request.decks, vec![deck_a]);
        assert_eq!(request.files.len(), 1);
        assert_eq!(request.files["file1"], vec![1, 2, 3]);
    }

    #[test]
    fn test_same_attachment_name_last_wins() {
        let request = build_request([("a", vec![1u8]), ("a", vec![2u8])]);
        assert_eq!(request.files.len(), 1);
        assert_eq!(request.files["a"], vec![2]);
    }

    #[test]
    fn test_byte_literal_attachments() {
        let request = build_request([("a.txt", b"abc"), ("b.txt", b"xyz")]);
        assert_eq!(request.files["a.txt"], b"abc");
        assert_eq!(request.files["b.txt"], b"xyz");

        let mut request = GenerationRequest::new();
        request.push(("empty.bin", b""));
        assert_eq!(request.files["empty.bin"], Vec::<u8>::new());
    }

    #[test]
    fn test_files_are_base64() {
        let mut request = GenerationRequest::new();
        request.add_attachment("hello.txt", b"hello".to_vec());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["files"]["hello.txt"], "aGVsbG8=");
    }

    #[test]
    fn test_roundtrip() {
        let mut model = create_test_model(5);
        model.set_css(".card {}");
        let mut note = Note::new(&model, ["front", "back"]);
        note.set_guid("guid-1");
        note.add_tag("tag");
        let mut deck = Deck::with_id(6, "Deck", vec![note, Note::new(&model, ["f", "b"])]);
        deck.set_description("description");
        let original = build_request([
            RequestItem::from(deck),
            model.into(),
            ("image.png", vec![0u8, 159, 146, 150, 255]).into(),
            ("empty.bin", Vec::<u8>::new()).into(),
        ]);

        let json = serde_json::to_string(&original).unwrap();
        let decoded: GenerationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let json = r#"{"files": {"a": "not base64!"}, "decks": [], "models": []}"#;
        let result: Result<GenerationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_attachment_from_source_uses_base_name() {
        let source = MemoryFiles(HashMap::from([
            (PathBuf::from("media/audio/hello.mp3"), vec![1u8]),
            (PathBuf::from("other/hello.mp3"), vec![2u8]),
        ]));
        let mut request = GenerationRequest::new();

        request
            .add_attachment_from_source(&source, "media/audio/hello.mp3")
            .unwrap();
        assert_eq!(request.files["hello.mp3"], vec![1]);

        request
            .add_attachment_from_source(&source, "other/hello.mp3")
            .unwrap();
        assert_eq!(request.files.len(), 1);
        assert_eq!(request.files["hello.mp3"], vec![2]);
    }

    #[test]
    fn test_attachment_from_source_error_passed_through() {
        let source = MemoryFiles(HashMap::new());
        let mut request = GenerationRequest::new();

        let err = request
            .add_attachment_from_source(&source, "missing.png")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "no such file");
        assert!(request.files.is_empty());
    }
}
