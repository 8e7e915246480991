//! Deck is a named collection of notes
use super::Note;
use super::ids::{IdGenerator, RandomIds, allocate_id};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Deck {
    /// Creates a deck with a random identifier.
    pub fn new(name: impl Into<String>, notes: impl IntoIterator<Item = Note>) -> Self {
        Self::with_generator(&mut RandomIds, name, notes)
    }

    /// Creates a deck with a fixed identifier.
    pub fn with_id(
        id: i64,
        name: impl Into<String>,
        notes: impl IntoIterator<Item = Note>,
    ) -> Self {
        Self::build(&mut RandomIds, &[id], name.into(), notes)
    }

    /// Creates a deck whose identifier comes from `ids`.
    pub fn with_generator<G: IdGenerator + ?Sized>(
        ids: &mut G,
        name: impl Into<String>,
        notes: impl IntoIterator<Item = Note>,
    ) -> Self {
        Self::build(ids, &[], name.into(), notes)
    }

    fn build<G: IdGenerator + ?Sized>(
        ids: &mut G,
        explicit: &[i64],
        name: String,
        notes: impl IntoIterator<Item = Note>,
    ) -> Self {
        Self {
            id: allocate_id(ids, explicit),
            name,
            description: String::new(),
            notes: notes.into_iter().collect(),
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Model, SeededIds, Template};

    #[test]
    fn test_deck_creation() {
        let model = Model::with_id(
            7,
            "Basic",
            vec![Template::new("Card 1", "{{Front}}", "{{Back}}")],
            vec![Field::new("Front"), Field::new("Back")],
        );
        let notes = vec![Note::new(&model, ["dziękuję", "thank you"])];
        let deck = Deck::with_id(99, "Polish Vocabulary", notes);

        assert_eq!(deck.id, 99);
        assert_eq!(deck.name, "Polish Vocabulary");
        assert_eq!(deck.description, "");
        assert_eq!(deck.notes.len(), 1);
        assert_eq!(deck.notes[0].model, 7);
    }

    #[test]
    fn test_empty_deck_has_note_list() {
        let deck = Deck::new("Empty", Vec::new());
        assert!(deck.notes.is_empty());
        assert!(i32::try_from(deck.id).is_ok());

        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["notes"], serde_json::json!([]));
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_explicit_id_skips_generator() {
        let mut ids = SeededIds::new(11);
        let untouched = ids.clone().next_id();
        let deck = Deck::build(&mut ids, &[-5, 6], "Fixed".to_string(), Vec::new());

        assert_eq!(deck.id, -5);
        assert_eq!(ids.next_id(), untouched);
    }

    #[test]
    fn test_generator_is_used() {
        let expected = SeededIds::new(11).next_id();
        let deck = Deck::with_generator(&mut SeededIds::new(11), "Seeded", Vec::new());
        assert_eq!(deck.id, expected);
    }

    #[test]
    fn test_description_and_add_note() {
        let model = Model::with_id(1, "Basic", Vec::new(), Vec::new());
        let mut deck = Deck::with_id(2, "Deck", Vec::new());
        deck.set_description("Greetings");
        deck.add_note(Note::new(&model, ["a"]));
        deck.add_note(Note::new(&model, ["b"]));

        assert_eq!(deck.description, "Greetings");
        assert_eq!(deck.notes[1].fields, vec!["b"]);
    }
}
