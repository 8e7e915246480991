pub mod deck;
pub mod field;
pub mod ids;
pub mod model;
pub mod note;
pub mod request;
pub mod template;

pub use deck::Deck;
pub use field::Field;
pub use ids::{IdGenerator, RandomIds, SeededIds, allocate_id};
pub use model::{Model, ModelType};
pub use note::Note;
pub use request::{GenerationRequest, RequestItem, build_request};
pub use template::Template;
