pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod source;

pub use client::{GenerationClient, HttpTransport, Transport, TransportResponse};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{
    Deck, Field, GenerationRequest, IdGenerator, Model, ModelType, Note, RequestItem, Template,
    build_request,
};
pub use source::{FileSource, LocalFiles};
