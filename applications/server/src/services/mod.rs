/// Server services
pub mod content_client;
pub mod tafsir_store;

pub use content_client::{ChapterVerse, ContentClient};
pub use tafsir_store::{TafsirEntry, TafsirStore};
