//! Noor Recite Core
//!
//! Platform-agnostic verse, chapter and reciter types for Noor Recite, plus
//! the verse audio resolver.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `SurahNumber`, `VerseKey`, `VerseSlot`
//! - **Chapter Table**: names and verse counts for all 114 surahs
//! - **Reciter Registry**: the ordered, immutable list of narration sources
//! - **Audio Resolution**: deterministic `SSSVVV.mp3` URL construction
//!
//! # Example
//!
//! ```rust
//! use noor_core::{AudioResolver, VerseKey};
//!
//! let resolver = AudioResolver::with_defaults().unwrap();
//! let key: VerseKey = "2:255".parse().unwrap();
//!
//! let url = resolver.resolve("7", key).unwrap();
//! assert!(url.as_str().ends_with("/002255.mp3"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chapters;
pub mod error;
pub mod reciters;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use chapters::{chapter, chapters, ChapterInfo};
pub use error::{CoreError, Result};
pub use reciters::{ReciterDescriptor, ReciterRegistry};
pub use resolver::{audio_file_name, proxied_url, AudioResolver, DEFAULT_AUDIO_BASE_URL};
pub use types::{SurahNumber, VerseKey, VerseSlot};
