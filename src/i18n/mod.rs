//! Internationalization module
//!
//! Translation sources, per-request catalog loading and key lookup.

pub mod catalog;
pub mod loader;
pub mod source;

// Re-export commonly used i18n components
pub use catalog::{parse_table, Catalog, TranslationTable, Translator};
pub use loader::TranslationStore;
pub use source::{AssetRegistry, FileSystemSource, HttpSource, MemorySource, TranslationSource};
