//! Normalization of raw metadata spellings into display vocabulary.

mod content;
mod types;

pub use content::normalize_filter_content_item;
pub use types::TypeConverter;
