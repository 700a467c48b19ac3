//! onec-cfg2md - Extract 1C:Enterprise configuration metadata into Markdown.
//!
//! This crate reads configuration metadata in either of two on-disk
//! dialects, a configurator XML export or an EDT project, normalizes both
//! into one record model, and renders Markdown pages plus a CSV catalog.
//!
//! # Example
//!
//! ```
//! use onec_cfg2md::normalize::{normalize_filter_content_item, TypeConverter};
//!
//! let tc = TypeConverter::new();
//! assert_eq!(tc.convert_type("DocumentRef.Заказ"), "Документ.Заказ");
//! assert_eq!(normalize_filter_content_item("Catalog.Валюты"), "Справочник.Валюты");
//! ```
//!
//! # Architecture
//!
//! - [`types`]: Record model (MetadataObject, Attribute, ObjectKind, Dialect)
//! - [`error`]: Error types and Result alias
//! - [`config`]: Marker names, namespaces, vocabulary constants, options
//! - [`detector`]: Dialect detection and validation
//! - [`normalize`]: Type and content reference canonicalization
//! - [`xml`]: XML utilities and the fallback token scan
//! - [`extractor`]: Extraction contract and both dialect implementations
//! - [`render`]: Markdown pages and CSV catalog
//! - [`cli`]: Command-line interface and conversion driver

pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod normalize;
pub mod render;
pub mod types;
pub mod xml;

pub use cli::convert;
pub use config::ConversionOptions;
pub use detector::{detect_format, validate_format};
pub use error::{ConvertError, DecodeError, Result};
pub use extractor::{extractor_for, new_extractor, MetadataExtractor};
pub use types::{Attribute, Dialect, EnumValue, MetadataObject, ObjectKind, TabularSection};
