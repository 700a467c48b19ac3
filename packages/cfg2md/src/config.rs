//! Configuration constants and conversion options.

use std::path::PathBuf;

use crate::error::{ConvertError, Result};
use crate::types::{Dialect, ObjectKind};

/// Marker file at the root of a configurator export.
pub const CFG_MARKER_FILE: &str = "Configuration.xml";

/// Marker file at the root of an EDT project.
pub const EDT_PROJECT_FILE: &str = ".project";

/// Source directory of an EDT project, relative to its root.
pub const EDT_SRC_DIR: &str = "src";

/// Descriptor extension for EDT objects.
pub const EDT_DESCRIPTOR_EXT: &str = "mdo";

/// Metadata classes namespace of configurator exports.
pub const NS_MDCLASSES: &str = "http://v8.1c.ru/8.3/MDClasses";

/// Core data namespace (localized strings, type declarations, qualifiers).
pub const NS_CORE: &str = "http://v8.1c.ru/8.1/data/core";

/// Readable references namespace (filter criterion content items).
pub const NS_READABLE: &str = "http://v8.1c.ru/8.3/xcf/readable";

/// Metadata classes namespace of EDT descriptors.
pub const NS_EDT_MDCLASS: &str = "http://g5.1c.ru/v8/dt/metadata/mdclass";

/// Short type prefixes stripped from configurator type declarations.
pub const TYPE_PREFIXES: [&str; 2] = ["cfg:", "v8:"];

/// Language whose synonym entry is used as the display label.
pub const SYNONYM_LANG: &str = "ru";

/// Fill-checking value marking an attribute as required.
pub const FILL_CHECKING_REQUIRED: &str = "ShowError";

/// Name of the synthetic attribute holding a constant's value.
pub const CONSTANT_VALUE_ATTRIBUTE: &str = "Значение";

/// File name of the CSV object catalog.
pub const CATALOG_FILE_NAME: &str = "objects.csv";

/// Field delimiter of the CSV object catalog.
pub const CATALOG_DELIMITER: u8 = b';';

/// Options for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub source_path: PathBuf,
    pub output_path: PathBuf,

    /// Pinned dialect; `None` means detect from the source tree.
    pub dialect: Option<Dialect>,
    pub object_kinds: Vec<ObjectKind>,

    /// List every written page in the run summary.
    pub verbose: bool,
}

impl ConversionOptions {
    /// Create options that process every object kind with auto-detection.
    pub fn new(source_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: output_path.into(),
            dialect: None,
            object_kinds: ObjectKind::ALL.to_vec(),
            verbose: false,
        }
    }
}

/// Parse a comma-separated list of object type names.
///
/// An empty (or whitespace-only) list selects documents only. Blank
/// entries between commas are ignored; any unknown name is an error.
///
/// # Examples
/// ```
/// use onec_cfg2md::config::parse_object_kinds;
/// use onec_cfg2md::types::ObjectKind;
///
/// let kinds = parse_object_kinds("documents, enums").unwrap();
/// assert_eq!(kinds, vec![ObjectKind::Document, ObjectKind::Enum]);
/// assert!(parse_object_kinds("widgets").is_err());
/// ```
pub fn parse_object_kinds(list: &str) -> Result<Vec<ObjectKind>> {
    if list.trim().is_empty() {
        return Ok(vec![ObjectKind::Document]);
    }

    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            ObjectKind::from_type_name(s)
                .ok_or_else(|| ConvertError::UnknownObjectType(s.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_kinds_preserves_order() {
        let kinds = parse_object_kinds("catalogs,documents").unwrap();
        assert_eq!(kinds, vec![ObjectKind::Catalog, ObjectKind::Document]);
    }

    #[test]
    fn test_parse_object_kinds_empty_defaults_to_documents() {
        assert_eq!(parse_object_kinds("").unwrap(), vec![ObjectKind::Document]);
        assert_eq!(parse_object_kinds("  ").unwrap(), vec![ObjectKind::Document]);
    }

    #[test]
    fn test_parse_object_kinds_all_names() {
        let kinds = parse_object_kinds(
            "documents,catalogs,enums,chartsofcharacteristictypes,\
             accumulationregisters,informationregisters,constants,filtercriteria",
        )
        .unwrap();
        assert_eq!(kinds, ObjectKind::ALL.to_vec());
    }

    #[test]
    fn test_parse_object_kinds_unknown() {
        let err = parse_object_kinds("documents,reports").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownObjectType(ref s) if s == "reports"));
    }

    #[test]
    fn test_conversion_options_defaults() {
        let opts = ConversionOptions::new("src", "out");
        assert!(opts.dialect.is_none());
        assert_eq!(opts.object_kinds.len(), 8);
        assert!(!opts.verbose);
    }
}
