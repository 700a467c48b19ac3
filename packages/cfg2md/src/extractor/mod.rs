//! Metadata extraction behind one contract for both source dialects.
//!
//! [`MetadataExtractor`] is implemented by [`CfgExtractor`] (configurator
//! export, one XML file per object) and [`EdtExtractor`] (EDT project, one
//! folder and `.mdo` descriptor per object). Each owns its schema
//! descriptors; they share nothing but the trait.
//!
//! Every per-kind operation follows the same policy: an absent kind
//! directory yields an empty collection, a file that fails to decode is
//! logged and skipped, and only a kind directory that cannot be
//! enumerated aborts the call.

mod cfg;
mod edt;

use std::path::Path;

use crate::detector::detect_format;
use crate::error::Result;
use crate::types::{Dialect, MetadataObject, ObjectKind};

pub use cfg::CfgExtractor;
pub use edt::EdtExtractor;

/// Extraction contract shared by both dialects.
pub trait MetadataExtractor {
    /// Dialect this extractor reads.
    fn dialect(&self) -> Dialect;

    /// Root of the source tree.
    fn root(&self) -> &Path;

    fn parse_documents(&self) -> Result<Vec<MetadataObject>>;

    fn parse_catalogs(&self) -> Result<Vec<MetadataObject>>;

    fn parse_enums(&self) -> Result<Vec<MetadataObject>>;

    fn parse_charts_of_characteristic_types(&self) -> Result<Vec<MetadataObject>>;

    fn parse_accumulation_registers(&self) -> Result<Vec<MetadataObject>>;

    fn parse_information_registers(&self) -> Result<Vec<MetadataObject>>;

    fn parse_constants(&self) -> Result<Vec<MetadataObject>>;

    fn parse_filter_criteria(&self) -> Result<Vec<MetadataObject>>;

    /// Parse every object of a single kind.
    fn parse_kind(&self, kind: ObjectKind) -> Result<Vec<MetadataObject>> {
        match kind {
            ObjectKind::Document => self.parse_documents(),
            ObjectKind::Catalog => self.parse_catalogs(),
            ObjectKind::Enum => self.parse_enums(),
            ObjectKind::ChartOfCharacteristicTypes => self.parse_charts_of_characteristic_types(),
            ObjectKind::AccumulationRegister => self.parse_accumulation_registers(),
            ObjectKind::InformationRegister => self.parse_information_registers(),
            ObjectKind::Constant => self.parse_constants(),
            ObjectKind::FilterCriteria => self.parse_filter_criteria(),
        }
    }

    /// Parse the requested kinds in the given order, concatenating results.
    ///
    /// Stops at the first kind whose directory cannot be enumerated.
    fn parse_objects_by_type(&self, kinds: &[ObjectKind]) -> Result<Vec<MetadataObject>> {
        let mut objects = Vec::new();
        for &kind in kinds {
            objects.extend(self.parse_kind(kind)?);
        }
        Ok(objects)
    }
}

/// Build the extractor for a known dialect.
///
/// Never touches the filesystem; call
/// [`validate_format`](crate::detector::validate_format) first when the
/// dialect was asserted rather than detected.
pub fn extractor_for(root: &Path, dialect: Dialect) -> Box<dyn MetadataExtractor> {
    match dialect {
        Dialect::Cfg => Box::new(CfgExtractor::new(root)),
        Dialect::Edt => Box::new(EdtExtractor::new(root)),
    }
}

/// Build an extractor from a dialect hint.
///
/// An empty hint detects the dialect from marker files; `cfg` and `edt`
/// (any case) select it directly.
///
/// # Errors
/// * `UnsupportedDialect` for any other hint
/// * detection errors (`RootNotFound`, `NotADirectory`, `UndeterminedFormat`);
///   a bad root keeps its own variant and is not re-wrapped as `UndeterminedFormat`
pub fn new_extractor(root: &Path, hint: &str) -> Result<Box<dyn MetadataExtractor>> {
    let dialect = if hint.trim().is_empty() {
        detect_format(root)?
    } else {
        hint.parse::<Dialect>()?
    };
    Ok(extractor_for(root, dialect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_extractor_for_does_not_touch_filesystem() {
        let ex = extractor_for(Path::new("/nonexistent/source"), Dialect::Edt);
        assert_eq!(ex.dialect(), Dialect::Edt);
        assert_eq!(ex.root(), Path::new("/nonexistent/source"));
    }

    #[test]
    fn test_new_extractor_explicit_hint() {
        let ex = new_extractor(Path::new("/nonexistent/source"), "CFG").unwrap();
        assert_eq!(ex.dialect(), Dialect::Cfg);
    }

    #[test]
    fn test_new_extractor_detects() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".project"), "").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let ex = new_extractor(dir.path(), "").unwrap();
        assert_eq!(ex.dialect(), Dialect::Edt);
    }

    #[test]
    fn test_new_extractor_unsupported_hint() {
        let err = new_extractor(Path::new("."), "xml").err().unwrap();
        assert!(matches!(err, ConvertError::UnsupportedDialect(_)));
    }

    #[test]
    fn test_new_extractor_missing_root_is_not_rewrapped() {
        let dir = tempdir().unwrap();
        let err = new_extractor(&dir.path().join("absent"), "").err().unwrap();
        assert!(matches!(err, ConvertError::RootNotFound { .. }));

        let file = dir.path().join("Configuration.xml");
        fs::write(&file, "<x/>").unwrap();
        let err = new_extractor(&file, "").err().unwrap();
        assert!(matches!(err, ConvertError::NotADirectory(_)));
    }

    #[test]
    fn test_new_extractor_undetermined() {
        let dir = tempdir().unwrap();
        let err = new_extractor(dir.path(), " ").err().unwrap();
        assert!(matches!(err, ConvertError::UndeterminedFormat(_)));
    }

    #[test]
    fn test_empty_tree_yields_nothing_for_every_kind() {
        let dir = tempdir().unwrap();
        for dialect in [Dialect::Cfg, Dialect::Edt] {
            let ex = extractor_for(dir.path(), dialect);
            for kind in ObjectKind::ALL {
                assert!(ex.parse_kind(kind).unwrap().is_empty(), "{dialect} {kind}");
            }
            assert!(ex.parse_objects_by_type(&ObjectKind::ALL).unwrap().is_empty());
        }
    }
}
