//! Source dialect detection by marker files.

use std::fs;
use std::path::Path;

use crate::config::{CFG_MARKER_FILE, EDT_PROJECT_FILE, EDT_SRC_DIR};
use crate::error::{ConvertError, Result};
use crate::types::Dialect;

/// Detect the dialect of the source tree at `root`.
///
/// A `Configuration.xml` file wins over EDT markers when both are present.
///
/// # Errors
/// * `RootNotFound` / `NotADirectory` for a bad root
/// * `UndeterminedFormat` if neither dialect's markers are present
pub fn detect_format(root: &Path) -> Result<Dialect> {
    let meta = fs::metadata(root).map_err(|source| ConvertError::RootNotFound {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ConvertError::NotADirectory(root.to_path_buf()));
    }

    if is_cfg_tree(root) {
        Ok(Dialect::Cfg)
    } else if is_edt_tree(root) {
        Ok(Dialect::Edt)
    } else {
        Err(ConvertError::UndeterminedFormat(root.to_path_buf()))
    }
}

/// Check that `root` carries the markers of `dialect`.
///
/// Spellings outside `cfg`/`edt` never reach this point: they are
/// rejected as `UnsupportedDialect` when parsed into a [`Dialect`].
pub fn validate_format(root: &Path, dialect: Dialect) -> Result<()> {
    let missing = match dialect {
        Dialect::Cfg if !is_cfg_tree(root) => Some(CFG_MARKER_FILE),
        Dialect::Edt if !is_edt_tree(root) => Some(".project and src/"),
        _ => None,
    };

    match missing {
        Some(missing) => Err(ConvertError::DialectMismatch {
            dialect,
            path: root.to_path_buf(),
            missing,
        }),
        None => Ok(()),
    }
}

fn is_cfg_tree(root: &Path) -> bool {
    root.join(CFG_MARKER_FILE).is_file()
}

fn is_edt_tree(root: &Path) -> bool {
    root.join(EDT_PROJECT_FILE).is_file() && root.join(EDT_SRC_DIR).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_cfg() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Configuration.xml"), "<x/>").unwrap();
        assert_eq!(detect_format(dir.path()).unwrap(), Dialect::Cfg);
    }

    #[test]
    fn test_detect_edt() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".project"), "").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        assert_eq!(detect_format(dir.path()).unwrap(), Dialect::Edt);
    }

    #[test]
    fn test_detect_prefers_cfg() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Configuration.xml"), "<x/>").unwrap();
        fs::write(dir.path().join(".project"), "").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        assert_eq!(detect_format(dir.path()).unwrap(), Dialect::Cfg);
    }

    #[test]
    fn test_detect_edt_requires_both_markers() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".project"), "").unwrap();
        let err = detect_format(dir.path()).unwrap_err();
        assert!(matches!(err, ConvertError::UndeterminedFormat(_)));
    }

    #[test]
    fn test_detect_missing_root() {
        let dir = tempdir().unwrap();
        let err = detect_format(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, ConvertError::RootNotFound { .. }));
    }

    #[test]
    fn test_detect_file_root() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Configuration.xml");
        fs::write(&file, "<x/>").unwrap();
        let err = detect_format(&file).unwrap_err();
        assert!(matches!(err, ConvertError::NotADirectory(_)));
    }

    #[test]
    fn test_validate_format() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Configuration.xml"), "<x/>").unwrap();

        assert!(validate_format(dir.path(), Dialect::Cfg).is_ok());

        let err = validate_format(dir.path(), Dialect::Edt).unwrap_err();
        match err {
            ConvertError::DialectMismatch {
                dialect, missing, ..
            } => {
                assert_eq!(dialect, Dialect::Edt);
                assert!(missing.contains(".project"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
