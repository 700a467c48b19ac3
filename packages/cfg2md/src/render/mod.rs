//! Markdown and CSV output for extracted objects.

mod catalog;
mod markdown;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::{MetadataObject, ObjectKind};

pub use catalog::{generate_catalog, write_catalog};
pub use markdown::{generate_markdown, write_markdown_files};

/// Human-readable kind label used in page headings.
pub fn kind_label(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Document => "Документ",
        ObjectKind::Catalog => "Справочник",
        ObjectKind::Enum => "Перечисление",
        ObjectKind::ChartOfCharacteristicTypes => "План видов характеристик",
        ObjectKind::AccumulationRegister => "Регистр накопления",
        ObjectKind::InformationRegister => "Регистр сведений",
        ObjectKind::Constant => "Константа",
        ObjectKind::FilterCriteria => "Критерий отбора",
    }
}

/// Kind prefix used in file names and catalog references.
pub fn kind_prefix(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Document => "Документ",
        ObjectKind::Catalog => "Справочник",
        ObjectKind::Enum => "Перечисление",
        ObjectKind::ChartOfCharacteristicTypes => "ПланВидовХарактеристик",
        ObjectKind::AccumulationRegister => "РегистрНакопления",
        ObjectKind::InformationRegister => "РегистрСведений",
        ObjectKind::Constant => "Константа",
        ObjectKind::FilterCriteria => "КритерийОтбора",
    }
}

/// Markdown file name of an object, e.g. `Документ_Заказ.md`.
pub fn file_name(object: &MetadataObject) -> String {
    format!("{}_{}.md", kind_prefix(object.kind), object.name)
}

/// Write `content` to `path` atomically.
///
/// Writes to a hidden temp file next to the target, syncs it to disk,
/// then renames it over the target.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}
