//! CSV catalog listing every generated page.

use std::path::{Path, PathBuf};

use super::{file_name, kind_prefix, write_atomic};
use crate::config::{CATALOG_DELIMITER, CATALOG_FILE_NAME};
use crate::error::{ConvertError, Result};
use crate::types::MetadataObject;

const HEADER: [&str; 4] = ["Имя объекта", "Тип объекта", "Синоним", "Файл"];

/// Render the catalog as CSV text.
pub fn generate_catalog(objects: &[MetadataObject]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(CATALOG_DELIMITER)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for object in objects {
        let prefix = kind_prefix(object.kind);
        writer.write_record([
            format!("{prefix}.{}", object.name).as_str(),
            prefix,
            object.synonym.as_str(),
            file_name(object).as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| ConvertError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Write `objects.csv` into `output_dir`.
pub fn write_catalog(objects: &[MetadataObject], output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(CATALOG_FILE_NAME);
    write_atomic(&path, generate_catalog(objects)?.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_catalog() {
        let objects = vec![
            MetadataObject::new(ObjectKind::Document, "Заказ", "Заказ покупателя"),
            MetadataObject::new(ObjectKind::AccumulationRegister, "Продажи", ""),
        ];

        assert_eq!(
            generate_catalog(&objects).unwrap(),
            "Имя объекта;Тип объекта;Синоним;Файл\n\
             Документ.Заказ;Документ;Заказ покупателя;Документ_Заказ.md\n\
             РегистрНакопления.Продажи;РегистрНакопления;;РегистрНакопления_Продажи.md\n"
        );
    }

    #[test]
    fn test_generate_catalog_quotes_delimiter() {
        let objects = vec![MetadataObject::new(ObjectKind::Catalog, "Банки", "Банки; кредитные")];
        let csv = generate_catalog(&objects).unwrap();
        assert!(csv.contains("\"Банки; кредитные\""));
    }
}
