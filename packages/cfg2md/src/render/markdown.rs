//! Markdown page generation, one page per object.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::{file_name, kind_label, write_atomic};
use crate::error::Result;
use crate::types::{Attribute, MetadataObject, ObjectKind};

/// Generate the Markdown page of one object.
pub fn generate_markdown(object: &MetadataObject) -> String {
    let mut out = String::new();

    let _ = write!(out, "# {}: {}", kind_label(object.kind), object.name);
    if !object.synonym.is_empty() {
        let _ = write!(out, " ({})", object.synonym);
    }
    out.push_str("\n\n");

    match object.kind {
        ObjectKind::Enum => {
            if !object.enum_values.is_empty() {
                out.push_str("## Значения\n\n");
                for value in &object.enum_values {
                    push_named_line(&mut out, &value.name, &value.synonym);
                }
                out.push('\n');
            }
        }
        ObjectKind::AccumulationRegister | ObjectKind::InformationRegister => {
            push_attribute_section(&mut out, "Измерения", &object.dimensions);
            push_attribute_section(&mut out, "Ресурсы", &object.resources);
            push_attribute_section(&mut out, "Реквизиты", &object.attributes);
        }
        ObjectKind::Constant => {
            let types: Vec<&str> = object
                .attributes
                .iter()
                .flat_map(|a| a.types.iter().map(String::as_str))
                .collect();
            if !types.is_empty() {
                out.push_str("## Тип\n\n");
                for t in types {
                    let _ = writeln!(out, "- {t}");
                }
                out.push('\n');
            }
        }
        ObjectKind::FilterCriteria => {
            push_list_section(&mut out, "Типы", &object.filter_criteria_types);
            push_list_section(&mut out, "Состав", &object.filter_criteria_contents);
        }
        ObjectKind::Document | ObjectKind::Catalog | ObjectKind::ChartOfCharacteristicTypes => {
            let heading = if object.kind == ObjectKind::Document {
                "Реквизиты шапки"
            } else {
                "Реквизиты"
            };
            push_attribute_section(&mut out, heading, &object.attributes);

            if !object.tabular_sections.is_empty() {
                out.push_str("## Табличные части\n\n");
                for ts in &object.tabular_sections {
                    let _ = write!(out, "### {}", ts.name);
                    if !ts.synonym.is_empty() {
                        let _ = write!(out, " ({})", ts.synonym);
                    }
                    out.push_str("\n\n");
                    for attr in &ts.attributes {
                        push_attribute_line(&mut out, attr);
                    }
                    out.push('\n');
                }
            }
        }
    }

    out
}

/// Write one Markdown page per object into `output_dir`.
///
/// # Returns
/// Paths of the written files, in input order
pub fn write_markdown_files(objects: &[MetadataObject], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(objects.len());
    for object in objects {
        let path = output_dir.join(file_name(object));
        write_atomic(&path, generate_markdown(object).as_bytes())?;
        written.push(path);
    }
    Ok(written)
}

fn push_attribute_section(out: &mut String, heading: &str, attributes: &[Attribute]) {
    if attributes.is_empty() {
        return;
    }
    let _ = writeln!(out, "## {heading}\n");
    for attr in attributes {
        push_attribute_line(out, attr);
    }
    out.push('\n');
}

fn push_attribute_line(out: &mut String, attr: &Attribute) {
    if attr.types.is_empty() {
        let _ = writeln!(out, "- {}", attr.name);
    } else {
        let _ = writeln!(out, "- {} ({})", attr.name, attr.types.join(", "));
    }
}

fn push_named_line(out: &mut String, name: &str, synonym: &str) {
    if synonym.is_empty() {
        let _ = writeln!(out, "- {name}");
    } else {
        let _ = writeln!(out, "- {name} ({synonym})");
    }
}

fn push_list_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "## {heading}\n");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
    out.push('\n');
}
