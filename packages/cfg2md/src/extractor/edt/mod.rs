//! EDT project extractor.
//!
//! Layout: `<root>/src/<KindDir>/<Name>/<Name>.mdo`. Descriptor fields are
//! flat and matched by local name; type spellings are already canonical
//! in shape, so no prefix stripping or date-fraction handling applies.

mod schema;

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use self::schema::{schema_for, DescriptorSchema, Field};
use super::MetadataExtractor;
use crate::config::{
    CONSTANT_VALUE_ATTRIBUTE, EDT_DESCRIPTOR_EXT, EDT_SRC_DIR, FILL_CHECKING_REQUIRED,
    NS_EDT_MDCLASS,
};
use crate::error::{ConvertError, DecodeError, Result};
use crate::normalize::{normalize_filter_content_item, TypeConverter};
use crate::types::{Attribute, Dialect, EnumValue, MetadataObject, ObjectKind, TabularSection};
use crate::xml::{
    child_text, find_child, find_children, get_tag_name, get_text, has_tag_ns, read_source,
};

/// Extractor for EDT projects rooted by `.project` and `src/`.
#[derive(Debug, Clone)]
pub struct EdtExtractor {
    root: PathBuf,
    types: TypeConverter,
}

impl EdtExtractor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            types: TypeConverter::new(),
        }
    }

    /// Walk one kind directory, decoding each object folder's descriptor.
    fn collect(&self, kind: ObjectKind) -> Result<Vec<MetadataObject>> {
        let dir = self.root.join(EDT_SRC_DIR).join(kind.dir_name());
        if !dir.is_dir() {
            debug!(kind = %kind, path = %dir.display(), "Kind directory absent");
            return Ok(Vec::new());
        }

        let schema = schema_for(kind);
        let mut objects = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    return Err(ConvertError::DirectoryAccess { path: dir, source });
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let descriptor = descriptor_path(entry.path());
            if !descriptor.is_file() {
                debug!(path = %entry.path().display(), "No descriptor in object folder");
                continue;
            }

            match self.decode_file(schema, &descriptor) {
                Ok(object) => objects.push(object),
                Err(source) => {
                    let err = ConvertError::FileDecode {
                        path: descriptor,
                        source,
                    };
                    warn!(error = %err, "Skipping metadata file");
                }
            }
        }

        info!(kind = %kind, count = objects.len(), "Parsed EDT objects");
        Ok(objects)
    }

    fn decode_file(
        &self,
        schema: &DescriptorSchema,
        path: &Path,
    ) -> std::result::Result<MetadataObject, DecodeError> {
        let text = read_source(path)?;
        self.decode_str(schema, &text)
    }

    fn decode_str(
        &self,
        schema: &DescriptorSchema,
        text: &str,
    ) -> std::result::Result<MetadataObject, DecodeError> {
        let doc = Document::parse(text)?;
        let root = doc.root_element();
        if !has_tag_ns(root, NS_EDT_MDCLASS, schema.element) {
            return Err(DecodeError::UnexpectedRoot {
                expected: format!("mdclass:{}", schema.element),
                found: get_tag_name(root).to_string(),
            });
        }

        let name = child_text(root, "name");
        if name.is_empty() {
            return Err(DecodeError::missing("name", schema.element));
        }

        let mut object = MetadataObject::new(schema.kind, name, synonym_of(root));

        for &field in schema.fields {
            match field {
                Field::Attributes => object.attributes = self.attributes(root, field),
                Field::Dimensions => object.dimensions = self.attributes(root, field),
                Field::Resources => object.resources = self.attributes(root, field),
                Field::TabularSections => {
                    object.tabular_sections = find_children(root, field.element())
                        .filter_map(|ts| {
                            let name = child_text(ts, "name");
                            (!name.is_empty()).then(|| TabularSection {
                                name,
                                synonym: synonym_of(ts),
                                attributes: self.attributes(ts, Field::Attributes),
                            })
                        })
                        .collect();
                }
                Field::EnumValues => {
                    object.enum_values = find_children(root, field.element())
                        .filter_map(|value| {
                            let name = child_text(value, "name");
                            (!name.is_empty()).then(|| EnumValue {
                                name,
                                synonym: synonym_of(value),
                            })
                        })
                        .collect();
                }
                Field::ValueType => {
                    object.attributes = vec![Attribute {
                        name: CONSTANT_VALUE_ATTRIBUTE.to_string(),
                        synonym: String::new(),
                        types: self.declared_types(root),
                        required: false,
                    }];
                }
                Field::FilterLists => {
                    object.filter_criteria_types = self.declared_types(root);
                    object.filter_criteria_contents = find_children(root, "content")
                        .map(get_text)
                        .filter(|t| !t.is_empty())
                        .map(|t| normalize_filter_content_item(&t))
                        .collect();
                }
            }
        }

        Ok(object)
    }

    /// Decode every repeated `field` child of `parent` as an attribute.
    fn attributes(&self, parent: Node<'_, '_>, field: Field) -> Vec<Attribute> {
        find_children(parent, field.element())
            .filter_map(|node| {
                let name = child_text(node, "name");
                (!name.is_empty()).then(|| Attribute {
                    name,
                    synonym: synonym_of(node),
                    types: self.declared_types(node),
                    required: child_text(node, "fillChecking") == FILL_CHECKING_REQUIRED,
                })
            })
            .collect()
    }

    /// Canonical labels from the `type/types` list of `node`.
    fn declared_types(&self, node: Node<'_, '_>) -> Vec<String> {
        let Some(type_node) = find_child(node, "type") else {
            return Vec::new();
        };

        let raw: Vec<String> = find_children(type_node, "types")
            .map(get_text)
            .filter(|t| !t.is_empty())
            .collect();
        self.types.convert_types(&raw)
    }
}

impl MetadataExtractor for EdtExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::Edt
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn parse_documents(&self) -> Result<Vec<MetadataObject>> {
        self.collect(ObjectKind::Document)
    }

    fn parse_catalogs(&self) -> Result<Vec<MetadataObject>> {
        self.collect(ObjectKind::Catalog)
    }

    fn parse_enums(&self) -> Result<Vec<MetadataObject>> {
        self.collect(ObjectKind::Enum)
    }

    fn parse_charts_of_characteristic_types(&self) -> Result<Vec<MetadataObject>> {
        self.collect(ObjectKind::ChartOfCharacteristicTypes)
    }

    fn parse_accumulation_registers(&self) -> Result<Vec<MetadataObject>> {
        self.collect(ObjectKind::AccumulationRegister)
    }

    fn parse_information_registers(&self) -> Result<Vec<MetadataObject>> {
        self.collect(ObjectKind::InformationRegister)
    }

    fn parse_constants(&self) -> Result<Vec<MetadataObject>> {
        self.collect(ObjectKind::Constant)
    }

    fn parse_filter_criteria(&self) -> Result<Vec<MetadataObject>> {
        self.collect(ObjectKind::FilterCriteria)
    }
}

/// `<dir>/<dir>.mdo`
fn descriptor_path(object_dir: &Path) -> PathBuf {
    let name = object_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    object_dir.join(format!("{name}.{EDT_DESCRIPTOR_EXT}"))
}

/// Value of the first `synonym` child; empty if absent.
fn synonym_of(node: Node<'_, '_>) -> String {
    find_child(node, "synonym")
        .map(|synonym| child_text(synonym, "value"))
        .unwrap_or_default()
}
