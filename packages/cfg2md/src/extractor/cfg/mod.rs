//! Configurator export extractor.
//!
//! Layout: `<root>/<KindDir>/<Name>.xml`, each file a `MetaDataObject`
//! in the MDClasses namespace wrapping one object body.

mod schema;

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use self::schema::{schema_for, ObjectSchema, Section};
use super::MetadataExtractor;
use crate::config::{
    CONSTANT_VALUE_ATTRIBUTE, FILL_CHECKING_REQUIRED, NS_CORE, NS_MDCLASSES, NS_READABLE,
    SYNONYM_LANG, TYPE_PREFIXES,
};
use crate::error::{ConvertError, DecodeError, Result};
use crate::normalize::{normalize_filter_content_item, TypeConverter};
use crate::types::{Attribute, Dialect, EnumValue, MetadataObject, ObjectKind, TabularSection};
use crate::xml::{
    child_text_ns, find_child_ns, find_children_ns, get_tag_name, get_text, has_tag_ns,
    read_source, scan_content_tokens, scan_type_tokens,
};

/// Extractor for configurator exports rooted by `Configuration.xml`.
#[derive(Debug, Clone)]
pub struct CfgExtractor {
    root: PathBuf,
    types: TypeConverter,
}

impl CfgExtractor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            types: TypeConverter::new(),
        }
    }

    /// Walk one kind directory, decoding each top-level XML file.
    fn collect(&self, kind: ObjectKind) -> Result<Vec<MetadataObject>> {
        let dir = self.root.join(kind.dir_name());
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

            if !entry.file_type().is_file() || !is_xml_file(entry.path()) {
                continue;
            }

            match self.decode_file(schema, entry.path()) {
                Ok(object) => objects.push(object),
                Err(source) => {
                    let err = ConvertError::FileDecode {
                        path: entry.path().to_path_buf(),
                        source,
                    };
                    warn!(error = %err, "Skipping metadata file");
                }
            }
        }

        info!(kind = %kind, count = objects.len(), "Parsed configurator objects");
        Ok(objects)
    }

    fn decode_file(
        &self,
        schema: &ObjectSchema,
        path: &Path,
    ) -> std::result::Result<MetadataObject, DecodeError> {
        let text = read_source(path)?;
        self.decode_str(schema, &text)
    }

    /// Decode one `MetaDataObject` document against a kind's schema.
    fn decode_str(
        &self,
        schema: &ObjectSchema,
        text: &str,
    ) -> std::result::Result<MetadataObject, DecodeError> {
        let doc = Document::parse(text)?;
        let root = doc.root_element();
        if !has_tag_ns(root, NS_MDCLASSES, "MetaDataObject") {
            return Err(DecodeError::UnexpectedRoot {
                expected: "MetaDataObject".to_string(),
                found: get_tag_name(root).to_string(),
            });
        }

        let body = find_child_ns(root, NS_MDCLASSES, schema.element)
            .ok_or_else(|| DecodeError::missing(schema.element, "MetaDataObject"))?;
        let properties = find_child_ns(body, NS_MDCLASSES, "Properties");

        let name = properties
            .map(|p| child_text_ns(p, NS_MDCLASSES, "Name"))
            .unwrap_or_default();
        if name.is_empty() {
            return Err(DecodeError::missing("Name", schema.element));
        }
        let synonym = properties.map(synonym_of).unwrap_or_default();

        let mut object = MetadataObject::new(schema.kind, name, synonym);
        let children = find_child_ns(body, NS_MDCLASSES, "ChildObjects");

        for section in schema.sections {
            match section {
                Section::Attributes => {
                    object.attributes = self.child_attributes(children, "Attribute");
                }
                Section::Dimensions => {
                    object.dimensions = self.child_attributes(children, "Dimension");
                }
                Section::Resources => {
                    object.resources = self.child_attributes(children, "Resource");
                }
                Section::TabularSections => {
                    object.tabular_sections = self.tabular_sections(children);
                }
                Section::EnumValues => {
                    object.enum_values = enum_values(children);
                }
                Section::ValueType => {
                    let type_node =
                        properties.and_then(|p| find_child_ns(p, NS_MDCLASSES, "Type"));
                    object.attributes = vec![Attribute {
                        name: CONSTANT_VALUE_ATTRIBUTE.to_string(),
                        synonym: String::new(),
                        types: self.declared_types(type_node),
                        required: false,
                    }];
                }
                Section::FilterLists => {
                    let lists = match self.declared_filter_lists(properties) {
                        lists if !lists.is_empty() => lists,
                        _ => self.scanned_filter_lists(root),
                    };
                    object.filter_criteria_types = lists.types;
                    object.filter_criteria_contents = lists.contents;
                }
            }
        }

        Ok(object)
    }

    /// Decode the named-and-typed children of `ChildObjects` with tag `tag`.
    fn child_attributes(&self, children: Option<Node<'_, '_>>, tag: &str) -> Vec<Attribute> {
        let Some(children) = children else {
            return Vec::new();
        };

        find_children_ns(children, NS_MDCLASSES, tag)
            .filter_map(|node| self.attribute(node))
            .collect()
    }

    fn attribute(&self, node: Node<'_, '_>) -> Option<Attribute> {
        let properties = find_child_ns(node, NS_MDCLASSES, "Properties")?;
        let name = child_text_ns(properties, NS_MDCLASSES, "Name");
        if name.is_empty() {
            return None;
        }

        Some(Attribute {
            name,
            synonym: synonym_of(properties),
            types: self.declared_types(find_child_ns(properties, NS_MDCLASSES, "Type")),
            required: child_text_ns(properties, NS_MDCLASSES, "FillChecking")
                == FILL_CHECKING_REQUIRED,
        })
    }

    fn tabular_sections(&self, children: Option<Node<'_, '_>>) -> Vec<TabularSection> {
        let Some(children) = children else {
            return Vec::new();
        };

        find_children_ns(children, NS_MDCLASSES, "TabularSection")
            .filter_map(|ts| {
                let properties = find_child_ns(ts, NS_MDCLASSES, "Properties")?;
                let name = child_text_ns(properties, NS_MDCLASSES, "Name");
                if name.is_empty() {
                    return None;
                }
                let columns = find_child_ns(ts, NS_MDCLASSES, "ChildObjects");
                Some(TabularSection {
                    name,
                    synonym: synonym_of(properties),
                    attributes: self.child_attributes(columns, "Attribute"),
                })
            })
            .collect()
    }

    /// Canonical labels for a `Type` declaration block.
    ///
    /// Single `v8:Type` entries come first, then `v8:TypeSet` entries.
    /// `xs:dateTime` narrowed by `DateFractions` = `Date` becomes a date.
    fn declared_types(&self, type_node: Option<Node<'_, '_>>) -> Vec<String> {
        let Some(type_node) = type_node else {
            return Vec::new();
        };

        let date_only = find_children_ns(type_node, NS_CORE, "DateQualifiers").any(|dq| {
            child_text_ns(dq, NS_CORE, "DateFractions").eq_ignore_ascii_case("Date")
        });

        let mut raw: Vec<String> = Vec::new();
        for node in find_children_ns(type_node, NS_CORE, "Type") {
            let text = get_text(node);
            let spelling = strip_type_prefix(&text);
            if spelling.is_empty() {
                continue;
            }
            if date_only && spelling == "xs:dateTime" {
                raw.push("Date".to_string());
            } else {
                raw.push(spelling.to_string());
            }
        }
        for node in find_children_ns(type_node, NS_CORE, "TypeSet") {
            let text = get_text(node);
            let spelling = strip_type_prefix(&text);
            if !spelling.is_empty() {
                raw.push(spelling.to_string());
            }
        }

        self.types.convert_types(&raw)
    }

    /// Strict decode of a filter criterion's `Type` and `Content` properties.
    fn declared_filter_lists(&self, properties: Option<Node<'_, '_>>) -> FilterLists {
        let Some(properties) = properties else {
            return FilterLists::default();
        };

        let types = self.declared_types(find_child_ns(properties, NS_MDCLASSES, "Type"));
        let contents = find_child_ns(properties, NS_MDCLASSES, "Content")
            .map(|content| {
                find_children_ns(content, NS_READABLE, "Item")
                    .map(get_text)
                    .filter(|t| !t.is_empty())
                    .map(|t| normalize_filter_content_item(&t))
                    .collect()
            })
            .unwrap_or_default();

        FilterLists { types, contents }
    }

    /// Recover filter criterion lists by local-name scan of the whole document.
    fn scanned_filter_lists(&self, root: Node<'_, '_>) -> FilterLists {
        let types = scan_type_tokens(root)
            .iter()
            .map(|t| strip_type_prefix(t))
            .filter(|t| !t.is_empty())
            .map(|t| self.types.convert_type(t))
            .collect();
        let contents = scan_content_tokens(root)
            .iter()
            .map(|t| normalize_filter_content_item(t))
            .collect();

        FilterLists { types, contents }
    }
}

impl MetadataExtractor for CfgExtractor {
    fn dialect(&self) -> Dialect {
        Dialect::Cfg
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

/// Type and content lists of a filter criterion.
#[derive(Debug, Default, PartialEq, Eq)]
struct FilterLists {
    types: Vec<String>,
    contents: Vec<String>,
}

impl FilterLists {
    fn is_empty(&self) -> bool {
        self.types.is_empty() && self.contents.is_empty()
    }
}

/// Resolve the `ru` entry of a `Properties/Synonym` block; empty if none.
fn synonym_of(properties: Node<'_, '_>) -> String {
    find_child_ns(properties, NS_MDCLASSES, "Synonym")
        .and_then(|synonym| {
            find_children_ns(synonym, NS_CORE, "item")
                .find(|item| child_text_ns(*item, NS_CORE, "lang") == SYNONYM_LANG)
        })
        .map(|item| child_text_ns(item, NS_CORE, "content"))
        .unwrap_or_default()
}

fn enum_values(children: Option<Node<'_, '_>>) -> Vec<EnumValue> {
    let Some(children) = children else {
        return Vec::new();
    };

    find_children_ns(children, NS_MDCLASSES, "EnumValue")
        .filter_map(|value| {
            let properties = find_child_ns(value, NS_MDCLASSES, "Properties")?;
            let name = child_text_ns(properties, NS_MDCLASSES, "Name");
            (!name.is_empty()).then(|| EnumValue {
                name,
                synonym: synonym_of(properties),
            })
        })
        .collect()
}

/// Drop the `cfg:` / `v8:` short prefixes of a type spelling.
fn strip_type_prefix(spelling: &str) -> &str {
    TYPE_PREFIXES
        .iter()
        .fold(spelling.trim(), |s, prefix| s.strip_prefix(prefix).unwrap_or(s))
        .trim()
}

fn is_xml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
