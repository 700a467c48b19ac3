//! Core data types for the converter.
//!
//! These types form the unified record model shared by both source
//! dialects. Every record is built fresh from on-disk data and never
//! mutated afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Kinds of configuration objects the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Document,
    Catalog,
    Enum,
    ChartOfCharacteristicTypes,
    AccumulationRegister,
    InformationRegister,
    Constant,
    FilterCriteria,
}

impl ObjectKind {
    /// All kinds, in canonical processing order.
    pub const ALL: [ObjectKind; 8] = [
        Self::Document,
        Self::Catalog,
        Self::Enum,
        Self::ChartOfCharacteristicTypes,
        Self::AccumulationRegister,
        Self::InformationRegister,
        Self::Constant,
        Self::FilterCriteria,
    ];

    /// Get the identifier used in logs and serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Catalog => "Catalog",
            Self::Enum => "Enum",
            Self::ChartOfCharacteristicTypes => "ChartOfCharacteristicTypes",
            Self::AccumulationRegister => "AccumulationRegister",
            Self::InformationRegister => "InformationRegister",
            Self::Constant => "Constant",
            Self::FilterCriteria => "FilterCriteria",
        }
    }

    /// Get the per-kind folder name, identical in both dialects.
    #[must_use]
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Document => "Documents",
            Self::Catalog => "Catalogs",
            Self::Enum => "Enums",
            Self::ChartOfCharacteristicTypes => "ChartsOfCharacteristicTypes",
            Self::AccumulationRegister => "AccumulationRegisters",
            Self::InformationRegister => "InformationRegisters",
            Self::Constant => "Constants",
            Self::FilterCriteria => "FilterCriteria",
        }
    }

    /// Parse a command-line type name such as `documents` or `filtercriteria`.
    #[must_use]
    pub fn from_type_name(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "documents" => Some(Self::Document),
            "catalogs" => Some(Self::Catalog),
            "enums" => Some(Self::Enum),
            "chartsofcharacteristictypes" => Some(Self::ChartOfCharacteristicTypes),
            "accumulationregisters" => Some(Self::AccumulationRegister),
            "informationregisters" => Some(Self::InformationRegister),
            "constants" => Some(Self::Constant),
            "filtercriteria" => Some(Self::FilterCriteria),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk source dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Configurator export: one namespaced XML file per object, rooted by `Configuration.xml`.
    Cfg,

    /// EDT project: one folder and `.mdo` descriptor per object, rooted by `.project` + `src/`.
    Edt,
}

impl Dialect {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cfg => "cfg",
            Self::Edt => "edt",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cfg" => Ok(Self::Cfg),
            "edt" => Ok(Self::Edt),
            _ => Err(ConvertError::UnsupportedDialect(s.to_string())),
        }
    }
}

/// A field of an object, a register dimension/resource, or a constant's value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,

    /// Localized display label; empty when the source has none.
    pub synonym: String,

    /// Canonical type labels, one per raw type declaration.
    pub types: Vec<String>,

    /// Whether the source marks the field as mandatory.
    pub required: bool,
}

/// A repeating child structure of a document, catalog or chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabularSection {
    pub name: String,
    pub synonym: String,
    pub attributes: Vec<Attribute>,
}

/// A single value of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub synonym: String,
}

/// Unified record for any configuration object.
///
/// Collections that do not apply to `kind` stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataObject {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub name: String,
    pub synonym: String,
    pub attributes: Vec<Attribute>,
    pub tabular_sections: Vec<TabularSection>,
    pub dimensions: Vec<Attribute>,
    pub resources: Vec<Attribute>,
    pub enum_values: Vec<EnumValue>,
    pub filter_criteria_types: Vec<String>,
    pub filter_criteria_contents: Vec<String>,
}

impl MetadataObject {
    /// Create an object with only its identity set.
    #[must_use]
    pub fn new(kind: ObjectKind, name: impl Into<String>, synonym: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            synonym: synonym.into(),
            attributes: Vec::new(),
            tabular_sections: Vec::new(),
            dimensions: Vec::new(),
            resources: Vec::new(),
            enum_values: Vec::new(),
            filter_criteria_types: Vec::new(),
            filter_criteria_contents: Vec::new(),
        }
    }

    /// Find an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Find a tabular section by name.
    #[must_use]
    pub fn tabular_section(&self, name: &str) -> Option<&TabularSection> {
        self.tabular_sections.iter().find(|ts| ts.name == name)
    }
}
