//! Per-kind schema descriptors for configurator exports.

use crate::types::ObjectKind;

/// A part of an object body that a kind carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Section {
    /// `ChildObjects/Attribute`
    Attributes,
    /// `ChildObjects/TabularSection`, each with its own `ChildObjects/Attribute`
    TabularSections,
    /// `ChildObjects/Dimension`
    Dimensions,
    /// `ChildObjects/Resource`
    Resources,
    /// `ChildObjects/EnumValue`
    EnumValues,
    /// `Properties/Type`, exposed as the synthetic value attribute
    ValueType,
    /// `Properties/Type` and `Properties/Content` lists
    FilterLists,
}

/// Decoding layout of one object kind.
#[derive(Debug)]
pub(super) struct ObjectSchema {
    pub kind: ObjectKind,
    /// Body element under `MetaDataObject`.
    pub element: &'static str,
    pub sections: &'static [Section],
}

static DOCUMENT: ObjectSchema = ObjectSchema {
    kind: ObjectKind::Document,
    element: "Document",
    sections: &[Section::Attributes, Section::TabularSections],
};

static CATALOG: ObjectSchema = ObjectSchema {
    kind: ObjectKind::Catalog,
    element: "Catalog",
    sections: &[Section::Attributes, Section::TabularSections],
};

static ENUM: ObjectSchema = ObjectSchema {
    kind: ObjectKind::Enum,
    element: "Enum",
    sections: &[Section::EnumValues],
};

static CHART_OF_CHARACTERISTIC_TYPES: ObjectSchema = ObjectSchema {
    kind: ObjectKind::ChartOfCharacteristicTypes,
    element: "ChartOfCharacteristicTypes",
    sections: &[Section::Attributes, Section::TabularSections],
};

static ACCUMULATION_REGISTER: ObjectSchema = ObjectSchema {
    kind: ObjectKind::AccumulationRegister,
    element: "AccumulationRegister",
    sections: &[Section::Dimensions, Section::Resources, Section::Attributes],
};

static INFORMATION_REGISTER: ObjectSchema = ObjectSchema {
    kind: ObjectKind::InformationRegister,
    element: "InformationRegister",
    sections: &[Section::Dimensions, Section::Resources, Section::Attributes],
};

static CONSTANT: ObjectSchema = ObjectSchema {
    kind: ObjectKind::Constant,
    element: "Constant",
    sections: &[Section::ValueType],
};

static FILTER_CRITERION: ObjectSchema = ObjectSchema {
    kind: ObjectKind::FilterCriteria,
    element: "FilterCriterion",
    sections: &[Section::FilterLists],
};

/// Look up the descriptor of a kind.
pub(super) fn schema_for(kind: ObjectKind) -> &'static ObjectSchema {
    match kind {
        ObjectKind::Document => &DOCUMENT,
        ObjectKind::Catalog => &CATALOG,
        ObjectKind::Enum => &ENUM,
        ObjectKind::ChartOfCharacteristicTypes => &CHART_OF_CHARACTERISTIC_TYPES,
        ObjectKind::AccumulationRegister => &ACCUMULATION_REGISTER,
        ObjectKind::InformationRegister => &INFORMATION_REGISTER,
        ObjectKind::Constant => &CONSTANT,
        ObjectKind::FilterCriteria => &FILTER_CRITERION,
    }
}
