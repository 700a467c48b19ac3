//! Per-kind schema descriptors for EDT `.mdo` descriptors.

use crate::types::ObjectKind;

/// A repeated field of an EDT descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Field {
    Attributes,
    TabularSections,
    Dimensions,
    Resources,
    EnumValues,
    /// Single `type` block, exposed as the synthetic value attribute.
    ValueType,
    /// `type` block plus repeated `content` references.
    FilterLists,
}

impl Field {
    /// Local element name of the field.
    pub(super) fn element(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::TabularSections => "tabularSections",
            Self::Dimensions => "dimensions",
            Self::Resources => "resources",
            Self::EnumValues => "enumValues",
            Self::ValueType | Self::FilterLists => "type",
        }
    }
}

/// Decoding layout of one object kind.
#[derive(Debug)]
pub(super) struct DescriptorSchema {
    pub kind: ObjectKind,
    /// Root element in the mdclass namespace.
    pub element: &'static str,
    pub fields: &'static [Field],
}

static DOCUMENT: DescriptorSchema = DescriptorSchema {
    kind: ObjectKind::Document,
    element: "Document",
    fields: &[Field::Attributes, Field::TabularSections],
};

static CATALOG: DescriptorSchema = DescriptorSchema {
    kind: ObjectKind::Catalog,
    element: "Catalog",
    fields: &[Field::Attributes, Field::TabularSections],
};

static ENUM: DescriptorSchema = DescriptorSchema {
    kind: ObjectKind::Enum,
    element: "Enum",
    fields: &[Field::EnumValues],
};

static CHART_OF_CHARACTERISTIC_TYPES: DescriptorSchema = DescriptorSchema {
    kind: ObjectKind::ChartOfCharacteristicTypes,
    element: "ChartOfCharacteristicTypes",
    fields: &[Field::Attributes, Field::TabularSections],
};

static ACCUMULATION_REGISTER: DescriptorSchema = DescriptorSchema {
    kind: ObjectKind::AccumulationRegister,
    element: "AccumulationRegister",
    fields: &[Field::Dimensions, Field::Resources, Field::Attributes],
};

static INFORMATION_REGISTER: DescriptorSchema = DescriptorSchema {
    kind: ObjectKind::InformationRegister,
    element: "InformationRegister",
    fields: &[Field::Dimensions, Field::Resources, Field::Attributes],
};

static CONSTANT: DescriptorSchema = DescriptorSchema {
    kind: ObjectKind::Constant,
    element: "Constant",
    fields: &[Field::ValueType],
};

static FILTER_CRITERION: DescriptorSchema = DescriptorSchema {
    kind: ObjectKind::FilterCriteria,
    element: "FilterCriterion",
    fields: &[Field::FilterLists],
};

pub(super) fn schema_for(kind: ObjectKind) -> &'static DescriptorSchema {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_for_matches_kind() {
        for kind in ObjectKind::ALL {
            assert_eq!(schema_for(kind).kind, kind);
        }
    }

    #[test]
    fn test_field_elements() {
        assert_eq!(Field::TabularSections.element(), "tabularSections");
        assert_eq!(Field::EnumValues.element(), "enumValues");
        assert_eq!(Field::ValueType.element(), "type");
    }
}
