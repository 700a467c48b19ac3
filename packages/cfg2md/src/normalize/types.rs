//! Canonicalization of raw type spellings.

use std::sync::LazyLock;

use regex::Regex;

/// Raw type pattern and its canonical replacement.
///
/// Patterns are anchored at both ends and no two of them accept the same
/// input, so evaluation order never changes the result.
const TYPE_RULES: &[(&str, &str)] = &[
    (r"^CatalogRef\.(.+)$", "Справочник.${1}"),
    (r"^DocumentRef\.(.+)$", "Документ.${1}"),
    (r"^EnumRef\.(.+)$", "Перечисление.${1}"),
    (
        r"^ChartOfCharacteristicTypesRef\.(.+)$",
        "ПланВидовХарактеристик.${1}",
    ),
    (r"^ChartOfAccountsRef\.(.+)$", "ПланСчетов.${1}"),
    (r"^ChartOfCalculationTypesRef\.(.+)$", "ПланВидовРасчета.${1}"),
    (r"^ExchangePlanRef\.(.+)$", "ПланОбмена.${1}"),
    (r"^BusinessProcessRef\.(.+)$", "БизнесПроцесс.${1}"),
    (r"^TaskRef\.(.+)$", "Задача.${1}"),
    (r"^DefinedType\.(.+)$", "ОпределяемыйТип.${1}"),
    (r"^Characteristic\.(.+)$", "Характеристика.${1}"),
    (r"^(?:String|xs:string)$", "Строка"),
    (r"^(?:Boolean|xs:boolean)$", "Булево"),
    (r"^(?:Date|xs:date)$", "Дата"),
    (r"^xs:dateTime$", "ДатаВремя"),
    (r"^(?:Number|xs:decimal|xs:double|xs:int|xs:integer)$", "Число"),
    (r"^Type$", "Тип"),
    (r"^ValueStorage$", "ХранилищеЗначения"),
    (r"^UUID$", "УникальныйИдентификатор"),
    (r"^AnyRef$", "ЛюбаяСсылка"),
];

#[allow(clippy::expect_used)] // Static regex table that is guaranteed to be valid
static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    TYPE_RULES
        .iter()
        .map(|(pattern, replacement)| {
            (Regex::new(pattern).expect("valid regex"), *replacement)
        })
        .collect()
});

/// Maps raw type spellings from either dialect to the canonical vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeConverter;

impl TypeConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a single raw type spelling.
    ///
    /// Input is trimmed first; spellings no rule accepts pass through.
    ///
    /// # Examples
    /// ```
    /// use onec_cfg2md::normalize::TypeConverter;
    ///
    /// let tc = TypeConverter::new();
    /// assert_eq!(tc.convert_type("CatalogRef.Валюты"), "Справочник.Валюты");
    /// assert_eq!(tc.convert_type("xs:string"), "Строка");
    /// assert_eq!(tc.convert_type("Unknown"), "Unknown");
    /// ```
    pub fn convert_type(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return String::new();
        }

        COMPILED_RULES
            .iter()
            .find(|(re, _)| re.is_match(raw))
            .map(|(re, replacement)| re.replace(raw, *replacement).into_owned())
            .unwrap_or_else(|| raw.to_string())
    }

    /// Convert every spelling, preserving order and length.
    pub fn convert_types<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        raw.iter().map(|t| self.convert_type(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inputs covering every rule plus a few near misses.
    const SAMPLES: &[&str] = &[
        "CatalogRef.Контрагенты",
        "DocumentRef.Заказ",
        "EnumRef.СостоянияЗаказов",
        "ChartOfCharacteristicTypesRef.ВидыХарактеристик",
        "ChartOfAccountsRef.Хозрасчетный",
        "ChartOfCalculationTypesRef.Начисления",
        "ExchangePlanRef.Полный",
        "BusinessProcessRef.Задание",
        "TaskRef.ЗадачаИсполнителя",
        "DefinedType.ДенежнаяСумма",
        "Characteristic.ВидыСубконто",
        "String",
        "xs:string",
        "Boolean",
        "xs:boolean",
        "Date",
        "xs:date",
        "xs:dateTime",
        "Number",
        "xs:decimal",
        "xs:double",
        "xs:int",
        "xs:integer",
        "Type",
        "ValueStorage",
        "UUID",
        "AnyRef",
        "CatalogRef",
        "DateTime",
        "Strings",
        "xs:base64Binary",
        "Справочник.Контрагенты",
    ];

    #[test]
    fn test_rules_are_mutually_exclusive() {
        for sample in SAMPLES {
            let matching: Vec<_> = COMPILED_RULES
                .iter()
                .filter(|(re, _)| re.is_match(sample))
                .map(|(re, _)| re.as_str())
                .collect();
            assert!(
                matching.len() <= 1,
                "{sample} matched several rules: {matching:?}"
            );
        }
    }

    #[test]
    fn test_every_rule_is_reachable() {
        for (re, _) in COMPILED_RULES.iter() {
            assert!(
                SAMPLES.iter().any(|s| re.is_match(s)),
                "no sample exercises {}",
                re.as_str()
            );
        }
    }

    #[test]
    fn test_convert_type_is_idempotent() {
        let tc = TypeConverter::new();
        for sample in SAMPLES {
            let once = tc.convert_type(sample);
            assert_eq!(tc.convert_type(&once), once, "not idempotent for {sample}");
        }
        for (_, canonical) in TYPE_RULES {
            let canonical = canonical.replace("${1}", "Объект");
            assert_eq!(tc.convert_type(&canonical), canonical);
        }
    }

    #[test]
    fn test_convert_reference_types() {
        let tc = TypeConverter::new();
        assert_eq!(tc.convert_type("CatalogRef.Контрагенты"), "Справочник.Контрагенты");
        assert_eq!(tc.convert_type("DocumentRef.Заказ"), "Документ.Заказ");
        assert_eq!(tc.convert_type("EnumRef.Статусы"), "Перечисление.Статусы");
        assert_eq!(
            tc.convert_type("ChartOfCharacteristicTypesRef.Виды"),
            "ПланВидовХарактеристик.Виды"
        );
        assert_eq!(tc.convert_type("DefinedType.Сумма"), "ОпределяемыйТип.Сумма");
    }

    #[test]
    fn test_convert_primitive_types() {
        let tc = TypeConverter::new();
        assert_eq!(tc.convert_type("String"), "Строка");
        assert_eq!(tc.convert_type("xs:boolean"), "Булево");
        assert_eq!(tc.convert_type("xs:date"), "Дата");
        assert_eq!(tc.convert_type("xs:dateTime"), "ДатаВремя");
        assert_eq!(tc.convert_type("xs:decimal"), "Число");
        assert_eq!(tc.convert_type("UUID"), "УникальныйИдентификатор");
    }

    #[test]
    fn test_convert_type_trims_and_passes_through() {
        let tc = TypeConverter::new();
        assert_eq!(tc.convert_type(""), "");
        assert_eq!(tc.convert_type("   "), "");
        assert_eq!(tc.convert_type("  String "), "Строка");
        assert_eq!(tc.convert_type(" xs:base64Binary "), "xs:base64Binary");
    }

    #[test]
    fn test_convert_types_preserves_length_and_order() {
        let tc = TypeConverter::new();
        let raw = ["String", "String", "Mystery", "DocumentRef.Заказ"];
        assert_eq!(
            tc.convert_types(&raw),
            vec!["Строка", "Строка", "Mystery", "Документ.Заказ"]
        );
        assert!(tc.convert_types::<&str>(&[]).is_empty());
    }
}
