//! Display labels for filter criterion content references.

/// Replace kind keywords in a dotted reference with their display labels.
///
/// Entity names are left untouched, segment order is preserved.
///
/// # Examples
/// ```
/// use onec_cfg2md::normalize::normalize_filter_content_item;
///
/// assert_eq!(
///     normalize_filter_content_item("Document.Заказ.Attribute.Контрагент"),
///     "Документ.Заказ.Реквизит.Контрагент"
/// );
/// ```
pub fn normalize_filter_content_item(token: &str) -> String {
    if token.trim().is_empty() {
        return token.to_string();
    }

    token
        .split('.')
        .map(content_keyword_label)
        .collect::<Vec<_>>()
        .join(".")
}

fn content_keyword_label(segment: &str) -> &str {
    match segment {
        "Document" => "Документ",
        "Attribute" => "Реквизит",
        "Catalog" => "Справочник",
        "Enum" => "Перечисление",
        "ChartOfCharacteristicTypes" => "ПланВидовХарактеристик",
        "Constant" => "Константа",
        other => other,
    }
}
