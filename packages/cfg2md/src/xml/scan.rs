//! Namespace-agnostic token scan over a raw metadata document.
//!
//! Used when the strict schema decode of a filter criterion recovers
//! nothing: element naming of its type and content lists varies across
//! real-world exports, so this walk only looks at local names.

use roxmltree::Node;

use super::utils::{element_children, find_children, get_text, has_tag};

/// Collect raw type tokens from every outermost `Type` element.
///
/// A `Type` that wraps nested `Type` re-declarations contributes their
/// texts (one level deep); otherwise it contributes its own text. Blank
/// tokens are skipped. Prefixes are left in place.
pub fn scan_type_tokens(root: Node<'_, '_>) -> Vec<String> {
    let mut tokens = Vec::new();

    for node in root.descendants().filter(|n| has_tag(*n, "Type")) {
        if node.ancestors().skip(1).any(|a| has_tag(a, "Type")) {
            continue;
        }

        let mut nested = find_children(node, "Type").peekable();
        if nested.peek().is_some() {
            tokens.extend(nested.map(get_text).filter(|t| !t.is_empty()));
        } else {
            let text = get_text(node);
            if !text.is_empty() {
                tokens.push(text);
            }
        }
    }

    tokens
}

/// Collect raw content tokens from the `Item` children of every `Content` element.
pub fn scan_content_tokens(root: Node<'_, '_>) -> Vec<String> {
    root.descendants()
        .filter(|n| has_tag(*n, "Content"))
        .flat_map(|content| element_children(content).filter(|c| has_tag(*c, "Item")))
        .map(get_text)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_scan_type_tokens_nested() {
        let xml = r#"<Root xmlns:v8="urn:core">
            <Type><v8:Type>cfg:DocumentRef.Заказ</v8:Type><v8:Type>cfg:DocumentRef.Счет</v8:Type></Type>
        </Root>"#;
        let doc = Document::parse(xml).unwrap();

        assert_eq!(
            scan_type_tokens(doc.root_element()),
            vec!["cfg:DocumentRef.Заказ", "cfg:DocumentRef.Счет"]
        );
    }

    #[test]
    fn test_scan_type_tokens_flat_and_blank() {
        let xml = r#"<Root><a:Type xmlns:a="urn:x"> xs:string </a:Type><Type>  </Type></Root>"#;
        let doc = Document::parse(xml).unwrap();

        assert_eq!(scan_type_tokens(doc.root_element()), vec!["xs:string"]);
    }

    #[test]
    fn test_scan_type_tokens_none() {
        let doc = Document::parse("<Root><Name>X</Name></Root>").unwrap();
        assert!(scan_type_tokens(doc.root_element()).is_empty());
    }

    #[test]
    fn test_scan_content_tokens() {
        let xml = r#"<Root xmlns:xr="urn:readable">
            <Content>
                <xr:Item>Document.Заказ.Attribute.Контрагент</xr:Item>
                <xr:Item> </xr:Item>
                <Other>ignored</Other>
            </Content>
            <Item>outside content</Item>
        </Root>"#;
        let doc = Document::parse(xml).unwrap();

        assert_eq!(
            scan_content_tokens(doc.root_element()),
            vec!["Document.Заказ.Attribute.Контрагент"]
        );
    }
}
