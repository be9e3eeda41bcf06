use scraper::Html;

use super::text_from_selection::{inner_html_from_selection, text_from_selection};
use crate::static_selector;

/// One labeled meal block as it appears on an upstream page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub label: String,
    pub dish: String,
    /// `None` when the section has no description node at all.
    pub raw_description: Option<String>,
}

/// Every menu section of a page, in document order.
///
/// html5ever recovers from any malformed input, so a page that doesn't look
/// like a menu simply yields no sections.
pub fn parse_sections(html: &str) -> Vec<MenuSection> {
    static_selector!(SECTION_SELECTOR <- ".cardapio-refeicao");
    static_selector!(TITLE_SELECTOR <- ".refeicao-titulo");
    static_selector!(DISH_SELECTOR <- ".refeicao-prato");
    static_selector!(DESCRIPTION_SELECTOR <- ".refeicao-descricao");

    let document = Html::parse_document(html);
    document
        .select(&SECTION_SELECTOR)
        .map(|section| MenuSection {
            label: text_from_selection(&TITLE_SELECTOR, section),
            dish: text_from_selection(&DISH_SELECTOR, section),
            raw_description: inner_html_from_selection(&DESCRIPTION_SELECTOR, section),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MEALS: &str = r#"
        <html><body>
          <div class="cardapio-refeicao">
            <h2 class="refeicao-titulo"> Almoço </h2>
            <p class="refeicao-prato">
              Frango assado
            </p>
            <div class="refeicao-descricao">Arroz<br>Feijão<br/>Observações:<br>Contém <b>glúten</b></div>
          </div>
          <div class="cardapio-refeicao">
            <h2 class="refeicao-titulo">Jantar</h2>
            <p class="refeicao-prato">Omelete</p>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_two_meals() {
        let sections = parse_sections(TWO_MEALS);
        assert_eq!(sections.len(), 2);

        assert_eq!(sections[0].label, "Almoço");
        assert_eq!(sections[0].dish, "Frango assado");
        assert_eq!(
            sections[0].raw_description.as_deref(),
            Some("Arroz<br>Feijão<br>Observações:<br>Contém <b>glúten</b>")
        );

        assert_eq!(sections[1].label, "Jantar");
        assert_eq!(sections[1].dish, "Omelete");
        assert_eq!(sections[1].raw_description, None);
    }

    #[test]
    fn test_missing_title_and_dish_are_empty() {
        let html = r#"<div class="cardapio-refeicao"><div class="refeicao-descricao"></div></div>"#;
        let sections = parse_sections(html);
        assert_eq!(
            sections,
            vec![MenuSection {
                label: String::new(),
                dish: String::new(),
                raw_description: Some(String::new()),
            }]
        );
    }

    #[test]
    fn test_page_without_sections() {
        assert!(parse_sections("<html><body><p>Sem cardápio hoje</p></body></html>").is_empty());
        assert!(parse_sections("").is_empty());
        assert!(parse_sections("<div class=\"cardapio-refeicao\"").is_empty());
    }

    #[test]
    fn test_sections_keep_document_order() {
        let html = r#"
            <div class="cardapio-refeicao"><span class="refeicao-titulo">Café da manhã</span></div>
            <div class="cardapio-refeicao"><span class="refeicao-titulo">Jantar</span></div>
            <div class="cardapio-refeicao"><span class="refeicao-titulo">Almoço</span></div>
        "#;
        let labels: Vec<_> = parse_sections(html).into_iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Café da manhã", "Jantar", "Almoço"]);
    }
}
