use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector compiled the first time it is dereferenced.
#[derive(Debug)]
pub(super) struct StaticSelector {
    cell: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(super) const fn new(source: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        // selectors are literals, so a bad one is a programming error
        self.cell.get_or_init(|| {
            Selector::parse(self.source)
                .unwrap_or_else(|e| panic!("invalid static selector {}: {e:?}", self.source))
        })
    }
}

/// `static_selector!(NAME <- "css")` declares a lazily parsed selector.
#[macro_export]
macro_rules! static_selector {
    ($name: ident <- $sel: literal) => {
        static $name: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    #[test]
    fn test_selector_is_parsed_once_and_matches() {
        static_selector!(PRATO <- "p.refeicao-prato");
        let document = Html::parse_fragment(r#"<p class="refeicao-prato">Lasanha</p><p>outro</p>"#);
        let first: *const scraper::Selector = &*PRATO;
        assert_eq!(document.select(&PRATO).count(), 1);
        assert!(std::ptr::eq(first, &*PRATO));
    }
}
