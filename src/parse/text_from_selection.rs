use scraper::{ElementRef, Selector};

/// Trimmed text of the first element under `element` matching `selector`,
/// or an empty string when nothing matches.
pub fn text_from_selection(selector: &Selector, element: ElementRef<'_>) -> String {
    element
        .select(selector)
        .next() // first match
        .map(|found| found.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Inner html (markup kept) of the first element matching `selector`.
pub fn inner_html_from_selection(selector: &Selector, element: ElementRef<'_>) -> Option<String> {
    element.select(selector).next().map(|found| found.inner_html())
}
