use std::collections::HashMap;

use scraper::{Html, Selector};

/// An `<img>` element reduced to its attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageElement {
    attributes: HashMap<String, String>,
}

impl ImageElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Extract every image element from HTML content, in document order.
///
/// Parsing is lenient: malformed markup yields whatever elements the parser
/// recovers, possibly none.
pub fn find_images(html_content: &str) -> Vec<ImageElement> {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("img").unwrap();

    document
        .select(&selector)
        .map(|element| ImageElement {
            attributes: element
                .value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        })
        .collect()
}
