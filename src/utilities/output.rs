/// Renders collected URLs for stdout: one per line, each terminated by `\n`.
/// An empty collection renders as nothing at all.
pub fn render_links(links: &[String]) -> String {
    links.iter().map(|link| format!("{}\n", link)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_url_per_line() {
        let links = vec!["/swatches/a-l.jpg".to_string(), "/swatches/b-l.jpg".to_string()];

        assert_eq!(render_links(&links), "/swatches/a-l.jpg\n/swatches/b-l.jpg\n");
    }

    #[test]
    fn empty_collection_prints_nothing() {
        assert_eq!(render_links(&[]), "");
    }
}
