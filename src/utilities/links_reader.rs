use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Reads the URL list, one entry per `\n`-separated line.
///
/// Lines are returned untouched, blank ones included; trimming is left to the collector.
pub async fn read_links(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read links file {}", path.display()))?;

    Ok(content.split('\n').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");
        std::fs::write(&path, "http://a.test/p1\n\n  \nhttp://a.test/p2\n").unwrap();

        let links = read_links(&path).await.unwrap();

        assert_eq!(
            links,
            vec!["http://a.test/p1", "", "  ", "http://a.test/p2", ""]
        );
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = read_links(&path).await.unwrap_err();

        assert!(err.to_string().contains("absent.txt"));
    }
}
