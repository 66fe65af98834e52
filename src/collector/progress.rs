use colored::Colorize;

use crate::fetcher::fetch_page::FetchError;

/// Observer notified as the collector walks the URL list.
///
/// `position` is the 1-based line number in a list of `total` lines,
/// blank lines included.
pub trait Progress {
    fn page_done(&self, _position: usize, _total: usize, _url: &str, _new_images: usize) {}

    fn page_failed(&self, _position: usize, _total: usize, _url: &str, _error: &FetchError) {}

    fn finished(&self, _collected: usize, _failed: usize) {}
}

pub struct NoProgress;

impl Progress for NoProgress {}

/// Prints one status line per page on stderr, keeping stdout for results.
pub struct ConsoleProgress {
    enabled: bool,
}

impl ConsoleProgress {
    pub fn new(enabled: bool) -> Self {
        ConsoleProgress { enabled }
    }
}

impl Progress for ConsoleProgress {
    fn page_done(&self, position: usize, total: usize, url: &str, new_images: usize) {
        if !self.enabled {
            return;
        }
        let line = format!("[{}/{}] {}: {} new swatch image(s)", position, total, url, new_images);
        if new_images > 0 {
            eprintln!("{}", line.green());
        } else {
            eprintln!("{}", line);
        }
    }

    fn page_failed(&self, position: usize, total: usize, url: &str, error: &FetchError) {
        if !self.enabled {
            return;
        }
        eprintln!("{}", format!("[{}/{}] {}: {}", position, total, url, error).red());
    }

    fn finished(&self, collected: usize, failed: usize) {
        if !self.enabled {
            return;
        }
        if failed > 0 {
            eprintln!(
                "{}",
                format!("Collected {} swatch image(s), {} page(s) skipped", collected, failed).yellow()
            );
        } else {
            eprintln!("{}", format!("Collected {} swatch image(s)", collected).green());
        }
    }
}
