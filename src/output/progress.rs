//! Progress bar utilities.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Create a progress bar for item counts.
pub fn create_item_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} {:<10} [{{bar:40.cyan/blue}}] {{pos}}/{{len}}",
                message
            ))
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

/// Nested bars for listing pages and the nodes of the current page.
pub struct ExportProgress {
    multi: MultiProgress,
    pages: ProgressBar,
}

impl ExportProgress {
    /// Create the page bar. Nothing is drawn when `visible` is false.
    pub fn new(num_pages: u64, visible: bool) -> Self {
        let multi = if visible {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };
        let pages = multi.add(create_item_bar(num_pages, "list pages"));

        Self { multi, pages }
    }

    /// Add a bar for the nodes of one listing page.
    pub fn node_bar(&self, total: u64) -> ProgressBar {
        self.multi.add(create_item_bar(total, "nodes"))
    }

    pub fn page_done(&self) {
        self.pages.inc(1);
    }

    pub fn finish(&self) {
        self.pages.finish_and_clear();
    }
}
