//! Runner configuration.

use crate::migration::DEFAULT_PAGE_SIZE;

/// Configuration for a migration run.
///
/// Everything about *what* to migrate is asked interactively; this only
/// holds how the copy is carried out.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Issues fetched, and created concurrently, per page.
    page_size: usize,
    /// Whether the progress bar is drawn.
    show_progress: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl RunnerConfig {
    /// Creates a new configuration for a run. A zero page size is raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            show_progress: true,
        }
    }

    /// Keeps the progress bar from drawing.
    pub fn with_hidden_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns whether the progress bar is drawn.
    pub fn show_progress(&self) -> bool {
        self.show_progress
    }
}
