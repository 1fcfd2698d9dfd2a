//! Progress bar helpers using indicatif

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Create a progress bar for the migration, starting at zero
///
/// A hidden bar still counts, it just never draws.
pub fn create_progress_bar(len: u64, visible: bool) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(len), draw_target(visible));
    if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("Importing");
    pb
}

fn draw_target(visible: bool) -> ProgressDrawTarget {
    if visible {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    }
}
