//! Output abstraction for browse results.
//!
//! The session controller only ever talks to a [`Renderer`], so the console
//! can be swapped for a recorder in tests.

use crate::types::DisplayItem;

pub trait Renderer {
    /// Print a page of items.
    fn render_items(&mut self, items: &[DisplayItem]);

    /// Print a single line, e.g. the page footer.
    fn render_line(&mut self, line: &str);
}

/// Writes to stdout, one item block after another.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render_items(&mut self, items: &[DisplayItem]) {
        for item in items {
            println!("{item}");
        }
    }

    fn render_line(&mut self, line: &str) {
        println!("{line}");
    }
}
