//! Terminal rendering of projected views
//!
//! Turns [RenderItem]s into a single string for a terminal. With styling enabled comments are
//! gray italic and emphasis is bold, like the browser views; fenced code is framed by its
//! language so consecutive blocks stay distinguishable.

use crossterm::style::Stylize;

use super::projection::RenderItem;

/// Render items back to back, optionally with ANSI styling
pub fn render_text(items: &[RenderItem], styled: bool) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            RenderItem::Comment { text } => {
                if styled {
                    out.push_str(&text.as_str().grey().italic().to_string());
                } else {
                    out.push_str(text);
                }
                out.push('\n');
            }
            RenderItem::Code { language, rendered } => {
                let header = format!("--- {language}");
                if styled {
                    out.push_str(&header.as_str().dark_grey().to_string());
                } else {
                    out.push_str(&header);
                }
                out.push('\n');
                out.push_str(rendered);
                if !rendered.is_empty() {
                    out.push('\n');
                }
            }
            RenderItem::Emphasis { text } => {
                if styled {
                    out.push_str(&text.as_str().bold().to_string());
                } else {
                    out.push_str(text);
                }
            }
            RenderItem::Plain { text } => out.push_str(text),
        }
    }
    out
}
