use crate::lines::{rewrite, split_lines};
use crate::style::IndentationStyle;

/// Prepends one `style` unit to every line that has content.
/// Empty lines, including bare terminators, are left alone.
pub fn prefix_lines(text: &str, style: IndentationStyle) -> String {
    let unit = style.render();
    if unit.is_empty() {
        return text.to_string();
    }

    let lines = split_lines(text);
    let capacity = text.len() + unit.len() * lines.len();
    rewrite(&lines, capacity, |content, out| {
        if !content.is_empty() {
            out.push_str(&unit);
        }
        out.push_str(content);
    })
}
