use crate::lines::{rewrite, split_lines};
use crate::style::IndentationStyle;

/// Number of whole `unit` repetitions at the start of `line`.
fn leading_units(line: &str, unit: &str) -> usize {
    let mut rest = line;
    let mut level = 0usize;
    while let Some(next) = rest.strip_prefix(unit) {
        rest = next;
        level += 1;
    }
    level
}

/// Replaces each leading `from` unit with a `to` unit, line by line.
/// Separators are copied through untouched.
pub fn convert(text: &str, from: IndentationStyle, to: IndentationStyle) -> String {
    let old_unit = from.render();
    if old_unit.is_empty() {
        return text.to_string();
    }
    let new_unit = to.render();

    rewrite(&split_lines(text), text.len(), |content, out| {
        let level = leading_units(content, &old_unit);
        for _ in 0..level {
            out.push_str(&new_unit);
        }
        out.push_str(&content[level * old_unit.len()..]);
    })
}
