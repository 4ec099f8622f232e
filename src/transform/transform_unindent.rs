use crate::detect::observe;
use crate::lines::{contents, rewrite, split_lines};
use crate::style::IndentationStyle;

/// Smallest leading run shared by every non-empty line.
///
/// `None` when some line has no leading whitespace or when lines disagree
/// on spaces versus tabs.
pub fn common_indent(text: &str) -> Option<IndentationStyle> {
    let mut min_depth: Option<usize> = None;
    let mut common_kind = None;

    for line in contents(text) {
        if line.is_empty() {
            continue;
        }
        let obs = observe(line)?;
        match common_kind {
            None => common_kind = Some(obs.kind),
            Some(kind) if kind != obs.kind => return None,
            Some(_) => {}
        }
        min_depth = Some(min_depth.map_or(obs.depth, |m| m.min(obs.depth)));
    }

    match (min_depth?, common_kind?) {
        (0, _) => None,
        (depth, kind) => Some(IndentationStyle::new(depth, kind)),
    }
}

/// Removes the common indentation once from every line, or returns `None`
/// if there is none to remove.
pub fn strip_common(text: &str) -> Option<String> {
    let unit = common_indent(text)?.render();
    let lines = split_lines(text);

    if lines
        .iter()
        .any(|l| !l.content.is_empty() && !l.content.starts_with(unit.as_str()))
    {
        return None;
    }

    Some(rewrite(&lines, text.len(), |content, out| {
        out.push_str(content.strip_prefix(unit.as_str()).unwrap_or(content));
    }))
}
