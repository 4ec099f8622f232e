use crate::style::IndentKind;
use once_cell::sync::Lazy;
use regex::Regex;

// Spaces or tabs, never both: tabs indent, spaces after them only align.
static LEADING_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?: +|\t+)").expect("leading run pattern is valid"));

/// Leading whitespace run of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub depth: usize,
    pub kind: IndentKind,
}

impl Observation {
    pub fn is_single_space(&self) -> bool {
        self.kind == IndentKind::Space && self.depth == 1
    }
}

/// Returns `None` when the line does not start with a space or a tab.
pub fn observe(line: &str) -> Option<Observation> {
    let m = LEADING_RUN_RE.find(line)?;
    let kind = if line.starts_with(' ') { IndentKind::Space } else { IndentKind::Tab };
    Some(Observation { depth: m.end(), kind })
}
