use once_cell::sync::Lazy;
use regex::Regex;

// CRLF must come first so it is taken as a single separator.
static LINE_ENDING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line ending pattern is valid"));

/// One content segment and the separator that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub content: &'a str,
    /// `"\r\n"`, `"\r"`, `"\n"`, or empty for the final segment.
    pub ending: &'a str,
}

/// Splits `text` on CR, LF and CRLF, keeping every separator.
///
/// Always yields at least one segment; joining `content` and `ending`
/// of all segments gives back `text` exactly.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let mut out = Vec::new();
    let mut start = 0usize;
    for m in LINE_ENDING_RE.find_iter(text) {
        out.push(Line { content: &text[start..m.start()], ending: m.as_str() });
        start = m.end();
    }
    out.push(Line { content: &text[start..], ending: "" });
    out
}

/// Content segments only, separators discarded.
pub fn contents(text: &str) -> impl Iterator<Item = &str> {
    LINE_ENDING_RE.split(text)
}

/// Rebuilds text from segments, rewriting each content with `f`.
pub(crate) fn rewrite<F>(lines: &[Line<'_>], capacity: usize, mut f: F) -> String
where
    F: FnMut(&str, &mut String),
{
    let mut out = String::with_capacity(capacity);
    for line in lines {
        f(line.content, &mut out);
        out.push_str(line.ending);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_mixed_separators() {
        let text = "a\r\nb\rc\n\nd";
        let lines = split_lines(text);
        let endings: Vec<_> = lines.iter().map(|l| l.ending).collect();
        assert_eq!(endings, vec!["\r\n", "\r", "\n", "\n", ""]);
        let contents: Vec<_> = lines.iter().map(|l| l.content).collect();
        assert_eq!(contents, vec!["a", "b", "c", "", "d"]);
    }

    #[test]
    fn empty_text_is_one_empty_segment() {
        assert_eq!(split_lines(""), vec![Line { content: "", ending: "" }]);
        assert_eq!(contents("").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn rewrite_identity_reproduces_input() {
        let text = "\n<div>\n  <ul>\r\n    <li>yay</li>\r  </ul>\n</div>\n\n";
        let out = rewrite(&split_lines(text), text.len(), |c, out| out.push_str(c));
        assert_eq!(out, text);
    }

    #[test]
    fn trailing_separator_leaves_empty_tail() {
        let lines = split_lines("x\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], Line { content: "", ending: "" });
    }
}
