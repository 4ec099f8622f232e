use crate::config::Config;
use crate::logger::{Logger, SILENT};
use crate::style::{IndentKind, IndentationStyle};
use serde::Serialize;

mod detect_observe;
mod detect_table;

pub use detect_observe::{observe, Observation};
pub use detect_table::{FrequencyTable, IndentKey, Tally};

/// One row of the frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub kind: IndentKind,
    pub delta: usize,
    pub count: usize,
    pub weight: usize,
}

/// Full record of an inference: the winner and what it competed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub style: IndentationStyle,
    /// False when the table came from the pass that counts single spaces.
    pub single_spaces_ignored: bool,
    /// In first-seen order.
    pub candidates: Vec<Candidate>,
}

/// Infers the dominant indentation unit of a text.
pub struct Detector<'a> {
    ignore_single_spaces: bool,
    logger: &'a Logger,
}

impl<'a> Detector<'a> {
    pub fn new(config: &Config, logger: &'a Logger) -> Self {
        Self {
            ignore_single_spaces: config.ignore_single_spaces,
            logger,
        }
    }

    pub fn detect(&self, text: &str) -> IndentationStyle {
        self.analyze(text).style
    }

    /// Two passes at most:
    /// 1) Ignore single-space indents (comment continuation lines)
    /// 2) If nothing was found, count them too
    pub fn analyze(&self, text: &str) -> Detection {
        let mut single_spaces_ignored = self.ignore_single_spaces;
        let mut table = FrequencyTable::build(text, single_spaces_ignored);

        if table.is_empty() && single_spaces_ignored {
            self.logger.info(
                "detector",
                "fallback_pass",
                "no indents beyond single spaces; rescanning with them",
            );
            single_spaces_ignored = false;
            table = FrequencyTable::build(text, false);
        }

        let style = table
            .most_used()
            .map(|key| IndentationStyle::new(key.delta, key.kind))
            .unwrap_or_else(IndentationStyle::unknown);

        self.logger.info(
            "detector",
            "detected",
            &format!("{} x{} (candidates={})", style.kind(), style.amount(), table.len()),
        );

        let candidates = table
            .iter()
            .map(|(key, tally)| Candidate {
                kind: key.kind,
                delta: key.delta,
                count: tally.count,
                weight: tally.weight,
            })
            .collect();

        Detection { style, single_spaces_ignored, candidates }
    }
}

impl Default for Detector<'static> {
    fn default() -> Self {
        Self::new(&Config::default(), &SILENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_indentation_is_unknown() {
        let detection = Detector::default().analyze("<ul></ul>");
        assert_eq!(detection.style, IndentationStyle::unknown());
        assert!(detection.candidates.is_empty());
        assert!(!detection.single_spaces_ignored);
    }

    #[test]
    fn single_space_only_falls_back() {
        let detection = Detector::default().analyze("a\n b\n c\n");
        assert_eq!(detection.style, IndentationStyle::spaces(1));
        assert!(!detection.single_spaces_ignored);
    }

    #[test]
    fn comment_continuations_do_not_win() {
        let text = "/**\n * doc\n * more\n */\nfn a() {\n    b();\n}\n";
        let detection = Detector::default().analyze(text);
        assert_eq!(detection.style, IndentationStyle::spaces(4));
        assert!(detection.single_spaces_ignored);
    }

    #[test]
    fn counting_single_spaces_from_the_start() {
        let config = Config { ignore_single_spaces: false, ..Config::default() };
        let logger = Logger::silent();
        let text = "/**\n * doc\n * more\n */\nfn a() {\n    b();\n}\n";
        let detection = Detector::new(&config, &logger).analyze(text);
        assert_eq!(detection.style, IndentationStyle::spaces(1));
        assert!(!detection.single_spaces_ignored);
    }

    #[test]
    fn candidates_keep_table_order() {
        let detection = Detector::default().analyze("a\n    b\n\tc\n\td\n");
        let rows: Vec<_> = detection
            .candidates
            .iter()
            .map(|c| (c.kind, c.delta, c.count, c.weight))
            .collect();
        assert_eq!(
            rows,
            vec![(IndentKind::Space, 4, 1, 0), (IndentKind::Tab, 1, 2, 1)]
        );
        assert_eq!(detection.style, IndentationStyle::tabs(1));
    }

    #[test]
    fn detection_serializes() {
        let detection = Detector::default().analyze("a\n  b\n");
        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(json["style"]["amount"], 2);
        assert_eq!(json["style"]["kind"], "space");
        assert_eq!(json["candidates"][0]["delta"], 2);
    }
}
