use super::detect_observe::observe;
use crate::lines::contents;
use crate::style::IndentKind;
use indexmap::IndexMap;

/// Indent kind plus the depth change between two consecutive indented lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentKey {
    pub kind: IndentKind,
    pub delta: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub count: usize,
    /// Lines that repeated the previous depth under this key.
    pub weight: usize,
}

/// Delta frequencies of one scan, in first-seen order.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    entries: IndexMap<IndentKey, Tally>,
}

impl FrequencyTable {
    pub fn build(text: &str, ignore_single_spaces: bool) -> Self {
        let mut table = Self::default();

        let mut previous_size = 0usize;
        let mut previous_kind: Option<IndentKind> = None;
        let mut last_key: Option<IndentKey> = None;

        for line in contents(text) {
            if line.is_empty() {
                continue;
            }

            let Some(obs) = observe(line) else {
                previous_size = 0;
                previous_kind = None;
                continue;
            };

            if ignore_single_spaces && obs.is_single_space() {
                continue;
            }

            if previous_kind != Some(obs.kind) {
                previous_size = 0;
            }
            previous_kind = Some(obs.kind);

            let delta = obs.depth.abs_diff(previous_size);
            previous_size = obs.depth;

            if delta == 0 {
                // Same depth as the previous line: corroborates the last unit.
                if let Some(key) = last_key {
                    table.bump(key, 1);
                }
            } else {
                let key = IndentKey { kind: obs.kind, delta };
                table.bump(key, 0);
                last_key = Some(key);
            }
        }

        table
    }

    fn bump(&mut self, key: IndentKey, weight: usize) {
        self.entries
            .entry(key)
            .and_modify(|t| {
                t.count += 1;
                t.weight += weight;
            })
            .or_insert(Tally { count: 1, weight: 0 });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IndentKey, &Tally)> {
        self.entries.iter()
    }

    /// Highest count wins; equal counts go to the higher weight. A key
    /// only takes over on strict improvement, so full ties keep the
    /// earliest key.
    pub fn most_used(&self) -> Option<IndentKey> {
        let mut best: Option<(IndentKey, Tally)> = None;
        for (key, tally) in &self.entries {
            let better = match best {
                None => true,
                Some((_, b)) => {
                    tally.count > b.count || (tally.count == b.count && tally.weight > b.weight)
                }
            };
            if better {
                best = Some((*key, *tally));
            }
        }
        best.map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(kind: IndentKind, delta: usize) -> IndentKey {
        IndentKey { kind, delta }
    }

    fn tally_of(table: &FrequencyTable, k: IndentKey) -> Tally {
        table.iter().find(|(kk, _)| **kk == k).map(|(_, t)| *t).unwrap_or_default()
    }

    #[test]
    fn counts_deltas_and_weights() {
        let text = "a\n    b\n    c\n        d\n    e\nf\n";
        let table = FrequencyTable::build(text, true);
        assert_eq!(table.len(), 1);
        assert_eq!(tally_of(&table, key(IndentKind::Space, 4)), Tally { count: 4, weight: 1 });
    }

    #[test]
    fn kind_switch_restarts_depth() {
        let text = "a\n    b\n\tc\n";
        let table = FrequencyTable::build(text, true);
        let keys: Vec<_> = table.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![key(IndentKind::Space, 4), key(IndentKind::Tab, 1)]);
    }

    #[test]
    fn unindented_line_breaks_the_chain() {
        // "c" is measured from column zero, not as a repeat of "b".
        let text = "    b\nx\n    c\n";
        let table = FrequencyTable::build(text, true);
        assert_eq!(tally_of(&table, key(IndentKind::Space, 4)), Tally { count: 2, weight: 0 });
    }

    #[test]
    fn single_spaces_skipped_only_when_asked() {
        let text = "/**\n * doc\n */\n";
        assert!(FrequencyTable::build(text, true).is_empty());
        let table = FrequencyTable::build(text, false);
        assert_eq!(tally_of(&table, key(IndentKind::Space, 1)), Tally { count: 2, weight: 1 });
    }

    #[test]
    fn empty_lines_do_not_reset() {
        let text = "a\n    b\n\n    c\n";
        let table = FrequencyTable::build(text, true);
        assert_eq!(tally_of(&table, key(IndentKind::Space, 4)), Tally { count: 2, weight: 1 });
    }

    #[test]
    fn weight_breaks_count_ties() {
        // s4: two lines, no repeats. t1: two lines, one repeat.
        let text = "a\n    b\n        c\nd\n\te\n\tf\n";
        let table = FrequencyTable::build(text, true);
        assert_eq!(tally_of(&table, key(IndentKind::Space, 4)), Tally { count: 2, weight: 0 });
        assert_eq!(tally_of(&table, key(IndentKind::Tab, 1)), Tally { count: 2, weight: 1 });
        assert_eq!(table.most_used(), Some(key(IndentKind::Tab, 1)));
    }

    #[test]
    fn full_tie_keeps_first_seen() {
        let text = "a\n\tb\nc\n  d\n";
        let table = FrequencyTable::build(text, true);
        assert_eq!(table.most_used(), Some(key(IndentKind::Tab, 1)));
    }

    #[test]
    fn empty_table_has_no_winner() {
        assert_eq!(FrequencyTable::build("<ul></ul>", true).most_used(), None);
        assert_eq!(FrequencyTable::build("", false).most_used(), None);
    }
}
