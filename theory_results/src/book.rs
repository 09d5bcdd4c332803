// ResultBook: the results of an analysis run, grouped by finding shape.
//
// Analysis passes push results as they find them; consumers then pull all
// results of one shape, highlight them in bulk, or filter on editorial
// flags. Within a shape, results keep insertion order.

use crate::config::AnnotationConfig;
use crate::error::Result;
use crate::result::Annotated;
use crate::theory_result::{ResultKind, TheoryResult};
use serde_json::Value;
use std::collections::BTreeMap;
use theory_score::Score;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ResultBook {
    results: BTreeMap<ResultKind, Vec<TheoryResult>>,
}

impl ResultBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: impl Into<TheoryResult>) {
        let result = result.into();
        self.results.entry(result.kind()).or_default().push(result);
    }

    pub fn len(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn of_kind(&self, kind: ResultKind) -> &[TheoryResult] {
        self.results
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn of_kind_mut(&mut self, kind: ResultKind) -> &mut [TheoryResult] {
        self.results
            .get_mut(&kind)
            .map(Vec::as_mut_slice)
            .unwrap_or_default()
    }

    /// All results, shape by shape.
    pub fn iter(&self) -> impl Iterator<Item = &TheoryResult> {
        self.results.values().flatten()
    }

    /// Color every result of `kind` with its default selection. Stops at the
    /// first lookup failure.
    pub fn color_all(&mut self, score: &mut Score, kind: ResultKind, color: &str) -> Result<()> {
        let results = self.of_kind_mut(kind);
        debug!(%kind, color, count = results.len(), "coloring results");
        for result in results {
            result.color(score, color)?;
        }
        Ok(())
    }

    /// `color_all` with the configured default color.
    pub fn color_all_default(
        &mut self,
        score: &mut Score,
        kind: ResultKind,
        config: &AnnotationConfig,
    ) -> Result<()> {
        self.color_all(score, kind, &config.default_color)
    }

    /// Results whose editorial query answers true for `key == expected`.
    pub fn with_editorial<'a>(
        &'a self,
        score: &'a Score,
        key: &'a str,
        expected: &'a Value,
    ) -> impl Iterator<Item = &'a TheoryResult> + 'a {
        self.iter()
            .filter(move |r| r.has_editorial(score, key, expected))
    }

    /// Classification values of every result of `kind`, in insertion order.
    pub fn values_of_kind(&self, kind: ResultKind) -> Vec<&str> {
        self.of_kind(kind).iter().map(|r| r.value()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::IntervalResult;
    use crate::note::NoteResult;
    use crate::segment::SegmentResult;
    use serde_json::json;
    use theory_score::{Interval, ThreeNoteLinearSegment};

    #[test]
    fn test_push_groups_by_kind() {
        let mut score = Score::new();
        let a = score.add_note(0, 72, 0.0);
        let b = score.add_note(1, 65, 0.0);

        let mut book = ResultBook::new();
        assert!(book.is_empty());

        let mut first = IntervalResult::new(Interval::new(b, a));
        first.set_description("Major sixth", "M6");
        let mut second = IntervalResult::new(Interval::new(a, b));
        second.set_description("Minor third", "m3");
        book.push(first);
        book.push(NoteResult::new(a));
        book.push(second);

        assert_eq!(book.len(), 3);
        assert_eq!(book.of_kind(ResultKind::Interval).len(), 2);
        assert_eq!(book.of_kind(ResultKind::Note).len(), 1);
        assert!(book.of_kind(ResultKind::Quartet).is_empty());
        assert_eq!(book.values_of_kind(ResultKind::Interval), vec!["M6", "m3"]);
    }

    #[test]
    fn test_color_all_only_touches_kind() {
        let mut score = Score::new();
        let a = score.add_note(0, 72, 0.0);
        let b = score.add_note(0, 74, 0.5);
        let c = score.add_note(0, 76, 1.0);
        let lone = score.add_note(1, 48, 0.0);

        let mut book = ResultBook::new();
        book.push(SegmentResult::new(ThreeNoteLinearSegment::new(a, b, c)));
        book.push(NoteResult::new(lone));

        book.color_all(&mut score, ResultKind::Segment, "blue")
            .unwrap();
        assert_eq!(score.note(b).color.as_deref(), Some("blue"));
        assert!(score.note(a).color.is_none());
        assert!(score.note(lone).color.is_none());

        book.color_all_default(&mut score, ResultKind::Note, &AnnotationConfig::default())
            .unwrap();
        assert_eq!(score.note(lone).color.as_deref(), Some("red"));
        assert_eq!(book.of_kind(ResultKind::Note)[0].current_color(), "red");
    }

    #[test]
    fn test_with_editorial() {
        let mut score = Score::new();
        let a = score.add_note(0, 72, 0.0);
        let b = score.add_note(1, 65, 0.0);
        let c = score.add_note(2, 53, 0.0);
        score.note_mut(c).editorial.set("crossed", json!(true));

        let mut book = ResultBook::new();
        book.push(IntervalResult::new(Interval::new(a, b)));
        book.push(IntervalResult::new(Interval::new(b, c)));
        book.push(NoteResult::new(c));

        let expected = json!(true);
        let hits: Vec<_> = book.with_editorial(&score, "crossed", &expected).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].notes(), vec![b, c]);
    }
}
