// Results whose finding is a two-note interval.
//
// Positions: 1 = `note_start`, 2 = `note_end`. Interval results are the
// ones that get labeled with lyrics (the interval number printed under the
// end note), hence the lyric default of position 2 only.

use crate::result::{Alignment, Annotated, ResultInfo};
use crate::selection::{PairPosition, Selection};
use serde_json::Value;
use theory_score::{Interval, NoteId, Score};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalResult {
    info: ResultInfo,
    interval: Interval,
}

impl IntervalResult {
    /// Coloring marks both notes unless told otherwise.
    pub const DEFAULT_COLOR_SELECTION: Selection<PairPosition> = Selection::ALL;
    /// Lyrics go under the end note only.
    pub const DEFAULT_LYRIC_SELECTION: Selection<PairPosition> =
        Selection::from_bits(PairPosition::End.bit());

    pub fn new(interval: Interval) -> Self {
        IntervalResult {
            info: ResultInfo::default(),
            interval,
        }
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn note_at(&self, position: PairPosition) -> NoteId {
        match position {
            PairPosition::Start => self.interval.note_start,
            PairPosition::End => self.interval.note_end,
        }
    }

    pub fn notes(&self) -> [NoteId; 2] {
        [self.interval.note_start, self.interval.note_end]
    }

    /// Color the selected notes and record `color` as the result's color.
    pub fn color(&mut self, score: &mut Score, color: &str, selection: Selection<PairPosition>) {
        self.info.color(color);
        for position in selection.iter() {
            let id = self.note_at(position);
            trace!(color, ?position, note = id.index(), "coloring interval note");
            score.note_mut(id).color = Some(color.to_string());
        }
    }

    /// Latest (or, left-aligned, earliest) offset of the two notes.
    pub fn offset(&self, score: &Score, alignment: Alignment) -> f64 {
        let offsets = self.notes().map(|id| score.note(id).offset());
        alignment.aggregate(offsets)
    }

    /// Set the lyric of the selected notes.
    pub fn set_lyric(&self, score: &mut Score, lyric: &str, selection: Selection<PairPosition>) {
        for position in selection.iter() {
            let id = self.note_at(position);
            trace!(lyric, ?position, note = id.index(), "setting interval lyric");
            score.note_mut(id).lyric = Some(lyric.to_string());
        }
    }

    /// True if either note has `editorial.misc[key] == expected`.
    pub fn has_editorial(&self, score: &Score, key: &str, expected: &Value) -> bool {
        self.notes()
            .iter()
            .any(|&id| score.note(id).editorial.matches(key, expected))
    }
}

impl Annotated for IntervalResult {
    fn info(&self) -> &ResultInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ResultInfo {
        &mut self.info
    }
}
