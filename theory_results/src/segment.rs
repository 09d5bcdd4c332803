// Results whose finding is a three-note linear segment.
//
// Passing and neighbor tones are the typical findings here, and the note of
// interest is the middle one, so coloring defaults to position 2 only.

use crate::result::{Alignment, Annotated, ResultInfo};
use crate::selection::{SegmentPosition, Selection};
use theory_score::{NoteId, Score, ThreeNoteLinearSegment};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentResult {
    info: ResultInfo,
    segment: ThreeNoteLinearSegment,
}

impl SegmentResult {
    pub const DEFAULT_COLOR_SELECTION: Selection<SegmentPosition> =
        Selection::from_bits(SegmentPosition::Middle.bit());

    pub fn new(segment: ThreeNoteLinearSegment) -> Self {
        SegmentResult {
            info: ResultInfo::default(),
            segment,
        }
    }

    pub fn segment(&self) -> &ThreeNoteLinearSegment {
        &self.segment
    }

    pub fn note_at(&self, position: SegmentPosition) -> NoteId {
        match position {
            SegmentPosition::First => self.segment.n1,
            SegmentPosition::Middle => self.segment.n2,
            SegmentPosition::Last => self.segment.n3,
        }
    }

    pub fn color(&mut self, score: &mut Score, color: &str, selection: Selection<SegmentPosition>) {
        self.info.color(color);
        for position in selection.iter() {
            let id = self.note_at(position);
            trace!(color, ?position, note = id.index(), "coloring segment note");
            score.note_mut(id).color = Some(color.to_string());
        }
    }

    pub fn offset(&self, score: &Score, alignment: Alignment) -> f64 {
        let offsets = self.segment.notes().map(|id| score.note(id).offset());
        alignment.aggregate(offsets)
    }
}

impl Annotated for SegmentResult {
    fn info(&self) -> &ResultInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ResultInfo {
        &mut self.info
    }
}
