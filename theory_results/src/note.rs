// Results whose finding is a single note (range violations, unresolved
// leading tones). There is nothing to select: coloring colors the note.

use crate::result::{Annotated, ResultInfo};
use theory_score::{NoteId, Score};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct NoteResult {
    info: ResultInfo,
    note: NoteId,
}

impl NoteResult {
    pub fn new(note: NoteId) -> Self {
        NoteResult {
            info: ResultInfo::default(),
            note,
        }
    }

    pub fn note(&self) -> NoteId {
        self.note
    }

    pub fn color(&mut self, score: &mut Score, color: &str) {
        self.info.color(color);
        trace!(color, note = self.note.index(), "coloring note");
        score.note_mut(self.note).color = Some(color.to_string());
    }

    pub fn offset(&self, score: &Score) -> f64 {
        score.note(self.note).offset()
    }
}

impl Annotated for NoteResult {
    fn info(&self) -> &ResultInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ResultInfo {
        &mut self.info
    }
}
