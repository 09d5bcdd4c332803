// Results whose finding is a voice-leading quartet.
//
// Positions follow the quartet's grid, row by row:
//
//     [ 1  2        [ v1n1  v1n2
//       3  4 ]        v2n1  v2n2 ]
//
// Quartet rules (parallel fifths, hidden octaves, ...) implicate every note
// of the move, so coloring and editorial marking default to all four cells.

use crate::result::{Alignment, Annotated, ResultInfo};
use crate::selection::{QuartetPosition, Selection};
use serde_json::Value;
use theory_score::{NoteId, Score, VoiceLeadingQuartet};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct QuartetResult {
    info: ResultInfo,
    quartet: VoiceLeadingQuartet,
}

impl QuartetResult {
    pub const DEFAULT_COLOR_SELECTION: Selection<QuartetPosition> = Selection::ALL;
    pub const DEFAULT_MARK_SELECTION: Selection<QuartetPosition> = Selection::ALL;

    pub fn new(quartet: VoiceLeadingQuartet) -> Self {
        QuartetResult {
            info: ResultInfo::default(),
            quartet,
        }
    }

    pub fn quartet(&self) -> &VoiceLeadingQuartet {
        &self.quartet
    }

    pub fn note_at(&self, position: QuartetPosition) -> NoteId {
        match position {
            QuartetPosition::V1N1 => self.quartet.v1n1,
            QuartetPosition::V1N2 => self.quartet.v1n2,
            QuartetPosition::V2N1 => self.quartet.v2n1,
            QuartetPosition::V2N2 => self.quartet.v2n2,
        }
    }

    pub fn color(&mut self, score: &mut Score, color: &str, selection: Selection<QuartetPosition>) {
        self.info.color(color);
        for position in selection.iter() {
            let id = self.note_at(position);
            trace!(color, ?position, note = id.index(), "coloring quartet note");
            score.note_mut(id).color = Some(color.to_string());
        }
    }

    /// Latest (or, left-aligned, earliest) offset of the four cells.
    pub fn offset(&self, score: &Score, alignment: Alignment) -> f64 {
        let offsets = self.quartet.notes().map(|id| score.note(id).offset());
        alignment.aggregate(offsets)
    }

    /// True if any of the four notes has `editorial.misc[key] == expected`.
    pub fn has_editorial(&self, score: &Score, key: &str, expected: &Value) -> bool {
        self.quartet
            .notes()
            .iter()
            .any(|&id| score.note(id).editorial.matches(key, expected))
    }

    /// Store `value` under `key` in the editorial map of each selected cell.
    pub fn mark_editorial(
        &self,
        score: &mut Score,
        key: &str,
        value: &Value,
        selection: Selection<QuartetPosition>,
    ) {
        for position in selection.iter() {
            let id = self.note_at(position);
            trace!(key, %value, ?position, note = id.index(), "marking quartet note");
            score.note_mut(id).editorial.set(key, value.clone());
        }
    }
}

impl Annotated for QuartetResult {
    fn info(&self) -> &ResultInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ResultInfo {
        &mut self.info
    }
}
