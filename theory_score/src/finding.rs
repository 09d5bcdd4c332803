// Fixed-arity finding shapes.
//
// Each is a bundle of `NoteId`s with no behavior beyond construction and
// listing its notes. Analysis passes build these, and the result layer maps
// positional selectors onto their fields.

use crate::note::NoteId;
use serde::{Deserialize, Serialize};

/// Two notes forming an interval, in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub note_start: NoteId,
    pub note_end: NoteId,
}

impl Interval {
    pub fn new(note_start: NoteId, note_end: NoteId) -> Self {
        Interval {
            note_start,
            note_end,
        }
    }
}

/// Two voices across one transition, laid out as
///
/// ```text
/// [ v1n1  v1n2
///   v2n1  v2n2 ]
/// ```
///
/// where `v1` is the upper voice and `n1`/`n2` the notes before/after the
/// move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceLeadingQuartet {
    pub v1n1: NoteId,
    pub v1n2: NoteId,
    pub v2n1: NoteId,
    pub v2n2: NoteId,
}

impl VoiceLeadingQuartet {
    pub fn new(v1n1: NoteId, v1n2: NoteId, v2n1: NoteId, v2n2: NoteId) -> Self {
        VoiceLeadingQuartet {
            v1n1,
            v1n2,
            v2n1,
            v2n2,
        }
    }

    /// The four notes in grid order (row by row).
    pub fn notes(&self) -> [NoteId; 4] {
        [self.v1n1, self.v1n2, self.v2n1, self.v2n2]
    }
}

/// Three consecutive notes in one part (passing tones, neighbor tones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeNoteLinearSegment {
    pub n1: NoteId,
    pub n2: NoteId,
    pub n3: NoteId,
}

impl ThreeNoteLinearSegment {
    pub fn new(n1: NoteId, n2: NoteId, n3: NoteId) -> Self {
        ThreeNoteLinearSegment { n1, n2, n3 }
    }

    pub fn notes(&self) -> [NoteId; 3] {
        [self.n1, self.n2, self.n3]
    }
}
