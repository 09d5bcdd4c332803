// The note arena: every note in a score, addressed by `NoteId`.
//
// Findings and analysis results never hold notes directly. They hold
// `NoteId`s, which are plain indices into `Score::notes`, so dropping a
// finding or a result has no effect on the music. Mutation always goes
// through `&mut Score`.
//
// Each note carries the three annotation surfaces that theory results write
// to: a highlight color, a lyric (used to print labels such as interval
// numbers under a note), and an editorial map of arbitrary flags.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Handle to a note inside a `Score`. Only minted by `Score::add_note`.
///
/// A handle is only meaningful for the score that minted it. Handles that
/// come back through serde are trusted as-is, so they must be deserialized
/// alongside the score they index into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(usize);

impl NoteId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Free-form editorial annotations attached to a note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Editorial {
    /// Arbitrary key/value flags, e.g. `"parallelFifth" -> true`.
    pub misc: BTreeMap<String, Value>,
}

impl Editorial {
    /// True if `key` is present and equal to `expected`. A missing key never
    /// matches.
    pub fn matches(&self, key: &str, expected: &Value) -> bool {
        self.misc.get(key).is_some_and(|v| v == expected)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.misc.insert(key.to_string(), value);
    }
}

/// A single sounding note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Part (voice) number, 0 for the top part.
    pub part: usize,
    /// MIDI pitch number (0-127).
    pub pitch: u8,
    /// Position in quarter notes from the start of the score.
    offset: f64,
    /// Highlight color, if any annotation has set one.
    pub color: Option<String>,
    pub lyric: Option<String>,
    pub editorial: Editorial,
}

impl Note {
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Owner of all notes in a piece.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Score {
    notes: Vec<Note>,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note and return its handle. The offset is fixed for the
    /// lifetime of the note.
    pub fn add_note(&mut self, part: usize, pitch: u8, offset: f64) -> NoteId {
        let id = NoteId(self.notes.len());
        self.notes.push(Note {
            part,
            pitch,
            offset,
            color: None,
            lyric: None,
            editorial: Editorial::default(),
        });
        id
    }

    /// # Panics
    ///
    /// Panics if `id` was minted by a different score and is out of range
    /// for this one.
    pub fn note(&self, id: NoteId) -> &Note {
        &self.notes[id.0]
    }

    /// # Panics
    ///
    /// Same as [`Score::note`].
    pub fn note_mut(&mut self, id: NoteId) -> &mut Note {
        &mut self.notes[id.0]
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// All notes in insertion order with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (NoteId, &Note)> {
        self.notes.iter().enumerate().map(|(i, n)| (NoteId(i), n))
    }
}

impl Score {
    /// Print a compact text summary of the annotated notes for debugging.
    /// One line per note: part, offset, pitch name, then any color, lyric
    /// and editorial flags.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (id, note) in self.iter() {
            out.push_str(&format!(
                "{:>4} p{} @{:<6} {:<4}",
                id.index(),
                note.part,
                note.offset,
                pitch_name(note.pitch)
            ));
            if let Some(color) = &note.color {
                out.push_str(&format!(" color={color}"));
            }
            if let Some(lyric) = &note.lyric {
                out.push_str(&format!(" lyric={lyric:?}"));
            }
            for (key, value) in &note.editorial.misc {
                out.push_str(&format!(" {key}={value}"));
            }
            out.push('\n');
        }
        out
    }
}

/// Convert a MIDI pitch to a compact note name (e.g., "C4", "F#3").
pub fn pitch_name(pitch: u8) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
    ];
    if pitch > 127 {
        return "??".to_string();
    }
    let octave = i16::from(pitch / 12) - 1;
    format!("{}{}", NAMES[(pitch % 12) as usize], octave)
}
