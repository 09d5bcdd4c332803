// Results whose finding is a verticality (every part at one moment).
//
// A verticality has no fixed arity, so selection is by part number rather
// than by position. Part lookups go through the verticality and an unknown
// part is an error for the caller.

use crate::error::Result;
use crate::result::{Annotated, ResultInfo};
use theory_score::{NoteId, Score, Verticality};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct VerticalityResult {
    info: ResultInfo,
    verticality: Verticality,
}

impl VerticalityResult {
    pub fn new(verticality: Verticality) -> Self {
        VerticalityResult {
            info: ResultInfo::default(),
            verticality,
        }
    }

    pub fn verticality(&self) -> &Verticality {
        &self.verticality
    }

    /// Color the notes of `parts`, or every note when `parts` is `None` or
    /// empty.
    ///
    /// All parts are resolved before any note is touched, so an unknown
    /// part leaves the score unchanged.
    pub fn color(&mut self, score: &mut Score, color: &str, parts: Option<&[usize]>) -> Result<()> {
        let targets: Vec<NoteId> = match parts {
            Some(parts) if !parts.is_empty() => parts
                .iter()
                .map(|&part| self.verticality.note_from_part(part))
                .collect::<std::result::Result<_, _>>()?,
            _ => self.verticality.note_list(),
        };

        self.info.color(color);
        for id in targets {
            trace!(color, note = id.index(), "coloring verticality note");
            score.note_mut(id).color = Some(color.to_string());
        }
        Ok(())
    }
}

impl Annotated for VerticalityResult {
    fn info(&self) -> &ResultInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ResultInfo {
        &mut self.info
    }
}
