// Vertical slices of the score and short runs of them.
//
// A `Verticality` is everything sounding at one moment, keyed by part number.
// Each part maps to a list of elements (usually a single note, sometimes a
// rest) so callers can ask either for "the note of part N" or for the raw
// objects of that part filtered by kind.
//
// A `VerticalityNTuplet` is two or three consecutive verticalities. For
// triplets, every part that sounds a note in all three slices also gets a
// `ThreeNoteLinearSegment`, keyed by part number, which is what the
// annotation layer colors when it highlights a melodic pattern inside the
// n-tuplet.

use crate::error::ScoreError;
use crate::finding::ThreeNoteLinearSegment;
use crate::note::{NoteId, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One object occupying a part within a verticality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Note(NoteId),
    Rest { offset: f64 },
}

impl Element {
    pub fn note(self) -> Option<NoteId> {
        match self {
            Element::Note(id) => Some(id),
            Element::Rest { .. } => None,
        }
    }
}

/// Which elements `Verticality::objects_by_part` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementFilter {
    Any,
    Notes,
    Rests,
}

impl ElementFilter {
    fn accepts(self, element: &Element) -> bool {
        match self {
            ElementFilter::Any => true,
            ElementFilter::Notes => matches!(element, Element::Note(_)),
            ElementFilter::Rests => matches!(element, Element::Rest { .. }),
        }
    }
}

/// The contents of every part at one moment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Verticality {
    parts: BTreeMap<usize, Vec<Element>>,
}

impl Verticality {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a verticality from notes, grouping them by their part.
    pub fn from_notes(score: &Score, notes: &[NoteId]) -> Self {
        let mut vert = Verticality::new();
        for &id in notes {
            vert.push(score.note(id).part, Element::Note(id));
        }
        vert
    }

    pub fn push(&mut self, part: usize, element: Element) {
        self.parts.entry(part).or_default().push(element);
    }

    /// Part numbers present in this slice, ascending.
    pub fn parts(&self) -> impl Iterator<Item = usize> + '_ {
        self.parts.keys().copied()
    }

    /// Every note in the slice, ordered by part.
    pub fn note_list(&self) -> Vec<NoteId> {
        self.parts
            .values()
            .flatten()
            .filter_map(|e| e.note())
            .collect()
    }

    /// The first note sounding in `part`.
    pub fn note_from_part(&self, part: usize) -> Result<NoteId, ScoreError> {
        self.parts
            .get(&part)
            .and_then(|elements| elements.iter().find_map(|e| e.note()))
            .ok_or(ScoreError::PartNotFound { part })
    }

    /// All elements of `part` accepted by `filter`. Fails only when the part
    /// is absent; a present part with no matching elements yields an empty
    /// list.
    pub fn objects_by_part(
        &self,
        part: usize,
        filter: ElementFilter,
    ) -> Result<Vec<Element>, ScoreError> {
        let elements = self
            .parts
            .get(&part)
            .ok_or(ScoreError::PartNotFound { part })?;
        let kept = elements.iter().copied().filter(|e| filter.accepts(e));
        Ok(kept.collect())
    }
}

/// Two or three consecutive verticalities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalityNTuplet {
    verticalities: Vec<Verticality>,
    segments: BTreeMap<usize, ThreeNoteLinearSegment>,
}

impl VerticalityNTuplet {
    /// Group verticalities into an n-tuplet. For a triplet, a linear segment
    /// is built for each part of the first slice that has a note in all
    /// three slices.
    pub fn new(verticalities: Vec<Verticality>) -> Result<Self, ScoreError> {
        let arity = verticalities.len();
        if !(2..=3).contains(&arity) {
            return Err(ScoreError::UnsupportedArity(arity));
        }

        let mut segments = BTreeMap::new();
        if arity == 3 {
            for part in verticalities[0].parts() {
                let notes = (
                    verticalities[0].note_from_part(part),
                    verticalities[1].note_from_part(part),
                    verticalities[2].note_from_part(part),
                );
                if let (Ok(n1), Ok(n2), Ok(n3)) = notes {
                    segments.insert(part, ThreeNoteLinearSegment::new(n1, n2, n3));
                }
            }
        }

        Ok(VerticalityNTuplet {
            verticalities,
            segments,
        })
    }

    /// Number of verticalities (2 or 3).
    pub fn ntuplet_num(&self) -> usize {
        self.verticalities.len()
    }

    pub fn verticalities(&self) -> &[Verticality] {
        &self.verticalities
    }

    pub fn verticality(&self, index: usize) -> Result<&Verticality, ScoreError> {
        self.verticalities
            .get(index)
            .ok_or(ScoreError::VerticalityOutOfRange {
                index,
                len: self.verticalities.len(),
            })
    }

    /// Linear segments keyed by part number. Empty unless this is a triplet.
    pub fn segments(&self) -> &BTreeMap<usize, ThreeNoteLinearSegment> {
        &self.segments
    }

    pub fn segment(&self, part: usize) -> Result<&ThreeNoteLinearSegment, ScoreError> {
        self.segments
            .get(&part)
            .ok_or(ScoreError::SegmentNotFound { part })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three beats of a two-part texture: part 0 and part 1 at offsets 0, 1, 2.
    fn two_part_triplet(score: &mut Score) -> Vec<Verticality> {
        (0..3)
            .map(|beat| {
                let upper = score.add_note(0, 72 + beat as u8, beat as f64);
                let lower = score.add_note(1, 60, beat as f64);
                Verticality::from_notes(score, &[lower, upper])
            })
            .collect()
    }

    #[test]
    fn test_note_list_is_ordered_by_part() {
        let mut score = Score::new();
        let bass = score.add_note(3, 48, 0.0);
        let soprano = score.add_note(0, 72, 0.0);
        let vert = Verticality::from_notes(&score, &[bass, soprano]);
        assert_eq!(vert.note_list(), vec![soprano, bass]);
    }

    #[test]
    fn test_note_from_part_missing() {
        let mut score = Score::new();
        let n = score.add_note(0, 72, 0.0);
        let vert = Verticality::from_notes(&score, &[n]);
        assert_eq!(vert.note_from_part(0), Ok(n));
        assert_eq!(
            vert.note_from_part(2),
            Err(ScoreError::PartNotFound { part: 2 })
        );
    }

    #[test]
    fn test_note_from_part_skips_rests() {
        let mut score = Score::new();
        let n = score.add_note(1, 60, 0.5);
        let mut vert = Verticality::new();
        vert.push(1, Element::Rest { offset: 0.0 });
        vert.push(1, Element::Note(n));
        assert_eq!(vert.note_from_part(1), Ok(n));
    }

    #[test]
    fn test_objects_by_part_filter() {
        let mut score = Score::new();
        let n = score.add_note(1, 60, 0.0);
        let mut vert = Verticality::new();
        vert.push(1, Element::Note(n));
        vert.push(1, Element::Rest { offset: 0.5 });

        let any = vert.objects_by_part(1, ElementFilter::Any).unwrap();
        assert_eq!(any.len(), 2);
        assert_eq!(
            vert.objects_by_part(1, ElementFilter::Notes).unwrap(),
            vec![Element::Note(n)]
        );
        let rests = vert.objects_by_part(1, ElementFilter::Rests).unwrap();
        assert_eq!(rests.len(), 1);
        assert!(vert.objects_by_part(0, ElementFilter::Any).is_err());
    }

    #[test]
    fn test_triplet_builds_segments_per_part() {
        let mut score = Score::new();
        let verts = two_part_triplet(&mut score);
        let ntuplet = VerticalityNTuplet::new(verts).unwrap();
        assert_eq!(ntuplet.ntuplet_num(), 3);
        assert_eq!(ntuplet.segments().len(), 2);

        let upper = ntuplet.segment(0).unwrap();
        assert_eq!(score.note(upper.n1).pitch, 72);
        assert_eq!(score.note(upper.n2).pitch, 73);
        assert_eq!(score.note(upper.n3).pitch, 74);
        assert_eq!(
            ntuplet.segment(5),
            Err(ScoreError::SegmentNotFound { part: 5 })
        );
    }

    #[test]
    fn test_triplet_skips_part_missing_from_a_slice() {
        let mut score = Score::new();
        let mut verts = two_part_triplet(&mut score);
        let lone = score.add_note(0, 80, 1.0);
        verts[1] = Verticality::from_notes(&score, &[lone]);
        let ntuplet = VerticalityNTuplet::new(verts).unwrap();
        assert!(ntuplet.segment(0).is_ok());
        assert!(ntuplet.segment(1).is_err());
    }

    #[test]
    fn test_duplet_has_no_segments() {
        let mut score = Score::new();
        let mut verts = two_part_triplet(&mut score);
        verts.pop();
        let ntuplet = VerticalityNTuplet::new(verts).unwrap();
        assert_eq!(ntuplet.ntuplet_num(), 2);
        assert!(ntuplet.segments().is_empty());
    }

    #[test]
    fn test_unsupported_arity() {
        let mut score = Score::new();
        let mut verts = two_part_triplet(&mut score);
        verts.truncate(1);
        assert_eq!(
            VerticalityNTuplet::new(verts),
            Err(ScoreError::UnsupportedArity(1))
        );
        assert_eq!(
            VerticalityNTuplet::new(Vec::new()),
            Err(ScoreError::UnsupportedArity(0))
        );
    }

    #[test]
    fn test_verticality_out_of_range() {
        let mut score = Score::new();
        let ntuplet = VerticalityNTuplet::new(two_part_triplet(&mut score)).unwrap();
        assert!(ntuplet.verticality(2).is_ok());
        assert_eq!(
            ntuplet.verticality(3),
            Err(ScoreError::VerticalityOutOfRange { index: 3, len: 3 })
        );
    }
}
