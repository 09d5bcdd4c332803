// `TheoryResult`: any result, tagged by the shape of its finding.
//
// Collections of results (one analysis run produces hundreds) hold this
// enum. It forwards the shared accessors to the wrapped variant and exposes
// the shape-independent operations with each shape's default selection:
//
// | kind         | color default       | offset      | editorial query |
// |--------------|---------------------|-------------|-----------------|
// | interval     | both notes          | max / min   | either note     |
// | quartet      | all four cells      | max / min   | any cell        |
// | note         | the note            | note offset | -               |
// | verticality  | every part          | -           | -               |
// | segment      | middle note         | max / min   | -               |
// | n_tuplet     | identified part     | -           | -               |
//
// Shape-specific operations (lyrics, editorial marking, explicit selections)
// are reached by matching on the variant.

use crate::config::AnnotationConfig;
use crate::error::Result;
use crate::interval::IntervalResult;
use crate::note::NoteResult;
use crate::ntuplet::{NTupletResult, NTupletTarget};
use crate::quartet::QuartetResult;
use crate::result::{Alignment, Annotated, ResultInfo};
use crate::segment::SegmentResult;
use crate::verticality::VerticalityResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use theory_score::{NoteId, Score};

/// The shape of a result's finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Interval,
    Quartet,
    Note,
    Verticality,
    Segment,
    NTuplet,
}

impl ResultKind {
    pub const ALL: [ResultKind; 6] = [
        ResultKind::Interval,
        ResultKind::Quartet,
        ResultKind::Note,
        ResultKind::Verticality,
        ResultKind::Segment,
        ResultKind::NTuplet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResultKind::Interval => "interval",
            ResultKind::Quartet => "quartet",
            ResultKind::Note => "note",
            ResultKind::Verticality => "verticality",
            ResultKind::Segment => "segment",
            ResultKind::NTuplet => "n_tuplet",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TheoryResult {
    Interval(IntervalResult),
    Quartet(QuartetResult),
    Note(NoteResult),
    Verticality(VerticalityResult),
    Segment(SegmentResult),
    NTuplet(NTupletResult),
}

impl TheoryResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            TheoryResult::Interval(_) => ResultKind::Interval,
            TheoryResult::Quartet(_) => ResultKind::Quartet,
            TheoryResult::Note(_) => ResultKind::Note,
            TheoryResult::Verticality(_) => ResultKind::Verticality,
            TheoryResult::Segment(_) => ResultKind::Segment,
            TheoryResult::NTuplet(_) => ResultKind::NTuplet,
        }
    }

    /// Color with the shape's default selection. Only verticality and
    /// n-tuplet results can fail, on a lookup into the score model.
    pub fn color(&mut self, score: &mut Score, color: &str) -> Result<()> {
        match self {
            TheoryResult::Interval(r) => {
                r.color(score, color, IntervalResult::DEFAULT_COLOR_SELECTION)
            }
            TheoryResult::Quartet(r) => {
                r.color(score, color, QuartetResult::DEFAULT_COLOR_SELECTION)
            }
            TheoryResult::Note(r) => r.color(score, color),
            TheoryResult::Verticality(r) => r.color(score, color, None)?,
            TheoryResult::Segment(r) => {
                r.color(score, color, SegmentResult::DEFAULT_COLOR_SELECTION)
            }
            TheoryResult::NTuplet(r) => r.color(score, color, NTupletTarget::Identified)?,
        }
        Ok(())
    }

    /// `color` with the configured default color.
    pub fn color_default(&mut self, score: &mut Score, config: &AnnotationConfig) -> Result<()> {
        self.color(score, &config.default_color)
    }

    /// Temporal position of the finding, for shapes that have one.
    pub fn offset(&self, score: &Score, alignment: Alignment) -> Option<f64> {
        match self {
            TheoryResult::Interval(r) => Some(r.offset(score, alignment)),
            TheoryResult::Quartet(r) => Some(r.offset(score, alignment)),
            TheoryResult::Note(r) => Some(r.offset(score)),
            TheoryResult::Segment(r) => Some(r.offset(score, alignment)),
            TheoryResult::Verticality(_) | TheoryResult::NTuplet(_) => None,
        }
    }

    /// Editorial flag query. Shapes without one answer `false`.
    pub fn has_editorial(&self, score: &Score, key: &str, expected: &Value) -> bool {
        match self {
            TheoryResult::Interval(r) => r.has_editorial(score, key, expected),
            TheoryResult::Quartet(r) => r.has_editorial(score, key, expected),
            _ => false,
        }
    }

    /// `has_editorial` against the configured expected value.
    pub fn has_editorial_default(
        &self,
        score: &Score,
        key: &str,
        config: &AnnotationConfig,
    ) -> bool {
        self.has_editorial(score, key, &config.default_editorial_value)
    }

    /// Every note handle the finding refers to.
    pub fn notes(&self) -> Vec<NoteId> {
        match self {
            TheoryResult::Interval(r) => r.notes().to_vec(),
            TheoryResult::Quartet(r) => r.quartet().notes().to_vec(),
            TheoryResult::Note(r) => vec![r.note()],
            TheoryResult::Verticality(r) => r.verticality().note_list(),
            TheoryResult::Segment(r) => r.segment().notes().to_vec(),
            TheoryResult::NTuplet(r) => r.notes(),
        }
    }
}

impl Annotated for TheoryResult {
    fn info(&self) -> &ResultInfo {
        match self {
            TheoryResult::Interval(r) => r.info(),
            TheoryResult::Quartet(r) => r.info(),
            TheoryResult::Note(r) => r.info(),
            TheoryResult::Verticality(r) => r.info(),
            TheoryResult::Segment(r) => r.info(),
            TheoryResult::NTuplet(r) => r.info(),
        }
    }

    fn info_mut(&mut self) -> &mut ResultInfo {
        match self {
            TheoryResult::Interval(r) => r.info_mut(),
            TheoryResult::Quartet(r) => r.info_mut(),
            TheoryResult::Note(r) => r.info_mut(),
            TheoryResult::Verticality(r) => r.info_mut(),
            TheoryResult::Segment(r) => r.info_mut(),
            TheoryResult::NTuplet(r) => r.info_mut(),
        }
    }
}

impl From<IntervalResult> for TheoryResult {
    fn from(r: IntervalResult) -> Self {
        TheoryResult::Interval(r)
    }
}

impl From<QuartetResult> for TheoryResult {
    fn from(r: QuartetResult) -> Self {
        TheoryResult::Quartet(r)
    }
}

impl From<NoteResult> for TheoryResult {
    fn from(r: NoteResult) -> Self {
        TheoryResult::Note(r)
    }
}

impl From<VerticalityResult> for TheoryResult {
    fn from(r: VerticalityResult) -> Self {
        TheoryResult::Verticality(r)
    }
}

impl From<SegmentResult> for TheoryResult {
    fn from(r: SegmentResult) -> Self {
        TheoryResult::Segment(r)
    }
}

impl From<NTupletResult> for TheoryResult {
    fn from(r: NTupletResult) -> Self {
        TheoryResult::NTuplet(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use theory_score::{Interval, ThreeNoteLinearSegment, Verticality, VerticalityNTuplet};

    #[test]
    fn test_kind_names_match_serde() {
        for kind in ResultKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_description_through_enum() {
        let mut score = Score::new();
        let n = score.add_note(0, 60, 0.0);
        let mut result: TheoryResult = NoteResult::new(n).into();
        result.set_description("Leading tone unresolved", "LT");
        assert_eq!(result.text(), "Leading tone unresolved");
        assert_eq!(result.value(), "LT");
        assert_eq!(result.kind(), ResultKind::Note);
    }

    #[test]
    fn test_color_uses_shape_defaults() {
        let mut score = Score::new();
        let a = score.add_note(0, 72, 0.0);
        let b = score.add_note(0, 74, 1.0);
        let c = score.add_note(0, 76, 2.0);

        let segment = ThreeNoteLinearSegment::new(a, b, c);
        let mut seg: TheoryResult = SegmentResult::new(segment).into();
        seg.color(&mut score, "blue").unwrap();
        assert!(score.note(a).color.is_none());
        assert_eq!(score.note(b).color.as_deref(), Some("blue"));

        let mut intv: TheoryResult = IntervalResult::new(Interval::new(a, c)).into();
        intv.color(&mut score, "red").unwrap();
        assert_eq!(score.note(a).color.as_deref(), Some("red"));
        assert_eq!(score.note(c).color.as_deref(), Some("red"));
        assert_eq!(score.note(b).color.as_deref(), Some("blue"));
        assert_eq!(intv.current_color(), "red");
    }

    #[test]
    fn test_color_default_uses_config() {
        let mut score = Score::new();
        let n = score.add_note(0, 60, 0.0);
        let mut result: TheoryResult = NoteResult::new(n).into();
        let config = AnnotationConfig {
            default_color: "teal".into(),
            ..AnnotationConfig::default()
        };
        result.color_default(&mut score, &config).unwrap();
        assert_eq!(score.note(n).color.as_deref(), Some("teal"));
    }

    #[test]
    fn test_offset_by_shape() {
        let mut score = Score::new();
        let a = score.add_note(0, 72, 0.5);
        let b = score.add_note(1, 60, 1.5);
        let intv: TheoryResult = IntervalResult::new(Interval::new(a, b)).into();
        assert_eq!(intv.offset(&score, Alignment::Right), Some(1.5));
        assert_eq!(intv.offset(&score, Alignment::Left), Some(0.5));

        let note: TheoryResult = NoteResult::new(b).into();
        assert_eq!(note.offset(&score, Alignment::Left), Some(1.5));

        let vert: TheoryResult =
            VerticalityResult::new(Verticality::from_notes(&score, &[a])).into();
        assert_eq!(vert.offset(&score, Alignment::Right), None);
    }

    #[test]
    fn test_has_editorial_by_shape() {
        let mut score = Score::new();
        let a = score.add_note(0, 72, 0.0);
        let b = score.add_note(1, 60, 0.0);
        score.note_mut(a).editorial.set("flag", json!(true));

        let intv: TheoryResult = IntervalResult::new(Interval::new(a, b)).into();
        assert!(intv.has_editorial(&score, "flag", &json!(true)));
        let config = AnnotationConfig::default();
        assert!(intv.has_editorial_default(&score, "flag", &config));

        let note: TheoryResult = NoteResult::new(a).into();
        assert!(!note.has_editorial(&score, "flag", &json!(true)));
    }

    #[test]
    fn test_notes_of_ntuplet() {
        let mut score = Score::new();
        let mut verts = Vec::new();
        for beat in 0..3 {
            let n = score.add_note(0, 60 + beat, f64::from(beat));
            verts.push(Verticality::from_notes(&score, &[n]));
        }
        let ntuplet = VerticalityNTuplet::new(verts).unwrap();
        let result: TheoryResult = NTupletResult::new(ntuplet, Some(0)).into();
        assert_eq!(result.notes().len(), 3);
        assert_eq!(result.kind(), ResultKind::NTuplet);
    }
}
