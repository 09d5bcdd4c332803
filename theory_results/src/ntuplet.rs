// Results whose finding is a verticality n-tuplet.
//
// An n-tuplet is two or three consecutive verticalities. For triplets the
// score model also provides a linear segment per part, and this result wraps
// each of those in a `SegmentResult` so coloring a part delegates to the
// segment's positional coloring. A result may remember the part that made
// the finding interesting (`identified_part`), e.g. the voice holding a
// doubled leading tone, so later consumers can color it without knowing the
// analysis.
//
// Coloring is only defined for triplets. Duplets have no segments, and
// coloring one is a logged no-op on the score.
//
// Editorial marks are placed by a `MarkPlan`: verticality index -> parts to
// mark within that verticality.

use crate::config::AnnotationConfig;
use crate::error::Result;
use crate::result::{Annotated, ResultInfo};
use crate::segment::SegmentResult;
use crate::selection::{SegmentPosition, Selection};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use theory_score::{ElementFilter, NoteId, Score, ScoreError, VerticalityNTuplet};
use tracing::{debug, trace};

/// Which notes of a triplet `NTupletResult::color` highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NTupletTarget {
    /// The middle note of the identified part's segment. Nothing happens if
    /// the result has no identified part.
    #[default]
    Identified,
    /// The selected positions of one part's segment.
    Part {
        part: usize,
        selection: Selection<SegmentPosition>,
    },
}

impl NTupletTarget {
    /// All three notes of `part`'s segment.
    pub fn whole_part(part: usize) -> Self {
        NTupletTarget::Part {
            part,
            selection: Selection::ALL,
        }
    }
}

/// Verticality index -> part numbers whose note in that verticality should
/// receive an editorial mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkPlan(BTreeMap<usize, Vec<usize>>);

impl MarkPlan {
    pub fn new() -> Self {
        MarkPlan(BTreeMap::new())
    }

    /// Add `parts` to the parts marked in verticality `index`.
    pub fn with(mut self, index: usize, parts: &[usize]) -> Self {
        self.0.entry(index).or_default().extend_from_slice(parts);
        self
    }

    /// (verticality index, part) pairs in plan order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0
            .iter()
            .flat_map(|(&i, parts)| parts.iter().map(move |&p| (i, p)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

impl Default for MarkPlan {
    /// The first part of the third verticality.
    fn default() -> Self {
        MarkPlan::new().with(2, &[0])
    }
}

/// An n-tuplet finding and its annotation state.
///
/// `segments` mirrors `ntuplet.segments()` part for part, but holds
/// `SegmentResult`s so each part's coloring keeps its own `current_color`.
/// The wrapped n-tuplet stays the source for note lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct NTupletResult {
    info: ResultInfo,
    ntuplet: VerticalityNTuplet,
    segments: BTreeMap<usize, SegmentResult>,
    identified_part: Option<usize>,
}

impl NTupletResult {
    pub fn new(ntuplet: VerticalityNTuplet, identified_part: Option<usize>) -> Self {
        let segments = ntuplet
            .segments()
            .iter()
            .map(|(&part, &segment)| (part, SegmentResult::new(segment)))
            .collect();
        NTupletResult {
            info: ResultInfo::default(),
            ntuplet,
            segments,
            identified_part,
        }
    }

    pub fn ntuplet(&self) -> &VerticalityNTuplet {
        &self.ntuplet
    }

    pub fn identified_part(&self) -> Option<usize> {
        self.identified_part
    }

    pub fn set_identified_part(&mut self, part: Option<usize>) {
        self.identified_part = part;
    }

    /// Segment results keyed by part. Empty for duplets.
    pub fn segments(&self) -> &BTreeMap<usize, SegmentResult> {
        &self.segments
    }

    /// Color part of a triplet. The result's color is always recorded; on a
    /// duplet, or with `Identified` and no identified part, no note changes.
    /// Naming a part with no segment is an error.
    pub fn color(&mut self, score: &mut Score, color: &str, target: NTupletTarget) -> Result<()> {
        self.info.color(color);

        let (part, selection) = match target {
            NTupletTarget::Part { part, selection } => (part, selection),
            NTupletTarget::Identified => match self.identified_part {
                Some(part) => (part, Selection::only(SegmentPosition::Middle)),
                None => {
                    debug!(color, "n-tuplet has no identified part; nothing to color");
                    return Ok(());
                }
            },
        };

        let arity = self.ntuplet.ntuplet_num();
        if arity != 3 {
            // TODO: decide which notes a duplet finding should highlight.
            debug!(color, arity, part, "coloring is only defined for triplets; skipped");
            return Ok(());
        }

        let segment = self
            .segments
            .get_mut(&part)
            .ok_or(ScoreError::SegmentNotFound { part })?;
        trace!(color, part, ?selection, "coloring n-tuplet segment");
        segment.color(score, color, selection);
        Ok(())
    }

    /// Store `value` under `key` on the notes named by `plan`.
    ///
    /// Every (verticality, part) pair is resolved before anything is marked,
    /// so a bad index or part leaves the score unchanged.
    pub fn mark_editorial(
        &self,
        score: &mut Score,
        key: &str,
        value: &Value,
        plan: &MarkPlan,
    ) -> Result<()> {
        let targets = plan
            .iter()
            .map(|(index, part)| self.plan_note(index, part))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for id in targets {
            trace!(key, %value, note = id.index(), "marking n-tuplet note");
            score.note_mut(id).editorial.set(key, value.clone());
        }
        Ok(())
    }

    /// `mark_editorial` with the configured default plan.
    pub fn mark_editorial_default(
        &self,
        score: &mut Score,
        key: &str,
        value: &Value,
        config: &AnnotationConfig,
    ) -> Result<()> {
        self.mark_editorial(score, key, value, &config.default_mark_plan)
    }

    /// The note of `part` in verticality `index`.
    fn plan_note(&self, index: usize, part: usize) -> std::result::Result<NoteId, ScoreError> {
        self.ntuplet
            .verticality(index)?
            .objects_by_part(part, ElementFilter::Notes)?
            .into_iter()
            .find_map(|e| e.note())
            .ok_or(ScoreError::PartNotFound { part })
    }

    /// Every note in every verticality, verticality by verticality.
    pub fn notes(&self) -> Vec<NoteId> {
        self.ntuplet
            .verticalities()
            .iter()
            .flat_map(|v| v.note_list())
            .collect()
    }
}

impl Annotated for NTupletResult {
    fn info(&self) -> &ResultInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ResultInfo {
        &mut self.info
    }
}
