// Positional selectors for fixed-arity findings.
//
// Analysis code addresses the notes of a finding by 1-based position:
// 1..2 for an interval, 1..4 for a voice-leading quartet laid out as
//
//     [ 1  2
//       3  4 ]
//
// and 1..3 for a linear segment. Each shape gets its own position enum whose
// discriminant is that selector number, and a `Selection<P>` is a set of
// positions of one shape. Selector numbers outside a shape's range are
// dropped when a selection is built from raw integers; they are never an
// error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A position within a fixed-arity finding.
pub trait Position: Copy + Eq + fmt::Debug + 'static {
    /// Every position of the shape, in selector order.
    const ALL: &'static [Self];

    /// The 1-based selector number for this position.
    fn selector(self) -> u8;

    /// Map a selector number to a position. `None` if out of range.
    fn from_selector(selector: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.selector() == selector)
    }
}

/// Endpoints of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairPosition {
    Start = 1,
    End = 2,
}

impl PairPosition {
    pub const fn bit(self) -> u8 {
        1 << (self as u8 - 1)
    }
}

impl Position for PairPosition {
    const ALL: &'static [Self] = &[PairPosition::Start, PairPosition::End];

    fn selector(self) -> u8 {
        self as u8
    }
}

/// Cells of a voice-leading quartet, row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuartetPosition {
    V1N1 = 1,
    V1N2 = 2,
    V2N1 = 3,
    V2N2 = 4,
}

impl QuartetPosition {
    pub const fn bit(self) -> u8 {
        1 << (self as u8 - 1)
    }
}

impl Position for QuartetPosition {
    const ALL: &'static [Self] = &[
        QuartetPosition::V1N1,
        QuartetPosition::V1N2,
        QuartetPosition::V2N1,
        QuartetPosition::V2N2,
    ];

    fn selector(self) -> u8 {
        self as u8
    }
}

/// Notes of a three-note linear segment, in time order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentPosition {
    First = 1,
    Middle = 2,
    Last = 3,
}

impl SegmentPosition {
    pub const fn bit(self) -> u8 {
        1 << (self as u8 - 1)
    }
}

impl Position for SegmentPosition {
    const ALL: &'static [Self] = &[
        SegmentPosition::First,
        SegmentPosition::Middle,
        SegmentPosition::Last,
    ];

    fn selector(self) -> u8 {
        self as u8
    }
}

/// A set of positions within one finding shape.
///
/// Stored as a bitmask indexed by `selector - 1`. `ALL` sets every bit, so it
/// covers every position of any shape.
pub struct Selection<P> {
    mask: u8,
    _shape: PhantomData<P>,
}

impl<P> Selection<P> {
    pub const ALL: Self = Selection::from_bits(u8::MAX);
    pub const NONE: Self = Selection::from_bits(0);

    /// Build from raw bits, typically `Position::bit()` values or'ed together.
    pub const fn from_bits(mask: u8) -> Self {
        Selection {
            mask,
            _shape: PhantomData,
        }
    }
}

impl<P: Position> Selection<P> {
    pub fn only(position: P) -> Self {
        Self::NONE.with(position)
    }

    pub fn of(positions: &[P]) -> Self {
        positions.iter().fold(Self::NONE, |sel, &p| sel.with(p))
    }

    /// Build from 1-based selector numbers. Numbers outside the shape's
    /// range are ignored.
    pub fn from_selectors(selectors: &[u8]) -> Self {
        selectors
            .iter()
            .filter_map(|&s| P::from_selector(s))
            .fold(Self::NONE, |sel, p| sel.with(p))
    }

    pub fn with(self, position: P) -> Self {
        Self::from_bits(self.mask | (1 << (position.selector() - 1)))
    }

    pub fn contains(&self, position: P) -> bool {
        self.mask & (1 << (position.selector() - 1)) != 0
    }

    /// Selected positions in selector order.
    pub fn iter(&self) -> impl Iterator<Item = P> + '_ {
        P::ALL.iter().copied().filter(|&p| self.contains(p))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

// Manual impls: derives would demand the same bounds on the marker type.
impl<P> Clone for Selection<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Selection<P> {}

impl<P: Position> PartialEq for Selection<P> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<P: Position> Eq for Selection<P> {}

impl<P: Position> fmt::Debug for Selection<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
