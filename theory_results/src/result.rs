// Shared state and capabilities of every theory result.
//
// Whatever the finding's shape, an analysis pass records a human-readable
// description (`text`), a short classification (`value`, e.g. "P5" or
// "parallel fifths"), and the color most recently used to highlight the
// finding. `ResultInfo` holds those three fields and every result variant
// embeds one. `current_color` is a property of the result, not of its notes:
// after coloring a subset of the notes it still records the last color used.

use serde::{Deserialize, Serialize};

/// Description, classification and last highlight color of a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    pub text: String,
    pub value: String,
    pub current_color: String,
}

impl ResultInfo {
    pub fn set_description(&mut self, text: impl Into<String>, value: impl Into<String>) {
        self.text = text.into();
        self.value = value.into();
    }

    /// Record `color` as the result's color without touching any note.
    pub fn color(&mut self, color: &str) {
        self.current_color = color.to_string();
    }
}

/// Accessors common to every result variant.
pub trait Annotated {
    fn info(&self) -> &ResultInfo;
    fn info_mut(&mut self) -> &mut ResultInfo;

    fn text(&self) -> &str {
        &self.info().text
    }

    fn value(&self) -> &str {
        &self.info().value
    }

    fn current_color(&self) -> &str {
        &self.info().current_color
    }

    fn set_description(&mut self, text: impl Into<String>, value: impl Into<String>) {
        self.info_mut().set_description(text, value);
    }
}

/// Which end of a multi-note finding its offset refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    /// Latest constituent offset: the moment the whole finding has sounded.
    #[default]
    Right,
    /// Earliest constituent offset.
    Left,
}

impl Alignment {
    /// Reduce constituent offsets to the finding's offset.
    pub fn aggregate(self, offsets: impl IntoIterator<Item = f64>) -> f64 {
        match self {
            Alignment::Right => offsets.into_iter().fold(f64::NEG_INFINITY, f64::max),
            Alignment::Left => offsets.into_iter().fold(f64::INFINITY, f64::min),
        }
    }
}
