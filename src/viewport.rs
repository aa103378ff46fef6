//! Document-axis geometry used by the scroll behaviors.
//!
//! Everything here works on plain numbers so the decisions driven by scroll
//! events (is this element inside the viewport? which way did the page
//! move?) can be tested off-browser.

/// A vertical extent on the document axis, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn from_top_and_height(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// Inclusive overlap test: spans that merely touch still count, matching
    /// the reveal rule (an element whose edge sits on the viewport edge is
    /// considered in view).
    pub fn overlaps(&self, other: &Span) -> bool {
        self.bottom >= other.top && self.top <= other.bottom
    }
}

/// Which way the page moved between two scroll samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Classify the move from `previous` to `current`. Equal offsets (e.g. a
    /// horizontal-only scroll event) yield `None`.
    pub fn between(previous: f64, current: f64) -> Option<Self> {
        if current > previous {
            Some(Self::Down)
        } else if current < previous {
            Some(Self::Up)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}
