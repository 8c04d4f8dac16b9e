//! Scroll reveal state
//!
//! Sections fade in the first time they scroll into view and stay visible
//! afterwards.

/// Fraction of a section that must be visible before the observer reports it
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Selector for the sections that take part in the reveal animation
pub const REVEAL_SELECTOR: &str = "section, header";

/// Class added to every observed section
pub const FADE_CLASS: &str = "fade-section";

/// Class added once a section has been revealed
pub const VISIBLE_CLASS: &str = "visible";

/// Reveal state of every observed section, indexed in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section and return its index
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Record an intersection report for `section`
    ///
    /// Returns `true` only when this report reveals the section. Reports for
    /// sections that left the viewport, or that were already revealed, change
    /// nothing.
    pub fn observe(&mut self, section: usize, is_intersecting: bool) -> bool {
        match self.revealed.get_mut(section) {
            Some(revealed) if is_intersecting && !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, section: usize) -> bool {
        self.revealed.get(section).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Whether every section has been revealed and observing can stop
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}
