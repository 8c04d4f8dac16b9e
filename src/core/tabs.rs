//! Tab group state
//!
//! A tab group pairs buttons with content panes through a shared target id.
//! Exactly one button is active; the pane matching its target is active when
//! such a pane exists, otherwise no pane is.

/// Class marking the active button and pane of a group
pub const ACTIVE_CLASS: &str = "active";

/// Selection state of one tab group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    id: String,
    /// Target pane id carried by each button, in display order
    targets: Vec<String>,
    panes: Vec<String>,
    active_button: usize,
    active_pane: Option<usize>,
}

impl TabGroup {
    /// Create a group with the first button active
    ///
    /// Returns `None` for a group without buttons.
    pub fn new<B, P>(id: impl Into<String>, targets: B, panes: P) -> Option<Self>
    where
        B: IntoIterator,
        B::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let targets: Vec<String> = targets.into_iter().map(Into::into).collect();
        if targets.is_empty() {
            return None;
        }

        let mut group = Self {
            id: id.into(),
            targets,
            panes: panes.into_iter().map(Into::into).collect(),
            active_button: 0,
            active_pane: None,
        };
        group.select(0);
        Some(group)
    }

    /// Start with the button targeting `target` active instead of the first one
    pub fn with_initial(mut self, target: &str) -> Self {
        if let Some(index) = self.targets.iter().position(|t| t == target) {
            self.select(index);
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn panes(&self) -> &[String] {
        &self.panes
    }

    /// Activate button `index` and the pane it targets
    ///
    /// Returns the id of the now active pane. An out-of-range index leaves the
    /// group unchanged.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let Some(target) = self.targets.get(index) else {
            return self.active_pane();
        };

        self.active_pane = self.panes.iter().position(|pane| pane == target);
        self.active_button = index;
        self.active_pane()
    }

    pub fn active_button(&self) -> usize {
        self.active_button
    }

    pub fn active_pane(&self) -> Option<&str> {
        self.active_pane.map(|index| self.panes[index].as_str())
    }

    pub fn is_button_active(&self, index: usize) -> bool {
        self.active_button == index
    }

    pub fn is_pane_active(&self, pane_id: &str) -> bool {
        self.active_pane() == Some(pane_id)
    }
}
