//! FAQ accordion coordinator
//!
//! One coordinator per page owns the "which item is open" state for every
//! FAQ item on that page, so at most one answer is expanded at a time even
//! when the questions are split across several lists.

/// Class marking the expanded FAQ item
pub const EXPANDED_CLASS: &str = "active";

/// Handle of an item registered with an [`Accordion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaqItemId(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    items: usize,
    expanded: Option<FaqItemId>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> FaqItemId {
        let id = FaqItemId(self.items);
        self.items += 1;
        id
    }

    /// Handle a click on the question of `item`
    ///
    /// Collapses everything, then expands `item` unless it was the open one.
    /// Clicks on unregistered items are ignored.
    pub fn toggle(&mut self, item: FaqItemId) {
        if item.0 >= self.items {
            return;
        }
        let was_expanded = self.is_expanded(item);
        self.collapse_all();
        if !was_expanded {
            self.expanded = Some(item);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    pub fn is_expanded(&self, item: FaqItemId) -> bool {
        self.expanded == Some(item)
    }

    pub fn expanded(&self) -> Option<FaqItemId> {
        self.expanded
    }

    pub fn expanded_count(&self) -> usize {
        usize::from(self.expanded.is_some())
    }

    pub fn len(&self) -> usize {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_start_collapsed() {
        let mut accordion = Accordion::new();
        let first = accordion.register();
        let second = accordion.register();

        assert_ne!(first, second);
        assert_eq!(accordion.len(), 2);
        assert_eq!(accordion.expanded_count(), 0);
    }

    #[test]
    fn test_toggle_opens_item() {
        let mut accordion = Accordion::new();
        let item = accordion.register();

        accordion.toggle(item);
        assert!(accordion.is_expanded(item));
        assert_eq!(accordion.expanded(), Some(item));
    }

    #[test]
    fn test_toggle_open_item_closes_it() {
        let mut accordion = Accordion::new();
        let item = accordion.register();

        accordion.toggle(item);
        accordion.toggle(item);
        assert!(!accordion.is_expanded(item));
        assert_eq!(accordion.expanded_count(), 0);
    }

    #[test]
    fn test_toggle_other_item_moves_expansion() {
        let mut accordion = Accordion::new();
        let first = accordion.register();
        let second = accordion.register();

        accordion.toggle(first);
        accordion.toggle(second);

        assert!(!accordion.is_expanded(first));
        assert!(accordion.is_expanded(second));
        assert_eq!(accordion.expanded_count(), 1);
    }

    #[test]
    fn test_unregistered_item_is_ignored() {
        let mut accordion = Accordion::new();
        let item = accordion.register();
        accordion.toggle(item);

        let mut other_page = Accordion::new();
        other_page.register();
        let foreign = other_page.register();

        accordion.toggle(foreign);
        assert!(accordion.is_expanded(item));
    }

    #[test]
    fn test_collapse_all() {
        let mut accordion = Accordion::new();
        let item = accordion.register();
        accordion.toggle(item);
        accordion.collapse_all();
        assert_eq!(accordion.expanded(), None);
    }
}
