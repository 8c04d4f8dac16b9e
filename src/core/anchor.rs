//! In-page anchor links

/// What a click on a link should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Not an in-page link; let the browser navigate
    Navigate,
    /// Suppress navigation and smooth-scroll to the element with this id, if any
    ScrollTo(Option<&'a str>),
}

/// Classify `href` the way the page's link handler does
pub fn anchor_action(href: &str) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        Some("") => AnchorAction::ScrollTo(None),
        Some(id) => AnchorAction::ScrollTo(Some(id)),
        None => AnchorAction::Navigate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_link_targets_id() {
        assert_eq!(anchor_action("#faq"), AnchorAction::ScrollTo(Some("faq")));
        assert_eq!(
            anchor_action("#waitlist-hero"),
            AnchorAction::ScrollTo(Some("waitlist-hero"))
        );
    }

    #[test]
    fn test_bare_hash_suppresses_navigation_only() {
        assert_eq!(anchor_action("#"), AnchorAction::ScrollTo(None));
    }

    #[test]
    fn test_other_links_navigate() {
        assert_eq!(anchor_action("/sign-in"), AnchorAction::Navigate);
        assert_eq!(anchor_action("https://example.com/#faq"), AnchorAction::Navigate);
        assert_eq!(anchor_action(""), AnchorAction::Navigate);
    }
}
