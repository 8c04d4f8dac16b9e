//! Static landing page copy
//!
//! Tab groups and FAQ entries are plain data so the page components can pair
//! buttons with panes by id without looking anything up in the document.

use crate::core::tabs::TabGroup;

/// Ids of the tab groups in page order
pub const TAB_GROUP_IDS: [&str; 3] = ["ai-tabs", "suite-tabs", "solution-tabs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPaneContent {
    /// Shared id of the button's target and the pane
    pub id: &'static str,
    pub label: &'static str,
    /// Font Awesome class for the button icon
    pub icon: Option<&'static str>,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabGroupContent {
    pub id: &'static str,
    pub panes: &'static [TabPaneContent],
}

impl TabGroupContent {
    /// Selection state for this group with the first pane active
    pub fn state(&self) -> Option<TabGroup> {
        let ids = self.panes.iter().map(|pane| pane.id);
        TabGroup::new(self.id, ids.clone(), ids)
    }
}

const AI_TABS: &[TabPaneContent] = &[
    TabPaneContent {
        id: "smart-replies",
        label: "Smart Auto Replies",
        icon: Some("fa-solid fa-robot"),
        title: "Human-like AI that responds instantly",
        description: "Bindrix's AI agent understands customer intent and responds naturally, providing fast, accurate support and engagement.",
        bullets: &["Instant replies", "Natural conversations", "24/7 availability"],
    },
    TabPaneContent {
        id: "inventory-ai",
        label: "Inventory-Aware AI",
        icon: Some("fa-solid fa-box"),
        title: "AI that knows your products and stock",
        description: "Connected to Shopify and WooCommerce, Bindrix AI can answer product availability, order-related questions, and more.",
        bullets: &["Real-time inventory responses", "Faster conversions", "Less manual work"],
    },
    TabPaneContent {
        id: "ai-labeling",
        label: "AI Labeling",
        icon: Some("fa-solid fa-tags"),
        title: "Automatically prioritize every conversation",
        description: "Bindrix analyzes messages and comments to intelligently categorize them, so you can focus on what matters most.",
        bullets: &["Smart prioritization", "Intent detection", "Custom labels"],
    },
    TabPaneContent {
        id: "rule-automation",
        label: "Rule-Based Automation",
        icon: Some("fa-solid fa-gears"),
        title: "Automate actions based on behavior",
        description: "Set intelligent rules for comments and messages.",
        bullets: &["Auto reply on keywords", "Assign to teams", "Trigger workflows"],
    },
];

const SUITE_TABS: &[TabPaneContent] = &[
    TabPaneContent {
        id: "unified-inbox",
        label: "Unified Inbox",
        icon: None,
        title: "All messages and comments in one place",
        description: "Respond to everything from a single smart dashboard and never miss a conversation.",
        bullets: &["Messages across platforms", "Unified comment management", "Faster engagement"],
    },
    TabPaneContent {
        id: "scheduling",
        label: "Scheduling",
        icon: None,
        title: "Plan and schedule content effortlessly",
        description: "Create, schedule, and publish posts across platforms with ease.",
        bullets: &["Visual calendar", "Multi-platform posting", "Consistent content flow"],
    },
    TabPaneContent {
        id: "team-flow",
        label: "Team Workflow",
        icon: None,
        title: "Collaborate smoothly",
        description: "Assign tasks, review content, and approve posts before publishing.",
        bullets: &["Task assignment", "Approval workflows", "Campaign tracking"],
    },
    TabPaneContent {
        id: "analytics",
        label: "Analytics",
        icon: None,
        title: "Track performance clearly",
        description: "View unified and platform-specific analytics in one dashboard.",
        bullets: &["Engagement metrics", "Growth trends", "Response time insights"],
    },
    TabPaneContent {
        id: "listening",
        label: "Social Listening",
        icon: None,
        title: "Stay on top of brand conversations",
        description: "Monitor mentions, keywords, and trends across platforms.",
        bullets: &["Brand monitoring", "Sentiment tracking", "Real-time alerts"],
    },
];

const SOLUTION_TABS: &[TabPaneContent] = &[
    TabPaneContent {
        id: "sol-ecommerce",
        label: "E-commerce",
        icon: None,
        title: "E-commerce Brands",
        description: "Seamlessly sync with Shopify & WooCommerce. Track every conversion from social to checkout.",
        bullets: &[
            "Auto-reply to product questions",
            "Sync inventory status in chats",
            "Track revenue from social",
        ],
    },
    TabPaneContent {
        id: "sol-marketing",
        label: "Marketing Teams",
        icon: None,
        title: "Marketing Teams",
        description: "Collaborate on a shared content calendar. Assign tasks, set approval chains, and report on results.",
        bullets: &["Unified Team Inbox", "Approval Workflows", "Automated Reporting"],
    },
    TabPaneContent {
        id: "sol-creators",
        label: "Creators",
        icon: None,
        title: "Creators",
        description: "Spend less time managing and more time creating. Engage your community with AI that sounds like you.",
        bullets: &["Personal Brand AI Voice", "Smart DMs & Replies", "Growth Analytics"],
    },
    TabPaneContent {
        id: "sol-agencies",
        label: "Agencies",
        icon: None,
        title: "Agencies",
        description: "Manage 100+ clients from a single dashboard. Switch between brand workspaces in one click.",
        bullets: &["Multi-Client Dashboard", "White-label Reports", "Secure Client Access"],
    },
];

const TAB_GROUPS: &[TabGroupContent] = &[
    TabGroupContent { id: "ai-tabs", panes: AI_TABS },
    TabGroupContent { id: "suite-tabs", panes: SUITE_TABS },
    TabGroupContent { id: "solution-tabs", panes: SOLUTION_TABS },
];

/// Content of the tab group with container id `id`, if the page has one
pub fn tab_group(id: &str) -> Option<&'static TabGroupContent> {
    TAB_GROUPS.iter().find(|group| group.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What do I get by joining the waitlist?",
        answer: "Early users who join the waitlist receive 1 Month Free + a Lifetime 'Early Bird' Discount, along with priority onboarding and early access to upcoming AI features.",
    },
    FaqEntry {
        question: "Which platforms do you support?",
        answer: "At launch, we will support Instagram, Facebook, and Shopify. WhatsApp, X (Twitter), and LinkedIn integrations are coming soon.",
    },
    FaqEntry {
        question: "How long does it take to set up Bindrix?",
        answer: "Bindrix is designed for a 10-minute setup. Connect your social accounts and start managing conversations with no technical skills required.",
    },
    FaqEntry {
        question: "Does the AI really understand my business and inventory?",
        answer: "Yes! By connecting your Shopify or WooCommerce store or uploading your business data, Bindrix AI stays updated with real-time product details to provide accurate responses.",
    },
    FaqEntry {
        question: "Can I control or approve AI replies?",
        answer: "Absolutely. You can enable full auto-replies, approval mode, or use AI only as smart suggestions. You always stay in control.",
    },
    FaqEntry {
        question: "Can I collaborate with my team?",
        answer: "Yes. Assign conversations, create approval workflows, and leave internal notes so your entire team can work together seamlessly.",
    },
    FaqEntry {
        question: "Is my data secure?",
        answer: "Yes. We use bank-level security and strict data privacy standards to protect both your business and customer information.",
    },
    FaqEntry {
        question: "What happens after the free trial ends?",
        answer: "You can choose a plan that fits your business size. We offer affordable pricing with no long-term commitments, and you can cancel anytime.",
    },
    FaqEntry {
        question: "Is Bindrix suitable for small businesses and agencies?",
        answer: "Yes! Bindrix is designed to scale from solo founders to growing teams and high-volume agencies.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub name: &'static str,
    pub class: &'static str,
    pub icon: &'static str,
}

pub const PLATFORMS: &[Platform] = &[
    Platform { name: "Instagram", class: "instagram", icon: "fa-brands fa-instagram" },
    Platform { name: "Facebook", class: "facebook", icon: "fa-brands fa-facebook" },
    Platform { name: "WhatsApp", class: "whatsapp", icon: "fa-brands fa-whatsapp" },
    Platform { name: "X (Twitter)", class: "twitter", icon: "fa-brands fa-x-twitter" },
    Platform { name: "LinkedIn", class: "linkedin", icon: "fa-brands fa-linkedin" },
    Platform { name: "Shopify", class: "shopify", icon: "fa-brands fa-shopify" },
    Platform { name: "WooCommerce", class: "woocommerce", icon: "fa-solid fa-cart-shopping" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCard {
    pub icon: &'static str,
    pub highlight: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const RESULTS: &[ResultCard] = &[
    ResultCard {
        icon: "fa-solid fa-bolt",
        highlight: "Up to 10x Faster",
        title: "Don't keep them waiting",
        body: "Stop losing customers to slow replies. Bindrix AI drafts instant responses, cutting your response time from hours to minutes.",
    },
    ResultCard {
        icon: "fa-solid fa-bag-shopping",
        highlight: "Accelerated Sales",
        title: "Turn comments into cash",
        body: "Missed comments mean missed sales. Bindrix auto-detects purchase intent and sends customers a direct checkout link.",
    },
    ResultCard {
        icon: "fa-solid fa-inbox",
        highlight: "Inbox Zero",
        title: "Stop drowning in DMs",
        body: "A unified inbox for every channel. Filter out the noise, auto-assign tasks, and clear your queue in record time.",
    },
    ResultCard {
        icon: "fa-solid fa-chart-line",
        highlight: "Up to 2x Growth",
        title: "Ride the algorithm",
        body: "Consistency is key. Schedule posts across all platforms in one click and watch your follower count climb.",
    },
];

/// (value, label) pairs for the before/after comparison
pub const OLD_WAY_METRICS: &[(&str, &str)] =
    &[("37", "Missed DMs"), ("8", "Open Tabs"), ("40%", "Focus Lost")];

pub const NEW_WAY_METRICS: &[(&str, &str)] =
    &[("Zero", "Lead Leakage"), ("1", "Dashboard"), ("Up to 15x", "Faster Replies")];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_group_id_has_content() {
        for id in TAB_GROUP_IDS {
            let group = tab_group(id).unwrap();
            assert_eq!(group.id, id);
            assert!(!group.panes.is_empty());
        }
        assert!(tab_group("pricing-tabs").is_none());
    }

    #[test]
    fn test_pane_ids_unique_across_page() {
        let mut seen = HashSet::new();
        for group in TAB_GROUPS {
            for pane in group.panes {
                assert!(seen.insert(pane.id), "duplicate pane id {}", pane.id);
            }
        }
    }

    #[test]
    fn test_group_state_starts_on_first_pane() {
        let group = tab_group("suite-tabs").unwrap();
        let state = group.state().unwrap();
        assert_eq!(state.id(), "suite-tabs");
        assert_eq!(state.active_pane(), Some("unified-inbox"));
        assert_eq!(state.targets().len(), group.panes.len());
    }

    #[test]
    fn test_faq_entries_present() {
        assert_eq!(FAQ.len(), 9);
        assert!(FAQ.iter().all(|e| !e.question.is_empty() && !e.answer.is_empty()));
    }
}
