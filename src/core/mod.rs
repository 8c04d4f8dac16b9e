//! Interaction logic for the landing page, independent of the DOM
//!
//! Each controller on the page keeps its state in one of these types; the
//! `ui` layer only wires browser events to them.

pub mod anchor;
pub mod config;
pub mod content;
pub mod faq;
pub mod reveal;
pub mod tabs;
pub mod waitlist;
#[cfg(test)]
mod tests;

pub use anchor::{AnchorAction, anchor_action};
pub use config::{ConfigError, SiteConfig};
pub use faq::{Accordion, FaqItemId};
pub use reveal::RevealTracker;
pub use tabs::TabGroup;
pub use waitlist::{
    Completion, EmailAddress, SubmissionPhase, WaitlistError, WaitlistSubmission, race_completion,
};
