pub mod anchor;
pub mod common;
pub mod faq;
pub mod pages;
pub mod reveal;
pub mod site_config;
pub mod waitlist;

pub use anchor::AnchorLink;
pub use common::TabSection;
pub use faq::{FaqItem, FaqList, provide_accordion_context};
pub use reveal::use_scroll_reveal;
pub use site_config::{provide_site_config, use_site_config};
pub use waitlist::{HiddenFrame, WaitlistForm, provide_hidden_frame};
