//! FAQ accordion components
//!
//! All `FaqItem`s under one `provide_accordion_context()` call share a single
//! coordinator, so opening any answer closes every other one on the page.

use leptos::prelude::*;

use crate::core::content::FaqEntry;
use crate::core::faq::EXPANDED_CLASS;
use crate::core::{Accordion, FaqItemId};

/// Page-wide accordion state
#[derive(Clone, Copy)]
pub struct AccordionContext {
    state: RwSignal<Accordion>,
}

impl AccordionContext {
    /// Register an item; `None` once the page has been torn down
    pub fn register(&self) -> Option<FaqItemId> {
        self.state.try_update_untracked(Accordion::register)
    }

    pub fn toggle(&self, item: FaqItemId) {
        self.state.update(|accordion| accordion.toggle(item));
    }

    pub fn is_expanded(&self, item: FaqItemId) -> bool {
        self.state.with(|accordion| accordion.is_expanded(item))
    }
}

/// Provide the accordion coordinator for the current page
pub fn provide_accordion_context() -> AccordionContext {
    let ctx = AccordionContext {
        state: RwSignal::new(Accordion::new()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_accordion_context() -> AccordionContext {
    use_context::<AccordionContext>()
        .expect("AccordionContext not provided. Call provide_accordion_context() in the page.")
}

/// List of FAQ entries
#[component]
pub fn FaqList(entries: &'static [FaqEntry]) -> impl IntoView {
    view! {
        <div class="faq-list">
            {entries.iter().map(|entry| view! {
                <FaqItem question=entry.question answer=entry.answer />
            }).collect_view()}
        </div>
    }
}

/// FAQ accordion item
#[component]
pub fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let accordion = use_accordion_context();
    let item = accordion.register();
    let is_open = move || item.is_some_and(|item| accordion.is_expanded(item));

    view! {
        <div class="faq-item" class=(EXPANDED_CLASS, is_open)>
            <button
                type="button"
                class="faq-question"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| {
                    if let Some(item) = item {
                        accordion.toggle(item);
                    }
                }
            >
                <span>{question}</span>
                <i class="fa-solid fa-chevron-down" aria-hidden="true"></i>
            </button>
            <div class="faq-answer">
                <p>{answer}</p>
            </div>
        </div>
    }
}
