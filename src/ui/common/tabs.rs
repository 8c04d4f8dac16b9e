use leptos::prelude::*;

use crate::core::content::{self, TabPaneContent};

/// Tab group with its buttons and panes
///
/// Renders nothing when the page has no content for `group_id`.
#[component]
pub fn TabSection(
    /// Container id of the group, e.g. `ai-tabs`
    group_id: &'static str,
) -> impl IntoView {
    let Some(content) = content::tab_group(group_id) else {
        return ().into_any();
    };
    let Some(initial) = content.state() else {
        return ().into_any();
    };
    let state = RwSignal::new(initial);

    view! {
        <div class="tabs-container" id=content.id>
            <div class="tabs-nav" role="tablist">
                {content.panes.iter().enumerate().map(|(index, pane)| {
                    let is_active = move || state.with(|s| s.is_button_active(index));

                    view! {
                        <button
                            type="button"
                            class="tab-btn"
                            class:active=is_active
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            aria-controls=pane.id
                            on:click=move |_| state.update(|s| {
                                s.select(index);
                            })
                        >
                            {pane.icon.map(|icon| view! { <i class=icon></i>" " })}
                            {pane.label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="tabs-content">
                {content.panes.iter().map(|pane| {
                    let pane_id = pane.id;
                    let is_active = move || state.with(|s| s.is_pane_active(pane_id));

                    view! {
                        <div
                            class="tab-pane"
                            class:active=is_active
                            id=pane.id
                            role="tabpanel"
                            aria-hidden=move || (!is_active()).to_string()
                        >
                            <TabPaneBody pane=*pane />
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn TabPaneBody(pane: TabPaneContent) -> impl IntoView {
    view! {
        <div class="pane-content">
            <div class="pane-text">
                <h3>{pane.title}</h3>
                <p>{pane.description}</p>
                <ul class="feature-list">
                    {pane.bullets.iter().map(|bullet| view! {
                        <li><i class="fa-solid fa-check"></i>" "{*bullet}</li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
