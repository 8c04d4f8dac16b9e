//! Smooth-scrolling in-page links

use leptos::prelude::*;

use crate::core::{AnchorAction, anchor_action};

/// Link that smooth-scrolls to its `#id` target instead of jumping
///
/// Links that are not in-page behave like a plain `<a>`.
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        let AnchorAction::ScrollTo(target) = anchor_action(href) else {
            return;
        };
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = target {
                scroll_to(id);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(feature = "hydrate")]
fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
