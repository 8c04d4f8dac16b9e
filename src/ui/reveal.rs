//! Scroll-triggered fade-in for page sections
//!
//! Every `section` and `header` on the page gets the fade class and is watched
//! by one `IntersectionObserver`. A section that scrolls into view gets the
//! visible class and is no longer watched.

use leptos::prelude::*;

/// Attribute holding a section's index in the reveal tracker
#[cfg(feature = "hydrate")]
const INDEX_ATTR: &str = "data-reveal-index";

/// Start revealing page sections as they scroll into view
///
/// Call once from the page component, after the sections are part of its
/// view. The observer is disconnected when the page is torn down.
pub fn use_scroll_reveal() {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{
            Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
        };

        use crate::core::RevealTracker;
        use crate::core::reveal::{FADE_CLASS, REVEAL_SELECTOR, REVEAL_THRESHOLD, VISIBLE_CLASS};

        type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

        let handle = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

        Effect::new(move |_| {
            if handle.with_value(Option::is_some) {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
                return;
            };

            let tracker = Rc::new(RefCell::new(RevealTracker::new()));

            let callback_tracker = Rc::clone(&tracker);
            let callback = ObserverCallback::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let mut tracker = callback_tracker.borrow_mut();

                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let target = entry.target();
                        let Some(index) = target
                            .get_attribute(INDEX_ATTR)
                            .and_then(|value| value.parse::<usize>().ok())
                        else {
                            continue;
                        };

                        if tracker.observe(index, entry.is_intersecting()) {
                            let _ = target.class_list().add_1(VISIBLE_CLASS);
                            observer.unobserve(&target);
                        }
                    }

                    if tracker.is_complete() {
                        observer.disconnect();
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

            let observer = match IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer,
                Err(err) => {
                    leptos::logging::warn!("Scroll reveal disabled: {:?}", err);
                    return;
                }
            };

            for node in (0..nodes.length()).filter_map(|i| nodes.item(i)) {
                let Ok(section) = node.dyn_into::<Element>() else {
                    continue;
                };
                let index = tracker.borrow_mut().register();
                let _ = section.set_attribute(INDEX_ATTR, &index.to_string());
                let _ = section.class_list().add_1(FADE_CLASS);
                observer.observe(&section);
            }

            handle.set_value(Some((observer, callback)));
        });

        on_cleanup(move || {
            handle.try_update_value(|observed| {
                if let Some((observer, _callback)) = observed.take() {
                    observer.disconnect();
                }
            });
        });
    }
}
