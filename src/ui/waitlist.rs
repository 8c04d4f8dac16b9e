//! Waitlist signup form
//!
//! The form POSTs to the external form processor with the hidden frame as
//! its target, so the page never navigates. The response cannot be read
//! across origins; the form reports success when the frame loads or when the
//! fallback timer elapses, whichever happens first.

use leptos::html;
use leptos::prelude::*;

use crate::core::WaitlistSubmission;
use crate::core::waitlist::{EMAIL_FIELD, HIDDEN_FRAME_NAME, SUCCESS_MESSAGE};
use crate::ui::site_config::use_site_config;

/// Handle on the page's hidden POST target frame
#[derive(Clone, Copy)]
pub struct HiddenFrameContext {
    frame: NodeRef<html::Iframe>,
}

pub fn provide_hidden_frame() -> HiddenFrameContext {
    let ctx = HiddenFrameContext {
        frame: NodeRef::new(),
    };
    provide_context(ctx);
    ctx
}

pub fn use_hidden_frame() -> HiddenFrameContext {
    use_context::<HiddenFrameContext>()
        .expect("HiddenFrameContext not provided. Call provide_hidden_frame() in the page.")
}

/// Invisible frame that receives the waitlist POSTs
#[component]
pub fn HiddenFrame() -> impl IntoView {
    let ctx = use_hidden_frame();

    view! {
        <iframe
            name=HIDDEN_FRAME_NAME
            id=HIDDEN_FRAME_NAME
            title="Waitlist submission"
            style="display:none;"
            tabindex="-1"
            aria-hidden="true"
            node_ref=ctx.frame
        ></iframe>
    }
}

/// Email signup form
#[component]
pub fn WaitlistForm(
    /// Center the form in its container
    #[prop(optional)]
    centered: bool,
) -> impl IntoView {
    let config = use_site_config();
    let frame = use_hidden_frame();
    let submission = RwSignal::new(WaitlistSubmission::new());
    let form_ref = NodeRef::<html::Form>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let fallback_ms = config.fallback_ms;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email = email_ref
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();

        match submission.try_update(|s| s.begin(&email).map(|_| ())) {
            Some(Ok(())) => {}
            Some(Err(err)) => {
                leptos::logging::warn!("Waitlist submission not started: {}", err);
                return;
            }
            None => return,
        }

        #[cfg(feature = "hydrate")]
        {
            dispatch(form_ref, frame, fallback_ms, submission);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form_ref, frame, fallback_ms);
        }
    };

    let form_class = if centered {
        "waitlist-form centered"
    } else {
        "waitlist-form"
    };

    view! {
        <form
            class=form_class
            action=config.waitlist_endpoint
            method="POST"
            target=HIDDEN_FRAME_NAME
            node_ref=form_ref
            on:submit=on_submit
        >
            <Show
                when=move || submission.with(|s| s.is_succeeded())
                fallback=move || view! {
                    <input
                        type="email"
                        name=EMAIL_FIELD
                        placeholder="Enter your work email"
                        required=true
                        node_ref=email_ref
                    />
                    <button
                        type="submit"
                        class="cta-button"
                        disabled=move || submission.with(|s| s.submit_disabled())
                        style:opacity=move || submission.with(|s| s.submit_opacity())
                    >
                        {move || submission.with(|s| s.submit_label())}
                    </button>
                }
            >
                <div class="waitlist-success" role="status">
                    <i class="fa-solid fa-circle-check" aria-hidden="true"></i>
                    {SUCCESS_MESSAGE}
                </div>
            </Show>
        </form>
    }
}

/// Send the form into the hidden frame and settle the submission
#[cfg(feature = "hydrate")]
fn dispatch(
    form_ref: NodeRef<html::Form>,
    frame: HiddenFrameContext,
    fallback_ms: u32,
    submission: RwSignal<WaitlistSubmission>,
) {
    use gloo_timers::future::TimeoutFuture;

    use crate::core::race_completion;

    // Listener has to be attached before the POST goes out
    let frame_load = FrameLoad::listen(frame.frame.get_untracked());

    match form_ref.get_untracked() {
        Some(form) => {
            if let Err(err) = form.submit() {
                leptos::logging::warn!("Waitlist form submit failed: {:?}", err);
            }
        }
        None => leptos::logging::warn!("Waitlist form is not mounted"),
    }

    wasm_bindgen_futures::spawn_local(async move {
        let by = race_completion(frame_load, TimeoutFuture::new(fallback_ms)).await;
        if submission.try_update(|s| s.complete(by)) == Some(true) {
            leptos::logging::log!("Waitlist submission settled: {:?}", by);
        }
    });
}

#[cfg(feature = "hydrate")]
pub use frame_load::FrameLoad;

#[cfg(feature = "hydrate")]
mod frame_load {
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::HtmlIFrameElement;

    /// Resolves on the next `load` event of a frame
    ///
    /// Never resolves when there is no frame. Dropping it removes the
    /// listener.
    pub struct FrameLoad {
        frame: Option<HtmlIFrameElement>,
        listener: Option<Closure<dyn FnMut(web_sys::Event)>>,
        loaded: oneshot::Receiver<()>,
    }

    impl FrameLoad {
        pub fn listen(frame: Option<HtmlIFrameElement>) -> Self {
            let (tx, loaded) = oneshot::channel();
            let mut tx = Some(tx);

            let listener = frame.as_ref().map(|frame| {
                let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
                    if let Some(tx) = tx.take() {
                        let _ = tx.send(());
                    }
                });
                let _ = frame
                    .add_event_listener_with_callback("load", listener.as_ref().unchecked_ref());
                listener
            });

            Self {
                frame,
                listener,
                loaded,
            }
        }
    }

    impl Future for FrameLoad {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            match Pin::new(&mut self.loaded).poll(cx) {
                Poll::Ready(Ok(())) => Poll::Ready(()),
                // Sender gone without firing: no frame to wait for
                Poll::Ready(Err(oneshot::Canceled)) | Poll::Pending => Poll::Pending,
            }
        }
    }

    impl Drop for FrameLoad {
        fn drop(&mut self) {
            if let (Some(frame), Some(listener)) = (&self.frame, &self.listener) {
                let _ = frame.remove_event_listener_with_callback(
                    "load",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    }
}
