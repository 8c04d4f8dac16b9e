//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <div class="not-found-body">
                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <A href="/" attr:class="cta-button">
                    "Back to Bindrix"
                </A>
            </div>

            <p class="not-found-footer">"© 2026 Bindrix"</p>
        </div>
    }
}
