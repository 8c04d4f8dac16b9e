use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::core::SiteConfig;
use crate::core::config::CONFIG_SCRIPT_ID;
use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::provide_site_config;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let config_json = config.to_script_json().unwrap_or_else(|err| {
        leptos::logging::warn!("Site config not embedded: {}", err);
        "{}".to_string()
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_SCRIPT_ID inner_html=config_json></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_site_config();

    view! {
        <Router>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}
