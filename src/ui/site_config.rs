//! Site configuration context
//!
//! On the server the configuration arrives through the route context; in the
//! browser it is read back from the JSON block the server embedded in the page.

use leptos::prelude::*;

use crate::core::SiteConfig;

/// Provide the site configuration to the component tree
pub fn provide_site_config() -> SiteConfig {
    let config = use_context::<SiteConfig>().unwrap_or_else(load_embedded_config);
    provide_context(config.clone());
    config
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

fn load_embedded_config() -> SiteConfig {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::config::CONFIG_SCRIPT_ID;

        let embedded = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_SCRIPT_ID))
            .and_then(|element| element.text_content());

        if let Some(json) = embedded {
            match SiteConfig::from_json(&json) {
                Ok(config) => return config,
                Err(err) => leptos::logging::warn!("Ignoring embedded site config: {}", err),
            }
        }
    }

    SiteConfig::default()
}
