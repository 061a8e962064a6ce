use std::sync::Arc;

use dioxus::prelude::*;
use solestride_core::Catalog;

use crate::context::{get_catalog_path, SharedCatalog};
use crate::pages::{Listing, ShoeDetail};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Storefront listing with the shoe grid
/// - `/shoe/:slug` - Detail page for a single shoe
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Listing {},
    #[route("/shoe/:slug")]
    ShoeDetail { slug: String },
}

/// Root application component.
///
/// Provides global styles, the shared catalog, and routing.
#[component]
pub fn App() -> Element {
    let mut catalog: Signal<SharedCatalog> = use_signal(|| None);

    // Provide catalog context to all child components
    use_context_provider(|| catalog);

    // Load the catalog on mount: the file from --catalog if given,
    // otherwise the embedded demo inventory
    use_effect(move || {
        spawn(async move {
            let loaded = match get_catalog_path() {
                Some(path) => {
                    match tokio::fs::read_to_string(&path).await {
                        Ok(raw) => Catalog::from_json(&raw),
                        Err(e) => {
                            tracing::error!("Failed to read catalog {:?}: {}", path, e);
                            return;
                        }
                    }
                }
                None => Catalog::builtin(),
            };

            match loaded {
                Ok(cat) => {
                    tracing::info!("Catalog ready with {} shoes", cat.len());
                    catalog.set(Some(Arc::new(cat)));
                }
                Err(e) => {
                    tracing::error!("Failed to load catalog: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
