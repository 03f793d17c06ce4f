mod browser;
mod catalog_context;
mod components;
mod web_app;

pub use browser::{
    reduce_browser, results_summary, sidebar_entries, BrowserAction, BrowserError, BrowserState,
    SidebarEntry,
};
pub use catalog_context::{use_catalog, CatalogContext, CatalogProvider};
pub use components::CatalogBrowser;
pub use web_app::{CatalogEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
