//! Catalog provider and context wiring for the browser UI.

use catalog_registry::ComponentRegistry;
use leptos::*;

use crate::browser::{reduce_browser, BrowserAction, BrowserState};

#[derive(Clone, Copy)]
/// Leptos context for reading the registry and browser state and dispatching [`BrowserAction`]
/// values.
pub struct CatalogContext {
    /// The assembled, read-only registry.
    pub registry: StoredValue<ComponentRegistry>,
    /// Reactive browser state signal.
    pub state: RwSignal<BrowserState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<BrowserAction>,
}

impl CatalogContext {
    /// Dispatches a reducer action through the context callback.
    pub fn dispatch_action(&self, action: BrowserAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`CatalogContext`] to descendant components.
pub fn CatalogProvider(
    /// Registry assembled by the entry layer.
    registry: ComponentRegistry,
    children: Children,
) -> impl IntoView {
    let registry = store_value(registry);
    let state = create_rw_signal(BrowserState::default());

    let dispatch = Callback::new(move |action: BrowserAction| {
        let mut next = state.get_untracked();
        let outcome = registry.with_value(|registry| reduce_browser(&mut next, registry, action));
        match outcome {
            Ok(()) => {
                if next != state.get_untracked() {
                    state.set(next);
                }
            }
            Err(err) => logging::warn!("catalog browser error: {err}"),
        }
    });

    provide_context(CatalogContext {
        registry,
        state,
        dispatch,
    });

    children().into_view()
}

/// Returns the current [`CatalogContext`].
///
/// # Panics
///
/// Panics if called outside [`CatalogProvider`].
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext not provided")
}
