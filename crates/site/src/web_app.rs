use std::rc::Rc;

use catalog_demos::{catalog, scene_table, CatalogError, StageSceneRenderer};
use catalog_registry::ComponentRegistry;
use catalog_ui::prelude::*;
use component_preview::{PreviewProvider, SceneRenderer, SceneTable};
use leptos::*;
use leptos_meta::*;

use crate::{catalog_context::CatalogProvider, components::CatalogBrowser};

fn load_catalog() -> Result<(ComponentRegistry, SceneTable), CatalogError> {
    Ok((catalog()?, scene_table()?))
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let content = match load_catalog() {
        Ok((registry, scenes)) => view! { <CatalogEntry registry scenes/> }.into_view(),
        Err(err) => {
            logging::error!("catalog failed to load: {err}");
            view! { <CatalogUnavailable reason=err.to_string()/> }.into_view()
        }
    };

    view! {
        <Title text="UIKits Galaxy" />
        <Meta name="description" content="Browse, search, and preview UI components." />

        <main class="site-root">
            <Surface variant=SurfaceVariant::Muted layout_class="site-header" role="banner">
                <Heading role=TextRole::Display>"UIKits Galaxy"</Heading>
                <Text tone=TextTone::Secondary>
                    "Components for every framework, previewed live."
                </Text>
            </Surface>
            {content}
        </main>
    }
}

#[component]
pub fn CatalogEntry(registry: ComponentRegistry, scenes: SceneTable) -> impl IntoView {
    let renderer: Rc<dyn SceneRenderer> = Rc::new(StageSceneRenderer);

    view! {
        <CatalogProvider registry>
            <PreviewProvider scenes renderer>
                <CatalogBrowser />
            </PreviewProvider>
        </CatalogProvider>
    }
}

#[component]
fn CatalogUnavailable(reason: String) -> impl IntoView {
    view! {
        <EmptyState tone=TextTone::Danger role="alert" layout_class="site-error">
            <Heading role=TextRole::Title tone=TextTone::Danger>
                "The catalog could not be loaded"
            </Heading>
            <CodeBlock code=reason />
        </EmptyState>
    }
}
