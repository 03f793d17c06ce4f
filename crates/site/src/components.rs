//! Catalog browser views: category sidebar, search bar, results grid, and detail pane.

use catalog_contract::ComponentDescriptor;
use catalog_registry::ComponentRegistry;
use catalog_ui::prelude::*;
use component_preview::ComponentPreview;
use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::browser::{results_summary, sidebar_entries, BrowserAction, BrowserState};
use crate::catalog_context::use_catalog;

#[component]
/// Three-pane catalog browser.
pub fn CatalogBrowser() -> impl IntoView {
    view! {
        <SplitLayout layout_class="catalog-browser">
            <CategorySidebar/>
            <Stack layout_class="catalog-main">
                <SearchBar/>
                <ResultsGrid/>
            </Stack>
            <DetailPane/>
        </SplitLayout>
    }
}

#[component]
fn CategorySidebar() -> impl IntoView {
    let catalog = use_catalog();
    let entries = catalog.registry.with_value(sidebar_entries);

    view! {
        <Panel layout_class="catalog-sidebar" aria_label="Categories">
            <Heading role=TextRole::Label>"Categories"</Heading>
            <NavList aria_label="Component categories">
                {entries
                    .into_iter()
                    .map(|entry| {
                        let filter = entry.category.clone();
                        let active = entry.category;
                        view! {
                            <NavItem
                                selected=Signal::derive(move || {
                                    catalog.state.with(|state| state.category == active)
                                })
                                trailing=entry.count.to_string()
                                on_click=Callback::new(move |_| {
                                    let action = BrowserAction::SelectCategory(filter.clone());
                                    catalog.dispatch_action(action)
                                })
                            >
                                {entry.label}
                            </NavItem>
                        }
                    })
                    .collect_view()}
            </NavList>
        </Panel>
    }
}

#[component]
fn SearchBar() -> impl IntoView {
    let catalog = use_catalog();
    let query = Signal::derive(move || catalog.state.with(|state| state.query.clone()));
    let total = catalog.registry.with_value(ComponentRegistry::len);
    let summary = move || {
        let state = catalog.state.get();
        let visible = catalog
            .registry
            .with_value(|registry| state.results(registry).len());
        results_summary(&state, visible, total)
    };

    view! {
        <Cluster layout_class="catalog-search" justify=LayoutJustify::Between>
            <TextField
                variant=FieldVariant::Search
                placeholder="Search by name, description, or tag"
                aria_label="Search components"
                input_type="search"
                value=query
                on_input=Callback::new(move |ev| {
                    catalog.dispatch_action(BrowserAction::SetQuery(event_target_value(&ev)))
                })
                on_keydown=Callback::new(move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        catalog.dispatch_action(BrowserAction::SetQuery(String::new()));
                    }
                })
            />
            <Text role=TextRole::Caption tone=TextTone::Secondary>{summary}</Text>
            <Show when=move || catalog.state.with(BrowserState::is_filtered) fallback=|| ()>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| {
                        catalog.dispatch_action(BrowserAction::ResetFilters)
                    })
                >
                    "Clear filters"
                </Button>
            </Show>
        </Cluster>
    }
}

#[component]
fn ResultsGrid() -> impl IntoView {
    let catalog = use_catalog();
    let results = create_memo(move |_| {
        let state = catalog.state.get();
        catalog.registry.with_value(|registry| state.results(registry))
    });

    view! {
        <Show
            when=move || results.with(|results| !results.is_empty())
            fallback=|| {
                view! {
                    <EmptyState role="status" layout_class="catalog-no-results">
                        <Heading role=TextRole::Label>"No components found"</Heading>
                        <Text tone=TextTone::Secondary>
                            "Try a different search term or category."
                        </Text>
                    </EmptyState>
                }
            }
        >
            <Grid layout_class="catalog-grid" role="list" aria_label="Components">
                <For
                    each=move || results.get()
                    key=|descriptor| descriptor.id()
                    children=move |descriptor| view! { <ComponentCard descriptor/> }
                />
            </Grid>
        </Show>
    }
}

#[component]
fn ComponentCard(descriptor: ComponentDescriptor) -> impl IntoView {
    let catalog = use_catalog();
    let id = descriptor.id();
    let selected = Signal::derive(move || catalog.state.with(|state| state.selected == Some(id)));
    let kind = descriptor.kind();
    let name = descriptor.name().to_string();
    let trigger_label = format!("Preview {name}");
    let description = descriptor.description().to_string();
    let category = descriptor.category().to_string();
    let price = descriptor.price().map(ToString::to_string);
    let tags = descriptor.tags().to_vec();

    view! {
        <Card layout_class="catalog-card" selected=selected data_state=kind.token()>
            <Button
                variant=ButtonVariant::Ghost
                layout_class="catalog-card-trigger"
                aria_label=trigger_label
                aria_pressed=selected
                on_click=Callback::new(move |_| {
                    catalog.dispatch_action(BrowserAction::SelectComponent(id))
                })
            >
                <Heading role=TextRole::Label>{name}</Heading>
            </Button>
            <Text role=TextRole::Caption tone=TextTone::Secondary>{description}</Text>
            <Cluster gap=LayoutGap::Sm>
                <Badge>{category}</Badge>
                <Badge tone=TextTone::Accent>{kind.label()}</Badge>
                {price.map(|price| view! { <Badge tone=TextTone::Success>{price}</Badge> })}
            </Cluster>
            <TagList tags/>
        </Card>
    }
}

#[component]
fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Sm layout_class="catalog-tags">
            {tags
                .into_iter()
                .map(|tag| {
                    view! {
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {format!("#{tag}")}
                        </Text>
                    }
                })
                .collect_view()}
        </Cluster>
    }
}

#[component]
fn DetailPane() -> impl IntoView {
    let catalog = use_catalog();
    let selected = create_memo(move |_| {
        let state = catalog.state.get();
        catalog
            .registry
            .with_value(|registry| state.selected_descriptor(registry))
    });

    view! {
        <Panel layout_class="catalog-detail" aria_label="Component details">
            <ComponentPreview descriptor=selected/>
            {move || selected.get().map(|descriptor| view! { <DetailMeta descriptor/> })}
        </Panel>
    }
}

#[component]
fn DetailMeta(descriptor: ComponentDescriptor) -> impl IntoView {
    let catalog = use_catalog();
    let meta = descriptor.meta().clone();
    let byline = detail_byline(&descriptor);
    let price = meta.price.as_ref().map(ToString::to_string);
    let language = meta.language.to_lowercase();

    view! {
        <Stack gap=LayoutGap::Sm layout_class="catalog-detail-meta">
            <PaneHeader title=meta.name meta=byline>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    aria_label="Close details"
                    on_click=Callback::new(move |_| {
                        catalog.dispatch_action(BrowserAction::ClearSelection)
                    })
                >
                    "Close"
                </Button>
            </PaneHeader>
            <Text tone=TextTone::Secondary>{meta.description}</Text>
            <Cluster gap=LayoutGap::Sm>
                {price.map(|price| view! { <Badge tone=TextTone::Success>{price}</Badge> })}
                <TagList tags=meta.tags/>
            </Cluster>
            <Heading role=TextRole::Label>"Example"</Heading>
            <CodeBlock code=meta.code language=language/>
        </Stack>
    }
}

/// `Category | Framework / Language`, skipping blank parts.
fn detail_byline(descriptor: &ComponentDescriptor) -> String {
    let meta = descriptor.meta();
    let stack = [meta.framework.trim(), meta.language.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" / ");
    if stack.is_empty() {
        meta.category.clone()
    } else {
        format!("{} | {stack}", meta.category)
    }
}
