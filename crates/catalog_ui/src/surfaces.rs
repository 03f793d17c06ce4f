use leptos::*;

use crate::tokens::{bool_token, merge_class, Elevation, LayoutPadding, SurfaceVariant, TextTone};

#[component]
/// Generic surface.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Flat)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("kit-surface", layout_class)
            data-kit-kind="surface"
            data-kit-variant=variant.token()
            data-kit-elevation=elevation.token()
            data-kit-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Sectioning panel.
pub fn Panel(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_class("kit-panel", layout_class)
            data-kit-kind="panel"
            data-kit-variant=variant.token()
            data-kit-elevation=elevation.token()
            data-kit-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Catalog tile and summary card.
pub fn Card(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] data_state: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_class("kit-card", layout_class)
            data-kit-kind="card"
            data-kit-elevation=elevation.token()
            data-kit-padding=padding.token()
            data-kit-selected=move || bool_token(selected.get())
            data-kit-state=move || data_state.get()
        >
            {children()}
        </article>
    }
}

#[component]
/// Bordered stage that hosts a component preview.
///
/// `state` carries the preview's current render path (`idle`, `live`, `scene`, `errored` and so
/// on) as `data-kit-state`, so the stylesheet can size 3D stages differently from inline demos.
pub fn PreviewFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] state: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("kit-preview-frame", layout_class)
            data-kit-kind="preview-frame"
            data-kit-state=move || state.get()
            role="region"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Empty, placeholder, and fallback content block.
pub fn EmptyState(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("kit-empty-state", layout_class)
            data-kit-kind="empty-state"
            data-kit-tone=tone.token()
            role=role
        >
            {children()}
        </div>
    }
}

#[component]
/// Header row with title, supporting meta line, and trailing actions.
pub fn PaneHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] meta: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let title_signal = Signal::derive(move || title.get());
    let meta_signal = Signal::derive(move || meta.get());
    view! {
        <header class=merge_class("kit-pane-header", layout_class) data-kit-kind="pane-header">
            <div data-kit-slot="copy">
                <Show when=move || !title_signal.get().is_empty() fallback=|| ()>
                    <h2 data-kit-slot="title">{move || title_signal.get()}</h2>
                </Show>
                <Show when=move || !meta_signal.get().is_empty() fallback=|| ()>
                    <p data-kit-slot="meta">{move || meta_signal.get()}</p>
                </Show>
            </div>
            <div data-kit-slot="actions">{children()}</div>
        </header>
    }
}
