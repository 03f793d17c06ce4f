use leptos::*;

use crate::tokens::{merge_class, TextRole, TextTone};

#[component]
/// Inline text.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_class("kit-text", layout_class)
            data-kit-kind="text"
            data-kit-variant=role.token()
            data-kit-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Block heading.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("kit-heading", layout_class)
            data-kit-kind="heading"
            data-kit-variant=role.token()
            data-kit-tone=tone.token()
            role="heading"
        >
            {children()}
        </div>
    }
}

#[component]
/// Compact pill label for categories, tags, and prices.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_class("kit-badge", layout_class)
            data-kit-kind="badge"
            data-kit-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Verbatim source listing. The code is rendered as text and never evaluated.
pub fn CodeBlock(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] code: MaybeSignal<String>,
    #[prop(optional, into)] language: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <pre
            class=merge_class("kit-code-block", layout_class)
            data-kit-kind="code-block"
            data-kit-language=move || language.get()
        >
            <code>{move || code.get()}</code>
        </pre>
    }
}
