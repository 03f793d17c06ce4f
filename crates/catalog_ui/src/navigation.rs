use leptos::ev::MouseEvent;
use leptos::*;

use crate::tokens::{bool_token, merge_class};

#[component]
/// Vertical navigation list used by the category sidebar.
pub fn NavList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav class=merge_class("kit-nav", layout_class) data-kit-kind="nav" aria-label=aria_label>
            <ul data-kit-slot="items">{children()}</ul>
        </nav>
    }
}

#[component]
/// Selectable navigation row. `trailing` renders right-aligned, e.g. an entry count.
pub fn NavItem(
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] trailing: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <li data-kit-kind="nav-item" data-kit-selected=move || bool_token(selected.get())>
            <button
                type="button"
                data-kit-slot="trigger"
                aria-current=move || selected.get().then_some("page")
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                <span data-kit-slot="label">{children()}</span>
                <span data-kit-slot="trailing">{move || trailing.get()}</span>
            </button>
        </li>
    }
}
