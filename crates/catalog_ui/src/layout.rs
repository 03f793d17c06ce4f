use leptos::*;

use crate::tokens::{merge_class, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding};

#[component]
/// Vertical stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("kit-stack", layout_class)
            data-kit-kind="stack"
            data-kit-slot=ui_slot
            data-kit-gap=gap.token()
            data-kit-align=align.token()
            data-kit-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping row.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("kit-cluster", layout_class)
            data-kit-kind="cluster"
            data-kit-slot=ui_slot
            data-kit-gap=gap.token()
            data-kit-align=align.token()
            data-kit-justify=justify.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Responsive card grid.
pub fn Grid(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("kit-grid", layout_class)
            data-kit-kind="grid"
            data-kit-gap=gap.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Sidebar + content split.
pub fn SplitLayout(
    #[prop(default = LayoutGap::Lg)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("kit-split", layout_class)
            data-kit-kind="split-layout"
            data-kit-gap=gap.token()
        >
            {children()}
        </div>
    }
}
