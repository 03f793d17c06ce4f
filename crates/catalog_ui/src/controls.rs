use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::tokens::{
    aria_pressed_token, bool_token, merge_class, ButtonSize, ButtonVariant, FieldVariant,
};

#[component]
/// Action button.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_pressed: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_class("kit-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || aria_pressed_token(aria_pressed.as_ref().map(|p| p.get()))
            disabled=move || disabled.get()
            data-kit-kind="button"
            data-kit-variant=variant.token()
            data-kit-size=size.token()
            data-kit-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Single-line text input.
pub fn TextField(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_class("kit-field", layout_class)
            placeholder=placeholder
            aria-label=aria_label
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-kit-kind="text-field"
            data-kit-variant=variant.token()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Accessible on/off switch.
pub fn Switch(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };

    view! {
        <button
            type="button"
            class=merge_class("kit-switch", layout_class)
            role="switch"
            aria-label=move || aria_label.get()
            aria-checked=move || checked.get().to_string()
            disabled=move || disabled.get()
            data-kit-kind="switch"
            data-kit-selected=move || bool_token(checked.get())
            on:click=move |_| toggle()
            on:keydown=move |ev| match ev.key().as_str() {
                " " | "Enter" => {
                    ev.prevent_default();
                    toggle();
                }
                _ => {}
            }
        >
            <span data-kit-slot="track">
                <span data-kit-slot="thumb"></span>
            </span>
        </button>
    }
}

#[component]
/// Linear progress indicator; `value` is clamped to `max`.
pub fn ProgressBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    max: u16,
    #[prop(into)] value: MaybeSignal<u16>,
) -> impl IntoView {
    view! {
        <progress
            class=merge_class("kit-progress", layout_class)
            data-kit-kind="progress"
            aria-label=aria_label
            max=max
            value=move || value.get().min(max)
        ></progress>
    }
}
