//! Presentational wrappers: button, text input, and card.
//!
//! These only pick class names from their variant props; behavior lives in
//! the components that use them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Secondary,
}

impl ButtonVariant {
    fn modifier(self) -> &'static str {
        match self {
            Self::Default => "btn--primary",
            Self::Outline => "btn--outline",
            Self::Ghost => "btn--ghost",
            Self::Secondary => "btn--secondary",
        }
    }
}

/// Footprint of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    fn modifier(self) -> &'static str {
        match self {
            Self::Default => "btn--md",
            Self::Sm => "btn--sm",
            Self::Lg => "btn--lg",
            Self::Icon => "btn--icon",
        }
    }
}

/// Join a base class, modifiers, and caller-supplied extras, skipping blanks.
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    join_classes(&["btn", variant.modifier(), size.modifier(), extra])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    /// Render as `type="submit"` instead of `type="button"`.
    #[prop(optional)]
    submit: bool,
    #[prop(into)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, &class);
    let button_type = if submit { "submit" } else { "button" };

    view! {
        <button class=class type=button_type disabled=move || disabled.get()>
            {children()}
        </button>
    }
}

/// Controlled single-line text input.
#[component]
pub fn TextInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = join_classes(&["text-input", &class]);

    view! {
        <input
            class=class
            type="text"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = join_classes(&["card", &class]);
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card__header">{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h3 class="card__title">{children()}</h3> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card__content">{children()}</div> }
}
