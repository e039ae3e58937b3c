//! Button component

use dioxus::prelude::*;

use crate::theme::PALETTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

/// Styled button
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let (background, color, border) = match variant {
        ButtonVariant::Primary => (PALETTE.accent, PALETTE.accent_text, PALETTE.accent),
        ButtonVariant::Secondary => (PALETTE.bg_primary, PALETTE.text_primary, PALETTE.border),
        ButtonVariant::Destructive => (PALETTE.bg_primary, PALETTE.danger, PALETTE.danger),
    };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    let opacity = if disabled { "0.5" } else { "1" };

    rsx! {
        button {
            r#type: "button",
            disabled,
            style: "
                padding: 6px 14px;
                border-radius: 6px;
                border: 1px solid {border};
                background: {background};
                color: {color};
                cursor: {cursor};
                opacity: {opacity};
                font-size: 14px;
            ",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
