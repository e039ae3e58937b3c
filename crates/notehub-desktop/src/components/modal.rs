//! Modal overlay component

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// Centered dialog over a dimmed backdrop.
///
/// Clicking the backdrop or pressing Escape requests closing; the owner
/// decides whether the modal is rendered at all. The backdrop takes focus on
/// mount so Escape reaches it before any field is clicked.
#[component]
pub fn Modal(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            role: "presentation",
            tabindex: "-1",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {PALETTE.bg_overlay};
                z-index: 100;
            ",
            onmounted: move |evt: Event<MountedData>| async move {
                if let Err(error) = evt.set_focus(true).await {
                    tracing::debug!("Could not focus modal: {:?}", error);
                }
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: Event<KeyboardData>| {
                if closes_modal(&evt.key()) {
                    on_close.call(());
                }
            },

            div {
                class: "modal",
                role: "dialog",
                style: "
                    width: min(520px, 92vw);
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 24px;
                    border-radius: 10px;
                    background: {PALETTE.bg_primary};
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.2);
                ",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

fn closes_modal(key: &Key) -> bool {
    *key == Key::Escape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_and_typing_does_not() {
        assert!(closes_modal(&Key::Escape));
        assert!(!closes_modal(&Key::Enter));
        assert!(!closes_modal(&Key::Character("q".to_string())));
    }
}
