//! Page selector component

use dioxus::prelude::*;

use notehub_core::pagination::{PageItem, Pagination};

use crate::theme::PALETTE;

/// Previous/next arrows around a window of page numbers.
#[component]
pub fn PaginationBar(pagination: Pagination, on_page_change: EventHandler<u32>) -> Element {
    let previous = pagination.previous();
    let next = pagination.next();

    rsx! {
        nav {
            class: "pagination",
            style: "display: flex; gap: 4px; align-items: center;",

            PageButton {
                label: "←",
                target: previous,
                active: false,
                on_select: on_page_change,
            }

            for (index, item) in pagination.items().into_iter().enumerate() {
                {match item {
                    PageItem::Page { number, current } => rsx! {
                        PageButton {
                            key: "page-{number}",
                            label: "{number}",
                            target: pagination.select(number),
                            active: current,
                            on_select: on_page_change,
                        }
                    },
                    PageItem::Ellipsis => rsx! {
                        span {
                            key: "gap-{index}",
                            style: "padding: 0 6px; color: {PALETTE.text_muted};",
                            "…"
                        }
                    },
                }}
            }

            PageButton {
                label: "→",
                target: next,
                active: false,
                on_select: on_page_change,
            }
        }
    }
}

#[component]
fn PageButton(
    #[props(into)] label: String,
    target: Option<u32>,
    active: bool,
    on_select: EventHandler<u32>,
) -> Element {
    let (background, color) = if active {
        (PALETTE.accent, PALETTE.accent_text)
    } else {
        (PALETTE.bg_primary, PALETTE.text_primary)
    };
    let cursor = if target.is_some() { "pointer" } else { "default" };

    rsx! {
        button {
            r#type: "button",
            disabled: target.is_none() && !active,
            style: "
                min-width: 32px;
                padding: 4px 8px;
                border: 1px solid {PALETTE.border};
                border-radius: 4px;
                background: {background};
                color: {color};
                cursor: {cursor};
            ",
            onclick: move |_| {
                if let Some(page) = target {
                    on_select.call(page);
                }
            },
            "{label}"
        }
    }
}
