//! Note creation form component

use dioxus::prelude::*;

use notehub_core::form::NoteForm;
use notehub_core::{NewNote, NoteTag};

use super::{Button, ButtonVariant};
use crate::theme::PALETTE;

/// Title, content and tag fields backed by a [`NoteForm`] state machine.
///
/// The form only validates and hands a payload to `on_submit`; the owner
/// reports the outcome back through the same signal.
#[component]
pub fn NoteFormView(
    form: Signal<NoteForm>,
    on_submit: EventHandler<NewNote>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = form;
    let current = form();
    let draft = current.draft().clone();
    let errors = current.errors().clone();
    let submitting = current.is_submitting();
    let submit_error = current.submit_error().map(ToString::to_string);

    let input_style = format!(
        "width: 100%; box-sizing: border-box; padding: 8px 10px; \
         border: 1px solid {}; border-radius: 6px; font-size: 14px;",
        PALETTE.border
    );
    let textarea_style = input_style.clone();
    let select_style = input_style.clone();

    rsx! {
        div {
            class: "note-form",
            style: "display: flex; flex-direction: column; gap: 16px;",

            h2 { style: "margin: 0;", "New note" }

            div {
                class: "form-group",
                label { r#for: "title", "Title" }
                input {
                    id: "title",
                    r#type: "text",
                    value: "{draft.title}",
                    disabled: submitting,
                    style: "{input_style}",
                    oninput: move |evt| form.write().set_title(evt.value()),
                }
                FieldError { message: errors.title }
            }

            div {
                class: "form-group",
                label { r#for: "content", "Content" }
                textarea {
                    id: "content",
                    rows: "6",
                    value: "{draft.content}",
                    disabled: submitting,
                    style: "{textarea_style}",
                    oninput: move |evt| form.write().set_content(evt.value()),
                }
                FieldError { message: errors.content }
            }

            div {
                class: "form-group",
                label { r#for: "tag", "Tag" }
                select {
                    id: "tag",
                    value: "{draft.tag}",
                    disabled: submitting,
                    style: "{select_style}",
                    onchange: move |evt| form.write().set_tag(evt.value()),
                    for tag in NoteTag::ALL {
                        option {
                            key: "{tag}",
                            value: "{tag}",
                            selected: draft.tag == tag.as_str(),
                            "{tag}"
                        }
                    }
                }
                FieldError { message: errors.tag }
            }

            if let Some(message) = submit_error {
                p {
                    class: "submit-error",
                    style: "margin: 0; color: {PALETTE.danger};",
                    "{message}"
                }
            }

            div {
                class: "form-actions",
                style: "display: flex; justify-content: flex-end; gap: 8px;",

                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting,
                    onclick: move |_| {
                        let payload = form.write().submit();
                        if let Some(note) = payload {
                            on_submit.call(note);
                        }
                    },
                    if submitting { "Creating..." } else { "Create note" }
                }
            }
        }
    }
}

#[component]
fn FieldError(#[props(!optional)] message: Option<&'static str>) -> Element {
    rsx! {
        if let Some(message) = message {
            span {
                class: "field-error",
                style: "display: block; margin-top: 4px; font-size: 12px; color: {PALETTE.danger};",
                "{message}"
            }
        }
    }
}
