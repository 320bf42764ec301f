use dioxus::prelude::*;
use log::warn;
use uuid::Uuid;

use crate::components::common::{ColorField, CommittedTextField, PercentField};
use crate::constants::{
    ACCENT_MARKER, BG_SURFACE, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::core::time_scale::{format_seconds, parse_formatted};
use crate::state::{Annotation, AnnotationStyle, FocusOrigin, FocusState};

/// A single-property edit produced by the editor and applied by the app
/// shell through the annotation's validating setters.
#[derive(Debug, Clone, PartialEq)]
pub enum PropEdit {
    Times { time_start: f64, time_end: f64 },
    Style(AnnotationStyle),
    Text(String),
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
    TextSize(f64),
    BackgroundColor(u32),
    TextColor(u32),
}

/// Property editor panel for the selected annotation.
///
/// Each field commits through a [`PropEdit`]; a rejected edit leaves the
/// model untouched and the field snaps back to the last committed value.
/// Hover over the panel is mirrored onto the corresponding track marker
/// through the shared focus state, and hover arriving from the track is
/// shown on the panel header.
#[component]
pub fn PropEditor(
    annotation: Option<Annotation>,
    focus: FocusState,
    on_edit: EventHandler<PropEdit>,
    on_hover: EventHandler<Option<Uuid>>,
) -> Element {
    let Some(annotation) = annotation else {
        return rsx! {
            div {
                style: "padding: 16px; font-size: 12px; color: {TEXT_MUTED};",
                "Select an annotation to edit its properties."
            }
        };
    };

    let id = annotation.id();
    let mirrored = focus.mirrored_hover(FocusOrigin::Editor) == Some(id);
    let header_accent = if mirrored { ACCENT_MARKER } else { BORDER_DEFAULT };

    let time_start = annotation.time_start();
    let time_end = annotation.time_end();
    let style_name = annotation.style().name();

    // Read-only view of the committed state, sized by line count like a
    // code block.
    let code = serde_json::to_string_pretty(&annotation).unwrap_or_default();
    let code_rows = code.lines().count().clamp(4, 24) as i64;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; padding: 12px; height: 100%; overflow-y: auto; box-sizing: border-box;",
            onmouseenter: move |_| on_hover.call(Some(id)),
            onmouseleave: move |_| on_hover.call(None),

            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    padding-bottom: 8px; border-bottom: 2px solid {header_accent};
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Annotation"
                }
                select {
                    value: "{style_name}",
                    style: "padding: 4px 6px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none;",
                    onchange: move |e| {
                        if let Some(style) = AnnotationStyle::from_name(&e.value()) {
                            on_edit.call(PropEdit::Style(style));
                        }
                    },
                    for style in AnnotationStyle::ALL {
                        {
                            let name = style.name();
                            rsx! {
                                option {
                                    key: "{name}",
                                    value: "{name}",
                                    selected: name == style_name,
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                CommittedTextField {
                    label: "Start (MM:SS)",
                    value: format_seconds(time_start),
                    on_commit: move |raw: String| match parse_formatted(&raw) {
                        Ok(seconds) => on_edit.call(PropEdit::Times {
                            time_start: seconds as f64,
                            time_end,
                        }),
                        Err(err) => warn!("rejected start time edit: {err}"),
                    },
                }
                CommittedTextField {
                    label: "End (MM:SS)",
                    value: format_seconds(time_end),
                    on_commit: move |raw: String| match parse_formatted(&raw) {
                        Ok(seconds) => on_edit.call(PropEdit::Times {
                            time_start,
                            time_end: seconds as f64,
                        }),
                        Err(err) => warn!("rejected end time edit: {err}"),
                    },
                }
            }

            CommittedTextField {
                label: "Text",
                value: annotation.text().unwrap_or("").to_string(),
                on_commit: move |raw: String| on_edit.call(PropEdit::Text(raw)),
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                PercentField {
                    label: "X (%)",
                    value: annotation.x(),
                    on_commit: move |v| on_edit.call(PropEdit::X(v)),
                }
                PercentField {
                    label: "Y (%)",
                    value: annotation.y(),
                    on_commit: move |v| on_edit.call(PropEdit::Y(v)),
                }
                PercentField {
                    label: "Width (%)",
                    value: annotation.width(),
                    on_commit: move |v| on_edit.call(PropEdit::Width(v)),
                }
                PercentField {
                    label: "Height (%)",
                    value: annotation.height(),
                    on_commit: move |v| on_edit.call(PropEdit::Height(v)),
                }
            }

            PercentField {
                label: "Text size (%)",
                value: annotation.text_size(),
                on_commit: move |v| on_edit.call(PropEdit::TextSize(v)),
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                ColorField {
                    label: "Background",
                    value: annotation.background_color(),
                    on_commit: move |c| on_edit.call(PropEdit::BackgroundColor(c)),
                }
                ColorField {
                    label: "Text color",
                    value: annotation.text_color(),
                    on_commit: move |c| on_edit.call(PropEdit::TextColor(c)),
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 4px;",
                span { style: "font-size: 10px; color: {TEXT_MUTED};", "Committed state" }
                textarea {
                    readonly: true,
                    rows: "{code_rows}",
                    value: "{code}",
                    style: "
                        width: 100%; box-sizing: border-box; resize: vertical;
                        padding: 6px 8px; font-size: 10px; line-height: 1.4;
                        font-family: 'SF Mono', Consolas, monospace;
                        background-color: {BG_SURFACE}; color: {TEXT_DIM};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                        outline: none;
                    ",
                }
            }
        }
    }
}
