use dioxus::prelude::*;

use crate::constants::{BG_SURFACE, BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY};
use crate::utils::{format_hex_color, parse_f64_input, parse_hex_color};

const FIELD_STYLE: &str = "
    width: 100%; min-width: 0; box-sizing: border-box;
    padding: 6px 8px; font-size: 12px;
    outline: none;
    user-select: text;
";

/// Text field that commits its draft on blur or Enter.
///
/// The draft reverts to the committed value after every commit attempt: when
/// the model accepts the edit, the updated prop flows back in and re-syncs
/// the draft; when it rejects, the field snaps back to the last-known-good
/// value.
#[component]
pub fn CommittedTextField(
    label: &'static str,
    value: String,
    on_commit: EventHandler<String>,
) -> Element {
    let mut text = use_signal(|| value.clone());
    let mut last_prop_value = use_signal(|| value.clone());

    use_effect(move || {
        let v = value.clone();
        if v != last_prop_value() {
            text.set(v.clone());
            last_prop_value.set(v);
        }
    });

    let make_commit = || {
        let mut text = text.clone();
        let last_prop_value = last_prop_value.clone();
        let on_commit = on_commit.clone();
        move || {
            let next = text();
            on_commit.call(next);
            text.set(last_prop_value());
        }
    };

    let mut commit_on_blur = make_commit();
    let mut commit_on_key = make_commit();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; color: {TEXT_MUTED};", "{label}" }
            input {
                r#type: "text",
                value: "{text()}",
                style: "{FIELD_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;",
                oninput: move |e| text.set(e.value()),
                onblur: move |_| commit_on_blur(),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        commit_on_key();
                    }
                },
            }
        }
    }
}

/// Numeric percent field committing on blur or Enter. Range checking happens
/// in the data model, so the field only parses; like [`CommittedTextField`]
/// it reverts its draft after each commit attempt.
#[component]
pub fn PercentField(label: &'static str, value: f64, on_commit: EventHandler<f64>) -> Element {
    let mut text = use_signal(|| format!("{:.2}", value));
    let mut last_prop_value = use_signal(|| value);

    use_effect(move || {
        let v = value;
        if (v - last_prop_value()).abs() > 0.0001 {
            text.set(format!("{:.2}", v));
            last_prop_value.set(v);
        }
    });

    let make_commit = || {
        let mut text = text.clone();
        let last_prop_value = last_prop_value.clone();
        let on_commit = on_commit.clone();
        move || {
            let next = parse_f64_input(&text(), last_prop_value());
            on_commit.call(next);
            text.set(format!("{:.2}", last_prop_value()));
        }
    };

    let mut commit_on_blur = make_commit();
    let mut commit_on_key = make_commit();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; color: {TEXT_MUTED};", "{label}" }
            input {
                r#type: "number",
                step: "0.1",
                min: "0",
                max: "100",
                value: "{text()}",
                style: "{FIELD_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;",
                oninput: move |e| text.set(e.value()),
                onblur: move |_| commit_on_blur(),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        commit_on_key();
                    }
                },
            }
        }
    }
}

/// 24-bit RGB color picker. The native picker only produces `#RRGGBB`
/// values, so commits fire directly on input.
#[component]
pub fn ColorField(label: &'static str, value: u32, on_commit: EventHandler<u32>) -> Element {
    let hex = format_hex_color(value);
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; color: {TEXT_MUTED};", "{label}" }
            input {
                r#type: "color",
                value: "{hex}",
                style: "width: 100%; height: 28px; padding: 2px; box-sizing: border-box; background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; cursor: pointer;",
                oninput: move |e| {
                    if let Some(color) = parse_hex_color(&e.value()) {
                        on_commit.call(color);
                    }
                },
            }
        }
    }
}
