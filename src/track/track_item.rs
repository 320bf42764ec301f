use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{
    ACCENT_SELECTED, BG_ELEVATED, BORDER_DEFAULT, BORDER_STRONG, ROW_HEIGHT_PX, ROW_TOP_OFFSET_PX,
    TEXT_SECONDARY,
};
use crate::core::time_scale::seconds_to_pixels;
use crate::state::{Annotation, AnnotationStyle, TrackConfig};

fn style_glyph(style: AnnotationStyle) -> &'static str {
    match style {
        AnnotationStyle::Text => "T",
        AnnotationStyle::Note => "✎",
        AnnotationStyle::Speech => "💬",
        AnnotationStyle::Title => "H",
        AnnotationStyle::Highlight => "◩",
        AnnotationStyle::Label => "🏷",
    }
}

/// One annotation marker, positioned by its interval and packed row.
#[component]
pub(crate) fn TrackItem(
    annotation: Annotation,
    row: usize,
    config: TrackConfig,
    is_selected: bool,
    is_hovered: bool,
    on_select: EventHandler<Uuid>,
    on_hover: EventHandler<Option<Uuid>>,
) -> Element {
    let pps = config.pixels_per_second();
    let left = seconds_to_pixels(annotation.time_start(), pps);
    let width = seconds_to_pixels(annotation.duration_seconds(), pps);
    let top = row as f64 * ROW_HEIGHT_PX + ROW_TOP_OFFSET_PX;
    let item_height = ROW_HEIGHT_PX - 12.0;

    let id = annotation.id();
    let glyph = style_glyph(annotation.style());
    let title = annotation.text().unwrap_or("<no text>").to_string();

    let border = if is_selected {
        format!("1.5px solid {ACCENT_SELECTED}")
    } else if is_hovered {
        format!("1px solid {BORDER_STRONG}")
    } else {
        format!("1px solid {BORDER_DEFAULT}")
    };

    rsx! {
        div {
            title: "{title}",
            style: "
                position: absolute;
                left: {left}px;
                top: {top}px;
                width: {width}px;
                height: {item_height}px;
                background-color: {BG_ELEVATED};
                border: {border};
                border-radius: 4px;
                display: flex;
                align-items: center;
                gap: 6px;
                padding: 0 6px;
                overflow: hidden;
                cursor: pointer;
                user-select: none;
                box-sizing: border-box;
            ",
            onmouseenter: move |_| on_hover.call(Some(id)),
            onmouseleave: move |_| on_hover.call(None),
            onclick: move |e| {
                e.stop_propagation();
                on_select.call(id);
            },

            span { style: "font-size: 11px; flex-shrink: 0;", "{glyph}" }
            span {
                style: "font-size: 10px; color: {TEXT_SECONDARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{title}"
            }
        }
    }
}
