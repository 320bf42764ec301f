use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{
    ACCENT_PLAYHEAD, BG_BASE, BG_SURFACE, BORDER_DEFAULT, END_PADDING_PX, ROW_HEIGHT_PX,
    ROW_TOP_OFFSET_PX, RULER_HEIGHT_PX, TRACK_LEFT_MARGIN_PX,
};
use crate::core::follow::indicator_position;
use crate::core::row_pack::pack;
use crate::core::time_scale::seconds_to_pixels;
use crate::state::{Annotation, FocusState, TrackConfig};

use super::ruler::TimeRuler;
use super::track_item::TrackItem;

/// The annotations track: a horizontally scrollable strip with a time ruler,
/// annotation markers packed into non-overlapping rows, and a current-time
/// indicator.
///
/// The full annotation set is repacked from scratch on every render pass.
/// Annotations starting past the known video duration still occupy their
/// packing slot but are excluded from the rendered output, so row indices
/// stay stable when the duration is revised.
#[component]
pub fn AnnotationsTrack(
    annotations: Vec<Annotation>,
    config: TrackConfig,
    duration: f64,
    current_time: f64,
    focus: FocusState,
    on_select: EventHandler<Uuid>,
    on_deselect: EventHandler<MouseEvent>,
    on_hover: EventHandler<Option<Uuid>>,
    on_seek: EventHandler<f64>,
) -> Element {
    let pps = config.pixels_per_second();
    let content_width = seconds_to_pixels(duration, pps);
    let wrapper_width = TRACK_LEFT_MARGIN_PX + content_width + END_PADDING_PX;
    let indicator_px = indicator_position(current_time, TRACK_LEFT_MARGIN_PX, pps);

    let rows = pack(&annotations);
    let rows_height = rows.len() as f64 * ROW_HEIGHT_PX + ROW_TOP_OFFSET_PX;

    // Render pass: packing consumed everything, drawing skips markers that
    // start past the end of the video.
    let placed: Vec<(usize, Annotation)> = rows
        .iter()
        .enumerate()
        .flat_map(|(row_index, row)| {
            row.iter()
                .filter(|annotation| annotation.time_start() <= duration)
                .map(move |annotation| (row_index, annotation.clone()))
        })
        .collect();

    rsx! {
        div {
            id: "annotations-scroll-host",
            style: "
                height: 100%;
                overflow-x: auto;
                overflow-y: auto;
                position: relative;
                background-color: {BG_BASE};
            ",
            onclick: move |e| on_deselect.call(e),

            div {
                style: "
                    position: relative;
                    width: {wrapper_width}px;
                    min-height: 100%;
                ",

                // Ruler strip; click anywhere on it to seek.
                div {
                    style: "
                        margin-left: {TRACK_LEFT_MARGIN_PX}px;
                        width: {content_width}px;
                        height: {RULER_HEIGHT_PX}px;
                        position: relative;
                        background-color: {BG_SURFACE};
                        border-bottom: 1px solid {BORDER_DEFAULT};
                        cursor: pointer;
                    ",
                    onmousedown: move |e| {
                        e.prevent_default();
                        let x = e.element_coordinates().x;
                        let t = (x / pps as f64).clamp(0.0, duration);
                        on_seek.call(t);
                    },

                    TimeRuler {
                        duration: duration,
                        config: config,
                    }
                }

                // Packed annotation rows.
                div {
                    style: "
                        margin-left: {TRACK_LEFT_MARGIN_PX}px;
                        width: {content_width}px;
                        height: {rows_height}px;
                        position: relative;
                    ",

                    for (row_index, annotation) in placed.iter() {
                        {
                            let id = annotation.id();
                            rsx! {
                                TrackItem {
                                    key: "{id}",
                                    annotation: annotation.clone(),
                                    row: *row_index,
                                    config: config,
                                    is_selected: focus.is_selected(id),
                                    is_hovered: focus.is_hovered(id),
                                    on_select: move |id| on_select.call(id),
                                    on_hover: move |id| on_hover.call(id),
                                }
                            }
                        }
                    }
                }

                // Current-time indicator, positioned independently of any
                // scroll decision.
                div {
                    class: "current-time",
                    style: "
                        position: absolute;
                        left: {indicator_px}px;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background-color: {ACCENT_PLAYHEAD};
                        pointer-events: none;
                        z-index: 10;
                    ",
                }
            }
        }
    }
}
