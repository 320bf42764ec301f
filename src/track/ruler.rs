use dioxus::prelude::*;

use crate::constants::{BORDER_STRONG, TEXT_DIM};
use crate::core::ruler::ruler_markers;
use crate::state::TrackConfig;

/// Time ruler above the annotation rows.
///
/// Markers are regenerated as a whole whenever the duration changes; all
/// elements ignore pointer events so clicks fall through to the seek handler
/// on the parent strip.
#[component]
pub(crate) fn TimeRuler(duration: f64, config: TrackConfig) -> Element {
    let markers = ruler_markers(duration, &config);
    let last_index = markers.len() - 1;

    rsx! {
        div {
            style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; pointer-events: none;",

            for (i, marker) in markers.iter().enumerate() {
                {
                    // The pinned final label would overflow the content edge,
                    // so anchor it to the left of its tick instead.
                    let label_style = if i == last_index {
                        format!(
                            "position: absolute; left: {}px; top: 3px; font-size: 9px; color: {}; font-family: 'SF Mono', Consolas, monospace; user-select: none; pointer-events: none; transform: translateX(-100%);",
                            marker.position_px - 4.0, TEXT_DIM
                        )
                    } else {
                        format!(
                            "position: absolute; left: {}px; top: 3px; font-size: 9px; color: {}; font-family: 'SF Mono', Consolas, monospace; user-select: none; pointer-events: none;",
                            marker.position_px + 4.0, TEXT_DIM
                        )
                    };

                    rsx! {
                        div {
                            key: "marker-{marker.time_seconds}",
                            div {
                                style: "
                                    position: absolute;
                                    left: {marker.position_px}px;
                                    bottom: 0;
                                    width: 1px;
                                    height: 10px;
                                    background-color: {BORDER_STRONG};
                                    pointer-events: none;
                                ",
                            }
                            div {
                                style: "{label_style}",
                                "{marker.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
