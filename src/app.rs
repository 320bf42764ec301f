//! Application shell: owns the signals, the simulated playback source, the
//! viewport bridge, and the top-level layout.
//!
//! All recomputation runs synchronously inside a handler or effect on the
//! main thread; the annotation set is repacked from scratch whenever it
//! changes.

use dioxus::prelude::*;
use log::{debug, info, warn};
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::components::{PropEdit, PropEditor};
use crate::constants::{
    BG_BASE, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, DEFAULT_PIXELS_PER_SECOND,
    DEFAULT_RULER_GAP_SECONDS, FALLBACK_DURATION_SECONDS, PANEL_DEFAULT_WIDTH, PLAYBACK_TICK_MS,
    TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, TRACK_DEFAULT_HEIGHT, TRACK_LEFT_MARGIN_PX,
    TRACK_VIEWPORT_SCRIPT,
};
use crate::core::follow::{next_scroll, Viewport};
use crate::core::time_scale::{format_seconds, seconds_to_pixels};
use crate::error::TrackError;
use crate::state::{Annotation, AnnotationStyle, FocusOrigin, FocusState, TrackConfig};
use crate::track::{AnnotationsTrack, PlaybackBtn};

/// Duration the simulated playback source reports once "metadata" is known.
const DEMO_VIDEO_DURATION: f64 = 60.0;

/// Geometry reported by the viewport bridge script.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct ViewportMetrics {
    width: f64,
    #[serde(rename = "scrollLeft")]
    scroll_left: f64,
}

/// Demo annotation set standing in for the external annotation provider.
fn seed_annotations() -> Vec<Annotation> {
    [
        (0.0, 5.0, AnnotationStyle::Title, "Opening titles"),
        (3.0, 8.0, AnnotationStyle::Speech, "Narrator intro"),
        (6.0, 10.0, AnnotationStyle::Note, "Check color grading"),
        (10.0, 14.0, AnnotationStyle::Highlight, "Product close-up"),
        (14.0, 20.0, AnnotationStyle::Text, "Lower third"),
        (18.0, 26.0, AnnotationStyle::Label, "B-roll"),
        (32.0, 40.0, AnnotationStyle::Speech, "Interview"),
        (55.0, 58.0, AnnotationStyle::Note, "Fade out"),
    ]
    .into_iter()
    .filter_map(|(start, end, style, text)| {
        Annotation::new(start, end)
            .map(|a| a.with_style(style).with_text(text))
            .ok()
    })
    .collect()
}

/// Route a committed editor field through the matching validating setter.
fn apply_edit(annotation: &mut Annotation, edit: PropEdit) -> Result<(), TrackError> {
    match edit {
        PropEdit::Times {
            time_start,
            time_end,
        } => annotation.set_times(time_start, time_end),
        PropEdit::Style(style) => {
            annotation.set_style(style);
            Ok(())
        }
        PropEdit::Text(text) => {
            annotation.set_text(text);
            Ok(())
        }
        PropEdit::X(v) => annotation.set_x(v),
        PropEdit::Y(v) => annotation.set_y(v),
        PropEdit::Width(v) => annotation.set_width(v),
        PropEdit::Height(v) => annotation.set_height(v),
        PropEdit::TextSize(v) => annotation.set_text_size(v),
        PropEdit::BackgroundColor(c) => annotation.set_background_color(c),
        PropEdit::TextColor(c) => annotation.set_text_color(c),
    }
}

#[component]
pub fn App() -> Element {
    // The track cannot compute any layout without a valid configuration, so
    // a bad one is surfaced immediately instead of deferred to first use.
    let config = match TrackConfig::new(DEFAULT_PIXELS_PER_SECOND, DEFAULT_RULER_GAP_SECONDS) {
        Ok(config) => config,
        Err(err) => {
            return rsx! {
                div {
                    style: "padding: 24px; font-size: 14px; color: {TEXT_PRIMARY}; background-color: {BG_BASE};",
                    "Track configuration error: {err}"
                }
            };
        }
    };

    let mut annotations = use_signal(seed_annotations);
    let mut focus = use_signal(FocusState::default);

    // Playback state fed by the simulated playback source.
    let mut current_time = use_signal(|| 0.0_f64);
    let mut is_playing = use_signal(|| false);
    let video_duration = use_signal(|| None::<f64>);

    // Viewport geometry reported by the bridge script.
    let viewport_metrics = use_signal(|| None::<ViewportMetrics>);
    let mut viewport_eval = use_signal(|| None::<document::Eval>);

    let duration = video_duration().unwrap_or(FALLBACK_DURATION_SECONDS);

    // Simulated playback source: metadata arrives shortly after launch.
    use_future(move || {
        let mut video_duration = video_duration.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(400)).await;
            video_duration.set(Some(DEMO_VIDEO_DURATION));
            info!("video duration known: {DEMO_VIDEO_DURATION}s");
        }
    });

    // Playback tick loop advancing the current time by wall-clock delta.
    use_future(move || {
        let mut current_time = current_time.clone();
        let mut is_playing = is_playing.clone();
        let video_duration = video_duration.clone();
        async move {
            let mut last_tick = Instant::now();
            loop {
                tokio::time::sleep(Duration::from_millis(PLAYBACK_TICK_MS)).await;
                if !is_playing() {
                    last_tick = Instant::now();
                    continue;
                }

                let now = Instant::now();
                let delta = now.saturating_duration_since(last_tick);
                last_tick = now;

                let duration = video_duration().unwrap_or(FALLBACK_DURATION_SECONDS);
                let next_time = (current_time() + delta.as_secs_f64()).min(duration);
                current_time.set(next_time);

                if next_time >= duration {
                    is_playing.set(false);
                    debug!("playback reached the end of the track");
                }
            }
        }
    });

    // Attach the viewport bridge once, then drain its reports.
    use_effect(move || {
        if viewport_eval().is_some() {
            return;
        }
        let eval = document::eval(TRACK_VIEWPORT_SCRIPT);
        viewport_eval.set(Some(eval));
    });

    use_future(move || {
        let mut viewport_metrics = viewport_metrics.clone();
        let viewport_eval = viewport_eval.clone();
        async move {
            loop {
                let Some(eval) = viewport_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<ViewportMetrics>().await {
                        Ok(metrics) => {
                            if viewport_metrics() != Some(metrics) {
                                viewport_metrics.set(Some(metrics));
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Viewport follow: re-decided whenever playback time moves. The metrics
    // are sampled without subscribing so scroll echoes and resizes do not
    // re-trigger a decision on their own.
    use_effect(move || {
        let time = current_time();
        let duration = video_duration().unwrap_or(FALLBACK_DURATION_SECONDS);
        let Some(metrics) = *viewport_metrics.peek() else {
            return;
        };
        let viewport = Viewport {
            scroll_left: metrics.scroll_left,
            viewport_width: metrics.width,
            content_width: seconds_to_pixels(duration, config.pixels_per_second()),
            left_margin: TRACK_LEFT_MARGIN_PX,
        };
        if let Some(next) = next_scroll(&viewport, time, config.pixels_per_second()) {
            if (next - metrics.scroll_left).abs() >= 0.5 {
                let _ = document::eval(&format!(
                    "const host = document.getElementById('annotations-scroll-host'); if (host) {{ host.scrollLeft = {next}; }}"
                ));
            }
        }
    });

    let selected_annotation = focus
        .read()
        .selected()
        .and_then(|id| annotations.read().iter().find(|a| a.id() == id).cloned());

    let on_edit = move |edit: PropEdit| {
        let Some(selected) = focus.read().selected() else {
            return;
        };
        let mut list = annotations.write();
        let Some(annotation) = list.iter_mut().find(|a| a.id() == selected) else {
            return;
        };
        match apply_edit(annotation, edit) {
            Ok(()) => debug!("annotation {selected} updated, rows repack on render"),
            Err(err) => warn!("rejected annotation edit: {err}"),
        }
    };

    let play_icon = if is_playing() { "⏸" } else { "▶" };
    let player_clock = format_seconds(current_time());
    let timecode = format!(
        "{} / {}",
        format_seconds(current_time()),
        format_seconds(duration)
    );

    let global_css = format!(
        "html, body {{ margin: 0; padding: 0; background-color: {BG_BASE}; }} \
         * {{ font-family: 'Inter', 'Segoe UI', sans-serif; }}"
    );

    rsx! {
        style { "{global_css}" }

        div {
            style: "display: flex; flex-direction: column; height: 100vh; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; overflow: hidden;",

            // Header: title, transport, timecode.
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 36px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Annotrack"
                }
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    PlaybackBtn {
                        icon: "⏮",
                        on_click: move |_| current_time.set(0.0),
                    }
                    PlaybackBtn {
                        icon: play_icon,
                        primary: true,
                        on_click: move |_| is_playing.set(!is_playing()),
                    }
                    PlaybackBtn {
                        icon: "⏭",
                        on_click: move |_| current_time.set(duration),
                    }
                }
                span {
                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                    "{timecode}"
                }
            }

            // Main row: player surface and property editor.
            div {
                style: "flex: 1; display: flex; overflow: hidden;",

                div {
                    style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 8px; background-color: {BG_BASE};",
                    span {
                        style: "font-family: 'SF Mono', Consolas, monospace; font-size: 42px; color: {TEXT_SECONDARY};",
                        "{player_clock}"
                    }
                    span {
                        style: "font-size: 11px; color: {TEXT_DIM};",
                        "Simulated playback source"
                    }
                }

                div {
                    style: "width: {PANEL_DEFAULT_WIDTH}px; flex-shrink: 0; border-left: 1px solid {BORDER_DEFAULT}; background-color: {BG_ELEVATED}; overflow: hidden;",
                    PropEditor {
                        annotation: selected_annotation,
                        focus: focus(),
                        on_edit: on_edit,
                        on_hover: move |id| focus.write().set_hovered(id, FocusOrigin::Editor),
                    }
                }
            }

            // Annotations track.
            div {
                style: "height: {TRACK_DEFAULT_HEIGHT}px; flex-shrink: 0; border-top: 1px solid {BORDER_DEFAULT};",
                AnnotationsTrack {
                    annotations: annotations(),
                    config: config,
                    duration: duration,
                    current_time: current_time(),
                    focus: focus(),
                    on_select: move |id| focus.write().select(id),
                    on_deselect: move |_| focus.write().clear_selection(),
                    on_hover: move |id| focus.write().set_hovered(id, FocusOrigin::Track),
                    on_seek: move |t: f64| current_time.set(t),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_set_is_valid() {
        let seeds = seed_annotations();
        assert_eq!(seeds.len(), 8);
        for annotation in &seeds {
            assert!(annotation.time_end() > annotation.time_start());
        }
    }

    #[test]
    fn test_apply_edit_commits_valid_values() {
        let mut annotation = Annotation::new(2.0, 5.0).unwrap();
        apply_edit(&mut annotation, PropEdit::X(30.0)).unwrap();
        assert_eq!(annotation.x(), 30.0);

        apply_edit(
            &mut annotation,
            PropEdit::Times {
                time_start: 4.0,
                time_end: 9.0,
            },
        )
        .unwrap();
        assert_eq!(annotation.time_start(), 4.0);
        assert_eq!(annotation.time_end(), 9.0);
    }

    #[test]
    fn test_apply_edit_rejection_keeps_model() {
        let mut annotation = Annotation::new(2.0, 5.0).unwrap();
        let result = apply_edit(
            &mut annotation,
            PropEdit::Times {
                time_start: 7.0,
                time_end: 6.0,
            },
        );
        assert!(matches!(result, Err(TrackError::InvalidInterval { .. })));
        assert_eq!(annotation.time_start(), 2.0);
        assert_eq!(annotation.time_end(), 5.0);

        assert!(apply_edit(&mut annotation, PropEdit::Height(130.0)).is_err());
        assert_ne!(annotation.height(), 130.0);
    }
}
