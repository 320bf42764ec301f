//! Shared UI constants: colors, track geometry, and the viewport bridge script.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_MARKER: &str = "#f97316";
pub const ACCENT_PLAYHEAD: &str = "#ef4444";
pub const ACCENT_SELECTED: &str = "#3b82f6";

pub const PANEL_DEFAULT_WIDTH: f64 = 280.0;
pub const TRACK_DEFAULT_HEIGHT: f64 = 220.0;

/// Fixed visual padding used by the follow controller's "content fully
/// revealed" test. Not derived from content.
pub const END_PADDING_PX: f64 = 48.0;
/// Left margin of the annotations container inside the scroll host.
pub const TRACK_LEFT_MARGIN_PX: f64 = 16.0;
/// Vertical pitch between packed annotation rows.
pub const ROW_HEIGHT_PX: f64 = 52.0;
/// Offset of row 0 below the ruler.
pub const ROW_TOP_OFFSET_PX: f64 = 14.0;
pub const RULER_HEIGHT_PX: f64 = 24.0;

pub const DEFAULT_PIXELS_PER_SECOND: u32 = 10;
pub const DEFAULT_RULER_GAP_SECONDS: u32 = 3;
/// Track length assumed until the playback source reports real metadata.
pub const FALLBACK_DURATION_SECONDS: f64 = 10.0;

pub const PLAYBACK_TICK_MS: u64 = 16;

pub const TRACK_VIEWPORT_SCRIPT: &str = r#"
const hostId = "annotations-scroll-host";
let last = null;

function sendMetrics() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const next = {
        width: host.clientWidth || 0,
        scrollLeft: host.scrollLeft || 0
    };
    if (last &&
        Math.abs(last.width - next.width) < 0.5 &&
        Math.abs(last.scrollLeft - next.scrollLeft) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendMetrics());
    observer.observe(host);
    host.addEventListener("scroll", sendMetrics, { passive: true });
    window.addEventListener("resize", sendMetrics, { passive: true });
    sendMetrics();
}

attach();
await new Promise(() => {});
"#;
