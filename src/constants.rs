//! DOM ids and interaction tuning for the web front end.
//!
//! The page supplies: the scene canvas, a hint pill shown in overview, and a
//! hidden HUD layer containing the exit control and the carousel panel.

pub const CANVAS_ID: &str = "scene-canvas";
pub const HINT_ID: &str = "hint-pill";
pub const HUD_ID: &str = "hud-overlay";
pub const SCREEN_PANEL_ID: &str = "screen-panel";
pub const PROJECT_PANEL_ID: &str = "project-panel";
pub const EXIT_BUTTON_ID: &str = "hud-exit";
pub const PREV_BUTTON_ID: &str = "carousel-prev";
pub const NEXT_BUTTON_ID: &str = "carousel-next";

// Pointer movement below this (backing-store pixels) still counts as a click
pub const CLICK_SLOP_PX: f32 = 5.0;
