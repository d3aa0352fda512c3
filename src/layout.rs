//! Viewport-driven layout: screen dimensions and play-area geometry.

use serde::{Deserialize, Serialize};

use crate::model::{GameAction, GameState};

/// Radius of the target's main disc, in logical units.
pub const TARGET_RADIUS: f64 = 30.0;
/// (radius, alpha) of the pulse rings drawn around the disc while playing.
pub const PULSE_RINGS: [(f64, f64); 3] = [(60.0, 0.1), (45.0, 0.2), (35.0, 0.3)];
/// Stroked rings inside the disc.
pub const INNER_RINGS: [f64; 3] = [25.0, 15.0, 5.0];
/// The paused target shrinks to this fraction.
pub const PAUSED_SCALE: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical space taken by the header and footer bars.
    pub header_footer_reserve: f64,
    /// Minimum logical content size before the canvas scales down.
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_footer_reserve: 100.0,
            min_width: 800.0,
            min_height: 600.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenDimensions {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

pub fn compute_dimensions(
    viewport_width: f64,
    viewport_height: f64,
    cfg: &LayoutConfig,
) -> ScreenDimensions {
    let width = viewport_width;
    let height = viewport_height - cfg.header_footer_reserve;
    let scale_x = if width < cfg.min_width { cfg.min_width / width } else { 1.0 };
    let scale_y = if height < cfg.min_height { cfg.min_height / height } else { 1.0 };
    ScreenDimensions {
        width,
        height,
        scale: scale_x.max(scale_y),
    }
}

/// Read the current viewport size from the browser window.
pub fn viewport_dimensions(cfg: &LayoutConfig) -> Option<ScreenDimensions> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(compute_dimensions(w, h, cfg))
}

/// Height of the score/instructions panel stacked over the top of the
/// canvas, in CSS pixels. The play area starts below it.
pub const HUD_HEIGHT: f64 = 180.0;

/// Logical drawing surface. The canvas is `dims.width × dims.height` pixels;
/// content is laid out in a space `scale` times larger and drawn with a
/// `1/scale` transform. The play area is the part of it below the HUD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayArea {
    /// Logical y where the play area begins.
    pub top: f64,
    pub width: f64,
    pub height: f64,
    scale: f64,
}

impl PlayArea {
    pub fn new(dims: &ScreenDimensions) -> Self {
        let full_height = dims.height * dims.scale;
        let top = (HUD_HEIGHT * dims.scale).min(full_height);
        Self {
            top,
            width: dims.width * dims.scale,
            height: full_height - top,
            scale: dims.scale,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn target_center(&self, state: &GameState) -> (f64, f64) {
        (
            state.player_x / 100.0 * self.width,
            self.top + state.player_y / 100.0 * self.height,
        )
    }

    /// Canvas pixel offset -> logical coordinates.
    pub fn to_logical(&self, offset_x: f64, offset_y: f64) -> (f64, f64) {
        (offset_x * self.scale, offset_y * self.scale)
    }

    /// Clicks land anywhere on the filled target, pulse rings included.
    pub fn hits_target(&self, state: &GameState, x: f64, y: f64) -> bool {
        let (cx, cy) = self.target_center(state);
        let (dx, dy) = (x - cx, y - cy);
        let r = hit_radius(state);
        dx * dx + dy * dy <= r * r
    }
}

/// Outermost filled radius of the target as drawn for `state`.
pub fn hit_radius(state: &GameState) -> f64 {
    if state.is_playing {
        PULSE_RINGS[0].0
    } else {
        TARGET_RADIUS * PAUSED_SCALE
    }
}

/// What a click at canvas pixel `(offset_x, offset_y)` does, if anything.
pub fn click_action(
    state: &GameState,
    dims: &ScreenDimensions,
    offset_x: f64,
    offset_y: f64,
) -> Option<GameAction> {
    if !state.is_playing {
        return None;
    }
    let area = PlayArea::new(dims);
    let (x, y) = area.to_logical(offset_x, offset_y);
    area.hits_target(state, x, y).then_some(GameAction::TargetClicked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_viewport_is_unscaled() {
        let d = compute_dimensions(1920.0, 1080.0, &LayoutConfig::default());
        assert_eq!(
            d,
            ScreenDimensions {
                width: 1920.0,
                height: 980.0,
                scale: 1.0
            }
        );
    }

    #[test]
    fn test_small_viewport_takes_larger_axis_scale() {
        let d = compute_dimensions(500.0, 400.0, &LayoutConfig::default());
        assert_eq!(d.width, 500.0);
        assert_eq!(d.height, 300.0);
        // 800/500 = 1.6 horizontally, 600/300 = 2.0 vertically
        assert!((d.scale - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_width_below_minimum() {
        let d = compute_dimensions(640.0, 1000.0, &LayoutConfig::default());
        assert!((d.scale - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_custom_reserve() {
        let cfg = LayoutConfig {
            header_footer_reserve: 0.0,
            ..Default::default()
        };
        let d = compute_dimensions(1024.0, 768.0, &cfg);
        assert_eq!(d.height, 768.0);
        assert_eq!(d.scale, 1.0);
    }

    #[test]
    fn test_play_area_sits_below_hud() {
        let dims = compute_dimensions(1000.0, 700.0, &LayoutConfig::default());
        let area = PlayArea::new(&dims);
        assert_eq!(area.top, HUD_HEIGHT);
        assert_eq!(area.height, 600.0 - HUD_HEIGHT);
        let (_, y) = area.target_center(&GameState {
            player_y: 0.0,
            ..GameState::default()
        });
        assert_eq!(y, HUD_HEIGHT);
    }

    #[test]
    fn test_play_area_hit_test() {
        let dims = compute_dimensions(1000.0, 700.0, &LayoutConfig::default());
        let area = PlayArea::new(&dims);
        let state = GameState::default();
        let (cx, cy) = area.target_center(&state);
        assert_eq!((cx, cy), (500.0, HUD_HEIGHT + 210.0));
        assert!(area.hits_target(&state, cx, cy));
        assert!(area.hits_target(&state, cx + 20.0, cy + 20.0));
        assert!(!area.hits_target(&state, cx + 61.0, cy));
    }

    #[test]
    fn test_pulse_rings_are_clickable_while_playing() {
        let dims = compute_dimensions(1000.0, 700.0, &LayoutConfig::default());
        let area = PlayArea::new(&dims);
        let state = GameState::default();
        let (cx, cy) = area.target_center(&state);
        for d in [29.0, 35.0, 45.0, 59.0] {
            assert!(area.hits_target(&state, cx + d, cy), "distance {}", d);
        }
        assert_eq!(hit_radius(&state), 60.0);
        assert!((hit_radius(&state.toggle_pause()) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_action_while_playing() {
        let dims = compute_dimensions(1000.0, 700.0, &LayoutConfig::default());
        let state = GameState::default();
        let (cx, cy) = PlayArea::new(&dims).target_center(&state);
        assert_eq!(
            click_action(&state, &dims, cx + 45.0, cy),
            Some(GameAction::TargetClicked)
        );
        assert_eq!(click_action(&state, &dims, cx + 80.0, cy), None);
    }

    #[test]
    fn test_click_action_ignored_while_paused() {
        let dims = compute_dimensions(1000.0, 700.0, &LayoutConfig::default());
        let state = GameState::default().toggle_pause();
        let (cx, cy) = PlayArea::new(&dims).target_center(&state);
        assert_eq!(click_action(&state, &dims, cx, cy), None);
    }

    #[test]
    fn test_click_action_on_scaled_canvas() {
        // 500x300 canvas drawing a 1000x600 logical area
        let dims = compute_dimensions(500.0, 400.0, &LayoutConfig::default());
        let state = GameState::default();
        let area = PlayArea::new(&dims);
        let (cx, cy) = area.target_center(&state);
        let (px, py) = (cx / 2.0, cy / 2.0);
        assert_eq!(click_action(&state, &dims, px, py), Some(GameAction::TargetClicked));
        // 25 canvas pixels is 50 logical units: still on the outer ring
        assert_eq!(click_action(&state, &dims, px + 25.0, py), Some(GameAction::TargetClicked));
        // 35 canvas pixels is 70 logical units: off the target
        assert_eq!(click_action(&state, &dims, px + 35.0, py), None);
    }
}
