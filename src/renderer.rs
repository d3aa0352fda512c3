//! Canvas 2D drawing for the play area.
//!
//! Capabilities of the context (currently just `roundRect`) are looked up once in
//! [`Renderer::new`]; draw calls use whatever was resolved there.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SetupError;
use crate::layout::{
    INNER_RINGS, PAUSED_SCALE, PULSE_RINGS, PlayArea, ScreenDimensions, TARGET_RADIUS,
};
use crate::model::GameState;

const BACKGROUND: &str = "#0d1117";
const AREA_FILL: &str = "#161b22";
const GRID_STROKE: &str = "#21262d";
const GRID_SIZE: f64 = 40.0;
const TARGET_ON: &str = "#00ff88";
const TARGET_OFF: &str = "#30363d";
const RING_ON: &str = "#ffffff";
const RING_OFF: &str = "#7d8590";
const PAUSED_ALPHA: f64 = 0.3;

/// How rounded rectangles get drawn, decided once per context.
enum RoundRect {
    Native(js_sys::Function),
    Plain,
}

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    round_rect: RoundRect,
    stats: Rc<FrameStats>,
}

/// What the last frame put on screen.
#[derive(Default)]
struct FrameStats {
    frames: Cell<u64>,
    last_target: Cell<(f64, f64)>,
}

impl FrameStats {
    fn record(&self, target_px: (f64, f64)) {
        self.last_target.set(target_px);
        self.frames.set(self.frames.get() + 1);
    }
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SetupError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SetupError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext2d)?;
        let round_rect = match js_sys::Reflect::get(&ctx, &JsValue::from_str("roundRect"))?
            .dyn_into::<js_sys::Function>()
        {
            Ok(f) => RoundRect::Native(f),
            Err(_) => {
                log::warn!("roundRect unsupported, drawing square corners");
                RoundRect::Plain
            }
        };
        Ok(Self {
            canvas,
            ctx,
            round_rect,
            stats: Rc::default(),
        })
    }

    /// Match the canvas backing store to the current dimensions.
    pub fn resize(&self, dims: &ScreenDimensions) {
        let w = dims.width.max(0.0) as u32;
        let h = dims.height.max(0.0) as u32;
        // Assigning width/height clears the canvas even when unchanged.
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            log::debug!("canvas resized to {}x{}", w, h);
        }
    }

    pub fn draw(&self, state: &GameState, area: &PlayArea) {
        if !self.canvas.is_connected() {
            return;
        }
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        let inv = 1.0 / area.scale();
        ctx.set_transform(inv, 0.0, 0.0, inv, 0.0, 0.0).ok();
        self.draw_background(area);
        let (cx, cy) = area.target_center(state);
        self.draw_target(state, (cx, cy));

        self.stats.record((cx * inv, cy * inv));
    }

    fn draw_background(&self, area: &PlayArea) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(AREA_FILL);
        ctx.begin_path();
        self.rounded_rect(0.0, area.top, area.width, area.height, 8.0);
        ctx.fill();

        ctx.set_stroke_style_str(GRID_STROKE);
        ctx.set_line_width(1.0);
        ctx.set_global_alpha(0.6);
        for x in grid_lines(area.width, GRID_SIZE) {
            ctx.begin_path();
            ctx.move_to(x, area.top);
            ctx.line_to(x, area.top + area.height);
            ctx.stroke();
        }
        for y in grid_lines(area.height, GRID_SIZE) {
            ctx.begin_path();
            ctx.move_to(0.0, area.top + y);
            ctx.line_to(area.width, area.top + y);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);
    }

    fn draw_target(&self, state: &GameState, (cx, cy): (f64, f64)) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(cx, cy).ok();
        if !state.is_playing {
            ctx.scale(PAUSED_SCALE, PAUSED_SCALE).ok();
            ctx.set_global_alpha(PAUSED_ALPHA);
        } else {
            ctx.set_fill_style_str(TARGET_ON);
            for (r, alpha) in PULSE_RINGS {
                ctx.set_global_alpha(alpha);
                self.disc(r);
                ctx.fill();
            }
            ctx.set_global_alpha(1.0);
        }

        let (body, ring) = if state.is_playing {
            (TARGET_ON, RING_ON)
        } else {
            (TARGET_OFF, RING_OFF)
        };
        ctx.set_fill_style_str(body);
        self.disc(TARGET_RADIUS);
        ctx.fill();

        ctx.set_stroke_style_str(ring);
        ctx.set_line_width(2.0);
        for r in INNER_RINGS {
            self.disc(r);
            ctx.stroke();
        }

        ctx.set_fill_style_str(ring);
        self.disc(3.0);
        ctx.fill();
        ctx.restore();
    }

    fn disc(&self, r: f64) {
        self.ctx.begin_path();
        self.ctx.arc(0.0, 0.0, r, 0.0, std::f64::consts::TAU).ok();
    }

    fn rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        match &self.round_rect {
            RoundRect::Native(f) => {
                let args = js_sys::Array::new();
                for v in [x, y, w, h, radius] {
                    args.push(&JsValue::from_f64(v));
                }
                if let Err(e) = f.apply(&self.ctx, &args) {
                    log::warn!("roundRect failed: {:?}", e);
                    self.ctx.rect(x, y, w, h);
                }
            }
            RoundRect::Plain => self.ctx.rect(x, y, w, h),
        }
    }
}

/// Grid line offsets `0, step, 2*step, ...` strictly below `extent`.
pub fn grid_lines(extent: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && extent > 0.0 {
        (extent / step).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |i| i as f64 * step)
}

/// Read-only view of the live renderer, handed to test drivers through
/// `App`'s `on_renderer_ready` prop.
#[derive(Clone)]
pub struct RendererHandle(Rc<FrameStats>);

impl RendererHandle {
    pub fn new(renderer: &Renderer) -> Self {
        Self(renderer.stats.clone())
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.0.frames.get()
    }

    /// Target center of the last frame, in canvas pixels.
    pub fn target_position(&self) -> (f64, f64) {
        self.0.last_target.get()
    }
}

impl PartialEq for RendererHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
