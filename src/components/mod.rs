pub mod app;
pub mod error_fallback;
pub mod footer;
pub mod header;
pub mod pause_overlay;
pub mod play_area;
pub mod score_panel;

pub use app::App;
