//! UI-Komponenten: Toolbar, Status-Bar, Karten-Canvas, Input-Handling.

pub mod canvas;
pub mod icons;
pub mod input;
pub mod status;
pub mod toolbar;

pub use canvas::draw_map;
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
