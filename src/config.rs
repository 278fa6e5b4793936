use crate::models::Algorithm;
use iced::Size;

/// Built-in window defaults. Nothing is read from or written to disk.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub title: &'static str,
    pub window_size: Size,
    pub resizable: bool,
    pub default_algorithm: Algorithm,
    /// Width at which the path and result labels wrap.
    pub wrap_width: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Checksum Checker",
            window_size: Size::new(560.0, 360.0),
            resizable: false,
            default_algorithm: Algorithm::default(),
            wrap_width: 400.0,
        }
    }
}
