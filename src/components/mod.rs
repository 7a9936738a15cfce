pub mod app;
pub mod controls_panel;
pub mod history_panel;
pub mod settings_modal;
pub mod signal_panel;
pub mod swipe_pad;

pub use app::App;
