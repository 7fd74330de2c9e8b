pub mod app;
pub mod confetti;
pub mod guess_buttons;
pub mod guess_input;
pub mod load_error;
pub mod map_controls;
pub mod map_view;
pub mod settings_modal;
pub mod status_bar;

pub use app::{App, AppProps};
pub use load_error::{LoadError, LoadErrorProps};
