pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::App;
