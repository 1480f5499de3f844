pub mod actions;
pub mod app;
mod cards;
mod comparison;
mod error_modal;
mod particles;
mod quiz_panel;
mod sections;
pub mod session;
pub mod theme;
mod top_bar;

pub use actions::{
    ActionQueue,
    Section,
    UiAction,
};
pub use app::GuideApp;
pub use session::Session;
pub use top_bar::APP_TITLE;
