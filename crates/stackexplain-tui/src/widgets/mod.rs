//! Custom widget components

mod error_input;
mod explanation;
mod header;
mod model_selector;
mod status_bar;

pub use error_input::ErrorInputView;
pub use explanation::{ExplanationPanel, NO_LINKS_MESSAGE};
pub use header::MainHeader;
pub use model_selector::ModelSelector;
pub use status_bar::{StatusBar, PENDING_TEXT};
