//! UI-Komponenten: Toolbar, Plot-Panel, Status-Bar und Dialoge.

pub mod fit_dialog;
pub mod input;
pub mod plot_panel;
pub mod status;
pub mod toolbar;

pub use fit_dialog::show_fit_selector;
pub use plot_panel::render_plot_panel;
pub use status::render_status_bar;
pub use toolbar::{render_toolbar, ComposeState};
