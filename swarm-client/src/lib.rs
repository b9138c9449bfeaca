pub mod driver;
pub mod render;
pub mod settings;

pub use driver::{apply_update, forward_updates, run, DriverOptions, RunSummary};
pub use render::{Frame, Renderer, StatusRenderer};
