pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod errors;
pub mod input;
pub mod presenters;
pub mod storage;

pub use config::explorer_config::ExplorerConfig;
pub use controllers::cli::export_palette::ExportPaletteCommand;
pub use controllers::cli::render::RenderCommand;
pub use controllers::interactive::session::ExplorerSession;
pub use errors::{ResourceError, StartupError};
pub use input::cli::args::{Cli, Command, ConfigArgs};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
