use clap::Parser;
use fractal_viewer::{Cli, Command, ExportPaletteCommand, PpmFilePresenter, RenderCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    match Cli::parse().command {
        Command::Render { config, output } => {
            let config = config.load()?;
            let command = RenderCommand::new(config, PpmFilePresenter::new());

            command.execute(&output)?;
        }
        Command::Palette { config, output } => {
            let config = config.load()?;
            let command = ExportPaletteCommand::new(config.palette);

            command.execute(&output)?;
        }
    }

    Ok(())
}
