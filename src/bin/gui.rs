use clap::Parser;
use fractal_viewer::{ConfigArgs, RunGuiCommand};

#[derive(Debug, Parser)]
#[command(name = "gui", version, about = "Interactive escape-time fractal explorer")]
struct GuiArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = GuiArgs::parse().config.load()?;
    RunGuiCommand::new(config).execute()?;

    Ok(())
}
