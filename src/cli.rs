// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "torus-viewer")]
#[command(about = "Spinning torus viewer", long_about = None)]
pub struct Cli {
    /// Drive the update loop at a fixed timestep without a window, then exit
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 300)]
    pub frames: u32,
}
