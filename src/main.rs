use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::info;
use wakectl::{
    install_signal_handler, telemetry, Jiggler, ShutdownFlag, SystemSleeper, VirtualPointer,
    DEFAULT_AMPLITUDE, DEFAULT_INTERVAL,
};

#[derive(Parser)]
#[command(author, version, about = "Keep the system awake by periodically nudging a virtual pointer")]
struct Cli {
    /// Seconds between pointer moves
    #[arg(long, default_value_t = DEFAULT_INTERVAL.as_secs())]
    interval: u64,
    /// Distance of the alternate position from the origin, in device units
    #[arg(long, default_value_t = DEFAULT_AMPLITUDE)]
    amplitude: i32,
    /// Log each pointer move
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(if cli.verbose { "debug" } else { "info" });

    let shutdown = ShutdownFlag::new();
    install_signal_handler(shutdown.clone())?;

    // Capability acquisition is the one fatal startup error: without
    // /dev/uinput access there is nothing this process can do.
    let pointer = VirtualPointer::new()?;
    info!(
        interval_secs = cli.interval,
        amplitude = cli.amplitude,
        "virtual pointer ready, keeping system awake"
    );

    let sleeper = SystemSleeper::new(shutdown.clone());
    let mut jiggler = Jiggler::new(
        pointer,
        sleeper,
        shutdown,
        Duration::from_secs(cli.interval),
        cli.amplitude,
    );
    jiggler.run()?;

    info!("shutdown complete");
    Ok(())
}
