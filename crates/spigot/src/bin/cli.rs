use clap::Parser;
use spigot::{Args, Runner, StopReason, runtime};
use tracing::info;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = args.validate() {
        runtime::fault(e);
    }

    // Initialize logging; stdout is reserved for digits
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match args.to_run_config() {
        Ok(config) => config,
        Err(e) => runtime::fault(e),
    };

    info!("=== Creating Generator ===");
    let runner = match Runner::new(config) {
        Ok(runner) => runner,
        Err(e) => runtime::fault(e),
    };

    info!("=== Running Generator ===");
    let outcome = match runner.run() {
        Ok(outcome) => outcome,
        Err(e) => runtime::fault(e),
    };

    info!("=== Generation Complete ===");
    info!("Stop reason: {:?}", outcome.stop_reason);
    info!("Groups: {}", outcome.groups.len());
    info!("Elapsed: {:?}", outcome.elapsed);

    match outcome.stop_reason {
        StopReason::Completed => {}
        StopReason::Timeout => runtime::fault("timeout reached before all groups were generated"),
        StopReason::Cancelled => runtime::fault("generation cancelled"),
    }

    if let Err(e) = runtime::emit(&outcome.render()) {
        eprintln!("Failed to write digits: {}", e);
        runtime::exit(runtime::EXIT_FAULT);
    }

    runtime::exit(runtime::EXIT_SUCCESS);
}
