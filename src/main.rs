//! The CLI interface for restoggle
//!
//! Switches every active display at 1920x1080 to 3840x2160 and vice versa.
use color_eyre::eyre::Result;
use structopt::StructOpt;

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "restoggle",
    about = "Toggles the resolution of all active displays between 1080p and 2160p."
)]
struct Opts {
    /// Output debug info
    #[structopt(short, long)]
    verbose: bool,
}

/// Entry point for `restoggle`.
fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    )
    .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    run()
}

#[cfg(target_os = "windows")]
fn run() -> Result<()> {
    use restoggle::{Toggler, WinsafeBackend};

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    // per-display failures are reported on stderr and never change the exit code
    let toggler = Toggler::new(WinsafeBackend::new());
    let outcomes = toggler.run(&mut stdout.lock(), &mut stderr.lock());
    log::debug!("Processed {} display(s)", outcomes.len());

    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn run() -> Result<()> {
    Err(color_eyre::eyre::eyre!(
        "Changing display resolutions is only supported on Windows"
    ))
}
