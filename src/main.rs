mod archive;
mod args;
mod bundle;
mod context;
mod error;
mod manifest;
mod platform;
mod result;
mod staging;
mod utils;

use args::Args;
use context::Context;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args { executable, version } = Args::parse();

    let ctx = Context::current()?;

    cliclack::intro("sur artifact bundle")?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Packaging {} as version {}...", executable.display(), version));

    let archive_path = match bundle::create_bundle(&ctx, &executable, &version) {
        Ok(path) => {
            spinner.stop("Bundle packaged");
            path
        }
        Err(e) => {
            spinner.error("Failed to create artifact bundle");
            return Err(e);
        }
    };

    cliclack::outro(format!("Artifact bundle created: {}", archive_path.display()))?;
    Ok(())
}
