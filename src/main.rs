//! # `dynform`
//!
//! `dynform` renders an HTML form from a JSON Schema document and a companion
//! UI-configuration document, and validates submitted form data against the
//! same schema.
//!
//! ## Usage
//!
//! **Render the fields of the configured form:**
//! ```sh
//! dynform --config dynform.yaml
//! ```
//!
//! **Render a complete page:**
//! ```sh
//! dynform --schema forms/userSchema.json --ui-config forms/userUIConfig.json --page
//! ```
//!
//! **Validate a submission:**
//! ```sh
//! dynform --submit --field username=jane --field interests=music --field interests=art
//! dynform --submit --form-data 'username=jane&age=30' --output-format json
//! ```
//!
//! Exit codes: 0 success, 1 configuration error, 2 invalid form document,
//! 3 rejected submission, 4 missing file.

use clap::Parser as _;
use dynform::cli::Args;
use dynform::error::FormError;
use dynform::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Machine-readable output keeps the log quiet
    let log_level = if args.submit && args.output_format.eq_ignore_ascii_case("json") {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match dynform::run(&args, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<FormError>()
                    .map_or(1, FormError::exit_code),
            );
        }
    }
}
