//! `dynform` - render HTML forms from JSON Schema and validate submissions
//!
//! A form is described by two documents: a schema document declaring field
//! types and constraints, and a UI configuration declaring how each field is
//! presented. This library renders the form markup from both and validates
//! submitted data against the schema, producing either typed values or
//! field-keyed error messages.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod render;
pub mod submit;
pub mod system;

use anyhow::Result;
use cli::{Args, OutputFormat, execute_render, execute_submit};
use error::FormError;
use submit::SubmitOutcome;
use system::System;

/// Main entry point for the dynform library
///
/// Writes the rendered form or the submission result to stdout. A rejected
/// submission is reported as a [`FormError::Validation`] after its error
/// output has been written.
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    if !args.submit {
        print!("{}", execute_render(args, system)?);
        return Ok(());
    }

    let format = args
        .output_format
        .parse::<OutputFormat>()
        .map_err(FormError::configuration)?;

    let (output, outcome) = execute_submit(args, system, format)?;

    // Output to stdout (not using logging)
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    match outcome {
        SubmitOutcome::Accepted(_) => Ok(()),
        SubmitOutcome::Rejected(errors) => Err(FormError::validation(errors.to_string()).into()),
    }
}
