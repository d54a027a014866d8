use crate::config::DEFAULT_CONFIG_PATH;
use crate::error::FormError;
use crate::submit::Submission;
use clap::Parser;

/// Command-line arguments for dynform
#[derive(Parser, Debug, Clone)]
#[command(name = "dynform")]
#[command(about = "A CLI tool for rendering HTML forms from JSON Schema and validating submissions")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_PATH,
        env = "DYNFORM_CONFIG"
    )]
    pub config: String,

    /// Schema document (overrides the configuration file)
    #[arg(long, value_name = "PATH")]
    pub schema: Option<String>,

    /// UI-configuration document (overrides the configuration file)
    #[arg(long = "ui-config", value_name = "PATH")]
    pub ui_config: Option<String>,

    /// Render a complete HTML page instead of the fields fragment
    #[arg(long, conflicts_with = "submit")]
    pub page: bool,

    /// Validate submitted data instead of rendering the form
    #[arg(long)]
    pub submit: bool,

    /// Submitted field in KEY=VALUE format (can be specified multiple times)
    /// Multiple values with the same key form a multi-valued field
    #[arg(long = "field", value_name = "KEY=VALUE", requires = "submit")]
    pub fields: Vec<String>,

    /// URL-encoded form data such as "a=1&b=2" (can be specified multiple times)
    #[arg(long = "form-data", value_name = "DATA", requires = "submit")]
    pub form_data: Vec<String>,

    /// Output format for submission results: html or json
    #[arg(
        long = "output-format",
        value_name = "FORMAT",
        default_value = "html",
        requires = "submit"
    )]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Collect `--field` and `--form-data` arguments into a submission
    pub fn submission(&self) -> anyhow::Result<Submission> {
        parse_field_args(&self.fields, &self.form_data)
    }
}

/// Parse submitted data from CLI into a `Submission`
/// Handles both --field and --form-data flags
/// Repeated keys accumulate values in order
fn parse_field_args(field_args: &[String], form_data_args: &[String]) -> anyhow::Result<Submission> {
    let mut submission = Submission::new();

    for arg in field_args {
        let (key, value) = parse_key_value(arg)?;
        submission.push(key, value);
    }

    for data in form_data_args {
        submission.extend_urlencoded(data)?;
    }

    Ok(submission)
}

/// Parse KEY=VALUE string
fn parse_key_value(arg: &str) -> anyhow::Result<(String, String)> {
    let Some((key, value)) = arg.split_once('=') else {
        return Err(FormError::configuration(format!(
            "Invalid field format '{arg}'. Expected KEY=VALUE"
        ))
        .into());
    };
    if key.is_empty() {
        return Err(FormError::configuration(format!(
            "Invalid field format '{arg}'. Field name cannot be empty"
        ))
        .into());
    }
    return Ok((key.to_owned(), value.to_owned()));
}
