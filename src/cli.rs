//! Command-line interface implementation for spar.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::attribute::InvalidAttributePolicy;

/// Command-line arguments structure for spar.
#[derive(Parser, Debug)]
#[command(author, version, about = "spar: CRUD resource scaffolding generator", long_about = None)]
pub struct Args {
    /// Name of the resource to generate, e.g. `user`
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Attribute declarations in `name[:type]` notation, e.g. `email:email`
    #[arg(value_name = "ATTRIBUTES")]
    pub attributes: Vec<String>,

    /// Directory the generated files are placed under [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Load templates from this directory instead of the built-in set
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// How to treat malformed attribute declarations [default: warn]
    #[arg(long, value_enum, value_name = "POLICY")]
    pub invalid_attributes: Option<InvalidAttributePolicy>,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    pub force: bool,

    /// Print what would be written instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The flat token list handed to the generator: resource first.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.resource.clone())
            .chain(self.attributes.iter().cloned())
            .collect()
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
