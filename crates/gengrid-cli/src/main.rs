//! gengrid CLI
//!
//! Writes the XML description of a rectangular grid to stdout.

use clap::Parser;
use gengrid_core::logging_facility;
use gengrid_core::ExError;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "gengrid")]
#[command(about = "Generate an XML grid where every cell holds the same type", long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,

    /// Diagnostic output on stderr
    #[arg(long, value_enum, default_value_t = LogProfile::Quiet)]
    log_profile: LogProfile,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LogProfile {
    Quiet,
    Development,
    Production,
}

impl From<LogProfile> for logging_facility::Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Quiet => logging_facility::Profile::Quiet,
            LogProfile::Development => logging_facility::Profile::Development,
            LogProfile::Production => logging_facility::Profile::Production,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    if let Err(e) = commands::generate::execute(cli.generate) {
        let ex_err: ExError = e.into();
        eprintln!("Error: {}", ex_err);
        std::process::exit(ex_err.exit_code());
    }
}
