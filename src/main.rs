use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use forum_export::env::EnvConfig;
use forum_export::{
    export_file, print_error_message, print_info_message, ExportOptions, FileExport,
    GoogleTranslator,
};

#[derive(Parser, Debug)]
#[command(
    name = "forum-export",
    version,
    about = "Create a translated CSV dataset from a forum comments HTML export."
)]
struct Cli {
    /// Path to the HTML file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: String,
}

fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            print_error_message(&format!("Configuration error: {error}"));
            process::exit(1);
        }
    };
    init_tracing(&config.log_level);

    let translator = match GoogleTranslator::from_env_config(&config) {
        Ok(translator) => translator,
        Err(error) => {
            print_error_message(&format!("An error occurred: {error}"));
            process::exit(1);
        }
    };

    match export_file(&cli.file, &ExportOptions::from(&config), &translator) {
        Ok(FileExport::Saved { path, .. }) => {
            print_info_message(&format!("CSV file saved as {path}"));
        }
        Ok(FileExport::MissingComments) => {
            print_info_message("The 'Comments' column is missing in the parsed data.");
        }
        Err(error) if error.is_input_error() => {
            print_error_message(&format!("Error reading file: {error}"));
            process::exit(1);
        }
        Err(error) => {
            print_error_message(&format!("An error occurred: {error}"));
            process::exit(1);
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
