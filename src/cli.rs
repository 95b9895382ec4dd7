use crate::config::{Config, DEFAULT_DELIMITER};
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "write-classpath")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Write a classpath manifest listing every file under a library directory")]
#[command(
    long_about = "Recursively lists the files under LIB_DIR, strips the ROOT_DIR prefix from \
                  each path, joins them with a delimiter and writes the result as a single \
                  line to OUTPUT_FILE, creating parent directories as needed."
)]
#[command(after_help = "EXAMPLES:\n  \
    write-classpath build/deb build/deb/usr/share/app/lib build/deb/usr/share/app/classpath-arg.txt\n  \
    write-classpath /opt/app /opt/app/lib /opt/app/cp.txt --delimiter ';'\n  \
    write-classpath . lib cp.txt --sort --dry-run")]
pub struct Cli {
    /// Prefix stripped from every discovered path
    pub root_dir: PathBuf,

    /// Directory to walk recursively
    pub lib_dir: PathBuf,

    /// Manifest file to write
    pub output_file: PathBuf,

    /// Separator placed between classpath entries
    #[arg(long, default_value = DEFAULT_DELIMITER, allow_hyphen_values = true)]
    pub delimiter: String,

    /// Sort entries instead of keeping directory-walk order
    #[arg(long)]
    pub sort: bool,

    /// Output format for console messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Walk and print the classpath without writing the manifest
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

impl Cli {
    pub fn to_config(&self) -> Config {
        Config::new(&self.root_dir, &self.lib_dir, &self.output_file)
            .with_delimiter(self.delimiter.clone())
            .with_sorted(self.sort)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
