pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{Config, TraversalOrder, DEFAULT_DELIMITER};
pub use error::{ClasspathError, Result, UserFriendlyError};

// Core functionality re-exports
pub use manifest::{Classpath, ManifestReport, ManifestWriter, LINE_ENDING};
pub use scanner::{normalize_path, LibScanner};
pub use ui::{OutputFormatter, OutputMode};

use tracing::info;

/// Main library interface: walk, strip, join, write.
pub struct ClasspathWriter {
    config: Config,
    output_formatter: OutputFormatter,
}

impl ClasspathWriter {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
        }
    }

    /// Create a ClasspathWriter from parsed CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Self {
        Self::new(
            cli_args.to_config(),
            cli_args.output_format.into(),
            cli_args.verbosity_level(),
            cli_args.quiet,
        )
    }

    /// Walks the library directory and collects the stripped entries in order.
    ///
    /// One entry line is printed per discovered file.
    pub fn build_classpath(&self) -> Result<Classpath> {
        let scanner = LibScanner::new(&self.config.lib_dir);
        let mut classpath = Classpath::new(&self.config.root_dir);

        scanner.visit_files(|path| {
            let entry = classpath.push(path);
            self.output_formatter.entry(entry);
        })?;

        if self.config.order == TraversalOrder::Sorted {
            classpath.sort();
        }

        Ok(classpath)
    }

    /// Builds the classpath and writes the manifest file.
    pub fn write_manifest(&self) -> Result<ManifestReport> {
        let classpath = self.build_classpath()?;
        let mut report = ManifestReport::new(&self.config, classpath);

        let writer = ManifestWriter::new(&self.config.output_file);
        let bytes = writer.write_line(&report.classpath)?;
        report.mark_written(bytes);

        info!(
            output_file = %self.config.output_file.display(),
            entries = report.entry_count,
            "classpath manifest complete"
        );
        self.output_formatter
            .written(&self.config.output_file.display().to_string());
        self.output_formatter.print_report(&report);

        Ok(report)
    }

    /// Builds the classpath and prints it without touching the output file.
    pub fn dry_run(&self) -> Result<ManifestReport> {
        let classpath = self.build_classpath()?;
        let report = ManifestReport::new(&self.config, classpath);

        self.output_formatter.info(&format!(
            "dry run: {} would not be written",
            self.config.output_file.display()
        ));
        self.output_formatter.print_classpath(&report.classpath);
        self.output_formatter.print_report(&report);

        Ok(report)
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &ClasspathError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Writes a manifest with default console settings.
pub fn write_classpath(config: Config) -> Result<ManifestReport> {
    ClasspathWriter::new(config, OutputMode::Plain, 0, true).write_manifest()
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
