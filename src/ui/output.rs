use crate::error::{ClasspathError, UserFriendlyError};
use crate::manifest::ManifestReport;
use console::{style, Emoji, Term};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static PACKAGE: Emoji = Emoji("📦 ", "+ ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Success, message),
                OutputMode::Json => self.print_json_message("success", message),
                OutputMode::Plain => println!("{}", message),
            }
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_error(message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    /// One line per classpath entry as it is discovered.
    pub fn entry(&self, entry: &str) {
        if !self.should_show_message(0) {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}classpath: {}", PACKAGE, style(entry).cyan());
                } else {
                    println!("classpath: {}", entry);
                }
            }
            OutputMode::Json => self.print_json_message("entry", entry),
            OutputMode::Plain => println!("classpath: {}", entry),
        }
    }

    /// Final confirmation naming the manifest file.
    pub fn written(&self, output_file: &str) {
        self.success(&format!("wrote {}", output_file));
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &ClasspathError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    eprintln!("{}", json_line(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    })));
                }
                OutputMode::Plain => {
                    eprintln!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    pub fn print_report(&self, report: &ManifestReport) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                self.info(&format!(
                    "{} entries joined with {:?}",
                    report.entry_count, report.delimiter
                ));
            }
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => {
                if self.verbose_level >= 1 {
                    println!("ENTRIES: {}", report.entry_count);
                }
            }
        }
    }

    /// Prints the joined classpath itself; used when nothing is written.
    pub fn print_classpath(&self, classpath: &str) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Json => {}
            _ => println!("{}", classpath),
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        if self.use_colors {
            let (emoji, styled) = match msg_type {
                MessageType::Success => (&CHECKMARK, style(message).green().bold()),
                MessageType::Error => (&CROSS, style(message).red().bold()),
                MessageType::Info => (&INFO, style(message).cyan()),
            };

            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, styled),
                _ => println!("{}{}", emoji, styled),
            }
        } else {
            match msg_type {
                MessageType::Error => eprintln!("✗ {}", message),
                MessageType::Info => println!("i {}", message),
                MessageType::Success => println!("{}", message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        println!("{}", json_line(&json_message(level, message)));
    }

    fn print_json_error(&self, message: &str) {
        eprintln!("{}", json_line(&json_message("error", message)));
    }
}

fn json_message(level: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "message",
        "level": level,
        "message": message,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })
}

fn json_line(obj: &serde_json::Value) -> String {
    serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Info,
}
