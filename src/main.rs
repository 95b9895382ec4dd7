use clap::Parser;
use classpath_writer::{logging, Cli, ClasspathWriter};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Usage errors exit here with clap's status before any filesystem work
    let cli = Cli::parse();

    logging::init_logging(cli.verbosity_level(), cli.quiet);

    let writer = ClasspathWriter::from_cli(&cli);

    let result = if cli.dry_run {
        writer.dry_run()
    } else {
        writer.write_manifest()
    };

    match result {
        Ok(_) => 0,
        Err(e) => {
            writer.handle_error(&e);
            e.exit_code()
        }
    }
}
