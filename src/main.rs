use gridglyph::cli::{self, CliResult};

fn main() {
    // Logging is installed inside process_cli, right after argument parsing.
    match cli::process_cli() {
        Ok(CliResult::Success) => {}
        Ok(CliResult::Exit(code)) => std::process::exit(code),
        Err(e) => {
            eprintln!("gridglyph: error: {e:#}");
            std::process::exit(1);
        }
    }
}
