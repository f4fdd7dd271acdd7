use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", "Error".red(), e);
        std::process::exit(1);
    }
}
