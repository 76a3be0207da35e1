//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = roamsignal_cli::run() {
        eprintln!("roamsignal: {err}");
        std::process::exit(1);
    }
}
