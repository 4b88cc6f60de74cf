#![forbid(unsafe_code)]

//! `loom` binary entry point.

use std::io;
use std::process;

use loom_demo::cli;
use loom_demo::terminal;

fn main() {
    terminal::init_tracing();
    let opts = cli::Opts::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = loom_demo::run(&opts, terminal::detect_profile(), &mut out) {
        eprintln!("loom: {err}");
        let code = match err {
            loom::Error::UnknownSwatch(_) => {
                eprintln!("Run with --palette to list the available colors.");
                2
            }
            _ => 1,
        };
        process::exit(code);
    }
}
