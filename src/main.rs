mod app;
mod cli;

use std::env;
use std::process;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Diagnostics go to stderr, and only when RUST_LOG is set.
fn init_tracing() {
    if env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

// Usage: echo <input_text> | your_program.sh -E <pattern>
fn main() {
    init_tracing();

    let cfg = match cli::parse_args(env::args().collect()) {
        Ok(cfg) => cfg,
        Err(err) => {
            println!("{err}");
            process::exit(err.exit_code());
        }
    };

    let code = match app::run(cfg) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };
    process::exit(code);
}
