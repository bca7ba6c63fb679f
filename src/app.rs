use std::io;

use anyhow::Context;
use bytes::{BufMut, BytesMut};

use minigrep::{Pattern, search_input};

use crate::cli::Config;

/// Compiles the pattern, then searches standard input. `Ok(true)` means a line matched.
pub fn run(cfg: Config) -> anyhow::Result<bool> {
    let pattern = Pattern::new(&cfg.pattern)
        .with_context(|| format!("failed to compile pattern '{}'", cfg.pattern))?;

    let mut buffer = BytesMut::new().writer();
    io::copy(&mut io::stdin().lock(), &mut buffer).context("failed to read standard input")?;
    let input = buffer.into_inner().freeze();

    Ok(search_input(&String::from_utf8_lossy(&input), &pattern))
}
