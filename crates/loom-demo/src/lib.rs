#![forbid(unsafe_code)]

//! Library side of the `loom` binary: argument parsing, terminal output,
//! and the top-level [`run`] entry point.

pub mod ansi;
pub mod cli;
pub mod render;
pub mod terminal;

use std::io::Write;

use loom::{ColorProfile, Design, Message, Pattern, swatch_named};

use crate::cli::{Opts, OutputFormat};

/// Build the design described by `opts`.
///
/// Color names are resolved against the catalog; the message is capped at
/// the bead limit before it is stored.
pub fn design_from_opts(opts: &Opts) -> loom::Result<Design> {
    let pattern = opts
        .colors
        .iter()
        .map(|name| swatch_named(name).cloned())
        .collect::<loom::Result<Pattern>>()?;
    let message = Message::capped(&opts.message);
    tracing::debug!(
        colors = pattern.len(),
        message = %message,
        "design assembled"
    );
    Ok(Design::new()
        .pattern(pattern)
        .message(message.as_str())
        .note(opts.note.as_str()))
}

/// Execute one invocation, writing everything to `out`.
///
/// `profile` is only consulted when `opts` does not name one.
pub fn run<W: Write>(opts: &Opts, profile: ColorProfile, out: &mut W) -> loom::Result<()> {
    let profile = opts.profile.unwrap_or(profile);
    if opts.list_palette {
        render::write_palette(out, profile)?;
        return Ok(());
    }

    let design = design_from_opts(opts)?;
    match opts.format {
        OutputFormat::Text => render::write_design(out, &design, profile)?,
        OutputFormat::Json => render::write_json(out, &design)?,
    }
    out.flush()?;
    Ok(())
}
