//!
//! memegen -- Image macros in the shell
//!

             extern crate clap;
             extern crate exitcode;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
             extern crate memegen;
             extern crate slog;
             extern crate slog_scope;
             extern crate slog_stdlog;
             extern crate slog_term;

#[cfg(test)] #[macro_use] extern crate spectral;


mod args;
mod logging;


use std::env;
use std::io::{self, Write};
use std::process::exit;

use memegen::{MemeRenderer, RenderError, RenderOptions};

use args::{ArgsError, Options};


lazy_static! {
    /// Application / package name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_PKG_NAME").unwrap_or("memegen");

    /// Application version, as filled out by Cargo.
    static ref VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
}


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        let code = match e {
            ArgsError::Parse(ref e) if e.use_stderr() => exitcode::USAGE,
            ArgsError::Parse(_) => exitcode::OK,  // --help or --version
            _ => exitcode::USAGE,
        };
        let _ = print_args_error(e);
        exit(code);
    });

    let _guard = logging::init(opts.verbosity).unwrap_or_else(|e| {
        let _ = writeln!(&mut io::stderr(), "Failed to initialize logging: {}", e);
        exit(exitcode::SOFTWARE);
    });
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let renderer = create_renderer(&opts).unwrap_or_else(|e| {
        error!("Failed to set up the meme renderer: {}", e);
        exit(exitcode::CANTCREAT);
    });
    render(&renderer, &opts).unwrap_or_else(|e| {
        error!("Error while rendering image macro: {}", e);
        exit(exitcode::UNAVAILABLE);
    });
}

/// Print an error that may occur while parsing arguments.
fn print_args_error(e: ArgsError) -> io::Result<()> {
    match e {
        ArgsError::Parse(ref e) =>
            // In case of generic parse error,
            // message provided by the clap library will be the usage string.
            writeln!(&mut io::stderr(), "{}", e.message),
        e => {
            writeln!(&mut io::stderr(), "Failed to parse arguments: {}", e)
        },
    }
}


/// Create the renderer with the font & encoding options given on the command line.
fn create_renderer(opts: &Options) -> Result<MemeRenderer, memegen::RendererBuildError> {
    debug!("Loading font from {}...", opts.font_path.display());
    let mut builder = MemeRenderer::builder().font_file(&opts.font_path);
    if let Some(quality) = opts.jpeg_quality {
        builder = builder.jpeg_quality(quality);
    }
    builder.build()
}

/// Render the image macro described by `Options`.
fn render(renderer: &MemeRenderer, opts: &Options) -> Result<(), RenderError> {
    let options = RenderOptions::default().match_font_size(opts.match_font_size);
    let output = renderer.render_with(
        &opts.top, &opts.bottom, opts.background_path.as_path(), &opts.output_path, options)?;

    let (width, height) = output.dimensions();
    debug!("Wrote {} bytes of {}x{} {:?} image to {}",
        output.byte_count(), width, height, output.format(), output.path().display());
    Ok(())
}
