//! Module for handling command line arguments.

use std::env;
use std::error::Error;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use clap::{self, AppSettings, Arg, ArgMatches};

use super::{NAME, VERSION};


/// Font used when no --font is given, relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "data/fonts/DejaVuSans-Bold.ttf";


/// Parse command line arguments and return `Options` object.
#[inline]
pub fn parse() -> Result<Options, ArgsError> {
    parse_from_argv(env::args_os())
}

/// Parse application options from given array of arguments
/// (*all* arguments, including binary name).
#[inline]
pub fn parse_from_argv<I, T>(argv: I) -> Result<Options, ArgsError>
    where I: IntoIterator<Item=T>, T: Clone + Into<OsString>
{
    let parser = create_parser();
    let matches = parser.get_matches_from_safe(argv)?;
    Options::try_from(matches)
}


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// Text of the top caption.
    pub top: String,
    /// Text of the bottom caption.
    pub bottom: String,

    /// Image to put the captions on.
    pub background_path: PathBuf,
    /// Path to write the finished image macro to.
    pub output_path: PathBuf,
    /// Font file to render the captions with.
    pub font_path: PathBuf,

    /// Whether both captions should use the same (smaller) font size.
    pub match_font_size: bool,
    /// Quality of the JPEG output, if different than the default.
    pub jpeg_quality: Option<u8>,
}

impl<'a> TryFrom<ArgMatches<'a>> for Options {
    type Error = ArgsError;

    fn try_from(matches: ArgMatches<'a>) -> Result<Self, Self::Error> {
        let verbose_count = matches.occurrences_of(OPT_VERBOSE) as isize;
        let quiet_count = matches.occurrences_of(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        // Captions are kept verbatim; spaces may matter for splitting.
        let top = matches.value_of(ARG_TOP).unwrap_or("").to_owned();
        let bottom = matches.value_of(ARG_BOTTOM).unwrap_or("").to_owned();

        let background_path = PathBuf::from(matches.value_of(OPT_BACKGROUND).unwrap_or("").trim());
        let output_path = PathBuf::from(matches.value_of(OPT_OUTPUT).unwrap_or("").trim());
        let font_path = PathBuf::from(
            matches.value_of(OPT_FONT).map(|p| p.trim()).unwrap_or(DEFAULT_FONT_PATH));

        let match_font_size = matches.is_present(OPT_MATCH_FONT_SIZE);
        let jpeg_quality = match matches.value_of(OPT_JPEG_QUALITY) {
            Some(q) => Some(parse_jpeg_quality(q)?),
            None => None,
        };

        Ok(Options{verbosity, top, bottom,
                   background_path, output_path, font_path,
                   match_font_size, jpeg_quality})
    }
}

fn parse_jpeg_quality(value: &str) -> Result<u8, ArgsError> {
    match value.trim().parse::<u8>() {
        Ok(q) if (1..=100).contains(&q) => Ok(q),
        _ => Err(ArgsError::JpegQuality(value.to_owned())),
    }
}


/// Error that can occur while parsing of command line arguments.
#[derive(Debug)]
pub enum ArgsError {
    /// General error when parsing the arguments.
    Parse(clap::Error),
    /// Value of --jpeg-quality isn't a number between 1 and 100.
    JpegQuality(String),
}

impl From<clap::Error> for ArgsError {
    fn from(e: clap::Error) -> Self {
        ArgsError::Parse(e)
    }
}

impl Error for ArgsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ArgsError::Parse(ref e) => Some(e),
            ArgsError::JpegQuality(_) => None,
        }
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArgsError::Parse(ref e) => write!(fmt, "invalid arguments: {}", e),
            ArgsError::JpegQuality(ref q) => {
                write!(fmt, "invalid JPEG quality {:?} (expected 1-100)", q)
            }
        }
    }
}


// Parser definition

/// Type of the argument parser object
/// (which is called an "App" in clap's silly nomenclature).
type Parser<'p> = clap::App<'p, 'p>;


lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

const ARG_TOP: &str = "top";
const ARG_BOTTOM: &str = "bottom";
const OPT_BACKGROUND: &str = "background";
const OPT_OUTPUT: &str = "output";
const OPT_FONT: &str = "font";
const OPT_MATCH_FONT_SIZE: &str = "match-font-size";
const OPT_JPEG_QUALITY: &str = "jpeg-quality";
const OPT_VERBOSE: &str = "verbose";
const OPT_QUIET: &str = "quiet";


/// Create the parser for application's command line.
fn create_parser<'p>() -> Parser<'p> {
    let mut parser = Parser::new(*NAME);
    if let Some(version) = *VERSION {
        parser = parser.version(version);
    }
    parser
        .about(*ABOUT)

        .setting(AppSettings::StrictUtf8)

        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DontCollapseArgsInUsage)
        .setting(AppSettings::DeriveDisplayOrder)

        // Captions.
        .arg(Arg::with_name(ARG_TOP)
            .value_name("TOP")
            .required(true)
            .index(1)
            .help("Text of the top caption")
            .long_help(concat!(
                "Text of the top caption.\n\n",
                "Text too wide for the image is split in two lines at the space ",
                "nearest to its middle. Pass an empty string to leave it out.")))
        .arg(Arg::with_name(ARG_BOTTOM)
            .value_name("BOTTOM")
            .required(true)
            .index(2)
            .help("Text of the bottom caption"))

        // Input & output.
        .arg(Arg::with_name(OPT_BACKGROUND)
            .long("background").short("b")
            .value_name("PATH")
            .takes_value(true)
            .required(true)
            .help("Background image to caption"))
        .arg(Arg::with_name(OPT_OUTPUT)
            .long("output").short("o")
            .value_name("PATH")
            .takes_value(true)
            .required(true)
            .help("File to write the rendered image to")
            .long_help(concat!(
                "What file should the final image be written to.\n\n",
                "Files with the .png extension are written as PNG, anything else as JPEG. ",
                "Missing directories on the way are created.")))

        // Rendering flags.
        .arg(Arg::with_name(OPT_FONT)
            .long("font").short("f")
            .value_name("PATH")
            .takes_value(true)
            .help("TrueType font file to render the captions with")
            .long_help(concat!(
                "TrueType font file to render the captions with.\n\n",
                "Defaults to data/fonts/DejaVuSans-Bold.ttf under the current directory.")))
        .arg(Arg::with_name(OPT_MATCH_FONT_SIZE)
            .long("match-font-size").short("m")
            .help("Render both captions with the same font size"))
        .arg(Arg::with_name(OPT_JPEG_QUALITY)
            .long("jpeg-quality")
            .value_name("QUALITY")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("Quality of the JPEG output (1-100)"))

        // Verbosity flags.
        .arg(Arg::with_name(OPT_VERBOSE)
            .long("verbose").short("v")
            .multiple(true)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::with_name(OPT_QUIET)
            .long("quiet").short("q")
            .multiple(true)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))

        .help_short("H")
        .version_short("V")
}


#[cfg(test)]
mod tests {
    use std::path::Path;
    use spectral::prelude::*;
    use super::{parse_from_argv, ArgsError, DEFAULT_FONT_PATH};
    use crate::NAME;

    #[test]
    fn no_args() {
        assert_that!(parse_from_argv(Vec::<&str>::new())).is_err();
        assert_that!(parse_from_argv(vec![*NAME])).is_err();
    }

    #[test]
    fn missing_paths() {
        assert_that!(parse_from_argv(vec![*NAME, "TOP", "BOTTOM"])).is_err();
        assert_that!(parse_from_argv(vec![*NAME, "-b", "bg.png", "TOP", "BOTTOM"])).is_err();
        assert_that!(parse_from_argv(vec![*NAME, "-o", "out.jpg", "TOP", "BOTTOM"])).is_err();
    }

    #[test]
    fn missing_caption() {
        assert_that!(parse_from_argv(vec![*NAME, "-b", "bg.png", "-o", "out.jpg", "TOP"]))
            .is_err();
    }

    #[test]
    fn minimal() {
        let opts = parse_from_argv(
            vec![*NAME, "-b", "bg.png", "-o", "out.jpg", "TOP TEXT", "BOTTOM TEXT"]).unwrap();
        assert_eq!("TOP TEXT", opts.top);
        assert_eq!("BOTTOM TEXT", opts.bottom);
        assert_eq!(Path::new("bg.png"), opts.background_path);
        assert_eq!(Path::new("out.jpg"), opts.output_path);
        assert_eq!(Path::new(DEFAULT_FONT_PATH), opts.font_path);
        assert_eq!(0, opts.verbosity);
        assert!(!opts.match_font_size);
        assert_eq!(None, opts.jpeg_quality);
    }

    #[test]
    fn empty_captions() {
        let opts = parse_from_argv(
            vec![*NAME, "--background", "bg.png", "--output", "out.png", "", ""]).unwrap();
        assert_eq!("", opts.top);
        assert_eq!("", opts.bottom);
    }

    #[test]
    fn all_options() {
        let opts = parse_from_argv(vec![
            *NAME, "-vv", "--font", "Impact.ttf", "--match-font-size", "--jpeg-quality", "70",
            "-b", "zoidberg.jpg", "-o", "memes/why-not.jpg", "WHY NOT", "ZOIDBERG?"]).unwrap();
        assert_eq!(2, opts.verbosity);
        assert_eq!(Path::new("Impact.ttf"), opts.font_path);
        assert!(opts.match_font_size);
        assert_eq!(Some(70), opts.jpeg_quality);
        assert_eq!(Path::new("memes/why-not.jpg"), opts.output_path);
    }

    #[test]
    fn quiet() {
        let opts = parse_from_argv(
            vec![*NAME, "-qqq", "-b", "bg.png", "-o", "out.jpg", "TOP", "BOTTOM"]).unwrap();
        assert_eq!(-3, opts.verbosity);
        assert_that!(parse_from_argv(
            vec![*NAME, "-v", "-q", "-b", "bg.png", "-o", "out.jpg", "TOP", "BOTTOM"])).is_err();
    }

    #[test]
    fn invalid_jpeg_quality() {
        for quality in &["0", "101", "-5", "high"] {
            let result = parse_from_argv(vec![
                *NAME, "--jpeg-quality", quality, "-b", "bg.png", "-o", "out.jpg", "A", "B"]);
            match result {
                Err(ArgsError::JpegQuality(ref q)) => assert_eq!(*quality, q.as_str()),
                other => panic!("unexpected result for {:?}: {:?}", quality, other),
            }
        }
    }
}
