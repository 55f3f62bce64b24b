// Sun Oct 18 2026 - Alex

use crate::config::SignatureSource;
use crate::pattern::{Encoding, SignatureKind};
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

const FILE_ARG: &str = "file";

pub const USAGE: &str = "siggrep [--(pattern|narrow|wide|widebe) <value>]+ [--] <file>";

const OUTPUT_HELP: &str = "Output:\n  Comma separated values of count of each signature found";

/// The parsed command line, signatures in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub file: PathBuf,
    pub sources: Vec<SignatureSource>,
}

fn value_name(kind: SignatureKind) -> &'static str {
    match kind {
        SignatureKind::Pattern => "pattern",
        SignatureKind::Literal(_) => "string",
    }
}

fn help(kind: SignatureKind) -> &'static str {
    match kind {
        SignatureKind::Pattern => "IDA style pattern, like \"12 34 ? 78\"",
        SignatureKind::Literal(Encoding::Narrow) => "narrow / ascii string",
        SignatureKind::Literal(Encoding::WideLe) => "wide / ucs2 little endian string",
        SignatureKind::Literal(Encoding::WideBe) => "wide / ucs2 big endian string",
    }
}

pub fn command() -> Command {
    let signature_args = SignatureKind::ALL.into_iter().map(|kind| {
        Arg::new(kind.flag())
            .long(kind.flag())
            .value_name(value_name(kind))
            .help(help(kind))
            .num_args(1)
            .allow_hyphen_values(true)
            .action(ArgAction::Append)
    });

    Command::new("siggrep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A grep-like utility for testing for binary patterns in a file")
        .override_usage(USAGE)
        .after_help(OUTPUT_HELP)
        .args(signature_args)
        .arg(
            Arg::new(FILE_ARG)
                .value_name("file")
                .help("file to scan")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
}

/// Plain usage block printed with every argument error.
pub fn usage_text() -> String {
    let mut text = format!("Usage: {}\nOptions:\n", USAGE);
    for kind in SignatureKind::ALL {
        let flag = format!("--{} <{}>", kind.flag(), value_name(kind));
        text.push_str(&format!("  {:<24}{}\n", flag, help(kind)));
    }
    text.push_str(OUTPUT_HELP);
    text.push('\n');
    text
}

pub fn parse_from<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = command();
    let matches = cmd.try_get_matches_from_mut(argv)?;
    extract(&mut cmd, &matches)
}

fn extract(cmd: &mut Command, matches: &ArgMatches) -> Result<Args, clap::Error> {
    let mut indexed: Vec<(usize, SignatureSource)> = Vec::new();

    for kind in SignatureKind::ALL {
        let values = matches.get_many::<String>(kind.flag());
        let indices = matches.indices_of(kind.flag());
        if let (Some(values), Some(indices)) = (values, indices) {
            for (value, index) in values.zip(indices) {
                indexed.push((index, SignatureSource::new(kind, value.as_str())));
            }
        }
    }

    // Clap groups values per argument; argv order decides output order.
    indexed.sort_by_key(|(index, _)| *index);

    if indexed.is_empty() {
        return Err(cmd.error(
            ErrorKind::MissingRequiredArgument,
            "at least one of --pattern, --narrow, --wide or --widebe is required",
        ));
    }

    let file = matches
        .get_one::<PathBuf>(FILE_ARG)
        .cloned()
        .ok_or_else(|| cmd.error(ErrorKind::MissingRequiredArgument, "no file given"))?;

    let file_index = matches.index_of(FILE_ARG).unwrap_or(usize::MAX);
    if let Some((_, late)) = indexed.iter().find(|(index, _)| *index > file_index) {
        return Err(cmd.error(
            ErrorKind::ArgumentConflict,
            format!("{} must come before the file", late.kind),
        ));
    }

    Ok(Args {
        file,
        sources: indexed.into_iter().map(|(_, source)| source).collect(),
    })
}
