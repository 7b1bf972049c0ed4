use clap::Parser;

/// Generate Elm enum types, decoders and encoders.
///
/// Reads ./enums.defs from the current directory and writes ./Enums.elm,
/// moving any previous ./Enums.elm to ./Enums.elm.bak.
///
/// Exit status: 0 success, 1 input could not be read, 2 output could not
/// be written, 3 syntax error in the definitions.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {}
