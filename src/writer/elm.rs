//! Emit the `Enums` Elm module: one custom type per enum plus its list of
//! values, string conversions, JSON decoder and encoder.
//!
//! Layout follows elm-format (two blank lines between top-level
//! declarations, leading `=`/`|`/`,`) so the file is stable under
//! `elm-format --validate`.

use std::fmt::{self, Write};

use crate::config::INPUT_FILE;
use crate::model::{Definitions, EnumDef};

pub fn render(defs: &Definitions) -> String {
    let mut out = String::new();
    write_module(&mut out, defs).expect("writing to a String cannot fail");
    out
}

fn write_module(out: &mut String, defs: &Definitions) -> fmt::Result {
    writeln!(out, "module Enums exposing (..)")?;
    writeln!(out)?;
    writeln!(
        out,
        "{{-| Generated by elm-enums from ./{INPUT_FILE}. Do not edit by hand."
    )?;
    writeln!(out, "-}}")?;
    writeln!(out)?;
    writeln!(out, "import Json.Decode as Decode exposing (Decoder)")?;
    writeln!(out, "import Json.Encode as Encode")?;

    for def in &defs.enums {
        write_enum(out, def)?;
    }
    Ok(())
}

fn write_enum(out: &mut String, def: &EnumDef) -> fmt::Result {
    let ty = &def.name;
    let [all, to_string, from_string, decoder, encode] = def.function_names();

    // ── section header ─────────────────────────────────────────────
    write!(out, "\n\n\n-- {}\n", ty.to_uppercase())?;

    // ── type ───────────────────────────────────────────────────────
    write!(out, "\n\ntype {ty}\n")?;
    for (i, v) in def.variants.iter().enumerate() {
        let lead = if i == 0 { '=' } else { '|' };
        writeln!(out, "    {lead} {}", v.name)?;
    }

    // ── all values ─────────────────────────────────────────────────
    write!(out, "\n\n{all} : List {ty}\n{all} =\n")?;
    for (i, v) in def.variants.iter().enumerate() {
        let lead = if i == 0 { '[' } else { ',' };
        writeln!(out, "    {lead} {}", v.name)?;
    }
    writeln!(out, "    ]")?;

    // ── toString ───────────────────────────────────────────────────
    write!(
        out,
        "\n\n{to_string} : {ty} -> String\n{to_string} value =\n    case value of\n"
    )?;
    for (i, v) in def.variants.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "        {} ->", v.name)?;
        writeln!(out, "            {}", elm_string(&v.tag))?;
    }

    // ── fromString ─────────────────────────────────────────────────
    write!(
        out,
        "\n\n{from_string} : String -> Maybe {ty}\n{from_string} string =\n    case string of\n"
    )?;
    for v in &def.variants {
        writeln!(out, "        {} ->", elm_string(&v.tag))?;
        writeln!(out, "            Just {}", v.name)?;
        writeln!(out)?;
    }
    writeln!(out, "        _ ->")?;
    writeln!(out, "            Nothing")?;

    // ── decoder ────────────────────────────────────────────────────
    write!(out, "\n\n{decoder} : Decoder {ty}\n{decoder} =\n")?;
    writeln!(out, "    Decode.string")?;
    writeln!(out, "        |> Decode.andThen")?;
    writeln!(out, "            (\\string ->")?;
    writeln!(out, "                case {from_string} string of")?;
    writeln!(out, "                    Just value ->")?;
    writeln!(out, "                        Decode.succeed value")?;
    writeln!(out)?;
    writeln!(out, "                    Nothing ->")?;
    writeln!(
        out,
        "                        Decode.fail ({} ++ string)",
        elm_string(&format!("Unknown {ty}: "))
    )?;
    writeln!(out, "            )")?;

    // ── encoder ────────────────────────────────────────────────────
    write!(
        out,
        "\n\n{encode} : {ty} -> Encode.Value\n{encode} value =\n    Encode.string ({to_string} value)\n"
    )?;
    Ok(())
}

/// Elm string literal for `text`. Tags never contain control characters,
/// and without those JSON string escaping is valid Elm.
fn elm_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("{text:?}"))
}
