//! The translator: definitions text in, Elm source out.
pub mod defs_parser;
pub mod lexer;

use log::debug;

use crate::error::SyntaxError;
use crate::writer;

/// Outcome of one translation request.
pub type TranslationResult = Result<String, SyntaxError>;

/// Text-to-text translation of a definitions file into generated source.
pub trait Translator {
    fn translate(&self, definitions: &str) -> TranslationResult;
}

/// Built-in translator producing the `Enums` Elm module.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElmTranslator;

impl Translator for ElmTranslator {
    fn translate(&self, definitions: &str) -> TranslationResult {
        let defs = defs_parser::parse_definitions(definitions)?;
        debug!(
            "parsed {} enum(s): {}",
            defs.enums.len(),
            serde_json::to_string(&defs).unwrap_or_default()
        );
        Ok(writer::elm::render(&defs))
    }
}
