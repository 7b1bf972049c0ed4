//! Parser that consumes the lexer and builds validated `Definitions`.
//
//      definitions ::= definition*
//      definition  ::= "type" UPPER "=" variant ( "|" variant )*
//      variant     ::= UPPER STRING?

use std::collections::{HashMap, HashSet};

use super::lexer::{Lexer, Spanned, Token};
use crate::error::SyntaxError;
use crate::model::{Definitions, EnumDef, Variant};

/// Names the generated module either imports or gets from Elm's default
/// imports; a user type with one of these names makes the output ambiguous.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "Bool", "Char", "Cmd", "Decoder", "Float", "Int", "List", "Maybe", "Never", "Order",
    "Result", "String", "Sub", "Value",
];

/// Constructors from Elm's default imports; the generated helpers pattern
/// match on `Just`/`Nothing`, and the rest would shadow core values.
const RESERVED_VARIANT_NAMES: &[&str] = &[
    "Just", "Nothing", "True", "False", "Ok", "Err", "LT", "EQ", "GT",
];

pub fn parse_definitions(src: &str) -> Result<Definitions, SyntaxError> {
    let mut p = Parser::new(src);
    let enums = p.parse()?;
    let defs = Definitions { enums };
    validate(&defs)?;
    Ok(defs)
}

struct Parser<'a> {
    lex: Lexer<'a>,
    /// One token of lookahead; refilled by `peek`.
    peeked: Option<Spanned>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            lex: Lexer::new(src),
            peeked: None,
        }
    }

    fn peek(&mut self) -> Result<&Spanned, SyntaxError> {
        if self.peeked.is_none() {
            let next = match self.lex.next() {
                Some(res) => res?,
                // The lexer always ends with Eof; only reachable after an error.
                None => return Err(SyntaxError::new(0, 0, "unexpected end of input")),
            };
            self.peeked = Some(next);
        }
        match &self.peeked {
            Some(tok) => Ok(tok),
            None => Err(SyntaxError::new(0, 0, "unexpected end of input")),
        }
    }

    fn advance(&mut self) -> Result<Spanned, SyntaxError> {
        self.peek()?;
        self.peeked
            .take()
            .ok_or_else(|| SyntaxError::new(0, 0, "unexpected end of input"))
    }

    fn parse(&mut self) -> Result<Vec<EnumDef>, SyntaxError> {
        let mut res = Vec::<EnumDef>::new();
        while self.peek()?.token != Token::Eof {
            res.push(self.parse_definition()?);
        }
        Ok(res)
    }

    fn parse_definition(&mut self) -> Result<EnumDef, SyntaxError> {
        let start = self.advance()?;
        if start.token != Token::Type {
            return Err(unexpected(&start, "expected 'type'"));
        }

        let name = self.parse_upper("type name")?;
        let eq = self.advance()?;
        if eq.token != Token::Equals {
            return Err(unexpected(&eq, &format!("expected '=' after type name {name}")));
        }

        let mut variants = vec![self.parse_variant()?];
        while self.peek()?.token == Token::Pipe {
            self.advance()?;
            variants.push(self.parse_variant()?);
        }

        Ok(EnumDef {
            name,
            variants,
            line: start.line,
        })
    }

    fn parse_variant(&mut self) -> Result<Variant, SyntaxError> {
        let line = self.peek()?.line;
        let name = self.parse_upper("variant name")?;
        self.peek()?;
        let tag = match self.peeked.take() {
            Some(Spanned {
                token: Token::Str(tag),
                ..
            }) => tag,
            other => {
                self.peeked = other;
                name.clone()
            }
        };
        Ok(Variant { name, tag, line })
    }

    fn parse_upper(&mut self, what: &str) -> Result<String, SyntaxError> {
        let tok = self.advance()?;
        match tok.token {
            Token::Upper(name) => Ok(name),
            Token::Lower(name) => Err(SyntaxError::new(
                tok.line,
                tok.column,
                format!("{what} '{name}' must start with an upper-case letter"),
            )),
            _ => Err(unexpected(&tok, &format!("expected {what}"))),
        }
    }
}

fn unexpected(tok: &Spanned, expected: &str) -> SyntaxError {
    let found = match &tok.token {
        Token::Type => "'type'".to_string(),
        Token::Upper(s) | Token::Lower(s) => format!("'{s}'"),
        Token::Str(s) => format!("string {s:?}"),
        Token::Equals => "'='".to_string(),
        Token::Pipe => "'|'".to_string(),
        Token::Eof => "end of input".to_string(),
    };
    SyntaxError::new(tok.line, tok.column, format!("{expected}, found {found}"))
}

/// Checks that need the whole file: uniqueness and reserved names.
fn validate(defs: &Definitions) -> Result<(), SyntaxError> {
    if defs.enums.is_empty() {
        return Err(SyntaxError::new(1, 1, "no enum definitions found"));
    }

    let mut types: HashMap<&str, usize> = HashMap::new();
    let mut constructors: HashMap<&str, usize> = HashMap::new();
    // generated function name -> type that generates it
    let mut functions: HashMap<String, &str> = HashMap::new();

    for def in &defs.enums {
        if RESERVED_TYPE_NAMES.contains(&def.name.as_str()) {
            return Err(SyntaxError::new(
                def.line,
                1,
                format!("type name '{}' is reserved", def.name),
            ));
        }
        if let Some(first) = types.insert(&def.name, def.line) {
            return Err(SyntaxError::new(
                def.line,
                1,
                format!(
                    "duplicate type name '{}' (first defined on line {first})",
                    def.name
                ),
            ));
        }

        for fun in def.function_names() {
            if let Some(other) = functions.get(&fun) {
                return Err(SyntaxError::new(
                    def.line,
                    1,
                    format!(
                        "type '{}' generates '{fun}', which type '{other}' already generates",
                        def.name
                    ),
                ));
            }
            functions.insert(fun, &def.name);
        }

        let mut tags: HashSet<&str> = HashSet::new();
        for variant in &def.variants {
            if RESERVED_VARIANT_NAMES.contains(&variant.name.as_str()) {
                return Err(SyntaxError::new(
                    variant.line,
                    1,
                    format!("variant name '{}' is reserved", variant.name),
                ));
            }
            if let Some(first) = constructors.insert(&variant.name, variant.line) {
                return Err(SyntaxError::new(
                    variant.line,
                    1,
                    format!(
                        "duplicate variant name '{}' (first defined on line {first})",
                        variant.name
                    ),
                ));
            }
            if !tags.insert(&variant.tag) {
                return Err(SyntaxError::new(
                    variant.line,
                    1,
                    format!("duplicate tag {:?} in type '{}'", variant.tag, def.name),
                ));
            }
        }
    }
    Ok(())
}
