use serde::Serialize;

/// Every enum found in one definitions file, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definitions {
    pub enums: Vec<EnumDef>,
}

/// `type Color = Red | Green | Blue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDef {
    pub name: String,
    pub variants: Vec<Variant>,
    /// Line of the `type` keyword, kept for error messages.
    pub line: usize,
}

/// One constructor plus the string it travels as on the wire.
/// `tag` defaults to `name` when the source gives no string literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub name: String,
    pub tag: String,
    pub line: usize,
}

impl EnumDef {
    /// Top-level Elm functions generated for this enum, in emission order:
    /// `allT`, `tToString`, `tFromString`, `tDecoder`, `encodeT`.
    pub fn function_names(&self) -> [String; 5] {
        let ty = &self.name;
        let fun = lower_first(ty);
        [
            format!("all{ty}"),
            format!("{fun}ToString"),
            format!("{fun}FromString"),
            format!("{fun}Decoder"),
            format!("encode{ty}"),
        ]
    }
}

/// `Color` -> `color`
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Color"), "color");
        assert_eq!(lower_first("HTTPMethod"), "hTTPMethod");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_function_names() {
        let def = EnumDef {
            name: "Color".into(),
            variants: vec![],
            line: 1,
        };
        assert_eq!(
            def.function_names(),
            [
                "allColor",
                "colorToString",
                "colorFromString",
                "colorDecoder",
                "encodeColor",
            ]
        );
    }
}
