use std::fs;

use elm_enums::processor::defs_parser::parse_definitions;
use elm_enums::processor::{ElmTranslator, Translator};

#[test]
fn parses_sample_definitions() {
    let src = fs::read_to_string("tests/enums.defs").unwrap();
    let defs = parse_definitions(&src).expect("valid definitions");

    // sample file has two enums
    assert_eq!(defs.enums.len(), 2);

    let status = &defs.enums[1];
    assert_eq!(status.name, "Status");
    assert_eq!(status.line, 7);
    let tags: Vec<_> = status.variants.iter().map(|v| v.tag.as_str()).collect();
    assert_eq!(tags, ["todo", "in-progress", "done"]);
}

#[test]
fn translates_sample_definitions() {
    let src = fs::read_to_string("tests/enums.defs").unwrap();
    let elm = ElmTranslator.translate(&src).expect("valid definitions");

    // enums keep source order
    let color = elm.find("type Color").unwrap();
    let status = elm.find("type Status").unwrap();
    assert!(color < status);

    assert!(elm.contains("        InProgress ->\n            \"in-progress\"\n"));
    assert!(elm.contains("        \"in-progress\" ->\n            Just InProgress\n"));
    assert!(elm.contains("statusDecoder : Decoder Status\n"));
    assert!(elm.contains("encodeStatus : Status -> Encode.Value\n"));
    assert!(elm.ends_with('\n') && !elm.ends_with("\n\n"));
}
