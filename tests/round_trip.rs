//! Property-based tests for parsing and rendering.
//!
//! Rendering is not byte-identical to the input, but re-parsing a rendered
//! media type gives back the same value whenever every parameter value
//! renders losslessly.

use proptest::prelude::*;
use std::collections::BTreeMap;
use tokio_mediatype::grammar::{SUFFIXES, TREES, TYPES};
use tokio_mediatype::{MediaType, Parameter};

fn sub_type() -> impl Strategy<Value = String> {
    (
        prop::option::of(prop::sample::select(TREES)),
        "[a-z0-9][a-z0-9-]{0,20}",
        prop::option::of(prop::sample::select(SUFFIXES)),
    )
        .prop_map(|(tree, name, suffix)| {
            let mut s = String::new();
            if let Some(tree) = tree {
                s.push_str(tree);
                s.push('.');
            }
            s.push_str(&name);
            if let Some(suffix) = suffix {
                s.push('+');
                s.push_str(suffix);
            }
            s
        })
}

fn parameters() -> impl Strategy<Value = BTreeMap<String, Option<String>>> {
    prop::collection::btree_map(
        "[a-zA-Z][a-zA-Z0-9-]{0,8}",
        prop::option::of("[A-Za-z0-9.\"-]{0,10}"),
        0..4,
    )
}

fn render_raw(
    type_: &str,
    sub_type: &str,
    params: &BTreeMap<String, Option<String>>,
    quote: bool,
    pad: &str,
) -> String {
    let mut raw = format!("{}{}/{}{}", pad, type_.to_uppercase(), sub_type, pad);
    for (name, value) in params {
        raw.push(';');
        raw.push_str(pad);
        raw.push_str(name);
        if let Some(value) = value {
            raw.push('=');
            if quote {
                raw.push('"');
                raw.push_str(value);
                raw.push('"');
            } else {
                raw.push_str(value);
            }
        }
    }
    raw
}

proptest! {
    /// Well-formed input parses, and its rendering parses back to the same value.
    #[test]
    fn render_then_parse_is_stable(
        type_ in prop::sample::select(TYPES),
        sub_type in sub_type(),
        params in parameters(),
        quote in any::<bool>(),
        pad in prop::sample::select(&["", " ", "  "][..]),
    ) {
        let raw = render_raw(type_, &sub_type, &params, quote, pad);
        let mt = MediaType::from_mime(&raw).unwrap();

        prop_assert_eq!(mt.type_(), type_);
        prop_assert_eq!(mt.sub_type(), sub_type.as_str());
        prop_assert_eq!(mt.parameters().len(), params.len());

        // Parsing never yields an empty value
        prop_assert!(mt.parameters().iter().all(|p| p.value() != Some("")));

        let rendered = mt.to_string();
        let reparsed = MediaType::from_mime(&rendered).unwrap();
        if mt.parameters().iter().all(Parameter::renders_losslessly) {
            prop_assert_eq!(&reparsed, &mt);
            prop_assert_eq!(reparsed.to_string(), rendered);
        } else {
            // Each cycle strips one more quote layer; the names survive.
            let names: Vec<&str> = reparsed.parameters().iter().map(|p| p.name()).collect();
            let expected: Vec<&str> = mt.parameters().iter().map(|p| p.name()).collect();
            prop_assert_eq!(names, expected);
        }
    }

    /// Anything that parses and renders losslessly survives a render/re-parse cycle.
    #[test]
    fn arbitrary_input_round_trips(raw in "[a-zA-Z ]{1,12}/[a-z.+ -]{1,12}(;[a-zA-Z \"=]{0,8}){0,3}") {
        if let Ok(mt) = MediaType::from_mime(&raw) {
            if mt.parameters().iter().all(Parameter::renders_losslessly) {
                prop_assert_eq!(MediaType::from_mime(&mt.to_string()).unwrap(), mt);
            }
        }
    }

    /// Arbitrary input never panics.
    #[test]
    fn arbitrary_input_does_not_panic(raw in any::<String>()) {
        let _ = MediaType::from_mime(&raw);
    }
}
