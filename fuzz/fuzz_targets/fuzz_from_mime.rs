#![no_main]

use libfuzzer_sys::fuzz_target;
use tokio_mediatype::{MediaType, Parameter};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mt) = MediaType::from_mime(s) {
            let rendered = mt.to_string();
            let reparsed = MediaType::from_mime(&rendered)
                .unwrap_or_else(|err| panic!("rendered {:?} does not parse: {}", rendered, err));

            if mt.parameters().iter().all(Parameter::renders_losslessly) {
                assert_eq!(reparsed, mt, "round trip of {:?}", s);
            }
        }
    }
});
