use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EncodingGuess {
    pub name: String,
    pub confidence: f32,
    pub bom: bool,
}

/// Guesses the encoding of an authored catalog file.
pub fn detect(bytes: &[u8]) -> EncodingGuess {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return EncodingGuess {
            name: encoding.name().to_lowercase(),
            confidence: 0.99,
            bom: true,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);

    let encoding = detector.guess(None, true);

    EncodingGuess {
        name: encoding.name().to_lowercase(),
        confidence: estimate_confidence(bytes, encoding),
        bom: false,
    }
}

/// Decodes to UTF-8 text. Undecodable bytes are replaced, never rejected.
pub fn decode(bytes: &[u8]) -> String {
    // BOM sniffing happens inside `decode`; plain UTF-8 wins over a guess.
    if Encoding::for_bom(bytes).is_none() {
        if let Ok(s) = std::str::from_utf8(bytes) {
            return s.to_string();
        }
    }

    let guess = detect(bytes);
    let encoding = Encoding::for_label(guess.name.as_bytes()).unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::warn!(
            "catalog text is not valid {}; undecodable bytes were replaced",
            used.name()
        );
    } else {
        log::debug!("decoded catalog text as {} ({:.2})", used.name(), guess.confidence);
    }

    text.into_owned()
}

fn estimate_confidence(bytes: &[u8], encoding: &'static Encoding) -> f32 {
    let (text, _, had_errors) = encoding.decode(bytes);

    if had_errors {
        return 0.35;
    }

    let len = text.len();
    if len < 64 {
        0.55
    } else if len < 512 {
        0.70
    } else if len < 4096 {
        0.82
    } else {
        0.90
    }
}
