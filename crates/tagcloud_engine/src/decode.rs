use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

use engine_logging::{engine_debug, engine_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

/// Decode raw file bytes into text using: BOM -> strict UTF-8 -> chardetng fallback.
///
/// Never fails; undecodable sequences in a guessed encoding become U+FFFD.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    // 1) BOM aware decode
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        engine_debug!("Input starts with a {} BOM", encoding.name());
        return decode_with(&bytes[bom_len..], encoding);
    }

    // 2) Plain UTF-8
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return DecodedText {
            text: text.into_owned(),
            encoding_label: UTF_8.name().to_string(),
        };
    }

    // 3) Legacy encoding guess
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, false);
    engine_warn!("Input is not valid UTF-8, decoding as {}", encoding.name());
    decode_with(bytes, encoding)
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedText {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        engine_warn!("Input contained sequences invalid in {}; replaced", encoding.name());
    }
    DecodedText {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    }
}
