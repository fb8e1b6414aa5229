//! Built-in language identifier backed by `whatlang`.

use super::LanguageIdentifier;

/// Trigram-based language identifier returning ISO 639-1 tags (`"en"`).
///
/// Languages without a two-letter code fall back to their ISO 639-3 code.
/// Returns an empty string when no language can be guessed, which the
/// normalizer treats as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangIdentifier {
    _private: (),
}

impl WhatlangIdentifier {
    /// Create an identifier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn identify_language(&self, text: &str) -> String {
        match whatlang::detect(text) {
            Some(info) => {
                log::trace!(
                    "Detected {} (confidence {:.2})",
                    info.lang().code(),
                    info.confidence()
                );
                iso_639_1(info.lang().code()).to_string()
            }
            None => String::new(),
        }
    }
}

/// Map an ISO 639-3 code onto its ISO 639-1 equivalent.
fn iso_639_1(code: &'static str) -> &'static str {
    match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "nb",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        other => other,
    }
}
