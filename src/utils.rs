//! Utility functions shared by the enhancement modules
//!
//! Provides HTML escaping for generated highlight markup, percent-decoding
//! for URL query components, and the WebAssembly panic hook setup.

use alloc::string::String;
use alloc::vec::Vec;

/// Escapes HTML special characters in a string.
///
/// Generated highlight markup is substituted into the live document via
/// `innerHTML`, so every text segment must be escaped first; otherwise page
/// text containing markup characters would be re-parsed as HTML.
///
/// # Examples
/// ```
/// use hydoc_enhance::utils::escape;
///
/// assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

const fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes one `application/x-www-form-urlencoded` query component.
///
/// `+` becomes a space and `%XX` hex escapes become bytes; malformed escapes
/// are passed through verbatim. Invalid UTF-8 after decoding is replaced
/// lossily rather than rejected, matching how browsers expose query values.
#[must_use]
pub fn decode_query_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    out.push((hi << 4) | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Sets a panic hook for better error messages in WebAssembly.
///
/// When the `wasm` feature is enabled this installs
/// `console_error_panic_hook` once during initialization, so panics surface
/// as readable console errors instead of an opaque `unreachable`.
#[allow(clippy::missing_const_for_fn)]
pub fn set_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}
