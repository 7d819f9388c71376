// src/core/encoding.rs
use encoding_rs::WINDOWS_1252;

/// Decode a saved result page. The portal serves Windows-1252 and the pages
/// are read that way unconditionally; a BOM is not sniffed and every byte maps
/// to some character, so this cannot fail.
pub fn decode_page(bytes: &[u8]) -> String {
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}
