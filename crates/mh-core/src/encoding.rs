//! ISO-8859-1 (Latin-1) encoding.
//!
//! Latin-1 maps code points 0-255 one-to-one onto bytes, so encoding is a
//! range check per character. Characters outside that range are an error,
//! never replaced or transliterated.

use crate::error::{CoreError, CoreResult};

/// Encode `text` as ISO-8859-1.
///
/// `position` in the error is the character index, not the byte offset.
pub fn encode_latin1(text: &str) -> CoreResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        let byte = u8::try_from(u32::from(character))
            .map_err(|_| CoreError::Encoding {
                character,
                position,
            })?;
        bytes.push(byte);
    }
    Ok(bytes)
}
