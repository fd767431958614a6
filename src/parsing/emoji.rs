//! Emoji extraction from message text.
//!
//! Classification uses the Unicode emoji table shipped with the `emojis`
//! crate. Extraction works per character: multi-codepoint sequences such as
//! flags or ZWJ families contribute the parts that are emoji on their own.

/// Returns `true` if `c` on its own is an emoji.
pub fn is_emoji(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}

/// Returns the emoji characters of `text` in order, duplicates included.
pub fn extract_emojis(text: &str) -> Vec<char> {
    text.chars().filter(|&c| is_emoji(c)).collect()
}
