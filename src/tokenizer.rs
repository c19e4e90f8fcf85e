/// A surface token together with the character offset of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    /// Length of the surface token in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split text into maximal runs of non-whitespace, left to right.
///
/// Offsets are character indices into `text`, not byte indices.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None; // (byte, char)

    for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
        if c.is_whitespace() {
            if let Some((byte_start, char_start)) = start.take() {
                tokens.push(Token {
                    text: &text[byte_start..byte_idx],
                    offset: char_start,
                });
            }
        } else if start.is_none() {
            start = Some((byte_idx, char_idx));
        }
    }

    if let Some((byte_start, char_start)) = start {
        tokens.push(Token {
            text: &text[byte_start..],
            offset: char_start,
        });
    }

    tokens
}
