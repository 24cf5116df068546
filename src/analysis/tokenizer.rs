//! Word tokenizer.
//!
//! A token is a maximal run of word characters: Unicode letters, Unicode
//! digits and `_`. Every other character separates tokens and never appears
//! inside one. Callers lower-case the input before scanning.

/// Whether a character can appear inside a token.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterator over the tokens of a string slice.
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];

        let (start_offset, _) = rest.char_indices().find(|&(_, c)| is_word_char(c))?;
        let start = self.pos + start_offset;

        let end = self.text[start..]
            .char_indices()
            .find(|&(_, c)| !is_word_char(c))
            .map(|(i, _)| start + i)
            .unwrap_or(self.text.len());

        self.pos = end;
        Some(&self.text[start..end])
    }
}

/// Scan `text` for tokens. The input should already be lower-cased.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens::new(text)
}

/// Length of a token in characters.
pub fn token_len(token: &str) -> usize {
    token.chars().count()
}
