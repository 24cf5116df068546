//! Sentence counting heuristic.
//!
//! A sentence is one or more non-terminator characters followed by a run of
//! terminators (`.`, `!`, `?`). The run only closes the sentence when it is
//! followed by whitespace or the end of the text, so `"Wait...what?!"` is a
//! single sentence. Text after the last terminator is not counted.

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Count sentences in `text`.
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut has_content = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !is_terminator(c) {
            has_content = true;
            continue;
        }

        // Absorb the whole terminator run into one boundary
        while chars.next_if(|&next| is_terminator(next)).is_some() {}

        let at_boundary = chars.peek().map_or(true, |next| next.is_whitespace());
        if at_boundary && has_content {
            count += 1;
            has_content = false;
        }
    }

    count
}
