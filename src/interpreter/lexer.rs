use logos::Logos;

/// A word of a query line.
///
/// Lines are split into words only to find the identifiers eligible for
/// variable substitution, so the lexer is total: every character of the line
/// belongs to exactly one word, and concatenating the slices of all words
/// gives the line back.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    /// Numeric literal text, such as `42`, `2.5e+3` or the `3i` of `1+3i`.
    /// Exponent markers and imaginary suffixes belong to the number, never to
    /// an identifier.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-][0-9]+(\.[0-9]+)?)?i?")]
    Number,
    /// Opcode or variable names such as `ADD` or `x_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r\n]+")]
    Whitespace,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `.`
    #[token(".")]
    Dot,
    /// Any other single character.
    #[regex(r"[^a-zA-Z0-9_ \t\f\r\n,=+\-.]")]
    Symbol,
}

/// Splits `line` into words and their text.
///
/// Characters no word accepts come back as `None` so that callers can copy
/// them through unchanged.
///
/// # Example
/// ```
/// use numq::interpreter::lexer::{Word, words};
///
/// let kinds: Vec<_> = words("ADD x,2e+5").map(|(word, _)| word).collect();
/// assert_eq!(kinds,
///            [Some(Word::Identifier),
///             Some(Word::Whitespace),
///             Some(Word::Identifier),
///             Some(Word::Comma),
///             Some(Word::Number)]);
/// ```
pub fn words(line: &str) -> impl Iterator<Item = (Option<Word>, &str)> {
    let mut lexer = Word::lexer(line);
    std::iter::from_fn(move || {
        let word = lexer.next()?;
        Some((word.ok(), lexer.slice()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexing_is_lossless() {
        for line in ["set  x = ADD y,1+2i", "get x?", "SINE -30.5", "ADD 1e-3,  x?"] {
            assert_eq!(words(line).map(|(_, text)| text).collect::<String>(), line);
        }
    }

    #[test]
    fn literals_swallow_their_letters() {
        let identifiers: Vec<_> = words("MULTIPLY 1.5e+2-3e-1i,ei")
            .filter(|(word, _)| *word == Some(Word::Identifier))
            .map(|(_, text)| text)
            .collect();
        assert_eq!(identifiers, ["MULTIPLY", "ei"]);
    }
}
