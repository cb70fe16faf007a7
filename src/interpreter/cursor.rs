use logos::Logos;

use crate::interpreter::lexer::Lexeme;

/// A forward-only view over the unconsumed part of an expression.
///
/// The cursor borrows an immutable, whitespace-free source string and tracks a
/// byte offset into it. Consuming only ever moves the offset forward, so a
/// consumed prefix is never examined again.
///
/// The cursor has no grammar knowledge: the evaluator inspects [`peek`] and
/// then asks for exactly the span it expects. Every consume method is a no-op
/// when the expected span is not there.
///
/// [`peek`]: Cursor::peek
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source:   &'src str,
    position: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source,
               position: 0 }
    }

    /// Returns the input that has not been consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Byte offset of the next unconsumed character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once the whole input has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the next character without consuming it, or `None` when the
    /// input is exhausted.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes and returns the next character.
    ///
    /// Used for single-character tokens: operators and parentheses. Returns
    /// `None` without moving when the input is exhausted.
    pub fn consume_operator(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Consumes a numeric span and returns its text.
    ///
    /// The span is one leading digit or `-` followed by any run of digits and
    /// dots, taken greedily. Returns an empty span when the input does not
    /// start with one.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("-12.5*x");
    /// assert_eq!(cursor.consume_number(), "-12.5");
    /// assert_eq!(cursor.remaining(), "*x");
    /// ```
    pub fn consume_number(&mut self) -> &'src str {
        self.consume_lexeme(Lexeme::Number)
    }

    /// Consumes a variable name and returns it.
    ///
    /// The name is one alphabetic character followed by any run of alphabetic
    /// characters and digits. Returns an empty span when the input does not
    /// start with one.
    pub fn consume_identifier(&mut self) -> &'src str {
        self.consume_lexeme(Lexeme::Identifier)
    }

    fn consume_lexeme(&mut self, expected: Lexeme) -> &'src str {
        let rest = self.remaining();
        let mut lexer = Lexeme::lexer(rest);

        match lexer.next() {
            Some(Ok(lexeme)) if lexeme == expected => {
                let span = lexer.span();
                debug_assert_eq!(span.start, 0);
                self.position += span.end;
                &rest[..span.end]
            },
            _ => "",
        }
    }
}
