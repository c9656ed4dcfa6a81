//! Character cursor over formula source.
//!
//! The formula grammar has no tokens: the parser reads one character at a
//! time and decides what it means. The cursor only ever moves forward.

pub struct Cursor {
    input: Vec<char>,
    position: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Cursor {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> String {
        self.input[self.position.min(self.input.len())..]
            .iter()
            .collect()
    }

    pub fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Consumes and returns the current character.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.advance();
        Some(ch)
    }

    /// Consumes `expected` if it is the current character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips spaces and tabs. Newlines are not blanks in this grammar.
    pub fn skip_blanks(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == ' ' || ch == '\t' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads the longest decimal literal at the cursor: `[-]digits[.digits]`
    /// or `[-].digits`.
    ///
    /// Returns `None` and leaves the cursor untouched when no digit follows
    /// the optional sign and point (a bare `-` or `.`).
    pub fn read_number(&mut self) -> Option<f32> {
        let mut len = 0;
        let mut digits = 0;

        if self.peek_char(len) == Some('-') {
            len += 1;
        }
        while self.peek_char(len).is_some_and(|c| c.is_ascii_digit()) {
            len += 1;
            digits += 1;
        }
        if self.peek_char(len) == Some('.') {
            let mut frac = 0;
            while self.peek_char(len + 1 + frac).is_some_and(|c| c.is_ascii_digit()) {
                frac += 1;
            }
            if digits > 0 || frac > 0 {
                len += 1 + frac;
                digits += frac;
            }
        }

        if digits == 0 {
            return None;
        }

        let text: String = self.input[self.position..self.position + len].iter().collect();
        let value = text.parse::<f32>().ok()?;
        self.position += len;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integer() {
        let mut cursor = Cursor::new("42,3");
        assert_eq!(cursor.read_number(), Some(42.0));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current_char(), Some(','));
    }

    #[test]
    fn test_read_fraction_forms() {
        for (input, expected, consumed) in [
            ("1.15", 1.15, 4),
            ("-5", -5.0, 2),
            (".5", 0.5, 2),
            ("-.25x", -0.25, 4),
            ("5.", 5.0, 2),
            ("1.2.3", 1.2, 3),
        ] {
            let mut cursor = Cursor::new(input);
            assert_eq!(cursor.read_number(), Some(expected), "input {:?}", input);
            assert_eq!(cursor.position(), consumed, "input {:?}", input);
        }
    }

    #[test]
    fn test_no_exponent() {
        let mut cursor = Cursor::new("1e3");
        assert_eq!(cursor.read_number(), Some(1.0));
        assert_eq!(cursor.remaining(), "e3");
    }

    #[test]
    fn test_bare_sign_or_point_consumes_nothing() {
        for input in ["-", ".", "-.", "-,3", ".x"] {
            let mut cursor = Cursor::new(input);
            assert_eq!(cursor.read_number(), None, "input {:?}", input);
            assert_eq!(cursor.position(), 0);
        }
    }

    #[test]
    fn test_skip_blanks_space_or_tab() {
        let mut cursor = Cursor::new(" \t \t+");
        cursor.skip_blanks();
        assert_eq!(cursor.next_char(), Some('+'));
        assert_eq!(cursor.next_char(), None);

        let mut cursor = Cursor::new("\n+");
        cursor.skip_blanks();
        assert_eq!(cursor.current_char(), Some('\n'));
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new(",,");
        assert!(cursor.eat(','));
        assert!(cursor.eat(','));
        assert!(!cursor.eat(','));
        assert_eq!(cursor.next_char(), None);
    }
}
