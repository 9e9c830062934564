//! Tokenizer for tag markup.
//!
//! Splits input into literal text runs, escaped characters and tags in a
//! single pass. Every byte of the input ends up in exactly one token; input
//! that does not form a well-formed tag is emitted as text.

use crate::error::MarkupError;

use super::tag::TagToken;

/// The characters that delimit and escape tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiters {
    pub(crate) open: char,
    pub(crate) close: char,
    pub(crate) closing_marker: char,
    pub(crate) escape: char,
}

impl Delimiters {
    /// Create a validated delimiter set.
    ///
    /// All four characters must be distinct and none may be whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagmark::Delimiters;
    ///
    /// assert!(Delimiters::new('<', '>', '/', '\\').is_ok());
    /// assert!(Delimiters::new('<', '<', '/', '\\').is_err());
    /// ```
    pub fn new(
        open: char,
        close: char,
        closing_marker: char,
        escape: char,
    ) -> Result<Self, MarkupError> {
        let chars = [open, close, closing_marker, escape];

        if let Some(c) = chars.iter().find(|c| c.is_whitespace()) {
            return Err(MarkupError::InvalidDelimiters(format!(
                "{:?} is whitespace",
                c
            )));
        }
        for (i, a) in chars.iter().enumerate() {
            if chars[i + 1..].contains(a) {
                return Err(MarkupError::InvalidDelimiters(format!(
                    "{:?} is used twice",
                    a
                )));
            }
        }

        Ok(Self {
            open,
            close,
            closing_marker,
            escape,
        })
    }

    /// The character that opens a tag.
    pub fn open(&self) -> char {
        self.open
    }

    /// The character that ends a tag.
    pub fn close(&self) -> char {
        self.close
    }

    /// The marker that turns a tag into a closing tag.
    pub fn closing_marker(&self) -> char {
        self.closing_marker
    }

    /// The character that escapes a delimiter.
    pub fn escape(&self) -> char {
        self.escape
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: '[',
            close: ']',
            closing_marker: '/',
            escape: '\\',
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Literal text.
    Text(&'a str),
    /// A delimited tag.
    Tag(TagToken<'a>),
    /// An escaped delimiter or escape character.
    Escaped(char),
}

/// Single-pass tokenizer over markup text.
///
/// # Examples
///
/// ```
/// use tagmark::parser::{Token, Tokenizer};
/// use tagmark::Delimiters;
///
/// let tokens: Vec<_> = Tokenizer::new("[b]Hello[/b]", Delimiters::default()).collect();
/// assert_eq!(tokens.len(), 3);
/// assert!(matches!(tokens[1], Token::Text("Hello")));
/// ```
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    delimiters: Delimiters,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `input`.
    pub fn new(input: &'a str, delimiters: Delimiters) -> Self {
        Self {
            input,
            pos: 0,
            delimiters,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Take `len` bytes from the current position as text.
    fn take_text(&mut self, len: usize) -> Token<'a> {
        let start = self.pos;
        self.pos += len;
        Token::Text(&self.input[start..self.pos])
    }

    /// Consume text until the next open delimiter or escape character.
    fn consume_text(&mut self) -> Token<'a> {
        let Delimiters { open, escape, .. } = self.delimiters;
        let len = self
            .remaining()
            .find(|c: char| c == open || c == escape)
            .unwrap_or(self.remaining().len());
        self.take_text(len)
    }

    /// Consume a tag, or the lone open delimiter if no tag is formed.
    fn consume_tag(&mut self) -> Token<'a> {
        let Delimiters {
            open,
            close,
            closing_marker,
            ..
        } = self.delimiters;
        let tag_start = self.pos;
        let content_start = tag_start + open.len_utf8();
        let content = &self.input[content_start..];

        // The tag ends at the first close delimiter; a nested open delimiter
        // or end of input first means this one is literal.
        let end = content.find(|c: char| c == close || c == open);
        match end {
            Some(offset) if content[offset..].starts_with(close) => {
                let raw = &content[..offset];
                if raw.trim().is_empty() {
                    return self.take_text(open.len_utf8());
                }
                self.pos = content_start + offset + close.len_utf8();
                Token::Tag(TagToken::new(raw, tag_start..self.pos, closing_marker))
            }
            _ => self.take_text(open.len_utf8()),
        }
    }

    /// Consume an escape character and whatever it escapes.
    fn consume_escape(&mut self) -> Token<'a> {
        let Delimiters {
            open,
            close,
            escape,
            ..
        } = self.delimiters;
        let mut chars = self.remaining().chars();
        chars.next();

        match chars.next() {
            Some(c) if c == open || c == close || c == escape => {
                self.pos += escape.len_utf8() + c.len_utf8();
                Token::Escaped(c)
            }
            _ => self.take_text(escape.len_utf8()),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.peek()?;

        let token = if c == self.delimiters.open {
            self.consume_tag()
        } else if c == self.delimiters.escape {
            self.consume_escape()
        } else {
            self.consume_text()
        };
        log::trace!("token at {}: {:?}", self.pos, token);
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Tokenizer::new(input, Delimiters::default()).collect()
    }

    fn tag(raw: &str, start: usize) -> Token<'_> {
        Token::Tag(TagToken::new(raw, start..start + raw.len() + 2, '/'))
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("Hello World"), vec![Token::Text("Hello World")]);
    }

    #[test]
    fn lex_empty_input() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn lex_tags_and_text() {
        assert_eq!(
            lex("[b]Hello[/b]"),
            vec![tag("b", 0), Token::Text("Hello"), tag("/b", 8)]
        );
    }

    #[test]
    fn lex_tag_with_attributes() {
        let tokens = lex(r#"[color value="red"]x"#);
        let Token::Tag(t) = &tokens[0] else {
            panic!("Expected Tag");
        };
        assert_eq!(t.name(), "color");
        assert_eq!(t.attributes(), r#"value="red""#);
        assert_eq!(t.span(), 0..19);
    }

    #[test]
    fn lex_escapes() {
        assert_eq!(
            lex(r"\[not a tag\]"),
            vec![
                Token::Escaped('['),
                Token::Text("not a tag"),
                Token::Escaped(']'),
            ]
        );
        assert_eq!(lex(r"\\"), vec![Token::Escaped('\\')]);
    }

    #[test]
    fn lex_lone_escape_is_text() {
        assert_eq!(
            lex(r"a\nb\"),
            vec![
                Token::Text("a"),
                Token::Text("\\"),
                Token::Text("nb"),
                Token::Text("\\"),
            ]
        );
    }

    #[test]
    fn lex_unterminated_open_is_text() {
        assert_eq!(lex("[b"), vec![Token::Text("["), Token::Text("b")]);
    }

    #[test]
    fn lex_nested_open_makes_first_literal() {
        assert_eq!(
            lex("[[b]x"),
            vec![Token::Text("["), tag("b", 1), Token::Text("x")]
        );
    }

    #[test]
    fn lex_blank_tag_is_text() {
        assert_eq!(
            lex("[ ]"),
            vec![Token::Text("["), Token::Text(" ]")]
        );
        assert_eq!(lex("[]"), vec![Token::Text("["), Token::Text("]")]);
    }

    #[test]
    fn lex_stray_close_is_text() {
        assert_eq!(lex("a]b"), vec![Token::Text("a]b")]);
    }

    #[test]
    fn lex_custom_delimiters() {
        let delimiters = Delimiters::new('<', '>', '/', '\\').unwrap();
        let tokens: Vec<_> = Tokenizer::new("<b>[x]</b>", delimiters).collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::Text("[x]"));
    }

    #[test]
    fn lex_unicode() {
        assert_eq!(
            lex("[b]日本語[/b]"),
            vec![tag("b", 0), Token::Text("日本語"), tag("/b", 12)]
        );
    }

    #[test]
    fn tokens_cover_every_byte() {
        let input = r"x [b]y\[ [ z] \q [/b] [";
        let mut rebuilt = String::new();
        for token in lex(input) {
            match token {
                Token::Text(t) => rebuilt.push_str(t),
                Token::Tag(t) => rebuilt.push_str(&input[t.span()]),
                Token::Escaped(c) => {
                    rebuilt.push('\\');
                    rebuilt.push(c);
                }
            }
        }
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn invalid_delimiters() {
        assert!(Delimiters::new('[', ']', '[', '\\').is_err());
        assert!(Delimiters::new(' ', ']', '/', '\\').is_err());
    }
}
