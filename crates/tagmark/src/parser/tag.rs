//! Tag tokens and the attribute grammar for parameterized tags.
//!
//! A tag is everything between the delimiters. Its name is the leading run of
//! non-whitespace characters; the rest is the attribute substring, which reads
//! as whitespace separated items of the form `key`, `key=value`,
//! `key="value"` or `key='value'`.

use std::ops::Range;

/// A tag found by the tokenizer.
///
/// Borrowed from the input; case is preserved everywhere except
/// [`canonical`](TagToken::canonical).
#[derive(Clone, Debug, PartialEq)]
pub struct TagToken<'a> {
    raw: &'a str,
    text: &'a str,
    name: &'a str,
    attributes: &'a str,
    closing: bool,
    span: Range<usize>,
}

impl<'a> TagToken<'a> {
    /// Build a token from the text between the delimiters.
    ///
    /// `span` covers the tag in the input, delimiters included.
    pub fn new(raw: &'a str, span: Range<usize>, closing_marker: char) -> Self {
        let trimmed = raw.trim();
        let (closing, text) = match trimmed.strip_prefix(closing_marker) {
            Some(rest) => (true, rest.trim()),
            None => (false, trimmed),
        };

        let name_end = text.find(char::is_whitespace).unwrap_or(text.len());
        let name = &text[..name_end];
        let attributes = text[name_end..].trim();

        Self {
            raw,
            text,
            name,
            attributes,
            closing,
            span,
        }
    }

    /// Everything between the delimiters, untouched.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The trimmed tag text without the closing marker: `color value="red"`.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The tag name: `color`.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The attribute substring following the name: `value="red"`.
    pub fn attributes(&self) -> &'a str {
        self.attributes
    }

    /// True for `[/tag]` and `[/]`.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// True for the generic close `[/]`.
    pub fn is_generic_close(&self) -> bool {
        self.closing && self.text.is_empty()
    }

    /// Byte range of the tag in the input, delimiters included.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The lowercased, trimmed tag text used for rule matching.
    pub fn canonical(&self) -> String {
        self.text.to_lowercase()
    }

    /// Iterate over the items of the attribute substring.
    pub fn attribute_list(&self) -> AttributeIter<'a> {
        AttributeIter::new(self.attributes)
    }

    /// Look up an attribute by key, ignoring ASCII case.
    ///
    /// A bare key yields `Some("")`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagmark::parser::TagToken;
    ///
    /// let tag = TagToken::new(r#"color value="dark red" bold"#, 0..0, '/');
    /// assert_eq!(tag.attribute("VALUE"), Some("dark red"));
    /// assert_eq!(tag.attribute("bold"), Some(""));
    /// assert_eq!(tag.attribute("size"), None);
    /// ```
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.attribute_list()
            .find(|attr| attr.key.eq_ignore_ascii_case(key))
            .map(|attr| attr.value.unwrap_or(""))
    }

    /// The first bare item of the attribute substring: `red` in `[color red]`.
    pub fn argument(&self) -> Option<&'a str> {
        self.attribute_list()
            .find(|attr| attr.value.is_none())
            .map(|attr| attr.key)
    }
}

/// One item of a tag's attribute substring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagAttribute<'a> {
    pub key: &'a str,
    /// `None` for a bare key.
    pub value: Option<&'a str>,
}

/// Iterator over [`TagAttribute`]s.
pub struct AttributeIter<'a> {
    rest: &'a str,
}

impl<'a> AttributeIter<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn take_value(&mut self) -> &'a str {
        let rest = self.rest;
        match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &rest[1..];
                match body.find(quote) {
                    Some(end) => {
                        self.rest = &body[end + 1..];
                        &body[..end]
                    }
                    // Unterminated quote runs to the end.
                    None => {
                        self.rest = "";
                        body
                    }
                }
            }
            _ => {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                self.rest = &rest[end..];
                &rest[..end]
            }
        }
    }
}

impl<'a> Iterator for AttributeIter<'a> {
    type Item = TagAttribute<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return None;
        }

        let rest = self.rest;
        let key_end = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        let key = &rest[..key_end];
        self.rest = &rest[key_end..];

        let value = match self.rest.strip_prefix('=') {
            Some(after) => {
                self.rest = after;
                Some(self.take_value())
            }
            None => None,
        };

        Some(TagAttribute { key, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(raw: &str) -> TagToken<'_> {
        TagToken::new(raw, 0..raw.len() + 2, '/')
    }

    #[test]
    fn splits_name_and_attributes() {
        let t = tag(r#" Color  value="red" "#);
        assert_eq!(t.text(), r#"Color  value="red""#);
        assert_eq!(t.name(), "Color");
        assert_eq!(t.attributes(), r#"value="red""#);
        assert_eq!(t.canonical(), r#"color  value="red""#);
        assert!(!t.is_closing());
    }

    #[test]
    fn closing_tag() {
        let t = tag("/ B ");
        assert!(t.is_closing());
        assert!(!t.is_generic_close());
        assert_eq!(t.name(), "B");
        assert_eq!(t.canonical(), "b");
    }

    #[test]
    fn generic_close() {
        let t = tag("/");
        assert!(t.is_closing());
        assert!(t.is_generic_close());
        assert_eq!(t.name(), "");
    }

    #[test]
    fn attribute_items() {
        let t = tag(r#"font size=12 face='Helvetica Neue' bold name="x"#);
        let items: Vec<_> = t.attribute_list().collect();
        assert_eq!(
            items,
            vec![
                TagAttribute {
                    key: "size",
                    value: Some("12")
                },
                TagAttribute {
                    key: "face",
                    value: Some("Helvetica Neue")
                },
                TagAttribute {
                    key: "bold",
                    value: None
                },
                TagAttribute {
                    key: "name",
                    value: Some("x")
                },
            ]
        );
    }

    #[test]
    fn argument_is_first_bare_item() {
        assert_eq!(tag("color red").argument(), Some("red"));
        assert_eq!(tag("color value=blue green").argument(), Some("green"));
        assert_eq!(tag("color").argument(), None);
    }

    #[test]
    fn empty_value() {
        let t = tag("a key=");
        assert_eq!(t.attribute("key"), Some(""));
    }
}
