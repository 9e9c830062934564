//! Case-changing markups.

use tagmark::{Markup, MarkupError, ParseContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
}

/// Rewrites the enclosed text to one case.
///
/// The transform replaces the content, so styles nested inside a case
/// markup are collapsed into the case markup's own run unless the text is
/// already in that case.
#[derive(Clone, Debug)]
pub struct CaseMarkup {
    case: Case,
}

impl CaseMarkup {
    pub fn upper() -> Self {
        Self { case: Case::Upper }
    }

    pub fn lower() -> Self {
        Self { case: Case::Lower }
    }

    pub fn case(&self) -> Case {
        self.case
    }
}

impl Markup for CaseMarkup {
    fn tag(&self) -> &str {
        match self.case {
            Case::Upper => "upper",
            Case::Lower => "lower",
        }
    }

    fn transform_content(
        &self,
        content: String,
        _context: &mut ParseContext,
    ) -> Result<String, MarkupError> {
        Ok(match self.case {
            Case::Upper => content.to_uppercase(),
            Case::Lower => content.to_lowercase(),
        })
    }
}
