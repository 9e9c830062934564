//! Frame stack and per-tag lifecycle.
//!
//! Drives one parse: tokens come in, opening tags push frames, closing tags
//! pop them, and everything else becomes text in the output builder.

use std::sync::Arc;

use crate::context::ParseContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind, Parsed};
use crate::error::MarkupError;
use crate::markup::Markup;
use crate::value::Configuration;

use super::output::OutputBuilder;
use super::resolver::RuleSet;
use super::tag::TagToken;
use super::tokenizer::Token;

/// One open tag.
struct MarkupFrame<'a> {
    markup: Arc<dyn Markup>,
    tag: TagToken<'a>,
    configuration: Configuration,
    prefix: String,
    /// Output position the frame's content starts at.
    content_start: usize,
}

/// Working state of a single parse.
pub(crate) struct FrameStack<'a> {
    input: &'a str,
    rules: Arc<RuleSet>,
    context: ParseContext,
    frames: Vec<MarkupFrame<'a>>,
    output: OutputBuilder,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> FrameStack<'a> {
    pub(crate) fn new(input: &'a str, rules: Arc<RuleSet>, context: ParseContext) -> Self {
        Self {
            input,
            rules,
            context,
            frames: Vec::new(),
            output: OutputBuilder::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Process a single token.
    pub(crate) fn process_token(&mut self, token: Token<'a>) -> Result<(), MarkupError> {
        match token {
            Token::Text(text) => self.output.push_text(text),
            Token::Escaped(c) => self.output.push_char(c),
            Token::Tag(tag) if tag.is_closing() => self.process_close_tag(tag)?,
            Token::Tag(tag) => self.process_open_tag(tag)?,
        }
        Ok(())
    }

    fn process_open_tag(&mut self, tag: TagToken<'a>) -> Result<(), MarkupError> {
        let Some(markup) = self.rules.resolve(tag.text()).cloned() else {
            self.degrade(DiagnosticKind::UnknownTag, &tag);
            return Ok(());
        };

        let mut configuration = Configuration::new();
        markup.on_open(&tag, &mut configuration, &mut self.context)?;
        let prefix = markup.prefix(&mut self.context)?;

        log::trace!("open `{}` with markup `{}`", tag.text(), markup.tag());
        self.frames.push(MarkupFrame {
            markup,
            tag,
            configuration,
            prefix,
            content_start: self.output.mark(),
        });
        Ok(())
    }

    fn process_close_tag(&mut self, tag: TagToken<'a>) -> Result<(), MarkupError> {
        let generic = tag.is_generic_close();
        let resolved = if generic {
            None
        } else {
            self.rules.resolve(tag.text())
        };

        // [/] closes whatever is innermost; a named close must resolve to the
        // innermost frame's markup. No search through ancestors.
        let closes_top = match self.frames.last() {
            Some(top) => generic || resolved.is_some_and(|markup| Arc::ptr_eq(markup, &top.markup)),
            None => false,
        };

        if !closes_top {
            let kind = if generic || resolved.is_some() {
                DiagnosticKind::UnmatchedClosingTag
            } else {
                DiagnosticKind::UnknownTag
            };
            self.degrade(kind, &tag);
            return Ok(());
        }

        self.pop_frame()
    }

    /// Pop the innermost frame and wrap its content.
    fn pop_frame(&mut self) -> Result<(), MarkupError> {
        let Some(mut frame) = self.frames.pop() else {
            return Ok(());
        };
        let markup = &frame.markup;

        let body = self.output.text_since(frame.content_start);
        let body = markup.transform_content(body, &mut self.context)?;
        markup.on_close(&frame.tag, &mut frame.configuration, &mut self.context)?;
        let suffix = markup.suffix(&mut self.context)?;

        log::trace!("close `{}`", frame.tag.text());
        self.output.wrap(
            frame.content_start,
            frame.prefix,
            body,
            suffix,
            &frame.configuration,
        );
        Ok(())
    }

    /// Keep a tag that could not be applied as literal text.
    fn degrade(&mut self, kind: DiagnosticKind, tag: &TagToken<'a>) {
        log::debug!("{} `{}` kept as text", kind, tag.raw());
        self.output.push_text(&self.input[tag.span()]);
        self.diagnostics
            .push(Diagnostic::new(kind, tag.raw(), tag.span()));
    }

    /// Close any frames left open and produce the result.
    pub(crate) fn finish(mut self) -> Result<Parsed, MarkupError> {
        while let Some(frame) = self.frames.last() {
            log::debug!("force-closing unclosed tag `{}`", frame.tag.raw());
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnclosedTag,
                frame.tag.raw(),
                frame.tag.span(),
            ));
            self.pop_frame()?;
        }

        Ok(Parsed {
            rich_text: self.output.finish(),
            diagnostics: self.diagnostics,
        })
    }
}
