use cssparser::{Delimiter, ParseError, Parser, ParserInput, parse_important};
use tracing::{debug, trace, warn};

use crate::core::{ATTRIBUTE_STYLE, ChartDocument, ElementId};
use crate::css::lexical::style_error;
use crate::css::{LayoutStyle, LexicalUnit, StyleKey, StyleValue};
use crate::error::{ChartError, ChartResult};

/// Resolves inline `style` attributes into element layout styles.
///
/// Declarations are applied in order, so a later declaration of the same
/// property wins. In lenient mode unknown properties and invalid values are
/// dropped; in strict mode they fail the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleResolver {
    strict: bool,
}

impl StyleResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    #[must_use]
    pub const fn is_strict(self) -> bool {
        self.strict
    }

    /// Parses one `property: value` declaration. A trailing `!important`
    /// is accepted and ignored.
    pub fn parse_declaration(declaration: &str) -> ChartResult<(StyleKey, StyleValue)> {
        let mut input = ParserInput::new(declaration);
        let mut parser = Parser::new(&mut input);
        match parser.parse_entirely(|p| declaration_tokens(p)) {
            Ok(Some(parsed)) => Ok(parsed),
            Ok(None) => Err(ChartError::InvalidStyle {
                property: String::new(),
                reason: "empty declaration".to_owned(),
            }),
            Err(err) => Err(style_error("declaration", err)),
        }
    }

    /// Applies a declaration block to `style`, returning how many
    /// declarations were applied.
    pub fn apply_declarations(self, style: &mut LayoutStyle, block: &str) -> ChartResult<usize> {
        let mut input = ParserInput::new(block);
        let mut parser = Parser::new(&mut input);
        let mut applied = 0;
        while !parser.is_exhausted() {
            let start = parser.position();
            match parser.parse_until_after(Delimiter::Semicolon, |p| declaration_tokens(p)) {
                Ok(Some((key, value))) => {
                    style.set(key, value);
                    applied += 1;
                }
                Ok(None) => {}
                Err(err) => {
                    let err = style_error("declaration", err);
                    if self.strict {
                        return Err(err);
                    }
                    let declaration = parser.slice_from(start).trim().trim_end_matches(';');
                    warn!(declaration, error = %err, "dropping style declaration");
                }
            }
        }
        Ok(applied)
    }

    /// Resolves the `style` attribute of every element in `document`.
    pub fn resolve_document(self, document: &mut ChartDocument) -> ChartResult<usize> {
        let ids: Vec<ElementId> = document.ids().collect();
        let mut applied = 0;
        for id in ids {
            let Some(element) = document.element_mut(id) else {
                continue;
            };
            let Some(block) = element.attribute(ATTRIBUTE_STYLE).map(str::to_owned) else {
                continue;
            };
            applied += self.apply_declarations(element.layout_style_mut(), &block)?;
        }
        debug!(applied, strict = self.strict, "resolved inline styles");
        Ok(applied)
    }
}

/// Reads `name: value [!important]` up to the end of the delimited block.
/// An empty block yields `None`.
fn declaration_tokens<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Option<(StyleKey, StyleValue)>, ParseError<'i, ChartError>> {
    if parser.is_exhausted() {
        return Ok(None);
    }
    let name = parser.expect_ident()?.to_string();
    let Some(key) = StyleKey::from_css_name(&name) else {
        return Err(parser.new_custom_error(ChartError::InvalidStyle {
            property: name,
            reason: "unknown property".to_owned(),
        }));
    };
    parser
        .expect_colon()
        .map_err(|err| parser.new_custom_error(style_error(key.css_name(), err.into())))?;
    let unit = LexicalUnit::from_parser(parser)
        .map_err(|err| parser.new_custom_error(style_error(key.css_name(), err)))?;
    let important = parser.try_parse(parse_important).is_ok();
    parser
        .expect_exhausted()
        .map_err(|err| parser.new_custom_error(style_error(key.css_name(), err.into())))?;
    let value = key
        .handler()
        .create_value(key, &unit)
        .map_err(|err| parser.new_custom_error(err))?;
    trace!(property = key.css_name(), important, "parsed style declaration");
    Ok(Some((key, value)))
}
