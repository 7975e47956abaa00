use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};

use crate::error::{ChartError, ChartResult};

/// One lexical unit of a CSS declaration value.
#[derive(Debug, Clone, PartialEq)]
pub enum LexicalUnit {
    Ident(String),
    /// `#` token, stored without the leading hash.
    Hash(String),
    Number(f64),
    Dimension { value: f64, unit: String },
    Percentage(f64),
    String(String),
    Function { name: String, args: Vec<LexicalUnit> },
}

impl LexicalUnit {
    /// Classifies a single declaration value. Comments and surrounding
    /// whitespace are ignored; anything after the first unit is an error.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let mut input = ParserInput::new(input);
        let mut parser = Parser::new(&mut input);
        parser
            .parse_entirely(Self::from_parser)
            .map_err(|err| style_error("value", err))
    }

    /// Reads the next unit from `parser`, skipping leading whitespace and
    /// comments. Function arguments are read from the nested block as a
    /// comma separated list.
    pub(crate) fn from_parser<'i>(
        parser: &mut Parser<'i, '_>,
    ) -> Result<Self, ParseError<'i, ChartError>> {
        parser.skip_whitespace();
        let start = parser.position();
        let location = parser.current_source_location();
        let token = parser.next()?.clone();
        let text = parser.slice_from(start);

        match token {
            Token::Ident(ident) => Ok(Self::Ident(ident.to_string())),
            Token::Hash(hash) | Token::IDHash(hash) => Ok(Self::Hash(hash.to_string())),
            Token::QuotedString(quoted) => Ok(Self::String(quoted.to_string())),
            Token::Number { value, .. } => Ok(Self::Number(exact_number(text, 0, value))),
            Token::Percentage {
                unit_value,
                int_value,
                ..
            } => {
                let fallback = int_value.map_or(unit_value * 100.0, |int| int as f32);
                Ok(Self::Percentage(exact_number(text, 1, fallback)))
            }
            Token::Dimension { value, unit, .. } => Ok(Self::Dimension {
                value: exact_number(text, unit.len(), value),
                unit: unit.to_ascii_lowercase(),
            }),
            Token::Function(name) => {
                let name = name.to_ascii_lowercase();
                let args = parser.parse_nested_block(|nested| {
                    nested.parse_comma_separated(|arg| Self::from_parser(arg))
                })?;
                Ok(Self::Function { name, args })
            }
            other => Err(location.new_unexpected_token_error(other)),
        }
    }

    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(ident) => Some(ident),
            _ => None,
        }
    }
}

/// cssparser keeps numbers as `f32`; re-reading the source text keeps
/// values such as `0.2` exact in `f64`.
fn exact_number(text: &str, suffix_len: usize, fallback: f32) -> f64 {
    text.len()
        .checked_sub(suffix_len)
        .and_then(|end| text.get(..end))
        .and_then(|number| number.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or_else(|| f64::from(fallback))
}

/// Converts a cssparser failure into `ChartError::InvalidStyle` for
/// `property`, passing custom errors through unchanged.
pub(crate) fn style_error(property: &str, err: ParseError<'_, ChartError>) -> ChartError {
    match err.kind {
        ParseErrorKind::Custom(inner) => inner,
        ParseErrorKind::Basic(kind) => ChartError::InvalidStyle {
            property: property.to_owned(),
            reason: format!(
                "{kind:?} at line {} column {}",
                err.location.line + 1,
                err.location.column
            ),
        },
    }
}
