//! CSS-style value model for chart elements.
//!
//! Only value parsing lives here: each property names a `StyleValueHandler`,
//! and the handler turns one `LexicalUnit` into a `StyleValue`. There is no
//! cascade; `StyleResolver` reads inline `style` attributes.

mod handlers;
mod keys;
mod layout_style;
mod lexical;
mod resolver;
mod values;

pub use handlers::StyleValueHandler;
pub use keys::StyleKey;
pub use layout_style::LayoutStyle;
pub use lexical::LexicalUnit;
pub use resolver::StyleResolver;
pub use values::StyleValue;
