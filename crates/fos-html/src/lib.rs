//! fOS HTML
//!
//! HTML5 parsing built on html5ever, plus outerHTML/innerHTML serialization
//! of `fos-dom` trees.

mod parser;
mod serializer;

pub use parser::HtmlParser;
pub use serializer::{get_inner_html, get_outer_html, HtmlSerializer};

/// Parse an HTML document into a DOM tree
pub fn parse(html: &str) -> Result<fos_dom::DomTree, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build DOM: {0}")]
    Dom(#[from] fos_dom::DomError),
}
