//! Cascade Markup Loaders
//!
//! Turns XML or HTML text into [`Element`] trees ready to be loaded into an
//! [`AttrTree`](cascade_dom::AttrTree). Text content, comments and
//! processing instructions carry no attributes and are dropped.

mod html;
mod xml;

pub use html::HtmlLoader;
pub use xml::XmlLoader;

use cascade_dom::Element;
use std::path::Path;

/// Parse an XML document into its root element
pub fn parse_xml(xml: &str) -> Result<Element, MarkupError> {
    XmlLoader::new().parse(xml)
}

/// Parse an HTML document into its root element
pub fn parse_html(html: &str) -> Result<Element, MarkupError> {
    HtmlLoader::new().parse(html)
}

/// Source format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xml,
    Html,
}

impl Format {
    /// Guess the format from a file extension, XML unless `.html`/`.htm`
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
                Self::Html
            }
            _ => Self::Xml,
        }
    }
}

/// Read and parse a document file, choosing the format by extension
pub fn load_file(path: impl AsRef<Path>) -> Result<Element, MarkupError> {
    let path = path.as_ref();
    load_file_as(path, Format::from_path(path))
}

/// Read and parse a document file in the given format
pub fn load_file_as(path: impl AsRef<Path>, format: Format) -> Result<Element, MarkupError> {
    let path = path.as_ref();
    tracing::debug!("Loading {:?} document: {}", format, path.display());
    let text = std::fs::read_to_string(path)?;
    match format {
        Format::Xml => parse_xml(&text),
        Format::Html => parse_html(&text),
    }
}

/// Markup loading error
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        source: quick_xml::Error,
    },

    #[error("Malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document has no root element")]
    EmptyDocument,

    #[error("Document has more than one root element: <{tag}>")]
    MultipleRoots { tag: String },

    #[error("Closing tag without matching open tag")]
    UnexpectedClose,

    #[error("Unclosed tag: {tag}")]
    Unclosed { tag: String },
}
