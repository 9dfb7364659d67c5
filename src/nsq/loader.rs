//! NSQ file loading
//!
//! NSQ exports open with a declaration line that XML parsers reject. The
//! loader drops exactly one leading line and prefixes a standard declaration
//! before parsing.

use log::debug;
use roxmltree::{Document, Node};
use std::fs;
use std::path::{Path, PathBuf};

use super::path::Step;
use super::property::PropertyIndex;
use crate::error::{EntityKind, NsqError, Result, SchemaError};

/// Declaration placed in front of every NSQ body before parsing
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// The normalized XML text of one NSQ file
#[derive(Debug, Clone)]
pub struct NsqSource {
    path: PathBuf,
    xml: String,
}

impl NsqSource {
    /// Read an NSQ file and normalize its declaration
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| NsqError::io(path, e))?;
        debug!("Read {} bytes from {}", raw.len(), path.display());
        Ok(Self::from_raw(path, &raw))
    }

    /// Build a source from raw file content. `path` is only used in errors.
    pub fn from_raw(path: impl Into<PathBuf>, raw: &str) -> Self {
        Self {
            path: path.into(),
            xml: normalize_declaration(raw),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the normalized text into an XML tree
    pub fn parse(&self) -> Result<Document<'_>> {
        Document::parse(&self.xml).map_err(|source| NsqError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Replace the first line of `raw` with [`XML_DECLARATION`].
/// Content without a line break is treated as a lone declaration line.
pub fn normalize_declaration(raw: &str) -> String {
    let body = raw.find('\n').map_or("", |pos| &raw[pos + 1..]);
    let mut xml = String::with_capacity(XML_DECLARATION.len() + body.len());
    xml.push_str(XML_DECLARATION);
    xml.push_str(body);
    xml
}

/// The document object: first child of the top-level element
pub fn document_object<'a, 'input>(doc: &'a Document<'input>) -> Result<Node<'a, 'input>> {
    let root = doc.root_element();
    root.first_element_child().ok_or_else(|| {
        SchemaError::MissingNesting {
            entity: EntityKind::Document,
            step: format!("<{}>{}", root.tag_name().name(), Step::First),
        }
        .into()
    })
}

/// Named-property index of the document object
pub fn property_index<'a, 'input>(doc: &'a Document<'input>) -> Result<PropertyIndex<'a, 'input>> {
    Ok(PropertyIndex::of_object(
        document_object(doc)?,
        EntityKind::Document,
    )?)
}
