//! Error types for NSQ loading, entity building and report projection

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Entity types found in an NSQ export, used to label errors and lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Document,
    Task,
    User,
    Filter,
    Field,
    FieldValue,
    OfficeReport,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Document => "document",
            EntityKind::Task => "task",
            EntityKind::User => "user",
            EntityKind::Filter => "filter",
            EntityKind::Field => "field",
            EntityKind::FieldValue => "field value",
            EntityKind::OfficeReport => "office report",
        };
        f.write_str(name)
    }
}

/// The source tree does not have the shape the entity schema expects
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{entity} is missing required properties: {}", properties.join(", "))]
    MissingProperties {
        entity: EntityKind,
        properties: Vec<String>,
    },

    #[error("{entity} has no element at expected nesting '{step}'")]
    MissingNesting { entity: EntityKind, step: String },

    #[error("{entity} contains a <{tag}> property without a name attribute")]
    UnnamedProperty { entity: EntityKind, tag: String },
}

#[derive(Debug, Error)]
pub enum NsqError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not well-formed XML: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("{kind} '{id}' referenced by {referrer} does not exist")]
    Reference {
        kind: EntityKind,
        id: String,
        referrer: String,
    },

    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<NsqError>,
    },

    #[error("failed to write CSV to {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl NsqError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NsqError::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the file being processed to errors that do not already name it
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            NsqError::Schema(_) | NsqError::Reference { .. } => NsqError::InFile {
                path: path.into(),
                source: Box::new(self),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, NsqError>;
