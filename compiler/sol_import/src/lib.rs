//! Solidity AST import.
//!
//! Rebuilds the typed AST of one source from the JSON document an AST
//! exporter wrote for it, so later compiler phases can run on it unchanged.
//!
//! # Architecture
//!
//! - `document`: view over one document node (kind tag, field layout)
//! - `location`: `"<start>:<end>"` range markers
//! - `token`: operator, literal and type tokens recovered from their text
//! - `attributes`: visibility, storage location and contract kind decoders
//! - `dispatch`: the recursive entry point every builder converts children
//!   through
//! - `builders`: one builder per node kind
//!
//! # Usage
//!
//! ```text
//! let document: serde_json::Value = serde_json::from_str(&json)?;
//! let unit = AstJsonImporter::new(&document, "A.sol").import()?;
//! ```
//!
//! An import either returns the whole tree or the first error it hit.

mod attributes;
mod builders;
mod dispatch;
mod document;
mod error;
mod location;
mod options;
mod token;

use std::collections::BTreeMap;
use std::sync::Once;

use rayon::prelude::*;
use serde_json::Value;
use sol_ir::ast::SourceUnit;
use sol_ir::{Narrow, SourceName};
use tracing::debug;

pub use attributes::{decode_contract_kind, decode_storage_location, decode_visibility};
pub use error::{ErrorCategory, ImportError, NodeContext, SchemaReason, TokenErrorReason};
pub use location::{decode_location, parse_range};
pub use options::{FieldLayout, ImportOptions};
pub use token::resolve_token;

use dispatch::Converter;
use document::DocNode;

/// Imports one source's AST document.
pub struct AstJsonImporter<'doc> {
    document: &'doc Value,
    source: SourceName,
    options: ImportOptions,
}

impl<'doc> AstJsonImporter<'doc> {
    /// Every location in the result is attributed to `source_name`.
    pub fn new(document: &'doc Value, source_name: impl Into<SourceName>) -> Self {
        AstJsonImporter {
            document,
            source: source_name.into(),
            options: ImportOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Run the import.
    ///
    /// The root must be a source unit. Any error aborts the whole import.
    pub fn import(&self) -> Result<SourceUnit, ImportError> {
        debug!(source = %self.source, "importing AST");
        let mut converter = Converter::new(self.source.clone(), &self.options);

        let result = converter.convert(self.document).and_then(|root| {
            SourceUnit::narrow(root).map_err(|found| {
                let context = DocNode::new(self.document, self.options.layout)
                    .map(|doc| doc.context())
                    .unwrap_or_default();
                ImportError::invariant(
                    context,
                    format!("root is a {}, not a source unit", sol_ir::AstNode::kind(&found)),
                )
            })
        });

        match &result {
            Ok(_) => debug!(
                source = %self.source,
                nodes = converter.converted(),
                "imported AST"
            ),
            Err(err) => debug!(source = %self.source, error = %err, "AST import failed"),
        }
        result
    }
}

/// Import every source of a multi-source compiler output in parallel.
///
/// Each source gets its own importer. On failure the error of the first
/// failing source in name order is returned.
pub fn import_sources(
    sources: &BTreeMap<String, Value>,
    options: &ImportOptions,
) -> Result<BTreeMap<String, SourceUnit>, ImportError> {
    let results: BTreeMap<&String, Result<SourceUnit, ImportError>> = sources
        .par_iter()
        .map(|(name, document)| {
            let unit = AstJsonImporter::new(document, name.as_str())
                .with_options(options.clone())
                .import();
            (name, unit)
        })
        .collect();

    let mut units = BTreeMap::new();
    for (name, result) in results {
        units.insert(name.clone(), result?);
    }
    Ok(units)
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set; safe to call more than once.
/// The importer itself never installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
