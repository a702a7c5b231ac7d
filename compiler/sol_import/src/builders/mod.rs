//! Node builders, one per document kind.
//!
//! Each builder decodes the node's location and id, reads its scalar fields
//! and converts its children through the dispatcher.

mod declarations;
mod directives;
mod expressions;
mod statements;
mod types;

use serde_json::Value;
use sol_ir::ast::{Identifier, StorageLocation, Visibility};
use sol_ir::{NodeId, SourceLocation};

use crate::attributes::{decode_storage_location, decode_visibility};
use crate::document::DocNode;
use crate::error::ImportError;

/// `view`/`pure`/`constant` and `payable`, from either the boolean flags
/// or `stateMutability`.
struct Mutability {
    is_constant: bool,
    is_payable: bool,
}

fn mutability(doc: &DocNode<'_>) -> Result<Mutability, ImportError> {
    let state = doc.opt_str("stateMutability")?;
    let is_constant = match doc.opt_bool("constant")? {
        Some(flag) => flag,
        None => matches!(state, Some("view" | "pure" | "constant")),
    };
    let is_payable = match doc.opt_bool("payable")? {
        Some(flag) => flag,
        None => state == Some("payable"),
    };
    Ok(Mutability {
        is_constant,
        is_payable,
    })
}

/// `visibility`, defaulting when absent.
fn visibility(doc: &DocNode<'_>) -> Result<Visibility, ImportError> {
    match doc.opt_str("visibility")? {
        Some(text) => decode_visibility(text, &doc.context()),
        None => Ok(Visibility::Default),
    }
}

/// `storageLocation` (or `location`), defaulting when absent.
fn storage_location(doc: &DocNode<'_>) -> Result<StorageLocation, ImportError> {
    let text = match doc.opt_str("storageLocation")? {
        Some(text) => Some(text),
        None => doc.opt_str("location")?,
    };
    match text {
        Some(text) => decode_storage_location(text, &doc.context()),
        None => Ok(StorageLocation::Default),
    }
}

/// Documentation as a plain string or as a `{ "text": ... }` object.
fn documentation(doc: &DocNode<'_>) -> Result<Option<String>, ImportError> {
    match doc.scalar("documentation") {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Object(object)) => match object.get("text") {
            Some(Value::String(text)) => Ok(Some(text.clone())),
            _ => Err(ImportError::wrong_type(
                doc.context(),
                "documentation",
                "a string or a documentation node",
            )),
        },
        Some(_) => Err(ImportError::wrong_type(
            doc.context(),
            "documentation",
            "a string or a documentation node",
        )),
    }
}

/// An identifier known only by name; it borrows its owner's id and location.
fn bare_identifier(name: &str, id: NodeId, location: &SourceLocation) -> Identifier {
    Identifier {
        id,
        location: location.clone(),
        name: name.to_owned(),
    }
}
