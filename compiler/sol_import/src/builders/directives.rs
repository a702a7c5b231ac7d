//! Source units, pragmas and imports.

use serde_json::Value;
use sol_ir::ast::{Identifier, ImportDirective, PragmaDirective, SourceUnit, SymbolAlias};
use sol_ir::NodeId;

use super::bare_identifier;
use crate::dispatch::Converter;
use crate::document::DocNode;
use crate::error::ImportError;
use crate::token::resolve_token;

impl Converter<'_> {
    /// The root. `id` and `src` are optional here and nowhere else.
    pub(crate) fn source_unit(&mut self, doc: &DocNode<'_>) -> Result<SourceUnit, ImportError> {
        let location = self.root_location(doc)?;
        let id = NodeId::new(doc.raw_id().unwrap_or(0));
        let field = if doc.structural("nodes").is_some() {
            "nodes"
        } else {
            "children"
        };
        let nodes = self.list(doc, field)?;
        Ok(SourceUnit {
            id,
            location,
            absolute_path: doc.opt_str("absolutePath")?.map(str::to_owned),
            nodes,
        })
    }

    pub(crate) fn pragma_directive(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<PragmaDirective, ImportError> {
        let location = self.location(doc)?;
        let literals = doc.strings("literals")?;
        let tokens = literals
            .iter()
            .map(|literal| resolve_token(literal))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PragmaDirective {
            id: self.node_id(doc)?,
            location,
            tokens,
            literals,
        })
    }

    pub(crate) fn import_directive(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ImportDirective, ImportError> {
        let location = self.location(doc)?;
        let id = self.node_id(doc)?;
        let path = doc.str("file")?.to_owned();
        let unit_alias = doc.opt_str("unitAlias")?.unwrap_or_default().to_owned();

        let mut symbol_aliases = Vec::new();
        for entry in doc.list("symbolAliases")? {
            let Some(entry) = entry.as_object() else {
                return Err(ImportError::wrong_type(
                    doc.context(),
                    "symbolAliases",
                    "a list of alias objects",
                ));
            };
            let foreign = match entry.get("foreign") {
                Some(Value::String(name)) => bare_identifier(name, id, &location),
                Some(node @ Value::Object(_)) => {
                    self.convert_as::<Identifier>(doc, "symbolAliases", node)?
                }
                _ => {
                    return Err(ImportError::wrong_type(
                        doc.context(),
                        "symbolAliases",
                        "aliases with an identifier or name in `foreign`",
                    ))
                }
            };
            let local = match entry.get("local") {
                None | Some(Value::Null) => None,
                Some(Value::String(name)) => Some(name.clone()),
                Some(_) => {
                    return Err(ImportError::wrong_type(
                        doc.context(),
                        "symbolAliases",
                        "aliases with a string or null `local`",
                    ))
                }
            };
            symbol_aliases.push(SymbolAlias { foreign, local });
        }

        Ok(ImportDirective {
            id,
            location,
            path,
            unit_alias,
            symbol_aliases,
        })
    }
}
