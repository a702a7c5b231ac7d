//! Decoders for enumerated attributes.
//!
//! Each decoder is one exhaustive match; a string outside the set is an
//! invariant violation. Visibility accepts both the capitalized and the
//! lowercase spelling written by different exporters.

use sol_ir::ast::{ContractKind, StorageLocation, Visibility};

use crate::error::{ImportError, NodeContext};

pub fn decode_visibility(text: &str, node: &NodeContext) -> Result<Visibility, ImportError> {
    match text {
        "Default" | "default" => Ok(Visibility::Default),
        "Private" | "private" => Ok(Visibility::Private),
        "Internal" | "internal" => Ok(Visibility::Internal),
        "Public" | "public" => Ok(Visibility::Public),
        "External" | "external" => Ok(Visibility::External),
        other => Err(ImportError::invariant(
            node.clone(),
            format!("unknown visibility `{other}`"),
        )),
    }
}

pub fn decode_storage_location(
    text: &str,
    node: &NodeContext,
) -> Result<StorageLocation, ImportError> {
    match text {
        "default" => Ok(StorageLocation::Default),
        "storage" => Ok(StorageLocation::Storage),
        "memory" => Ok(StorageLocation::Memory),
        other => Err(ImportError::invariant(
            node.clone(),
            format!("unknown storage location `{other}`"),
        )),
    }
}

pub fn decode_contract_kind(text: &str, node: &NodeContext) -> Result<ContractKind, ImportError> {
    match text {
        "contract" => Ok(ContractKind::Contract),
        "interface" => Ok(ContractKind::Interface),
        "library" => Ok(ContractKind::Library),
        other => Err(ImportError::invariant(
            node.clone(),
            format!("unknown contract kind `{other}`"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sol_ir::NodeKind;

    use super::*;
    use crate::ErrorCategory;

    fn ctx() -> NodeContext {
        NodeContext::new(NodeKind::FunctionDefinition, Some(7))
    }

    #[test]
    fn every_visibility_decodes() {
        let cases = [
            ("Default", Visibility::Default),
            ("Private", Visibility::Private),
            ("Internal", Visibility::Internal),
            ("Public", Visibility::Public),
            ("External", Visibility::External),
        ];
        for (text, expected) in cases {
            assert_eq!(decode_visibility(text, &ctx()), Ok(expected), "{text}");
            assert_eq!(
                decode_visibility(&text.to_lowercase(), &ctx()),
                Ok(expected),
                "{text}"
            );
        }
    }

    #[test]
    fn unknown_visibility_is_an_invariant_violation() {
        let err = decode_visibility("PUBLIC", &ctx());
        assert_eq!(
            err,
            Err(ImportError::InvariantViolation {
                node: ctx(),
                message: "unknown visibility `PUBLIC`".to_owned(),
            })
        );
    }

    #[test]
    fn storage_locations() {
        assert_eq!(decode_storage_location("default", &ctx()), Ok(StorageLocation::Default));
        assert_eq!(decode_storage_location("storage", &ctx()), Ok(StorageLocation::Storage));
        assert_eq!(decode_storage_location("memory", &ctx()), Ok(StorageLocation::Memory));
        assert_eq!(
            decode_storage_location("calldata", &ctx()).map_err(|e| e.category()),
            Err(ErrorCategory::InvariantViolation)
        );
    }

    #[test]
    fn contract_kinds() {
        assert_eq!(decode_contract_kind("contract", &ctx()), Ok(ContractKind::Contract));
        assert_eq!(decode_contract_kind("interface", &ctx()), Ok(ContractKind::Interface));
        assert_eq!(decode_contract_kind("library", &ctx()), Ok(ContractKind::Library));
        assert!(decode_contract_kind("Contract", &ctx()).is_err());
    }
}
