//! Imports of a document as the compiler writes it for a small contract.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use serde_json::Value;
use sol_import::{import_sources, AstJsonImporter, ErrorCategory, ImportError, ImportOptions};
use sol_ir::ast::{Expression, Node, Statement, Visibility};
use sol_ir::visitor::{count_nodes, preorder};
use sol_ir::TokenKind;

const OWNED: &str = include_str!("fixtures/Owned.json");

fn owned() -> Value {
    serde_json::from_str(OWNED).expect("fixture is valid JSON")
}

/// `(id, kind, range)` of every node object in the document.
fn document_nodes(value: &Value, out: &mut Vec<(i64, String, String)>) {
    match value {
        Value::Object(object) => {
            if let Some(Value::String(kind)) = object.get("nodeType") {
                let id = object.get("id").and_then(Value::as_i64).unwrap();
                let src = object.get("src").and_then(Value::as_str).unwrap();
                out.push((id, kind.clone(), src.to_owned()));
            }
            for child in object.values() {
                document_nodes(child, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                document_nodes(item, out);
            }
        }
        _ => {}
    }
}

#[test]
fn every_document_node_is_imported_once() {
    sol_import::init_tracing();
    let document = owned();
    let unit = AstJsonImporter::new(&document, "Owned.sol")
        .with_options(ImportOptions::strict())
        .import()
        .unwrap();

    let mut expected = Vec::new();
    document_nodes(&document, &mut expected);
    expected.sort();

    let mut imported: Vec<_> = preorder(&unit)
        .into_iter()
        .map(|n| (n.id.raw(), n.kind.as_str().to_owned(), n.span.to_string()))
        .collect();
    imported.sort();

    assert_eq!(imported, expected);
    assert_eq!(count_nodes(&unit), 48);
}

#[test]
fn contract_structure() {
    let unit = AstJsonImporter::new(&owned(), "Owned.sol").import().unwrap();
    assert_eq!(unit.absolute_path.as_deref(), Some("Owned.sol"));
    assert_eq!(unit.location.source_name(), "Owned.sol");

    let [Node::PragmaDirective(pragma), Node::ContractDefinition(owned)] = unit.nodes.as_slice()
    else {
        panic!("expected a pragma and a contract, found {:?}", unit.nodes);
    };
    assert_eq!(pragma.tokens.first(), Some(&TokenKind::Identifier));
    assert_eq!(owned.documentation.as_deref(), Some("Ownership with a transfer hook."));

    let kinds: Vec<_> = owned
        .sub_nodes
        .iter()
        .map(|n| sol_ir::AstNode::kind(n).as_str())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "VariableDeclaration",
            "EventDefinition",
            "FunctionDefinition",
            "ModifierDefinition",
            "FunctionDefinition",
        ]
    );

    let Node::VariableDeclaration(owner) = &owned.sub_nodes[0] else {
        unreachable!()
    };
    assert!(owner.is_state_variable);
    assert_eq!(owner.visibility, Visibility::Public);

    let Node::FunctionDefinition(constructor) = &owned.sub_nodes[2] else {
        unreachable!()
    };
    assert!(constructor.is_constructor);
    assert!(!constructor.is_payable);

    let Node::FunctionDefinition(transfer) = &owned.sub_nodes[4] else {
        unreachable!()
    };
    assert_eq!(transfer.modifiers[0].name.name, "onlyOwner");
    let statements = &transfer.body.as_ref().unwrap().statements;
    let Statement::Emit(emit) = &statements[0] else {
        panic!("expected an emit, found {:?}", statements[0]);
    };
    let Expression::Identifier(event) = &*emit.event_call.expression else {
        panic!("expected the event name");
    };
    assert_eq!(event.name, "OwnershipTransferred");
    let Statement::Expression(assign) = &statements[1] else {
        panic!("expected an assignment statement");
    };
    let Expression::Assignment(assign) = &assign.expression else {
        panic!("expected an assignment");
    };
    assert_eq!(assign.operator, TokenKind::Assign);
}

#[test]
fn duplicate_ids_rejected_only_when_strict() {
    let mut document = owned();
    // Give the pragma the contract's id.
    document["nodes"][0]["id"] = Value::from(58);

    assert!(AstJsonImporter::new(&document, "Owned.sol").import().is_ok());
    let strict = AstJsonImporter::new(&document, "Owned.sol")
        .with_options(ImportOptions::strict())
        .import();
    assert_eq!(
        strict.map_err(|e| e.category()),
        Err(ErrorCategory::InvariantViolation)
    );
}

#[test]
fn corrupt_range_anywhere_fails() {
    let mut document = owned();
    document["nodes"][1]["nodes"][4]["body"]["statements"][1]["expression"]["src"] =
        Value::from("468:452");
    let err = AstJsonImporter::new(&document, "Owned.sol").import().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::SchemaViolation);
    assert!(err.to_string().contains("468:452"), "{err}");
}

#[test]
fn batch_of_compiler_outputs() {
    let mut sources = BTreeMap::new();
    sources.insert("Owned.sol".to_owned(), owned());
    sources.insert("Empty.sol".to_owned(), serde_json::json!({ "nodeType": "SourceUnit", "nodes": [] }));

    let units = import_sources(&sources, &ImportOptions::default()).unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units["Owned.sol"].nodes.len(), 2);
    assert!(units["Empty.sol"].nodes.is_empty());

    sources.insert(
        "Broken.sol".to_owned(),
        serde_json::json!({ "nodeType": "SourceUnit", "nodes": [{ "nodeType": "Frob" }] }),
    );
    assert_eq!(
        import_sources(&sources, &ImportOptions::default()),
        Err(ImportError::UnknownKind {
            kind: "Frob".to_owned(),
        })
    );
}
