//! Scenario tests over whole documents.

mod declarations;

use serde_json::{json, Value};
use sol_ir::ast::SourceUnit;
use sol_ir::{AstNode, Narrow, SourceName};

use crate::dispatch::Converter;
use crate::{AstJsonImporter, ImportError, ImportOptions};

pub(super) fn import(document: &Value) -> Result<SourceUnit, ImportError> {
    AstJsonImporter::new(document, "A.sol").import()
}

pub(super) fn import_ok(document: &Value) -> SourceUnit {
    match import(document) {
        Ok(unit) => unit,
        Err(err) => panic!("import failed: {err}"),
    }
}

/// Convert a single node and narrow it; panics if it narrows to something else.
pub(super) fn convert<T: Narrow>(value: &Value) -> Result<T, ImportError> {
    let options = ImportOptions::default();
    let node = Converter::new(SourceName::new("A.sol"), &options).convert(value)?;
    match T::narrow(node) {
        Ok(narrowed) => Ok(narrowed),
        Err(other) => panic!("expected {}, found {}", T::EXPECTED, other.kind()),
    }
}

pub(super) fn convert_ok<T: Narrow>(value: &Value) -> T {
    match convert(value) {
        Ok(node) => node,
        Err(err) => panic!("conversion failed: {err}"),
    }
}

// Document fixtures. Ranges are arbitrary but well formed.

pub(super) fn unit(nodes: Vec<Value>) -> Value {
    json!({ "nodeType": "SourceUnit", "id": 0, "src": "0:200", "nodes": nodes })
}

pub(super) fn ident(id: i64, name: &str) -> Value {
    json!({ "nodeType": "Identifier", "id": id, "src": "10:11", "name": name })
}

pub(super) fn number(id: i64, value: &str) -> Value {
    json!({
        "nodeType": "Literal",
        "id": id,
        "src": "20:22",
        "kind": "number",
        "value": value,
        "hexValue": null,
        "subdenomination": null,
    })
}

pub(super) fn elementary(id: i64, name: &str) -> Value {
    json!({ "nodeType": "ElementaryTypeName", "id": id, "src": "30:37", "name": name })
}

pub(super) fn param_list(id: i64, parameters: Vec<Value>) -> Value {
    json!({ "nodeType": "ParameterList", "id": id, "src": "40:42", "parameters": parameters })
}

pub(super) fn variable(id: i64, name: &str, type_name: Value) -> Value {
    json!({
        "nodeType": "VariableDeclaration",
        "id": id,
        "src": "50:60",
        "name": name,
        "typeName": type_name,
        "constant": false,
        "stateVariable": false,
        "storageLocation": "default",
        "visibility": "internal",
        "value": null,
    })
}

pub(super) fn block(id: i64, statements: Vec<Value>) -> Value {
    json!({ "nodeType": "Block", "id": id, "src": "70:90", "statements": statements })
}

pub(super) fn expression_statement(id: i64, expression: Value) -> Value {
    json!({ "nodeType": "ExpressionStatement", "id": id, "src": "71:80", "expression": expression })
}

pub(super) fn function(id: i64, name: &str, body: Value) -> Value {
    json!({
        "nodeType": "FunctionDefinition",
        "id": id,
        "src": "100:150",
        "name": name,
        "visibility": "public",
        "isConstructor": false,
        "constant": false,
        "payable": false,
        "implemented": true,
        "parameters": param_list(id + 1000, vec![]),
        "returnParameters": param_list(id + 2000, vec![]),
        "modifiers": [],
        "body": body,
    })
}

pub(super) fn contract(id: i64, name: &str, nodes: Vec<Value>) -> Value {
    json!({
        "nodeType": "ContractDefinition",
        "id": id,
        "src": "0:199",
        "name": name,
        "contractKind": "contract",
        "baseContracts": [],
        "nodes": nodes,
    })
}

/// `value` with `keys` removed.
pub(super) fn without(mut value: Value, keys: &[&str]) -> Value {
    if let Some(object) = value.as_object_mut() {
        for key in keys {
            object.remove(*key);
        }
    }
    value
}
