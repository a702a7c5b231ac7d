use pretty_assertions::assert_eq;
use serde_json::json;
use sol_ir::ast::{
    ContractDefinition, ContractKind, EventDefinition, FunctionDefinition, ImportDirective, Node,
    PragmaDirective, StorageLocation, TypeName, UsingForDirective, VariableDeclaration, Visibility,
};
use sol_ir::{NodeId, Span, TokenKind};

use super::{
    block, contract, convert, convert_ok, elementary, function, import_ok, param_list, unit,
    variable, without,
};
use crate::{ErrorCategory, ImportError, NodeContext};

#[test]
fn pragma_tokens_follow_literals() {
    let pragma = json!({
        "nodeType": "PragmaDirective",
        "id": 1,
        "src": "0:23",
        "literals": ["solidity", "^", "0.4", ".24"],
    });
    let pragma: PragmaDirective = convert_ok(&pragma);
    assert_eq!(pragma.literals, vec!["solidity", "^", "0.4", ".24"]);
    assert_eq!(
        pragma.tokens,
        vec![
            TokenKind::Identifier,
            TokenKind::BitXor,
            TokenKind::Number,
            TokenKind::Number,
        ]
    );
}

#[test]
fn pragma_literal_that_is_not_one_token() {
    let pragma = json!({
        "nodeType": "PragmaDirective",
        "id": 1,
        "src": "0:23",
        "literals": ["experimental", "ABIEncoderV2 x"],
    });
    assert_eq!(
        convert::<PragmaDirective>(&pragma).map_err(|e| e.category()),
        Err(ErrorCategory::InvalidToken)
    );
}

#[test]
fn import_aliases() {
    let directive = json!({
        "nodeType": "ImportDirective",
        "id": 7,
        "src": "25:40",
        "file": "./Token.sol",
        "unitAlias": "",
        "symbolAliases": [
            { "foreign": "Token", "local": "T" },
            {
                "foreign": { "nodeType": "Identifier", "id": 8, "src": "33:38", "name": "Owned" },
                "local": null,
            },
        ],
    });
    let directive: ImportDirective = convert_ok(&directive);
    assert_eq!(directive.path, "./Token.sol");
    assert_eq!(directive.unit_alias, "");
    assert_eq!(directive.symbol_aliases.len(), 2);

    let bare = &directive.symbol_aliases[0];
    assert_eq!(bare.foreign.name, "Token");
    assert_eq!(bare.foreign.id, NodeId(7));
    assert_eq!(bare.foreign.location.span, Span::new(25, 40));
    assert_eq!(bare.local.as_deref(), Some("T"));

    let node = &directive.symbol_aliases[1];
    assert_eq!(node.foreign.id, NodeId(8));
    assert_eq!(node.foreign.location.span, Span::new(33, 38));
    assert_eq!(node.local, None);
}

#[test]
fn contract_kinds_and_bases() {
    let mut library = contract(1, "SafeMath", vec![]);
    library["contractKind"] = json!("library");
    library["baseContracts"] = json!([{
        "nodeType": "InheritanceSpecifier",
        "id": 2,
        "src": "20:25",
        "baseName": { "nodeType": "UserDefinedTypeName", "id": 3, "src": "20:25", "name": "Base" },
        "arguments": [super::number(4, "1")],
    }]);
    let library: ContractDefinition = convert_ok(&library);
    assert_eq!(library.contract_kind, ContractKind::Library);
    assert_eq!(library.base_contracts.len(), 1);
    assert_eq!(library.base_contracts[0].base_name.qualified_name(), "Base");
    assert_eq!(library.base_contracts[0].arguments.len(), 1);

    let mut bogus = contract(1, "C", vec![]);
    bogus["contractKind"] = json!("abstract");
    assert_eq!(
        convert::<ContractDefinition>(&bogus).map_err(|e| e.category()),
        Err(ErrorCategory::InvariantViolation)
    );
}

#[test]
fn unimplemented_function_has_no_body() {
    let mut f = function(2, "f", json!(null));
    f["implemented"] = json!(false);
    let f: FunctionDefinition = convert_ok(&f);
    assert_eq!(f.body, None);
    assert!(!f.is_implemented());
}

#[test]
fn implemented_function_requires_a_body() {
    let f = without(function(2, "f", json!(null)), &["body"]);
    assert_eq!(
        convert::<FunctionDefinition>(&f),
        Err(ImportError::InvariantViolation {
            node: NodeContext::new(sol_ir::NodeKind::FunctionDefinition, Some(2)),
            message: "missing required block `body`".to_owned(),
        })
    );
}

#[test]
fn function_flags_from_state_mutability() {
    let mut f = without(
        function(2, "deposit", block(3, vec![])),
        &["constant", "payable", "isConstructor"],
    );
    f["stateMutability"] = json!("payable");
    f["kind"] = json!("constructor");
    f["documentation"] = json!({ "nodeType": "StructuredDocumentation", "text": "Deposit." });

    let f: FunctionDefinition = convert_ok(&f);
    assert!(f.is_payable);
    assert!(!f.is_declared_const);
    assert!(f.is_constructor);
    assert_eq!(f.documentation.as_deref(), Some("Deposit."));
}

#[test]
fn variable_declaration_attributes() {
    let mut v = variable(5, "balances", elementary(6, "uint256"));
    v["stateVariable"] = json!(true);
    v["visibility"] = json!("public");
    v["storageLocation"] = json!("storage");
    v["value"] = super::number(7, "0");

    let v: VariableDeclaration = convert_ok(&v);
    assert!(v.is_state_variable);
    assert!(!v.is_indexed);
    assert_eq!(v.visibility, Visibility::Public);
    assert_eq!(v.storage_location, StorageLocation::Storage);
    assert!(matches!(v.type_name.as_deref(), Some(TypeName::Elementary(_))));
    assert!(v.value.is_some());
}

#[test]
fn variable_declaration_defaults() {
    let mut v = without(
        variable(5, "x", elementary(6, "bool")),
        &["visibility", "storageLocation", "constant", "stateVariable"],
    );
    v["typeName"] = json!(null);
    let v: VariableDeclaration = convert_ok(&v);
    assert_eq!(v.visibility, Visibility::Default);
    assert_eq!(v.storage_location, StorageLocation::Default);
    assert!(!v.is_constant);
    assert_eq!(v.type_name, None);
}

#[test]
fn bad_storage_location() {
    let mut v = variable(5, "x", elementary(6, "bool"));
    v["storageLocation"] = json!("calldata");
    assert_eq!(
        convert::<VariableDeclaration>(&v).map_err(|e| e.category()),
        Err(ErrorCategory::InvariantViolation)
    );
}

#[test]
fn using_for_with_and_without_type() {
    let library = json!({ "nodeType": "UserDefinedTypeName", "id": 2, "src": "6:14", "name": "SafeMath" });
    let with_type = json!({
        "nodeType": "UsingForDirective",
        "id": 1,
        "src": "0:30",
        "libraryName": library,
        "typeName": elementary(3, "uint256"),
    });
    let wildcard = json!({
        "nodeType": "UsingForDirective",
        "id": 1,
        "src": "0:30",
        "libraryName": library,
        "typeName": null,
    });
    let with_type: UsingForDirective = convert_ok(&with_type);
    let wildcard: UsingForDirective = convert_ok(&wildcard);
    assert!(with_type.type_name.is_some());
    assert_eq!(wildcard.type_name, None);
}

#[test]
fn event_parameters() {
    let mut from = variable(4, "from", elementary(5, "address"));
    from["indexed"] = json!(true);
    let event = json!({
        "nodeType": "EventDefinition",
        "id": 2,
        "src": "10:50",
        "name": "Transfer",
        "anonymous": false,
        "parameters": param_list(3, vec![from]),
    });
    let event: EventDefinition = convert_ok(&event);
    assert_eq!(event.name, "Transfer");
    assert!(!event.is_anonymous);
    assert!(event.parameters.parameters[0].is_indexed);
}

#[test]
fn modifier_definition_and_invocation() {
    let placeholder = json!({ "nodeType": "PlaceholderStatement", "id": 12, "src": "60:61" });
    let modifier = json!({
        "nodeType": "ModifierDefinition",
        "id": 10,
        "src": "40:70",
        "name": "onlyOwner",
        "visibility": "internal",
        "parameters": param_list(11, vec![]),
        "body": block(13, vec![placeholder]),
    });
    let mut f = function(20, "kill", block(21, vec![]));
    f["modifiers"] = json!([
        {
            "nodeType": "ModifierInvocation",
            "id": 22,
            "src": "80:89",
            "modifierName": super::ident(23, "onlyOwner"),
            "arguments": null,
        },
        {
            "nodeType": "ModifierInvocation",
            "id": 24,
            "src": "90:95",
            "name": "legacyGuard",
            "arguments": [],
        },
    ]);

    let document = unit(vec![contract(1, "Owned", vec![modifier, f])]);
    let unit = import_ok(&document);
    let Some(Node::ContractDefinition(owned)) = unit.nodes.first() else {
        panic!("expected a contract");
    };
    let Some(Node::ModifierDefinition(modifier)) = owned.sub_nodes.first() else {
        panic!("expected a modifier");
    };
    assert_eq!(modifier.body.statements.len(), 1);

    let Some(Node::FunctionDefinition(kill)) = owned.sub_nodes.get(1) else {
        panic!("expected a function");
    };
    let names: Vec<_> = kill.modifiers.iter().map(|m| (m.name.name.as_str(), m.name.id)).collect();
    assert_eq!(names, vec![("onlyOwner", NodeId(23)), ("legacyGuard", NodeId(24))]);
}

#[test]
fn struct_and_enum_members() {
    let structure = json!({
        "nodeType": "StructDefinition",
        "id": 1,
        "src": "0:40",
        "name": "Point",
        "members": [
            variable(2, "x", elementary(3, "int8")),
            variable(4, "y", elementary(5, "int8")),
        ],
    });
    let enumeration = json!({
        "nodeType": "EnumDefinition",
        "id": 6,
        "src": "41:70",
        "name": "Color",
        "members": [
            { "nodeType": "EnumValue", "id": 7, "src": "53:56", "name": "Red" },
            { "nodeType": "EnumValue", "id": 8, "src": "58:62", "name": "Blue" },
        ],
    });
    let unit = import_ok(&unit(vec![structure, enumeration]));
    let Some(Node::StructDefinition(point)) = unit.nodes.first() else {
        panic!("expected a struct");
    };
    let Some(Node::EnumDefinition(color)) = unit.nodes.get(1) else {
        panic!("expected an enum");
    };
    assert_eq!(point.members.len(), 2);
    let values: Vec<_> = color.members.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(values, vec!["Red", "Blue"]);
}

#[test]
fn mapping_key_must_be_elementary() {
    let key = json!({ "nodeType": "UserDefinedTypeName", "id": 3, "src": "8:13", "name": "Token" });
    let mapping = json!({
        "nodeType": "Mapping",
        "id": 2,
        "src": "0:30",
        "keyType": key,
        "valueType": elementary(4, "uint256"),
    });
    assert_eq!(
        convert::<TypeName>(&mapping),
        Err(ImportError::InvariantViolation {
            node: NodeContext::new(sol_ir::NodeKind::Mapping, Some(2)),
            message: "`keyType`: expected elementary type name, found UserDefinedTypeName"
                .to_owned(),
        })
    );
}

#[test]
fn type_names() {
    let nested = json!({
        "nodeType": "ArrayTypeName",
        "id": 1,
        "src": "0:20",
        "baseType": {
            "nodeType": "Mapping",
            "id": 2,
            "src": "0:17",
            "keyType": elementary(3, "address"),
            "valueType": { "nodeType": "UserDefinedTypeName", "id": 4, "src": "5:16", "name": "Lib.Point" },
        },
        "length": super::number(5, "3"),
    });
    let TypeName::Array(array) = convert_ok::<TypeName>(&nested) else {
        panic!("expected an array type");
    };
    assert!(array.length.is_some());
    let TypeName::Mapping(mapping) = *array.base_type else {
        panic!("expected a mapping");
    };
    assert_eq!(mapping.key_type.type_token.token, TokenKind::Address);
    let TypeName::UserDefined(point) = *mapping.value_type else {
        panic!("expected a user-defined type");
    };
    assert_eq!(point.name_path.as_slice(), ["Lib".to_owned(), "Point".to_owned()]);

    let callback = json!({
        "nodeType": "FunctionTypeName",
        "id": 6,
        "src": "0:30",
        "visibility": "external",
        "stateMutability": "view",
        "parameterTypes": param_list(7, vec![]),
        "returnParameterTypes": param_list(8, vec![variable(9, "", elementary(10, "bool"))]),
    });
    let TypeName::Function(callback) = convert_ok::<TypeName>(&callback) else {
        panic!("expected a function type");
    };
    assert_eq!(callback.visibility, Visibility::External);
    assert!(callback.is_declared_const);
    assert_eq!(callback.return_types.parameters.len(), 1);
}

#[test]
fn malformed_type_path() {
    let path = json!({ "nodeType": "UserDefinedTypeName", "id": 4, "src": "5:16", "name": "Lib..Point" });
    assert_eq!(
        convert::<TypeName>(&path).map_err(|e| e.category()),
        Err(ErrorCategory::InvariantViolation)
    );
}
