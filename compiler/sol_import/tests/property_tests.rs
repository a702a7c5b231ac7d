//! Property tests: generated expression trees keep every identifier and
//! source range through an import, in document order.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use serde_json::{json, Value};
use sol_import::{AstJsonImporter, ImportError, ImportOptions};
use sol_ir::visitor::preorder;
use sol_ir::NodeKind;

/// Ids at or above this belong to the wrapper around the generated expression.
const WRAPPER_IDS: i64 = 1_000_000;

#[derive(Clone, Debug)]
enum Shape {
    Name(String),
    Number(u32),
    Not(Box<Shape>),
    Binary(&'static str, Box<Shape>, Box<Shape>),
    Call(Box<Shape>, Vec<Shape>),
    Tuple(Vec<Option<Shape>>),
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        "[a-z][a-z0-9]{0,6}".prop_map(Shape::Name),
        any::<u32>().prop_map(Shape::Number),
    ];
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| Shape::Not(Box::new(s))),
            (
                prop::sample::select(vec!["+", "-", "*", "/", "%", "**", "&&", "||", "==", "<", "&"]),
                inner.clone(),
                inner.clone(),
            )
                .prop_map(|(op, l, r)| Shape::Binary(op, Box::new(l), Box::new(r))),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(callee, args)| Shape::Call(Box::new(callee), args)),
            prop::collection::vec(prop::option::of(inner), 0..4).prop_map(Shape::Tuple),
        ]
    })
}

/// Renders shapes to document nodes, numbering them in pre-order and
/// recording what the imported tree should report for each.
#[derive(Default)]
struct Render {
    next: i64,
    expected: Vec<(NodeKind, i64, u32, u32)>,
}

impl Render {
    fn header(&mut self, kind: NodeKind) -> (i64, String) {
        self.next += 1;
        let id = self.next;
        let start = u32::try_from(id).unwrap() * 3;
        let end = start + 2;
        self.expected.push((kind, id, start, end));
        (id, format!("{start}:{end}"))
    }

    fn render(&mut self, shape: &Shape) -> Value {
        match shape {
            Shape::Name(name) => {
                let (id, src) = self.header(NodeKind::Identifier);
                json!({ "nodeType": "Identifier", "id": id, "src": src, "name": name })
            }
            Shape::Number(value) => {
                let (id, src) = self.header(NodeKind::Literal);
                json!({
                    "nodeType": "Literal",
                    "id": id,
                    "src": src,
                    "kind": "number",
                    "value": value.to_string(),
                })
            }
            Shape::Not(inner) => {
                let (id, src) = self.header(NodeKind::UnaryOperation);
                json!({
                    "nodeType": "UnaryOperation",
                    "id": id,
                    "src": src,
                    "operator": "!",
                    "prefix": true,
                    "subExpression": self.render(inner),
                })
            }
            Shape::Binary(op, left, right) => {
                let (id, src) = self.header(NodeKind::BinaryOperation);
                let left = self.render(left);
                let right = self.render(right);
                json!({
                    "nodeType": "BinaryOperation",
                    "id": id,
                    "src": src,
                    "operator": op,
                    "leftExpression": left,
                    "rightExpression": right,
                })
            }
            Shape::Call(callee, args) => {
                let (id, src) = self.header(NodeKind::FunctionCall);
                let callee = self.render(callee);
                let args: Vec<_> = args.iter().map(|arg| self.render(arg)).collect();
                json!({
                    "nodeType": "FunctionCall",
                    "id": id,
                    "src": src,
                    "expression": callee,
                    "arguments": args,
                    "names": [],
                })
            }
            Shape::Tuple(components) => {
                let (id, src) = self.header(NodeKind::TupleExpression);
                let components: Vec<_> = components
                    .iter()
                    .map(|c| c.as_ref().map_or(Value::Null, |c| self.render(c)))
                    .collect();
                json!({
                    "nodeType": "TupleExpression",
                    "id": id,
                    "src": src,
                    "isInlineArray": false,
                    "components": components,
                })
            }
        }
    }
}

/// A source unit whose only contract holds one state variable initialized
/// to `value`.
fn wrap(value: Value) -> Value {
    let mut document = json!({
        "nodeType": "SourceUnit",
        "id": WRAPPER_IDS,
        "src": "0:1000000",
        "nodes": [{
            "nodeType": "ContractDefinition",
            "id": WRAPPER_IDS + 1,
            "src": "0:999999",
            "name": "Generated",
            "contractKind": "contract",
            "nodes": [{
                "nodeType": "VariableDeclaration",
                "id": WRAPPER_IDS + 2,
                "src": "0:999998",
                "name": "value",
                "stateVariable": true,
                "typeName": {
                    "nodeType": "ElementaryTypeName",
                    "id": WRAPPER_IDS + 3,
                    "src": "0:7",
                    "name": "uint256",
                },
            }],
        }],
    });
    document["nodes"][0]["nodes"][0]["value"] = value;
    document
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn ids_and_ranges_survive_import(shape in shape_strategy()) {
        let mut render = Render::default();
        let document = wrap(render.render(&shape));

        let unit = AstJsonImporter::new(&document, "Generated.sol")
            .with_options(ImportOptions::strict())
            .import()
            .unwrap();

        let listing: Vec<_> = preorder(&unit)
            .into_iter()
            .filter(|n| n.id.raw() < WRAPPER_IDS)
            .map(|n| (n.kind, n.id.raw(), n.span.start, n.span.end))
            .collect();
        prop_assert_eq!(listing, render.expected);
    }

    #[test]
    fn import_is_deterministic(shape in shape_strategy()) {
        let document = wrap(Render::default().render(&shape));
        let first = AstJsonImporter::new(&document, "Generated.sol").import();
        let second = AstJsonImporter::new(&document, "Generated.sol").import();
        prop_assert_eq!(first, second);
    }
}

/// `!!...!x`, built from the inside out without recursion.
fn negations(depth: usize) -> Value {
    let mut value = json!({ "nodeType": "Identifier", "id": depth + 1, "src": "0:1", "name": "x" });
    for id in (1..=depth).rev() {
        let mut negation = json!({
            "nodeType": "UnaryOperation",
            "id": id,
            "src": "0:2",
            "operator": "!",
            "prefix": true,
        });
        negation["subExpression"] = value;
        value = negation;
    }
    wrap(value)
}

#[test]
fn deep_nesting_imports() {
    let document = negations(1_000);
    let unit = AstJsonImporter::new(&document, "Deep.sol").import().unwrap();
    assert_eq!(sol_ir::visitor::count_nodes(&unit), 1_000 + 1 + 4);
}

#[test]
fn depth_limit_stops_the_import() {
    let document = negations(200);
    let result = AstJsonImporter::new(&document, "Deep.sol")
        .with_options(ImportOptions::default().with_max_depth(64))
        .import();
    assert_eq!(result, Err(ImportError::DepthLimitExceeded { limit: 64 }));
}
