//! Expressions.

use crate::token::{ElementaryTypeNameToken, TokenKind};
use crate::traits::{delegate_ast_node, node_header};
use crate::{AstNode, NodeId, SourceLocation};

use super::{NodeKind, TypeName};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expression {
    Conditional(Conditional),
    Assignment(Assignment),
    Tuple(TupleExpression),
    UnaryOperation(UnaryOperation),
    BinaryOperation(BinaryOperation),
    FunctionCall(FunctionCall),
    New(NewExpression),
    MemberAccess(MemberAccess),
    IndexAccess(IndexAccess),
    Identifier(Identifier),
    ElementaryTypeName(ElementaryTypeNameExpression),
    Literal(Literal),
}

delegate_ast_node!(Expression {
    Conditional,
    Assignment,
    Tuple,
    UnaryOperation,
    BinaryOperation,
    FunctionCall,
    New,
    MemberAccess,
    IndexAccess,
    Identifier,
    ElementaryTypeName,
    Literal,
});

/// `c ? a : b`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Conditional {
    pub id: NodeId,
    pub location: SourceLocation,
    pub condition: Box<Expression>,
    pub true_expression: Box<Expression>,
    pub false_expression: Box<Expression>,
}

/// `lhs op rhs` where `op` is an assignment operator.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Assignment {
    pub id: NodeId,
    pub location: SourceLocation,
    pub left_hand_side: Box<Expression>,
    pub operator: TokenKind,
    pub right_hand_side: Box<Expression>,
}

/// `(a, , b)` or `[a, b]` when `is_inline_array`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TupleExpression {
    pub id: NodeId,
    pub location: SourceLocation,
    pub components: Vec<Option<Expression>>,
    pub is_inline_array: bool,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UnaryOperation {
    pub id: NodeId,
    pub location: SourceLocation,
    pub operator: TokenKind,
    pub sub_expression: Box<Expression>,
    pub is_prefix: bool,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BinaryOperation {
    pub id: NodeId,
    pub location: SourceLocation,
    pub left: Box<Expression>,
    pub operator: TokenKind,
    pub right: Box<Expression>,
}

/// A call, a type conversion or a struct construction.
///
/// `names` is non-empty for calls with named arguments and lines up with
/// `arguments`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionCall {
    pub id: NodeId,
    pub location: SourceLocation,
    pub expression: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub names: Vec<String>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NewExpression {
    pub id: NodeId,
    pub location: SourceLocation,
    pub type_name: Box<TypeName>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MemberAccess {
    pub id: NodeId,
    pub location: SourceLocation,
    pub expression: Box<Expression>,
    pub member_name: String,
}

/// `base[index]`; `index` is absent in type expressions like `uint[]`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IndexAccess {
    pub id: NodeId,
    pub location: SourceLocation,
    pub base: Box<Expression>,
    pub index: Option<Box<Expression>>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Identifier {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: String,
}

/// An elementary type used as an expression, as in `uint(x)`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ElementaryTypeNameExpression {
    pub id: NodeId,
    pub location: SourceLocation,
    pub type_token: ElementaryTypeNameToken,
}

/// A number, string, hex string or boolean literal.
///
/// `token` is `Number`, `StringLiteral`, `HexStringLiteral`, `TrueLiteral`
/// or `FalseLiteral`. `value` is `None` for hex strings that are not valid
/// UTF-8; `hex_value` then holds the bytes.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Literal {
    pub id: NodeId,
    pub location: SourceLocation,
    pub token: TokenKind,
    pub value: Option<String>,
    pub hex_value: Option<String>,
    pub sub_denomination: Option<TokenKind>,
}

impl AstNode for Conditional {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Conditional
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.condition);
        f(&*self.true_expression);
        f(&*self.false_expression);
    }
}

impl AstNode for Assignment {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Assignment
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.left_hand_side);
        f(&*self.right_hand_side);
    }
}

impl AstNode for TupleExpression {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::TupleExpression
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for component in self.components.iter().flatten() {
            f(component);
        }
    }
}

impl AstNode for UnaryOperation {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::UnaryOperation
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.sub_expression);
    }
}

impl AstNode for BinaryOperation {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::BinaryOperation
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.left);
        f(&*self.right);
    }
}

impl AstNode for FunctionCall {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::FunctionCall
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.expression);
        for arg in &self.arguments {
            f(arg);
        }
    }
}

impl AstNode for NewExpression {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::NewExpression
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.type_name);
    }
}

impl AstNode for MemberAccess {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::MemberAccess
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.expression);
    }
}

impl AstNode for IndexAccess {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::IndexAccess
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.base);
        if let Some(index) = &self.index {
            f(&**index);
        }
    }
}

impl AstNode for Identifier {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }
}

impl AstNode for ElementaryTypeNameExpression {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ElementaryTypeNameExpression
    }
}

impl AstNode for Literal {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Literal
    }
}
