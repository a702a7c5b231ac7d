//! Statements.

use crate::traits::{delegate_ast_node, node_header};
use crate::{AstNode, NodeId, SourceLocation};

use super::{Expression, FunctionCall, NodeKind, VariableDeclaration};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Statement {
    Block(Block),
    Placeholder(PlaceholderStatement),
    If(IfStatement),
    While(WhileStatement),
    For(ForStatement),
    Continue(Continue),
    Break(Break),
    Return(Return),
    Throw(Throw),
    Emit(EmitStatement),
    VariableDeclaration(VariableDeclarationStatement),
    Expression(ExpressionStatement),
    InlineAssembly(InlineAssembly),
}

delegate_ast_node!(Statement {
    Block,
    Placeholder,
    If,
    While,
    For,
    Continue,
    Break,
    Return,
    Throw,
    Emit,
    VariableDeclaration,
    Expression,
    InlineAssembly,
});

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Block {
    pub id: NodeId,
    pub location: SourceLocation,
    pub statements: Vec<Statement>,
}

/// The `_` statement inside a modifier body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PlaceholderStatement {
    pub id: NodeId,
    pub location: SourceLocation,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IfStatement {
    pub id: NodeId,
    pub location: SourceLocation,
    pub condition: Expression,
    pub true_body: Box<Statement>,
    pub false_body: Option<Box<Statement>>,
}

/// `while (c) body` or `do body while (c);`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct WhileStatement {
    pub id: NodeId,
    pub location: SourceLocation,
    pub condition: Expression,
    pub body: Box<Statement>,
    pub is_do_while: bool,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ForStatement {
    pub id: NodeId,
    pub location: SourceLocation,
    pub initialization: Option<Box<Statement>>,
    pub condition: Option<Expression>,
    pub loop_expression: Option<ExpressionStatement>,
    pub body: Box<Statement>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Continue {
    pub id: NodeId,
    pub location: SourceLocation,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Break {
    pub id: NodeId,
    pub location: SourceLocation,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Return {
    pub id: NodeId,
    pub location: SourceLocation,
    pub expression: Option<Expression>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Throw {
    pub id: NodeId,
    pub location: SourceLocation,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EmitStatement {
    pub id: NodeId,
    pub location: SourceLocation,
    pub event_call: FunctionCall,
}

/// `(uint a, , uint c) = f();`
///
/// `None` entries are omitted components of a tuple destructuring.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VariableDeclarationStatement {
    pub id: NodeId,
    pub location: SourceLocation,
    pub declarations: Vec<Option<VariableDeclaration>>,
    pub initial_value: Option<Expression>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExpressionStatement {
    pub id: NodeId,
    pub location: SourceLocation,
    pub expression: Expression,
}

/// An assembly block, kept as text.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct InlineAssembly {
    pub id: NodeId,
    pub location: SourceLocation,
    pub operations: String,
    pub external_references: Vec<ExternalReference>,
}

/// A high-level identifier referenced from inside an assembly block.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExternalReference {
    pub name: String,
    pub declaration: Option<NodeId>,
    pub is_offset: bool,
    pub is_slot: bool,
    pub value_size: u32,
    pub location: Option<SourceLocation>,
}

impl AstNode for Block {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Block
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for stmt in &self.statements {
            f(stmt);
        }
    }
}

impl AstNode for PlaceholderStatement {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::PlaceholderStatement
    }
}

impl AstNode for IfStatement {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::IfStatement
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.condition);
        f(&*self.true_body);
        if let Some(body) = &self.false_body {
            f(&**body);
        }
    }
}

impl AstNode for WhileStatement {
    node_header!();

    fn kind(&self) -> NodeKind {
        if self.is_do_while {
            NodeKind::DoWhileStatement
        } else {
            NodeKind::WhileStatement
        }
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.condition);
        f(&*self.body);
    }
}

impl AstNode for ForStatement {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ForStatement
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        if let Some(init) = &self.initialization {
            f(&**init);
        }
        if let Some(cond) = &self.condition {
            f(cond);
        }
        if let Some(step) = &self.loop_expression {
            f(step);
        }
        f(&*self.body);
    }
}

impl AstNode for Continue {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Continue
    }
}

impl AstNode for Break {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Break
    }
}

impl AstNode for Return {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Return
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        if let Some(expr) = &self.expression {
            f(expr);
        }
    }
}

impl AstNode for Throw {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Throw
    }
}

impl AstNode for EmitStatement {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::EmitStatement
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.event_call);
    }
}

impl AstNode for VariableDeclarationStatement {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::VariableDeclarationStatement
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for decl in self.declarations.iter().flatten() {
            f(decl);
        }
        if let Some(value) = &self.initial_value {
            f(value);
        }
    }
}

impl AstNode for ExpressionStatement {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ExpressionStatement
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.expression);
    }
}

impl AstNode for InlineAssembly {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::InlineAssembly
    }
}
