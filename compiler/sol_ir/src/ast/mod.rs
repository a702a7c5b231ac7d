//! Owned AST for contract sources.
//!
//! The tree is a strict ownership hierarchy: every child is owned by its
//! parent through a field, a `Box` or a `Vec`. Grammar positions are typed,
//! so a statement slot holds a `Statement` and an expression slot holds an
//! `Expression`. `Node` is the sum of everything a dispatcher can produce and
//! `Narrow` converts it back to the type a position requires.
//!
//! # Module Structure
//!
//! - `kind`: `NodeKind`, one per document kind tag
//! - `items`: directives and declarations
//! - `types`: type names
//! - `stmt`: statements
//! - `expr`: expressions
//! - `narrow`: `Node` to position-specific conversions

mod expr;
mod items;
mod kind;
mod narrow;
mod stmt;
mod types;

use std::fmt;

pub use expr::{
    Assignment, BinaryOperation, Conditional, ElementaryTypeNameExpression, Expression,
    FunctionCall, Identifier, IndexAccess, Literal, MemberAccess, NewExpression, TupleExpression,
    UnaryOperation,
};
pub use items::{
    ContractDefinition, EnumDefinition, EnumValue, EventDefinition, FunctionDefinition,
    ImportDirective, InheritanceSpecifier, ModifierDefinition, ModifierInvocation, ParameterList,
    PragmaDirective, SourceUnit, StructDefinition, SymbolAlias, UsingForDirective,
    VariableDeclaration,
};
pub use kind::NodeKind;
pub use narrow::Narrow;
pub use stmt::{
    Block, Break, Continue, EmitStatement, ExpressionStatement, ExternalReference, ForStatement,
    IfStatement, InlineAssembly, PlaceholderStatement, Return, Statement, Throw,
    VariableDeclarationStatement, WhileStatement,
};
pub use types::{
    ArrayTypeName, ElementaryTypeName, FunctionTypeName, Mapping, TypeName, UserDefinedTypeName,
};

use crate::traits::delegate_ast_node;

/// Any AST node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Node {
    SourceUnit(SourceUnit),
    PragmaDirective(PragmaDirective),
    ImportDirective(ImportDirective),
    ContractDefinition(ContractDefinition),
    InheritanceSpecifier(InheritanceSpecifier),
    UsingForDirective(UsingForDirective),
    StructDefinition(StructDefinition),
    EnumDefinition(EnumDefinition),
    EnumValue(EnumValue),
    ParameterList(ParameterList),
    FunctionDefinition(FunctionDefinition),
    VariableDeclaration(VariableDeclaration),
    ModifierDefinition(ModifierDefinition),
    ModifierInvocation(ModifierInvocation),
    EventDefinition(EventDefinition),
    TypeName(TypeName),
    Statement(Statement),
    Expression(Expression),
}

delegate_ast_node!(Node {
    SourceUnit,
    PragmaDirective,
    ImportDirective,
    ContractDefinition,
    InheritanceSpecifier,
    UsingForDirective,
    StructDefinition,
    EnumDefinition,
    EnumValue,
    ParameterList,
    FunctionDefinition,
    VariableDeclaration,
    ModifierDefinition,
    ModifierInvocation,
    EventDefinition,
    TypeName,
    Statement,
    Expression,
});

/// Visibility of a function, function type or variable.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum Visibility {
    /// No visibility written; the effective one depends on context.
    #[default]
    Default,
    Private,
    Internal,
    Public,
    External,
}

impl Visibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Default => "default",
            Visibility::Private => "private",
            Visibility::Internal => "internal",
            Visibility::Public => "public",
            Visibility::External => "external",
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public | Visibility::External)
    }
}

/// Data location of a reference-typed variable.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum StorageLocation {
    #[default]
    Default,
    Storage,
    Memory,
}

impl StorageLocation {
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageLocation::Default => "default",
            StorageLocation::Storage => "storage",
            StorageLocation::Memory => "memory",
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ContractKind {
    Contract,
    Interface,
    Library,
}

impl ContractKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContractKind::Contract => "contract",
            ContractKind::Interface => "interface",
            ContractKind::Library => "library",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Visibility, StorageLocation, ContractKind);
