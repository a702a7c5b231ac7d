//! Top-level and contract-level declarations.

use crate::token::TokenKind;
use crate::traits::node_header;
use crate::{AstNode, NodeId, SourceLocation};

use super::{
    Block, ContractKind, Expression, Identifier, Node, NodeKind, StorageLocation, TypeName,
    UserDefinedTypeName, Visibility,
};

/// A compilation unit: the root of every imported tree.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceUnit {
    pub id: NodeId,
    pub location: SourceLocation,
    pub absolute_path: Option<String>,
    pub nodes: Vec<Node>,
}

/// `pragma solidity ^0.4.0;`
///
/// `tokens[i]` is the resolved token of `literals[i]`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PragmaDirective {
    pub id: NodeId,
    pub location: SourceLocation,
    pub tokens: Vec<TokenKind>,
    pub literals: Vec<String>,
}

/// One `{foreign as local}` entry of an import directive.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SymbolAlias {
    pub foreign: Identifier,
    pub local: Option<String>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ImportDirective {
    pub id: NodeId,
    pub location: SourceLocation,
    pub path: String,
    /// Empty when the import has no unit alias.
    pub unit_alias: String,
    pub symbol_aliases: Vec<SymbolAlias>,
}

/// A contract, interface or library.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ContractDefinition {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: String,
    pub documentation: Option<String>,
    pub base_contracts: Vec<InheritanceSpecifier>,
    pub sub_nodes: Vec<Node>,
    pub contract_kind: ContractKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct InheritanceSpecifier {
    pub id: NodeId,
    pub location: SourceLocation,
    pub base_name: UserDefinedTypeName,
    pub arguments: Vec<Expression>,
}

/// `using L for T;` where a missing `type_name` means `*`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UsingForDirective {
    pub id: NodeId,
    pub location: SourceLocation,
    pub library_name: UserDefinedTypeName,
    pub type_name: Option<TypeName>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StructDefinition {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: String,
    pub members: Vec<VariableDeclaration>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumDefinition {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: String,
    pub members: Vec<EnumValue>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumValue {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: String,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParameterList {
    pub id: NodeId,
    pub location: SourceLocation,
    pub parameters: Vec<VariableDeclaration>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionDefinition {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: String,
    pub visibility: Visibility,
    pub is_constructor: bool,
    pub documentation: Option<String>,
    pub parameters: ParameterList,
    pub is_declared_const: bool,
    pub modifiers: Vec<ModifierInvocation>,
    pub return_parameters: ParameterList,
    pub is_payable: bool,
    /// `None` only for unimplemented functions.
    pub body: Option<Block>,
}

impl FunctionDefinition {
    #[inline]
    pub fn is_implemented(&self) -> bool {
        self.body.is_some()
    }
}

/// A state variable, parameter, struct member or local variable.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VariableDeclaration {
    pub id: NodeId,
    pub location: SourceLocation,
    /// `None` for `var` declarations.
    pub type_name: Option<Box<TypeName>>,
    pub name: String,
    pub value: Option<Box<Expression>>,
    pub visibility: Visibility,
    pub is_state_variable: bool,
    pub is_indexed: bool,
    pub is_constant: bool,
    pub storage_location: StorageLocation,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ModifierDefinition {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: String,
    pub documentation: Option<String>,
    pub parameters: ParameterList,
    pub body: Block,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ModifierInvocation {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: Identifier,
    pub arguments: Vec<Expression>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EventDefinition {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name: String,
    pub documentation: Option<String>,
    pub parameters: ParameterList,
    pub is_anonymous: bool,
}

impl AstNode for SourceUnit {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::SourceUnit
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for node in &self.nodes {
            f(node);
        }
    }
}

impl AstNode for PragmaDirective {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::PragmaDirective
    }
}

impl AstNode for ImportDirective {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ImportDirective
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for alias in &self.symbol_aliases {
            f(&alias.foreign);
        }
    }
}

impl AstNode for ContractDefinition {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ContractDefinition
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for base in &self.base_contracts {
            f(base);
        }
        for node in &self.sub_nodes {
            f(node);
        }
    }
}

impl AstNode for InheritanceSpecifier {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::InheritanceSpecifier
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.base_name);
        for arg in &self.arguments {
            f(arg);
        }
    }
}

impl AstNode for UsingForDirective {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::UsingForDirective
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.library_name);
        if let Some(ty) = &self.type_name {
            f(ty);
        }
    }
}

impl AstNode for StructDefinition {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::StructDefinition
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for member in &self.members {
            f(member);
        }
    }
}

impl AstNode for EnumDefinition {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::EnumDefinition
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for member in &self.members {
            f(member);
        }
    }
}

impl AstNode for EnumValue {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::EnumValue
    }
}

impl AstNode for ParameterList {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ParameterList
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        for param in &self.parameters {
            f(param);
        }
    }
}

impl AstNode for FunctionDefinition {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::FunctionDefinition
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.parameters);
        f(&self.return_parameters);
        for modifier in &self.modifiers {
            f(modifier);
        }
        if let Some(body) = &self.body {
            f(body);
        }
    }
}

impl AstNode for VariableDeclaration {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::VariableDeclaration
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        if let Some(ty) = &self.type_name {
            f(&**ty);
        }
        if let Some(value) = &self.value {
            f(&**value);
        }
    }
}

impl AstNode for ModifierDefinition {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ModifierDefinition
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.parameters);
        f(&self.body);
    }
}

impl AstNode for ModifierInvocation {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ModifierInvocation
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.name);
        for arg in &self.arguments {
            f(arg);
        }
    }
}

impl AstNode for EventDefinition {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::EventDefinition
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.parameters);
    }
}
