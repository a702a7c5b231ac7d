//! Type names.

use smallvec::SmallVec;

use crate::token::ElementaryTypeNameToken;
use crate::traits::{delegate_ast_node, node_header};
use crate::{AstNode, NodeId, SourceLocation};

use super::{Expression, NodeKind, ParameterList, Visibility};

/// A type name in declaration position.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeName {
    Elementary(ElementaryTypeName),
    UserDefined(UserDefinedTypeName),
    Function(FunctionTypeName),
    Mapping(Mapping),
    Array(ArrayTypeName),
}

delegate_ast_node!(TypeName {
    Elementary,
    UserDefined,
    Function,
    Mapping,
    Array,
});

/// `uint256`, `address`, `bytes32`, ...
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ElementaryTypeName {
    pub id: NodeId,
    pub location: SourceLocation,
    pub type_token: ElementaryTypeNameToken,
}

/// A dotted path naming a contract, struct or enum: `Lib.Struct`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UserDefinedTypeName {
    pub id: NodeId,
    pub location: SourceLocation,
    pub name_path: SmallVec<[String; 2]>,
}

impl UserDefinedTypeName {
    /// The path joined back into its dotted form.
    pub fn qualified_name(&self) -> String {
        self.name_path.join(".")
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionTypeName {
    pub id: NodeId,
    pub location: SourceLocation,
    pub parameter_types: ParameterList,
    pub return_types: ParameterList,
    pub visibility: Visibility,
    pub is_declared_const: bool,
    pub is_payable: bool,
}

/// `mapping(K => V)`. Keys are always elementary.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Mapping {
    pub id: NodeId,
    pub location: SourceLocation,
    pub key_type: ElementaryTypeName,
    pub value_type: Box<TypeName>,
}

/// `T[]` or `T[n]`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ArrayTypeName {
    pub id: NodeId,
    pub location: SourceLocation,
    pub base_type: Box<TypeName>,
    pub length: Option<Box<Expression>>,
}

impl AstNode for ElementaryTypeName {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ElementaryTypeName
    }
}

impl AstNode for UserDefinedTypeName {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::UserDefinedTypeName
    }
}

impl AstNode for FunctionTypeName {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::FunctionTypeName
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.parameter_types);
        f(&self.return_types);
    }
}

impl AstNode for Mapping {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::Mapping
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&self.key_type);
        f(&*self.value_type);
    }
}

impl AstNode for ArrayTypeName {
    node_header!();

    fn kind(&self) -> NodeKind {
        NodeKind::ArrayTypeName
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        f(&*self.base_type);
        if let Some(length) = &self.length {
            f(&**length);
        }
    }
}
