//! Conversions from `Node` to the type a grammar position requires.

use super::{
    Block, ContractDefinition, ElementaryTypeName, EnumDefinition, EnumValue, EventDefinition,
    Expression, ExpressionStatement, FunctionCall, FunctionDefinition, Identifier,
    ImportDirective, InheritanceSpecifier, Literal, ModifierDefinition, ModifierInvocation, Node,
    ParameterList, PragmaDirective, SourceUnit, Statement, StructDefinition, TypeName,
    UserDefinedTypeName, UsingForDirective, VariableDeclaration,
};

/// A type that a `Node` can be narrowed to.
pub trait Narrow: Sized {
    /// Description of the required node, used in diagnostics.
    const EXPECTED: &'static str;

    /// Narrow `node`, handing it back unchanged on mismatch.
    fn narrow(node: Node) -> Result<Self, Node>;
}

impl Narrow for Node {
    const EXPECTED: &'static str = "any node";

    #[inline]
    fn narrow(node: Node) -> Result<Self, Node> {
        Ok(node)
    }
}

macro_rules! impl_narrow {
    ($($ty:ty, $expected:literal, $pat:pat => $out:ident;)+) => {
        $(
            impl Narrow for $ty {
                const EXPECTED: &'static str = $expected;

                fn narrow(node: Node) -> Result<Self, Node> {
                    match node {
                        $pat => Ok($out),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

impl_narrow! {
    SourceUnit, "source unit", Node::SourceUnit(inner) => inner;
    PragmaDirective, "pragma directive", Node::PragmaDirective(inner) => inner;
    ImportDirective, "import directive", Node::ImportDirective(inner) => inner;
    ContractDefinition, "contract definition", Node::ContractDefinition(inner) => inner;
    InheritanceSpecifier, "inheritance specifier", Node::InheritanceSpecifier(inner) => inner;
    UsingForDirective, "using-for directive", Node::UsingForDirective(inner) => inner;
    StructDefinition, "struct definition", Node::StructDefinition(inner) => inner;
    EnumDefinition, "enum definition", Node::EnumDefinition(inner) => inner;
    EnumValue, "enum value", Node::EnumValue(inner) => inner;
    ParameterList, "parameter list", Node::ParameterList(inner) => inner;
    FunctionDefinition, "function definition", Node::FunctionDefinition(inner) => inner;
    VariableDeclaration, "variable declaration", Node::VariableDeclaration(inner) => inner;
    ModifierDefinition, "modifier definition", Node::ModifierDefinition(inner) => inner;
    ModifierInvocation, "modifier invocation", Node::ModifierInvocation(inner) => inner;
    EventDefinition, "event definition", Node::EventDefinition(inner) => inner;
    TypeName, "type name", Node::TypeName(inner) => inner;
    Statement, "statement", Node::Statement(inner) => inner;
    Expression, "expression", Node::Expression(inner) => inner;
    ElementaryTypeName, "elementary type name",
        Node::TypeName(TypeName::Elementary(inner)) => inner;
    UserDefinedTypeName, "user-defined type name",
        Node::TypeName(TypeName::UserDefined(inner)) => inner;
    Block, "block", Node::Statement(Statement::Block(inner)) => inner;
    ExpressionStatement, "expression statement",
        Node::Statement(Statement::Expression(inner)) => inner;
    FunctionCall, "function call", Node::Expression(Expression::FunctionCall(inner)) => inner;
    Identifier, "identifier", Node::Expression(Expression::Identifier(inner)) => inner;
    Literal, "literal", Node::Expression(Expression::Literal(inner)) => inner;
}
