//! Node kind tags.

use std::fmt;

macro_rules! node_kinds {
    ($($variant:ident),+ $(,)?) => {
        /// The kind of an AST node, one per document kind tag.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum NodeKind {
            $($variant,)+
        }

        impl NodeKind {
            /// Every supported kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)+];

            /// Resolve a document kind tag. Matching is exact and case-sensitive.
            pub fn from_tag(tag: &str) -> Option<NodeKind> {
                match tag {
                    $(stringify!($variant) => Some(NodeKind::$variant),)+
                    _ => None,
                }
            }

            /// The document kind tag for this kind.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

node_kinds! {
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
    ElementaryTypeName,
    UserDefinedTypeName,
    FunctionTypeName,
    Mapping,
    ArrayTypeName,
    InlineAssembly,
    Block,
    PlaceholderStatement,
    IfStatement,
    DoWhileStatement,
    WhileStatement,
    ForStatement,
    Continue,
    Break,
    Return,
    Throw,
    EmitStatement,
    VariableDeclarationStatement,
    ExpressionStatement,
    Conditional,
    Assignment,
    TupleExpression,
    UnaryOperation,
    BinaryOperation,
    FunctionCall,
    NewExpression,
    MemberAccess,
    IndexAccess,
    Identifier,
    ElementaryTypeNameExpression,
    Literal,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
