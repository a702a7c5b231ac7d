//! The dispatcher: the single recursion point of the import.
//!
//! Every child document node goes through [`Converter::convert`], which
//! resolves its kind, enforces the depth bound and routes it to the
//! matching builder. Builders then narrow the returned `Node` to the type
//! their grammar position requires.

use rustc_hash::FxHashSet;
use serde_json::Value;
use sol_ir::ast::{Expression, Statement, TypeName};
use sol_ir::{AstNode, Narrow, Node, NodeId, NodeKind, SourceLocation, SourceName, Span};
use sol_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::document::DocNode;
use crate::error::{ImportError, SchemaReason};
use crate::location::decode_location;
use crate::options::ImportOptions;

/// State of one import call.
pub(crate) struct Converter<'opt> {
    pub(crate) source: SourceName,
    pub(crate) options: &'opt ImportOptions,
    depth: usize,
    seen_ids: FxHashSet<i64>,
    converted: usize,
}

impl<'opt> Converter<'opt> {
    pub(crate) fn new(source: SourceName, options: &'opt ImportOptions) -> Self {
        Converter {
            source,
            options,
            depth: 0,
            seen_ids: FxHashSet::default(),
            converted: 0,
        }
    }

    /// Number of document nodes dispatched so far.
    pub(crate) fn converted(&self) -> usize {
        self.converted
    }

    /// Convert one document node of any kind.
    pub(crate) fn convert(&mut self, value: &Value) -> Result<Node, ImportError> {
        let doc = DocNode::new(value, self.options.layout)?;
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                return Err(ImportError::DepthLimitExceeded { limit });
            }
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.dispatch(&doc));
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, doc: &DocNode<'_>) -> Result<Node, ImportError> {
        trace!(kind = %doc.kind(), id = ?doc.raw_id(), depth = self.depth, "dispatch");
        self.converted += 1;

        let node = match doc.kind() {
            NodeKind::SourceUnit => Node::SourceUnit(self.source_unit(doc)?),
            NodeKind::PragmaDirective => Node::PragmaDirective(self.pragma_directive(doc)?),
            NodeKind::ImportDirective => Node::ImportDirective(self.import_directive(doc)?),
            NodeKind::ContractDefinition => {
                Node::ContractDefinition(self.contract_definition(doc)?)
            }
            NodeKind::InheritanceSpecifier => {
                Node::InheritanceSpecifier(self.inheritance_specifier(doc)?)
            }
            NodeKind::UsingForDirective => Node::UsingForDirective(self.using_for_directive(doc)?),
            NodeKind::StructDefinition => Node::StructDefinition(self.struct_definition(doc)?),
            NodeKind::EnumDefinition => Node::EnumDefinition(self.enum_definition(doc)?),
            NodeKind::EnumValue => Node::EnumValue(self.enum_value(doc)?),
            NodeKind::ParameterList => Node::ParameterList(self.parameter_list(doc)?),
            NodeKind::FunctionDefinition => {
                Node::FunctionDefinition(self.function_definition(doc)?)
            }
            NodeKind::VariableDeclaration => {
                Node::VariableDeclaration(self.variable_declaration(doc)?)
            }
            NodeKind::ModifierDefinition => {
                Node::ModifierDefinition(self.modifier_definition(doc)?)
            }
            NodeKind::ModifierInvocation => {
                Node::ModifierInvocation(self.modifier_invocation(doc)?)
            }
            NodeKind::EventDefinition => Node::EventDefinition(self.event_definition(doc)?),

            NodeKind::ElementaryTypeName => {
                Node::TypeName(TypeName::Elementary(self.elementary_type_name(doc)?))
            }
            NodeKind::UserDefinedTypeName => {
                Node::TypeName(TypeName::UserDefined(self.user_defined_type_name(doc)?))
            }
            NodeKind::FunctionTypeName => {
                Node::TypeName(TypeName::Function(self.function_type_name(doc)?))
            }
            NodeKind::Mapping => Node::TypeName(TypeName::Mapping(self.mapping(doc)?)),
            NodeKind::ArrayTypeName => Node::TypeName(TypeName::Array(self.array_type_name(doc)?)),

            NodeKind::InlineAssembly => {
                Node::Statement(Statement::InlineAssembly(self.inline_assembly(doc)?))
            }
            NodeKind::Block => Node::Statement(Statement::Block(self.block(doc)?)),
            NodeKind::PlaceholderStatement => {
                Node::Statement(Statement::Placeholder(self.placeholder_statement(doc)?))
            }
            NodeKind::IfStatement => Node::Statement(Statement::If(self.if_statement(doc)?)),
            NodeKind::WhileStatement | NodeKind::DoWhileStatement => {
                Node::Statement(Statement::While(self.while_statement(doc)?))
            }
            NodeKind::ForStatement => Node::Statement(Statement::For(self.for_statement(doc)?)),
            NodeKind::Continue => Node::Statement(Statement::Continue(self.continue_statement(doc)?)),
            NodeKind::Break => Node::Statement(Statement::Break(self.break_statement(doc)?)),
            NodeKind::Return => Node::Statement(Statement::Return(self.return_statement(doc)?)),
            NodeKind::Throw => Node::Statement(Statement::Throw(self.throw_statement(doc)?)),
            NodeKind::EmitStatement => Node::Statement(Statement::Emit(self.emit_statement(doc)?)),
            NodeKind::VariableDeclarationStatement => Node::Statement(
                Statement::VariableDeclaration(self.variable_declaration_statement(doc)?),
            ),
            NodeKind::ExpressionStatement => {
                Node::Statement(Statement::Expression(self.expression_statement(doc)?))
            }

            NodeKind::Conditional => {
                Node::Expression(Expression::Conditional(self.conditional(doc)?))
            }
            NodeKind::Assignment => Node::Expression(Expression::Assignment(self.assignment(doc)?)),
            NodeKind::TupleExpression => {
                Node::Expression(Expression::Tuple(self.tuple_expression(doc)?))
            }
            NodeKind::UnaryOperation => {
                Node::Expression(Expression::UnaryOperation(self.unary_operation(doc)?))
            }
            NodeKind::BinaryOperation => {
                Node::Expression(Expression::BinaryOperation(self.binary_operation(doc)?))
            }
            NodeKind::FunctionCall => {
                Node::Expression(Expression::FunctionCall(self.function_call(doc)?))
            }
            NodeKind::NewExpression => Node::Expression(Expression::New(self.new_expression(doc)?)),
            NodeKind::MemberAccess => {
                Node::Expression(Expression::MemberAccess(self.member_access(doc)?))
            }
            NodeKind::IndexAccess => {
                Node::Expression(Expression::IndexAccess(self.index_access(doc)?))
            }
            NodeKind::Identifier => Node::Expression(Expression::Identifier(self.identifier(doc)?)),
            NodeKind::ElementaryTypeNameExpression => Node::Expression(
                Expression::ElementaryTypeName(self.elementary_type_name_expression(doc)?),
            ),
            NodeKind::Literal => Node::Expression(Expression::Literal(self.literal(doc)?)),
        };

        // Defaulted ids (an id-less root) are not tracked.
        if self.options.reject_duplicate_ids
            && doc.raw_id().is_some()
            && !self.seen_ids.insert(node.id().raw())
        {
            return Err(ImportError::invariant(
                doc.context(),
                format!("duplicate node id {}", node.id()),
            ));
        }
        Ok(node)
    }

    // Child conversion helpers

    /// Convert `value` and narrow it to `T`.
    pub(crate) fn convert_as<T: Narrow>(
        &mut self,
        parent: &DocNode<'_>,
        field: &'static str,
        value: &Value,
    ) -> Result<T, ImportError> {
        if !value.is_object() {
            return Err(ImportError::wrong_type(parent.context(), field, "a node object"));
        }
        let node = self.convert(value)?;
        T::narrow(node).map_err(|found| {
            ImportError::invariant(
                parent.context(),
                format!("`{field}`: expected {}, found {}", T::EXPECTED, found.kind()),
            )
        })
    }

    /// A child that must be present.
    pub(crate) fn required<T: Narrow>(
        &mut self,
        doc: &DocNode<'_>,
        field: &'static str,
    ) -> Result<T, ImportError> {
        match doc.structural(field) {
            Some(value) => self.convert_as(doc, field, value),
            None => Err(ImportError::invariant(
                doc.context(),
                format!("missing required {} `{field}`", T::EXPECTED),
            )),
        }
    }

    /// A child that may be absent.
    pub(crate) fn optional<T: Narrow>(
        &mut self,
        doc: &DocNode<'_>,
        field: &'static str,
    ) -> Result<Option<T>, ImportError> {
        doc.structural(field)
            .map(|value| self.convert_as(doc, field, value))
            .transpose()
    }

    /// A list of children without holes.
    pub(crate) fn list<T: Narrow>(
        &mut self,
        doc: &DocNode<'_>,
        field: &'static str,
    ) -> Result<Vec<T>, ImportError> {
        let items = doc.list(field)?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if item.is_null() {
                return Err(ImportError::invariant(
                    doc.context(),
                    format!("`{field}` has an empty entry"),
                ));
            }
            out.push(self.convert_as(doc, field, item)?);
        }
        Ok(out)
    }

    /// A list of children where `null` entries stand for omitted components.
    pub(crate) fn list_with_holes<T: Narrow>(
        &mut self,
        doc: &DocNode<'_>,
        field: &'static str,
    ) -> Result<Vec<Option<T>>, ImportError> {
        doc.list(field)?
            .iter()
            .map(|item| {
                if item.is_null() {
                    Ok(None)
                } else {
                    self.convert_as(doc, field, item).map(Some)
                }
            })
            .collect()
    }

    // Identity and location

    pub(crate) fn node_id(&self, doc: &DocNode<'_>) -> Result<NodeId, ImportError> {
        doc.id().map(NodeId::new)
    }

    /// The location of a non-root node; `src` is required.
    pub(crate) fn location(&self, doc: &DocNode<'_>) -> Result<SourceLocation, ImportError> {
        match doc.src()? {
            Some(marker) => self.decode(doc, marker),
            None => Err(ImportError::missing(doc.context(), "src")),
        }
    }

    /// The location of the root, which defaults to the whole source.
    pub(crate) fn root_location(&self, doc: &DocNode<'_>) -> Result<SourceLocation, ImportError> {
        match doc.src()? {
            Some(marker) => self.decode(doc, marker),
            None => {
                let end = self.options.root_length.unwrap_or(0);
                Ok(SourceLocation::new(Span::new(0, end), self.source.clone()))
            }
        }
    }

    fn decode(&self, doc: &DocNode<'_>, marker: &str) -> Result<SourceLocation, ImportError> {
        decode_location(marker, &self.source)
            .map_err(|reason: SchemaReason| ImportError::schema(doc.context(), reason))
    }
}
