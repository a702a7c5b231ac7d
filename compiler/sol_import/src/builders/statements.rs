//! Blocks, control flow and inline assembly.

use serde_json::{Map, Value};
use sol_ir::ast::{
    Block, Break, Continue, EmitStatement, Expression, ExpressionStatement, ExternalReference,
    ForStatement, FunctionCall, IfStatement, InlineAssembly, PlaceholderStatement, Return,
    Statement, Throw, VariableDeclaration, VariableDeclarationStatement, WhileStatement,
};
use sol_ir::{NodeId, NodeKind};

use crate::dispatch::Converter;
use crate::document::DocNode;
use crate::error::ImportError;
use crate::location::decode_location;

impl Converter<'_> {
    pub(crate) fn block(&mut self, doc: &DocNode<'_>) -> Result<Block, ImportError> {
        Ok(Block {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            statements: self.list::<Statement>(doc, "statements")?,
        })
    }

    pub(crate) fn placeholder_statement(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<PlaceholderStatement, ImportError> {
        Ok(PlaceholderStatement {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
        })
    }

    pub(crate) fn if_statement(&mut self, doc: &DocNode<'_>) -> Result<IfStatement, ImportError> {
        Ok(IfStatement {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            condition: self.required::<Expression>(doc, "condition")?,
            true_body: Box::new(self.required::<Statement>(doc, "trueBody")?),
            false_body: self.optional::<Statement>(doc, "falseBody")?.map(Box::new),
        })
    }

    /// Both loop kinds; the kind tag selects the do-while flag.
    pub(crate) fn while_statement(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<WhileStatement, ImportError> {
        Ok(WhileStatement {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            condition: self.required::<Expression>(doc, "condition")?,
            body: Box::new(self.required::<Statement>(doc, "body")?),
            is_do_while: doc.kind() == NodeKind::DoWhileStatement,
        })
    }

    pub(crate) fn for_statement(&mut self, doc: &DocNode<'_>) -> Result<ForStatement, ImportError> {
        let init_field = if doc.structural("initializationExpression").is_some() {
            "initializationExpression"
        } else {
            "initExpression"
        };
        Ok(ForStatement {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            initialization: self.optional::<Statement>(doc, init_field)?.map(Box::new),
            condition: self.optional::<Expression>(doc, "condition")?,
            loop_expression: self.optional::<ExpressionStatement>(doc, "loopExpression")?,
            body: Box::new(self.required::<Statement>(doc, "body")?),
        })
    }

    pub(crate) fn continue_statement(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<Continue, ImportError> {
        Ok(Continue {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
        })
    }

    pub(crate) fn break_statement(&mut self, doc: &DocNode<'_>) -> Result<Break, ImportError> {
        Ok(Break {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
        })
    }

    pub(crate) fn return_statement(&mut self, doc: &DocNode<'_>) -> Result<Return, ImportError> {
        Ok(Return {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            expression: self.optional::<Expression>(doc, "expression")?,
        })
    }

    pub(crate) fn throw_statement(&mut self, doc: &DocNode<'_>) -> Result<Throw, ImportError> {
        Ok(Throw {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
        })
    }

    pub(crate) fn emit_statement(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<EmitStatement, ImportError> {
        Ok(EmitStatement {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            event_call: self.required::<FunctionCall>(doc, "eventCall")?,
        })
    }

    pub(crate) fn variable_declaration_statement(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<VariableDeclarationStatement, ImportError> {
        Ok(VariableDeclarationStatement {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            declarations: self.list_with_holes::<VariableDeclaration>(doc, "declarations")?,
            initial_value: self.optional::<Expression>(doc, "initialValue")?,
        })
    }

    pub(crate) fn expression_statement(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ExpressionStatement, ImportError> {
        Ok(ExpressionStatement {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            expression: self.required::<Expression>(doc, "expression")?,
        })
    }

    /// The assembly body stays as text. References to outer identifiers are
    /// single-entry objects keyed by the referenced name.
    pub(crate) fn inline_assembly(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<InlineAssembly, ImportError> {
        let location = self.location(doc)?;
        let operations = doc.str("operations")?.to_owned();

        let mut external_references = Vec::new();
        for entry in doc.list("externalReferences")? {
            let reference = entry
                .as_object()
                .filter(|object| object.len() == 1)
                .and_then(|object| object.iter().next())
                .and_then(|(name, info)| info.as_object().map(|info| (name, info)));
            let Some((name, info)) = reference else {
                return Err(ImportError::wrong_type(
                    doc.context(),
                    "externalReferences",
                    "a list of single-entry reference objects",
                ));
            };
            external_references.push(self.external_reference(doc, name, info)?);
        }

        Ok(InlineAssembly {
            id: self.node_id(doc)?,
            location,
            operations,
            external_references,
        })
    }

    fn external_reference(
        &self,
        doc: &DocNode<'_>,
        name: &str,
        info: &Map<String, Value>,
    ) -> Result<ExternalReference, ImportError> {
        let malformed = || {
            ImportError::wrong_type(
                doc.context(),
                "externalReferences",
                "references with integer and boolean fields",
            )
        };
        let flag = |key: &str| match info.get(key) {
            None | Some(Value::Null) => Ok(false),
            Some(value) => value.as_bool().ok_or_else(malformed),
        };

        let declaration = match info.get("declaration") {
            None | Some(Value::Null) => None,
            Some(value) => Some(NodeId::new(value.as_i64().ok_or_else(malformed)?)),
        };
        let value_size = match info.get("valueSize") {
            None | Some(Value::Null) => 1,
            Some(value) => value
                .as_u64()
                .and_then(|size| u32::try_from(size).ok())
                .ok_or_else(malformed)?,
        };
        let location = match info.get("src") {
            None | Some(Value::Null) => None,
            Some(Value::String(marker)) => Some(
                decode_location(marker, &self.source)
                    .map_err(|reason| ImportError::schema(doc.context(), reason))?,
            ),
            Some(_) => return Err(malformed()),
        };

        Ok(ExternalReference {
            name: name.to_owned(),
            declaration,
            is_offset: flag("isOffset")?,
            is_slot: flag("isSlot")?,
            value_size,
            location,
        })
    }
}
