//! Expressions.

use serde_json::Value;
use sol_ir::ast::{
    Assignment, BinaryOperation, Conditional, ElementaryTypeName, ElementaryTypeNameExpression,
    Expression, FunctionCall, Identifier, IndexAccess, Literal, MemberAccess, NewExpression,
    TupleExpression, TypeName, UnaryOperation,
};
use sol_ir::TokenKind;
use tracing::debug;

use crate::dispatch::Converter;
use crate::document::DocNode;
use crate::error::ImportError;
use crate::token::{
    resolve_assignment_op, resolve_binary_op, resolve_bool_literal, resolve_elementary,
    resolve_subdenomination, resolve_unary_op,
};

impl Converter<'_> {
    pub(crate) fn conditional(&mut self, doc: &DocNode<'_>) -> Result<Conditional, ImportError> {
        Ok(Conditional {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            condition: Box::new(self.required::<Expression>(doc, "condition")?),
            true_expression: Box::new(self.required::<Expression>(doc, "trueExpression")?),
            false_expression: Box::new(self.required::<Expression>(doc, "falseExpression")?),
        })
    }

    pub(crate) fn assignment(&mut self, doc: &DocNode<'_>) -> Result<Assignment, ImportError> {
        let location = self.location(doc)?;
        let left_hand_side = Box::new(self.required::<Expression>(doc, "leftHandSide")?);
        let operator = resolve_assignment_op(doc.str("operator")?)?;
        let right_hand_side = Box::new(self.required::<Expression>(doc, "rightHandSide")?);
        Ok(Assignment {
            id: self.node_id(doc)?,
            location,
            left_hand_side,
            operator,
            right_hand_side,
        })
    }

    pub(crate) fn tuple_expression(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<TupleExpression, ImportError> {
        Ok(TupleExpression {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            components: self.list_with_holes::<Expression>(doc, "components")?,
            is_inline_array: doc.flag("isInlineArray")?,
        })
    }

    pub(crate) fn unary_operation(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<UnaryOperation, ImportError> {
        let location = self.location(doc)?;
        let operator = resolve_unary_op(doc.str("operator")?)?;
        Ok(UnaryOperation {
            id: self.node_id(doc)?,
            location,
            operator,
            sub_expression: Box::new(self.required::<Expression>(doc, "subExpression")?),
            is_prefix: doc.bool("prefix")?,
        })
    }

    pub(crate) fn binary_operation(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<BinaryOperation, ImportError> {
        let location = self.location(doc)?;
        let left = Box::new(self.required::<Expression>(doc, "leftExpression")?);
        let operator = resolve_binary_op(doc.str("operator")?)?;
        let right = Box::new(self.required::<Expression>(doc, "rightExpression")?);
        Ok(BinaryOperation {
            id: self.node_id(doc)?,
            location,
            left,
            operator,
            right,
        })
    }

    pub(crate) fn function_call(&mut self, doc: &DocNode<'_>) -> Result<FunctionCall, ImportError> {
        let location = self.location(doc)?;
        let expression = Box::new(self.required::<Expression>(doc, "expression")?);
        let arguments = self.list::<Expression>(doc, "arguments")?;
        let names = doc.strings("names")?;
        if !names.is_empty() && names.len() != arguments.len() {
            return Err(ImportError::invariant(
                doc.context(),
                format!(
                    "{} argument names for {} arguments",
                    names.len(),
                    arguments.len()
                ),
            ));
        }
        Ok(FunctionCall {
            id: self.node_id(doc)?,
            location,
            expression,
            arguments,
            names,
        })
    }

    pub(crate) fn new_expression(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<NewExpression, ImportError> {
        Ok(NewExpression {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            type_name: Box::new(self.required::<TypeName>(doc, "typeName")?),
        })
    }

    pub(crate) fn member_access(&mut self, doc: &DocNode<'_>) -> Result<MemberAccess, ImportError> {
        Ok(MemberAccess {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            expression: Box::new(self.required::<Expression>(doc, "expression")?),
            member_name: doc.str("memberName")?.to_owned(),
        })
    }

    pub(crate) fn index_access(&mut self, doc: &DocNode<'_>) -> Result<IndexAccess, ImportError> {
        Ok(IndexAccess {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            base: Box::new(self.required::<Expression>(doc, "baseExpression")?),
            index: self.optional::<Expression>(doc, "indexExpression")?.map(Box::new),
        })
    }

    pub(crate) fn identifier(&mut self, doc: &DocNode<'_>) -> Result<Identifier, ImportError> {
        Ok(Identifier {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            name: doc.str("name")?.to_owned(),
        })
    }

    /// `typeName` is either the type text or an elementary type name node.
    pub(crate) fn elementary_type_name_expression(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ElementaryTypeNameExpression, ImportError> {
        let location = self.location(doc)?;
        let type_token = if let Some(Value::Object(_)) = doc.structural("typeName") {
            let type_name: ElementaryTypeName = self.required(doc, "typeName")?;
            type_name.type_token
        } else {
            match doc.scalar("typeName") {
                Some(Value::String(text)) => resolve_elementary(text)?,
                Some(_) => {
                    return Err(ImportError::wrong_type(
                        doc.context(),
                        "typeName",
                        "a type string or an elementary type name",
                    ))
                }
                None => return Err(ImportError::missing(doc.context(), "typeName")),
            }
        };
        Ok(ElementaryTypeNameExpression {
            id: self.node_id(doc)?,
            location,
            type_token,
        })
    }

    /// The literal kind comes from `kind`, or `token` in older documents.
    pub(crate) fn literal(&mut self, doc: &DocNode<'_>) -> Result<Literal, ImportError> {
        let location = self.location(doc)?;
        let literal_kind = match doc.opt_str("kind")? {
            Some(kind) => kind,
            None => doc
                .opt_str("token")?
                .ok_or_else(|| ImportError::missing(doc.context(), "kind"))?,
        };
        let value = doc.opt_str("value")?;

        let token = match literal_kind {
            "number" => TokenKind::Number,
            "string" => TokenKind::StringLiteral,
            "hexString" => TokenKind::HexStringLiteral,
            "bool" => match value {
                Some(text) => resolve_bool_literal(text)?,
                None => return Err(ImportError::missing(doc.context(), "value")),
            },
            other => {
                return Err(ImportError::invariant(
                    doc.context(),
                    format!("unknown literal kind `{other}`"),
                ))
            }
        };
        let hex_value = doc.opt_str("hexValue")?;
        if value.is_none() {
            // Only hex strings may lack a UTF-8 rendering.
            if token != TokenKind::HexStringLiteral || hex_value.is_none() {
                return Err(ImportError::missing(doc.context(), "value"));
            }
            debug!(id = ?doc.raw_id(), "hex string literal without a UTF-8 value");
        }

        let sub_denomination = doc
            .opt_str("subdenomination")?
            .map(resolve_subdenomination)
            .transpose()?;

        Ok(Literal {
            id: self.node_id(doc)?,
            location,
            token,
            value: value.map(str::to_owned),
            hex_value: hex_value.map(str::to_owned),
            sub_denomination,
        })
    }
}
