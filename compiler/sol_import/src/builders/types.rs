//! Type names.

use smallvec::SmallVec;
use sol_ir::ast::{
    ArrayTypeName, ElementaryTypeName, Expression, FunctionTypeName, Mapping, ParameterList,
    TypeName, UserDefinedTypeName,
};

use super::{mutability, visibility};
use crate::dispatch::Converter;
use crate::document::DocNode;
use crate::error::ImportError;
use crate::token::resolve_elementary;

impl Converter<'_> {
    /// The type text comes from `name`, or from the type description when an
    /// exporter left `name` out.
    pub(crate) fn elementary_type_name(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ElementaryTypeName, ImportError> {
        let location = self.location(doc)?;
        let text = match doc.opt_str("name")? {
            Some(text) => text,
            None => doc
                .scalar("typeDescriptions")
                .and_then(|descriptions| descriptions.get("typeString"))
                .and_then(|text| text.as_str())
                .ok_or_else(|| ImportError::missing(doc.context(), "name"))?,
        };
        Ok(ElementaryTypeName {
            id: self.node_id(doc)?,
            location,
            type_token: resolve_elementary(text)?,
        })
    }

    pub(crate) fn user_defined_type_name(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<UserDefinedTypeName, ImportError> {
        let location = self.location(doc)?;
        let name = doc.str("name")?;
        let name_path: SmallVec<[String; 2]> = name.split('.').map(str::to_owned).collect();
        if name_path.iter().any(String::is_empty) {
            return Err(ImportError::invariant(
                doc.context(),
                format!("malformed type path `{name}`"),
            ));
        }
        Ok(UserDefinedTypeName {
            id: self.node_id(doc)?,
            location,
            name_path,
        })
    }

    pub(crate) fn function_type_name(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<FunctionTypeName, ImportError> {
        let flags = mutability(doc)?;
        Ok(FunctionTypeName {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            parameter_types: self.required::<ParameterList>(doc, "parameterTypes")?,
            return_types: self.required::<ParameterList>(doc, "returnParameterTypes")?,
            visibility: visibility(doc)?,
            is_declared_const: flags.is_constant,
            is_payable: flags.is_payable,
        })
    }

    /// Mapping keys are elementary by grammar; anything else is rejected.
    pub(crate) fn mapping(&mut self, doc: &DocNode<'_>) -> Result<Mapping, ImportError> {
        Ok(Mapping {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            key_type: self.required::<ElementaryTypeName>(doc, "keyType")?,
            value_type: Box::new(self.required::<TypeName>(doc, "valueType")?),
        })
    }

    pub(crate) fn array_type_name(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ArrayTypeName, ImportError> {
        Ok(ArrayTypeName {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            base_type: Box::new(self.required::<TypeName>(doc, "baseType")?),
            length: self.optional::<Expression>(doc, "length")?.map(Box::new),
        })
    }
}
