//! Contracts and the declarations they contain.

use sol_ir::ast::{
    Block, ContractDefinition, EnumDefinition, EnumValue, EventDefinition, Expression,
    FunctionDefinition, Identifier, InheritanceSpecifier, ModifierDefinition, ModifierInvocation,
    Node, ParameterList, StructDefinition, TypeName, UserDefinedTypeName, UsingForDirective,
    VariableDeclaration,
};

use super::{bare_identifier, documentation, mutability, storage_location, visibility};
use crate::attributes::decode_contract_kind;
use crate::dispatch::Converter;
use crate::document::DocNode;
use crate::error::ImportError;

impl Converter<'_> {
    pub(crate) fn contract_definition(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ContractDefinition, ImportError> {
        let location = self.location(doc)?;
        let contract_kind = decode_contract_kind(doc.str("contractKind")?, &doc.context())?;
        Ok(ContractDefinition {
            id: self.node_id(doc)?,
            location,
            name: doc.str("name")?.to_owned(),
            documentation: documentation(doc)?,
            base_contracts: self.list::<InheritanceSpecifier>(doc, "baseContracts")?,
            sub_nodes: self.list::<Node>(doc, "nodes")?,
            contract_kind,
        })
    }

    pub(crate) fn inheritance_specifier(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<InheritanceSpecifier, ImportError> {
        Ok(InheritanceSpecifier {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            base_name: self.required::<UserDefinedTypeName>(doc, "baseName")?,
            arguments: self.list::<Expression>(doc, "arguments")?,
        })
    }

    pub(crate) fn using_for_directive(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<UsingForDirective, ImportError> {
        Ok(UsingForDirective {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            library_name: self.required::<UserDefinedTypeName>(doc, "libraryName")?,
            type_name: self.optional::<TypeName>(doc, "typeName")?,
        })
    }

    pub(crate) fn struct_definition(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<StructDefinition, ImportError> {
        Ok(StructDefinition {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            name: doc.str("name")?.to_owned(),
            members: self.list::<VariableDeclaration>(doc, "members")?,
        })
    }

    pub(crate) fn enum_definition(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<EnumDefinition, ImportError> {
        Ok(EnumDefinition {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            name: doc.str("name")?.to_owned(),
            members: self.list::<EnumValue>(doc, "members")?,
        })
    }

    pub(crate) fn enum_value(&mut self, doc: &DocNode<'_>) -> Result<EnumValue, ImportError> {
        Ok(EnumValue {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            name: doc.str("name")?.to_owned(),
        })
    }

    pub(crate) fn parameter_list(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ParameterList, ImportError> {
        Ok(ParameterList {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            parameters: self.list::<VariableDeclaration>(doc, "parameters")?,
        })
    }

    /// Functions with `implemented: false` have no body; every other
    /// function must carry one.
    pub(crate) fn function_definition(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<FunctionDefinition, ImportError> {
        let location = self.location(doc)?;
        let id = self.node_id(doc)?;
        let is_constructor = match doc.opt_bool("isConstructor")? {
            Some(flag) => flag,
            None => doc.opt_str("kind")? == Some("constructor"),
        };
        let flags = mutability(doc)?;

        let parameters = self.required::<ParameterList>(doc, "parameters")?;
        let return_parameters = self.required::<ParameterList>(doc, "returnParameters")?;
        let modifiers = self.list::<ModifierInvocation>(doc, "modifiers")?;
        let body = if doc.opt_bool("implemented")? == Some(false) {
            None
        } else {
            Some(self.required::<Block>(doc, "body")?)
        };

        Ok(FunctionDefinition {
            id,
            location,
            name: doc.str("name")?.to_owned(),
            visibility: visibility(doc)?,
            is_constructor,
            documentation: documentation(doc)?,
            parameters,
            is_declared_const: flags.is_constant,
            modifiers,
            return_parameters,
            is_payable: flags.is_payable,
            body,
        })
    }

    pub(crate) fn variable_declaration(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<VariableDeclaration, ImportError> {
        let location = self.location(doc)?;
        let type_name = self.optional::<TypeName>(doc, "typeName")?.map(Box::new);
        let value = self.optional::<Expression>(doc, "value")?.map(Box::new);
        let is_constant = match doc.opt_bool("constant")? {
            Some(flag) => flag,
            None => doc.opt_str("mutability")? == Some("constant"),
        };
        Ok(VariableDeclaration {
            id: self.node_id(doc)?,
            location,
            type_name,
            name: doc.str("name")?.to_owned(),
            value,
            visibility: visibility(doc)?,
            is_state_variable: doc.flag("stateVariable")?,
            is_indexed: doc.flag("indexed")?,
            is_constant,
            storage_location: storage_location(doc)?,
        })
    }

    pub(crate) fn modifier_definition(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ModifierDefinition, ImportError> {
        Ok(ModifierDefinition {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            name: doc.str("name")?.to_owned(),
            documentation: documentation(doc)?,
            parameters: self.required::<ParameterList>(doc, "parameters")?,
            body: self.required::<Block>(doc, "body")?,
        })
    }

    /// The modifier is named by a `modifierName` identifier node or, in
    /// older documents, by a bare `name` string.
    pub(crate) fn modifier_invocation(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<ModifierInvocation, ImportError> {
        let location = self.location(doc)?;
        let id = self.node_id(doc)?;
        let name = match self.optional::<Identifier>(doc, "modifierName")? {
            Some(name) => name,
            None => bare_identifier(doc.str("name")?, id, &location),
        };
        Ok(ModifierInvocation {
            id,
            location,
            name,
            arguments: self.list::<Expression>(doc, "arguments")?,
        })
    }

    pub(crate) fn event_definition(
        &mut self,
        doc: &DocNode<'_>,
    ) -> Result<EventDefinition, ImportError> {
        Ok(EventDefinition {
            id: self.node_id(doc)?,
            location: self.location(doc)?,
            name: doc.str("name")?.to_owned(),
            documentation: documentation(doc)?,
            parameters: self.required::<ParameterList>(doc, "parameters")?,
            is_anonymous: doc.flag("anonymous")?,
        })
    }
}
