//! Type expressions for the AST.
//!
//! Types appear as definition signatures and struct field types. They are
//! purely syntactic here: a `TypeIdentifier` names a type but never carries a
//! resolved type, since no resolution happens in the front end.

use super::ast::strip_declaration_colon;

#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    TypeIdentifier {
        name: String,
        /// Always `None` when produced by the parser.
        resolved: Option<Box<TypeNode>>,
    },
    FunctionType {
        argument: Box<TypeNode>,
        result: Box<TypeNode>,
    },
    StructType {
        fields: Vec<StructField>,
    },
}

impl TypeNode {
    pub fn identifier(name: impl Into<String>) -> Self {
        TypeNode::TypeIdentifier {
            name: name.into(),
            resolved: None,
        }
    }

    pub fn function(argument: TypeNode, result: TypeNode) -> Self {
        TypeNode::FunctionType {
            argument: Box::new(argument),
            result: Box::new(result),
        }
    }

    pub fn get_kind_name(&self) -> &str {
        match self {
            TypeNode::TypeIdentifier { .. } => "TypeIdentifier",
            TypeNode::FunctionType { .. } => "FunctionType",
            TypeNode::StructType { .. } => "StructType",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    /// Keeps the declaration colon, e.g. `"x:"`.
    pub name: String,
    pub field_type: TypeNode,
}

impl StructField {
    pub fn new(name: impl Into<String>, field_type: TypeNode) -> Self {
        StructField {
            name: name.into(),
            field_type,
        }
    }

    pub fn bare_name(&self) -> &str {
        strip_declaration_colon(&self.name)
    }
}
