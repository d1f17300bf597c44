use super::types::TypeNode;

/// Node Kinds
///
/// The closed set of nodes the parser produces. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Root {
        statements: Vec<Node>,
    },
    AtomLiteral {
        name: String,
    },
    IntegerLiteral {
        text: String,
    },
    FloatLiteral {
        text: String,
    },
    StringLiteral {
        text: String,
    },
    /// Marks the `end` that closed a definition body.
    DefinitionEnd,
    FunctionReturn {
        value: Box<Node>,
    },
    /// `name` keeps the trailing colon of the declaration literal, e.g. `"Main:"`.
    ModuleDefinition {
        name: String,
        body: Vec<Node>,
    },
    FunctionDefinition {
        name: String,
        signature: TypeNode,
        body: Vec<Node>,
    },
}

impl Node {
    pub fn get_kind_name(&self) -> &str {
        match self {
            Node::Root { .. } => "Root",
            Node::AtomLiteral { .. } => "AtomLiteral",
            Node::IntegerLiteral { .. } => "IntegerLiteral",
            Node::FloatLiteral { .. } => "FloatLiteral",
            Node::StringLiteral { .. } => "StringLiteral",
            Node::DefinitionEnd => "DefinitionEnd",
            Node::FunctionReturn { .. } => "FunctionReturn",
            Node::ModuleDefinition { .. } => "ModuleDefinition",
            Node::FunctionDefinition { .. } => "FunctionDefinition",
        }
    }

    pub fn is_definition_end(&self) -> bool {
        matches!(self, Node::DefinitionEnd)
    }

    /// Child statements of roots and definitions.
    pub fn get_body(&self) -> Option<&[Node]> {
        match self {
            Node::Root { statements } => Some(statements.as_slice()),
            Node::ModuleDefinition { body, .. } | Node::FunctionDefinition { body, .. } => {
                Some(body.as_slice())
            }
            _ => None,
        }
    }

    /// Declared name of a definition, exactly as written (`"main:"`).
    pub fn get_name(&self) -> Option<&str> {
        match self {
            Node::ModuleDefinition { name, .. } | Node::FunctionDefinition { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        }
    }

    /// Declared name of a definition without the declaration colon (`"main"`).
    pub fn bare_name(&self) -> Option<&str> {
        self.get_name().map(strip_declaration_colon)
    }
}

pub fn strip_declaration_colon(name: &str) -> &str {
    name.strip_suffix(':').unwrap_or(name)
}
