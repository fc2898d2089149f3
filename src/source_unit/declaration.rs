use serde::{Deserialize, Serialize};

/// Shape of one statement directly inside a function body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Conditional,
    Loop,
    Return,
    /// Carries the structural dump of the whole statement.
    Assignment(String),
    ExpressionStatement(String),
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<StatementKind>,
}

impl FunctionDecl {
    pub fn new(name: String, parameters: Vec<String>, body: Vec<StatementKind>) -> Self {
        FunctionDecl {
            name,
            parameters,
            body,
        }
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
}

impl ClassDecl {
    pub fn new(name: String) -> Self {
        ClassDecl { name }
    }
}

/// Top-level functions and classes, each in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Declarations {
    pub functions: Vec<FunctionDecl>,
    pub classes: Vec<ClassDecl>,
}

impl Declarations {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }

    pub fn function_names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }
}
