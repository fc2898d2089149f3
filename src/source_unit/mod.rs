mod declaration;

pub use declaration::{ClassDecl, Declarations, FunctionDecl, StatementKind};

use crate::error::Result;
use crate::parsers::treesitter::TreeSitterParser;
use tree_sitter::{Node, Tree};

/// A parsed script. Owns the tree and the text it points into.
pub struct SourceUnit {
    tree: Tree,
    source: String,
}

impl SourceUnit {
    pub fn parse(source: &str) -> Result<Self> {
        let mut parser = TreeSitterParser::new()?;
        let tree = parser.parse(source)?;

        Ok(SourceUnit {
            tree,
            source: source.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level statements in source order, comments excluded.
    pub fn statements(&self) -> Vec<Node<'_>> {
        let root = self.tree.root_node();
        let mut cursor = root.walk();
        let statements = root
            .named_children(&mut cursor)
            .filter(|node| !node.is_extra())
            .collect();
        statements
    }
}
