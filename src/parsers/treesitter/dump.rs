//! Structural debug rendering of tree-sitter nodes.
//!
//! Named nodes render as `kind(child, field=child, ...)`, leaves as
//! `kind("text")`. Anonymous tokens are only shown when they sit under a
//! field (the `operator` of a binary expression, for instance). The output is
//! for display and is never parsed back.

use super::get_node_text;
use tree_sitter::Node;

pub fn dump_node(node: Node, source: &str) -> String {
    let mut parts = Vec::new();
    let mut cursor = node.walk();

    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            let field = cursor.field_name();

            if !child.is_extra() {
                if child.is_named() {
                    let rendered = dump_node(child, source);
                    match field {
                        Some(name) => parts.push(format!("{}={}", name, rendered)),
                        None => parts.push(rendered),
                    }
                } else if let Some(name) = field {
                    parts.push(format!("{}={:?}", name, get_node_text(child, source)));
                }
            }

            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    if parts.is_empty() {
        format!("{}({:?})", node.kind(), get_node_text(node, source))
    } else {
        format!("{}({})", node.kind(), parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::treesitter::TreeSitterParser;

    fn dump_first_statement(source: &str) -> String {
        let mut parser = TreeSitterParser::new().unwrap();
        let tree = parser.parse(source).unwrap();
        let mut cursor = tree.root_node().walk();
        let statement = tree.root_node().named_children(&mut cursor).next().unwrap();
        dump_node(statement, source)
    }

    #[test]
    fn test_dump_assignment() {
        let dump = dump_first_statement("total = 0\n");
        assert_eq!(
            dump,
            r#"expression_statement(assignment(left=identifier("total"), right=integer("0")))"#
        );
    }

    #[test]
    fn test_dump_keeps_operator_field() {
        let dump = dump_first_statement("a + b\n");
        assert!(dump.contains(r#"operator="+""#), "{}", dump);
        assert!(dump.contains(r#"left=identifier("a")"#), "{}", dump);
    }

    #[test]
    fn test_dump_call() {
        let dump = dump_first_statement("print(x)\n");
        assert!(dump.starts_with("expression_statement(call(function=identifier(\"print\")"));
        assert!(dump.contains("identifier(\"x\")"));
    }

    #[test]
    fn test_dump_attribute_assignment() {
        let dump = dump_first_statement("self.items = [1, 2]\n");
        assert_eq!(
            dump,
            r#"expression_statement(assignment(left=attribute(object=identifier("self"), attribute=identifier("items")), right=list(integer("1"), integer("2"))))"#
        );
    }
}
