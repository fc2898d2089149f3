use crate::parsers::treesitter::dump::dump_node;
use crate::source_unit::StatementKind;
use crate::summarizer::classifier::is_async;
use tree_sitter::Node;

/// One tag per statement directly inside `block`. Nested blocks are not
/// visited.
pub fn classify_body(block: Node, source: &str) -> Vec<StatementKind> {
    let mut cursor = block.walk();
    let kinds = block
        .named_children(&mut cursor)
        .filter(|statement| !statement.is_extra())
        .map(|statement| classify_statement(statement, source))
        .collect();
    kinds
}

pub fn classify_statement(statement: Node, source: &str) -> StatementKind {
    match statement.kind() {
        "if_statement" => StatementKind::Conditional,
        "for_statement" if !is_async(statement) => StatementKind::Loop,
        "return_statement" => StatementKind::Return,
        "expression_statement" => classify_expression_statement(statement, source),
        _ => StatementKind::Other,
    }
}

// tree-sitter wraps assignments in `expression_statement`; augmented and
// annotated assignments are not plain assignments and count as neither.
fn classify_expression_statement(statement: Node, source: &str) -> StatementKind {
    let mut cursor = statement.walk();
    let children: Vec<Node> = statement
        .named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect();

    if let [only] = children.as_slice() {
        match only.kind() {
            "assignment" if only.child_by_field_name("type").is_some() => {
                return StatementKind::Other;
            }
            "assignment" => return StatementKind::Assignment(dump_node(statement, source)),
            "augmented_assignment" => return StatementKind::Other,
            _ => {}
        }
    }

    StatementKind::ExpressionStatement(dump_node(statement, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_unit::SourceUnit;

    fn body_of_first_function(source: &str) -> Vec<StatementKind> {
        let unit = SourceUnit::parse(source).unwrap();
        let function = unit.statements()[0];
        let block = function.child_by_field_name("body").unwrap();
        classify_body(block, unit.source())
    }

    fn tags(kinds: &[StatementKind]) -> Vec<&'static str> {
        kinds
            .iter()
            .map(|kind| match kind {
                StatementKind::Conditional => "if",
                StatementKind::Loop => "for",
                StatementKind::Return => "return",
                StatementKind::Assignment(_) => "assign",
                StatementKind::ExpressionStatement(_) => "expr",
                StatementKind::Other => "other",
            })
            .collect()
    }

    #[test]
    fn test_each_statement_kind() {
        let kinds = body_of_first_function(
            "def f(items):\n    total = 0\n    if not items:\n        return 0\n    for i in items:\n        total += i\n    print(total)\n    return total\n",
        );
        assert_eq!(tags(&kinds), vec!["assign", "if", "for", "expr", "return"]);
    }

    #[test]
    fn test_while_loops_are_other() {
        let kinds = body_of_first_function("def f(n):\n    while n:\n        n -= 1\n");
        assert_eq!(kinds, vec![StatementKind::Other]);
    }

    #[test]
    fn test_nested_blocks_are_not_visited() {
        let kinds = body_of_first_function(
            "def f(x):\n    if x:\n        for i in x:\n            return i\n",
        );
        assert_eq!(kinds, vec![StatementKind::Conditional]);
    }

    #[test]
    fn test_augmented_and_annotated_assignments_are_other() {
        let kinds = body_of_first_function("def f():\n    x: int = 1\n    x += 2\n    y: str\n");
        assert_eq!(tags(&kinds), vec!["other", "other", "other"]);
    }

    #[test]
    fn test_attribute_and_chained_assignments() {
        let kinds = body_of_first_function("def f(self):\n    self.count = 0\n    a = b = 1\n");
        assert_eq!(tags(&kinds), vec!["assign", "assign"]);
    }

    #[test]
    fn test_docstring_is_an_expression() {
        let kinds = body_of_first_function("def f():\n    \"\"\"Doc.\"\"\"\n    pass\n");
        assert_eq!(tags(&kinds), vec!["expr", "other"]);
    }

    #[test]
    fn test_comments_are_skipped() {
        let kinds = body_of_first_function("def f():\n    # note\n    return 1\n");
        assert_eq!(kinds, vec![StatementKind::Return]);
    }

    #[test]
    fn test_async_for_is_other() {
        let kinds = body_of_first_function(
            "def f(xs):\n    async for x in xs:\n        pass\n",
        );
        assert_eq!(kinds, vec![StatementKind::Other]);
    }

    #[test]
    fn test_assignment_dump_names_the_target() {
        let kinds = body_of_first_function("def f():\n    result = compute()\n");
        match &kinds[0] {
            StatementKind::Assignment(dump) => {
                assert!(dump.starts_with("expression_statement(assignment("), "{}", dump);
                assert!(dump.contains("identifier(\"result\")"), "{}", dump);
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }
}
