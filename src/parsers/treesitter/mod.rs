use crate::error::{Result, SummarizeError};
use log::{debug, trace};
use tree_sitter::{Node, Parser, Tree};

pub mod bindings;
pub mod dump;
pub mod languages;

const MAX_SNIPPET_CHARS: usize = 40;

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&bindings::python_language())
            .map_err(|e| SummarizeError::Parser(e.to_string()))?;

        Ok(Self { parser })
    }

    /// Parses `content` and rejects any tree tree-sitter had to recover, as
    /// well as Python 2 constructs the grammar still accepts.
    pub fn parse(&mut self, content: &str) -> Result<Tree> {
        let tree = self
            .parser
            .parse(content.as_bytes(), None)
            .ok_or_else(|| SummarizeError::Parser("parser produced no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            if let Some(node) = first_error_node(root) {
                let error = syntax_error(node, content);
                debug!("Rejected source: {}", error);
                return Err(error);
            }
            return Err(SummarizeError::Syntax {
                message: "invalid syntax".to_string(),
                line: 1,
                column: 1,
            });
        }

        if let Some((node, message)) = first_python3_violation(root) {
            let error = located_syntax_error(node, message);
            debug!("Rejected source: {}", error);
            return Err(error);
        }

        trace!("Parsed {} top-level nodes", root.named_child_count());
        Ok(tree)
    }
}

pub fn get_node_text<'a>(node: Node, source: &'a str) -> &'a str {
    let start_byte = node.start_byte();
    let end_byte = node.end_byte();

    if start_byte > end_byte || end_byte > source.len() {
        return "";
    }

    source.get(start_byte..end_byte).unwrap_or("")
}

// Document order, so the reported location is the earliest one.
fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}

// The grammar parses `print x`, `exec x` and defaults followed by required
// parameters, none of which Python 3 accepts.
fn first_python3_violation(node: Node) -> Option<(Node, String)> {
    match node.kind() {
        "print_statement" => {
            return Some((node, "Missing parentheses in call to 'print'".to_string()));
        }
        "exec_statement" => {
            return Some((node, "Missing parentheses in call to 'exec'".to_string()));
        }
        "parameters" | "lambda_parameters" => {
            if let Some(param) = required_after_default(node) {
                return Some((
                    param,
                    "non-default argument follows default argument".to_string(),
                ));
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(found) = first_python3_violation(child) {
            return Some(found);
        }
    }
    None
}

fn required_after_default(params: Node) -> Option<Node> {
    let mut seen_default = false;
    let mut cursor = params.walk();

    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "default_parameter" | "typed_default_parameter" => seen_default = true,
            "identifier" if seen_default => return Some(param),
            "typed_parameter" => {
                let mut inner = param.walk();
                let first_kind = param.named_children(&mut inner).next().map(|n| n.kind());
                match first_kind {
                    Some("identifier") if seen_default => return Some(param),
                    Some("list_splat_pattern") | Some("dictionary_splat_pattern") => break,
                    _ => {}
                }
            }
            // Everything after `*` or `*args` is keyword-only.
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => break,
            _ => {}
        }
    }
    None
}

fn located_syntax_error(node: Node, message: String) -> SummarizeError {
    let position = node.start_position();
    SummarizeError::Syntax {
        message,
        line: position.row + 1,
        column: position.column + 1,
    }
}

fn syntax_error(node: Node, source: &str) -> SummarizeError {
    let message = if node.is_missing() {
        format!("expected '{}'", node.kind())
    } else {
        let snippet: String = get_node_text(node, source)
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .chars()
            .take(MAX_SNIPPET_CHARS)
            .collect();
        if snippet.is_empty() {
            "invalid syntax".to_string()
        } else {
            format!("invalid syntax near {:?}", snippet)
        }
    };

    located_syntax_error(node, message)
}
