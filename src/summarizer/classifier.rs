use crate::parsers::treesitter::get_node_text;
use crate::source_unit::{ClassDecl, Declarations, FunctionDecl, SourceUnit};
use crate::summarizer::body::classify_body;
use log::{debug, trace};
use tree_sitter::Node;

/// Splits the top-level statements into functions and classes, keeping
/// source order and duplicates. Everything else at module level is ignored.
pub fn classify_declarations(unit: &SourceUnit) -> Declarations {
    let source = unit.source();
    let mut declarations = Declarations::default();

    for statement in unit.statements() {
        let definition = match statement.kind() {
            "decorated_definition" => match statement.child_by_field_name("definition") {
                Some(inner) => inner,
                None => continue,
            },
            _ => statement,
        };

        match definition.kind() {
            "function_definition" => {
                if is_async(definition) {
                    trace!("Skipping async function at line {}", line_of(definition));
                    continue;
                }
                if let Some(function) = build_function(definition, source) {
                    declarations.functions.push(function);
                }
            }
            "class_definition" => {
                if let Some(name) = definition.child_by_field_name("name") {
                    declarations
                        .classes
                        .push(ClassDecl::new(get_node_text(name, source).to_string()));
                }
            }
            other => trace!("Ignoring top-level {} at line {}", other, line_of(definition)),
        }
    }

    debug!(
        "Classified {} functions and {} classes",
        declarations.functions.len(),
        declarations.classes.len()
    );
    declarations
}

/// `async def` and `async for` carry a leading `async` token.
pub(crate) fn is_async(node: Node) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == "async");
    found
}

fn build_function(node: Node, source: &str) -> Option<FunctionDecl> {
    let name = get_node_text(node.child_by_field_name("name")?, source).to_string();
    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| positional_parameters(params, source))
        .unwrap_or_default();
    let body = node
        .child_by_field_name("body")
        .map(|block| classify_body(block, source))
        .unwrap_or_default();

    trace!(
        "Function {} with {} parameters and {} body statements",
        name,
        parameters.len(),
        body.len()
    );
    Some(FunctionDecl::new(name, parameters, body))
}

/// Positional-or-keyword parameter names only: anything before `/` is
/// positional-only, and `*`, `*args` and `**kwargs` end the list.
fn positional_parameters(params: Node, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = params.walk();

    for param in params.named_children(&mut cursor) {
        if param.is_extra() {
            continue;
        }
        match param.kind() {
            "identifier" => names.push(get_node_text(param, source).to_string()),
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = param.child_by_field_name("name") {
                    names.push(get_node_text(name, source).to_string());
                }
            }
            "typed_parameter" => {
                let mut inner = param.walk();
                let first = param.named_children(&mut inner).next();
                match first.map(|n| (n.kind(), n)) {
                    Some(("identifier", ident)) => {
                        names.push(get_node_text(ident, source).to_string())
                    }
                    Some(("list_splat_pattern", _)) => break,
                    _ => {}
                }
            }
            "positional_separator" => names.clear(),
            "keyword_separator" | "list_splat_pattern" => break,
            _ => {}
        }
    }

    names
}

fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}
