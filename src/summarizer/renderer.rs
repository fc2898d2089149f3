use crate::source_unit::{Declarations, FunctionDecl, StatementKind};

pub const NO_DECLARATIONS_SUMMARY: &str = "No functions or classes were found.";

pub const PROCEDURAL_FALLBACK: &str =
    "The code seems to be procedural in nature and doesn't have any classes or functions defined.";

const PROGRAM_FLOW: [&str; 4] = [
    "\nMain Program Flow:",
    "1. The code likely defines the structure and flow of a program with classes and functions.",
    "2. It handles tasks like processing data, user input, and performing operations.",
    "3. The execution starts with function calls or entry points defined in the script.",
];

pub fn render_summary(declarations: &Declarations) -> String {
    let mut lines = Vec::new();

    if !declarations.functions.is_empty() {
        lines.push(format!(
            "Functions found: {}",
            declarations.function_names().join(", ")
        ));
    }
    if !declarations.classes.is_empty() {
        lines.push(format!(
            "Classes found: {}",
            declarations.class_names().join(", ")
        ));
    }
    if declarations.is_empty() {
        lines.push(NO_DECLARATIONS_SUMMARY.to_string());
    }

    lines.join("\n")
}

pub fn render_explanation(declarations: &Declarations) -> String {
    let mut lines = Vec::new();

    if !declarations.functions.is_empty() {
        lines.push("The code defines the following functions:".to_string());
        for function in &declarations.functions {
            render_function(function, &mut lines);
        }
    }

    if !declarations.classes.is_empty() {
        lines.push("The code defines the following classes:".to_string());
        for class in &declarations.classes {
            lines.push(format!(
                "- {}: This class represents {} related tasks or functionality.",
                class.name, class.name
            ));
        }
    }

    lines.extend(PROGRAM_FLOW.iter().map(|line| line.to_string()));

    if declarations.is_empty() {
        lines.push(PROCEDURAL_FALLBACK.to_string());
    }

    lines.join("\n")
}

fn render_function(function: &FunctionDecl, lines: &mut Vec<String>) {
    // The parameter sentence follows the description with no separator.
    let mut details = format!(
        "- {}: This function is likely a {} calculation. \
         It accepts the input parameter(s) and returns the result of the calculation.",
        function.name, function.name
    );
    if function.has_parameters() {
        details.push_str(&format!(
            "The function takes the parameters: {}.",
            function.parameters.join(", ")
        ));
    }
    lines.push(details);

    lines.push(format!(
        "  Function {} performs the following steps:",
        function.name
    ));
    lines.extend(function.body.iter().filter_map(render_step));
}

fn render_step(kind: &StatementKind) -> Option<String> {
    match kind {
        StatementKind::Conditional => {
            Some("  - Contains conditional checks (if statements).".to_string())
        }
        StatementKind::Loop => Some("  - Contains a loop (for loop).".to_string()),
        StatementKind::Return => Some("  - Returns a result.".to_string()),
        StatementKind::Assignment(dump) => {
            Some(format!("  - Assigns values to variables, e.g., {}.", dump))
        }
        StatementKind::ExpressionStatement(dump) => {
            Some(format!("  - Contains an expression: {}.", dump))
        }
        StatementKind::Other => None,
    }
}
