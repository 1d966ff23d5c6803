//! Output formatting for CLI responses.

use lingua_mcp::CapabilityKind;
use lingua_types::{DiagnosticError, ErrorKind, LinguaError};

/// Renders a domain error for the terminal: `Error: <message> (<context>)`.
pub fn render_error(err: &LinguaError) -> String {
    match &err.context {
        Some(ctx) => format!("Error: {} ({ctx})", err.message),
        None => format!("Error: {}", err.message),
    }
}

/// Process exit status for a failed command.
pub fn exit_code(kind: &ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::InvalidInput => 2,
        ErrorKind::NotFound => 3,
        ErrorKind::Config => 78,
    }
}

/// Prints the cause and remediation of a diagnosed error, if any.
pub fn print_diagnostic(err: &dyn DiagnosticError) {
    if let Some(hint) = err.hint() {
        eprintln!("\n  Cause: {hint}");
    }
    if let Some(fix) = err.fix() {
        eprintln!("  Fix:   {fix}\n");
    }
}

/// Renders `(kind, name, description)` rows as an aligned table.
pub fn capability_table(rows: &[(CapabilityKind, &str, &str)]) -> String {
    let name_width = rows
        .iter()
        .map(|(_, name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = format!("{:<8}  {:<name_width$}  DESCRIPTION\n", "KIND", "NAME");
    for (kind, name, description) in rows {
        out.push_str(&format!(
            "{:<8}  {:<name_width$}  {description}\n",
            kind.to_string(),
            name
        ));
    }
    out
}
