//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::dump::{self, DumpError};
use crate::unparse::{UnparseConfig, unparse_with_config};
use mtail_syntax::ast::Node;

use super::{CliError, CliResult, ExitCode};

/// Render a tree dump and print or write the program text.
pub fn render_file(path: &Path, indent: Option<usize>, output: Option<&Path>) -> CliResult<ExitCode> {
    let tree = load_tree(path)?;
    let mut config = UnparseConfig::default();
    if let Some(width) = indent {
        config = config.with_indent_width(width);
    }
    let text = unparse_with_config(&tree, config);

    match output {
        Some(out) => {
            tracing::debug!(path = %out.display(), bytes = text.len(), "writing program text");
            fs::write(out, &text)
                .map_err(|e| CliError::failure(format!("Error writing {}: {}", out.display(), e)))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            let result = if text.is_empty() || text.ends_with('\n') {
                stdout.write_all(text.as_bytes())
            } else {
                writeln!(stdout, "{text}")
            };
            result.map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Decode a tree dump and unparse it.
pub fn render_source(source: &str, config: UnparseConfig) -> CliResult<String> {
    let tree = decode(source)?;
    Ok(unparse_with_config(&tree, config))
}

/// Validate a tree dump and report its size.
pub fn check_file(path: &Path) -> CliResult<ExitCode> {
    let tree = load_tree(path)?;
    println!("{}: ok ({} nodes, root {})", path.display(), tree.node_count(), tree.kind_name());
    Ok(ExitCode::SUCCESS)
}

fn decode(source: &str) -> CliResult<Node> {
    dump::parse_tree_json(source).map_err(report)
}

/// Load the dump from a file, or from stdin when the path is `-`.
fn load_tree(path: &Path) -> CliResult<Node> {
    if path == Path::new("-") {
        tracing::debug!("reading tree dump from stdin");
        let source = io::read_to_string(io::stdin()).map_err(|e| report(DumpError::Io(e)))?;
        return decode(&source);
    }
    dump::read_tree(path).map_err(report)
}

/// Render a dump error with its diagnostic code and help text.
fn report(err: DumpError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}
