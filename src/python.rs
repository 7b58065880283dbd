//! Python bindings

use crate::config::{ConvertOptions, Indent, OutputFormat, OutputOrder};
use crate::convert::{convert_file, convert_tree_to_strategies as convert_text};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::path::PathBuf;

pyo3::create_exception!(
    tree_strategies,
    FormatError,
    PyValueError,
    "A tree line does not match the line grammar."
);
pyo3::create_exception!(
    tree_strategies,
    StructuralError,
    PyValueError,
    "The tree lines do not form a single binary tree."
);
pyo3::create_exception!(
    tree_strategies,
    EmptyInputError,
    PyValueError,
    "The input holds no tree lines."
);

fn build_options(
    ignore_always_false_strategies: bool,
    sort: bool,
    expand_disjunctions: bool,
    output_format: &str,
    indent_spaces: Option<usize>,
) -> PyResult<ConvertOptions> {
    let mut options = ConvertOptions::default();
    options.parse.indent = indent_spaces.map_or(Indent::Tab, Indent::Spaces);
    options.extract.skip_unsatisfiable = ignore_always_false_strategies;
    options.render.format = output_format.parse::<OutputFormat>()?;
    options.render.order = if sort { OutputOrder::Sorted } else { OutputOrder::Traversal };
    options.render.expand_disjunctions = expand_disjunctions;
    options.validate()?;
    Ok(options)
}

/// Convert a tree dump into a list of strategy lines
///
/// # Arguments
/// * `tree` - The tree dump, one node per line
/// * `ignore_always_false_strategies` - Drop strategies that can never hold
/// * `sort` - Sort lines and drop duplicates instead of traversal order
/// * `expand_disjunctions` - One flat rule per OR alternative
/// * `output_format` - "text" or "json_lines"
/// * `indent_spaces` - Spaces per level; tabs when omitted
///
/// # Raises
/// FormatError, StructuralError or EmptyInputError when the tree is malformed
#[pyfunction]
#[pyo3(signature = (
    tree,
    *,
    ignore_always_false_strategies = false,
    sort = true,
    expand_disjunctions = true,
    output_format = "text",
    indent_spaces = None
))]
fn convert_tree_to_strategies(
    py: Python<'_>,
    tree: &str,
    ignore_always_false_strategies: bool,
    sort: bool,
    expand_disjunctions: bool,
    output_format: &str,
    indent_spaces: Option<usize>,
) -> PyResult<Vec<String>> {
    let options = build_options(
        ignore_always_false_strategies,
        sort,
        expand_disjunctions,
        output_format,
        indent_spaces,
    )?;
    Ok(py.allow_threads(|| convert_text(tree, &options))?)
}

/// Read `tree_file_path` and write its strategies to `strategies_file_path`
///
/// Returns the number of lines written.
#[pyfunction]
#[pyo3(signature = (
    tree_file_path,
    strategies_file_path,
    *,
    ignore_always_false_strategies = false,
    sort = true,
    expand_disjunctions = true,
    output_format = "text",
    indent_spaces = None
))]
#[allow(clippy::too_many_arguments)]
fn convert_tree_file_into_strategies_file(
    py: Python<'_>,
    tree_file_path: PathBuf,
    strategies_file_path: PathBuf,
    ignore_always_false_strategies: bool,
    sort: bool,
    expand_disjunctions: bool,
    output_format: &str,
    indent_spaces: Option<usize>,
) -> PyResult<usize> {
    let options = build_options(
        ignore_always_false_strategies,
        sort,
        expand_disjunctions,
        output_format,
        indent_spaces,
    )?;
    let summary = py.allow_threads(|| convert_file(&tree_file_path, &strategies_file_path, &options))?;
    Ok(summary.lines)
}

/// Awaitable version of `convert_tree_file_into_strategies_file`
///
/// The conversion runs on Tokio's blocking pool so the asyncio event loop
/// stays responsive.
///
/// # Example (Python)
/// ```python
/// written = await convert_tree_file_async("tree.txt", "strategies.txt")
/// ```
#[pyfunction]
#[pyo3(signature = (
    tree_file_path,
    strategies_file_path,
    *,
    ignore_always_false_strategies = false,
    sort = true,
    expand_disjunctions = true,
    output_format = "text",
    indent_spaces = None
))]
#[allow(clippy::too_many_arguments)]
fn convert_tree_file_async<'py>(
    py: Python<'py>,
    tree_file_path: PathBuf,
    strategies_file_path: PathBuf,
    ignore_always_false_strategies: bool,
    sort: bool,
    expand_disjunctions: bool,
    output_format: &str,
    indent_spaces: Option<usize>,
) -> PyResult<Bound<'py, PyAny>> {
    let options = build_options(
        ignore_always_false_strategies,
        sort,
        expand_disjunctions,
        output_format,
        indent_spaces,
    )?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let summary = tokio::task::spawn_blocking(move || {
            convert_file(&tree_file_path, &strategies_file_path, &options)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("Conversion task panicked: {}", e))
        })??;

        Ok(summary.lines)
    })
}

/// Python module definition
#[pymodule]
fn tree_strategies(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_function(wrap_pyfunction!(convert_tree_to_strategies, m)?)?;
    m.add_function(wrap_pyfunction!(convert_tree_file_into_strategies_file, m)?)?;
    m.add_function(wrap_pyfunction!(convert_tree_file_async, m)?)?;

    m.add("FormatError", m.py().get_type::<FormatError>())?;
    m.add("StructuralError", m.py().get_type::<StructuralError>())?;
    m.add("EmptyInputError", m.py().get_type::<EmptyInputError>())?;
    Ok(())
}
