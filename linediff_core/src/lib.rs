use console_error_panic_hook::set_once as set_panic_hook;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod diff;
pub mod error;
pub mod options;
pub mod unified;

pub use diff::{
    AlignmentTable, DiffEntry, DiffKind, DiffResult, DiffStats, NormalizationPolicy, compute_diff,
    diff_texts, split_lines,
};
pub use error::{DiffError, Side};
pub use options::DiffOptions;
pub use unified::render_unified;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

/// Payload handed to the page for rendering
#[derive(Serialize, Debug)]
struct DiffReport {
    entries: Vec<DiffEntry>,
    stats: DiffStats,
}

#[wasm_bindgen]
pub fn generate_text_diff(left: &str, right: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = parse_options(options)?;
    let report = text_diff_internal(left, right, &options)?;
    serde_wasm_bindgen::to_value(&report)
        .map_err(|err| DiffError::Serialization(err.to_string()).into())
}

#[wasm_bindgen]
pub fn generate_unified_text_diff(
    left: &str,
    right: &str,
    old_name: &str,
    new_name: &str,
    options: JsValue,
) -> Result<String, JsValue> {
    let options = parse_options(options)?;
    unified_text_diff_internal(left, right, old_name, new_name, &options).map_err(JsValue::from)
}

fn parse_options(value: JsValue) -> Result<DiffOptions, DiffError> {
    if value.is_undefined() || value.is_null() {
        return Ok(DiffOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| DiffError::InvalidOptions(err.to_string()))
}

fn admitted_diff(left: &str, right: &str, options: &DiffOptions) -> Result<DiffResult, DiffError> {
    let left_lines = split_lines(left);
    let right_lines = split_lines(right);
    options.admit(Side::Left, left_lines.len())?;
    options.admit(Side::Right, right_lines.len())?;
    options.admit_table(left_lines.len(), right_lines.len())?;
    Ok(compute_diff(&left_lines, &right_lines, options.policy()))
}

fn text_diff_internal(
    left: &str,
    right: &str,
    options: &DiffOptions,
) -> Result<DiffReport, DiffError> {
    let result = admitted_diff(left, right, options)?;
    let stats = result.stats();
    Ok(DiffReport {
        entries: result.entries,
        stats,
    })
}

fn unified_text_diff_internal(
    left: &str,
    right: &str,
    old_name: &str,
    new_name: &str,
    options: &DiffOptions,
) -> Result<String, DiffError> {
    let result = admitted_diff(left, right, options)?;
    Ok(render_unified(
        &result,
        old_name,
        new_name,
        options.context_lines,
    ))
}

#[cfg(test)]
mod lib_tests;
