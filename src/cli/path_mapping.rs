use std::path::{Path, PathBuf};

/// Default output path for a converted JSON file: `dados.json` -> `dados_insert.sql`
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}_insert.sql", stem))
}

/// Map an input JSON file into an output SQL file path, preserving the
/// directory structure relative to `input_dir`
pub fn map_input_to_output(input_dir: &Path, input_file: &Path, output_dir: &Path) -> PathBuf {
    let relative = input_file.strip_prefix(input_dir).unwrap_or(input_file);
    let target = output_dir.join(relative);
    derive_output_path(&target)
}
