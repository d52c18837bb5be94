use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sqlconv::cli::{path_mapping, Args};
use sqlconv::conversion::{ConversionConfig, ConversionEngine, ConversionStats, SqlScript};
use sqlconv::error::{ConversionError, ConversionResult};
use sqlconv::parser::{directory, JsonSource};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> ConversionResult<()> {
    let config = args.conversion_config()?;

    if args.verbose && !args.quiet {
        eprintln!(
            "Table: {}, batch size: {}, columns: {}",
            config.table_name,
            config.batch_size,
            config.columns.len()
        );
    }

    if args.stdin {
        return convert_stdin(args, &config);
    }

    let Some(input) = &args.input else {
        return Err(ConversionError::configuration(
            "No input provided. Use --stdin or provide an input path".to_string(),
        ));
    };

    // Inline JSON can be passed directly on the command line
    let trimmed = input.trim();
    if (trimmed.starts_with('[') && trimmed.ends_with(']'))
        || (trimmed.starts_with('{') && trimmed.ends_with('}'))
    {
        return convert_inline(trimmed, args, &config);
    }

    let path = PathBuf::from(input);
    if path.is_dir() {
        convert_directory(&path, args, &config)
    } else {
        convert_file(&path, args, &config)
    }
}

fn convert_stdin(args: &Args, config: &ConversionConfig) -> ConversionResult<()> {
    let engine = ConversionEngine::new(config.clone());
    let script = engine.convert_from_source(&JsonSource::Stdin)?;
    emit(script, args.output.as_deref(), args)
}

fn convert_inline(json: &str, args: &Args, config: &ConversionConfig) -> ConversionResult<()> {
    let engine = ConversionEngine::new(config.clone());
    let script = engine.convert_string(json)?;
    emit(script, args.output.as_deref(), args)
}

fn convert_file(input: &Path, args: &Args, config: &ConversionConfig) -> ConversionResult<()> {
    let output = match &args.output {
        Some(path) => path.clone(),
        None => path_mapping::derive_output_path(input),
    };

    let script = sqlconv::convert_file(input, Some(output.as_path()), config)?;

    if !args.quiet {
        println!(
            "{} {} -> {} ({} records, {} statements)",
            style("✓").green(),
            input.display(),
            output.display(),
            script.stats.record_count,
            script.stats.batch_count
        );
    }

    print_stats(&script.stats, args);
    Ok(())
}

fn convert_directory(
    input_dir: &Path,
    args: &Args,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    let output_dir = args.output.clone().ok_or_else(|| {
        ConversionError::configuration(
            "Output directory required for directory conversion (-o/--output)".to_string(),
        )
    })?;

    let json_files = directory::find_json_files(input_dir, args.recursive).map_err(|e| {
        ConversionError::io(
            format!("Failed scanning directory: {}", e),
            Some(input_dir.to_path_buf()),
        )
    })?;

    if json_files.is_empty() {
        if !args.quiet {
            println!("No JSON files found in {}", input_dir.display());
        }
        return Ok(());
    }

    if !args.quiet {
        println!("Found {} JSON files", json_files.len());
    }

    let mut total = ConversionStats::new();
    let mut failures = 0usize;

    for json_file in &json_files {
        let output_file = path_mapping::map_input_to_output(input_dir, json_file, &output_dir);

        match sqlconv::convert_file(json_file, Some(output_file.as_path()), config) {
            Ok(script) => {
                if !args.quiet {
                    println!(
                        "{} {} -> {}",
                        style("✓").green(),
                        json_file.display(),
                        output_file.display()
                    );
                }
                total.combine(&script.stats);
            }
            Err(e) => {
                eprintln!(
                    "{} {}: {}",
                    style("✗").red(),
                    json_file.display(),
                    e.user_message()
                );
                failures += 1;
                if !args.continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    print_stats(&total, args);

    if failures > 0 {
        return Err(ConversionError::other(anyhow::anyhow!(
            "{} of {} files failed to convert",
            failures,
            json_files.len()
        )));
    }

    Ok(())
}

/// Write a script to the output file, or stdout when none was given
fn emit(script: SqlScript, output: Option<&Path>, args: &Args) -> ConversionResult<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        ConversionError::io(
                            format!("Failed to create output directory: {}", e),
                            Some(parent.to_path_buf()),
                        )
                    })?;
                }
            }
            std::fs::write(path, &script.content).map_err(|e| {
                ConversionError::io(
                    format!("Failed to write output file: {}", e),
                    Some(path.to_path_buf()),
                )
            })?;

            if !args.quiet {
                println!("{} Converted to: {}", style("✓").green(), path.display());
            }
        }
        None => {
            println!("{}", script.content);
        }
    }

    print_stats(&script.stats, args);
    Ok(())
}

fn print_stats(stats: &ConversionStats, args: &Args) {
    if args.stats && !args.quiet {
        println!("\n{}", stats.summary());
    }
}
