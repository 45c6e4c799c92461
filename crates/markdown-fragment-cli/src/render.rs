use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use markdown_fragment_engine::{MarkdownFile, Pipeline, RenderOptions, Trace, io};
use relative_path::RelativePathBuf;

const STDIN: &str = "-";

/// One markdown source named on the command line.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

fn expand_inputs(patterns: &[String]) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    for pattern in patterns {
        if pattern == STDIN {
            inputs.push(Input::Stdin);
            continue;
        }

        let before = inputs.len();
        let matches =
            glob::glob(pattern).with_context(|| format!("Invalid pattern '{pattern}'"))?;
        for entry in matches {
            inputs.push(Input::File(entry?));
        }
        if inputs.len() == before {
            bail!("No files match '{pattern}'");
        }
    }
    Ok(inputs)
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read markdown from stdin")?;
            Ok(content)
        }
        Input::File(path) => Ok(io::read_path(path)?),
    }
}

fn print_trace(label: &str, trace: &Trace) -> Result<()> {
    let mut err = std::io::stderr().lock();
    writeln!(err, "== {label}: input ==")?;
    writeln!(err, "{}", trace.input)?;
    for step in &trace.stages {
        writeln!(err, "== {label}: {} ==", step.stage.name())?;
        writeln!(err, "{}", step.buffer)?;
    }
    Ok(())
}

/// Deepest directory containing every input file.
fn common_root(inputs: &[Input]) -> PathBuf {
    let mut parents = inputs.iter().filter_map(|input| match input {
        Input::File(path) => path.parent(),
        Input::Stdin => None,
    });
    let Some(first) = parents.next() else {
        return PathBuf::new();
    };

    let mut root = first.to_path_buf();
    for parent in parents {
        while !parent.starts_with(&root) {
            if !root.pop() {
                break;
            }
        }
    }
    root
}

/// Where a rendered file lands under `--out-dir`: its path below the common
/// root, with an `.html` extension.
fn output_path(path: &Path, root: &Path) -> RelativePathBuf {
    let file = path
        .strip_prefix(root)
        .ok()
        .and_then(|relative| RelativePathBuf::from_path(relative).ok())
        .map(MarkdownFile::new)
        .unwrap_or_else(|| {
            let file_name = path.file_name().unwrap_or_default().to_string_lossy();
            MarkdownFile::from(file_name.as_ref())
        });
    file.html_relative_path()
}

pub fn run(
    patterns: &[String],
    out_dir: Option<&Path>,
    trace: bool,
    options: RenderOptions,
) -> Result<()> {
    let pipeline = Pipeline::new(options);
    let mut stdout = std::io::stdout().lock();
    let inputs = expand_inputs(patterns)?;
    let root = common_root(&inputs);

    for input in &inputs {
        let markdown = read_input(input)?;
        let label = match input {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => path.display().to_string(),
        };

        let html = if trace {
            let traced = pipeline.run_traced(&markdown);
            print_trace(&label, &traced)?;
            traced.html
        } else {
            pipeline.run(&markdown)
        };

        match (input, out_dir) {
            (Input::File(path), Some(dir)) => {
                let target = output_path(path, &root);
                io::write_file(&target, dir, &html)?;
                log::info!("{label} -> {}", target.to_path(dir).display());
            }
            _ => writeln!(stdout, "{html}")?,
        }
    }

    Ok(())
}
