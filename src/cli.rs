use std::path::PathBuf;

use thiserror::Error;

/// Extensions recognized as images, matched case-sensitively against the
/// path's extension. Not exposed on the command line.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub recursive: bool,
    pub all_files: bool,
    pub extensions: Vec<String>,
}

#[derive(Debug)]
pub enum Invocation {
    Run(Config),
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("the following arguments are required: paths")]
    MissingPaths,
    #[error("unrecognized argument: {0}")]
    UnrecognizedArgument(String),
}

pub fn parse_args(args: Vec<String>) -> Result<Invocation, CliError> {
    let mut recursive = false;
    let mut all_files = false;
    let mut paths = Vec::new();
    let mut literal = false;

    for arg in args {
        if !literal && arg.len() > 1 && arg.starts_with('-') {
            match arg.as_str() {
                "--recursive" | "-r" => recursive = true,
                "--all" | "-A" => all_files = true,
                "--help" | "-h" => return Ok(Invocation::Help),
                "--" => literal = true,
                other => return Err(CliError::UnrecognizedArgument(other.to_string())),
            }
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    if paths.is_empty() {
        return Err(CliError::MissingPaths);
    }

    Ok(Invocation::Run(Config {
        paths,
        recursive,
        all_files,
        extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
    }))
}

pub fn usage() -> String {
    "\
usage: instaborder [-h] [--recursive] [--all] paths [paths ...]

Square pictures for instagram

positional arguments:
  paths            path to image or directory of images

options:
  -h, --help       show this help message and exit
  --recursive, -r  recurse into directories
  --all, -A        include hidden files and directories
"
    .to_string()
}
