#![allow(dead_code)]

use std::path::Path;

use clap::Parser;
use dsep::cli::CliArgs;

/// Parse CLI args as the binary would (program name prepended).
pub fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["dsep"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("test CLI args must parse")
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Run the driver against the real filesystem and capture stdout.
pub fn run_capture(args: &CliArgs) -> (dsep::errors::Result<usize>, String) {
    let mut out = Vec::new();
    let result = dsep::run_with(args, &dsep::fs::RealFileSystem, &mut out);
    (result, String::from_utf8(out).expect("stdout is utf-8"))
}
