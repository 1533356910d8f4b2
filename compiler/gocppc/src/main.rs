//! gocpp - translate a Go source file into C++

use std::path::Path;
use std::process::ExitCode;

use gocpp_translate::{ScopePolicy, TranslateOptions};
use gocppc::{convert_file, init_tracing, render_error, ConvertOptions};

const DEFAULT_SRC: &str = "hello.go1";
const DEFAULT_DST: &str = "out.cpp";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut options = ConvertOptions::default();
    let mut paths = Vec::new();
    for arg in &args {
        if arg == "-h" || arg == "--help" {
            print_usage();
            return ExitCode::SUCCESS;
        } else if arg == "--parallel" {
            options = options.with_parallel(true);
        } else if let Some(policy) = arg.strip_prefix("--scope=") {
            match policy.parse::<ScopePolicy>() {
                Ok(policy) => {
                    options = options
                        .with_translate(TranslateOptions::default().with_scope_policy(policy));
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            }
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option `{arg}`");
            print_usage();
            return ExitCode::FAILURE;
        } else {
            paths.push(arg.as_str());
        }
    }

    let (src, dst) = match paths.as_slice() {
        [] => (DEFAULT_SRC, DEFAULT_DST),
        [src] => (*src, DEFAULT_DST),
        [src, dst] => (*src, *dst),
        _ => {
            eprintln!("error: too many arguments");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match convert_file(Path::new(dst), Path::new(src), &options) {
        Ok(output) => {
            if output.is_degraded() {
                eprintln!("warning: some expressions were replaced with placeholders");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let source = std::fs::read_to_string(src).unwrap_or_default();
            eprintln!("{}", render_error(&e, src, &source));
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("Usage: gocpp [<src> [<dst>]] [options]");
    eprintln!();
    eprintln!("Translates the functions of a Go source file into C++.");
    eprintln!("Defaults: <src> = {DEFAULT_SRC}, <dst> = {DEFAULT_DST}");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scope=<policy>   Scope policy: isolated (default), chained");
    eprintln!("  --parallel         Translate declarations on a worker pool");
    eprintln!("  -h, --help         Show this message");
}
