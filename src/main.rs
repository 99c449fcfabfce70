//! CLI entry point for the `lualit` tool.
//!
//! Evaluates one literal expression, given as arguments or on stdin, and
//! prints its value in Lua notation.

use std::io::{self, Read, Write};
use std::process::ExitCode;

fn read_source() -> io::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut source = String::new();
    io::stdin().lock().read_to_string(&mut source)?;
    Ok(source)
}

fn main() -> ExitCode {
    let source = match read_source() {
        Ok(source) => source,
        Err(err) => {
            let _ = writeln!(io::stderr().lock(), "lualit: failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };
    match lualit::evaluate(&source) {
        Ok(value) => {
            let _ = writeln!(io::stdout().lock(), "{value}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = writeln!(io::stderr().lock(), "lualit: {err}");
            ExitCode::FAILURE
        }
    }
}
