//! CP/M-style diagnostic runner.
//!
//! Loads a flat 8080 program image at `0x0100`, installs the BDOS console
//! trampoline and steps the CPU until it jumps back to `0x0000`, the
//! conventional exit. `--debug` traces every instruction.

use rusty8080_cpu::{bdos, trace, Cpu, Program, MEMORY_SIZE, RESET_PC};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some((debug, path)) = parse_args(env::args().skip(1)) else {
        eprintln!("Usage: rusty8080 [--debug|-d] <rom-path>");
        return ExitCode::FAILURE;
    };

    let program = match Program::load(&path) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("rusty8080: {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&program, debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rusty8080: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<(bool, String)> {
    let first = args.next()?;
    let (debug, path) = if first == "--debug" || first == "-d" {
        (true, args.next()?)
    } else {
        (false, first)
    };
    if args.next().is_some() {
        return None;
    }
    Some((debug, path))
}

fn run(program: &Program, debug: bool) -> io::Result<()> {
    let mut memory = Box::new([0u8; MEMORY_SIZE]);
    program.load_into(&mut memory);
    bdos::install_trampoline(&mut memory);
    let mut cpu = Cpu::new(memory);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if debug {
        write!(out, "{}", trace::dump_memory(&cpu, RESET_PC, program.size()))?;
    }
    while cpu.pc != 0x0000 {
        if debug {
            writeln!(out, "{}", trace::create_trace_entry(&cpu).format())?;
        }
        cpu.step();
        bdos::service(&cpu, &mut out)?;
        if debug {
            writeln!(out, "{}", trace::dump_registers(&cpu))?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| (*s).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_plain_path() {
        assert_eq!(
            parse_args(args(&["diag.com"])),
            Some((false, "diag.com".to_string()))
        );
    }

    #[test]
    fn test_parse_debug_flags() {
        assert_eq!(
            parse_args(args(&["--debug", "diag.com"])),
            Some((true, "diag.com".to_string()))
        );
        assert_eq!(
            parse_args(args(&["-d", "diag.com"])),
            Some((true, "diag.com".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_bad_usage() {
        assert_eq!(parse_args(args(&[])), None);
        assert_eq!(parse_args(args(&["--debug"])), None);
        assert_eq!(parse_args(args(&["a", "b"])), None);
        assert_eq!(parse_args(args(&["--debug", "a", "b"])), None);
    }
}
