//! defgen CLI
//!
//! Turns macro definition files into Verilog preprocessor directives.

use defgenc::commands::{report_cli_error, run_generate};
use defgenc::{init_tracing, parse_args, tool_version, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Version) => {
            println!("{}", tool_version());
            return;
        }
        Ok(Command::Generate(options)) => options,
        Err(err) => {
            report_cli_error(&err);
            if err.is_usage() {
                eprintln!("Try `defgen --help` for more information.");
            }
            std::process::exit(2);
        }
    };

    if !run_generate(&options) {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: defgen [OPTION]... [FILE]...");
    println!();
    println!("Evaluate macro definitions and write Verilog `define directives.");
    println!("With no FILE, or when FILE is -, read standard input.");
    println!();
    println!("Options:");
    println!("  -h, --help           Show this help");
    println!("  -v, --version        Show the version");
    println!("  -o, --output FILE    Write to FILE instead of standard output");
    println!("  -u, --undef          Write `undef directives for every macro");
    println!("      --profile        Print evaluation counters to stderr");
    println!();
    println!("Definitions:");
    println!("  /// comment          Attached to the next definition");
    println!("  define NAME = expr   Evaluated and written");
    println!("  hidden NAME = expr   Evaluated, usable by others, not written");
    println!("  verbatim \"text\"      Copied ahead of the directives");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable debug logging (e.g. RUST_LOG=debug)");
}
