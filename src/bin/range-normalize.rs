use std::env;
use std::process::ExitCode;

use rangevers::Range;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let Some(input) = args.get(1) else {
        eprintln!("usage: range-normalize RANGE");
        return ExitCode::from(2);
    };

    let range = Range::parse(input);
    if !range.ok() {
        eprintln!("error: '{input}' is not a valid range");
        return ExitCode::from(3);
    }

    println!("{range}");

    ExitCode::SUCCESS
}
