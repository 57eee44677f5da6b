use std::env;
use std::process::ExitCode;

use rangevers::Range;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let Some(range) = args.get(1) else {
        eprintln!("usage: range-parse RANGE");
        return ExitCode::from(2);
    };

    if !Range::parse(range).ok() {
        eprintln!("error: '{range}' is not a valid range");
        return ExitCode::from(3);
    }

    ExitCode::SUCCESS
}
