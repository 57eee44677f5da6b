use std::env;
use std::process::exit;

use rangevers::{Range, Version};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (Some(range_arg), Some(version_arg)) = (args.get(1), args.get(2)) else {
        eprintln!("usage: range-check RANGE VERSION");
        exit(2);
    };

    let range = Range::parse(range_arg);
    if !range.ok() {
        eprintln!("error: '{range_arg}' is not a valid range");
        exit(3);
    }

    let version = Version::parse(version_arg);
    if !version.ok() {
        eprintln!("error: '{version_arg}' is not a valid version");
        exit(4);
    }

    // Non-satisfying versions exit 1.
    exit(if range.satisfies(&version) { 0 } else { 1 });
}
