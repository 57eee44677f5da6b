use std::env;
use std::process::exit;

use rangevers::Version;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (Some(v1_arg), Some(v2_arg)) = (args.get(1), args.get(2)) else {
        eprintln!("usage: semver-compare V1 V2");
        exit(2);
    };

    let v1 = Version::parse(v1_arg);
    let v2 = Version::parse(v2_arg);

    if !v1.ok() || !v2.ok() {
        eprintln!("error: one or both arguments are not valid versions");
        exit(3);
    }

    // Exit code is the sign of compare(): 1 if v1 > v2, 0 if equal, 255 if v1 < v2
    // (the platform truncates a negative exit status to an unsigned byte).
    exit(v1.compare(&v2) as i32);
}
