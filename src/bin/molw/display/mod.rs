use std::io::{self, Write};

use anyhow::Error;

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr, "error: {}", err);

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "  caused by: {}", cause);
    }
}
