//! Step result lines

/// Print a success line to stdout
pub fn report_success(message: &str) {
    println!("✓ {}", message);
}

/// Print a failure line to stderr
pub fn report_failure(message: &str) {
    eprintln!("✖ {}", message);
}
