//! Basic logger usage example
//!
//! Demonstrates the global logging macros, the threshold, and the two
//! formatting toggles.
//!
//! Run with: cargo run --example basic_usage

use termlog::{debug, error, errorf, info, infof, warn, warnf, LogLevel, Result};

fn main() -> Result<()> {
    println!("=== Termlog - Basic Usage Example ===\n");

    println!("1. Logging at different levels:");
    debug!("this is a debug message")?;
    info!("this is an info message")?;
    warn!("this is a warning message")?;
    error!("this is an error message")?;

    println!("\n2. Space-joined values and format templates:");
    info!("joined", "values:", 1, 2.5, true)?;
    infof!("listening on port {}", 8080)?;
    warnf!("retry {} of {}", 3, 5)?;

    println!("\n3. Raising the threshold to WARNING:");
    termlog::set_level(LogLevel::Warn);
    debug!("debug message (hidden)")?;
    info!("info message (hidden)")?;
    warn!("warning message (visible)")?;
    errorf!("error {} (visible, on stderr)", 500)?;

    println!("\n4. Plain output (no color, no timestamp):");
    termlog::set_color_disabled(true);
    termlog::set_timestamp_disabled(true);
    warn!("plain warning line")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
