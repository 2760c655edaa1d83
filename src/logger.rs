use simplelog::{Config, LevelFilter, SimpleLogger, TestLogger};

use crate::errors::Result;

// installs a process-wide logger. fails if one is already installed.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    SimpleLogger::init(level, Config::default())?;
    Ok(())
}

// captured by the test harness. safe to call from every test.
pub fn init_test_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
