use anyhow::Result;
use compiler_oxygen::driver::driver_main;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    driver_main()
}
