use anyhow::Result;

use crate::cli::Cli;
use crate::commands::{fix, generate};

pub fn run(cli: &Cli) -> Result<()> {
    fix::run(cli)?;
    generate::run(cli)
}
