use anyhow::Result;

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let registry = super::registry(cli)?;
    let width = registry.cities().iter().map(|city| city.id.len()).max().unwrap_or(0);
    for city in registry.sorted() {
        println!("{:<width$}  {}", city.id, city.name);
    }
    Ok(())
}
