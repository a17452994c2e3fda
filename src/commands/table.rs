use anyhow::Result;

use crate::cli::{Cli, TableArgs};

pub fn run(cli: &Cli, args: &TableArgs) -> Result<()> {
    let session = super::open_session(cli, &args.city)?;
    let table = session.table().unwrap_or_default();
    print!("{}", table.render_text());
    Ok(())
}
