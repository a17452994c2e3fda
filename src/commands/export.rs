use anyhow::Result;
use tracing::info;

use crate::cli::{Cli, ExportArgs};
use crate::io::sink::DirectorySink;

pub fn run(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let session = super::open_session(cli, &args.city)?;
    let mut sink = DirectorySink::new(&args.out).with_force(args.force);

    match session.export(&mut sink)? {
        Some(filename) => {
            info!(city = %args.city, file = %filename, "export written");
            println!("Exported {} -> {}", args.city, sink.path_for(&filename).display());
        }
        None => println!("No districts to export for {}", args.city),
    }
    Ok(())
}
