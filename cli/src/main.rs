//! Console tool that resolves freedesktop icon names to icon file paths.
use anyhow::{bail, Context};
use clap::Parser;
use iconlookup::{
    lookup::IconLookup,
    lookup_error::LookupError,
    resolver::FreedesktopResolver,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The icon name to resolve
    pub icon_name: String,

    /// Preferred icon size in pixels
    #[arg(short, long, default_value_t = 128)]
    pub size: u16,

    /// Print the result as a JSON record
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct Resolved<'n> {
    name: &'n str,
    path: String,
    length: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let service = IconLookup::new(FreedesktopResolver::with_size(args.size));

    match service.lookup(&args.icon_name) {
        Ok(buffer) => {
            // Paths are raw bytes; anything non-UTF-8 is printed lossily.
            let path = String::from_utf8_lossy(buffer.as_bytes()).into_owned();

            if args.json {
                let resolved = Resolved {
                    name: &args.icon_name,
                    path,
                    length: buffer.len(),
                };

                let line = serde_json::to_string(&resolved)
                    .context("could not encode the result as JSON")?;
                println!("{}", line);
            } else {
                println!("{}", path);
            }

            Ok(())
        }
        Err(LookupError::NotFound(name)) => bail!("no icon found for '{}'", name),
        Err(err) => bail!(err),
    }
}
