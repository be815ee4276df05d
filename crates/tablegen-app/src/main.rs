//! tablegen command-line entry point.
//!
//! Usage:
//!   tablegen-app render <doc.toml> <out.png>
//!   tablegen-app demo <out-dir>
//!
//! `TABLEGEN_FONT_DIR` adds a directory of font files on top of the
//! system fonts.

mod demos;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tablegen::{FontCache, FontProvider, TableDocument};

// ---------------------------------------------------------------------------
// CLI parsing
// ---------------------------------------------------------------------------

const USAGE: &str = concat!(
    "Usage: tablegen-app render <doc.toml> <out.png>\n",
    "       tablegen-app demo <out-dir>"
);

#[derive(Debug, PartialEq)]
enum Command {
    Render { document: PathBuf, output: PathBuf },
    Demo { out_dir: PathBuf },
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut iter = args.into_iter();
    let command = match iter.next().as_deref() {
        Some("render") => {
            let (Some(document), Some(output)) = (iter.next(), iter.next()) else {
                bail!("render needs a document and an output path\n{USAGE}");
            };
            Command::Render {
                document: document.into(),
                output: output.into(),
            }
        },
        Some("demo") => {
            let Some(out_dir) = iter.next() else {
                bail!("demo needs an output directory\n{USAGE}");
            };
            Command::Demo {
                out_dir: out_dir.into(),
            }
        },
        Some(other) => bail!("unknown command: {other}\n{USAGE}"),
        None => bail!("{USAGE}"),
    };
    if let Some(extra) = iter.next() {
        bail!("unexpected argument: {extra}\n{USAGE}");
    }
    Ok(command)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn font_cache() -> FontCache {
    let mut provider = FontProvider::system();
    if let Ok(dir) = std::env::var("TABLEGEN_FONT_DIR") {
        provider.load_fonts_dir(&dir);
    }
    log::info!("{} font faces available", provider.face_count());
    FontCache::new(provider)
}

fn render_document(document: &Path, output: &Path, fonts: &FontCache) -> Result<()> {
    let doc = TableDocument::from_path(document)
        .with_context(|| format!("reading {}", document.display()))?;
    let options = doc.render.clone();
    let table = doc.into_table()?;
    let fb = table.render(fonts, &options)?;
    fb.save_png(output)
        .with_context(|| format!("writing {}", output.display()))?;
    log::info!(
        "wrote {} ({}x{})",
        output.display(),
        fb.width(),
        fb.height()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = parse_args(std::env::args().skip(1))?;
    let fonts = font_cache();
    match command {
        Command::Render { document, output } => render_document(&document, &output, &fonts),
        Command::Demo { out_dir } => demos::write_all(&out_dir, &fonts),
    }
}
