use std::{io, path::PathBuf};

use clap::Parser;
use gamewith_weapons::{report::DEFAULT_PREVIEW, run};
use log::info;

#[derive(Parser)]
struct Opts {
    /// Text copied from the gamewith weapon list page.
    #[arg(default_value = "documents/星5武器_gamewith_work.txt")]
    input: PathBuf,
    #[arg(default_value = "documents/星5武器名一覧_gamewith.txt")]
    output: PathBuf,
    /// Number of names shown on the console.
    #[arg(long, default_value_t = DEFAULT_PREVIEW)]
    preview: usize,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let names = run(&opts.input, &opts.output, opts.preview, &mut io::stdout().lock())?;
    info!("Done ({} names).", names.len());
    Ok(())
}
