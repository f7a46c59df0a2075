use {
    anyhow::{Context, Result},
    std::io::{self, Write},
    structopt::StructOpt,
    zip_range::{print_ranges, RangesArgs, ZipRange},
};

/// Consolidates US zip code ranges into the fewest disjoint, non-adjacent ranges.
#[derive(Debug, StructOpt)]
struct Opt {
    /// Zip code ranges, or files containing them. Example: [94133,94133]
    /// [94200,94299] [94226,94399], prints [94133,94133] [94200,94399].
    ranges: Vec<String>,

    /// Be verbose (debug messages). You can also set the RUST_LOG env var for
    /// finer control.
    #[structopt(short = "v", long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    if opt.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let ranges = RangesArgs::from(&opt.ranges.iter().map(|r| &**r).collect::<Vec<_>>());
    let consolidated = ZipRange::consolidate(ranges.into_inner());

    let stdout = io::stdout();
    writeln!(stdout.lock(), "{}", print_ranges(&consolidated))
        .context("Failed to write consolidated ranges")?;

    Ok(())
}
