use anyhow::Context;
use clap::Parser;
use img_mirror::cli::Args;
use img_mirror::{batch, logger, report};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::set_verbosity(args.quiet, args.verbose);

    let config = args.into_config();
    let stats = batch::run(&config).with_context(|| {
        format!(
            "mirroring {} to {} aborted",
            config.source_dir.display(),
            config.output_dir.display()
        )
    })?;

    report::print_summary(&stats);
    Ok(())
}
