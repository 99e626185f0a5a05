use clap::Parser;

mod platform;

fn main() -> anyhow::Result<()> {
    let args = platform::cli::Args::parse();
    platform::run(args)
}
