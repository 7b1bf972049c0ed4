use clap::Parser;

use elm_enums::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()?;
    let _args = Cli::parse();

    std::process::exit(elm_enums::run());
}
