mod commands;
mod tally;

use clap::Parser;
use env_logger::Env;

#[derive(Parser)]
#[command(name = "colorcount")]
#[command(about = "Count the distinct pixel colors in an image")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: commands::count::CountArgs,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = commands::count::run(cli.args);

    std::process::exit(if result { 0 } else { 1 });
}
