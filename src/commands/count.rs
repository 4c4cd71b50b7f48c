use crate::tally;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Count the distinct pixel colors in an image")]
pub struct CountArgs {
    /// Image file to inspect
    #[arg(value_name = "IMAGE_PATH")]
    pub image_path: PathBuf,
}

pub fn run(args: CountArgs) -> bool {
    match tally::count_distinct_colors(&args.image_path) {
        Ok(count) => {
            println!("{}", count);
            true
        }
        Err(err) => {
            eprintln!("[count] ERROR: {:#}", err);
            false
        }
    }
}
