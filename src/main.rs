mod commands;
mod failure;
mod index;
mod media;

use commands::Command;
use failure::Failure;
use structopt::StructOpt;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = commands::Main::from_args().execute();

    if let Err(e) = &result {
        if let Some(failure) = e.downcast_ref::<Failure>() {
            if let Some(message) = failure.message() {
                println!("{}", message);
            }

            std::process::exit(1);
        }
    }

    result
}
