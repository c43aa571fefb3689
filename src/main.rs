mod app;
mod cli;
mod fs_walk;
mod output;
mod pad;

use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = match cli::parse_args(args) {
        Ok(cli::Invocation::Run(cfg)) => cfg,
        Ok(cli::Invocation::Help) => {
            print!("{}", cli::usage());
            return;
        }
        Err(err) => {
            eprintln!("instaborder: error: {err}");
            eprint!("{}", cli::usage());
            process::exit(2);
        }
    };

    if let Err(err) = app::run(&cfg) {
        eprintln!("instaborder: {err:#}");
        process::exit(1);
    }
}
