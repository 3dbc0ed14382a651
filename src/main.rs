// src/main.rs

use milestones::{RunOutcome, cli, logging, run};

fn main() {
    match run_main() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("milestones error: {err:?}");
            std::process::exit(1);
        }
    }
}

fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;

    let code = match run(&args)? {
        RunOutcome::Incomplete(_) if args.strict_exit => 2,
        _ => 0,
    };
    Ok(code)
}
