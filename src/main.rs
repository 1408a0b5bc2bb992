// src/main.rs

use dsep::{cli, logging, run};

fn main() {
    match run_main() {
        Ok(0) => {}
        Ok(failed) => {
            eprintln!("dsep: {failed} query(s) failed");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("dsep error: {err:?}");
            std::process::exit(1);
        }
    }
}

fn run_main() -> anyhow::Result<usize> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    Ok(run(args)?)
}
