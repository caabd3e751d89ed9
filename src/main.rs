// src/main.rs

use jshint_prefs::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("jshint-prefs error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    let mut stdout = std::io::stdout().lock();
    run(args, &mut stdout)
}
