use clap::Parser;
use coursework::cli::log_level;
use coursework::{write_student_lists, CourseworkError, ListsCli, OutputFormatter, UserFriendlyError};
use std::process;

fn main() {
    let cli = ListsCli::parse();
    let formatter = OutputFormatter::new(cli.verbose);

    if let Err(e) = init_tracing(cli.verbose) {
        formatter.error(&format!("{:#}", e), None);
        process::exit(1);
    }

    if let Err(e) = run(&cli) {
        let error = e.downcast_ref::<CourseworkError>();
        let suggestion = error.and_then(|error| error.suggestion());
        formatter.error(&format!("{:#}", e), suggestion.as_deref());

        process::exit(error.map_or(1, |error| error.exit_code()));
    }
}

fn run(cli: &ListsCli) -> anyhow::Result<()> {
    let config = cli.to_config();
    let students = write_student_lists(&config)?;

    if cli.verbose > 0 {
        println!(
            "Listed {} students in {} and {}",
            students,
            config.names_path.display(),
            config.usernames_path.display()
        );
    }
    Ok(())
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(log_level(verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
