use clap::Parser;
use coursework::cli::log_level;
use coursework::{
    extract_submissions, BarProgress, CourseworkError, ExtractCli, OutputFormatter,
    UserFriendlyError,
};
use std::process;

fn main() {
    let cli = ExtractCli::parse();
    let formatter = OutputFormatter::new(cli.verbose);

    if let Err(e) = init_tracing(cli.verbose) {
        formatter.error(&format!("{:#}", e), None);
        process::exit(1);
    }

    let exit_code = match run(&cli, &formatter) {
        Ok(()) => 0,
        Err(e) => {
            let error = e.downcast_ref::<CourseworkError>();
            let suggestion = error.and_then(|error| error.suggestion());
            formatter.error(&format!("{:#}", e), suggestion.as_deref());

            error.map_or(1, |error| error.exit_code())
        }
    };

    process::exit(exit_code);
}

fn run(cli: &ExtractCli, formatter: &OutputFormatter) -> anyhow::Result<()> {
    let config = cli.to_config();
    let progress = BarProgress::new(config.show_progress);

    let outcome = extract_submissions(&config, &progress)?;

    formatter.print_extraction_summary(&outcome.summary, outcome.late_file.as_deref());
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
