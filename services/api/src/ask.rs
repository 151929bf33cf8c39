use campus_bot::chat::{respond_with_records, ChatService};
use campus_bot::config::AppConfig;
use campus_bot::dataset::PlacementDataset;
use campus_bot::error::AppError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// The question to ask, e.g. "highest package in 2025"
    pub(crate) query: String,
    /// Placement data file. Defaults to the configured path.
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Treat the data file as a drive-list CSV export instead of JSON
    #[arg(long)]
    pub(crate) csv: bool,
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = args.data.unwrap_or(config.dataset.path);

    let reply = if args.csv {
        let dataset = PlacementDataset::from_csv_path(path)?;
        respond_with_records(&args.query, dataset.records())
    } else {
        ChatService::new(path).respond(&args.query)
    };

    println!("{reply}");
    Ok(())
}
