mod http;
mod output;
mod store;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use advice::{Category, ChatController, ChatView, Rejection, ResponseFormat, SubmitOutcome, WidgetConfig};
use advice::config::DEFAULT_MAX_SIMILAR_CASES;
use clap::{Parser, Subcommand};
use time::{OffsetDateTime, UtcOffset};
use time::macros::format_description;

use crate::http::ReqwestAdviceApi;
use crate::store::{JsonFileStore, default_history_path};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a request is already in flight")]
    Busy,
    #[error("{0}")]
    Advice(String),
    #[error("no history item at index {index} (history has {len})")]
    NoSuchItem { index: usize, len: usize },
    #[error("no data directory on this platform; pass --history-file or set MECHANIC_HISTORY_FILE")]
    NoDataDir,
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mechanic", about = "Ask the mechanic advice service from the terminal")]
struct Cli {
    #[arg(long, env = "MECHANIC_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[arg(long, env = "MECHANIC_HISTORY_FILE")]
    history_file: Option<PathBuf>,

    #[arg(long, env = "MECHANIC_TIMEOUT_SECS", help = "Give up on a request after this many seconds")]
    timeout_secs: Option<u64>,

    #[arg(long, env = "MECHANIC_MAX_CASES", default_value_t = DEFAULT_MAX_SIMILAR_CASES)]
    max_cases: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for advice and record the exchange.
    Ask {
        #[arg(long, short, default_value = "general", value_parser = parse_category)]
        category: Category,

        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// List recent exchanges, newest first.
    History,
    /// Print one stored response in full.
    Show { index: usize },
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{raw}' (expected one of: {})", known.join(", "))
    })
}

/// Local offset, read once before the runtime spawns worker threads;
/// `time` refuses to read it from a multi-threaded process on Unix.
static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

fn now_timestamp() -> String {
    let offset = LOCAL_OFFSET.get().copied().unwrap_or(UtcOffset::UTC);
    format_timestamp(OffsetDateTime::now_utc().to_offset(offset))
}

fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"
    ))
    .unwrap_or_else(|_| at.to_string())
}

fn main() -> Result<(), CliError> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    LOCAL_OFFSET.get_or_init(|| offset);

    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let path = match cli.history_file {
        Some(path) => path,
        None => default_history_path().ok_or(CliError::NoDataDir)?,
    };
    tracing::debug!(path = %path.display(), "using history file");

    let config = WidgetConfig { max_similar_cases: cli.max_cases, format: ResponseFormat::Plain, ..WidgetConfig::default() };
    let mut controller = ChatController::new(JsonFileStore::new(path), now_timestamp);

    match cli.command {
        Command::Ask { category, message } => {
            let api = ReqwestAdviceApi::new(&cli.base_url, cli.timeout_secs.map(Duration::from_secs))?;
            let outcome = controller.submit(&api, &message.join(" "), category).await;
            match outcome {
                SubmitOutcome::Success => {
                    let view = ChatView::render(&controller, &config);
                    print_with(|out| output::write_response(out, &view.response))
                }
                SubmitOutcome::Rejected(Rejection::EmptyMessage) => Err(CliError::EmptyMessage),
                SubmitOutcome::Rejected(Rejection::Busy) => Err(CliError::Busy),
                SubmitOutcome::ServerError(notice) | SubmitOutcome::NetworkError(notice) => {
                    Err(CliError::Advice(notice))
                }
            }
        }
        Command::History => {
            let view = ChatView::render(&controller, &config);
            print_with(|out| output::write_history(out, &view.history))
        }
        Command::Show { index } => {
            let len = controller.history().len();
            if controller.view_item(index).is_none() {
                return Err(CliError::NoSuchItem { index, len });
            }
            let view = ChatView::render(&controller, &config);
            print_with(|out| output::write_response(out, &view.response))
        }
    }
}

fn print_with(f: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    f(&mut out)?;
    out.flush()?;
    Ok(())
}
