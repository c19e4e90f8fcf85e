use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sonnet_search::render::render_results;
use sonnet_search::{loader, HighlightMode, SearchMode, Searcher, VERSION};
use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Full-text search over Shakespeare's sonnets", long_about = None)]
struct Args {
    /// JSON (or .json.gz) file with the documents to index
    #[arg(short, long, env = "SONNETS_PATH", default_value = "data/sonnets.json")]
    path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single query and print the results
    Search {
        query: String,

        #[arg(short, long, default_value = "and")]
        mode: SearchMode,

        #[arg(long, value_enum, default_value_t = Highlight::Default)]
        highlight: Highlight,
    },
    /// Read queries interactively from stdin
    Repl {
        #[arg(short, long, default_value = "and")]
        mode: SearchMode,

        #[arg(long, value_enum, default_value_t = Highlight::Default)]
        highlight: Highlight,
    },
    /// Serve search over HTTP
    Serve {
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Highlight {
    Default,
    Green,
    None,
}

impl From<Highlight> for Option<HighlightMode> {
    fn from(h: Highlight) -> Self {
        match h {
            Highlight::Default => Some(HighlightMode::Default),
            Highlight::Green => Some(HighlightMode::Green),
            Highlight::None => None,
        }
    }
}

fn build_searcher(path: &Path) -> Result<Searcher> {
    let start = Instant::now();
    let docs = loader::load_documents(path)
        .with_context(|| format!("Failed to load documents from {}", path.display()))?;
    let searcher = Searcher::new(docs).context("Failed to build index")?;
    tracing::info!("Ready in {:?}", start.elapsed());
    Ok(searcher)
}

fn run_query(searcher: &Searcher, query: &str, mode: SearchMode, highlight: Option<HighlightMode>) {
    let start = Instant::now();
    let results = searcher.search(query, mode);
    tracing::debug!("Searched {:?} ({}) in {:?}", query, mode, start.elapsed());
    print!("{}", render_results(&results, highlight));
}

const REPL_HELP: &str = "\
Type words to search. Commands:
  :mode and|or                    set how words combine
  :highlight default|green|none   set the highlight style
  :help                           show this help
  :quit                           leave";

fn repl(searcher: &Searcher, mut mode: SearchMode, mut highlight: Option<HighlightMode>) -> Result<()> {
    println!("{} documents indexed. {}", searcher.stats().total_documents, REPL_HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("[{}]> ", mode);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let Some(command) = line.strip_prefix(':') else {
            run_query(searcher, line, mode, highlight);
            continue;
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit") | Some("q"), _) => break,
            (Some("help"), _) => println!("{}", REPL_HELP),
            (Some("mode"), Some(value)) => match value.parse() {
                Ok(m) => mode = m,
                Err(e) => println!("{}", e),
            },
            (Some("highlight"), Some("none")) => highlight = None,
            (Some("highlight"), Some(value)) => match value.parse() {
                Ok(h) => highlight = Some(h),
                Err(e) => println!("{}", e),
            },
            _ => println!("Unknown command ':{}'. Type :help for help.", command),
        }
    }

    Ok(())
}

async fn serve(searcher: Searcher, addr: SocketAddr) -> Result<()> {
    let app = sonnet_search::api::create_router(Arc::new(searcher))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!("sonnet-search {}", VERSION);
    let searcher = build_searcher(&args.path)?;

    match args.command {
        Command::Search {
            query,
            mode,
            highlight,
        } => run_query(&searcher, &query, mode, highlight.into()),
        Command::Repl { mode, highlight } => repl(&searcher, mode, highlight.into())?,
        Command::Serve { addr } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve(searcher, addr))?;
        }
    }

    Ok(())
}
