//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::memory_store::InMemoryStore;
use crate::adapters::seed_adapter::generate_trades;
use crate::adapters::web::{build_router, AppState};
use crate::domain::error::BlotterError;
use crate::ports::config_port::ConfigPort;

const DEFAULT_LISTEN: &str = "127.0.0.1:8000";
const DEFAULT_COUNT: i64 = 100;

#[derive(Parser, Debug)]
#[command(name = "blotter", about = "In-memory trade record query service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the store and start the HTTP server
    Serve {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Listen address, overrides [server] listen
        #[arg(long)]
        listen: Option<String>,
        /// Number of trades to seed, overrides [store] count
        #[arg(long)]
        count: Option<usize>,
        /// RNG seed for reproducible stores, overrides [store] seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print seeded trades as JSON and exit
    Dump {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Serve {
            config,
            listen,
            count,
            seed,
        } => run_serve(config.as_ref(), listen, count, seed),
        Command::Dump { count, seed } => run_dump(count, seed),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = BlotterError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn resolve_seed(config: Option<&FileConfigAdapter>, seed_override: Option<u64>) -> u64 {
    if let Some(seed) = seed_override {
        return seed;
    }
    if let Some(config) = config {
        if let Some(value) = config.get_string("store", "seed") {
            if let Ok(seed) = value.parse() {
                return seed;
            }
            eprintln!("warning: ignoring non-numeric [store] seed \"{value}\"");
        }
    }
    rand::random()
}

fn run_serve(
    config_path: Option<&PathBuf>,
    listen_override: Option<String>,
    count_override: Option<usize>,
    seed_override: Option<u64>,
) -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blotter=info")),
        )
        .init();

    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => Some(c),
            Err(code) => return code,
        },
        None => None,
    };

    let listen = listen_override
        .or_else(|| config.as_ref().and_then(|c| c.get_string("server", "listen")))
        .unwrap_or_else(|| DEFAULT_LISTEN.to_string());

    let addr: std::net::SocketAddr = match listen.parse() {
        Ok(a) => a,
        Err(_) => {
            let err = BlotterError::ConfigInvalid {
                section: "server".to_string(),
                key: "listen".to_string(),
                reason: format!("\"{listen}\" is not a socket address"),
            };
            eprintln!("error: {err}");
            return ExitCode::from(&err);
        }
    };

    let count = count_override.unwrap_or_else(|| {
        config
            .as_ref()
            .map(|c| c.get_int("store", "count", DEFAULT_COUNT))
            .unwrap_or(DEFAULT_COUNT)
            .max(0) as usize
    });
    let seed = resolve_seed(config.as_ref(), seed_override);

    let trades = generate_trades(count, seed);
    let store = match InMemoryStore::new(trades) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    };

    tracing::info!(count = store.len(), seed, %addr, "starting trade query server");

    let state = AppState {
        store: Arc::new(store),
    };
    let router = build_router(state);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::from(1);
        }
    };

    runtime.block_on(async {
        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error: failed to bind {addr}: {e}");
                return ExitCode::from(1);
            }
        };
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("error: server terminated: {e}");
            return ExitCode::from(1);
        }
        ExitCode::SUCCESS
    })
}

fn run_dump(count: usize, seed: Option<u64>) -> ExitCode {
    let trades = generate_trades(count, seed.unwrap_or_else(rand::random));
    match serde_json::to_string_pretty(&trades) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
