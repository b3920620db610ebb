use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

mod datastore;

use datastore::{DataStore, DataStoreError};

/// `carwire-store` indexes a directory of CAR files and serves their blocks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the directory containing the CAR files
    #[arg(short, long)]
    datastore: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the roots of every CAR file
    Roots,
    /// List the blocks of every CAR file
    ///
    /// Columns: CID, frame offset, payload offset, payload length
    Ls,
    /// Write the payload of a block to stdout
    Get {
        /// CID of the block, in its string form
        cid: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging();

    info!("Datastore path: {:?}", args.datastore);
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "carwire-store failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), DataStoreError> {
    let mut store = DataStore::new();
    store.scan_directory(&args.datastore).await?;

    let mut stdout = std::io::stdout().lock();
    match args.command {
        Command::Roots => {
            for (path, roots) in store.roots() {
                for root in roots {
                    writeln!(stdout, "{}\t{}", path.display(), root)?;
                }
            }
        }
        Command::Ls => {
            for listed in store.list().await? {
                let index = listed.index;
                writeln!(
                    stdout,
                    "{}\t{}\t{}\t{}",
                    index.cid, index.frame_offset, index.payload_offset, index.payload_length
                )?;
            }
        }
        Command::Get { cid } => {
            let data = store.get_str(&cid).await?;
            stdout.write_all(&data)?;
        }
    }
    stdout.flush()?;
    store.shutdown().await;
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::FmtSubscriber;

    const DEFAULT_LOGGING: &str = "carwire_store=info,warn";

    let rust_log = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
        .unwrap_or_else(|| DEFAULT_LOGGING.to_owned());

    // Logs go to stderr, stdout carries the command output
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(rust_log)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("tracing setup failed: {err}");
    }
}
