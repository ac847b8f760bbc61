use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod dispatch;
mod error;
mod parse;
mod repo;
mod schema;
mod transport;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "spell-mods")]
#[command(about = "Spell record create/edit service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer create/edit requests until a stop request arrives.
    Serve {
        #[arg(long, env = "SPELL_MODS_LISTEN", default_value = "127.0.0.1:5554")]
        listen: String,

        /// Read requests from stdin and write replies to stdout instead of TCP.
        #[arg(long)]
        stdio: bool,
    },
    /// Run a single request file through the dispatcher.
    Apply {
        #[arg(long)]
        request: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "spell_mods=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut dispatcher = dispatch::Dispatcher::new(schema::SPELL_FIELDS);

    match cli.cmd {
        Commands::Serve { listen, stdio } => {
            if stdio {
                let mut transport = transport::LineTransport::new(io::stdin().lock(), io::stdout());
                let end = transport::serve(&mut dispatcher, &mut transport)
                    .context("serve over stdio")?;
                tracing::info!(?end, "stdio session finished");
            } else {
                transport::serve_tcp(listen.as_str(), &mut dispatcher)
                    .with_context(|| format!("serve on {}", listen))?;
            }
        }
        Commands::Apply { request, out } => {
            // 1) Decode request file.
            let bytes =
                std::fs::read(&request).with_context(|| format!("read request file {}", request))?;
            let req = transport::decode_request(&bytes)
                .with_context(|| format!("decode request file {}", request))?;

            // 2) Dispatch.
            let outcome = dispatcher.dispatch(req);
            outcome.trace();

            // 3) Encode and write the reply.
            let payload = transport::encode_reply(&outcome)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &payload)
                        .with_context(|| format!("write reply {}", path))?;
                    eprintln!("Wrote {}", path);
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(&payload)?;
                    stdout.write_all(b"\n")?;
                }
            }
        }
    }

    Ok(())
}
