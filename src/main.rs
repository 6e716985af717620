use clap::Parser;
use docgrid::{decode_document, FetchConfig, DEFAULT_DOC_URL};

#[derive(Parser)]
#[command(name = "docgrid")]
#[command(about = "Decode a coordinate-grid message from a published document")]
#[command(version)]
struct Cli {
    /// URL of the published document (defaults to the embedded document)
    url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 30_000)]
    timeout_ms: u64,

    /// Override the User-Agent header
    #[arg(long)]
    user_agent: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = FetchConfig {
        timeout_ms: cli.timeout_ms,
        ..Default::default()
    };
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }

    let url = cli.url.as_deref().unwrap_or(DEFAULT_DOC_URL);

    match decode_document(url, config) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error decoding message: {}", e);
            std::process::exit(1);
        }
    }
}
