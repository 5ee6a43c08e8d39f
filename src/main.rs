//! # Fiatsend CLI
//!
//! Command line entry point: quotes, credential classification and
//! portfolio valuation, printed as JSON on stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fiatsend_core::application::services::{
    BestReturnStrategy, CredentialBoard, QuoteAggregationEngine, QuoteSession, RequestStatus,
};
use fiatsend_core::config::{AppConfig, LogConfig, LogFormat};
use fiatsend_core::domain::entities::{ClassifiedCredentials, RawCredential, TokenBalance};
use fiatsend_core::domain::services::value_portfolio;
use fiatsend_core::domain::value_objects::{Amount, CurrencyPair};
use fiatsend_core::infrastructure::credentials::StructuralVerifier;
use fiatsend_core::infrastructure::offerings::{
    HttpOfferingRepository, InMemoryOfferingRepository, OfferingRepository, OfferingsEnvelope,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fiatsend", version, about = "Fiatsend wallet core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the offerings for a pair and amount.
    Quote {
        /// Currency to pay in.
        #[arg(long, default_value = "GHS")]
        from: String,
        /// Currency to receive.
        #[arg(long, default_value = "USDC")]
        to: String,
        /// Amount to pay; empty means zero.
        #[arg(long, default_value = "")]
        amount: String,
        /// Read offerings from this JSON file instead of the configured PFI.
        #[arg(long)]
        offerings: Option<PathBuf>,
    },
    /// Classify a JSON array of credentials.
    Credentials {
        /// JSON file holding the credentials.
        #[arg(long)]
        file: PathBuf,
        /// Additional trusted issuer; repeatable.
        #[arg(long = "trusted-issuer")]
        trusted_issuers: Vec<String>,
    },
    /// Value a JSON array of token balances in USD.
    Portfolio {
        /// JSON file holding the balances.
        #[arg(long)]
        file: PathBuf,
    },
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_quote(
    config: &AppConfig,
    pair: CurrencyPair,
    amount: Amount,
    offerings: Option<PathBuf>,
) -> anyhow::Result<()> {
    let repository: Arc<dyn OfferingRepository> = match offerings {
        Some(path) => {
            let envelope: OfferingsEnvelope = read_json(&path)?;
            Arc::new(InMemoryOfferingRepository::from_offerings(
                envelope.into_offerings(),
            ))
        }
        None => Arc::new(HttpOfferingRepository::new(
            config.offerings.base_url.clone(),
            config.offerings.timeout_ms,
        )?),
    };

    let engine = QuoteAggregationEngine::new(
        repository,
        Arc::new(BestReturnStrategy::new()),
        config.aggregation(),
    )?;
    let session = QuoteSession::new(engine);

    match session.request(pair, amount).await {
        RequestStatus::Published(snapshot) => print_json(snapshot.as_ref()),
        RequestStatus::Superseded => anyhow::bail!("quote request was superseded"),
    }
}

async fn classify_file(
    config: &AppConfig,
    file: &Path,
    extra_issuers: Vec<String>,
) -> anyhow::Result<Arc<ClassifiedCredentials>> {
    let raw: Vec<RawCredential> = read_json(file)?;
    let issuers = config
        .credentials
        .trusted_issuers
        .iter()
        .cloned()
        .chain(extra_issuers);
    let verifier = StructuralVerifier::new().with_trusted_issuers(issuers);

    let board = CredentialBoard::new(Arc::new(verifier));
    match board.refresh(raw).await {
        RequestStatus::Published(classified) => Ok(classified),
        RequestStatus::Superseded => anyhow::bail!("credential refresh was superseded"),
    }
}

async fn run_credentials(
    config: &AppConfig,
    file: &Path,
    extra_issuers: Vec<String>,
) -> anyhow::Result<()> {
    let classified = classify_file(config, file, extra_issuers).await?;
    print_json(classified.as_ref())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.log);

    info!("fiatsend v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Quote {
            from,
            to,
            amount,
            offerings,
        } => {
            let pair = CurrencyPair::parse(&from, &to)?;
            let amount: Amount = amount.parse()?;
            run_quote(&config, pair, amount, offerings).await
        }
        Command::Credentials {
            file,
            trusted_issuers,
        } => run_credentials(&config, &file, trusted_issuers).await,
        Command::Portfolio { file } => {
            let balances: Vec<TokenBalance> = read_json(&file)?;
            print_json(&value_portfolio(&balances)?)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_temp(name: &str, value: &serde_json::Value) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[tokio::test]
    async fn classify_file_returns_published_batch() {
        let path = write_temp(
            "fiatsend-credentials",
            &json!([
                {
                    "type": ["VerifiableCredential", "KnownCustomerCredential"],
                    "issuer": "did:dht:issuer",
                    "issuanceDate": "2024-05-21T09:30:00Z",
                    "credentialSubject": { "name": "Ama Owusu", "countryOfResidence": "GH" }
                },
                "not a credential"
            ]),
        );

        let classified = classify_file(&AppConfig::default(), &path, vec!["did:dht:issuer".into()])
            .await
            .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(classified.len(), 2);
        assert!(classified.all()[0].is_verified());
        assert!(!classified.all()[1].is_verified());
    }

    #[tokio::test]
    async fn classify_file_reports_missing_file() {
        let missing = std::env::temp_dir().join("fiatsend-no-such-file.json");
        let err = classify_file(&AppConfig::default(), &missing, Vec::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
