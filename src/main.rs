use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;

use phishguard::server::{self, AppState};
use phishguard::{ArtifactStore, Classifier};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the artifact files
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,

    /// Explicit path to the model artifact (use together with --vectorizer)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Explicit path to the vectorizer artifact (use together with --model)
    #[arg(long)]
    vectorizer: Option<PathBuf>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting phishguard ===");

    // A missing or corrupt artifact is a deployment error: fail the start,
    // never serve degraded.
    let classifier = match (&args.model, &args.vectorizer) {
        (Some(model), Some(vectorizer)) => Classifier::builder()
            .with_artifact_paths(model, vectorizer)?
            .build()?,
        (None, None) => {
            let store = match &args.artifacts_dir {
                Some(dir) => ArtifactStore::new(dir),
                None => ArtifactStore::new_default(),
            };
            store.verify().context("artifact verification failed")?;
            Classifier::builder().with_store(&store)?.build()?
        }
        _ => anyhow::bail!("--model and --vectorizer must be provided together"),
    };

    let classifier_info = classifier.info();
    info!(
        "Classifier ready: {} classes, {} features",
        classifier_info.classes.len(),
        classifier_info.num_features
    );

    let app = server::router(AppState::new(Arc::new(classifier)));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
