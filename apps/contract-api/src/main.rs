//! Contract Analyzer Server
//!
//! Accepts contract uploads (PDF/DOCX/TXT), scores each clause for risk,
//! and serves the rendered PDF report. Provides REST API endpoints for:
//!
//! - Contract analysis (`POST /analyze`)
//! - Report download (`GET /download/:filename`)
//! - Health check
//!
//! ## Architecture
//!
//! The analysis pipeline and its collaborators (text extraction, language
//! detection, entity recognition, report rendering) are built once at
//! startup and shared by every request through [`AppState`].

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use analysis_engine::{ContractAnalyzer, PatternEntityRecognizer, WhatlangDetector};
use anyhow::anyhow;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use report_pdf::PdfReportRenderer;
use text_extract::FileTextExtractor;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod storage;

use api::{handle_analyze, handle_download, handle_health};

/// Command-line arguments for the contract analyzer server
#[derive(Parser, Debug)]
#[command(name = "contract-api")]
#[command(about = "Contract risk analysis server with PDF reports")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CONTRACT_API_PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "CONTRACT_API_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Directory for uploaded contracts
    #[arg(long, env = "CONTRACT_API_UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Directory for generated reports
    #[arg(long, env = "CONTRACT_API_REPORT_DIR", default_value = "reports")]
    report_dir: PathBuf,

    /// Maximum upload size in megabytes
    #[arg(long, default_value = "20")]
    max_upload_mb: usize,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analysis pipeline with its collaborators
    pub analyzer: ContractAnalyzer,
    /// Where uploads are written before analysis
    pub upload_dir: PathBuf,
    /// Where the renderer writes reports; downloads are served from here
    pub report_dir: PathBuf,
    /// Request body limit for uploads
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Wire the default collaborators around the given directories.
    pub fn new(upload_dir: PathBuf, report_dir: PathBuf, max_upload_bytes: usize) -> Self {
        let analyzer = ContractAnalyzer::new(
            Arc::new(FileTextExtractor::new()),
            Arc::new(WhatlangDetector::new()),
            Arc::new(PatternEntityRecognizer::new()),
            Arc::new(PdfReportRenderer::new(report_dir.clone())),
        );

        Self {
            analyzer,
            upload_dir,
            report_dir,
            max_upload_bytes,
        }
    }
}

/// Build the router without rate limiting
pub fn build_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/analyze", post(handle_analyze))
        .route("/download/:filename", get(handle_download))
        // Apply middleware
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `--max-upload-mb` in bytes
fn upload_limit_bytes(max_upload_mb: usize) -> anyhow::Result<usize> {
    max_upload_mb
        .checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow!("Upload limit too large: {} MB", max_upload_mb))
}

/// Burst allowance: twice the per-second rate
fn burst_size(rate_limit: u32) -> u32 {
    rate_limit.saturating_mul(2)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting contract analyzer on {}:{}", args.host, args.port);

    tokio::fs::create_dir_all(&args.upload_dir).await?;
    tokio::fs::create_dir_all(&args.report_dir).await?;

    let max_upload_bytes = upload_limit_bytes(args.max_upload_mb)?;

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(burst_size(args.rate_limit))
            .finish()
            .ok_or_else(|| anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    // Create shared state
    let state = AppState::new(
        args.upload_dir.clone(),
        args.report_dir.clone(),
        max_upload_bytes,
    );

    // Build router
    let app = build_router(state).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Uploads: {}", args.upload_dir.display());
    info!("Reports: {}", args.report_dir.display());
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
