use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use backlog_triage::api::{router, AppState};
use backlog_triage::config::AppConfig;
use backlog_triage::engine::{DecisionEngine, EngineInputs, Verdict};
use backlog_triage::error::AppError;
use backlog_triage::telemetry;
use clap::{Args, Parser, Subcommand};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Backlog Triage",
    about = "Score whether a game in progress is worth finishing",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a single playthrough from the command line
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Hours already played
    #[arg(long)]
    hours_played: f64,
    /// Estimated hours left to finish
    #[arg(long)]
    hours_remaining: f64,
    /// Enjoyment rating, 1-10
    #[arg(long)]
    enjoyment: u8,
    /// Backlog pressure rating, 1-10
    #[arg(long)]
    backlog_pressure: u8,
    /// Treat the playthrough as a completionist run
    #[arg(long)]
    completionist: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Evaluate(args) => run_evaluate(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(DecisionEngine::new(config.engine.clone()));
    let app = router(engine)
        .layer(Extension(state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "backlog triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = DecisionEngine::new(config.engine);

    let inputs = EngineInputs {
        hours_played: args.hours_played,
        hours_remaining: args.hours_remaining,
        enjoyment: args.enjoyment,
        backlog_pressure: args.backlog_pressure,
        completionist: args.completionist,
    };

    let verdict = engine.evaluate(&inputs)?;
    render_verdict(&inputs, &verdict);

    Ok(())
}

fn render_verdict(inputs: &EngineInputs, verdict: &Verdict) {
    println!("Backlog triage verdict");
    println!(
        "Playthrough: {:.1}h played, {:.1}h remaining, enjoyment {}/10, backlog {}/10{}",
        inputs.hours_played,
        inputs.hours_remaining,
        inputs.enjoyment,
        inputs.backlog_pressure,
        if inputs.completionist {
            ", completionist run"
        } else {
            ""
        }
    );

    println!("\nRecommendation: {}", verdict.recommendation.label());
    println!("Score: {}/100", verdict.score);
    println!("{}", verdict.explanation);

    println!("\nScore breakdown");
    for item in &verdict.breakdown {
        println!("- {}: {:+} ({})", item.label, item.value, item.calculation);
    }
}
