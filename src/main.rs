use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moodcheck::capture::{CameraAvailability, SimulatedCameraConfig};
use moodcheck::report::{render_assessment, status_line};
use moodcheck::{
    assess, create_router, AppState, CaptureProviderFactory, CaptureSessionController,
    CaptureSource, Config, Phase, RngSource, SessionConfig,
};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moodcheck")]
#[command(about = "Camera capture and synthetic mood assessment demo")]
struct Args {
    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the session API for a browser front end
    Serve {
        /// Config file (extension optional)
        #[arg(short, long, default_value = "config/moodcheck")]
        config: String,
    },

    /// Run one capture → record → analyze session in the terminal
    Demo {
        /// Seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stop recording after this many seconds instead of the full window
        #[arg(long)]
        stop_after: Option<u64>,

        /// Simulate a refused camera permission
        #[arg(long)]
        deny_camera: bool,
    },

    /// Print a single assessment without a session
    Assess {
        /// Seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodcheck=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    match args.command {
        Mode::Serve { config } => serve(&config).await,
        Mode::Demo {
            seed,
            stop_after,
            deny_camera,
        } => demo(seed, stop_after, deny_camera).await,
        Mode::Assess { seed, json } => {
            let assessment = assess(&mut RngSource::from_seed_option(seed));
            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print!("{}", render_assessment(&assessment));
            }
            Ok(())
        }
    }
}

async fn serve(path: &str) -> Result<()> {
    let cfg = Config::load(path).with_context(|| format!("Failed to load config from {path}"))?;

    info!("Moodcheck v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);

    let session_config = cfg.session.to_session_config()?;
    let provider = CaptureProviderFactory::create(CaptureSource::Simulated(cfg.capture));
    let controller = CaptureSessionController::new(session_config, provider);
    let app = create_router(AppState::new(controller));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}

async fn demo(seed: Option<u64>, stop_after: Option<u64>, deny_camera: bool) -> Result<()> {
    let camera = SimulatedCameraConfig {
        availability: if deny_camera {
            CameraAvailability::PermissionDenied
        } else {
            CameraAvailability::Available
        },
        ..Default::default()
    };
    let provider = CaptureProviderFactory::create(CaptureSource::Simulated(camera));
    let controller = CaptureSessionController::new(
        SessionConfig {
            seed,
            ..Default::default()
        },
        provider,
    );

    let mut updates = controller.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let line = status_line(&updates.borrow_and_update());
            println!("[moodcheck] {line}");
        }
    });

    if let Err(e) = controller.start_capture().await {
        warn!("{}", e);
        println!("Unable to access camera. Please ensure you have granted camera permissions.");
        printer.abort();
        return Ok(());
    }

    controller.start_recording().await;

    if let Some(secs) = stop_after {
        tokio::time::sleep(Duration::from_secs(secs)).await;
        controller.stop_recording().await;
    }

    let mut results = controller.subscribe();
    let snapshot = results
        .wait_for(|s| s.phase == Phase::ResultReady)
        .await
        .context("Session controller went away before the analysis finished")?
        .clone();

    if let Some(assessment) = &snapshot.result {
        println!();
        print!("{}", render_assessment(assessment));
    }

    controller.stop_capture().await;
    printer.abort();

    Ok(())
}
