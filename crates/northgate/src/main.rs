mod cli;
mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use audit_trail::{AuditSink, MemorySink, TrailWriter};
use gate_engine::{ActionContext, GateEngine};

use crate::cli::Cli;

/// Exit status for the emergency-stop path. Distinct from both success and
/// the generic failure code so wrappers can recognise a deliberate halt.
const HALT_EXIT_CODE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Parse CLI args.
    let cli = Cli::parse();

    // 2. Load config, then merge CLI overrides.
    let mut cfg = config::load(&cli.config)?;
    if cli.audit_export.is_some() {
        cfg.audit.export_path = cli.audit_export.clone();
    }

    // 3. Init tracing-subscriber. Diagnostics go to stderr so the decision
    //    output on stdout stays clean.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!(
        config_file = %cli.config.display(),
        "northgate starting"
    );

    // 4. Construct the audit sink and the engine.
    let sink = Arc::new(MemorySink::new());
    let mut engine = GateEngine::new(Arc::clone(&sink) as Arc<dyn AuditSink>);

    // 5. Emergency stop: halt, report, and terminate with the halt status.
    if cli.stop {
        let signal = engine.halt();

        println!("{}", signal.notice);
        print_recent_log(&engine);

        export_trail(cfg.audit.export_path.as_deref(), &sink).await?;
        std::process::exit(HALT_EXIT_CODE);
    }

    // 6. Validate the proposed action. required_unless_present guarantees
    //    the action is set when --stop is absent.
    let action = cli
        .action
        .as_deref()
        .context("--action is required unless --stop is given")?;

    let context = ActionContext::default()
        .with_consent(cli.consent)
        .with_verified(!cli.unverified)
        .with_truth_score(cli.truth_score);

    let decision = engine
        .validate(action, &context)
        .context("validation failed")?;

    // 7. Print the decision. Approval is communicated via printed status,
    //    not the exit code; execution is only simulated here.
    println!(
        "\n=== northgate [{}] ===",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("Status: {}", decision.message);
    if decision.approved {
        println!("Executing safely... (simulation: the action would proceed here.)");
    } else {
        println!("Halted for safety - review logs.");
    }

    print_recent_log(&engine);

    // 8. Optional JSONL export of the session trail.
    export_trail(cfg.audit.export_path.as_deref(), &sink).await?;

    Ok(())
}

fn print_recent_log(engine: &GateEngine) {
    println!("\nRecent Logs:");
    for line in engine.recent_log() {
        println!("  - {line}");
    }
}

/// Write the full session trail to `path` as JSON-lines, if configured.
async fn export_trail(path: Option<&Path>, sink: &Arc<MemorySink>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let mut writer = TrailWriter::new(path)
        .await
        .with_context(|| format!("failed to open audit export file: {}", path.display()))?;
    writer
        .export(&sink.snapshot())
        .await
        .context("failed to export audit trail")?;

    info!(path = %path.display(), entries = sink.len(), "audit trail exported");
    Ok(())
}
