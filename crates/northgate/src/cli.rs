use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "northgate", version, about = "Validate agent actions against the rule catalog")]
pub struct Cli {
    /// Action to validate (e.g. "fetch repo")
    #[arg(short, long, required_unless_present = "stop")]
    pub action: Option<String>,

    /// Explicit consent for irreversible actions (rule 5)
    #[arg(long)]
    pub consent: bool,

    /// Mark the action's claims as unverified (rule 3)
    #[arg(long)]
    pub unverified: bool,

    /// Estimated truth score of the action's claims, in [0, 1] (rule 2)
    #[arg(long, default_value_t = 1.0)]
    pub truth_score: f64,

    /// Emergency stop: halt the gate and terminate (rule 9)
    #[arg(long)]
    pub stop: bool,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Export the session's audit trail as JSONL (overrides config file setting)
    #[arg(long)]
    pub audit_export: Option<PathBuf>,
}
