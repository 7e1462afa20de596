use clap::Parser;
use clinsim_rs::clinic::{Scenario, UrgentCareModel};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "replications",
    about = "Run independent urgent-care replications and summarize across them"
)]
struct Args {
    /// Number of independent replications
    #[arg(long, default_value_t = 10)]
    replications: u64,

    /// Path to a scenario JSON file for the base scenario
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Base seed; replication i runs with seed base + i
    #[arg(long)]
    seed: Option<u64>,

    /// Warm-up period excluded from steady-state estimates (hours)
    #[arg(long)]
    warm_up: Option<f64>,

    /// Write the cross-replication summary as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

/// Cross-replication means of the per-run outputs.
#[derive(Debug, Serialize)]
struct MultiReplicationSummary {
    replications: u64,
    ave_n_arrived: f64,
    ave_n_served: f64,
    ave_time_in_system_hours: f64,
    ave_time_waiting_hours: f64,
    ave_patients_in_system: f64,
    ave_patients_waiting: f64,
    ave_rooms_busy: f64,
    ave_room_utilization: f64,
}

fn mean(obs: &[f64]) -> f64 {
    if obs.is_empty() {
        return 0.0;
    }
    obs.iter().sum::<f64>() / obs.len() as f64
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut base = match &args.scenario {
        Some(path) => {
            let text = fs::read_to_string(path).expect("read scenario file");
            serde_json::from_str::<Scenario>(&text).expect("parse scenario JSON")
        }
        None => Scenario::default(),
    };
    if let Some(v) = args.seed {
        base.seed = v;
    }
    if let Some(v) = args.warm_up {
        base.warm_up_hours = v;
    }

    let mut obs_arrived = Vec::new();
    let mut obs_served = Vec::new();
    let mut obs_time_in_system = Vec::new();
    let mut obs_time_waiting = Vec::new();
    let mut obs_in_system = Vec::new();
    let mut obs_waiting = Vec::new();
    let mut obs_busy = Vec::new();
    let mut obs_util = Vec::new();

    // Replications share nothing: each gets its own calendar, state and
    // random stream, so event order inside each run stays deterministic.
    for i in 0..args.replications {
        let mut scenario = base.clone();
        scenario.seed = base.seed + i;

        let model = match UrgentCareModel::new(scenario.clone()) {
            Ok(model) => model,
            Err(err) => {
                eprintln!("scenario error: {err}");
                std::process::exit(2);
            }
        };
        let rep = model.simulate();
        let report = rep.outputs.report(scenario.num_rooms);

        println!(
            "replication seed={} arrived={} served={} ave_in_system={:.5} ave_waiting={:.5} utilization={:.5}",
            scenario.seed,
            report.n_arrived,
            report.n_served,
            report.ave_patients_in_system,
            report.ave_patients_waiting,
            report.room_utilization
        );

        obs_arrived.push(report.n_arrived as f64);
        obs_served.push(report.n_served as f64);
        obs_time_in_system.push(report.ave_time_in_system_hours);
        obs_time_waiting.push(report.ave_time_waiting_hours);
        obs_in_system.push(report.ave_patients_in_system);
        obs_waiting.push(report.ave_patients_waiting);
        obs_busy.push(report.ave_rooms_busy);
        obs_util.push(report.room_utilization);
    }

    let summary = MultiReplicationSummary {
        replications: args.replications,
        ave_n_arrived: mean(&obs_arrived),
        ave_n_served: mean(&obs_served),
        ave_time_in_system_hours: mean(&obs_time_in_system),
        ave_time_waiting_hours: mean(&obs_time_waiting),
        ave_patients_in_system: mean(&obs_in_system),
        ave_patients_waiting: mean(&obs_waiting),
        ave_rooms_busy: mean(&obs_busy),
        ave_room_utilization: mean(&obs_util),
    };

    println!("ave_n_arrived {:.5}", summary.ave_n_arrived);
    println!("ave_n_served {:.5}", summary.ave_n_served);
    println!(
        "ave_time_in_system_hours {:.5}",
        summary.ave_time_in_system_hours
    );
    println!(
        "ave_time_waiting_hours {:.5}",
        summary.ave_time_waiting_hours
    );
    println!("ave_patients_in_system {:.5}", summary.ave_patients_in_system);
    println!("ave_patients_waiting {:.5}", summary.ave_patients_waiting);
    println!("ave_rooms_busy {:.5}", summary.ave_rooms_busy);
    println!("ave_room_utilization {:.5}", summary.ave_room_utilization);

    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&summary).expect("serialize summary");
        fs::write(path, json).expect("write summary JSON");
    }
}
