use clap::Parser;
use clinsim_rs::clinic::{Scenario, UrgentCareModel};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "clinic-sim",
    about = "Run one urgent-care queueing replication and print its summary"
)]
struct Args {
    /// Path to a scenario JSON file; flags below override its fields
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Hours the clinic admits new arrivals
    #[arg(long)]
    hours_open: Option<f64>,

    /// Number of exam rooms
    #[arg(long)]
    rooms: Option<usize>,

    /// Mean patient interarrival time (hours)
    #[arg(long)]
    mean_interarrival: Option<f64>,

    /// Mean exam duration (hours)
    #[arg(long)]
    mean_exam: Option<f64>,

    /// Warm-up period excluded from steady-state estimates (hours)
    #[arg(long)]
    warm_up: Option<f64>,

    /// Hard cap on simulated time (hours)
    #[arg(long)]
    horizon: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the chronological event trace
    #[arg(long)]
    trace: bool,

    /// Write the full replication report (counts, means, sample paths) as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,
}

fn build_scenario(args: &Args) -> Scenario {
    let mut scenario = match &args.scenario {
        Some(path) => {
            let text = fs::read_to_string(path).expect("read scenario file");
            serde_json::from_str(&text).expect("parse scenario JSON")
        }
        None => Scenario::default(),
    };

    if let Some(v) = args.hours_open {
        scenario.hours_open = v;
    }
    if let Some(v) = args.rooms {
        scenario.num_rooms = v;
    }
    if let Some(v) = args.mean_interarrival {
        scenario.mean_interarrival_hours = v;
    }
    if let Some(v) = args.mean_exam {
        scenario.mean_exam_hours = v;
    }
    if let Some(v) = args.warm_up {
        scenario.warm_up_hours = v;
    }
    if let Some(v) = args.horizon {
        scenario.horizon_hours = v;
    }
    if let Some(v) = args.seed {
        scenario.seed = v;
    }
    if args.trace {
        scenario.trace = true;
    }
    scenario
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let scenario = build_scenario(&args);

    let model = match UrgentCareModel::new(scenario.clone()) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("scenario error: {err}");
            std::process::exit(2);
        }
    };

    let rep = model.simulate();
    let report = rep.outputs.report(scenario.num_rooms);

    for line in rep.trace.lines() {
        println!("{line}");
    }

    println!("patients_arrived {}", report.n_arrived);
    println!("patients_served {}", report.n_served);
    println!("patients_admitted_total {}", rep.n_admitted);
    println!("patients_departed_total {}", rep.n_departed);
    println!("end_time_hours {:.5}", rep.end_time.as_hours_f64());
    println!(
        "ave_time_in_system_hours {:.5}",
        report.ave_time_in_system_hours
    );
    println!("ave_time_waiting_hours {:.5}", report.ave_time_waiting_hours);
    println!("ave_patients_in_system {:.5}", report.ave_patients_in_system);
    println!("ave_patients_waiting {:.5}", report.ave_patients_waiting);
    println!("max_patients_waiting {}", report.max_patients_waiting);
    println!("ave_rooms_busy {:.5}", report.ave_rooms_busy);
    println!("room_utilization {:.5}", report.room_utilization);
    println!("offered_load {:.5}", scenario.offered_load());

    if let Some(path) = &args.report_json {
        let json = serde_json::to_string_pretty(&report).expect("serialize report");
        fs::write(path, json).expect("write report JSON");
    }
}
