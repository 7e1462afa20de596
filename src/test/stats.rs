use crate::sim::SimTime;
use crate::stats::{DiscreteSamples, PrevalenceSamplePath, SimOutputs};

fn h(hours: f64) -> SimTime {
    SimTime::from_hours_f64(hours)
}

#[test]
fn prevalence_time_weighted_mean_without_warm_up() {
    let mut path = PrevalenceSamplePath::new("queue length", 0, SimTime::ZERO);
    path.record_increment(h(1.0), 1);
    path.record_increment(h(3.0), -1);
    path.close(h(4.0));

    // 0 over [0,1], 1 over [1,3], 0 over [3,4] → area 2 over window 4.
    assert!((path.time_weighted_mean() - 0.5).abs() < 1e-9);
    assert_eq!(path.max(), 1);
    assert_eq!(path.current(), 0);
}

#[test]
fn prevalence_warm_up_carries_leading_edge_value() {
    let mut path = PrevalenceSamplePath::new("queue length", 0, h(2.0));
    path.record_increment(h(1.0), 1);
    path.record_increment(h(3.0), 1);
    path.close(h(5.0));

    // Area before the warm-up is dropped, but the value 1 in effect at t=2
    // carries in: 1 over [2,3] plus 2 over [3,5] → 5 over window 3.
    assert!((path.time_weighted_mean() - 5.0 / 3.0).abs() < 1e-9);
    // Maximum is over the whole run.
    assert_eq!(path.max(), 2);
}

#[test]
fn prevalence_records_step_sequence() {
    let mut path = PrevalenceSamplePath::new("queue length", 0, SimTime::ZERO);
    path.record_increment(h(1.0), 2);
    path.record_increment(h(2.0), -1);
    path.close(h(3.0));

    assert_eq!(
        path.steps(),
        &[
            (SimTime::ZERO, 0),
            (h(1.0), 2),
            (h(2.0), 1),
            (h(3.0), 1),
        ]
    );
}

#[test]
fn prevalence_empty_window_mean_is_zero() {
    let mut path = PrevalenceSamplePath::new("queue length", 0, SimTime::ZERO);
    path.close(SimTime::ZERO);
    assert_eq!(path.time_weighted_mean(), 0.0);
}

#[test]
#[should_panic(expected = "record after close")]
fn prevalence_record_after_close_panics() {
    let mut path = PrevalenceSamplePath::new("queue length", 0, SimTime::ZERO);
    path.close(h(1.0));
    path.record_increment(h(2.0), 1);
}

#[test]
#[should_panic(expected = "time moved backwards")]
fn prevalence_time_going_backwards_panics() {
    let mut path = PrevalenceSamplePath::new("queue length", 0, SimTime::ZERO);
    path.record_increment(h(2.0), 1);
    path.record_increment(h(1.0), 1);
}

#[test]
#[should_panic(expected = "before the path was closed")]
fn prevalence_mean_before_close_panics() {
    let path = PrevalenceSamplePath::new("queue length", 0, SimTime::ZERO);
    let _ = path.time_weighted_mean();
}

#[test]
fn discrete_samples_running_mean() {
    let mut samples = DiscreteSamples::new("hours waited");
    assert_eq!(samples.mean(), 0.0);
    assert!(samples.is_empty());

    samples.record(1.0);
    samples.record(2.0);
    samples.record(6.0);
    assert_eq!(samples.len(), 3);
    assert!((samples.mean() - 3.0).abs() < 1e-9);
}

#[test]
fn outputs_exclude_warm_up_patients_from_discrete_samples() {
    let mut outputs = SimOutputs::new(h(10.0));

    // Arrived and departed inside the warm-up: nothing counted.
    outputs.collect_arrival(h(1.0));
    outputs.collect_start_exam(h(1.0));
    outputs.collect_departure(h(2.0), h(1.0), 0.0);

    // Arrived during warm-up, departed after: still excluded.
    outputs.collect_arrival(h(9.0));
    outputs.collect_start_exam(h(9.0));
    outputs.collect_departure(h(12.0), h(9.0), 0.0);

    // Entirely after warm-up: counted.
    outputs.collect_arrival(h(11.0));
    outputs.collect_start_exam(h(11.0));
    outputs.collect_departure(h(13.0), h(11.0), 0.5);

    outputs.collect_end_of_simulation(h(13.0));

    assert_eq!(outputs.n_arrived(), 1);
    assert_eq!(outputs.n_served(), 1);
    assert_eq!(outputs.time_in_system.len(), 1);
    assert!((outputs.time_in_system.mean() - 2.0).abs() < 1e-9);
    assert!((outputs.time_waiting.mean() - 0.5).abs() < 1e-9);
}

#[test]
fn outputs_report_scales_utilization_by_room_count() {
    let mut outputs = SimOutputs::new(SimTime::ZERO);
    outputs.collect_arrival(h(0.0));
    outputs.collect_start_exam(h(0.0));
    outputs.collect_departure(h(4.0), h(0.0), 0.0);
    outputs.collect_end_of_simulation(h(4.0));

    let report = outputs.report(2);
    assert!((report.ave_rooms_busy - 1.0).abs() < 1e-9);
    assert!((report.room_utilization - 0.5).abs() < 1e-9);
    assert_eq!(report.patients_in_system_path.first().map(|p| p.value), Some(0));
}
