use crate::clinic::{Scenario, ScenarioError};

#[test]
fn default_scenario_is_valid() {
    assert!(Scenario::default().validate().is_ok());
}

#[test]
fn rejects_zero_rooms() {
    let scenario = Scenario {
        num_rooms: 0,
        ..Scenario::default()
    };
    assert!(matches!(
        scenario.validate(),
        Err(ScenarioError::NoRooms(0))
    ));
}

#[test]
fn rejects_non_positive_means() {
    let scenario = Scenario {
        mean_interarrival_hours: 0.0,
        ..Scenario::default()
    };
    assert!(matches!(
        scenario.validate(),
        Err(ScenarioError::BadInterarrival(_))
    ));

    let scenario = Scenario {
        mean_exam_hours: -1.0,
        ..Scenario::default()
    };
    assert!(matches!(
        scenario.validate(),
        Err(ScenarioError::BadExamDuration(_))
    ));
}

#[test]
fn rejects_non_finite_inputs() {
    let scenario = Scenario {
        hours_open: f64::NAN,
        ..Scenario::default()
    };
    assert!(matches!(
        scenario.validate(),
        Err(ScenarioError::BadHoursOpen(_))
    ));

    let scenario = Scenario {
        horizon_hours: f64::INFINITY,
        ..Scenario::default()
    };
    assert!(matches!(
        scenario.validate(),
        Err(ScenarioError::BadHorizon(_))
    ));
}

#[test]
fn rejects_warm_up_reaching_the_horizon() {
    let scenario = Scenario {
        warm_up_hours: 100.0,
        horizon_hours: 100.0,
        ..Scenario::default()
    };
    assert!(matches!(
        scenario.validate(),
        Err(ScenarioError::BadWarmUp { .. })
    ));

    let scenario = Scenario {
        warm_up_hours: -1.0,
        ..Scenario::default()
    };
    assert!(matches!(
        scenario.validate(),
        Err(ScenarioError::BadWarmUp { .. })
    ));
}

#[test]
fn scenario_round_trips_through_json() {
    let scenario = Scenario {
        num_rooms: 3,
        seed: 42,
        ..Scenario::default()
    };
    let json = serde_json::to_string(&scenario).expect("serialize");
    let back: Scenario = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.num_rooms, 3);
    assert_eq!(back.seed, 42);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let back: Scenario = serde_json::from_str(r#"{ "num_rooms": 5 }"#).expect("deserialize");
    assert_eq!(back.num_rooms, 5);
    assert_eq!(back.hours_open, Scenario::default().hours_open);
}

#[test]
fn offered_load_matches_definition() {
    let scenario = Scenario {
        num_rooms: 1,
        mean_interarrival_hours: 1.0,
        mean_exam_hours: 0.5,
        ..Scenario::default()
    };
    assert!((scenario.offered_load() - 0.5).abs() < 1e-9);
}
