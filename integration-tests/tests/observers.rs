use approx::assert_relative_eq;

use integration_tests::{Paraboloid, init_tracing};
use nmsimplex_core::{FnObjective, Observer};
use nmsimplex_observers::{History, Record, StopBelow};
use nmsimplex_solvers::optimization::nelder_mead::{
    self, Action, Config, Event, Operation, Status,
};

#[test]
fn history_serializes_to_json() {
    init_tracing();
    let mut history = History::new();

    nelder_mead::minimize(
        &Paraboloid,
        &[-354.0, 1153.0],
        &Config::new(3),
        &mut history,
    )
    .unwrap();

    let json = serde_json::to_string(history.records()).unwrap();
    assert!(json.starts_with(r#"[{"iter":0,"x":[-344.0,1153.0],"objective":24078177.0,"#));
    assert!(json.contains(r#""operation":"expand""#));

    let restored: Vec<Record> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, history.into_records());
}

#[test]
fn record_reads_back_from_hand_written_json() {
    let json = r#"{
        "iter": 7,
        "x": [1.5, -2.0],
        "objective": 0.25,
        "centroid": [1.0, -1.0],
        "operation": "reduce",
        "evals": 19
    }"#;

    let record: Record = serde_json::from_str(json).unwrap();

    assert_eq!(record.iter, 7);
    assert_eq!(record.operation, Operation::Reduce);
    assert_eq!(record.centroid, vec![1.0, -1.0]);
}

#[test]
fn status_serializes_in_snake_case() {
    assert_eq!(
        serde_json::to_string(&Status::StoppedByObserver).unwrap(),
        r#""stopped_by_observer""#
    );
}

#[test]
fn history_and_stop_below_together() {
    init_tracing();
    let mut history = History::new();
    let mut stop = StopBelow::new(1e-3);

    let observer = |event: &Event<'_>| {
        let _: Option<Action> = history.observe(event);
        stop.observe(event)
    };

    let solution =
        nelder_mead::minimize(&Paraboloid, &[-354.0, 1153.0], &Config::default(), observer)
            .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(history.len(), solution.iters);

    let last = history.last().unwrap();
    assert!(last.objective < 1e-3);
    assert!(
        history.records()[..history.len() - 1]
            .iter()
            .all(|r| r.objective >= 1e-3)
    );
}

#[test]
fn maximize_records_caller_sign() {
    init_tracing();
    let hill = FnObjective(|x: &[f64]| 10.0 - (x[0] - 2.0).powi(2) - (x[1] - 1.0).powi(2));
    let mut history = History::new();

    let solution = nelder_mead::maximize(&hill, &[-5.0, 5.0], &Config::new(300), &mut history)
        .unwrap();

    assert_relative_eq!(solution.objective, 10.0, epsilon = 1e-9);
    assert_relative_eq!(solution.x[0], 2.0, epsilon = 1e-5);
    assert_relative_eq!(solution.x[1], 1.0, epsilon = 1e-5);

    let first = &history.records()[0];
    assert_relative_eq!(first.objective, -15.0);
    assert!(history.records().iter().all(|r| r.objective <= 10.0));
}
