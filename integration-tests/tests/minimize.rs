use approx::assert_relative_eq;

use integration_tests::{Boxed, Counting, OutOfBounds, Paraboloid, Rosenbrock, Sphere, init_tracing};
use nmsimplex_solvers::optimization::nelder_mead::{
    self, Config, Error, Status, minimize_unobserved,
};

#[test]
fn paraboloid_from_far_away() {
    init_tracing();

    let solution = minimize_unobserved(&Paraboloid, &[-354.0, 1153.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.x, vec![-0.2, 4.0]);
    assert_eq!(solution.objective, 0.0);
}

#[test]
fn sphere_in_four_dimensions() {
    init_tracing();
    let center = vec![1.0, -2.0, 3.0, 0.5];
    let sphere = Sphere {
        center: center.clone(),
    };

    let solution =
        minimize_unobserved(&sphere, &[0.0; 4], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    for (x, c) in solution.x.iter().zip(&center) {
        assert_relative_eq!(x, c, epsilon = 1e-9);
    }
}

#[test]
fn rosenbrock_valley() {
    init_tracing();

    let solution = minimize_unobserved(&Rosenbrock::default(), &[-1.2, 1.0], &Config::default())
        .expect("should converge");

    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-6);
    assert_relative_eq!(solution.x[1], 1.0, epsilon = 1e-6);
    assert_relative_eq!(solution.objective, 0.0, epsilon = 1e-10);
}

#[test]
fn evals_match_real_objective_calls() {
    init_tracing();

    for memoize in [true, false] {
        let objective = Counting::new(Paraboloid);
        let config = Config::new(200).with_memoize(memoize);

        let solution = minimize_unobserved(&objective, &[-354.0, 1153.0], &config).unwrap();

        assert_eq!(solution.evals, objective.calls(), "memoize = {memoize}");
    }
}

#[test]
fn memoization_saves_calls_without_changing_the_answer() {
    init_tracing();
    let memoized = Counting::new(Paraboloid);
    let plain = Counting::new(Paraboloid);

    let a = minimize_unobserved(&memoized, &[-354.0, 1153.0], &Config::default()).unwrap();
    let plain_config = Config::default().with_memoize(false);
    let b = minimize_unobserved(&plain, &[-354.0, 1153.0], &plain_config).unwrap();

    assert_eq!(a.x, b.x);
    assert_eq!(a.iters, b.iters);
    assert_eq!(a.status, b.status);
    assert!(memoized.calls() < plain.calls());
}

#[test]
fn smaller_initial_step_stays_in_bounds() {
    init_tracing();
    let objective = Boxed { limit: 10.0 };
    let config = Config::default().with_initial_step(1.0).unwrap();

    let solution = minimize_unobserved(&objective, &[3.0, 3.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(solution.x[1], 0.0, epsilon = 1e-12);
}

#[test]
fn objective_failure_aborts_the_solve() {
    init_tracing();
    let objective = Boxed { limit: 10.0 };

    // The default step of 10 puts the second vertex at x = 15.
    let result = minimize_unobserved(&objective, &[5.0, 5.0], &Config::default());

    let Err(Error::Objective(source)) = result else {
        panic!("expected an objective error");
    };
    let failure = source
        .downcast_ref::<OutOfBounds>()
        .expect("source should be the objective's error");
    assert_eq!(failure.x, vec![15.0, 5.0]);
    assert_eq!(
        source.to_string(),
        "point [15.0, 5.0] is outside the box of half-width 10"
    );
}

#[test]
fn error_messages_describe_bad_input() {
    let err = minimize_unobserved(&Paraboloid, &[f64::NAN, 0.0], &Config::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input: vertex 0 has a non-finite coordinate at index 0"
    );

    let err = nelder_mead::minimize_from_simplex(
        &Paraboloid,
        vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0]],
        &Config::default(),
        (),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input: vertex 2 has dimension 1, expected 2"
    );
}
