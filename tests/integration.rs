//! End-to-end checks of the catalog → resolve → integrate → analysis pipeline.

use rand::rngs::StdRng;
use rand::SeedableRng;
use strange_attractors::{
    default_parameters, definitions, estimate_density_with_rng, get_definition, integrate,
    list_names, make_frames, resolve, simulate, AttractorError, DEFAULT_MAX_FRAMES,
};

const NONE: [(&str, f64); 0] = [];

#[test]
fn test_all_builtins_simulate_with_defaults() {
    for def in definitions() {
        let traj = simulate(def, NONE).unwrap_or_else(|e| panic!("{}: {}", def.name, e));

        assert_eq!(traj.len(), def.time_domain.sample_count, "{}", def.name);
        assert_eq!(traj.first(), Some(def.initial_state), "{}", def.name);
        assert_eq!(traj.times()[traj.len() - 1], def.time_domain.t_max);

        let bounds = traj.bounds().unwrap();
        for (lo, hi) in bounds {
            assert!(lo.is_finite() && hi.is_finite());
            assert!(lo > -1e3 && hi < 1e3, "{} left its attractor: [{}, {}]", def.name, lo, hi);
        }
    }
}

#[test]
fn test_lorenz_scenario() {
    let lorenz = get_definition("Lorenz").unwrap();
    let traj = simulate(lorenz, NONE).unwrap();

    assert_eq!(traj.len(), 10_000);
    assert_eq!(traj.first(), Some([0.0, 1.5, 15.0]));

    // A straight line from first to last sample misses the butterfly by far
    let first = traj.first().unwrap();
    let last = traj.last().unwrap();
    let n = traj.len() - 1;
    let max_deviation = (0..=n)
        .map(|i| {
            let s = i as f64 / n as f64;
            let p = traj.point(i).unwrap();
            (0..3)
                .map(|k| (p[k] - (first[k] + s * (last[k] - first[k]))).powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .fold(0.0, f64::max);
    assert!(max_deviation > 10.0, "max deviation {}", max_deviation);

    // Both wings are visited
    let x = traj.column(0);
    assert!(x.iter().any(|&v| v > 5.0));
    assert!(x.iter().any(|&v| v < -5.0));
}

#[test]
fn test_simulate_deterministic() {
    let rossler = get_definition("Rossler").unwrap();
    let a = simulate(rossler, [("a", 0.1)]).unwrap();
    let b = simulate(rossler, [("a", 0.1)]).unwrap();
    assert_eq!(a, b);

    let resolved = resolve(rossler, [("a", 0.1)]).unwrap();
    assert_eq!(integrate(rossler, &resolved).unwrap(), a);
}

#[test]
fn test_parallel_simulations_match_serial() {
    let serial: Vec<_> = definitions().map(|def| simulate(def, NONE).unwrap()).collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = definitions()
            .map(|def| scope.spawn(move || simulate(def, NONE).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}

#[test]
fn test_unknown_attractor() {
    match get_definition("Nonexistent") {
        Err(AttractorError::UnknownAttractor { name }) => assert_eq!(name, "Nonexistent"),
        other => panic!("expected UnknownAttractor, got {:?}", other),
    }
}

#[test]
fn test_rossler_out_of_range() {
    let rossler = get_definition("Rossler").unwrap();
    let err = simulate(rossler, [("c", 100.0)]).unwrap_err();
    assert!(matches!(
        err,
        AttractorError::ParameterRange { ref parameter, min, max, .. }
            if parameter == "c" && min == 0.0 && max == 20.0
    ));
}

#[test]
fn test_unknown_override_rejected() {
    let dadras = get_definition("Dadras").unwrap();
    assert!(matches!(
        simulate(dadras, [("sigma", 1.0)]),
        Err(AttractorError::UnknownParameter { .. })
    ));
}

#[test]
fn test_resolve_idempotent_for_all() {
    for name in list_names() {
        let def = get_definition(name).unwrap();
        let defaults = default_parameters(def);
        assert_eq!(resolve(def, &defaults).unwrap(), resolve(def, NONE).unwrap());
    }
}

#[test]
fn test_density_and_frames_on_lorenz() {
    let lorenz = get_definition("Lorenz").unwrap();
    let traj = simulate(lorenz, NONE).unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    for sample_size in [50, 1000] {
        let density = estimate_density_with_rng(&traj, sample_size, &mut rng).unwrap();
        assert_eq!(density.len(), traj.len());
    }

    let frames = make_frames(&traj, DEFAULT_MAX_FRAMES);
    assert!(frames.len() <= DEFAULT_MAX_FRAMES);
    assert!(frames.lengths().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(frames.lengths().last(), Some(&traj.len()));
    let last = frames.frame(frames.len() - 1).unwrap();
    assert_eq!(last, traj.states().view());
}
