use sprintsim::core::handle_race::handle_race;
use sprintsim::pre::roster::default_sim_pars;

/// Full default-roster race: every runner must finish well within the time
/// cap and the recorded timeline must honor the engine invariants on every
/// tick.
#[test]
fn test_default_roster_race_invariants() {
    let sim_pars = default_sim_pars();
    let result = handle_race(&sim_pars, 0.1, false, None, 1.0).unwrap();

    let no_runners = sim_pars.runner_pars_all.len();
    assert_eq!(result.records.len(), no_runners);
    assert!(!result.frames.is_empty());

    // all eight finish before the 40s cap
    for rec in result.records.iter() {
        let finish_time = rec.finish_time.expect("runner did not finish");
        assert!(finish_time < sim_pars.race_pars.max_racetime);
    }

    // per-tick invariants over the whole timeline
    let mut prev_positions = vec![0.0; no_runners];
    for frame in result.frames.iter() {
        assert_eq!(frame.positions.len(), no_runners);
        for i in 0..no_runners {
            let pars = &sim_pars.runner_pars_all[i];
            assert!(frame.positions[i] >= prev_positions[i]);
            assert!(frame.positions[i] <= sim_pars.race_pars.race_distance);
            assert!(frame.stamina[i] >= 0.0 && frame.stamina[i] <= pars.stamina_max);
            assert!(frame.speeds[i] >= 0.0);
            assert!(frame.speeds[i] <= pars.top_speed * pars.burst_multiplier.max(1.1));
            prev_positions[i] = frame.positions[i];
        }
    }
}

/// The placing must order finishers ascending by finish time, with ties and
/// non-finishers falling back to roster order.
#[test]
fn test_default_roster_placing_is_ordered() {
    let sim_pars = default_sim_pars();
    let result = handle_race(&sim_pars, 0.1, false, None, 1.0).unwrap();

    let order = result.placing_order();
    assert_eq!(order.len(), result.records.len());

    let mut prev_time = f64::NEG_INFINITY;
    for &idx in order.iter() {
        let t = result.records[idx]
            .finish_time
            .expect("runner did not finish");
        assert!(t >= prev_time);
        prev_time = t;
    }

    // ties resolve by roster order: equal finish times must appear in
    // ascending roster index
    for pair in order.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if result.records[a].finish_time == result.records[b].finish_time {
            assert!(a < b);
        }
    }
}

/// Two runs of the identical configuration must produce bit-identical
/// timelines and the same placing.
#[test]
fn test_repeated_runs_are_bit_identical() {
    let sim_pars = default_sim_pars();
    let result_a = handle_race(&sim_pars, 0.1, false, None, 1.0).unwrap();
    let result_b = handle_race(&sim_pars, 0.1, false, None, 1.0).unwrap();

    assert_eq!(result_a.frames.len(), result_b.frames.len());
    assert_eq!(result_a.frames, result_b.frames);
    assert_eq!(result_a.placing_order(), result_b.placing_order());
    for (rec_a, rec_b) in result_a.records.iter().zip(result_b.records.iter()) {
        assert_eq!(rec_a.finish_time, rec_b.finish_time);
    }
}
