use crate::core::race::Race;
use crate::interfaces::live::{
    system_color, RaceState, RunnerState, MAX_STREAM_UPDATE_FREQUENCY,
};
use crate::post::race_result::RaceResult;
use crate::pre::read_sim_pars::SimPars;
use anyhow::Context;
use flume::Sender;
use helpers::general::mean;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// handle_race creates and simulates a race on the basis of the inserted
/// parameters, and returns the result for post-processing. The loop runs
/// until every runner has finished or the simulated-time safety cap is hit,
/// whichever comes first.
///
/// If a sender is inserted, the race is simulated in real time (scaled by
/// `realtime_factor`) and race states are streamed to the viewer at up to
/// MAX_STREAM_UPDATE_FREQUENCY, followed by a single final-result message.
pub fn handle_race(
    sim_pars: &SimPars,
    timestep_size: f64,
    print_debug: bool,
    tx: Option<&Sender<RaceState>>,
    realtime_factor: f64,
) -> anyhow::Result<RaceResult> {
    let mut race = Race::new(&sim_pars.race_pars, &sim_pars.runner_pars_all, timestep_size);

    // check if sender was inserted -> in that case use real-time simulation
    let sim_realtime = tx.is_some();
    if !sim_realtime {
        let mut t_race_update_print = 0.0;
        while !race.get_all_finished() && race.cur_racetime < race.max_racetime {
            race.simulate_timestep();
            if print_debug && race.cur_racetime > t_race_update_print + 0.9999 {
                let leader = &race.runners_list[race.leader_idx()];
                println!(
                    "INFO: Simulating... Current race time is {:.3}s, {} leads at {:.1}m",
                    race.cur_racetime, leader.name, leader.position
                );
                t_race_update_print = race.cur_racetime;
            }
        }
    } else {
        let mut t_race_update_stream = 0.0;
        while !race.get_all_finished() && race.cur_racetime < race.max_racetime {
            let t_start = Instant::now();
            race.simulate_timestep();

            if race.cur_racetime > t_race_update_stream + 1.0 / MAX_STREAM_UPDATE_FREQUENCY - 0.001
            {
                let race_state = build_race_state(&race, None);
                tx.unwrap()
                    .send(race_state)
                    .context("Failed to send race state to the viewer!")?;
                t_race_update_stream = race.cur_racetime;
            }

            // sleep until the time step is finished in real-time as well
            // (calculation in ms)
            let t_sleep = (race.timestep_size * 1000.0 / realtime_factor) as i64
                - t_start.elapsed().as_millis() as i64;

            if t_sleep > 0 {
                sleep(Duration::from_millis(t_sleep as u64));
            } else {
                println!("WARNING: Could not keep up with real-time!")
            }
        }

        // after the real-time loop finishes, send the final result once
        if let Some(tx) = tx {
            let final_msg = build_race_state(&race, Some(race.get_race_result()));
            tx.send(final_msg)
                .context("Failed to send final race result to the viewer!")?;
        }
    }

    if print_debug {
        println!(
            "DEBUG: Recorded {} frames over {:.3}s of simulated time",
            race.frames.len(),
            race.cur_racetime
        );
    }

    Ok(race.get_race_result())
}

fn build_race_state(race: &Race, final_result: Option<RaceResult>) -> RaceState {
    let positions: Vec<f64> = race.runners_list.iter().map(|r| r.position).collect();
    let race_prog = if race.race_distance > 0.0 {
        mean(&positions) / race.race_distance
    } else {
        0.0
    };

    let mut race_state = RaceState {
        time: race.cur_racetime,
        race_prog,
        runner_states: Vec::with_capacity(race.runners_list.len()),
        final_result,
    };

    for runner in race.runners_list.iter() {
        race_state.runner_states.push(RunnerState {
            name: runner.name.to_owned(),
            system: runner.system.to_owned(),
            lane: runner.lane,
            color: system_color(&runner.system),
            position: runner.position,
            speed: runner.speed,
            stamina: runner.stamina,
            finished: runner.finished,
        });
    }

    race_state
}
