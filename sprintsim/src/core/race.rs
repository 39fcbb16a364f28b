use crate::core::runner::{Runner, RunnerPars};
use crate::post::race_result::{RaceResult, RunnerRecord};
use helpers::general::{argmax, mean};
use serde::{Deserialize, Serialize};

fn default_race_distance() -> f64 {
    200.0
}

fn default_max_racetime() -> f64 {
    40.0
}

/// * `race_distance` - (m) Position of the finish line
/// * `max_racetime` - (s) Safety cap on simulated time; reaching it is a hard
///   stop for non-finishers, not an error
#[derive(Debug, Deserialize, Clone)]
pub struct RacePars {
    #[serde(default = "default_race_distance")]
    pub race_distance: f64,
    #[serde(default = "default_max_racetime")]
    pub max_racetime: f64,
}

impl Default for RacePars {
    fn default() -> Self {
        RacePars {
            race_distance: default_race_distance(),
            max_racetime: default_max_racetime(),
        }
    }
}

/// RaceFrame is an immutable record of all runners' position, stamina and
/// speed at a given simulated time. The vectors are index-aligned with the
/// roster order; the ordered sequence of frames is the playback timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceFrame {
    pub time: f64,
    pub positions: Vec<f64>,
    pub stamina: Vec<f64>,
    pub speeds: Vec<f64>,
}

#[derive(Debug)]
pub struct Race {
    pub timestep_size: f64,
    pub cur_racetime: f64,
    pub race_distance: f64,
    pub max_racetime: f64,
    pub frames: Vec<RaceFrame>,
    pub runners_list: Vec<Runner>,
}

impl Race {
    pub fn new(race_pars: &RacePars, runner_pars_all: &[RunnerPars], timestep_size: f64) -> Race {
        let mut runners_list = Vec::with_capacity(runner_pars_all.len());
        for runner_pars in runner_pars_all.iter() {
            runners_list.push(Runner::new(runner_pars));
        }

        Race {
            timestep_size,
            cur_racetime: 0.0,
            race_distance: race_pars.race_distance,
            max_racetime: race_pars.max_racetime,
            frames: Vec::new(),
            runners_list,
        }
    }

    // ---------------------------------------------------------------------------------------------
    // MAIN METHOD ---------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// simulate_timestep advances the whole field by one tick: race progress
    /// is computed from the pre-tick positions (no runner observes another
    /// runner's post-tick state within the same tick), every runner is
    /// updated in roster order, a frame of the post-tick values is recorded,
    /// and the race time advances by one step.
    pub fn simulate_timestep(&mut self) {
        let positions: Vec<f64> = self.runners_list.iter().map(|r| r.position).collect();
        let race_progress = if self.race_distance > 0.0 {
            mean(&positions) / self.race_distance
        } else {
            0.0
        };

        for runner in self.runners_list.iter_mut() {
            runner.update(
                self.timestep_size,
                self.cur_racetime,
                race_progress,
                self.race_distance,
            );
        }

        self.frames.push(RaceFrame {
            time: self.cur_racetime,
            positions: self.runners_list.iter().map(|r| r.position).collect(),
            stamina: self.runners_list.iter().map(|r| r.stamina).collect(),
            speeds: self.runners_list.iter().map(|r| r.speed).collect(),
        });

        self.cur_racetime += self.timestep_size;
    }

    // ---------------------------------------------------------------------------------------------
    // HELPER METHODS ------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    pub fn get_all_finished(&self) -> bool {
        self.runners_list.iter().all(|r| r.finished)
    }

    /// leader_idx returns the roster index of the runner furthest down the
    /// track (first roster entry wins a dead heat).
    pub fn leader_idx(&self) -> usize {
        let positions: Vec<f64> = self.runners_list.iter().map(|r| r.position).collect();
        argmax(&positions)
    }

    /// get_race_result collects the final runner records and the recorded
    /// frame sequence for post-processing.
    pub fn get_race_result(&self) -> RaceResult {
        let records = self
            .runners_list
            .iter()
            .map(|r| RunnerRecord {
                name: r.name.to_owned(),
                system: r.system.to_owned(),
                lane: r.lane,
                personality: r.personality,
                ability: r.ability,
                finish_time: r.finish_time,
            })
            .collect();

        RaceResult {
            race_distance: self.race_distance,
            timestep_size: self.timestep_size,
            records,
            frames: self.frames.to_owned(),
        }
    }
}
