use crate::core::profile::{Ability, Personality};
use serde::Deserialize;

/// * `name` - Runner name, e.g. Cardio
/// * `system` - Body system the runner represents, e.g. Cardiovascular (descriptive tag only)
/// * `lane` - Lane index (1..N), display only
/// * `acceleration` - (m/s^2) Acceleration toward the effective target speed
/// * `top_speed` - (m/s) Maximum velocity
/// * `stamina_max` - Stamina budget at the start line
/// * `stamina_regen` - (1/s) Base stamina regeneration rate
/// * `burst_multiplier` - Target speed multiplier for the AdrenalineSurge ability
/// * `fatigue_factor` - Scales how strongly low stamina degrades the target speed
/// * `personality` - Pacing profile
/// * `ability` - Special ability, at most one per runner
#[derive(Debug, Deserialize, Clone)]
pub struct RunnerPars {
    pub name: String,
    pub system: String,
    pub lane: u32,
    pub acceleration: f64,
    pub top_speed: f64,
    pub stamina_max: f64,
    pub stamina_regen: f64,
    pub burst_multiplier: f64,
    pub fatigue_factor: f64,
    pub personality: Personality,
    #[serde(default)]
    pub ability: Option<Ability>,
}

#[derive(Debug)]
pub struct Runner {
    pub name: String,
    pub system: String,
    pub lane: u32,
    acceleration: f64,
    top_speed: f64,
    stamina_max: f64,
    stamina_regen: f64,
    burst_multiplier: f64,
    fatigue_factor: f64,
    pub personality: Personality,
    pub ability: Option<Ability>,
    // dynamic race state
    pub position: f64,
    pub speed: f64,
    pub stamina: f64,
    pub finished: bool,
    pub finish_time: Option<f64>,
}

impl Runner {
    pub fn new(runner_pars: &RunnerPars) -> Runner {
        Runner {
            name: runner_pars.name.to_owned(),
            system: runner_pars.system.to_owned(),
            lane: runner_pars.lane,
            acceleration: runner_pars.acceleration,
            top_speed: runner_pars.top_speed,
            stamina_max: runner_pars.stamina_max,
            stamina_regen: runner_pars.stamina_regen,
            burst_multiplier: runner_pars.burst_multiplier,
            fatigue_factor: runner_pars.fatigue_factor,
            personality: runner_pars.personality,
            ability: runner_pars.ability,
            position: 0.0,
            speed: 0.0,
            stamina: runner_pars.stamina_max,
            finished: false,
            finish_time: None,
        }
    }

    /// update advances the runner by one time step, mutating position, speed
    /// and stamina in place. The method is a no-op once the runner has
    /// finished. It is total: degenerate parameters (non-positive top speed
    /// or stamina budget) take zero fallbacks instead of failing.
    /// * `dt` - (s) Time step size
    /// * `global_time` - (s) Race time at the start of this tick
    /// * `race_progress` - Fraction [0, 1] of mean pre-tick field position over race distance
    /// * `race_distance` - (m) Finish line position
    pub fn update(&mut self, dt: f64, global_time: f64, race_progress: f64, race_distance: f64) {
        if self.finished {
            return;
        }

        // 1. personality-based pacing target
        let mut target_speed = self
            .personality
            .base_target_speed(self.top_speed, race_progress);

        // 2. ability adjustments (at most one ability per runner)
        if let Some(ability) = self.ability {
            self.stamina += ability.stamina_gain(
                self.speed,
                self.top_speed,
                self.position,
                self.stamina_regen,
                dt,
            );
            target_speed = ability.adjust_target_speed(
                target_speed,
                self.top_speed,
                self.burst_multiplier,
                self.stamina,
                self.stamina_max,
                race_progress,
                global_time,
            );
        }

        // 3. stamina drain and base regeneration
        let speed_fraction = if self.top_speed > 0.0 {
            self.speed / self.top_speed
        } else {
            0.0
        };
        let drain_rate = 0.5 + 1.5 * speed_fraction;
        self.stamina -= drain_rate * dt;
        if speed_fraction < 0.7 {
            self.stamina += self.stamina_regen * dt;
        }
        self.stamina = self.stamina.min(self.stamina_max).max(0.0);

        // 4. fatigue penalty
        let stamina_fraction = if self.stamina_max > 0.0 {
            self.stamina / self.stamina_max
        } else {
            0.0
        };
        let mut fatigue_penalty = (1.0 - stamina_fraction) * self.fatigue_factor;
        if let Some(ability) = self.ability {
            fatigue_penalty *= ability.fatigue_penalty_factor();
        }
        let mut effective_target_speed = (target_speed * (1.0 - fatigue_penalty)).max(0.0);
        if let Some(ability) = self.ability {
            effective_target_speed =
                effective_target_speed.max(ability.min_effective_speed(self.top_speed));
        }

        // 5. move toward the effective target without over-/undershooting
        if self.speed < effective_target_speed {
            self.speed = (self.speed + self.acceleration * dt).min(effective_target_speed);
        } else {
            self.speed = (self.speed - self.acceleration * 1.3 * dt).max(effective_target_speed);
        }
        self.speed = self.speed.max(0.0);

        // 6. position advance and finish detection
        self.position += self.speed * dt;
        if self.position >= race_distance {
            self.position = race_distance;
            self.finished = true;
            self.finish_time = Some(global_time);
        }
    }
}
