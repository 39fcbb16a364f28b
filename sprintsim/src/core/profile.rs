use serde::{Deserialize, Serialize};
use std::fmt;

/// Personality determines the pacing target a runner steers toward, as a
/// fraction of its top speed and optionally depending on how far the field
/// has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Aggressive,
    Calm,
    Tactical,
    Steady,
}

impl Personality {
    /// base_target_speed returns the pacing target before ability and fatigue
    /// adjustments.
    /// * `top_speed` - (m/s) Maximum velocity of the runner
    /// * `race_progress` - Fraction [0, 1] of mean field position over race distance
    pub fn base_target_speed(self, top_speed: f64, race_progress: f64) -> f64 {
        match self {
            Personality::Aggressive => top_speed.min(0.8 * top_speed + 0.15 * top_speed),
            Personality::Calm => 0.8 * top_speed,
            Personality::Tactical => {
                if race_progress < 0.4 {
                    0.7 * top_speed
                } else if race_progress < 0.8 {
                    0.9 * top_speed
                } else {
                    top_speed
                }
            }
            Personality::Steady => 0.85 * top_speed,
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            Personality::Aggressive => "aggressive",
            Personality::Calm => "calm",
            Personality::Tactical => "tactical",
            Personality::Steady => "steady",
        };
        write!(f, "{}", tag)
    }
}

/// Ability is the closed set of special abilities. A runner carries at most
/// one. Each variant acts on either the stamina budget or the pacing target;
/// FatigueShield and StructuralStability act in the fatigue stage of the
/// runner update instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    HeartEngine,
    DeepInhale,
    PowerBurst,
    ReflexStart,
    AdrenalineSurge,
    EnergyConversion,
    FatigueShield,
    StructuralStability,
}

impl Ability {
    /// stamina_gain returns the bonus stamina granted this tick. Only the
    /// regeneration-type abilities produce a gain; the result is added before
    /// the regular drain stage clamps stamina to its range.
    ///
    /// DeepInhale re-fires on every tick for which the truncated position is
    /// an exact multiple of 20 m, so with a small time step it awards several
    /// ticks of bonus regeneration near each mark. Intended behavior.
    pub fn stamina_gain(
        self,
        speed: f64,
        top_speed: f64,
        position: f64,
        stamina_regen: f64,
        dt: f64,
    ) -> f64 {
        match self {
            Ability::HeartEngine if speed < top_speed => stamina_regen * 1.2 * dt,
            Ability::DeepInhale if position > 0.0 && (position as u64) % 20 == 0 => {
                stamina_regen * 3.0 * dt
            }
            _ => 0.0,
        }
    }

    /// adjust_target_speed returns the pacing target with the speed-type
    /// ability applied, or the unchanged target when the ability's race
    /// context condition does not hold.
    pub fn adjust_target_speed(
        self,
        target_speed: f64,
        top_speed: f64,
        burst_multiplier: f64,
        stamina: f64,
        stamina_max: f64,
        race_progress: f64,
        global_time: f64,
    ) -> f64 {
        match self {
            Ability::PowerBurst if race_progress < 0.25 => {
                (top_speed * 1.1).min(target_speed * 1.15)
            }
            Ability::ReflexStart if global_time < 1.5 => top_speed.min(target_speed * 1.2),
            Ability::AdrenalineSurge if race_progress > 0.6 => {
                (top_speed * burst_multiplier).min(target_speed * burst_multiplier)
            }
            Ability::EnergyConversion if stamina < 0.3 * stamina_max => {
                (top_speed * 1.05).min(target_speed * 1.1)
            }
            _ => target_speed,
        }
    }

    /// fatigue_penalty_factor returns the factor the fatigue penalty is
    /// multiplied with (FatigueShield dampens it, everything else is neutral).
    pub fn fatigue_penalty_factor(self) -> f64 {
        match self {
            Ability::FatigueShield => 0.4,
            _ => 1.0,
        }
    }

    /// min_effective_speed returns the floor for the effective target speed
    /// (only StructuralStability enforces one).
    pub fn min_effective_speed(self, top_speed: f64) -> f64 {
        match self {
            Ability::StructuralStability => 0.9 * 0.85 * top_speed,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            Ability::HeartEngine => "heart_engine",
            Ability::DeepInhale => "deep_inhale",
            Ability::PowerBurst => "power_burst",
            Ability::ReflexStart => "reflex_start",
            Ability::AdrenalineSurge => "adrenaline_surge",
            Ability::EnergyConversion => "energy_conversion",
            Ability::FatigueShield => "fatigue_shield",
            Ability::StructuralStability => "structural_stability",
        };
        write!(f, "{}", tag)
    }
}
