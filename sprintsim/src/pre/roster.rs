use crate::core::profile::{Ability, Personality};
use crate::core::race::RacePars;
use crate::core::runner::RunnerPars;
use crate::pre::read_sim_pars::SimPars;

/// default_sim_pars returns the built-in simulation parameters: the standard
/// 200m race with the eight body-system runners.
pub fn default_sim_pars() -> SimPars {
    SimPars {
        race_pars: RacePars::default(),
        runner_pars_all: default_roster(),
    }
}

/// default_roster returns the eight body-system runners, one per lane.
pub fn default_roster() -> Vec<RunnerPars> {
    vec![
        RunnerPars {
            name: "Cardio".to_string(),
            system: "Cardiovascular".to_string(),
            lane: 1,
            acceleration: 3.0,
            top_speed: 9.5,
            stamina_max: 120.0,
            stamina_regen: 12.0,
            burst_multiplier: 1.1,
            fatigue_factor: 0.5,
            personality: Personality::Calm,
            ability: Some(Ability::HeartEngine),
        },
        RunnerPars {
            name: "Lungster".to_string(),
            system: "Respiratory".to_string(),
            lane: 2,
            acceleration: 4.5,
            top_speed: 9.4,
            stamina_max: 80.0,
            stamina_regen: 7.0,
            burst_multiplier: 1.2,
            fatigue_factor: 0.9,
            personality: Personality::Aggressive,
            ability: Some(Ability::DeepInhale),
        },
        RunnerPars {
            name: "Flexor".to_string(),
            system: "Muscular".to_string(),
            lane: 3,
            acceleration: 4.2,
            top_speed: 9.6,
            stamina_max: 75.0,
            stamina_regen: 6.0,
            burst_multiplier: 1.3,
            fatigue_factor: 1.0,
            personality: Personality::Aggressive,
            ability: Some(Ability::PowerBurst),
        },
        RunnerPars {
            name: "Neuron".to_string(),
            system: "Nervous".to_string(),
            lane: 4,
            acceleration: 3.8,
            top_speed: 9.2,
            stamina_max: 90.0,
            stamina_regen: 8.0,
            burst_multiplier: 1.15,
            fatigue_factor: 0.7,
            personality: Personality::Tactical,
            ability: Some(Ability::ReflexStart),
        },
        RunnerPars {
            name: "Hormona".to_string(),
            system: "Endocrine".to_string(),
            lane: 5,
            acceleration: 3.5,
            top_speed: 9.7,
            stamina_max: 85.0,
            stamina_regen: 7.0,
            burst_multiplier: 1.3,
            fatigue_factor: 0.8,
            personality: Personality::Tactical,
            ability: Some(Ability::AdrenalineSurge),
        },
        RunnerPars {
            name: "Defenda".to_string(),
            system: "Immune".to_string(),
            lane: 6,
            acceleration: 2.8,
            top_speed: 9.0,
            stamina_max: 130.0,
            stamina_regen: 11.0,
            burst_multiplier: 1.05,
            fatigue_factor: 0.3,
            personality: Personality::Steady,
            ability: Some(Ability::FatigueShield),
        },
        RunnerPars {
            name: "Gastro".to_string(),
            system: "Digestive".to_string(),
            lane: 7,
            acceleration: 3.6,
            top_speed: 9.3,
            stamina_max: 95.0,
            stamina_regen: 8.5,
            burst_multiplier: 1.2,
            fatigue_factor: 0.8,
            personality: Personality::Tactical,
            ability: Some(Ability::EnergyConversion),
        },
        RunnerPars {
            name: "Bonestride".to_string(),
            system: "Skeletal".to_string(),
            lane: 8,
            acceleration: 2.4,
            top_speed: 9.1,
            stamina_max: 110.0,
            stamina_regen: 10.0,
            burst_multiplier: 1.1,
            fatigue_factor: 0.6,
            personality: Personality::Steady,
            ability: Some(Ability::StructuralStability),
        },
    ]
}
