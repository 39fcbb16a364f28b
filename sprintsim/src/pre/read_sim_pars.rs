use crate::core::race::RacePars;
use crate::core::runner::RunnerPars;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// SimPars is used to store all other parameter structs. `race_pars` may be
/// omitted in the parameter file, in which case the default race distance and
/// time cap apply.
#[derive(Debug, Deserialize, Clone)]
pub struct SimPars {
    #[serde(default)]
    pub race_pars: RacePars,
    pub runner_pars_all: Vec<RunnerPars>,
}

/// read_sim_pars reads the JSON file and decodes the JSON string into the
/// simulation parameters struct.
pub fn read_sim_pars(filepath: &Path) -> anyhow::Result<SimPars> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::{Ability, Personality};

    #[test]
    fn test_parse_full_parameter_set() {
        let json = r#"{
            "race_pars": {"race_distance": 100.0, "max_racetime": 30.0},
            "runner_pars_all": [
                {
                    "name": "Cardio",
                    "system": "Cardiovascular",
                    "lane": 1,
                    "acceleration": 3.0,
                    "top_speed": 9.5,
                    "stamina_max": 120.0,
                    "stamina_regen": 12.0,
                    "burst_multiplier": 1.1,
                    "fatigue_factor": 0.5,
                    "personality": "calm",
                    "ability": "heart_engine"
                }
            ]
        }"#;

        let pars: SimPars = serde_json::from_str(json).unwrap();
        assert_eq!(pars.race_pars.race_distance, 100.0);
        assert_eq!(pars.race_pars.max_racetime, 30.0);
        assert_eq!(pars.runner_pars_all.len(), 1);
        assert_eq!(pars.runner_pars_all[0].personality, Personality::Calm);
        assert_eq!(pars.runner_pars_all[0].ability, Some(Ability::HeartEngine));
    }

    #[test]
    fn test_race_pars_and_ability_may_be_omitted() {
        let json = r#"{
            "runner_pars_all": [
                {
                    "name": "Plain",
                    "system": "Muscular",
                    "lane": 1,
                    "acceleration": 5.0,
                    "top_speed": 10.0,
                    "stamina_max": 100.0,
                    "stamina_regen": 10.0,
                    "burst_multiplier": 1.0,
                    "fatigue_factor": 0.0,
                    "personality": "steady"
                }
            ]
        }"#;

        let pars: SimPars = serde_json::from_str(json).unwrap();
        assert_eq!(pars.race_pars.race_distance, 200.0);
        assert_eq!(pars.race_pars.max_racetime, 40.0);
        assert_eq!(pars.runner_pars_all[0].ability, None);
    }

    #[test]
    fn test_unknown_ability_tag_is_rejected() {
        let json = r#"{
            "runner_pars_all": [
                {
                    "name": "Plain",
                    "system": "Muscular",
                    "lane": 1,
                    "acceleration": 5.0,
                    "top_speed": 10.0,
                    "stamina_max": 100.0,
                    "stamina_regen": 10.0,
                    "burst_multiplier": 1.0,
                    "fatigue_factor": 0.0,
                    "personality": "steady",
                    "ability": "x_ray_vision"
                }
            ]
        }"#;

        assert!(serde_json::from_str::<SimPars>(json).is_err());
    }
}
