use std::fmt::Write;
use std::io::Write as IoWrite;
use std::path::Path;

use crate::core::profile::{Ability, Personality};
use crate::core::race::RaceFrame;
use anyhow::Context;
use helpers::general::{argsort, SortOrder};
use serde::{Deserialize, Serialize};

/// RunnerRecord is the final state of one runner that is required for
/// post-processing the results. `finish_time` stays `None` for a runner that
/// never reached the finish line within the time cap (DNF).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RunnerRecord {
    pub name: String,
    pub system: String,
    pub lane: u32,
    pub personality: Personality,
    pub ability: Option<Ability>,
    pub finish_time: Option<f64>,
}

/// PlacingRow is one printable row of the final placing table.
#[derive(Debug, Serialize, Clone)]
pub struct PlacingRow {
    pub place: u32,
    pub name: String,
    pub system: String,
    pub finish_time: String,
    pub personality: String,
    pub ability: String,
}

/// RaceResult contains all race information that is required for
/// post-processing: the final runner records (roster order) and the ordered
/// frame sequence recorded by the race loop.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RaceResult {
    pub race_distance: f64,
    pub timestep_size: f64,
    pub records: Vec<RunnerRecord>,
    pub frames: Vec<RaceFrame>,
}

impl RaceResult {
    /// placing_order returns the roster indices ordered by the placing rule:
    /// finishers ascending by finish time, non-finishers after all finishers,
    /// roster order preserved among ties (stable sort, no sentinel value).
    pub fn placing_order(&self) -> Vec<usize> {
        let keys: Vec<(u8, f64)> = self
            .records
            .iter()
            .map(|rec| match rec.finish_time {
                Some(t) => (0u8, t),
                None => (1u8, 0.0),
            })
            .collect();

        argsort(&keys, SortOrder::Ascending)
    }

    /// placing_table builds the placing rows in final order.
    pub fn placing_table(&self) -> Vec<PlacingRow> {
        self.placing_order()
            .iter()
            .enumerate()
            .map(|(place, &idx)| {
                let rec = &self.records[idx];
                PlacingRow {
                    place: place as u32 + 1,
                    name: rec.name.to_owned(),
                    system: rec.system.to_owned(),
                    finish_time: match rec.finish_time {
                        Some(t) => format!("{:.2}s", t),
                        None => "DNF".to_string(),
                    },
                    personality: rec.personality.to_string(),
                    ability: rec
                        .ability
                        .map(|a| a.to_string())
                        .unwrap_or_else(|| "none".to_string()),
                }
            })
            .collect()
    }

    fn format_placing_table(&self) -> String {
        let mut out = String::new();
        writeln!(&mut out, "RESULT: Final placing").unwrap();
        writeln!(
            &mut out,
            "{:>5}  {:<12} {:<15} {:>11}  {:<11} {:<20}",
            "Place", "Runner", "System", "Finish Time", "Personality", "Ability"
        )
        .unwrap();

        for row in self.placing_table() {
            writeln!(
                &mut out,
                "{:>5}  {:<12} {:<15} {:>11}  {:<11} {:<20}",
                row.place, row.name, row.system, row.finish_time, row.personality, row.ability
            )
            .unwrap();
        }

        out
    }

    /// print_placing_table prints the final placing table to the console.
    pub fn print_placing_table(&self) {
        print!("{}", self.format_placing_table());
    }

    /// write_placing_table_to_file writes the placing table to a text file in
    /// output/. Returns the path to the written file.
    pub fn write_placing_table_to_file(&self, path: Option<&Path>) -> anyhow::Result<String> {
        let out_dir = Path::new("output");
        std::fs::create_dir_all(out_dir)?;
        let out_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            out_dir.join("placing.txt")
        };

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&out_path)
            .context("Failed to open placing table output file!")?;
        file.write_all(self.format_placing_table().as_bytes())?;
        file.flush()?;

        Ok(out_path.to_string_lossy().into_owned())
    }

    /// write_frames_to_csv writes the recorded timeline to a CSV file in
    /// output/, one row per tick with position/stamina/speed columns per
    /// runner. Returns the path to the written file.
    pub fn write_frames_to_csv(&self, path: Option<&Path>) -> anyhow::Result<String> {
        let out_dir = Path::new("output");
        std::fs::create_dir_all(out_dir)?;
        let out_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            out_dir.join("race_timeline.csv")
        };

        let mut wtr =
            csv::Writer::from_path(&out_path).context("Failed to open timeline CSV file!")?;

        let mut header = vec!["time".to_string()];
        for rec in self.records.iter() {
            header.push(format!("pos_{}", rec.name));
            header.push(format!("stamina_{}", rec.name));
            header.push(format!("speed_{}", rec.name));
        }
        wtr.write_record(&header)?;

        for frame in self.frames.iter() {
            let mut row = vec![format!("{:.3}", frame.time)];
            for i in 0..self.records.len() {
                row.push(format!("{:.3}", frame.positions[i]));
                row.push(format!("{:.3}", frame.stamina[i]));
                row.push(format!("{:.3}", frame.speeds[i]));
            }
            wtr.write_record(&row)?;
        }
        wtr.flush()?;

        Ok(out_path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, finish_time: Option<f64>) -> RunnerRecord {
        RunnerRecord {
            name: name.to_string(),
            system: "Cardiovascular".to_string(),
            lane: 1,
            personality: Personality::Calm,
            ability: None,
            finish_time,
        }
    }

    fn result_with(records: Vec<RunnerRecord>) -> RaceResult {
        RaceResult {
            race_distance: 200.0,
            timestep_size: 0.1,
            records,
            frames: Vec::new(),
        }
    }

    #[test]
    fn test_finishers_rank_by_time_dnf_last() {
        let result = result_with(vec![
            record("A", Some(12.0)),
            record("B", None),
            record("C", Some(10.5)),
            record("D", Some(12.0)),
            record("E", None),
        ]);
        // C first, then the 12.0s tie in roster order, then the DNFs in
        // roster order
        assert_eq!(result.placing_order(), vec![2, 0, 3, 1, 4]);
    }

    #[test]
    fn test_all_dnf_keeps_roster_order() {
        let result = result_with(vec![record("A", None), record("B", None), record("C", None)]);
        assert_eq!(result.placing_order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_placing_table_rows() {
        let result = result_with(vec![record("A", Some(25.138)), record("B", None)]);
        let table = result.placing_table();

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].place, 1);
        assert_eq!(table[0].name, "A");
        assert_eq!(table[0].finish_time, "25.14s");
        assert_eq!(table[0].personality, "calm");
        assert_eq!(table[0].ability, "none");
        assert_eq!(table[1].place, 2);
        assert_eq!(table[1].finish_time, "DNF");
    }

    #[test]
    fn test_placing_table_shows_ability_tags() {
        let mut rec = record("A", Some(20.0));
        rec.ability = Some(Ability::AdrenalineSurge);
        rec.personality = Personality::Tactical;
        let table = result_with(vec![rec]).placing_table();
        assert_eq!(table[0].ability, "adrenaline_surge");
        assert_eq!(table[0].personality, "tactical");
    }
}
