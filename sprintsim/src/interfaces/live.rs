use crate::post::race_result::RaceResult;

/// Maximum rate at which race states are pushed to a live viewer.
pub const MAX_STREAM_UPDATE_FREQUENCY: f64 = 20.0;

#[derive(Debug, Clone, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// RunnerState is the per-runner view sent to live viewers. The display
/// color is looked up here by system label; the engine entity itself never
/// carries presentation state.
#[derive(Debug, Clone, Default)]
pub struct RunnerState {
    pub name: String,
    pub system: String,
    pub lane: u32,
    pub color: RgbColor,
    pub position: f64,
    pub speed: f64,
    pub stamina: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RaceState {
    pub time: f64,
    pub race_prog: f64,
    pub runner_states: Vec<RunnerState>,

    // final results payload (sent once when the race finishes)
    pub final_result: Option<RaceResult>,
}

/// system_color maps a body-system label to its display color. Unknown
/// systems fall back to black.
pub fn system_color(system: &str) -> RgbColor {
    let hex = match system {
        "Cardiovascular" => "#E53935",
        "Respiratory" => "#1E88E5",
        "Muscular" => "#FFB300",
        "Nervous" => "#8E24AA",
        "Endocrine" => "#F4511E",
        "Immune" => "#43A047",
        "Digestive" => "#FB8C00",
        "Skeletal" => "#546E7A",
        _ => "#000000",
    };

    match hex.parse::<css_color_parser::Color>() {
        Ok(color) => RgbColor {
            r: color.r,
            g: color.g,
            b: color.b,
        },
        Err(_) => RgbColor::default(),
    }
}
