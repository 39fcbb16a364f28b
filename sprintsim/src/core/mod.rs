pub mod handle_race;
pub mod profile;
pub mod race;
pub mod runner;
