pub mod read_sim_pars;
pub mod roster;
pub mod sim_opts;
