use clap::Parser;
use plotters::prelude::*;
use sprintsim::core::handle_race::handle_race;
use sprintsim::interfaces::live::RaceState;
use sprintsim::post::race_result::RaceResult;
use sprintsim::pre::read_sim_pars::read_sim_pars;
use sprintsim::pre::roster::default_sim_pars;
use sprintsim::pre::sim_opts::SimOpts;
use std::thread;
use std::time::Instant;

const TRACK_BAR_WIDTH: usize = 50;

/// export_results_plot writes a position-over-time plot of the recorded
/// timeline to a PNG file in output/. Returns the path to the written file.
fn export_results_plot(result: &RaceResult) -> anyhow::Result<String> {
    let out_dir = std::path::Path::new("output");
    std::fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join("race_plot.png");

    let t_max = result
        .frames
        .last()
        .map(|f| f.time + result.timestep_size)
        .unwrap_or(1.0);
    let y_max = result.race_distance * 1.02;

    let root = BitMapBackend::new(&out_path, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Race progress", ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Distance (m)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    // finish line
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, result.race_distance), (t_max, result.race_distance)],
        BLACK.stroke_width(2),
    )))?;

    let palette = Palette99::pick;
    for (i, rec) in result.records.iter().enumerate() {
        let series: Vec<(f64, f64)> = result
            .frames
            .iter()
            .map(|frame| (frame.time, frame.positions[i]))
            .collect();
        chart
            .draw_series(LineSeries::new(series.into_iter(), palette(i)))?
            .label(format!("{} ({})", rec.name, rec.system))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], palette(i)));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", 16))
        .position(plotters::chart::SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(out_path.to_string_lossy().into_owned())
}

/// render_race_state redraws the live terminal view: one colored progress bar
/// per runner plus a clock line. Subsequent calls overwrite the previous
/// frame via ANSI cursor movement.
fn render_race_state(state: &RaceState, race_distance: f64, first_frame: bool) {
    if !first_frame {
        print!("\x1B[{}A", state.runner_states.len() + 1);
    }

    println!(
        "t = {:6.1}s   race progress {:5.1}%          ",
        state.time,
        state.race_prog * 100.0
    );

    for rs in state.runner_states.iter() {
        let frac = if race_distance > 0.0 {
            (rs.position / race_distance).min(1.0)
        } else {
            1.0
        };
        let filled = (frac * TRACK_BAR_WIDTH as f64) as usize;
        let bar: String = (0..TRACK_BAR_WIDTH)
            .map(|i| if i < filled { '=' } else { ' ' })
            .collect();
        let marker = if rs.finished { "F" } else { ">" };

        println!(
            "\x1B[38;2;{};{};{}m{:<10}\x1B[0m |{}{}| {:6.1}m  stamina {:5.1}",
            rs.color.r, rs.color.g, rs.color.b, rs.name, bar, marker, rs.position, rs.stamina
        );
    }
}

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get simulation options from the command line arguments
    let sim_opts: SimOpts = SimOpts::parse();

    // get simulation parameters
    let sim_pars = if let Some(parfile_path) = &sim_opts.parfile_path {
        println!("INFO: Reading simulation parameters from {:?}", parfile_path);
        read_sim_pars(parfile_path)?
    } else {
        println!("INFO: No parameter file provided, using the built-in body-systems roster");
        default_sim_pars()
    };

    // print race details
    println!(
        "INFO: Simulating a {:.0}m sprint with {} runners and a time step size of {:.3}s",
        sim_pars.race_pars.race_distance,
        sim_pars.runner_pars_all.len(),
        sim_opts.timestep_size
    );

    // EXECUTION -----------------------------------------------------------------------------------
    if !sim_opts.watch {
        // NON-WATCH CASE - run the race flat-out
        let t_start = Instant::now();

        let race_result = handle_race(
            &sim_pars,
            sim_opts.timestep_size,
            sim_opts.debug,
            None,
            1.0,
        )?;

        println!("INFO: Execution time: {}ms", t_start.elapsed().as_millis());

        race_result.print_placing_table();

        if sim_opts.export_csv {
            match race_result.write_frames_to_csv(None) {
                Ok(path) => println!("INFO: Timeline written to {}", path),
                Err(e) => eprintln!("WARNING: Failed to write timeline CSV: {}", e),
            }
        }
        if sim_opts.export_plot {
            match export_results_plot(&race_result) {
                Ok(path) => println!("INFO: Plot written to {}", path),
                Err(e) => eprintln!("WARNING: Failed to write plot: {}", e),
            }
        }
    } else {
        // WATCH CASE - real-time simulation streamed to the terminal
        let (tx, rx) = flume::unbounded();

        let sim_opts_thread = sim_opts.clone();
        let sim_pars_thread = sim_pars.clone();

        let _ = thread::spawn(move || {
            handle_race(
                &sim_pars_thread,
                sim_opts_thread.timestep_size,
                false,
                Some(&tx),
                sim_opts_thread.realtime_factor,
            )
        });

        let race_distance = sim_pars.race_pars.race_distance;
        let mut first_frame = true;
        for state in rx.iter() {
            if let Some(ref result) = state.final_result {
                render_race_state(&state, race_distance, first_frame);
                result.print_placing_table();
                break;
            }
            render_race_state(&state, race_distance, first_frame);
            first_frame = false;
        }
    }

    Ok(())
}
