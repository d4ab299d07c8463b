use verlet_solver::*;

const FRAME_RATE: u32 = 60;
const WINDOW_WIDTH: f32 = 1000.0;
const WINDOW_HEIGHT: f32 = 1000.0;

fn main() -> Result<()> {
    env_logger::init();

    let config = SolverConfig::default()
        .with_constraint(Vec2::new(WINDOW_WIDTH * 0.5, WINDOW_HEIGHT * 0.4), 350.0)
        .with_sub_steps(8)
        .with_update_rate(FRAME_RATE);
    let mut solver = Solver::new(config)?;
    let mut emitter = Emitter::new(EmitterConfig::default())?;

    // 20 seconds of simulated time, reporting once per simulated second.
    for frame in 1..=(20 * FRAME_RATE) {
        emitter.tick(&mut solver)?;
        solver.update();

        if frame % FRAME_RATE == 0 {
            println!(
                "t = {:5.2}s  particles = {:4}  contacts = {:6}  update = {:.2} ms",
                solver.time(),
                solver.particle_count(),
                solver.profiler().contacts_resolved,
                solver.profiler().total_frame_time.as_secs_f32() * 1000.0
            );
            solver.profiler().report();
        }
    }

    Ok(())
}
