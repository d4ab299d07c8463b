use verlet_solver::*;

fn main() -> Result<()> {
    let mut solver = Solver::new(
        SolverConfig::default()
            .with_constraint(Vec2::new(500.0, 400.0), 350.0)
            .with_sub_steps(8),
    )?;
    solver.spawn(Vec2::new(500.0, 200.0), 5.0, Vec2::new(0.0, 500.0))?;

    for _ in 0..120 {
        solver.update();
    }

    let particle = &solver.particles()[0];
    let dist = particle.position.distance(solver.constraint().center);
    println!(
        "Particle settled at {:?}, {:.3} from the centre (limit {:.1})",
        particle.position,
        dist,
        solver.constraint().radius - particle.radius()
    );
    Ok(())
}
