use rand::{Rng, SeedableRng, rngs::StdRng};
use verlet_solver::*;

#[test]
fn every_particle_is_contained_after_projection() {
    let center = Vec2::new(500.0, 400.0);
    let mut solver = Solver::new(
        SolverConfig::default()
            .with_constraint(center, 350.0)
            .with_sub_steps(4),
    )
    .unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let position = Vec2::new(
            rng.random_range(-500.0..1500.0),
            rng.random_range(-500.0..1500.0),
        );
        let radius = rng.random_range(1.0..20.0);
        solver.add_particle(position, radius).unwrap();
    }

    solver.apply_constraint();

    let constraint = solver.constraint();
    for p in solver.particles() {
        assert!(
            constraint.contains(p, 1e-3),
            "particle at {:?} r={} outside boundary",
            p.position,
            p.radius()
        );
    }
}

#[test]
fn projection_keeps_direction_from_center() {
    let constraint = CircleConstraint::new(Vec2::ZERO, 10.0).unwrap();
    let mut p = Particle::new(Vec2::new(30.0, 40.0), 2.0).unwrap();
    assert!(constraint.apply(&mut p));

    // (30, 40) points along (0.6, 0.8); the rim for r=2 is 8 away.
    assert!((p.position - Vec2::new(4.8, 6.4)).length() < 1e-4);
}

#[test]
fn projection_damps_outward_motion() {
    let mut solver = Solver::new(
        SolverConfig::default()
            .with_gravity(Vec2::ZERO)
            .with_constraint(Vec2::ZERO, 100.0),
    )
    .unwrap();
    solver
        .spawn(Vec2::new(90.0, 0.0), 5.0, Vec2::new(600.0, 0.0))
        .unwrap();

    for _ in 0..20 {
        solver.update();
    }

    let p = &solver.particles()[0];
    // No bounce: the particle rests against the rim instead of heading back inward.
    assert!(p.displacement().x >= -1e-4);
    assert!((p.position.x - 95.0).abs() < 1e-3);
}
