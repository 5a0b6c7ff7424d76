use springbox::{NoOpStepObserver, SimConfig, Solver, Spring, Vec3};

fn run(steps: usize) -> (Vec<Vec3<f32>>, Vec<Vec3<f32>>) {
    let config = SimConfig::new()
        .with_stiffness(80.0)
        .with_damping(0.9)
        .with_gravity(Vec3::new(0.0, -9.8, 0.0))
        .with_restitution(0.6);
    let mut solver = Solver::new(config);

    let mut positions = vec![
        Vec3::new(-0.5, 0.8, 0.0),
        Vec3::new(0.0, 0.8, 0.1),
        Vec3::new(0.5, 0.8, -0.1),
    ];
    let mut velocities = vec![
        Vec3::new(0.3, 0.0, 0.0),
        Vec3::zero(),
        Vec3::new(-0.3, 0.1, 0.0),
    ];
    let springs = [
        Spring::new(0, 1, 0.4),
        Spring::new(1, 2, 0.4),
    ];

    for _ in 0..steps {
        solver.step(1.0 / 60.0, &mut positions, &mut velocities, &springs, &mut NoOpStepObserver);
    }
    (positions, velocities)
}

#[test]
fn identical_inputs_give_bit_identical_outputs() {
    let (pos_a, vel_a) = run(600);
    for _ in 0..4 {
        let (pos_b, vel_b) = run(600);
        for (a, b) in pos_a.iter().zip(pos_b.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
        for (a, b) in vel_a.iter().zip(vel_b.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}
