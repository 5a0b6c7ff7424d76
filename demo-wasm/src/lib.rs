use springbox::{NoOpStepObserver, SimConfig, Solver, Spring, Vec3};
use wasm_bindgen::prelude::*;

// ---- Bouncing Lattice Demo ----
//
// A small cube lattice of particles joined by springs, dropped inside the
// unit box. The renderer reads back flattened positions each frame.

#[wasm_bindgen]
pub struct LatticeDemo {
    solver: Solver<f32>,
    positions: Vec<Vec3<f32>>,
    velocities: Vec<Vec3<f32>>,
    springs: Vec<Spring<f32>>,
}

#[wasm_bindgen]
impl LatticeDemo {
    /// A `side` x `side` x `side` lattice with the given spacing, centered
    /// near the top of the box.
    #[wasm_bindgen(constructor)]
    pub fn new(side: usize, spacing: f32) -> Self {
        let side = side.max(2);
        let offset = spacing * (side - 1) as f32 * 0.5;
        let index = |x: usize, y: usize, z: usize| (x * side + y) * side + z;

        let mut positions = Vec::with_capacity(side * side * side);
        for x in 0..side {
            for y in 0..side {
                for z in 0..side {
                    positions.push(Vec3::new(
                        x as f32 * spacing - offset,
                        y as f32 * spacing - offset + 0.5,
                        z as f32 * spacing - offset,
                    ));
                }
            }
        }

        // Springs along each lattice edge; rest length from the initial pose.
        let mut springs = Vec::new();
        for x in 0..side {
            for y in 0..side {
                for z in 0..side {
                    if x + 1 < side {
                        springs.push(Spring::from_positions(index(x, y, z), index(x + 1, y, z), &positions));
                    }
                    if y + 1 < side {
                        springs.push(Spring::from_positions(index(x, y, z), index(x, y + 1, z), &positions));
                    }
                    if z + 1 < side {
                        springs.push(Spring::from_positions(index(x, y, z), index(x, y, z + 1), &positions));
                    }
                }
            }
        }

        let velocities = vec![Vec3::zero(); positions.len()];
        let config = SimConfig::new()
            .with_stiffness(300.0)
            .with_damping(1.5)
            .with_gravity(Vec3::new(0.0, -9.8, 0.0))
            .with_restitution(0.6)
            .with_sub_steps(4);

        LatticeDemo {
            solver: Solver::new(config),
            positions,
            velocities,
            springs,
        }
    }

    pub fn set_restitution(&mut self, restitution: f32) {
        self.solver.config_mut().restitution = restitution;
    }

    pub fn update(&mut self, dt: f32) {
        self.solver.step(
            dt,
            &mut self.positions,
            &mut self.velocities,
            &self.springs,
            &mut NoOpStepObserver,
        );
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns [x0, y0, z0, x1, y1, z1, ...] for every particle.
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.positions.len() * 3);
        for p in &self.positions {
            out.push(p.x);
            out.push(p.y);
            out.push(p.z);
        }
        out
    }
}
