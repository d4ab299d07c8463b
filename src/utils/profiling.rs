use std::time::{Duration, Instant};

/// Timing and workload counters gathered during a single `Solver::update`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepProfiler {
    pub gravity_time: Duration,
    pub collision_time: Duration,
    pub constraint_time: Duration,
    pub integration_time: Duration,
    pub total_frame_time: Duration,

    pub particle_count: usize,
    pub sub_steps: u32,
    pub pairs_checked: usize,
    pub contacts_resolved: usize,
}

impl StepProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_frame_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::info!(
            "solver: {} particles, {} sub-steps, {} pairs checked, {} contacts, {:.2} ms total",
            self.particle_count,
            self.sub_steps,
            self.pairs_checked,
            self.contacts_resolved,
            self.total_frame_time.as_secs_f32() * 1000.0
        );
        log::info!(
            "  gravity {:.1}% | collisions {:.1}% | constraint {:.1}% | integrate {:.1}%",
            (self.gravity_time.as_micros() as f32 / total_us) * 100.0,
            (self.collision_time.as_micros() as f32 / total_us) * 100.0,
            (self.constraint_time.as_micros() as f32 / total_us) * 100.0,
            (self.integration_time.as_micros() as f32 / total_us) * 100.0
        );
    }
}

/// Adds the lifetime of the guard to the referenced duration.
pub struct ScopedTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
