//! Simulated vertical flight that feeds the altitude indicator in the demo.

use flight_hud::display::altitude_indicator::AltitudeSource;
use flight_hud::display::params::Params;

/// A vehicle climbing under thrust, gravity and random gusts.
#[derive(Debug, Clone, Default)]
pub struct Flight {
    /// Height above the ground.
    pub altitude: f32,
    /// Vertical speed, positive upward.
    pub climb_rate: f32,
    /// Elapsed flight time in seconds.
    pub time: f32,
}

impl Flight {
    /// Advances the flight by `dt` seconds at the given throttle (0..=1).
    ///
    /// Uses the same ordering as entity kinematics: altitude moves with the
    /// climb rate from the previous step before acceleration updates it.
    pub fn step(&mut self, params: &Params, throttle: f32, dt: f32) {
        let gust = (rand::random::<f32>() * 2.0 - 1.0) * params.turbulence;
        let acceleration =
            throttle.clamp(0.0, 1.0) * params.thrust_acceleration - params.gravity + gust;

        self.altitude += self.climb_rate * dt;
        self.climb_rate += acceleration * dt;
        self.time += dt;

        // Sitting on the ground
        if self.altitude <= 0.0 {
            self.altitude = 0.0;
            self.climb_rate = self.climb_rate.max(0.0);
        }
    }
}

impl AltitudeSource for Flight {
    fn altitude(&self) -> f32 {
        self.altitude
    }
}
