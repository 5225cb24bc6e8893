pub const SPEED_CYCLE: [f32; 3] = [0.5, 1.0, 1.5];

pub const DEFAULT_LENGTH: f32 = 300.0;
pub const DEFAULT_MASS: f32 = 20.0;
pub const DEFAULT_SPEED: f32 = 1.0;

#[derive(Clone, Copy, Debug)]
pub struct SimParams {
    pub animating: bool,
    pub speed_multiplier: f32,
    pub air_resistance: bool,
    pub show_force_diagram: bool,
    pub show_values: bool,
    pub active: [bool; 2],
    pub lengths: [f32; 2],
    pub masses: [f32; 2],
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            animating: true,
            speed_multiplier: DEFAULT_SPEED,
            air_resistance: true,
            show_force_diagram: false,
            show_values: false,
            active: [true, true],
            lengths: [DEFAULT_LENGTH; 2],
            masses: [DEFAULT_MASS; 2],
        }
    }
}

impl SimParams {
    pub fn cycle_speed(&mut self) {
        let pos = SPEED_CYCLE
            .iter()
            .position(|step| *step == self.speed_multiplier)
            .unwrap_or(SPEED_CYCLE.len() - 1);
        self.speed_multiplier = SPEED_CYCLE[(pos + 1) % SPEED_CYCLE.len()];
    }

    pub fn remove_one_pendulum(&mut self) {
        if self.active[1] {
            self.active[1] = false;
        } else if self.active[0] {
            self.active[0] = false;
        }
    }

    pub fn reset_config(&mut self) {
        self.speed_multiplier = DEFAULT_SPEED;
        self.lengths = [DEFAULT_LENGTH; 2];
        self.masses = [DEFAULT_MASS; 2];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_speed_walks_the_full_cycle() {
        let mut params = SimParams {
            speed_multiplier: 0.5,
            ..SimParams::default()
        };

        params.cycle_speed();
        assert_eq!(params.speed_multiplier, 1.0);
        params.cycle_speed();
        assert_eq!(params.speed_multiplier, 1.5);
        params.cycle_speed();
        assert_eq!(params.speed_multiplier, 0.5);
    }

    #[test]
    fn cycle_speed_snaps_unknown_values_to_cycle_start() {
        let mut params = SimParams {
            speed_multiplier: 3.0,
            ..SimParams::default()
        };

        params.cycle_speed();
        assert_eq!(params.speed_multiplier, SPEED_CYCLE[0]);
    }

    #[test]
    fn remove_one_pendulum_deactivates_second_then_first() {
        let mut params = SimParams::default();

        params.remove_one_pendulum();
        assert_eq!(params.active, [true, false]);

        params.remove_one_pendulum();
        assert_eq!(params.active, [false, false]);

        params.remove_one_pendulum();
        assert_eq!(params.active, [false, false]);
    }

    #[test]
    fn reset_config_restores_defaults_without_touching_toggles() {
        let mut params = SimParams::default();
        params.lengths = [450.0, 120.0];
        params.masses = [44.0, 11.0];
        params.speed_multiplier = 1.5;
        params.air_resistance = false;
        params.active = [true, false];

        params.reset_config();

        assert_eq!(params.lengths, [DEFAULT_LENGTH; 2]);
        assert_eq!(params.masses, [DEFAULT_MASS; 2]);
        assert_eq!(params.speed_multiplier, DEFAULT_SPEED);
        assert!(!params.air_resistance);
        assert_eq!(params.active, [true, false]);
    }
}
