use eframe::egui::Color32;

use crate::energy::Energy;
use crate::types::SimParams;

pub const GRAVITY: f32 = 0.4;

const DAMPING_AIR: f32 = 0.995;
const DAMPING_NONE: f32 = 1.0;
const MIN_LENGTH: f32 = 1.0;
const MIN_MASS: f32 = 1.0;

pub struct Pendulum {
    origin_x: f32,
    origin_y: f32,
    length: f32,
    angle: f32,
    angular_velocity: f32,
    angular_acceleration: f32,
    damping: f32,
    mass: f32,
    is_dragging: bool,
    colors: [Color32; 2],
    color_index: usize,
    initial_angle: f32,
}

impl Pendulum {
    pub fn new(
        origin: (f32, f32),
        length: f32,
        mass: f32,
        angle: f32,
        air_resistance: bool,
        colors: [Color32; 2],
    ) -> Self {
        Self {
            origin_x: origin.0,
            origin_y: origin.1,
            length: length.max(MIN_LENGTH),
            angle,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            damping: damping_for(air_resistance),
            mass: mass.max(MIN_MASS),
            is_dragging: false,
            colors,
            color_index: 0,
            initial_angle: angle,
        }
    }

    pub fn advance(&mut self, params: &SimParams) {
        if self.is_dragging || !params.animating {
            return;
        }

        self.angular_acceleration = -(GRAVITY / self.length) * self.angle.sin();
        self.angular_velocity += self.angular_acceleration * params.speed_multiplier;
        self.angular_velocity *= self.damping;
        self.angle += self.angular_velocity;
    }

    pub fn bob_position(&self) -> (f32, f32) {
        (
            self.origin_x + self.length * self.angle.sin(),
            self.origin_y + self.length * self.angle.cos(),
        )
    }

    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        let (bob_x, bob_y) = self.bob_position();
        let dx = x - bob_x;
        let dy = y - bob_y;
        (dx * dx + dy * dy).sqrt() < self.mass
    }

    pub fn set_angle_to(&mut self, x: f32, y: f32) {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        self.angle = dx.atan2(dy);
        self.angular_velocity = 0.0;
    }

    pub fn grab(&mut self) {
        self.is_dragging = true;
        self.color_index = (self.color_index + 1) % self.colors.len();
    }

    pub fn release(&mut self) {
        self.is_dragging = false;
    }

    pub fn freeze(&mut self) {
        self.angular_velocity = 0.0;
    }

    pub fn reset(&mut self, air_resistance: bool) {
        self.angle = self.initial_angle;
        self.angular_velocity = 0.0;
        self.angular_acceleration = 0.0;
        self.damping = damping_for(air_resistance);
    }

    pub fn energy(&self) -> Energy {
        let height = self.length * (1.0 - self.angle.cos());
        let potential = self.mass * GRAVITY * height;
        let linear_velocity = self.angular_velocity * self.length;
        let kinetic = 0.5 * self.mass * linear_velocity * linear_velocity;

        Energy {
            potential,
            kinetic,
            total: potential + kinetic,
        }
    }

    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin_x = x;
        self.origin_y = y;
    }

    pub fn set_length(&mut self, length: f32) {
        self.length = length.max(MIN_LENGTH);
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.max(MIN_MASS);
    }

    pub fn set_air_resistance(&mut self, enabled: bool) {
        self.damping = damping_for(enabled);
    }

    pub fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn angular_acceleration(&self) -> f32 {
        self.angular_acceleration
    }

    pub fn color(&self) -> Color32 {
        self.colors[self.color_index]
    }
}

fn damping_for(air_resistance: bool) -> f32 {
    if air_resistance {
        DAMPING_AIR
    } else {
        DAMPING_NONE
    }
}
