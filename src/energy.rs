use crate::pendulum::Pendulum;

pub const MAX_ENERGY_SCALE: f32 = 5000.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Energy {
    pub potential: f32,
    pub kinetic: f32,
    pub total: f32,
}

pub fn combined(pendulums: &[Pendulum; 2], active: [bool; 2]) -> Energy {
    let mut sum = Energy::default();

    for (pendulum, active) in pendulums.iter().zip(active) {
        if active {
            let energy = pendulum.energy();
            sum.potential += energy.potential;
            sum.kinetic += energy.kinetic;
            sum.total += energy.total;
        }
    }

    sum
}

pub fn bar_heights(energy: Energy, chart_height: f32) -> [f32; 3] {
    [
        energy.potential / MAX_ENERGY_SCALE * chart_height,
        energy.kinetic / MAX_ENERGY_SCALE * chart_height,
        energy.total / MAX_ENERGY_SCALE * chart_height,
    ]
}
