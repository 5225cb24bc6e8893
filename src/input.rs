use crate::pendulum::Pendulum;
use crate::types::SimParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendulumId {
    First,
    Second,
}

impl PendulumId {
    pub fn index(self) -> usize {
        match self {
            PendulumId::First => 0,
            PendulumId::Second => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(PendulumId),
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn pointer_pressed(
        &mut self,
        x: f32,
        y: f32,
        pendulums: &mut [Pendulum; 2],
        params: &SimParams,
    ) {
        if self.state != DragState::Idle {
            return;
        }

        for id in [PendulumId::First, PendulumId::Second] {
            let index = id.index();
            if params.active[index] && pendulums[index].hit_test(x, y) {
                pendulums[index].grab();
                self.state = DragState::Dragging(id);
                return;
            }
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32, pendulums: &mut [Pendulum; 2]) {
        if let DragState::Dragging(id) = self.state {
            pendulums[id.index()].set_angle_to(x, y);
        }
    }

    pub fn pointer_released(&mut self, pendulums: &mut [Pendulum; 2]) {
        if let DragState::Dragging(id) = self.state {
            pendulums[id.index()].release();
            self.state = DragState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_4;

    use approx::assert_relative_eq;
    use eframe::egui::Color32;

    use super::*;

    fn test_pendulums() -> [Pendulum; 2] {
        [
            Pendulum::new(
                (400.0, 0.0),
                300.0,
                20.0,
                FRAC_PI_4,
                true,
                [Color32::BLUE, Color32::RED],
            ),
            Pendulum::new(
                (400.0, 0.0),
                300.0,
                20.0,
                FRAC_PI_4,
                true,
                [Color32::YELLOW, Color32::RED],
            ),
        ]
    }

    fn bob_of(pendulums: &[Pendulum; 2], index: usize) -> (f32, f32) {
        pendulums[index].bob_position()
    }

    #[test]
    fn press_on_a_bob_starts_a_drag() {
        let mut pendulums = test_pendulums();
        let mut controller = DragController::default();
        let params = SimParams::default();
        let (x, y) = bob_of(&pendulums, 0);

        controller.pointer_pressed(x, y, &mut pendulums, &params);

        assert_eq!(controller.state(), DragState::Dragging(PendulumId::First));
        assert_eq!(pendulums[0].color(), Color32::RED);
    }

    #[test]
    fn press_away_from_bobs_stays_idle() {
        let mut pendulums = test_pendulums();
        let mut controller = DragController::default();
        let params = SimParams::default();

        controller.pointer_pressed(400.0, 5.0, &mut pendulums, &params);

        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn overlapping_bobs_prefer_the_first_pendulum() {
        let mut pendulums = test_pendulums();
        let mut controller = DragController::default();
        let params = SimParams::default();
        let (x, y) = bob_of(&pendulums, 0);

        controller.pointer_pressed(x, y, &mut pendulums, &params);
        controller.pointer_moved(400.0, 400.0, &mut pendulums);

        assert_relative_eq!(pendulums[0].angle(), 0.0);
        assert_relative_eq!(pendulums[1].angle(), FRAC_PI_4);
    }

    #[test]
    fn inactive_pendulums_are_not_drag_candidates() {
        let mut pendulums = test_pendulums();
        let mut controller = DragController::default();
        let params = SimParams {
            active: [false, true],
            ..SimParams::default()
        };
        let (x, y) = bob_of(&pendulums, 0);

        controller.pointer_pressed(x, y, &mut pendulums, &params);

        assert_eq!(controller.state(), DragState::Dragging(PendulumId::Second));
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut pendulums = test_pendulums();
        let mut controller = DragController::default();

        controller.pointer_moved(700.0, 0.0, &mut pendulums);

        assert_relative_eq!(pendulums[0].angle(), FRAC_PI_4);
        assert_relative_eq!(pendulums[1].angle(), FRAC_PI_4);
    }

    #[test]
    fn release_ends_the_drag_and_frees_the_bob() {
        let mut pendulums = test_pendulums();
        let mut controller = DragController::default();
        let params = SimParams::default();
        let (x, y) = bob_of(&pendulums, 0);

        controller.pointer_pressed(x, y, &mut pendulums, &params);
        controller.pointer_moved(400.0, 400.0, &mut pendulums);
        controller.pointer_released(&mut pendulums);

        assert_eq!(controller.state(), DragState::Idle);

        pendulums[0].set_angle_to(700.0, 0.0);
        pendulums[0].advance(&params);
        assert!(pendulums[0].angular_velocity() != 0.0);
    }

    #[test]
    fn second_press_while_dragging_is_ignored() {
        let mut pendulums = test_pendulums();
        let mut controller = DragController::default();
        let params = SimParams::default();
        let (x, y) = bob_of(&pendulums, 0);

        controller.pointer_pressed(x, y, &mut pendulums, &params);
        controller.pointer_moved(100.0, 0.0, &mut pendulums);
        let (bx, by) = bob_of(&pendulums, 1);
        controller.pointer_pressed(bx, by, &mut pendulums, &params);

        assert_eq!(controller.state(), DragState::Dragging(PendulumId::First));
        assert_eq!(pendulums[1].color(), Color32::YELLOW);
    }
}
