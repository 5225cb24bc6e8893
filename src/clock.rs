const STEP_RATE: f32 = 60.0;
const MAX_STEPS_PER_FRAME: u32 = 4;
const MAX_FRAME_DT: f32 = 0.25;

#[derive(Debug, Default)]
pub struct StepClock {
    accumulator: f32,
}

impl StepClock {
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    pub fn consume_steps(&mut self, frame_dt: f32, running: bool) -> u32 {
        if !running {
            self.accumulator = 0.0;
            return 0;
        }

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT) * STEP_RATE;
        let whole = self.accumulator.floor();
        self.accumulator -= whole;

        (whole as u32).min(MAX_STEPS_PER_FRAME)
    }
}
