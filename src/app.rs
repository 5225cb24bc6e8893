use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32};

use crate::clock::StepClock;
use crate::energy;
use crate::input::{DragController, DragState};
use crate::pendulum::Pendulum;
use crate::scene;
use crate::types::SimParams;

const RESTART_DELAY: Duration = Duration::from_millis(350);
const INITIAL_ANGLES: [f32; 2] = [FRAC_PI_4, FRAC_PI_6];
const PALETTES: [[Color32; 2]; 2] = [
    [Color32::BLUE, Color32::RED],
    [Color32::YELLOW, Color32::RED],
];

pub struct PendulumApp {
    pendulums: [Pendulum; 2],
    params: SimParams,
    drag: DragController,
    clock: StepClock,
    resume_at: Option<Instant>,
}

impl Default for PendulumApp {
    fn default() -> Self {
        let params = SimParams::default();
        let pendulums = [0, 1].map(|index| {
            Pendulum::new(
                (0.0, 0.0),
                params.lengths[index],
                params.masses[index],
                INITIAL_ANGLES[index],
                params.air_resistance,
                PALETTES[index],
            )
        });

        Self {
            pendulums,
            params,
            drag: DragController::default(),
            clock: StepClock::default(),
            resume_at: None,
        }
    }
}

impl PendulumApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn play_pause(&mut self) {
        self.params.animating = !self.params.animating;

        if self.params.animating {
            self.clock.reset();
        } else {
            for pendulum in &mut self.pendulums {
                pendulum.freeze();
            }
        }
    }

    fn restart(&mut self) {
        self.params.animating = false;
        for pendulum in &mut self.pendulums {
            pendulum.reset(self.params.air_resistance);
        }
        self.params.reset_config();
        self.resume_at = Some(Instant::now() + RESTART_DELAY);
    }

    fn step_simulation(&mut self, frame_dt: f32) {
        for (index, pendulum) in self.pendulums.iter_mut().enumerate() {
            pendulum.set_length(self.params.lengths[index]);
            pendulum.set_mass(self.params.masses[index]);
            pendulum.set_air_resistance(self.params.air_resistance);
        }

        let steps = self.clock.consume_steps(frame_dt, self.params.animating);
        for _ in 0..steps {
            for (index, pendulum) in self.pendulums.iter_mut().enumerate() {
                if self.params.active[index] {
                    pendulum.advance(&self.params);
                }
            }
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simulation");
        ui.horizontal(|ui| {
            if ui
                .button(if self.params.animating { "Pause" } else { "Play" })
                .clicked()
            {
                self.play_pause();
            }

            if ui.button("Restart").clicked() {
                self.restart();
            }
        });

        ui.horizontal(|ui| {
            if ui
                .button(format!("Speed ×{}", self.params.speed_multiplier))
                .clicked()
            {
                self.params.cycle_speed();
            }

            if ui.button("Remove pendulum").clicked() {
                self.params.remove_one_pendulum();
            }
        });

        ui.checkbox(&mut self.params.air_resistance, "air resistance");
        ui.checkbox(&mut self.params.show_force_diagram, "force diagram");
        ui.checkbox(&mut self.params.show_values, "show values");

        ui.separator();
        ui.heading("Pendulum 1");
        ui.add(egui::Slider::new(&mut self.params.lengths[0], 100.0..=500.0).text("length"));
        ui.add(egui::Slider::new(&mut self.params.masses[0], 10.0..=50.0).text("mass"));

        ui.separator();
        ui.heading("Pendulum 2");
        ui.add(egui::Slider::new(&mut self.params.lengths[1], 100.0..=500.0).text("length"));
        ui.add(egui::Slider::new(&mut self.params.masses[1], 10.0..=50.0).text("mass"));
    }

    fn draw_energy_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Energy");

        let energy = energy::combined(&self.pendulums, self.params.active);
        let (response, painter) = ui.allocate_painter(scene::CHART_SIZE, egui::Sense::hover());
        let painter = painter.with_clip_rect(response.rect);
        scene::draw_energy_chart(&painter, response.rect, energy, ui.visuals().extreme_bg_color);

        ui.label(format!("potential {:.0}", energy.potential));
        ui.label(format!("kinetic {:.0}", energy.kinetic));
        ui.label(format!("total {:.0}", energy.total));
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let rect = response.rect;
        let painter = painter.with_clip_rect(rect);

        painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

        let origin = egui::pos2(rect.center().x, rect.top() + 12.0);
        for pendulum in &mut self.pendulums {
            pendulum.set_origin(origin.x, origin.y);
        }

        scene::draw_angle_scale(&painter, origin, ui.visuals().weak_text_color());

        for (index, pendulum) in self.pendulums.iter().enumerate() {
            if self.params.active[index] {
                scene::draw_pendulum(&painter, pendulum, ui.visuals().text_color());
                if self.params.show_force_diagram {
                    scene::draw_force_diagram(&painter, pendulum);
                }
            }
        }

        if self.params.show_values {
            let mut slot = 0;
            for (index, pendulum) in self.pendulums.iter().enumerate() {
                if self.params.active[index] {
                    scene::draw_value_readout(
                        &painter,
                        pendulum,
                        slot,
                        rect.left_top(),
                        ui.visuals().text_color(),
                    );
                    slot += 1;
                }
            }
        }

        self.handle_drag(&response);

        match self.drag.state() {
            DragState::Dragging(_) => ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing),
            DragState::Idle => {
                let hovering_bob = response.hover_pos().is_some_and(|pos| {
                    self.pendulums.iter().enumerate().any(|(index, pendulum)| {
                        self.params.active[index] && pendulum.hit_test(pos.x, pos.y)
                    })
                });
                if hovering_bob {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                }
            }
        }
    }

    fn handle_drag(&mut self, response: &egui::Response) {
        if response.drag_started() {
            match response.interact_pointer_pos() {
                Some(pos) => {
                    self.drag
                        .pointer_pressed(pos.x, pos.y, &mut self.pendulums, &self.params);
                }
                None => log::warn!("drag started without a pointer position"),
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.drag.pointer_moved(pos.x, pos.y, &mut self.pendulums);
            }
        } else if response.drag_stopped() {
            self.drag.pointer_released(&mut self.pendulums);
        }
    }
}

impl eframe::App for PendulumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(resume_at) = self.resume_at {
            if Instant::now() >= resume_at {
                self.resume_at = None;
                self.params.animating = true;
                self.clock.reset();
            } else {
                ctx.request_repaint_after(resume_at.saturating_duration_since(Instant::now()));
            }
        }

        let frame_dt = ctx.input(|i| i.stable_dt);
        self.step_simulation(frame_dt);

        egui::SidePanel::right("controls")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_controls(ui);
                    });
            });

        egui::SidePanel::left("energy")
            .resizable(false)
            .exact_width(224.0)
            .show(ctx, |ui| {
                self.draw_energy_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        if self.params.animating {
            ctx.request_repaint();
        }
    }
}
