use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::energy::{self, Energy};
use crate::pendulum::{Pendulum, GRAVITY};

pub const CHART_SIZE: Vec2 = egui::vec2(200.0, 300.0);

const ANGLE_SCALE_RADIUS: f32 = 540.0;
const SHADOW_OFFSET: f32 = 5.0;
const HIGHLIGHT_OFFSET: f32 = 10.0;
const BOB_RINGS: usize = 12;
const FORCE_SCALE: f32 = 6.0;

const BAR_WIDTH: f32 = 50.0;
const BAR_OFFSETS: [f32; 3] = [10.0, 70.0, 130.0];
const BAR_COLORS: [Color32; 3] = [
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 128, 0),
];

pub fn draw_angle_scale(painter: &Painter, origin: Pos2, color: Color32) {
    let arc: Vec<Pos2> = (0..=180)
        .step_by(3)
        .map(|deg| origin + scale_direction(deg) * ANGLE_SCALE_RADIUS)
        .collect();
    painter.add(egui::Shape::line(arc, Stroke::new(1.0, color)));

    for deg in (0..=180).step_by(10) {
        let dir = scale_direction(deg);
        let labeled = deg % 30 == 0;
        let tick_len = if labeled { 16.0 } else { 9.0 };

        painter.line_segment(
            [
                origin + dir * (ANGLE_SCALE_RADIUS - tick_len),
                origin + dir * ANGLE_SCALE_RADIUS,
            ],
            Stroke::new(1.0, color),
        );

        if labeled {
            painter.text(
                origin + dir * (ANGLE_SCALE_RADIUS - 32.0),
                Align2::CENTER_CENTER,
                format!("{deg}°"),
                FontId::proportional(12.0),
                color,
            );
        }
    }
}

pub fn draw_pendulum(painter: &Painter, pendulum: &Pendulum, rod_color: Color32) {
    let (origin_x, origin_y) = pendulum.origin();
    let (bob_x, bob_y) = pendulum.bob_position();
    let origin = egui::pos2(origin_x, origin_y);
    let bob = egui::pos2(bob_x, bob_y);

    painter.line_segment([origin, bob], Stroke::new(2.0, rod_color));
    draw_bob(painter, bob, pendulum.mass(), pendulum.color());
}

pub fn draw_force_diagram(painter: &Painter, pendulum: &Pendulum) {
    let (bob_x, bob_y) = pendulum.bob_position();
    let bob = egui::pos2(bob_x, bob_y);
    let angle = pendulum.angle();
    let weight = pendulum.mass() * GRAVITY;

    let to_pivot = egui::vec2(-angle.sin(), -angle.cos());
    let tangent = egui::vec2(angle.cos(), -angle.sin());

    let tension = weight * angle.cos()
        + pendulum.mass() * pendulum.angular_velocity().powi(2) * pendulum.length();

    let gravity_vec = egui::vec2(0.0, weight * FORCE_SCALE);
    let tension_vec = to_pivot * tension * FORCE_SCALE;
    let tangential_vec = tangent * (-weight * angle.sin()) * FORCE_SCALE;

    draw_force_arrow(painter, bob, gravity_vec, Color32::from_rgb(230, 100, 100), "mg");
    draw_force_arrow(painter, bob, tension_vec, Color32::from_rgb(110, 190, 255), "T");
    draw_force_arrow(painter, bob, tangential_vec, Color32::from_rgb(120, 220, 120), "F");
}

pub fn draw_value_readout(
    painter: &Painter,
    pendulum: &Pendulum,
    slot: usize,
    anchor: Pos2,
    color: Color32,
) {
    let energy = pendulum.energy();
    let line = format!(
        "#{}  angle {:+7.1}°  velocity {:+.4}  accel {:+.5}  energy {:8.1}",
        slot + 1,
        pendulum.angle().to_degrees(),
        pendulum.angular_velocity(),
        pendulum.angular_acceleration(),
        energy.total,
    );

    painter.text(
        anchor + egui::vec2(8.0, 8.0 + slot as f32 * 18.0),
        Align2::LEFT_TOP,
        line,
        FontId::monospace(12.0),
        color,
    );
}

pub fn draw_energy_chart(painter: &Painter, rect: Rect, energy: Energy, background: Color32) {
    painter.rect_filled(rect, 2.0, background);

    let heights = energy::bar_heights(energy, rect.height());
    for ((offset, height), color) in BAR_OFFSETS.into_iter().zip(heights).zip(BAR_COLORS) {
        let bar = Rect::from_min_max(
            egui::pos2(rect.left() + offset, rect.bottom() - height),
            egui::pos2(rect.left() + offset + BAR_WIDTH, rect.bottom()),
        );
        painter.rect_filled(bar, 0.0, color);
    }
}

fn scale_direction(deg: usize) -> Vec2 {
    let rad = (deg as f32).to_radians();
    egui::vec2(rad.cos(), rad.sin())
}

fn draw_bob(painter: &Painter, center: Pos2, radius: f32, color: Color32) {
    painter.circle_filled(
        center + egui::vec2(SHADOW_OFFSET, SHADOW_OFFSET),
        radius,
        Color32::from_black_alpha(70),
    );

    let highlight = egui::vec2(-1.0, -1.0) * (radius * 0.35).min(HIGHLIGHT_OFFSET);
    for ring in 0..BOB_RINGS {
        let t = ring as f32 / (BOB_RINGS - 1) as f32;
        painter.circle_filled(
            center + highlight * t,
            radius * (1.0 - 0.92 * t),
            shade(color, 1.0 - t),
        );
    }
}

fn draw_force_arrow(painter: &Painter, from: Pos2, vec: Vec2, color: Color32, label: &str) {
    if vec.length() < 1.0 {
        return;
    }

    painter.arrow(from, vec, Stroke::new(2.0, color));
    painter.text(
        from + vec + vec.normalized() * 10.0,
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(11.0),
        color,
    );
}

fn shade(color: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let anchors = [(0.0, Color32::WHITE), (0.3, color), (1.0, Color32::BLACK)];

    for pair in anchors.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t >= t0 && t <= t1 {
            return blend(c0, c1, (t - t0) / (t1 - t0));
        }
    }

    Color32::BLACK
}

fn blend(from: Color32, to: Color32, alpha: f32) -> Color32 {
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * alpha).round() as u8;
    Color32::from_rgb(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_hits_the_gradient_anchors() {
        let body = Color32::from_rgb(0, 0, 255);

        assert_eq!(shade(body, 0.0), Color32::WHITE);
        assert_eq!(shade(body, 0.3), body);
        assert_eq!(shade(body, 1.0), Color32::BLACK);
    }

    #[test]
    fn shade_blends_between_anchors() {
        let body = Color32::from_rgb(0, 0, 255);

        let toward_white = shade(body, 0.15);
        assert_eq!(toward_white.r(), 128);
        assert_eq!(toward_white.g(), 128);
        assert_eq!(toward_white.b(), 255);

        let toward_black = shade(body, 0.825);
        assert_eq!(toward_black.b(), 64);
        assert_eq!(toward_black.r(), 0);
    }

    #[test]
    fn shade_clamps_out_of_range_input() {
        let body = Color32::from_rgb(10, 200, 40);

        assert_eq!(shade(body, -2.0), Color32::WHITE);
        assert_eq!(shade(body, 7.0), Color32::BLACK);
    }
}
