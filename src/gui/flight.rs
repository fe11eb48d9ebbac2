//! The card ghost that flies from a saved card to the bookmark.
//!
//! [`frame_at`] is the pure keyframe function; [`FlightAnimator`] paints it on
//! the foreground layer and reports the end of each flight once.

use eframe::egui::{
    self,
    emath::{
        easing,
        lerp,
        Rot2,
    },
    epaint::TextShape,
    pos2,
    vec2,
    Color32,
    FontId,
    Pos2,
    Rect,
    Shape,
    Stroke,
};

use crate::{
    core::{
        timing::{
            FLIGHT_DURATION,
            FLIGHT_END_OPACITY,
            FLIGHT_END_ROTATION_DEG,
            FLIGHT_END_SCALE,
            FLIGHT_TARGET_OFFSET,
        },
        BoundingBox,
        CardId,
        FlightState,
    },
    gui::{
        save_card::{
            card_title,
            CARD_PADDING,
        },
        theme::Theme,
    },
};

const GHOST_RADIUS: f32 = 8.0;
const GHOST_TITLE_SIZE: f32 = 20.0;
const CORNER_SEGMENTS: usize = 6;

// Drop shadow: 8pt down, 20pt blur, 20% black, built from stacked outlines.
const SHADOW_OFFSET_Y: f32 = 8.0;
const SHADOW_BLUR: f32 = 20.0;
const SHADOW_ALPHA: f32 = 51.0;
const SHADOW_LAYERS: usize = 4;

/// One sampled state of a flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightFrame {
    /// Layout box before `scale` is applied.
    pub bounds: BoundingBox,
    pub scale: f32,
    pub opacity: f32,
    pub rotation_deg: f32,
}

impl FlightFrame {
    /// Box actually covered on screen, ignoring rotation.
    pub fn visual_bounds(&self) -> BoundingBox {
        self.bounds.scaled(self.scale)
    }
}

/// Where the flight ends: the bookmark box nudged up and left.
pub fn flight_target(dest: &BoundingBox) -> BoundingBox {
    dest.translated(-FLIGHT_TARGET_OFFSET, -FLIGHT_TARGET_OFFSET)
}

/// Same deadline test as the board's removal timer.
pub fn has_landed(flight: &FlightState, now: f64) -> bool {
    now >= flight.started_at + FLIGHT_DURATION
}

pub fn frame_at(flight: &FlightState, now: f64) -> FlightFrame {
    let progress = if has_landed(flight, now) {
        1.0
    } else {
        (flight.elapsed(now) / FLIGHT_DURATION).clamp(0.0, 1.0) as f32
    };
    let t = easing::cubic_in_out(progress);

    FlightFrame {
        bounds: flight.source.lerp(&flight_target(&flight.dest), t),
        scale: lerp(1.0..=FLIGHT_END_SCALE, t),
        opacity: lerp(1.0..=FLIGHT_END_OPACITY, t),
        rotation_deg: lerp(0.0..=FLIGHT_END_ROTATION_DEG, t),
    }
}

#[derive(Debug, Default)]
pub struct FlightAnimator {
    // Flight whose completion was already reported.
    reported: Option<(CardId, f64)>,
}

impl FlightAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per flight, on the first poll at or after its end.
    pub fn poll_completed(&mut self, flight: &FlightState, now: f64) -> bool {
        let key = (flight.card_id, flight.started_at);
        if self.reported == Some(key) || !has_landed(flight, now) {
            return false;
        }
        self.reported = Some(key);
        true
    }

    /// Paints `flight` above everything else.
    pub fn show(&self, ctx: &egui::Context, theme: &Theme, flight: &FlightState, now: f64) {
        let frame = frame_at(flight, now);
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("card_flight"),
        ));

        for (points, color) in ghost_polygons(&frame, theme.surface(ctx)) {
            painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        }
        paint_title(&painter, &frame, &card_title(flight.card_id), theme.foreground(ctx));
    }
}

/// Shadow, halo and body outlines, back to front, all rotated with the card.
fn ghost_polygons(frame: &FlightFrame, fill: Color32) -> Vec<(Vec<Pos2>, Color32)> {
    let rect = rect_of(&frame.visual_bounds());
    let center = rect.center();
    let rotation = Rot2::from_angle(frame.rotation_deg.to_radians());
    let radius = GHOST_RADIUS * frame.scale;
    let rotate = |p: Pos2| center + rotation * (p - center);

    let mut layers = Vec::with_capacity(SHADOW_LAYERS + 2);

    let shadow_rect = rect.translate(vec2(0.0, SHADOW_OFFSET_Y * frame.scale));
    let shadow_color = Color32::from_black_alpha((SHADOW_ALPHA / SHADOW_LAYERS as f32) as u8)
        .gamma_multiply(frame.opacity);
    for layer in (1..=SHADOW_LAYERS).rev() {
        let spread = SHADOW_BLUR * 0.5 * frame.scale * layer as f32 / SHADOW_LAYERS as f32;
        layers.push((rounded_outline(shadow_rect.expand(spread), radius + spread), shadow_color));
    }

    // 1pt halo stands in for the blur filter.
    let halo_fill = fill.gamma_multiply(frame.opacity * 0.35);
    layers.push((rounded_outline(rect.expand(1.0), radius + 1.0), halo_fill));
    layers.push((rounded_outline(rect, radius), fill.gamma_multiply(frame.opacity)));

    layers
        .into_iter()
        .map(|(points, color)| (points.into_iter().map(rotate).collect(), color))
        .collect()
}

fn paint_title(painter: &egui::Painter, frame: &FlightFrame, title: &str, text_color: Color32) {
    let rect = rect_of(&frame.visual_bounds());
    let center = rect.center();
    let angle = frame.rotation_deg.to_radians();
    let rotation = Rot2::from_angle(angle);

    let galley = painter.layout_no_wrap(
        title.to_owned(),
        FontId::proportional(GHOST_TITLE_SIZE * frame.scale),
        text_color.gamma_multiply(frame.opacity),
    );
    let padding = CARD_PADDING as f32 * frame.scale;
    let text_pos = center + rotation * (rect.min + vec2(padding, padding) - center);
    painter.add(TextShape::new(text_pos, galley, text_color).with_angle(angle));
}

/// Clockwise outline of a rounded rectangle, suitable for a convex polygon.
fn rounded_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let r = radius.clamp(0.0, rect.width().min(rect.height()) * 0.5);
    let corners = [
        (pos2(rect.right() - r, rect.top() + r), -90.0_f32),
        (pos2(rect.right() - r, rect.bottom() - r), 0.0),
        (pos2(rect.left() + r, rect.bottom() - r), 90.0),
        (pos2(rect.left() + r, rect.top() + r), 180.0),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (pivot, start_deg) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = (start_deg + 90.0 * step as f32 / CORNER_SEGMENTS as f32).to_radians();
            points.push(pivot + vec2(angle.cos(), angle.sin()) * r);
        }
    }
    points
}

fn rect_of(bounds: &BoundingBox) -> Rect {
    Rect::from_min_size(pos2(bounds.left, bounds.top), vec2(bounds.width, bounds.height))
}
