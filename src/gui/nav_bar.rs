use eframe::egui::{
    self,
    emath::lerp,
    pos2,
    Align2,
    FontId,
    Margin,
    Sense,
    Stroke,
};

use crate::{
    core::{
        timing::{
            PULSE_DURATION,
            PULSE_PEAK_SCALE,
        },
        ElementHandle,
        LayoutRegistry,
    },
    gui::theme::Theme,
};

pub const NAV_HEIGHT: f32 = 56.0;
const ICON_SIZE: f32 = 22.0;
const LABEL_SIZE: f32 = 12.0;

pub struct NavAction {
    pub icon: &'static str,
    pub label: &'static str,
    pub is_bookmark: bool,
}

pub const NAV_ACTIONS: [NavAction; 5] = [
    NavAction { icon: "🏠", label: "Home", is_bookmark: false },
    NavAction { icon: "🔍", label: "Recommended", is_bookmark: false },
    NavAction { icon: "➕", label: "Post", is_bookmark: false },
    NavAction { icon: "🔖", label: "List", is_bookmark: true },
    NavAction { icon: "👤", label: "My Page", is_bookmark: false },
];

/// Whether a pulse started at `started_at` is still running at `now`.
/// Matches the board's pulse-off deadline exactly.
pub fn pulse_running(started_at: f64, now: f64) -> bool {
    now >= started_at && now < started_at + PULSE_DURATION
}

/// Scale of the bookmark at `now` for a pulse started at `started_at`: 1 → peak → 1.
pub fn pulse_scale(started_at: f64, now: f64) -> f32 {
    if !pulse_running(started_at, now) {
        return 1.0;
    }
    let p = (((now - started_at) / PULSE_DURATION) as f32).min(1.0);
    if p < 0.5 {
        lerp(1.0..=PULSE_PEAK_SCALE, p * 2.0)
    } else {
        lerp(PULSE_PEAK_SCALE..=1.0, (p - 0.5) * 2.0)
    }
}

/// Starts a pulse on each rising edge of the board's pulse flag.
#[derive(Debug, Default)]
pub struct PulseAnimator {
    flag: bool,
    started_at: Option<f64>,
}

impl PulseAnimator {
    pub fn observe(&mut self, flag: bool, now: f64) {
        if flag && !self.flag {
            self.started_at = Some(now);
        }
        self.flag = flag;
    }

    pub fn scale(&self, now: f64) -> f32 {
        self.started_at.map_or(1.0, |start| pulse_scale(start, now))
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.started_at.is_some_and(|start| pulse_running(start, now))
    }
}

#[derive(Debug, Default)]
pub struct NavBar {
    pulse: PulseAnimator,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.pulse.is_animating(now)
    }

    /// Draws the bar along the bottom edge and records the bookmark bounds.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        pulsing: bool,
        now: f64,
        layout: &mut LayoutRegistry,
    ) {
        self.pulse.observe(pulsing, now);
        let bookmark_scale = self.pulse.scale(now);

        let frame = egui::Frame::NONE.fill(theme.surface(ctx)).inner_margin(Margin::symmetric(8, 0));

        egui::TopBottomPanel::bottom("nav_bar")
            .exact_height(NAV_HEIGHT)
            .show_separator_line(false)
            .frame(frame)
            .show(ctx, |ui| {
                let bar = ui.max_rect();
                ui.painter().hline(
                    bar.x_range(),
                    bar.top(),
                    Stroke::new(1.0, theme.divider(ctx)),
                );

                ui.columns(NAV_ACTIONS.len(), |columns| {
                    for (column, action) in columns.iter_mut().zip(NAV_ACTIONS.iter()) {
                        let scale = if action.is_bookmark { bookmark_scale } else { 1.0 };
                        let response = nav_action(column, theme, action, scale);

                        if action.is_bookmark {
                            layout.record(ElementHandle::Bookmark, response.rect.into());
                        }
                    }
                });
            });
    }
}

fn nav_action(
    ui: &mut egui::Ui,
    theme: &Theme,
    action: &NavAction,
    scale: f32,
) -> egui::Response {
    let size = egui::vec2(ui.available_width(), NAV_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let center = rect.center();
    let painter = ui.painter();

    // Icon and label scale together around the action's centre.
    let icon_pos = center + (pos2(center.x, rect.top() + 18.0) - center) * scale;
    let label_pos = center + (pos2(center.x, rect.bottom() - 13.0) - center) * scale;

    painter.text(
        icon_pos,
        Align2::CENTER_CENTER,
        action.icon,
        FontId::proportional(ICON_SIZE * scale),
        theme.muted(ui.ctx()),
    );
    painter.text(
        label_pos,
        Align2::CENTER_CENTER,
        action.label,
        FontId::proportional(LABEL_SIZE * scale),
        theme.muted(ui.ctx()),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            BoundingBox,
            CardBoard,
            CardId,
            Measure,
        },
        gui::headless::{
            screen_input,
            SCREEN_HEIGHT,
        },
    };

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn pulse_rises_and_settles() {
        assert!(close(pulse_scale(0.0, 0.0), 1.0));
        assert!(close(pulse_scale(0.0, PULSE_DURATION / 4.0), 1.2));
        assert!(close(pulse_scale(0.0, PULSE_DURATION / 2.0), PULSE_PEAK_SCALE));
        assert!(close(pulse_scale(0.0, PULSE_DURATION * 0.75), 1.2));
        assert_eq!(pulse_scale(0.0, PULSE_DURATION), 1.0);
        assert_eq!(pulse_scale(0.0, -0.1), 1.0);
    }

    #[test]
    fn pulse_ends_with_the_board_pulse_flag() {
        let bookmark = BoundingBox::new(700.0, 300.0, 40.0, 40.0);
        let mut layout = LayoutRegistry::new();
        layout.record(ElementHandle::Bookmark, bookmark);

        for i in 0..1000 {
            let t0 = i as f64 * 0.1;
            let deadline = t0 + PULSE_DURATION;
            let mut board = CardBoard::default();
            let mut pulse = PulseAnimator::default();

            board.activate(CardId(1), bookmark, &layout, t0).unwrap();
            pulse.observe(board.is_pulsing(), t0);

            board.tick(deadline);
            assert!(!board.is_pulsing());
            assert!(!pulse.is_animating(deadline), "pulse still running for t0 = {}", t0);
            assert_eq!(pulse.scale(deadline), 1.0);
        }
    }

    #[test]
    fn held_flag_does_not_restart_the_pulse() {
        let mut pulse = PulseAnimator::default();
        assert_eq!(pulse.scale(0.0), 1.0);

        pulse.observe(true, 1.0);
        assert!(pulse.is_animating(1.1));

        pulse.observe(true, 1.3);
        assert!(close(pulse.scale(1.2), PULSE_PEAK_SCALE));
        assert!(!pulse.is_animating(1.0 + PULSE_DURATION));

        pulse.observe(false, 1.5);
        pulse.observe(true, 2.0);
        assert!(pulse.is_animating(2.1));
        assert!(close(pulse.scale(2.2), PULSE_PEAK_SCALE));
    }

    #[test]
    fn exactly_one_bookmark_action() {
        let bookmarks: Vec<&str> =
            NAV_ACTIONS.iter().filter(|a| a.is_bookmark).map(|a| a.label).collect();
        assert_eq!(bookmarks, vec!["List"]);
    }

    #[test]
    fn bookmark_bounds_are_recorded_each_frame() {
        let ctx = egui::Context::default();
        let theme = Theme::default();
        let mut nav_bar = NavBar::new();
        let mut layout = LayoutRegistry::new();

        let _ = ctx.run(screen_input(0.0), |ctx| {
            layout.begin_frame();
            nav_bar.show(ctx, &theme, false, 0.0, &mut layout);
        });

        let bookmark = layout.measure(ElementHandle::Bookmark).expect("bookmark not recorded");
        assert!((bookmark.height - NAV_HEIGHT).abs() < 1.0);
        assert!((bookmark.top + bookmark.height - SCREEN_HEIGHT).abs() < 1.0);
        // Fourth of five columns.
        assert!(bookmark.left > 500.0 && bookmark.left < 800.0, "{:?}", bookmark);

        // A frame that skips the bar leaves nothing to measure.
        let _ = ctx.run(screen_input(0.1), |_ctx| layout.begin_frame());
        assert_eq!(layout.measure(ElementHandle::Bookmark), None);
    }
}
