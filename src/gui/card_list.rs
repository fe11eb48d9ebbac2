use eframe::egui;

use crate::{
    core::{
        CardId,
        LayoutRegistry,
    },
    gui::{
        actions::ActionQueue,
        save_card::save_card,
        theme::Theme,
    },
};

/// Widest the card container grows.
pub const CONTAINER_MAX_WIDTH: f32 = 900.0;

/// Side padding of the container when it is narrower than the window.
pub const CONTAINER_PADDING: f32 = 16.0;

pub const CONTAINER_TOP_PADDING: f32 = 32.0;

/// Gap between cards, both directions.
pub const CARD_GAP: f32 = 24.0;

/// Three cards per row from this window width up, one below it.
pub const WIDE_BREAKPOINT: f32 = 900.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub columns: usize,
    pub card_width: f32,
    pub left_pad: f32,
}

pub fn grid_metrics(available_width: f32) -> GridMetrics {
    let columns = if available_width >= WIDE_BREAKPOINT { 3 } else { 1 };
    let container =
        (available_width - 2.0 * CONTAINER_PADDING).clamp(1.0, CONTAINER_MAX_WIDTH);
    let gaps = CARD_GAP * (columns - 1) as f32;
    let card_width = ((container - gaps) / columns as f32).max(1.0);
    let left_pad = ((available_width - container) * 0.5).max(0.0);

    GridMetrics { columns, card_width, left_pad }
}

/// Draws the visible cards in id order, row by row.
pub fn card_list(
    ui: &mut egui::Ui,
    cards: &[CardId],
    theme: &Theme,
    layout: &mut LayoutRegistry,
    actions: &mut ActionQueue,
) {
    let metrics = grid_metrics(ui.available_width());
    ui.add_space(CONTAINER_TOP_PADDING);

    for row in cards.chunks(metrics.columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add_space(metrics.left_pad);

            for (c, id) in row.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.set_width(metrics.card_width);
                    save_card(ui, *id, metrics.card_width, theme, layout, actions);
                });
                if c + 1 < row.len() {
                    ui.add_space(CARD_GAP);
                }
            }
        });
        ui.add_space(CARD_GAP);
    }
}
