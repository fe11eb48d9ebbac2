use eframe::egui::{
    self,
    epaint::Shadow,
    Color32,
    CornerRadius,
    Margin,
    RichText,
};

use crate::{
    core::{
        CardId,
        ElementHandle,
        LayoutRegistry,
        Measure,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

pub const CARD_PADDING: i8 = 16;
pub const CARD_RADIUS: u8 = 4;
const BUTTON_GAP: f32 = 16.0;

pub fn card_title(id: CardId) -> String {
    format!("Card {}", id)
}

/// One card with a Save button, constrained to `width`.
///
/// Records its own bounds each frame; a press reports those bounds through
/// the action queue.
pub fn save_card(
    ui: &mut egui::Ui,
    id: CardId,
    width: f32,
    theme: &Theme,
    layout: &mut LayoutRegistry,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();
    let mut pressed = false;

    let frame = egui::Frame::NONE
        .fill(theme.surface(&ctx))
        .corner_radius(CornerRadius::same(CARD_RADIUS))
        .inner_margin(Margin::same(CARD_PADDING))
        .shadow(Shadow { offset: [0, 3], blur: 6, spread: 0, color: Color32::from_black_alpha(40) })
        .show(ui, |ui| {
            ui.set_width(width - 2.0 * CARD_PADDING as f32);
            ui.label(theme.heading(&ctx, &card_title(id)));
            ui.add_space(BUTTON_GAP);

            let button = egui::Button::new(
                RichText::new("Save").strong().color(theme.on_primary(&ctx)),
            )
            .fill(theme.primary(&ctx))
            .min_size(egui::vec2(64.0, 36.0));

            let response = ui.add(button);
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            pressed = response.clicked();
        });

    let handle = ElementHandle::Card(id);
    layout.record(handle, frame.response.rect.into());

    if pressed {
        match layout.measure(handle) {
            Some(source) => actions.push(UiAction::Save { id, source }),
            None => log::debug!("card {} pressed but not measurable", id),
        }
    }
}
