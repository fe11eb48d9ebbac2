pub mod actions;
pub mod app;
pub mod card_list;
pub mod flight;
pub mod nav_bar;
pub mod save_card;
pub mod theme;

pub use app::CardBoardApp;
use eframe::egui;

use crate::core::BoundingBox;

impl From<egui::Rect> for BoundingBox {
    fn from(rect: egui::Rect) -> Self {
        BoundingBox::new(rect.top(), rect.left(), rect.width(), rect.height())
    }
}
