use std::time::Duration;

use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    card_list::card_list,
    flight::FlightAnimator,
    nav_bar::NavBar,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        timing::FRAME_INTERVAL,
        BoardEvent,
        CardBoard,
        CardId,
        LayoutRegistry,
    },
    persistence::BoardSettings,
};

/// What moving the clock forward did.
#[derive(Debug, Default, PartialEq)]
pub struct Advance {
    pub completed: Option<CardId>,
    pub events: Vec<BoardEvent>,
}

pub struct CardBoardApp {
    // Board
    pub board: CardBoard,
    pub actions: ActionQueue,

    // Layout and animation
    pub layout: LayoutRegistry,
    pub nav_bar: NavBar,
    pub flight: FlightAnimator,

    // UI State
    pub theme: Theme,
    pub settings: BoardSettings,
}

impl CardBoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: BoardSettings) -> Self {
        let app = Self::with_settings(settings);

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + app.settings.zoom_delta);

        // Apply saved theme preference (set_theme switches to the registered variant)
        cc.egui_ctx.set_theme(if app.settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        app
    }

    /// Everything except the egui context setup.
    pub fn with_settings(settings: BoardSettings) -> Self {
        let board = CardBoard::new(settings.initial_cards.iter().copied());
        log::info!("board ready with {} cards", board.cards().len());

        Self {
            board,
            actions: ActionQueue::new(),
            layout: LayoutRegistry::new(),
            nav_bar: NavBar::new(),
            flight: FlightAnimator::new(),
            theme: Theme::default(),
            settings,
        }
    }

    /// Applies queued widget actions against the layout recorded this frame.
    pub fn handle_actions(&mut self, now: f64) {
        let actions: Vec<UiAction> = self.actions.drain().collect();

        for action in actions {
            match action {
                UiAction::Save { id, source } => {
                    if let Err(e) = self.board.activate(id, source, &self.layout, now) {
                        log::debug!("ignoring save of card {}: {}", id, e);
                    }
                }
            }
        }
    }

    /// Reports a landed flight, then fires due board timers. The flight is
    /// polled first because the removal timer clears it.
    pub fn advance(&mut self, now: f64) -> Advance {
        let completed = self
            .board
            .flight()
            .copied()
            .filter(|flight| self.flight.poll_completed(flight, now))
            .map(|flight| flight.card_id);

        if let Some(id) = completed {
            log::debug!("flight of card {} completed", id);
        }

        let events = self.board.tick(now);
        for event in &events {
            match event {
                BoardEvent::PulseEnded => log::debug!("bookmark pulse ended"),
                BoardEvent::CardRemoved(id) => log::debug!("card {} removed from board", id),
            }
        }

        Advance { completed, events }
    }

    /// How soon the next frame is needed: every frame while something moves,
    /// otherwise at the next pending timer.
    pub fn repaint_after(&self, now: f64) -> Option<Duration> {
        if self.board.flight().is_some() || self.nav_bar.is_animating(now) {
            return Some(FRAME_INTERVAL);
        }
        self.board.next_deadline().map(|due| Duration::from_secs_f64((due - now).max(0.0)))
    }

    /// One frame. Timers fire before drawing so a removed card is never drawn
    /// again.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        self.advance(now);
        self.layout.begin_frame();

        // The bar goes first so the bookmark is measurable when saves are handled.
        self.nav_bar.show(ctx, &self.theme, self.board.is_pulsing(), now, &mut self.layout);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                card_list(
                    ui,
                    self.board.cards(),
                    &self.theme,
                    &mut self.layout,
                    &mut self.actions,
                );
            });
        });

        self.handle_actions(now);

        if let Some(flight) = self.board.flight() {
            self.flight.show(ctx, &self.theme, flight, now);
        }

        if let Some(delay) = self.repaint_after(now) {
            ctx.request_repaint_after(delay);
        }
    }
}

impl eframe::App for CardBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
