use std::collections::HashSet;

use crate::core::{
    errors::BoardError,
    measure::{
        ElementHandle,
        Measure,
    },
    models::{
        BoundingBox,
        CardId,
        FlightState,
    },
    timing::{
        FLIGHT_DURATION,
        PULSE_DURATION,
    },
};

pub const DEFAULT_CARDS: [CardId; 3] = [CardId(1), CardId(2), CardId(3)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    PulseOff,
    Remove(CardId),
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: f64,
    kind: TimerKind,
}

/// What a call to [`CardBoard::tick`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    PulseEnded,
    CardRemoved(CardId),
}

/// Owns the visible cards, the current flight and the pulse flag.
///
/// Every activation schedules its own pulse-off and removal timers. Timers are
/// never cancelled; an activation made while another flight is in progress
/// replaces the flight, and the earlier removal timer still clears it.
#[derive(Debug)]
pub struct CardBoard {
    cards: Vec<CardId>,
    flight: Option<FlightState>,
    pulse: bool,
    timers: Vec<Timer>,
}

impl Default for CardBoard {
    fn default() -> Self {
        Self::new(DEFAULT_CARDS)
    }
}

impl CardBoard {
    /// Builds a board from a seed set. Repeated ids keep their first position.
    pub fn new(cards: impl IntoIterator<Item = CardId>) -> Self {
        let mut seen = HashSet::new();
        let cards = cards.into_iter().filter(|id| seen.insert(*id)).collect();

        Self { cards, flight: None, pulse: false, timers: Vec::new() }
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(&id)
    }

    pub fn flight(&self) -> Option<&FlightState> {
        self.flight.as_ref()
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse
    }

    /// No timers pending and nothing in flight.
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty() && self.flight.is_none() && !self.pulse
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.first().map(|timer| timer.due)
    }

    /// Starts a flight for `id` from `source` to the bookmark.
    ///
    /// Leaves the board untouched when the card is not visible or the bookmark
    /// cannot be measured.
    pub fn activate(
        &mut self,
        id: CardId,
        source: BoundingBox,
        measure: &impl Measure,
        now: f64,
    ) -> Result<(), BoardError> {
        if !self.contains(id) {
            return Err(BoardError::UnknownCard(id));
        }

        let dest =
            measure.measure(ElementHandle::Bookmark).ok_or(BoardError::DestinationUnavailable)?;

        if let Some(previous) = self.flight {
            log::debug!("card {} replaces flight of card {}", id, previous.card_id);
        }

        self.flight = Some(FlightState { card_id: id, source, dest, started_at: now });
        self.pulse = true;

        self.schedule(now + PULSE_DURATION, TimerKind::PulseOff);
        self.schedule(now + FLIGHT_DURATION, TimerKind::Remove(id));

        log::info!("saving card {}", id);
        Ok(())
    }

    /// Fires every timer due at or before `now`, earliest first.
    pub fn tick(&mut self, now: f64) -> Vec<BoardEvent> {
        let due = self.timers.partition_point(|timer| timer.due <= now);
        let fired: Vec<Timer> = self.timers.drain(..due).collect();

        fired
            .into_iter()
            .map(|timer| match timer.kind {
                TimerKind::PulseOff => {
                    self.pulse = false;
                    BoardEvent::PulseEnded
                }
                TimerKind::Remove(id) => {
                    self.cards.retain(|card| *card != id);
                    self.flight = None;
                    log::info!("card {} saved", id);
                    BoardEvent::CardRemoved(id)
                }
            })
            .collect()
    }

    fn schedule(&mut self, due: f64, kind: TimerKind) {
        // Equal deadlines fire in scheduling order.
        let index = self.timers.partition_point(|timer| timer.due <= due);
        self.timers.insert(index, Timer { due, kind });
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        seq::SliceRandom,
        Rng,
        SeedableRng,
    };

    use super::*;

    struct FixedLayout {
        bookmark: Option<BoundingBox>,
    }

    impl Measure for FixedLayout {
        fn measure(&self, handle: ElementHandle) -> Option<BoundingBox> {
            match handle {
                ElementHandle::Bookmark => self.bookmark,
                ElementHandle::Card(_) => None,
            }
        }
    }

    fn source() -> BoundingBox {
        BoundingBox::new(100.0, 0.0, 200.0, 100.0)
    }

    fn dest() -> BoundingBox {
        BoundingBox::new(700.0, 300.0, 40.0, 40.0)
    }

    fn layout() -> FixedLayout {
        FixedLayout { bookmark: Some(dest()) }
    }

    fn ids(raw: &[u64]) -> Vec<CardId> {
        raw.iter().copied().map(CardId).collect()
    }

    #[test]
    fn save_removes_card_after_flight() {
        let mut board = CardBoard::new(ids(&[1, 2, 3]));

        board.activate(CardId(2), source(), &layout(), 0.0).unwrap();

        assert_eq!(
            board.flight(),
            Some(&FlightState { card_id: CardId(2), source: source(), dest: dest(), started_at: 0.0 })
        );
        assert_eq!(board.cards(), ids(&[1, 2, 3]).as_slice());

        board.tick(0.3);
        assert_eq!(board.cards(), ids(&[1, 2, 3]).as_slice());

        let events = board.tick(0.6);
        assert_eq!(events, vec![BoardEvent::PulseEnded, BoardEvent::CardRemoved(CardId(2))]);
        assert_eq!(board.cards(), ids(&[1, 3]).as_slice());
        assert!(board.flight().is_none());
        assert!(board.is_idle());
    }

    #[test]
    fn missing_destination_changes_nothing() {
        let mut board = CardBoard::new(ids(&[1, 2, 3]));
        let no_bookmark = FixedLayout { bookmark: None };

        let result = board.activate(CardId(2), source(), &no_bookmark, 0.0);

        assert_eq!(result, Err(BoardError::DestinationUnavailable));
        assert!(board.flight().is_none());
        assert!(!board.is_pulsing());
        assert_eq!(board.next_deadline(), None);

        board.tick(5.0);
        assert_eq!(board.cards(), ids(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn unknown_card_changes_nothing() {
        let mut board = CardBoard::new(ids(&[1, 2, 3]));

        let result = board.activate(CardId(9), source(), &layout(), 0.0);

        assert_eq!(result, Err(BoardError::UnknownCard(CardId(9))));
        board.tick(1.0);
        assert_eq!(board.cards(), ids(&[1, 2, 3]).as_slice());
        assert!(board.is_idle());
    }

    #[test]
    fn pulse_window_is_half_open() {
        let mut board = CardBoard::default();
        let t0 = 2.0;

        assert!(!board.is_pulsing());
        board.activate(CardId(1), source(), &layout(), t0).unwrap();
        assert!(board.is_pulsing());

        board.tick(t0 + 0.39);
        assert!(board.is_pulsing());

        board.tick(t0 + PULSE_DURATION);
        assert!(!board.is_pulsing());

        board.tick(t0 + 1.0);
        assert!(!board.is_pulsing());
    }

    #[test]
    fn flight_window_is_half_open() {
        let mut board = CardBoard::default();
        let t0 = 2.0;

        board.activate(CardId(3), source(), &layout(), t0).unwrap();
        assert!(board.flight().is_some());

        board.tick(t0 + 0.59);
        assert!(board.flight().is_some());
        assert!(board.contains(CardId(3)));

        board.tick(t0 + FLIGHT_DURATION);
        assert!(board.flight().is_none());
        assert!(!board.contains(CardId(3)));
    }

    #[test]
    fn next_deadline_tracks_pending_timers() {
        let mut board = CardBoard::default();
        board.activate(CardId(1), source(), &layout(), 1.0).unwrap();

        assert_eq!(board.next_deadline(), Some(1.0 + PULSE_DURATION));
        board.tick(1.0 + PULSE_DURATION);
        assert_eq!(board.next_deadline(), Some(1.0 + FLIGHT_DURATION));
        board.tick(1.0 + FLIGHT_DURATION);
        assert_eq!(board.next_deadline(), None);
    }

    #[test]
    fn overlapping_saves_share_flight_and_pulse() {
        let mut board = CardBoard::new(ids(&[1, 2, 3]));

        board.activate(CardId(1), source(), &layout(), 0.0).unwrap();
        board.activate(CardId(2), source(), &layout(), 0.1).unwrap();

        // Only the latest flight is shown.
        assert_eq!(board.flight().map(|f| f.card_id), Some(CardId(2)));

        // The first pulse-off ends the pulse for both.
        board.tick(0.41);
        assert!(!board.is_pulsing());

        // The first removal also clears the second card's flight.
        let events = board.tick(0.61);
        assert_eq!(events, vec![BoardEvent::PulseEnded, BoardEvent::CardRemoved(CardId(1))]);
        assert!(board.flight().is_none());
        assert_eq!(board.cards(), ids(&[2, 3]).as_slice());

        let events = board.tick(0.71);
        assert_eq!(events, vec![BoardEvent::CardRemoved(CardId(2))]);
        assert_eq!(board.cards(), ids(&[3]).as_slice());
        assert!(board.is_idle());
    }

    #[test]
    fn repeated_save_of_same_card_is_harmless() {
        let mut board = CardBoard::new(ids(&[1, 2]));

        board.activate(CardId(1), source(), &layout(), 0.0).unwrap();
        board.activate(CardId(1), source(), &layout(), 0.2).unwrap();

        board.tick(1.0);
        assert_eq!(board.cards(), ids(&[2]).as_slice());
        assert!(board.is_idle());
    }

    #[test]
    fn duplicate_seed_ids_are_dropped() {
        let board = CardBoard::new(ids(&[3, 1, 3, 2, 1]));
        assert_eq!(board.cards(), ids(&[3, 1, 2]).as_slice());
    }

    #[test]
    fn saving_any_card_removes_exactly_that_card() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let len = rng.random_range(1..12);
            let mut seed: Vec<CardId> = (0..len).map(|n| CardId(n * 7 + 1)).collect();
            seed.shuffle(&mut rng);

            let target = seed[rng.random_range(0..seed.len())];
            let t0 = rng.random_range(0.0..100.0);

            let mut board = CardBoard::new(seed.clone());
            board.activate(target, source(), &layout(), t0).unwrap();
            board.tick(t0 + FLIGHT_DURATION + 0.01);

            let expected: Vec<CardId> = seed.into_iter().filter(|id| *id != target).collect();
            assert_eq!(board.cards(), expected.as_slice());
        }
    }
}
