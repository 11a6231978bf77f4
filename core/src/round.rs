use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Setup,
    Shuffling,
    Guessing,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Setup
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShuffleOutcome {
    Repositioned,
    /// Last step done, labels are hidden and elements accept clicks.
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Recorded(Order),
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Recorded(_) => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pending,
    Won,
    Lost,
}

/// One play-through, from element creation to a won or lost outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    size: RoundSize,
    canonical: Vec<Order>,
    elements: Vec<Element>,
    submitted: Vec<Order>,
    shuffles_done: u8,
    state: RoundState,
}

impl Round {
    /// Lays out `size` elements in reading order with their labels showing.
    pub fn new(
        size: RoundSize,
        viewport: Viewport,
        metrics: ElementMetrics,
        rng: &mut SmallRng,
    ) -> Self {
        let canonical: Vec<Order> = (1..=size.get()).collect();
        let colors = distinct_colors(rng, size.len());
        let elements = canonical
            .iter()
            .zip(colors)
            .zip(ReadingOrder::new(size.len(), viewport, metrics))
            .map(|((&order, color), position)| Element::new(color, position, order))
            .collect();

        Self {
            size,
            canonical,
            elements,
            submitted: Vec::with_capacity(size.len()),
            shuffles_done: 0,
            state: RoundState::Setup,
        }
    }

    pub fn size(&self) -> RoundSize {
        self.size
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn canonical_order(&self) -> &[Order] {
        &self.canonical
    }

    pub fn submitted(&self) -> &[Order] {
        &self.submitted
    }

    pub fn shuffles_done(&self) -> u8 {
        self.shuffles_done
    }

    /// Shuffle steps left before guessing starts.
    pub fn shuffles_left(&self) -> u8 {
        self.size.get() - self.shuffles_done
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.elements.get(id.0).ok_or(GameError::InvalidElement)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (ElementId(index), element))
    }

    pub fn begin_shuffle(&mut self) -> Result<()> {
        self.check_state(RoundState::Setup)?;
        self.state = RoundState::Shuffling;
        log::debug!("round of {} shuffling", self.size);
        Ok(())
    }

    /// Moves every element to a random visible spot. The step that completes the round's `N`
    /// repositions hides every label and enables clicks.
    pub fn shuffle_step(
        &mut self,
        viewport: Viewport,
        metrics: ElementMetrics,
        rng: &mut SmallRng,
    ) -> Result<ShuffleOutcome> {
        self.check_state(RoundState::Shuffling)?;

        for element in &mut self.elements {
            element.set_position(random_position(rng, viewport, metrics));
        }
        self.shuffles_done += 1;
        log::trace!("shuffle {}/{}", self.shuffles_done, self.size);

        if self.shuffles_done < self.size.get() {
            return Ok(ShuffleOutcome::Repositioned);
        }

        for element in &mut self.elements {
            element.hide_label();
            element.set_clickable(true);
        }
        self.state = RoundState::Guessing;
        log::debug!("shuffling done, guessing");
        Ok(ShuffleOutcome::Finished)
    }

    /// Reveals the clicked element and records its order. Clicking an element that was already
    /// revealed records it again.
    pub fn click(&mut self, id: ElementId) -> Result<ClickOutcome> {
        let element = self
            .elements
            .get_mut(id.0)
            .ok_or(GameError::InvalidElement)?;

        if !element.is_clickable() {
            return Ok(ClickOutcome::Ignored);
        }

        element.show_label();
        let order = element.order();
        self.submitted.push(order);
        log::trace!("clicked {} (order {}), sequence {:?}", id, order, self.submitted);
        Ok(ClickOutcome::Recorded(order))
    }

    /// Compares the submitted sequence against the canonical order, ending the round on the first
    /// mismatch or on a complete match.
    pub fn validate(&mut self) -> Verdict {
        match self.state {
            RoundState::Won => return Verdict::Won,
            RoundState::Lost => return Verdict::Lost,
            RoundState::Setup | RoundState::Shuffling => return Verdict::Pending,
            RoundState::Guessing => {}
        }

        let mismatch = self.submitted.len() > self.canonical.len()
            || self
                .submitted
                .iter()
                .zip(&self.canonical)
                .any(|(submitted, expected)| submitted != expected);

        if mismatch {
            self.lose();
            Verdict::Lost
        } else if self.submitted.len() == self.canonical.len() {
            self.state = RoundState::Won;
            self.disable_all();
            log::debug!("round won");
            Verdict::Won
        } else {
            Verdict::Pending
        }
    }

    fn lose(&mut self) {
        self.state = RoundState::Lost;
        for element in &mut self.elements {
            element.set_clickable(false);
            element.show_label();
            element.return_home();
        }
        log::debug!(
            "round lost, expected {:?} got {:?}",
            self.canonical,
            self.submitted
        );
    }

    fn disable_all(&mut self) {
        for element in &mut self.elements {
            element.set_clickable(false);
        }
    }

    fn check_state(&self, expected: RoundState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase(self.state))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5EED)
    }

    fn round(size: u8) -> (Round, SmallRng) {
        let mut rng = rng();
        let round = Round::new(
            RoundSize::new(size.into()).unwrap(),
            Viewport::default(),
            ElementMetrics::default(),
            &mut rng,
        );
        (round, rng)
    }

    fn guessing_round(size: u8) -> Round {
        let (mut round, mut rng) = round(size);
        round.begin_shuffle().unwrap();
        while round.state() == RoundState::Shuffling {
            round
                .shuffle_step(Viewport::default(), ElementMetrics::default(), &mut rng)
                .unwrap();
        }
        round
    }

    fn id_of(round: &Round, order: Order) -> ElementId {
        round
            .iter()
            .find(|(_, element)| element.order() == order)
            .map(|(id, _)| id)
            .unwrap()
    }

    fn click_order(round: &mut Round, order: Order) -> Verdict {
        let id = id_of(round, order);
        assert_eq!(round.click(id).unwrap(), ClickOutcome::Recorded(order));
        round.validate()
    }

    #[test]
    fn new_round_has_unique_orders_one_to_n() {
        for size in 3..=7 {
            let (round, _) = round(size);
            let orders: BTreeSet<_> = round.elements().iter().map(Element::order).collect();

            assert_eq!(round.elements().len(), usize::from(size));
            assert_eq!(orders, (1..=size).collect::<BTreeSet<_>>());
            assert_eq!(round.canonical_order(), (1..=size).collect::<Vec<_>>());
            assert_eq!(round.state(), RoundState::Setup);
        }
    }

    #[test]
    fn setup_shows_labels_and_blocks_clicks() {
        let (mut round, _) = round(4);
        assert!(round.elements().iter().all(|e| e.label() == Some(e.order())));
        assert!(round.elements().iter().all(|e| !e.is_clickable()));
        assert_eq!(round.click(ElementId(0)).unwrap(), ClickOutcome::Ignored);
        assert!(round.submitted().is_empty());
    }

    #[test]
    fn shuffling_takes_exactly_n_steps() {
        for size in 3..=7 {
            let (mut round, mut rng) = round(size);
            assert_eq!(round.size().get(), size);
            round.begin_shuffle().unwrap();
            assert_eq!(round.shuffles_left(), size);

            for step in 1..size {
                let outcome = round
                    .shuffle_step(Viewport::default(), ElementMetrics::default(), &mut rng)
                    .unwrap();
                assert_eq!(outcome, ShuffleOutcome::Repositioned);
                assert_eq!(round.shuffles_done(), step);
                assert_eq!(round.shuffles_left(), size - step);
                assert!(round.elements().iter().all(|e| !e.is_clickable()));
                assert!(round.elements().iter().all(Element::is_label_visible));
            }

            let outcome = round
                .shuffle_step(Viewport::default(), ElementMetrics::default(), &mut rng)
                .unwrap();
            assert_eq!(outcome, ShuffleOutcome::Finished);
            assert_eq!(round.shuffles_left(), 0);
            assert_eq!(round.state(), RoundState::Guessing);
            assert!(round.elements().iter().all(Element::is_clickable));
            assert!(round.elements().iter().all(|e| e.label().is_none()));
        }
    }

    #[test]
    fn shuffle_outside_shuffling_is_rejected() {
        let (mut round, mut rng) = round(3);
        let result = round.shuffle_step(Viewport::default(), ElementMetrics::default(), &mut rng);
        assert_eq!(result, Err(GameError::WrongPhase(RoundState::Setup)));

        let mut round = guessing_round(3);
        let result = round.shuffle_step(Viewport::default(), ElementMetrics::default(), &mut rng);
        assert_eq!(result, Err(GameError::WrongPhase(RoundState::Guessing)));
        assert_eq!(round.begin_shuffle(), Err(GameError::WrongPhase(RoundState::Guessing)));
    }

    #[test]
    fn shuffle_moves_elements_inside_viewport() {
        let (mut round, mut rng) = round(5);
        let viewport = Viewport::new(800, 600);
        let max = ElementMetrics::default().max_position(viewport);
        round.begin_shuffle().unwrap();
        round
            .shuffle_step(viewport, ElementMetrics::default(), &mut rng)
            .unwrap();

        for element in round.elements() {
            let pos = element.position();
            assert!((0..=max.top).contains(&pos.top));
            assert!((0..=max.left).contains(&pos.left));
        }
    }

    #[test]
    fn canonical_clicks_win() {
        let mut round = guessing_round(3);
        assert_eq!(click_order(&mut round, 1), Verdict::Pending);
        assert_eq!(click_order(&mut round, 2), Verdict::Pending);
        assert_eq!(click_order(&mut round, 3), Verdict::Won);
        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(round.submitted(), [1, 2, 3]);
    }

    #[test]
    fn first_wrong_click_loses_immediately() {
        let mut round = guessing_round(3);
        assert_eq!(click_order(&mut round, 2), Verdict::Lost);
        assert_eq!(round.state(), RoundState::Lost);
    }

    #[test]
    fn late_divergence_loses_at_that_click() {
        let mut round = guessing_round(5);
        assert_eq!(click_order(&mut round, 1), Verdict::Pending);
        assert_eq!(click_order(&mut round, 2), Verdict::Pending);
        assert_eq!(click_order(&mut round, 4), Verdict::Lost);
    }

    #[test]
    fn losing_reveals_labels_restores_layout_and_blocks_clicks() {
        let mut round = guessing_round(4);
        click_order(&mut round, 3);

        for element in round.elements() {
            assert_eq!(element.label(), Some(element.order()));
            assert!(!element.is_clickable());
            assert_eq!(element.position(), element.home());
        }
        assert_eq!(round.click(ElementId(0)).unwrap(), ClickOutcome::Ignored);
        assert_eq!(round.validate(), Verdict::Lost);
    }

    #[test]
    fn clicking_revealed_element_again_records_duplicate_and_loses() {
        let mut round = guessing_round(3);
        let first = id_of(&round, 1);

        assert_eq!(round.click(first).unwrap(), ClickOutcome::Recorded(1));
        assert_eq!(round.validate(), Verdict::Pending);
        assert_eq!(round.click(first).unwrap(), ClickOutcome::Recorded(1));
        assert_eq!(round.submitted(), [1, 1]);
        assert_eq!(round.validate(), Verdict::Lost);
    }

    #[test]
    fn validation_checks_every_recorded_click_when_deferred() {
        let mut round = guessing_round(3);
        for order in [1, 3, 2] {
            let id = id_of(&round, order);
            round.click(id).unwrap();
        }
        assert_eq!(round.validate(), Verdict::Lost);
    }

    #[test]
    fn extra_clicks_before_deferred_validation_lose() {
        let mut round = guessing_round(3);
        for order in [1, 2, 3, 3] {
            let id = id_of(&round, order);
            round.click(id).unwrap();
        }
        assert_eq!(round.submitted().len(), 4);
        assert_eq!(round.validate(), Verdict::Lost);
        assert_eq!(round.state(), RoundState::Lost);
    }

    #[test]
    fn unknown_element_is_an_error() {
        let mut round = guessing_round(3);
        assert_eq!(round.click(ElementId(3)), Err(GameError::InvalidElement));
        assert!(round.element(ElementId(7)).is_err());
    }

    #[test]
    fn clicked_element_shows_its_label() {
        let mut round = guessing_round(3);
        let id = id_of(&round, 1);
        round.click(id).unwrap();
        assert_eq!(round.element(id).unwrap().label(), Some(1));
        assert_eq!(
            round
                .elements()
                .iter()
                .filter(|e| e.is_label_visible())
                .count(),
            1
        );
    }
}
