//! The turn state machine.
//!
//! A turn is a fixed choreography: roll (11 animation frames, 100 ms apart,
//! then the committed result), step cell by cell (500 ms apart), resolve the
//! landed cell, and explicitly end the turn. Every delay is an event on the
//! engine's [`Timeline`]; nothing here touches the wall clock. Commands
//! arriving outside their phase fail with [`RaceError`], while rule-level
//! rejections (a purchase the participant cannot afford) are silent no-ops
//! reported through [`BuyOutcome`].
//!
//! One deliberate oddity: when the dice
//! animation finishes, the last displayed frame is discarded and the
//! committed result is a fresh, independent roll. With a scripted dice
//! source the committed value is the twelfth draw, not the eleventh.

use crate::board::{standard_board, BoardCell, CellKind};
use crate::cards::{Card, CardKind};
use crate::player::Participant;
use ludus_core::{DiceSource, Timeline};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Milliseconds between dice animation frames.
pub const DICE_FRAME_MS: u64 = 100;
/// Number of displayed animation frames before the result commits.
pub const DICE_FRAMES: u8 = 11;
/// Milliseconds between movement steps.
pub const STEP_MS: u64 = 500;
/// Delay from card draw to the card turning face up.
pub const CARD_REVEAL_MS: u64 = 100;
/// Delay from card draw to the cash delta applying.
pub const CARD_APPLY_MS: u64 = 1000;
/// Delay from card draw to the interaction panel closing.
pub const CARD_CLOSE_MS: u64 = 3000;

/// Errors from commands issued outside their phase.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceError {
    #[error("a roll is already pending or in progress")]
    RollUnavailable,
    #[error("no purchase decision is pending")]
    NoPurchasePending,
    #[error("no rent payment is pending")]
    NoRentPending,
    #[error("no card draw is pending")]
    NoCardPending,
    #[error("the turn cannot end yet")]
    TurnNotEndable,
}

/// Result type alias for race operations
pub type RaceResult<T> = Result<T, RaceError>;

/// The decision the current participant owes after landing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PendingChoice {
    /// Landed on an unowned property: buy it or decline.
    BuyOrDecline,
    /// Landed on another participant's property: rent is mandatory.
    PayRent,
    /// Landed on a penalty or reward cell: draw from the matching pool.
    DrawCard,
}

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TurnPhase {
    /// No roll yet; `roll_dice` is the only available command.
    AwaitRoll,
    /// Dice animation in flight.
    RollingDice { frames_done: u8 },
    /// Stepping around the board.
    Moving { steps_left: u8 },
    /// Waiting for the landed-cell decision.
    AwaitChoice(PendingChoice),
    /// A drawn card's reveal/apply/close timers are in flight.
    CardInFlight { kind: CardKind, card: Card, revealed: bool },
    /// The roll is fully resolved; `end_turn` is available.
    RollSpent,
}

/// Timed steps of the turn choreography.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerEvent {
    DiceFrame,
    MoveStep,
    CardReveal,
    CardApply,
    CardClose,
}

/// What a command or tick made happen, for front-ends to narrate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RaceEvent {
    /// An animation frame showed this face.
    DiceFace(u8),
    /// The roll committed to this value.
    DiceCommitted(u8),
    /// The current participant stepped onto a cell.
    SteppedTo(usize),
    /// Movement finished on this cell.
    LandedOn(usize),
    /// The landed cell demands a decision.
    ChoiceRequired(PendingChoice),
    /// A drawn card turned face up.
    CardRevealed(Card),
    /// Cash changed hands or materialized.
    CashApplied { participant: usize, amount: i64 },
    /// The card panel closed; the turn can end.
    CardClosed,
}

/// Outcome of a `buy` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuyOutcome {
    Bought,
    /// Cash was short of the price: ownership and cash untouched, the
    /// pending choice is consumed as if declined.
    Blocked,
}

/// Complete observable game state.
#[derive(Clone, Debug, Serialize)]
pub struct RaceState {
    pub cells: Vec<BoardCell>,
    pub participants: Vec<Participant>,
    /// Index of the participant whose turn it is.
    pub current: usize,
    /// Committed roll; present from commit until `end_turn`.
    pub dice_roll: Option<u8>,
    /// Last displayed dice face. Unlike `dice_roll` it survives `end_turn`;
    /// the old face stays up until the next animation begins.
    pub dice_face: Option<u8>,
    pub phase: TurnPhase,
    pub log: Vec<String>,
}

impl RaceState {
    /// Standard board, default participant pair, game-start log line.
    pub fn new_standard() -> Self {
        RaceState {
            cells: standard_board(),
            participants: Participant::default_pair(),
            current: 0,
            dice_roll: None,
            dice_face: None,
            phase: TurnPhase::AwaitRoll,
            log: vec!["The game begins!".to_string()],
        }
    }

    pub fn current_participant(&self) -> &Participant {
        &self.participants[self.current]
    }

    /// Cell the current participant stands on.
    pub fn current_cell(&self) -> &BoardCell {
        &self.cells[self.current_participant().position]
    }

    /// Sum of all participants' cash. Conserved across rent, not across
    /// cards or purchases.
    pub fn total_cash(&self) -> i64 {
        self.participants.iter().map(|p| p.cash).sum()
    }
}

/// The simulator: state plus timeline plus dice source.
pub struct RaceEngine<D: DiceSource> {
    state: RaceState,
    timeline: Timeline<TimerEvent>,
    dice: D,
}

impl<D: DiceSource> RaceEngine<D> {
    pub fn new(dice: D) -> Self {
        RaceEngine::with_state(RaceState::new_standard(), dice)
    }

    /// Engine over a prepared state, settled with no sequence in flight.
    pub fn with_state(state: RaceState, dice: D) -> Self {
        RaceEngine {
            state,
            timeline: Timeline::new(),
            dice,
        }
    }

    pub fn state(&self) -> &RaceState {
        &self.state
    }

    /// Earliest pending timer deadline (virtual ms), for real-time drivers.
    pub fn next_due(&self) -> Option<u64> {
        self.timeline.next_due()
    }

    pub fn now_ms(&self) -> u64 {
        self.timeline.now_ms()
    }

    /// True when no timed sequence is in flight.
    pub fn is_settled(&self) -> bool {
        self.timeline.is_idle()
    }

    /// Start the dice animation. Only valid at the start of a turn.
    pub fn roll_dice(&mut self) -> RaceResult<()> {
        if self.state.phase != TurnPhase::AwaitRoll || self.state.dice_roll.is_some() {
            return Err(RaceError::RollUnavailable);
        }
        debug!("[RACE] {} rolls the dice", self.state.current_participant().name);
        self.state.phase = TurnPhase::RollingDice { frames_done: 0 };
        self.timeline.schedule_in(DICE_FRAME_MS, TimerEvent::DiceFrame);
        Ok(())
    }

    /// Buy the unowned property under the current participant.
    pub fn buy(&mut self) -> RaceResult<BuyOutcome> {
        if self.state.phase != TurnPhase::AwaitChoice(PendingChoice::BuyOrDecline) {
            return Err(RaceError::NoPurchasePending);
        }
        let position = self.state.current_participant().position;
        let cell = self.state.cells[position];
        let price = cell.price().expect("buy choice only pends on properties");

        // Blocked purchase consumes the choice like a decline: no cash
        // moves, no owner is set.
        if self.state.current_participant().cash < price {
            debug!("[RACE] purchase of {} blocked: insufficient cash", cell.name);
            self.state.phase = TurnPhase::RollSpent;
            return Ok(BuyOutcome::Blocked);
        }

        let current = self.state.current;
        self.state.participants[current].cash -= price;
        self.state.participants[current].properties.push(position);
        self.state.cells[position].owner = Some(current);
        let line = format!(
            "{} bought {}!",
            self.state.participants[current].name, cell.name
        );
        debug!("[RACE] {line}");
        self.state.log.push(line);
        self.state.phase = TurnPhase::RollSpent;
        Ok(BuyOutcome::Bought)
    }

    /// Decline the pending purchase.
    pub fn decline(&mut self) -> RaceResult<()> {
        if self.state.phase != TurnPhase::AwaitChoice(PendingChoice::BuyOrDecline) {
            return Err(RaceError::NoPurchasePending);
        }
        debug!("[RACE] purchase declined");
        self.state.phase = TurnPhase::RollSpent;
        Ok(())
    }

    /// Pay the mandatory rent on another participant's property.
    pub fn pay_rent(&mut self) -> RaceResult<()> {
        if self.state.phase != TurnPhase::AwaitChoice(PendingChoice::PayRent) {
            return Err(RaceError::NoRentPending);
        }
        let position = self.state.current_participant().position;
        let cell = self.state.cells[position];
        let rent = cell.rent().expect("rent choice only pends on properties");
        let owner = cell.owner.expect("rent choice only pends on owned cells");
        let current = self.state.current;

        self.state.participants[current].cash -= rent;
        self.state.participants[owner].cash += rent;
        let line = format!(
            "{} paid {} denarii rent to {}.",
            self.state.participants[current].name, rent, self.state.participants[owner].name
        );
        debug!("[RACE] {line}");
        self.state.log.push(line);
        self.state.phase = TurnPhase::RollSpent;
        Ok(())
    }

    /// Draw from the pool matching the landed cell and start the card's
    /// reveal/apply/close timers. Returns the card, still face down.
    pub fn draw_card(&mut self) -> RaceResult<Card> {
        if self.state.phase != TurnPhase::AwaitChoice(PendingChoice::DrawCard) {
            return Err(RaceError::NoCardPending);
        }
        let kind = match self.state.current_cell().kind {
            CellKind::Penalty => CardKind::Penalty,
            CellKind::Reward => CardKind::Reward,
            _ => unreachable!("card choice only pends on draw cells"),
        };
        let pool = kind.pool();
        let card = pool[self.dice.pick_index(pool.len())];
        debug!("[RACE] drew a {kind} card worth {}", card.amount);

        self.state.phase = TurnPhase::CardInFlight {
            kind,
            card,
            revealed: false,
        };
        // All three timers run from the draw instant.
        self.timeline.schedule_in(CARD_REVEAL_MS, TimerEvent::CardReveal);
        self.timeline.schedule_in(CARD_APPLY_MS, TimerEvent::CardApply);
        self.timeline.schedule_in(CARD_CLOSE_MS, TimerEvent::CardClose);
        Ok(card)
    }

    /// Pass the turn to the next participant round-robin. Clears only the
    /// committed roll; the displayed face persists.
    pub fn end_turn(&mut self) -> RaceResult<()> {
        if self.state.phase != TurnPhase::RollSpent {
            return Err(RaceError::TurnNotEndable);
        }
        self.state.current = (self.state.current + 1) % self.state.participants.len();
        self.state.dice_roll = None;
        self.state.phase = TurnPhase::AwaitRoll;
        debug!(
            "[RACE] turn passes to {}",
            self.state.current_participant().name
        );
        Ok(())
    }

    /// Advance virtual time by `dt_ms`, processing every timer that comes
    /// due, in order.
    ///
    /// The clock moves deadline by deadline so that timers scheduled by a
    /// handler mid-window keep their spacing relative to the event that
    /// scheduled them.
    pub fn tick(&mut self, dt_ms: u64) -> Vec<RaceEvent> {
        let target = self.timeline.now_ms() + dt_ms;
        let mut out = Vec::new();
        while let Some(due) = self.timeline.next_due() {
            if due > target {
                break;
            }
            for event in self.timeline.advance_to(due) {
                self.handle_timer(event, &mut out);
            }
        }
        self.timeline.advance_to(target);
        out
    }

    /// Run every pending timer to completion (tests, `--fast` mode).
    pub fn run_until_settled(&mut self) -> Vec<RaceEvent> {
        let mut out = Vec::new();
        while let Some(due) = self.timeline.next_due() {
            for event in self.timeline.advance_to(due) {
                self.handle_timer(event, &mut out);
            }
        }
        out
    }

    fn handle_timer(&mut self, event: TimerEvent, out: &mut Vec<RaceEvent>) {
        match event {
            TimerEvent::DiceFrame => self.on_dice_frame(out),
            TimerEvent::MoveStep => self.on_move_step(out),
            TimerEvent::CardReveal => self.on_card_reveal(out),
            TimerEvent::CardApply => self.on_card_apply(out),
            TimerEvent::CardClose => self.on_card_close(out),
        }
    }

    fn on_dice_frame(&mut self, out: &mut Vec<RaceEvent>) {
        let TurnPhase::RollingDice { frames_done } = self.state.phase else {
            return;
        };
        let face = self.dice.roll_d6();
        self.state.dice_face = Some(face);
        out.push(RaceEvent::DiceFace(face));

        let frames_done = frames_done + 1;
        if frames_done < DICE_FRAMES {
            self.state.phase = TurnPhase::RollingDice { frames_done };
            self.timeline.schedule_in(DICE_FRAME_MS, TimerEvent::DiceFrame);
            return;
        }

        // The animation's last face is discarded: the committed result is an
        // independent fresh roll.
        let roll = self.dice.roll_d6();
        self.state.dice_face = Some(roll);
        self.state.dice_roll = Some(roll);
        out.push(RaceEvent::DiceCommitted(roll));
        debug!(
            "[RACE] {} rolled a {roll}",
            self.state.current_participant().name
        );
        self.state.phase = TurnPhase::Moving { steps_left: roll };
        self.timeline.schedule_in(STEP_MS, TimerEvent::MoveStep);
    }

    fn on_move_step(&mut self, out: &mut Vec<RaceEvent>) {
        let TurnPhase::Moving { steps_left } = self.state.phase else {
            return;
        };
        let current = self.state.current;
        let position =
            (self.state.participants[current].position + 1) % self.state.cells.len();
        self.state.participants[current].position = position;
        out.push(RaceEvent::SteppedTo(position));

        let steps_left = steps_left - 1;
        if steps_left > 0 {
            self.state.phase = TurnPhase::Moving { steps_left };
            self.timeline.schedule_in(STEP_MS, TimerEvent::MoveStep);
        } else {
            out.push(RaceEvent::LandedOn(position));
            self.resolve_landing(out);
        }
    }

    fn resolve_landing(&mut self, out: &mut Vec<RaceEvent>) {
        let current = self.state.current;
        let cell = *self.state.current_cell();
        debug!(
            "[RACE] {} landed on {}",
            self.state.participants[current].name, cell.name
        );

        let choice = match cell.kind {
            CellKind::Start => None,
            CellKind::Property { .. } => match cell.owner {
                None => Some(PendingChoice::BuyOrDecline),
                Some(owner) if owner == current => None,
                Some(_) => Some(PendingChoice::PayRent),
            },
            CellKind::Penalty | CellKind::Reward => Some(PendingChoice::DrawCard),
        };

        match choice {
            Some(choice) => {
                self.state.phase = TurnPhase::AwaitChoice(choice);
                out.push(RaceEvent::ChoiceRequired(choice));
            }
            // Start and self-owned cells have no effect; the turn is
            // immediately ready to end.
            None => self.state.phase = TurnPhase::RollSpent,
        }
    }

    fn on_card_reveal(&mut self, out: &mut Vec<RaceEvent>) {
        let TurnPhase::CardInFlight { kind, card, .. } = self.state.phase else {
            return;
        };
        self.state.phase = TurnPhase::CardInFlight {
            kind,
            card,
            revealed: true,
        };
        out.push(RaceEvent::CardRevealed(card));
    }

    fn on_card_apply(&mut self, out: &mut Vec<RaceEvent>) {
        let TurnPhase::CardInFlight { card, .. } = self.state.phase else {
            return;
        };
        let current = self.state.current;
        self.state.participants[current].cash += card.amount;
        let line = format!(
            "{}: {} ({} denarii)",
            self.state.participants[current].name, card.description, card.amount
        );
        debug!("[RACE] {line}");
        self.state.log.push(line);
        out.push(RaceEvent::CashApplied {
            participant: current,
            amount: card.amount,
        });
    }

    fn on_card_close(&mut self, out: &mut Vec<RaceEvent>) {
        if !matches!(self.state.phase, TurnPhase::CardInFlight { .. }) {
            return;
        }
        self.state.phase = TurnPhase::RollSpent;
        out.push(RaceEvent::CardClosed);
    }
}
