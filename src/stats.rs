//! Hunger and happiness bookkeeping.
//!
//! [`PetStats`] owns both levels, the alive flag and the decay timestamps.
//! Every operation is total: levels saturate at the ends of `0..=100` and
//! actions taken on a dead pet are ignored.

use std::time::Duration;

use log::{debug, info};
use serde::Serialize;

use crate::events::PetEvent;
use crate::{
    CALL_ARRIVAL_HAPPINESS_GAIN, DEBUG_HAPPINESS_PENALTY, DEBUG_HUNGER_PENALTY, FEED_COOLDOWN_MS,
    FEED_HAPPINESS_GAIN, FEED_HUNGER_GAIN, HAPPINESS_DECAY_AFTER_MS, HUNGER_DECAY_AFTER_MS,
    INITIAL_HAPPINESS, INITIAL_HUNGER, PLAY_HAPPINESS_GAIN, PLAY_HUNGER_COST, REVIVE_LEVEL,
    STAT_MAX,
};

/// A stat level clamped into `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Level(u8);

impl Level {
    /// Creates a level, clamping values above the maximum.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > STAT_MAX {
            Self(STAT_MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the raw level.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` once the level has run out.
    #[must_use]
    pub const fn is_depleted(self) -> bool {
        self.0 == 0
    }

    /// Returns the level raised by `amount`, saturating at the maximum.
    #[must_use]
    pub const fn raised(self, amount: u8) -> Self {
        Self::new(self.0.saturating_add(amount))
    }

    /// Returns the level lowered by `amount`, saturating at zero.
    #[must_use]
    pub const fn lowered(self, amount: u8) -> Self {
        Self(self.0.saturating_sub(amount))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.get()
    }
}

/// The pet's needs and whether it is still alive.
///
/// Timestamps are offsets from the start of the session, supplied by the
/// caller so the model never reads a clock itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetStats {
    hunger: Level,
    happiness: Level,
    alive: bool,
    last_fed_at: Duration,
    last_played_at: Duration,
    food_ready_at: Duration,
    died_at: Option<Duration>,
}

impl Default for PetStats {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl PetStats {
    /// Creates a healthy pet with the starting levels.
    #[must_use]
    pub const fn new(now: Duration) -> Self {
        Self::with_levels(INITIAL_HUNGER, INITIAL_HAPPINESS, now)
    }

    /// Creates a living pet with explicit levels, clamped into range.
    ///
    /// Levels of zero are accepted; the next operation that runs the death
    /// check will then mark the pet dead.
    #[must_use]
    pub const fn with_levels(hunger: u8, happiness: u8, now: Duration) -> Self {
        Self {
            hunger: Level::new(hunger),
            happiness: Level::new(happiness),
            alive: true,
            last_fed_at: now,
            last_played_at: now,
            food_ready_at: now,
            died_at: None,
        }
    }

    /// Current hunger level. Higher means better fed.
    #[must_use]
    pub const fn hunger(&self) -> u8 {
        self.hunger.get()
    }

    /// Current happiness level.
    #[must_use]
    pub const fn happiness(&self) -> u8 {
        self.happiness.get()
    }

    /// Whether the pet is alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Session time of the most recent death, cleared on revive.
    #[must_use]
    pub const fn died_at(&self) -> Option<Duration> {
        self.died_at
    }

    /// Session time of the last meal or hunger decay step.
    #[must_use]
    pub const fn last_fed_at(&self) -> Duration {
        self.last_fed_at
    }

    /// Session time of the last play session or happiness decay step.
    #[must_use]
    pub const fn last_played_at(&self) -> Duration {
        self.last_played_at
    }

    /// Whether the food bowl has refilled since the last meal.
    #[must_use]
    pub fn is_food_ready(&self, now: Duration) -> bool {
        now >= self.food_ready_at
    }

    /// Feeds the pet. Ignored while dead or while the bowl is still empty
    /// from the previous meal.
    pub fn feed(&mut self, now: Duration, events: &mut Vec<PetEvent>) {
        if !self.alive {
            return;
        }
        if !self.is_food_ready(now) {
            debug!("food bowl is empty until {:?}", self.food_ready_at);
            return;
        }
        let before = self.levels();
        self.hunger = self.hunger.raised(FEED_HUNGER_GAIN);
        self.happiness = self.happiness.raised(FEED_HAPPINESS_GAIN);
        self.last_fed_at = now;
        self.food_ready_at = now + Duration::from_millis(FEED_COOLDOWN_MS);
        self.settle(before, now, events);
    }

    /// Plays with the pet, trading some hunger for happiness. Ignored while
    /// dead.
    pub fn play(&mut self, now: Duration, events: &mut Vec<PetEvent>) {
        if !self.alive {
            return;
        }
        let before = self.levels();
        self.happiness = self.happiness.raised(PLAY_HAPPINESS_GAIN);
        self.hunger = self.hunger.lowered(PLAY_HUNGER_COST);
        self.last_played_at = now;
        self.settle(before, now, events);
    }

    /// Applies time-based decay. Called on a fixed cadence.
    ///
    /// Each stat drops by one once its threshold has been exceeded, and its
    /// timestamp moves to `now`. Ignored while dead.
    pub fn advance(&mut self, now: Duration, events: &mut Vec<PetEvent>) {
        if !self.alive {
            return;
        }
        let before = self.levels();
        if now.saturating_sub(self.last_fed_at) > Duration::from_millis(HUNGER_DECAY_AFTER_MS) {
            self.hunger = self.hunger.lowered(1);
            self.last_fed_at = now;
        }
        if now.saturating_sub(self.last_played_at)
            > Duration::from_millis(HAPPINESS_DECAY_AFTER_MS)
        {
            self.happiness = self.happiness.lowered(1);
            self.last_played_at = now;
        }
        self.settle(before, now, events);
    }

    /// Small happiness bump for coming when called. Ignored while dead.
    pub fn comfort(&mut self, now: Duration, events: &mut Vec<PetEvent>) {
        if !self.alive {
            return;
        }
        let before = self.levels();
        self.happiness = self.happiness.raised(CALL_ARRIVAL_HAPPINESS_GAIN);
        self.settle(before, now, events);
    }

    /// Diagnostic hook draining both stats. Applies even to a dead pet.
    pub fn apply_debug_penalty(&mut self, now: Duration, events: &mut Vec<PetEvent>) {
        let before = self.levels();
        self.hunger = self.hunger.lowered(DEBUG_HUNGER_PENALTY);
        self.happiness = self.happiness.lowered(DEBUG_HAPPINESS_PENALTY);
        self.settle(before, now, events);
    }

    /// Marks the pet dead if either stat has run out.
    ///
    /// Emits [`PetEvent::Died`] on the transition only; later calls do
    /// nothing until the pet is revived.
    pub fn check_death(&mut self, now: Duration, events: &mut Vec<PetEvent>) {
        if self.alive && (self.hunger.is_depleted() || self.happiness.is_depleted()) {
            self.alive = false;
            self.died_at = Some(now);
            info!(
                "pet died (hunger {}, happiness {})",
                self.hunger(),
                self.happiness()
            );
            events.push(PetEvent::Died);
        }
    }

    /// Brings the pet back with both stats at the revive level.
    ///
    /// Decay timers restart from `now`. Reviving a living pet resets its
    /// levels the same way.
    pub fn revive(&mut self, now: Duration, events: &mut Vec<PetEvent>) {
        let before = self.levels();
        self.alive = true;
        self.died_at = None;
        self.hunger = Level::new(REVIVE_LEVEL);
        self.happiness = Level::new(REVIVE_LEVEL);
        self.last_fed_at = now;
        self.last_played_at = now;
        info!("pet revived");
        events.push(PetEvent::Revived);
        self.emit_if_changed(before, events);
    }

    const fn levels(&self) -> (Level, Level) {
        (self.hunger, self.happiness)
    }

    fn settle(&mut self, before: (Level, Level), now: Duration, events: &mut Vec<PetEvent>) {
        self.emit_if_changed(before, events);
        self.check_death(now, events);
    }

    fn emit_if_changed(&self, before: (Level, Level), events: &mut Vec<PetEvent>) {
        if before != self.levels() {
            events.push(PetEvent::StatsChanged {
                hunger: self.hunger(),
                happiness: self.happiness(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[fixture]
    fn stats() -> PetStats {
        PetStats::default()
    }

    #[rstest]
    fn starts_with_default_levels(stats: PetStats) {
        assert_eq!(stats.hunger(), 60);
        assert_eq!(stats.happiness(), 80);
        assert!(stats.is_alive());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(99, 99)]
    #[case(100, 100)]
    #[case(200, 100)]
    fn level_clamps_on_creation(#[case] raw: u8, #[case] expected: u8) {
        assert_eq!(Level::new(raw).get(), expected);
    }

    #[rstest]
    fn level_saturates_both_ways() {
        assert_eq!(Level::new(95).raised(30).get(), 100);
        assert_eq!(Level::new(5).lowered(30).get(), 0);
        assert_eq!(Level::new(255).raised(255).get(), 100);
    }

    #[rstest]
    fn feed_clamps_hunger() {
        let mut stats = PetStats::with_levels(90, 50, Duration::ZERO);
        let mut events = Vec::new();
        stats.feed(secs(1), &mut events);
        assert_eq!(stats.hunger(), 100);
        assert_eq!(stats.happiness(), 60);
        assert_eq!(stats.last_fed_at(), secs(1));
        assert_eq!(
            events,
            vec![PetEvent::StatsChanged {
                hunger: 100,
                happiness: 60
            }]
        );
    }

    #[rstest]
    #[case(secs(1), 40)]
    #[case(Duration::from_millis(2_999), 40)]
    #[case(secs(3), 70)]
    #[case(secs(10), 70)]
    fn feeding_waits_for_the_bowl(#[case] second_meal: Duration, #[case] expected: u8) {
        let mut stats = PetStats::with_levels(10, 50, Duration::ZERO);
        let mut events = Vec::new();
        stats.feed(Duration::ZERO, &mut events);
        assert!(!stats.is_food_ready(secs(1)));
        stats.feed(second_meal, &mut events);
        assert_eq!(stats.hunger(), expected);
    }

    #[rstest]
    fn ignored_meal_leaves_decay_timer(mut stats: PetStats) {
        let mut events = Vec::new();
        stats.feed(secs(1), &mut events);
        events.clear();
        stats.feed(secs(2), &mut events);
        assert!(events.is_empty());
        assert_eq!(stats.last_fed_at(), secs(1));
    }

    #[rstest]
    fn play_trades_hunger_for_happiness(mut stats: PetStats) {
        let mut events = Vec::new();
        stats.play(secs(3), &mut events);
        assert_eq!(stats.happiness(), 100);
        assert_eq!(stats.hunger(), 50);
        assert_eq!(stats.last_played_at(), secs(3));
    }

    #[rstest]
    fn play_can_starve_the_pet() {
        let mut stats = PetStats::with_levels(5, 50, Duration::ZERO);
        let mut events = Vec::new();
        stats.play(secs(1), &mut events);
        assert_eq!(stats.hunger(), 0);
        assert!(!stats.is_alive());
        assert_eq!(events.last(), Some(&PetEvent::Died));
    }

    #[rstest]
    fn decay_waits_for_threshold(mut stats: PetStats) {
        let mut events = Vec::new();
        stats.advance(secs(10), &mut events);
        assert_eq!(stats.hunger(), 60);
        assert!(events.is_empty());

        stats.advance(secs(12), &mut events);
        assert_eq!(stats.hunger(), 59);
        assert_eq!(stats.last_fed_at(), secs(12));
        assert_eq!(stats.happiness(), 80);

        stats.advance(secs(16), &mut events);
        assert_eq!(stats.happiness(), 79);
        assert_eq!(stats.last_played_at(), secs(16));
    }

    #[rstest]
    fn dead_pet_ignores_actions() {
        let mut stats = PetStats::with_levels(0, 50, Duration::ZERO);
        let mut events = Vec::new();
        stats.check_death(secs(1), &mut events);
        assert!(!stats.is_alive());
        assert_eq!(stats.died_at(), Some(secs(1)));

        events.clear();
        stats.feed(secs(2), &mut events);
        stats.play(secs(3), &mut events);
        stats.advance(secs(60), &mut events);
        stats.comfort(secs(61), &mut events);
        assert!(events.is_empty());
        assert_eq!(stats.hunger(), 0);
        assert_eq!(stats.happiness(), 50);
    }

    #[rstest]
    fn death_is_reported_once() {
        let mut stats = PetStats::with_levels(10, 10, Duration::ZERO);
        let mut events = Vec::new();
        stats.apply_debug_penalty(secs(1), &mut events);
        stats.apply_debug_penalty(secs(2), &mut events);
        stats.check_death(secs(3), &mut events);
        let deaths = events.iter().filter(|e| **e == PetEvent::Died).count();
        assert_eq!(deaths, 1);
    }

    #[rstest]
    fn revive_resets_levels_and_markers() {
        let mut stats = PetStats::with_levels(1, 1, Duration::ZERO);
        let mut events = Vec::new();
        stats.apply_debug_penalty(secs(1), &mut events);
        assert!(!stats.is_alive());

        events.clear();
        stats.revive(secs(5), &mut events);
        assert!(stats.is_alive());
        assert_eq!(stats.hunger(), 50);
        assert_eq!(stats.happiness(), 50);
        assert_eq!(stats.died_at(), None);
        assert_eq!(stats.last_fed_at(), secs(5));
        assert_eq!(
            events,
            vec![
                PetEvent::Revived,
                PetEvent::StatsChanged {
                    hunger: 50,
                    happiness: 50
                }
            ]
        );
    }

    #[rstest]
    fn comfort_adds_happiness() {
        let mut stats = PetStats::with_levels(50, 97, Duration::ZERO);
        let mut events = Vec::new();
        stats.comfort(secs(1), &mut events);
        assert_eq!(stats.happiness(), 100);
    }

    #[rstest]
    fn debug_penalty_floors_at_zero() {
        let mut stats = PetStats::with_levels(20, 90, Duration::ZERO);
        let mut events = Vec::new();
        stats.apply_debug_penalty(secs(1), &mut events);
        assert_eq!(stats.hunger(), 0);
        assert_eq!(stats.happiness(), 70);
        assert!(!stats.is_alive());
    }
}
