//! Behavioural tests for the pet's needs using rust-rspec.
//!
//! Covers starvation through decay, the feed and play clamps, and bringing a
//! dead pet back.

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use std::time::Duration;

use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use test_utils::count_events;
use whiskers::{PetEvent, PetStats, REVIVE_LEVEL, STAT_MAX};

#[derive(Debug, Clone)]
struct Lifecycle {
    stats: PetStats,
    events: Vec<PetEvent>,
}

impl Lifecycle {
    fn with_levels(hunger: u8, happiness: u8) -> Self {
        Self {
            stats: PetStats::with_levels(hunger, happiness, Duration::ZERO),
            events: Vec::new(),
        }
    }

    /// Hunger 10, never fed, with decay run at 11 s intervals until it
    /// starves.
    fn starved() -> Self {
        let mut state = Self::with_levels(10, 50);
        for i in 1..=10 {
            state.stats.advance(Duration::from_secs(11 * i), &mut state.events);
        }
        state
    }

    /// Killed by the debug penalty at 3 s, revived at 4 s.
    fn revived() -> Self {
        let mut state = Self::with_levels(20, 80);
        state
            .stats
            .apply_debug_penalty(Duration::from_secs(3), &mut state.events);
        state.events.clear();
        state.stats.revive(Duration::from_secs(4), &mut state.events);
        state
    }

    fn deaths(&self) -> usize {
        count_events(&self.events, |e| *e == PetEvent::Died)
    }
}

#[test]
fn neglected_pet_starves() {
    run_serial(&rspec::given(
        "a pet with hunger 10 that is never fed",
        Lifecycle::starved(),
        |scenario: &mut Scenario<Lifecycle>| {
            scenario.before_each(|state| *state = Lifecycle::starved());

            scenario.then("hunger reaches zero", |state| {
                assert_eq!(state.stats.hunger(), 0);
            });

            scenario.then("it dies exactly once", |state| {
                assert!(!state.stats.is_alive());
                assert_eq!(state.deaths(), 1);
                assert_eq!(state.events.last(), Some(&PetEvent::Died));
            });

            scenario.when("decay keeps running", |scenario| {
                scenario.before_each(|state| {
                    *state = Lifecycle::starved();
                    state
                        .stats
                        .advance(Duration::from_secs(500), &mut state.events);
                });

                scenario.then("nothing more is reported", |state| {
                    assert_eq!(state.stats.hunger(), 0);
                    assert_eq!(state.deaths(), 1);
                    assert_eq!(state.events.last(), Some(&PetEvent::Died));
                });
            });

            scenario.when("food arrives too late", |scenario| {
                scenario.before_each(|state| {
                    *state = Lifecycle::starved();
                    state.stats.feed(Duration::from_secs(200), &mut state.events);
                    state.stats.play(Duration::from_secs(201), &mut state.events);
                });

                scenario.then("the meal and the game are ignored", |state| {
                    assert_eq!(state.stats.hunger(), 0);
                    assert_eq!(state.deaths(), 1);
                    assert_eq!(state.events.last(), Some(&PetEvent::Died));
                });
            });
        },
    ));
}

#[test]
fn care_is_clamped() {
    run_serial(&rspec::given(
        "a well cared for pet",
        Lifecycle::with_levels(95, 95),
        |scenario: &mut Scenario<Lifecycle>| {
            scenario.when("it is fed", |scenario| {
                scenario.before_each(|state| {
                    *state = Lifecycle::with_levels(95, 95);
                    state.stats.feed(Duration::from_secs(1), &mut state.events);
                });

                scenario.then("both stats stop at the maximum", |state| {
                    assert_eq!(state.stats.hunger(), STAT_MAX);
                    assert_eq!(state.stats.happiness(), STAT_MAX);
                    assert_eq!(
                        state.events,
                        vec![PetEvent::StatsChanged {
                            hunger: STAT_MAX,
                            happiness: STAT_MAX
                        }]
                    );
                });
            });

            scenario.when("it is fed again once the bowl refills", |scenario| {
                scenario.before_each(|state| {
                    *state = Lifecycle::with_levels(95, 95);
                    state.stats.feed(Duration::from_secs(1), &mut state.events);
                    state.stats.feed(Duration::from_secs(5), &mut state.events);
                });

                scenario.then("the full pet reports no change", |state| {
                    assert_eq!(state.events.len(), 1);
                    assert_eq!(state.stats.last_fed_at(), Duration::from_secs(5));
                });
            });

            scenario.when("it is fed twice in quick succession", |scenario| {
                scenario.before_each(|state| {
                    *state = Lifecycle::with_levels(10, 50);
                    state.stats.feed(Duration::ZERO, &mut state.events);
                    state.stats.feed(Duration::from_secs(1), &mut state.events);
                });

                scenario.then("only the first meal counts", |state| {
                    assert_eq!(state.stats.hunger(), 40);
                    assert_eq!(state.events.len(), 1);
                });
            });

            scenario.when("it plays on an empty stomach", |scenario| {
                scenario.before_each(|state| {
                    *state = Lifecycle::with_levels(5, 40);
                    state.stats.play(Duration::from_secs(1), &mut state.events);
                });

                scenario.then("hunger bottoms out and the pet dies", |state| {
                    assert_eq!(state.stats.hunger(), 0);
                    assert_eq!(state.stats.happiness(), 65);
                    assert!(!state.stats.is_alive());
                    assert_eq!(state.deaths(), 1);
                });
            });
        },
    ));
}

#[test]
fn dead_pet_can_be_revived() {
    run_serial(&rspec::given(
        "a pet drained by the debug penalty and revived",
        Lifecycle::revived(),
        |scenario: &mut Scenario<Lifecycle>| {
            scenario.before_each(|state| *state = Lifecycle::revived());

            scenario.then("it is alive at the revive level", |state| {
                assert!(state.stats.is_alive());
                assert_eq!(state.stats.hunger(), REVIVE_LEVEL);
                assert_eq!(state.stats.happiness(), REVIVE_LEVEL);
                assert_eq!(state.stats.died_at(), None);
            });

            scenario.then("revival is announced before the new levels", |state| {
                assert_eq!(
                    state.events,
                    vec![
                        PetEvent::Revived,
                        PetEvent::StatsChanged {
                            hunger: REVIVE_LEVEL,
                            happiness: REVIVE_LEVEL
                        }
                    ]
                );
            });

            scenario.when("ten seconds pass", |scenario| {
                scenario.before_each(|state| {
                    *state = Lifecycle::revived();
                    state.stats.advance(Duration::from_secs(14), &mut state.events);
                });

                scenario.then("hunger has not decayed yet", |state| {
                    assert_eq!(state.stats.hunger(), REVIVE_LEVEL);
                });
            });

            scenario.when("just over ten seconds pass", |scenario| {
                scenario.before_each(|state| {
                    *state = Lifecycle::revived();
                    state
                        .stats
                        .advance(Duration::from_millis(14_001), &mut state.events);
                });

                scenario.then("hunger drops by one", |state| {
                    assert_eq!(state.stats.hunger(), REVIVE_LEVEL - 1);
                });
            });
        },
    ));
}
