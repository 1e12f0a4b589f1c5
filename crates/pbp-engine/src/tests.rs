//! Unit and integration tests for pbp-engine.

use pbp_core::{GameClock, GameId, GameRng, GenConfig, PlayResult, PlayType, Team, Weather};

use crate::{GameState, PlayOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn state_at(quarter: u8, time_remaining: i32, down: u8, distance: i32, yardline: i32) -> GameState {
    GameState {
        clock: GameClock::at(quarter, time_remaining),
        down,
        distance,
        yardline,
        ..GameState::kickoff(GameId(1), Team::Bills, Team::Chiefs, Weather::Clear)
    }
}

fn rng() -> GameRng {
    GameRng::from_seed(0xF00D)
}

// ── Sampler ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampler_tests {
    use super::*;
    use crate::sampler::sample;

    #[test]
    fn degenerate_range_is_deterministic() {
        let mut r = rng();
        for _ in 0..50 {
            assert_eq!(sample(&mut r, 7, 7), 7);
        }
    }

    #[test]
    fn stays_in_bounds() {
        let mut r = rng();
        for _ in 0..5_000 {
            let v = sample(&mut r, -10, 50);
            assert!((-10..=50).contains(&v), "got {v}");
        }
    }

    #[test]
    fn inverted_range_yields_midpoint() {
        let mut r = rng();
        for _ in 0..50 {
            assert_eq!(sample(&mut r, 15, -5), 5);
        }
    }

    #[test]
    fn middle_heavier_than_edges() {
        let mut r = rng();
        let (mut middle, mut edges) = (0, 0);
        for _ in 0..20_000 {
            let v = sample(&mut r, 0, 20);
            if (8..=12).contains(&v) {
                middle += 1;
            } else if v <= 2 || v >= 18 {
                edges += 1;
            }
        }
        // Uniform would give roughly 5:6; the triangle gives roughly 9:1.
        assert!(middle > 4 * edges, "middle {middle}, edges {edges}");
    }
}

// ── Outcome determinator ──────────────────────────────────────────────────────

#[cfg(test)]
mod outcome_tests {
    use super::*;
    use crate::outcome::{field_goal_make_pct, resolve};
    use crate::PlayEvent;

    #[test]
    fn kneel_always_loses_one_or_two() {
        let mut r = rng();
        for _ in 0..500 {
            let out = resolve(PlayType::Kneel, Weather::Clear, 50, &mut r);
            assert_eq!(out.result, PlayResult::Loss);
            assert!((-2..=-1).contains(&out.yards));
            assert!(!out.turnover);
            assert_eq!(out.event, PlayEvent::Normal);
        }
    }

    #[test]
    fn spike_is_incomplete_for_no_gain() {
        let mut r = rng();
        for &w in Weather::ALL {
            let out = resolve(PlayType::Spike, w, 40, &mut r);
            assert_eq!(out.triple(), (PlayResult::Incomplete, 0, false));
        }
    }

    #[test]
    fn field_goal_probability_buckets() {
        let close = field_goal_make_pct(80, Weather::Clear); // 20 yards out
        let mid = field_goal_make_pct(65, Weather::Clear); // 35 yards out
        let long = field_goal_make_pct(55, Weather::Clear); // 45 yards out
        assert!((close - 0.82).abs() < 1e-9);
        assert!((mid - 0.77).abs() < 1e-9);
        assert!((long - 0.67).abs() < 1e-9);
        // Boundaries: exactly 30 and 40 yards fall in the shorter bucket.
        assert!((field_goal_make_pct(70, Weather::Clear) - 0.82).abs() < 1e-9);
        assert!((field_goal_make_pct(60, Weather::Clear) - 0.77).abs() < 1e-9);
        assert!((field_goal_make_pct(55, Weather::Windy) - 0.67 * 0.7).abs() < 1e-9);
    }

    #[test]
    fn field_goal_rate_converges() {
        for (yardline, weather) in [(80, Weather::Clear), (65, Weather::Rain), (55, Weather::Snow)] {
            let expected = field_goal_make_pct(yardline, weather);
            let mut r = GameRng::from_seed(yardline as u64);
            let trials = 20_000;
            let mut made = 0;
            for _ in 0..trials {
                let out = resolve(PlayType::FieldGoal, weather, yardline, &mut r);
                match out.event {
                    PlayEvent::FieldGoalMade => {
                        assert_eq!(out.triple(), (PlayResult::Gain, 3, false));
                        made += 1;
                    }
                    PlayEvent::FieldGoalMissed => {
                        assert_eq!(out.triple(), (PlayResult::Loss, 0, false));
                    }
                    other => panic!("unexpected event {other:?}"),
                }
            }
            let observed = made as f64 / trials as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "{weather} from {yardline}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn punt_outcomes() {
        let mut r = rng();
        let mut seen_return_td = false;
        for _ in 0..10_000 {
            let out = resolve(PlayType::Punt, Weather::Snow, 40, &mut r);
            assert!((30..=50).contains(&out.yards), "punt yards {}", out.yards);
            match out.event {
                PlayEvent::Turnover => assert_eq!(out.triple(), (PlayResult::Fumble, out.yards, true)),
                PlayEvent::ReturnTouchdown => {
                    assert_eq!(out.result, PlayResult::Touchdown);
                    assert!(!out.turnover);
                    seen_return_td = true;
                }
                PlayEvent::Punt => assert_eq!(out.result, PlayResult::Gain),
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert!(seen_return_td, "2% return TDs should show up in 10k punts");
    }

    #[test]
    fn run_touchdown_clamps_to_goal_line() {
        let mut r = rng();
        for _ in 0..2_000 {
            let out = resolve(PlayType::Run, Weather::Clear, 97, &mut r);
            match out.result {
                PlayResult::Touchdown => {
                    assert_eq!(out.yards, 3);
                    assert_eq!(out.event, PlayEvent::Touchdown);
                }
                PlayResult::Fumble => {
                    assert!(out.turnover);
                    assert!((-5..=5).contains(&out.yards));
                }
                PlayResult::Gain => assert!((1..=2).contains(&out.yards), "{out:?}"),
                PlayResult::Loss => assert!(out.yards <= 0),
                other => panic!("unexpected run result {other}"),
            }
        }
    }

    #[test]
    fn run_zero_yards_is_a_loss() {
        let mut r = rng();
        for _ in 0..5_000 {
            let out = resolve(PlayType::QbSneak, Weather::Clear, 30, &mut r);
            if out.event == PlayEvent::Normal {
                assert_eq!(out.result == PlayResult::Gain, out.yards > 0);
                assert!((-2..=3).contains(&out.yards));
            }
        }
    }

    #[test]
    fn pass_never_loses_yards_without_a_sack() {
        let mut r = rng();
        for &play in &[PlayType::Pass, PlayType::DeepPass, PlayType::Screen] {
            for &weather in Weather::ALL {
                for _ in 0..1_000 {
                    let out = resolve(play, weather, 30, &mut r);
                    match out.result {
                        PlayResult::Sack => {
                            assert_ne!(play, PlayType::Screen, "screens are never sacked");
                            assert!((-12..=-3).contains(&out.yards));
                            assert!(!out.turnover);
                        }
                        PlayResult::Interception => {
                            assert!(out.turnover);
                            assert!((-10..=20).contains(&out.yards));
                        }
                        PlayResult::Fumble => {
                            assert!(out.turnover);
                            assert!((0..=10).contains(&out.yards));
                        }
                        PlayResult::Incomplete => assert_eq!(out.yards, 0),
                        PlayResult::Gain => assert!(out.yards >= 0),
                        PlayResult::Touchdown => assert_eq!(out.yards, 70),
                        PlayResult::Loss => panic!("{play} completion lost yardage"),
                    }
                }
            }
        }
    }

    #[test]
    fn bad_weather_raises_incompletions() {
        let count = |weather| {
            let mut r = GameRng::from_seed(11);
            (0..20_000)
                .filter(|_| {
                    resolve(PlayType::Pass, weather, 30, &mut r).result == PlayResult::Incomplete
                })
                .count()
        };
        assert!(count(Weather::Snow) > count(Weather::Clear));
    }

    #[test]
    fn turnover_flag_matches_event() {
        let mut r = rng();
        for &play in PlayType::ALL {
            for _ in 0..500 {
                let out = resolve(play, Weather::Rain, 50, &mut r);
                assert_eq!(out.turnover, out.event == PlayEvent::Turnover, "{play}: {out:?}");
            }
        }
    }
}

// ── Play selector ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod selector_tests {
    use super::*;
    use crate::{PlayCaller, SituationalCaller, select};

    #[test]
    fn leading_late_kneels() {
        let mut s = state_at(4, 40, 1, 10, 30);
        s.score_offense = 7;
        s.score_defense = 0;
        let mut r = rng();
        for _ in 0..100 {
            assert_eq!(select(&s, &mut r), PlayType::Kneel);
        }
    }

    #[test]
    fn leading_inside_two_minutes_bleeds_clock() {
        let mut s = state_at(4, 100, 2, 7, 40);
        s.score_offense = 14;
        s.score_defense = 10;
        let mut r = rng();
        let mut kneels = 0;
        for _ in 0..3_000 {
            match select(&s, &mut r) {
                PlayType::Kneel => kneels += 1,
                PlayType::Run => {}
                other => panic!("unexpected call {other}"),
            }
        }
        assert!((800..1_200).contains(&kneels), "kneels {kneels}");
    }

    #[test]
    fn trailing_late_hurries_up() {
        let mut s = state_at(4, 20, 1, 10, 30);
        s.score_offense = 3;
        s.score_defense = 10;
        let mut r = rng();
        for _ in 0..200 {
            let call = select(&s, &mut r);
            assert!(matches!(call, PlayType::Pass | PlayType::DeepPass | PlayType::Spike), "{call}");
        }
    }

    #[test]
    fn end_of_first_half_hurries_up_even_on_fourth_down() {
        let s = state_at(2, 10, 4, 8, 30);
        let mut r = rng();
        for _ in 0..100 {
            assert!(matches!(select(&s, &mut r), PlayType::Pass | PlayType::DeepPass | PlayType::Spike));
        }
    }

    #[test]
    fn tied_late_is_not_a_kneel_down() {
        let s = state_at(4, 40, 1, 10, 30);
        let mut r = rng();
        for _ in 0..200 {
            assert_ne!(select(&s, &mut r), PlayType::Kneel);
        }
    }

    #[test]
    fn fourth_down_decisions() {
        let mut r = rng();
        assert_eq!(select(&state_at(1, 600, 4, 1, 62), &mut r), PlayType::QbSneak);
        assert_eq!(select(&state_at(1, 600, 4, 2, 60), &mut r), PlayType::QbSneak);
        assert_eq!(select(&state_at(1, 600, 4, 5, 70), &mut r), PlayType::FieldGoal);
        assert_eq!(select(&state_at(1, 600, 4, 3, 65), &mut r), PlayType::FieldGoal);
        assert_eq!(select(&state_at(1, 600, 4, 1, 59), &mut r), PlayType::Punt);
        assert_eq!(select(&state_at(3, 600, 4, 12, 20), &mut r), PlayType::Punt);
    }

    #[test]
    fn situational_mixes() {
        let mut r = rng();
        for _ in 0..300 {
            let short = select(&state_at(1, 600, 2, 2, 40), &mut r);
            assert!(matches!(short, PlayType::Run | PlayType::QbSneak | PlayType::Pass));

            let long = select(&state_at(1, 600, 3, 9, 40), &mut r);
            assert!(matches!(long, PlayType::Pass | PlayType::DeepPass | PlayType::Screen));

            let red = select(&state_at(1, 600, 1, 10, 85), &mut r);
            assert!(matches!(red, PlayType::Run | PlayType::Pass | PlayType::Screen));
        }
    }

    #[test]
    fn default_mix_weights() {
        let s = state_at(1, 600, 1, 10, 30);
        let caller = SituationalCaller;
        let mut r = rng();
        let n = 20_000;
        let mut runs = 0;
        let mut passes = 0;
        for _ in 0..n {
            match caller.call_play(&s, &mut r) {
                PlayType::Run => runs += 1,
                PlayType::Pass => passes += 1,
                PlayType::DeepPass | PlayType::Screen => {}
                other => panic!("unexpected default call {other}"),
            }
        }
        let run_share = runs as f64 / n as f64;
        let pass_share = passes as f64 / n as f64;
        assert!((run_share - 0.35).abs() < 0.02, "run share {run_share}");
        assert!((pass_share - 0.40).abs() < 0.02, "pass share {pass_share}");
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn conversion_resets_chains() {
        let s = state_at(1, 600, 3, 10, 50);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Gain, 12), &mut rng());
        assert_eq!((next.down, next.distance, next.yardline), (1, 10, 62));
        assert_eq!(next.offense, Team::Bills);
        assert_eq!(next.play_count, 1);
    }

    #[test]
    fn touchdown_swaps_roles_and_scores() {
        let mut s = state_at(2, 500, 1, 10, 80);
        s.score_offense = 10;
        s.score_defense = 3;
        let next = s.advance(&PlayOutcome::touchdown(20), &mut rng());
        assert_eq!(next.offense, Team::Chiefs);
        assert_eq!(next.defense, Team::Bills);
        assert_eq!(next.score_offense, 3);
        assert_eq!(next.score_defense, 17);
        assert_eq!((next.down, next.distance, next.yardline), (1, 10, 25));
    }

    #[test]
    fn short_gain_moves_down() {
        let s = state_at(1, 600, 1, 10, 40);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Gain, 4), &mut rng());
        assert_eq!((next.down, next.distance, next.yardline), (2, 6, 44));
    }

    #[test]
    fn loss_lengthens_distance() {
        let s = state_at(1, 600, 2, 6, 44);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Sack, -8), &mut rng());
        assert_eq!((next.down, next.distance, next.yardline), (3, 14, 36));
    }

    #[test]
    fn three_yard_gain_is_not_a_field_goal() {
        let s = state_at(1, 600, 1, 10, 40);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Gain, 3), &mut rng());
        assert_eq!(next.score_offense, 0);
        assert_eq!(next.offense, Team::Bills);
        assert_eq!((next.down, next.distance, next.yardline), (2, 7, 43));
    }

    #[test]
    fn long_completion_is_not_a_punt() {
        let s = state_at(1, 600, 1, 10, 30);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Gain, 35), &mut rng());
        assert_eq!(next.offense, Team::Bills);
        assert_eq!((next.down, next.distance, next.yardline), (1, 10, 65));
    }

    #[test]
    fn field_goal_made_scores_three() {
        let mut s = state_at(1, 600, 4, 6, 70);
        s.score_offense = 7;
        let next = s.advance(&PlayOutcome::field_goal_made(), &mut rng());
        assert_eq!(next.offense, Team::Chiefs);
        assert_eq!(next.score_defense, 10);
        assert_eq!(next.score_offense, 0);
        assert_eq!(next.yardline, 25);
    }

    #[test]
    fn field_goal_missed_gives_ball_at_spot() {
        let s = state_at(1, 600, 4, 6, 70);
        let next = s.advance(&PlayOutcome::field_goal_missed(), &mut rng());
        assert_eq!(next.offense, Team::Chiefs);
        assert_eq!((next.down, next.distance, next.yardline), (1, 10, 30));
        assert_eq!(next.score_offense + next.score_defense, 0);
    }

    #[test]
    fn turnover_mirrors_field_position() {
        let mut s = state_at(1, 600, 2, 7, 35);
        s.score_offense = 14;
        let out = PlayOutcome::turnover(PlayResult::Interception, 12);
        let next = s.advance(&out, &mut rng());
        assert_eq!(next.offense, Team::Chiefs);
        assert_eq!(next.score_offense, 0);
        assert_eq!(next.score_defense, 14);
        assert_eq!((next.down, next.distance, next.yardline), (1, 10, 65));
    }

    #[test]
    fn punt_spots_receiver() {
        let s = state_at(1, 600, 4, 9, 40);
        let next = s.advance(&PlayOutcome::punt(42), &mut rng());
        assert_eq!(next.offense, Team::Chiefs);
        assert_eq!((next.down, next.distance, next.yardline), (1, 10, 58));
    }

    #[test]
    fn punt_return_touchdown_scored_like_touchdown() {
        let mut s = state_at(3, 600, 4, 9, 40);
        s.score_offense = 3;
        let next = s.advance(&PlayOutcome::return_touchdown(45), &mut rng());
        assert_eq!(next.offense, Team::Chiefs);
        assert_eq!(next.defense, Team::Bills);
        assert_eq!(next.score_offense, 0);
        assert_eq!(next.score_defense, 10);
        assert_eq!((next.down, next.distance, next.yardline), (1, 10, 25));
    }

    #[test]
    fn turnover_on_downs() {
        let mut s = state_at(1, 600, 4, 1, 62);
        s.score_defense = 21;
        let next = s.advance(&PlayOutcome::normal(PlayResult::Loss, 0), &mut rng());
        assert_eq!(next.offense, Team::Chiefs);
        assert_eq!(next.score_offense, 21);
        assert_eq!((next.down, next.distance, next.yardline), (1, 10, 38));
    }

    #[test]
    fn yardline_clamped_at_own_goal() {
        let s = state_at(1, 600, 1, 10, 2);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Sack, -9), &mut rng());
        assert_eq!(next.yardline, 1);
        assert_eq!((next.down, next.distance), (2, 19));
    }

    #[test]
    fn clock_runoff_ranges() {
        let mut r = rng();
        for _ in 0..500 {
            let s = state_at(1, 900, 1, 10, 30);
            let inc = s.advance(&PlayOutcome::normal(PlayResult::Incomplete, 0), &mut r);
            assert!((892..=897).contains(&inc.time_remaining()), "{}", inc.time_remaining());
            let run = s.advance(&PlayOutcome::normal(PlayResult::Gain, 2), &mut r);
            assert!((855..=875).contains(&run.time_remaining()), "{}", run.time_remaining());
        }
    }

    #[test]
    fn quarter_rolls_over_after_normal_play() {
        let s = state_at(1, 10, 1, 10, 50);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Gain, 2), &mut rng());
        assert_eq!(next.quarter(), 2);
        assert_eq!(next.time_remaining(), 900);

        // Turnover on downs is still a normal play.
        let s = state_at(1, 10, 4, 5, 50);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Gain, 1), &mut rng());
        assert_eq!(next.offense, Team::Chiefs);
        assert_eq!(next.quarter(), 2);
    }

    #[test]
    fn expired_clock_carries_over_possession_change() {
        for out in [
            PlayOutcome::touchdown(10),
            PlayOutcome::return_touchdown(40),
            PlayOutcome::punt(40),
            PlayOutcome::turnover(PlayResult::Fumble, 0),
            PlayOutcome::field_goal_made(),
            PlayOutcome::field_goal_missed(),
        ] {
            let s = state_at(1, 10, 2, 10, 90);
            let next = s.advance(&out, &mut rng());
            assert_eq!(next.quarter(), 1, "{:?}", out.event);
            assert!(next.time_remaining() <= 0, "{:?}", out.event);
        }
    }

    #[test]
    fn carried_clock_reported_as_zero() {
        let s = state_at(2, 5, 2, 10, 50);
        let after = s.advance(&PlayOutcome::turnover(PlayResult::Fumble, 0), &mut rng());
        let record = crate::PlayRecord::new(
            pbp_core::PlayId(7),
            &after,
            PlayType::Run,
            &PlayOutcome::normal(PlayResult::Gain, 3),
            false,
        );
        assert_eq!(record.quarter, 2);
        assert_eq!(record.time_remaining_sec, 0);

        let next = after.advance(&PlayOutcome::normal(PlayResult::Gain, 3), &mut rng());
        assert_eq!(next.quarter(), 3);
    }

    #[test]
    fn fourth_quarter_drive_continues_after_change_of_possession() {
        let s = state_at(4, 5, 4, 9, 40);
        let next = s.advance(&PlayOutcome::punt(40), &mut rng());
        assert!(!next.is_over());
        assert_eq!(next.quarter(), 4);
    }

    #[test]
    fn fourth_quarter_expiry_ends_game() {
        let s = state_at(4, 2, 1, 10, 30);
        let next = s.advance(&PlayOutcome::normal(PlayResult::Incomplete, 0), &mut rng());
        assert!(next.is_over());
    }

    #[test]
    fn score_of_tracks_identity() {
        let mut s = state_at(1, 600, 1, 10, 80);
        s.score_offense = 6;
        s.score_defense = 9;
        assert_eq!(s.score_of(Team::Bills), Some(6));
        assert_eq!(s.score_of(Team::Chiefs), Some(9));
        assert_eq!(s.score_of(Team::Rams), None);
        let next = s.advance(&PlayOutcome::touchdown(20), &mut rng());
        assert_eq!(next.score_of(Team::Bills), Some(13));
        assert_eq!(next.score_of(Team::Chiefs), Some(9));
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_props {
    use proptest::prelude::*;

    use super::*;
    use crate::outcome::resolve;

    fn any_state() -> impl Strategy<Value = GameState> {
        (1u8..=4, 1i32..=900, 1u8..=4, 1i32..=25, 1i32..=99, 0u32..60, 0u32..60)
            .prop_map(|(q, t, down, distance, yardline, so, sd)| {
                let mut s = state_at(q, t, down, distance, yardline);
                s.score_offense = so;
                s.score_defense = sd;
                s
            })
    }

    proptest! {
        #[test]
        fn advance_preserves_invariants(
            state   in any_state(),
            play    in 0usize..PlayType::ALL.len(),
            weather in 0usize..Weather::ALL.len(),
            seed    in any::<u64>(),
        ) {
            let mut r = GameRng::from_seed(seed);
            let play = PlayType::ALL[play];
            let weather = Weather::ALL[weather];
            let out = resolve(play, weather, state.yardline, &mut r);

            if out.result == PlayResult::Touchdown && out.event == crate::PlayEvent::Touchdown {
                prop_assert_eq!(out.yards, 100 - state.yardline);
            }

            let next = state.advance(&out, &mut r);
            prop_assert!((1..=4).contains(&next.down));
            prop_assert!((1..=99).contains(&next.yardline));
            prop_assert!(next.distance >= 1);
            prop_assert!(next.quarter() >= state.quarter());
            if out.event == crate::PlayEvent::Normal {
                prop_assert!(next.time_remaining() > 0);
            } else {
                prop_assert_eq!(next.quarter(), state.quarter());
            }
            prop_assert_eq!(next.play_count, state.play_count + 1);

            // Scores only grow, tracked by team identity.
            let before = (state.score_of(Team::Bills), state.score_of(Team::Chiefs));
            let after = (next.score_of(Team::Bills), next.score_of(Team::Chiefs));
            prop_assert!(after.0 >= before.0);
            prop_assert!(after.1 >= before.1);
        }
    }
}

// ── Games and the driver ──────────────────────────────────────────────────────

#[cfg(test)]
mod game_tests {
    use super::*;
    use crate::{SituationalCaller, simulate_game};

    #[test]
    fn game_runs_to_end_of_regulation() {
        let game = simulate_game(GameId(3), &GenConfig::default(), &SituationalCaller);
        assert!(game.last.is_over());
        assert!(game.plays.len() > 50, "only {} plays", game.plays.len());
        assert_eq!(game.last.play_count as usize, game.plays.len());
        assert_eq!(game.opening.yardline, 25);
        assert_eq!(game.opening.clock, GameClock::kickoff());
        for play in &game.plays {
            assert!(!play.before.is_over());
            assert_eq!(play.before.game_id, GameId(3));
        }
    }

    #[test]
    fn same_seed_same_game() {
        let cfg = GenConfig::new(100, 99);
        let a = simulate_game(GameId(5), &cfg, &SituationalCaller);
        let b = simulate_game(GameId(5), &cfg, &SituationalCaller);
        assert_eq!(a.plays, b.plays);
        assert_eq!(a.last, b.last);
    }

    #[test]
    fn weather_changes_at_most_once_at_halftime() {
        let cfg = GenConfig { weather_change_rate: 1.0, ..GenConfig::new(100, 7) };
        for id in 1..=40 {
            let game = simulate_game(GameId(id), &cfg, &SituationalCaller);
            let mut changes = 0;
            for pair in game.plays.windows(2) {
                if pair[0].before.weather != pair[1].before.weather {
                    changes += 1;
                    assert_eq!(pair[1].before.quarter(), 3);
                }
            }
            assert!(changes <= 1);
            for play in game.plays.iter().filter(|p| p.before.quarter() < 3) {
                assert_eq!(play.before.weather, game.opening.weather);
            }
        }
    }

    #[test]
    fn weather_never_changes_at_zero_rate() {
        let cfg = GenConfig { weather_change_rate: 0.0, ..GenConfig::new(100, 7) };
        for id in 1..=20 {
            let game = simulate_game(GameId(id), &cfg, &SituationalCaller);
            assert!(game.plays.iter().all(|p| p.before.weather == game.opening.weather));
        }
    }

    #[test]
    fn custom_caller_is_used() {
        struct AlwaysRun;
        impl crate::PlayCaller for AlwaysRun {
            fn call_play(&self, _: &GameState, _: &mut GameRng) -> PlayType {
                PlayType::Run
            }
        }
        let game = simulate_game(GameId(1), &GenConfig::default(), &AlwaysRun);
        assert!(game.plays.iter().all(|p| p.play_type == PlayType::Run));
    }
}

#[cfg(test)]
mod driver_tests {
    use super::*;
    use crate::{GameObserver, GeneratorBuilder, NoopObserver, PlayRecord, generate};

    #[test]
    fn exact_row_count_and_play_ids() {
        let rows = generate(1_000, 42).unwrap();
        assert_eq!(rows.len(), 1_000);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.play_id.0, i as u64);
        }
        assert_eq!(rows[0].game_id, GameId(1));
    }

    #[test]
    fn single_row() {
        let rows = generate(1, 3).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quarter, 1);
        assert_eq!(rows[0].time_remaining_sec, 900);
        assert_eq!((rows[0].down, rows[0].distance, rows[0].yardline), (1, 10, 25));
    }

    #[test]
    fn zero_rows_rejected_before_simulating() {
        assert!(generate(0, 1).is_err());
        assert!(GeneratorBuilder::new(GenConfig::new(0, 1)).build().is_err());
    }

    #[test]
    fn row_invariants_hold() {
        let rows = generate(5_000, 2024).unwrap();
        for row in &rows {
            assert!((1..=4).contains(&row.down), "{row:?}");
            assert!((1..=99).contains(&row.yardline), "{row:?}");
            assert!((1..=4).contains(&row.quarter), "{row:?}");
            assert!(row.time_remaining_sec <= 900);
            assert!(row.distance >= 1);
            match row.play_type {
                PlayType::Kneel => {
                    assert_eq!(row.play_result, PlayResult::Loss);
                    assert!((-2..=-1).contains(&row.yards_gained));
                }
                PlayType::Spike => {
                    assert_eq!(row.play_result, PlayResult::Incomplete);
                    assert_eq!(row.yards_gained, 0);
                }
                _ => {}
            }
            if row.play_result == PlayResult::Touchdown && row.play_type != PlayType::Punt {
                assert_eq!(row.yards_gained, 100 - row.yardline, "{row:?}");
            }
        }
    }

    #[test]
    fn games_are_contiguous_and_ordered() {
        let rows = generate(3_000, 8).unwrap();
        for pair in rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(b.game_id.0 == a.game_id.0 || b.game_id.0 == a.game_id.0 + 1);
            if a.game_id == b.game_id {
                assert!(b.quarter >= a.quarter);
            }
        }
        assert!(rows.last().unwrap().game_id.0 > 1, "3000 rows span several games");
    }

    #[test]
    fn same_seed_same_dataset() {
        assert_eq!(generate(2_000, 5).unwrap(), generate(2_000, 5).unwrap());
        assert_ne!(generate(500, 5).unwrap(), generate(500, 6).unwrap());
    }

    #[test]
    fn batch_size_does_not_change_rows() {
        let run = |games_per_batch| {
            let cfg = GenConfig { games_per_batch, ..GenConfig::new(2_500, 77) };
            GeneratorBuilder::new(cfg).build().unwrap().generate().unwrap()
        };
        assert_eq!(run(1), run(64));
    }

    #[test]
    fn longer_run_extends_shorter_one() {
        let short = generate(700, 13).unwrap();
        let long = generate(1_400, 13).unwrap();
        assert_eq!(&long[..700], &short[..]);
    }

    #[test]
    fn penalty_rate_is_respected() {
        let rows = generate(10_000, 4).unwrap();
        let rate = rows.iter().filter(|r| r.penalty).count() as f64 / rows.len() as f64;
        assert!((rate - 0.08).abs() < 0.015, "penalty rate {rate}");

        let cfg = GenConfig { penalty_rate: 0.0, ..GenConfig::new(1_000, 4) };
        let rows = GeneratorBuilder::new(cfg).build().unwrap().generate().unwrap();
        assert!(rows.iter().all(|r| !r.penalty));
    }

    #[test]
    fn observer_sees_every_game_and_row() {
        #[derive(Default)]
        struct Counter {
            starts:    u32,
            ends:      u32,
            truncated: u32,
            rows:      u64,
            run_end:   Option<u64>,
        }
        impl GameObserver for Counter {
            fn on_game_start(&mut self, _: GameId, opening: &GameState) {
                assert_eq!(opening.play_count, 0);
                self.starts += 1;
            }
            fn on_play(&mut self, _: &PlayRecord) {
                self.rows += 1;
            }
            fn on_game_end(&mut self, _: GameId, last: &GameState, truncated: bool) {
                assert!(last.is_over());
                self.ends += 1;
                self.truncated += u32::from(truncated);
            }
            fn on_run_end(&mut self, rows: u64) {
                self.run_end = Some(rows);
            }
        }

        let mut generator = GeneratorBuilder::new(GenConfig::new(1_234, 1)).build().unwrap();
        let mut counter = Counter::default();
        let emitted = generator.run(&mut counter).unwrap();
        assert_eq!(emitted, 1_234);
        assert_eq!(counter.rows, 1_234);
        assert_eq!(counter.run_end, Some(1_234));
        assert_eq!(counter.starts, counter.ends);
        assert!(counter.truncated <= 1);

        assert_eq!(generator.run(&mut NoopObserver).unwrap(), 1_234);
    }
}
