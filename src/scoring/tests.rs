//! Unit tests for scoring computation logic

use super::*;

#[cfg(test)]
mod scoring_tests {
    use super::*;

    fn batting(runs: u32, balls: u32) -> PlayerMatchStats {
        PlayerMatchStats {
            runs_scored: runs,
            balls_faced: balls,
            ..Default::default()
        }
    }

    fn bowling(runs_conceded: u32, balls_bowled: u32) -> PlayerMatchStats {
        PlayerMatchStats {
            runs_conceded,
            balls_bowled,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_stats_score_zero() {
        let stats = PlayerMatchStats::default();
        assert_eq!(score(&stats), 0);
        assert_eq!(breakdown(&stats), ScoreBreakdown::default());
    }

    #[test]
    fn test_batting_base_floors_half_runs() {
        assert_eq!(breakdown(&batting(45, 0)).batting, 22);
        assert_eq!(breakdown(&batting(1, 0)).batting, 0);
    }

    #[test]
    fn test_batting_milestones_are_exclusive() {
        assert_eq!(breakdown(&batting(49, 0)).milestone, 0);
        assert_eq!(breakdown(&batting(50, 0)).milestone, 5);
        assert_eq!(breakdown(&batting(99, 0)).milestone, 5);
        assert_eq!(breakdown(&batting(100, 0)).milestone, 10);
        assert_eq!(breakdown(&batting(183, 0)).milestone, 10);
    }

    #[test]
    fn test_strike_rate_boundaries() {
        // 80 exactly is inside the lower band
        let stats = batting(80, 100);
        assert_eq!(breakdown(&stats).strike_rate, 2);
        assert_eq!(score(&stats), 40 + 5 + 2);

        assert_eq!(breakdown(&batting(81, 100)).strike_rate, 2);
        assert_eq!(breakdown(&batting(79, 100)).strike_rate, 0);

        // 100 exactly is still the lower band
        assert_eq!(breakdown(&batting(100, 100)).strike_rate, 2);

        let stats = batting(100, 99);
        let terms = breakdown(&stats);
        assert_eq!(terms.strike_rate, 6);
        assert_eq!(terms.milestone, 10);
        assert_eq!(score(&stats), 50 + 10 + 6);
    }

    #[test]
    fn test_no_balls_faced_means_no_strike_rate_bonus() {
        assert_eq!(breakdown(&batting(30, 0)).strike_rate, 0);
    }

    #[test]
    fn test_boundaries() {
        let stats = PlayerMatchStats {
            fours: 3,
            sixes: 4,
            ..Default::default()
        };
        assert_eq!(breakdown(&stats).boundaries, 3 + 8);
    }

    #[test]
    fn test_wickets_and_milestones() {
        let wickets = |n| PlayerMatchStats {
            wickets: n,
            ..Default::default()
        };
        assert_eq!(score(&wickets(2)), 20);
        assert_eq!(score(&wickets(3)), 35);
        assert_eq!(score(&wickets(4)), 45);
        assert_eq!(score(&wickets(5)), 60);
        assert_eq!(score(&wickets(7)), 80);
    }

    #[test]
    fn test_economy_bands() {
        // 6 overs
        assert_eq!(breakdown(&bowling(11, 36)).economy, 10); // 1.83
        assert_eq!(breakdown(&bowling(12, 36)).economy, 7); // 2.0
        assert_eq!(breakdown(&bowling(14, 36)).economy, 7); // 2.33
        assert_eq!(breakdown(&bowling(21, 36)).economy, 4); // 3.5
        assert_eq!(breakdown(&bowling(27, 36)).economy, 4); // 4.5
        assert_eq!(breakdown(&bowling(28, 36)).economy, 0); // 4.67
        assert_eq!(breakdown(&bowling(30, 36)).economy, 0); // 5.0
    }

    #[test]
    fn test_economy_partial_over() {
        // 10 balls, 3 runs => 1.8 per over
        assert_eq!(breakdown(&bowling(3, 10)).economy, 10);
        // 10 balls, 6 runs => 3.6 per over
        assert_eq!(breakdown(&bowling(6, 10)).economy, 4);
    }

    #[test]
    fn test_no_balls_bowled_skips_economy() {
        // Would be economy 0 if computed, which must not earn the top bonus
        assert_eq!(breakdown(&bowling(0, 0)).economy, 0);
        assert_eq!(breakdown(&bowling(0, 6)).economy, 10);
    }

    #[test]
    fn test_fielding() {
        let stats = PlayerMatchStats {
            catches: 2,
            stumpings: 1,
            run_outs: 1,
            ..Default::default()
        };
        assert_eq!(score(&stats), 40);
    }

    #[test]
    fn test_maidens_do_not_score() {
        let stats = PlayerMatchStats {
            maidens: 4,
            ..Default::default()
        };
        assert_eq!(score(&stats), 0);
    }

    #[test]
    fn test_end_to_end_batting_innings() {
        let stats = PlayerMatchStats {
            runs_scored: 80,
            balls_faced: 55,
            fours: 8,
            sixes: 1,
            ..Default::default()
        };
        let terms = breakdown(&stats);
        assert_eq!(terms.batting, 40);
        assert_eq!(terms.milestone, 5);
        assert_eq!(terms.strike_rate, 6);
        assert_eq!(terms.boundaries, 10);
        assert_eq!(score(&stats), 61);
    }

    #[test]
    fn test_all_round_performance() {
        let stats = PlayerMatchStats {
            runs_scored: 52,
            balls_faced: 40,
            fours: 5,
            sixes: 2,
            balls_bowled: 24,
            runs_conceded: 18,
            wickets: 3,
            catches: 1,
            ..Default::default()
        };
        // 26 + 5 + 6 + 9 + 30 + 5 + 4 (economy 4.5) + 10
        assert_eq!(score(&stats), 95);
    }

    #[test]
    fn test_monotonic_in_counted_fields() {
        let base = PlayerMatchStats {
            runs_scored: 40,
            balls_faced: 45,
            fours: 2,
            sixes: 1,
            balls_bowled: 24,
            runs_conceded: 20,
            wickets: 2,
            ..Default::default()
        };

        let bumps: [fn(&mut PlayerMatchStats); 7] = [
            |s: &mut PlayerMatchStats| s.runs_scored += 1,
            |s: &mut PlayerMatchStats| s.fours += 1,
            |s: &mut PlayerMatchStats| s.sixes += 1,
            |s: &mut PlayerMatchStats| s.wickets += 1,
            |s: &mut PlayerMatchStats| s.catches += 1,
            |s: &mut PlayerMatchStats| s.stumpings += 1,
            |s: &mut PlayerMatchStats| s.run_outs += 1,
        ];

        for bump in bumps {
            let mut stats = base;
            let mut previous = score(&stats);
            for _ in 0..120 {
                bump(&mut stats);
                let next = score(&stats);
                assert!(next >= previous, "score decreased: {:?}", stats);
                previous = next;
            }
        }
    }

    #[test]
    fn test_extreme_values_saturate() {
        let stats = PlayerMatchStats {
            runs_scored: u32::MAX,
            balls_faced: 1,
            fours: u32::MAX,
            sixes: u32::MAX,
            wickets: u32::MAX,
            catches: u32::MAX,
            stumpings: u32::MAX,
            run_outs: u32::MAX,
            balls_bowled: u32::MAX,
            runs_conceded: u32::MAX,
            maidens: u32::MAX,
        };
        assert_eq!(score(&stats), u32::MAX);
    }

    #[test]
    fn test_score_player_unknown_is_zero() {
        let lookup: HashMap<String, PlayerMatchStats> = HashMap::new();
        assert_eq!(score_player("Nobody", &lookup).unwrap(), 0);
    }

    #[test]
    fn test_score_player_known() {
        let mut lookup = HashMap::new();
        lookup.insert("Jasprit Bumrah".to_string(), bowling(14, 36));
        assert_eq!(score_player("Jasprit Bumrah", &lookup).unwrap(), 7);
    }

    #[test]
    fn test_stats_deserialize_with_missing_fields() {
        let stats: PlayerMatchStats =
            serde_json::from_str(r#"{"runs_scored": 12, "wickets": 1}"#).unwrap();
        assert_eq!(stats.runs_scored, 12);
        assert_eq!(stats.wickets, 1);
        assert_eq!(stats.balls_bowled, 0);
    }
}
