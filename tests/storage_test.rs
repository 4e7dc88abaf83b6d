//! Integration tests for the storage layer

use fantasy_cricket::{
    score_player, storage::*, Category, PlayerListing, PlayerMatchStats, Roster, TeamBudget,
};

fn create_test_db() -> PlayerDatabase {
    PlayerDatabase::new_in_memory().unwrap()
}

fn create_seeded_db() -> PlayerDatabase {
    let mut db = create_test_db();
    db.seed_default_players().unwrap();
    db
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_seeded_categories() {
    let db = create_seeded_db();
    let counts: Vec<usize> = Category::ALL
        .iter()
        .map(|c| db.list_listings(Some(*c)).unwrap().len())
        .collect();
    assert_eq!(counts, vec![10, 10, 6, 9]);
}

#[test]
fn test_unknown_player_scores_zero_through_database() {
    let db = create_seeded_db();
    assert_eq!(score_player("Somebody Else", &db).unwrap(), 0);
    // Listed but no match data
    assert_eq!(score_player("Virat Kohli", &db).unwrap(), 0);
}

#[test]
fn test_score_player_through_database() {
    let mut db = create_seeded_db();
    db.upsert_match_stats(
        "Yuzvendra Chahal",
        &PlayerMatchStats {
            balls_bowled: 24,
            runs_conceded: 7,
            wickets: 5,
            maidens: 1,
            ..Default::default()
        },
    )
    .unwrap();
    // 50 + 10 + 10 (economy 1.75)
    assert_eq!(score_player("Yuzvendra Chahal", &db).unwrap(), 70);
}

#[test]
fn test_saved_team_reloads_into_building() {
    let mut db = create_seeded_db();
    let budget = TeamBudget::default();

    let mut roster = Roster::new("Sunrisers");
    for name in ["Bhuvneshwar Kumar", "Washington Sundar"] {
        budget.add_listed_player(&mut roster, name, &db).unwrap();
    }
    let roster = budget.validate_for_save(roster, &db).unwrap();
    db.save_roster(&roster).unwrap();

    // Reload, keep building, save under a new name
    let mut reloaded = db.load_roster("Sunrisers").unwrap().unwrap();
    budget
        .add_listed_player(&mut reloaded, "Prithvi Shaw", &db)
        .unwrap();
    let renamed = budget
        .validate_for_save(reloaded.renamed("Sunrisers B"), &db)
        .unwrap();
    db.save_roster(&renamed).unwrap();

    assert_eq!(db.load_roster("Sunrisers").unwrap().unwrap().len(), 2);
    let b = db.load_roster("Sunrisers B").unwrap().unwrap();
    assert_eq!(b.len(), 3);
    assert_eq!(b.points_used(), 9 + 7 + 7);
}

#[test]
fn test_repriced_listing_caught_at_save() {
    let mut db = create_seeded_db();
    let budget = TeamBudget::with_budget(20);

    let mut roster = Roster::new("Repriced");
    for name in ["Rohit Sharma", "Ajinkya Rahane"] {
        budget.add_listed_player(&mut roster, name, &db).unwrap();
    }
    assert_eq!(roster.points_used(), 16);

    db.upsert_listing(&PlayerListing::new("Ajinkya Rahane", Category::BAT, 11))
        .unwrap();
    assert!(budget.validate_for_save(roster, &db).is_err());
}

#[test]
fn test_team_summary_into_roster() {
    let mut db = create_seeded_db();
    let mut roster = Roster::new("Summary");
    TeamBudget::default()
        .add_listed_player(&mut roster, "Samson Sanju", &db)
        .unwrap();
    db.save_roster(&roster).unwrap();

    let summary = db.list_rosters().unwrap().remove(0);
    assert_eq!(summary.players, vec!["Samson Sanju"]);
    assert_eq!(summary.points_used, 8);
    assert!(summary.saved_at > 0);
    assert_eq!(summary.into_roster(), roster);
}
