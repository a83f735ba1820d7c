//! End-to-end pipeline tests over fixture data: offers payload in,
//! CSV report out. No network involved.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use mlb_props::{
    commands::scrape::build_report_rows,
    props::{compute::aggregate, gamelog::parse_game_log, offers::lines_from_payload},
    report::write_report,
    GameWindow, StatKind, WindowAverages,
};
use serde_json::json;

fn board_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn offers_payload() -> serde_json::Value {
    json!({
        "offers": [
            {
                "participants": [{ "name": "Julio Rodriguez", "team": "SEA", "slug": "julio-rodriguez" }],
                "selections": [
                    { "label": "Over", "line": 1.5, "odds": -105 },
                    { "label": "Under", "line": 1.5, "odds": -115 }
                ]
            },
            {
                "participants": [{ "name": "Cal Raleigh", "team": "SEA", "slug": "cal-raleigh" }],
                "selections": [
                    { "label": "Over", "line": 0.5, "odds": 130 },
                    { "label": "Under", "line": 0.5, "odds": -160 }
                ]
            },
            {
                "participants": [{ "name": "Randy Arozarena", "team": "SEA", "slug": "randy-arozarena" }],
                "selections": [
                    { "label": "Over", "line": 1.5, "odds": 110 },
                    { "label": "Under", "line": 1.5, "odds": -140 }
                ]
            }
        ]
    })
}

fn game_log_page() -> &'static str {
    r#"
    <table>
      <thead>
        <tr><th>Date</th><th>Opp</th><th>AB</th><th>H</th><th>HR</th></tr>
      </thead>
      <tbody>
        <tr><td>8/6</td><td>vs BOS</td><td>4</td><td>1</td><td>0</td></tr>
        <tr><td>8/5</td><td>vs BOS</td><td>5</td><td>0</td><td>0</td></tr>
        <tr><td>8/4</td><td>@ TOR</td><td>4</td><td>2</td><td>1</td></tr>
        <tr><td>8/3</td><td>@ TOR</td><td>4</td><td>1</td><td>0</td></tr>
        <tr><td>8/2</td><td>@ TOR</td><td>3</td><td>0</td><td>0</td></tr>
        <tr><td>8/1</td><td>vs LAA</td><td>4</td><td>3</td><td>2</td></tr>
      </tbody>
    </table>
    "#
}

#[test]
fn test_failed_player_is_excluded_from_report() {
    // Three players on the board; Cal Raleigh's page never fetched
    let lines = lines_from_payload(&offers_payload(), StatKind::Hits, board_date()).unwrap();
    assert_eq!(lines.len(), 3);

    let window = GameWindow::new(5);
    let mut averages = BTreeMap::new();
    for line in &lines {
        if line.player == "Cal Raleigh" {
            continue;
        }
        let entries = parse_game_log(game_log_page(), line.stat, &line.player).unwrap();
        averages.insert(line.player.clone(), aggregate(&entries, window));
    }

    let rows = build_report_rows(&lines, &averages);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.player != "Cal Raleigh"));

    let dir = tempfile::tempdir().unwrap();
    let path = write_report(dir.path(), StatKind::Hits, &rows).unwrap();
    let content = std::fs::read_to_string(path).unwrap();
    assert_eq!(content.lines().count(), 3); // header + two players
    assert!(!content.contains("Cal Raleigh"));
}

#[test]
fn test_window_and_split_semantics_through_pipeline() {
    let entries = parse_game_log(game_log_page(), StatKind::Hits, "Julio Rodriguez").unwrap();
    assert_eq!(entries.len(), 6);

    // Last 5 games: [1,0,2,1,0] -> 0.8 overall; home games are 8/6 and
    // 8/5 -> 0.5; the 8/1 home game is outside the window
    let avg = aggregate(&entries, GameWindow::new(5));
    assert_eq!(avg.games, 5);
    assert_eq!(avg.overall, Some(0.8));
    assert_eq!(avg.home, Some(0.5));
    assert_eq!(avg.away, Some(1.0));
}

#[test]
fn test_zero_home_games_stays_undefined_in_csv() {
    let lines = lines_from_payload(&offers_payload(), StatKind::Hits, board_date()).unwrap();

    let mut averages = BTreeMap::new();
    averages.insert(
        "Julio Rodriguez".to_string(),
        WindowAverages {
            overall: Some(1.0),
            home: None,
            away: Some(1.0),
            games: 3,
        },
    );

    let rows = build_report_rows(&lines, &averages);
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(dir.path(), StatKind::Hits, &rows).unwrap();
    let content = std::fs::read_to_string(path).unwrap();

    let data = content.lines().nth(1).unwrap();
    let fields: Vec<&str> = data.split(',').collect();
    // home_avg column is empty, not zero
    assert_eq!(fields[6], "");
    assert_eq!(fields[5], "1.00");
}

#[test]
fn test_rerun_over_identical_data_is_idempotent() {
    let lines = lines_from_payload(&offers_payload(), StatKind::Hits, board_date()).unwrap();
    let window = GameWindow::new(5);

    let run = || {
        let mut averages = BTreeMap::new();
        for line in &lines {
            let entries = parse_game_log(game_log_page(), line.stat, &line.player).unwrap();
            averages.insert(line.player.clone(), aggregate(&entries, window));
        }
        let rows = build_report_rows(&lines, &averages);
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), StatKind::Hits, &rows).unwrap();
        std::fs::read_to_string(path).unwrap()
    };

    assert_eq!(run(), run());
}
