//! Unit tests for the scrape join logic

use super::*;

fn prop_line(player: &str) -> PropLine {
    PropLine {
        player: player.to_string(),
        team: Some("SEA".to_string()),
        slug: player.to_lowercase().replace(' ', "-"),
        stat: StatKind::Hits,
        line: 1.5,
        over_odds: Some(-110),
        under_odds: Some(-110),
        date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
    }
}

fn averages(overall: f64, games: usize) -> WindowAverages {
    WindowAverages {
        overall: Some(overall),
        home: None,
        away: Some(overall),
        games,
    }
}

#[test]
fn test_build_rows_excludes_players_without_averages() {
    // Three players on the board, the middle one failed to fetch
    let lines = vec![prop_line("Julio Rodriguez"), prop_line("Cal Raleigh"), prop_line("Randy Arozarena")];
    let mut avgs = BTreeMap::new();
    avgs.insert("Julio Rodriguez".to_string(), averages(1.2, 5));
    avgs.insert("Randy Arozarena".to_string(), averages(0.8, 5));

    let rows = build_report_rows(&lines, &avgs);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.player != "Cal Raleigh"));
}

#[test]
fn test_build_rows_sorted_by_player() {
    let lines = vec![prop_line("Zed Last"), prop_line("Abe First")];
    let mut avgs = BTreeMap::new();
    avgs.insert("Zed Last".to_string(), averages(1.0, 3));
    avgs.insert("Abe First".to_string(), averages(2.0, 3));

    let rows = build_report_rows(&lines, &avgs);
    assert_eq!(rows[0].player, "Abe First");
    assert_eq!(rows[1].player, "Zed Last");
}

#[test]
fn test_build_rows_carries_line_and_averages() {
    let lines = vec![prop_line("Julio Rodriguez")];
    let mut avgs = BTreeMap::new();
    avgs.insert("Julio Rodriguez".to_string(), averages(1.4, 4));

    let rows = build_report_rows(&lines, &avgs);
    let row = &rows[0];
    assert_eq!(row.line, 1.5);
    assert_eq!(row.over_odds, Some(-110));
    assert_eq!(row.averages.overall, Some(1.4));
    assert_eq!(row.averages.home, None);
    assert_eq!(row.averages.games, 4);
}

#[test]
fn test_build_rows_empty_inputs() {
    let rows = build_report_rows(&[], &BTreeMap::new());
    assert!(rows.is_empty());
}
