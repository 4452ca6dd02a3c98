//! Unit tests for the search and leaderboard queries

use super::*;

fn row(player: &str, tournament: &str, shots: f64, shot_plus: f64, rating: f64) -> Row {
    Row {
        player: player.to_string(),
        tournament: tournament.to_string(),
        shots,
        shot_plus,
        rating,
    }
}

fn sample_dataset() -> Dataset {
    Dataset::from_rows(vec![
        row("A", "Cup 2020", 10.0, 50.0, 100.0),
        row("A", "Cup 2021", 0.0, 80.0, 100.0),
    ])
}

#[test]
fn empty_query_returns_nothing() {
    let dataset = sample_dataset();
    assert!(search(&dataset, "").is_empty());
    assert!(search(&dataset, "   ").is_empty());
}

#[test]
fn unmatched_query_returns_nothing() {
    let dataset = sample_dataset();
    assert!(search(&dataset, "zzz").is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    let dataset = Dataset::from_rows(vec![
        row("Ali Khan", "World Cup 2023", 100.0, 55.0, 110.0),
        row("Bo Chen", "World Cup 2023", 90.0, 60.0, 110.0),
    ]);
    let records = search(&dataset, "ali");
    // One tournament row, one year subtotal, one overall total.
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].player, "Ali Khan");
}

#[test]
fn search_emits_rows_then_year_subtotals_then_total() {
    let records = search(&sample_dataset(), "A");
    assert_eq!(records.len(), 5);

    // Per-tournament rows in original dataset order.
    assert_eq!(records[0].tournament, "Cup 2020");
    assert_eq!(records[0].adjusted_rating, 50.0);
    assert_eq!(records[0].year, Some(2020));
    assert_eq!(records[1].tournament, "Cup 2021");
    assert_eq!(records[1].adjusted_rating, 80.0);

    // Year subtotals ascending.
    assert_eq!(records[2].player, "TOTAL 2020");
    assert_eq!(records[2].tournament, "-");
    assert_eq!(records[2].shots, 10.0);
    assert_eq!(records[2].shot_plus, 50.0);
    assert_eq!(records[2].rating, 100.0);
    assert_eq!(records[2].adjusted_rating, 50.0);

    // 2021 has zero total shots, so every weighted field is 0.
    assert_eq!(records[3].player, "TOTAL 2021");
    assert_eq!(records[3].shots, 0.0);
    assert_eq!(records[3].shot_plus, 0.0);
    assert_eq!(records[3].rating, 0.0);
    assert_eq!(records[3].adjusted_rating, 0.0);

    // Overall total is weighted only by the nonzero-shots row.
    assert_eq!(records[4].player, "TOTAL");
    assert_eq!(records[4].year, Some(0));
    assert_eq!(records[4].shots, 10.0);
    assert_eq!(records[4].adjusted_rating, 50.0);
}

#[test]
fn subtotal_shots_sum_to_matched_shots() {
    let dataset = Dataset::from_rows(vec![
        row("A", "Cup 2020", 10.0, 50.0, 100.0),
        row("A", "Open 2020", 30.0, 70.0, 90.0),
        row("A", "Cup 2021", 20.0, 60.0, 105.0),
    ]);
    let records = search(&dataset, "A");

    let row_shots: f64 = records
        .iter()
        .filter(|r| !r.player.starts_with("TOTAL"))
        .map(|r| r.shots)
        .sum();
    let subtotal_shots: f64 = records
        .iter()
        .filter(|r| r.player.starts_with("TOTAL ") && r.tournament == "-")
        .map(|r| r.shots)
        .sum();
    assert_eq!(row_shots, subtotal_shots);
}

#[test]
fn rows_without_year_are_listed_but_not_subtotaled() {
    let dataset = Dataset::from_rows(vec![
        row("A", "Cup 2020", 10.0, 50.0, 100.0),
        row("A", "Winter Open", 10.0, 90.0, 100.0),
    ]);
    let records = search(&dataset, "A");
    assert_eq!(records.len(), 4);

    assert_eq!(records[1].tournament, "Winter Open");
    assert_eq!(records[1].year, None);

    // Only 2020 gets a subtotal; the yearless row still feeds the overall.
    assert_eq!(records[2].player, "TOTAL 2020");
    assert_eq!(records[2].shots, 10.0);
    assert_eq!(records[3].player, "TOTAL");
    assert_eq!(records[3].shots, 20.0);
    assert_eq!(records[3].shot_plus, 70.0);
}

#[test]
fn search_subtotals_average_unrounded_values() {
    // Adjusted ratings 55.55 and 44.45 before rounding; equal weights.
    let dataset = Dataset::from_rows(vec![
        row("A", "Cup 2020", 10.0, 50.5, 110.0),
        row("A", "Open 2020", 10.0, 46.789, 95.0),
    ]);
    let records = search(&dataset, "A");
    let subtotal = records.iter().find(|r| r.player == "TOTAL 2020").unwrap();
    let expected: f64 = (50.5 * 110.0 / 100.0 * 10.0 + 46.789 * 95.0 / 100.0 * 10.0) / 20.0;
    assert_eq!(subtotal.adjusted_rating, (expected * 100.0).round() / 100.0);
}

#[test]
fn leaderboard_ranks_descending_by_adjusted_rating() {
    let dataset = Dataset::from_rows(vec![
        row("A", "Cup 2020", 10.0, 50.0, 100.0),
        row("B", "Cup 2020", 10.0, 70.0, 100.0),
        row("C", "Cup 2020", 10.0, 60.0, 110.0),
    ]);
    let records = leaderboard(&dataset);
    assert_eq!(records.len(), 3);
    for pair in records.windows(2) {
        assert!(pair[0].adjusted_rating >= pair[1].adjusted_rating);
    }
    assert_eq!(records[0].player, "B");
    assert_eq!(records[1].player, "C");
    assert_eq!(records[1].adjusted_rating, 66.0);
    assert_eq!(records[2].player, "A");
}

#[test]
fn leaderboard_aggregates_across_tournaments() {
    let dataset = Dataset::from_rows(vec![
        row("A", "Cup 2020", 30.0, 100.0, 100.0),
        row("A", "Open 2021", 10.0, 60.0, 100.0),
    ]);
    let records = leaderboard(&dataset);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].total_shots, 40.0);
    assert_eq!(records[0].shot_plus, 90.0);
    assert_eq!(records[0].rating, 100.0);
    assert_eq!(records[0].adjusted_rating, 90.0);
}

#[test]
fn leaderboard_zero_shots_player_uses_weight_floor() {
    let dataset = Dataset::from_rows(vec![
        row("Idle", "Cup 2020", 0.0, 80.0, 120.0),
        row("Idle", "Cup 2021", 0.0, 90.0, 110.0),
    ]);
    let records = leaderboard(&dataset);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].total_shots, 0.0);
    assert_eq!(records[0].shot_plus, 0.0);
    assert_eq!(records[0].rating, 0.0);
    assert_eq!(records[0].adjusted_rating, 0.0);
}

#[test]
fn leaderboard_ties_keep_alphabetical_order() {
    let dataset = Dataset::from_rows(vec![
        row("Zoe", "Cup 2020", 10.0, 50.0, 100.0),
        row("Amy", "Cup 2020", 10.0, 50.0, 100.0),
    ]);
    let records = leaderboard(&dataset);
    assert_eq!(records[0].player, "Amy");
    assert_eq!(records[1].player, "Zoe");
}

#[test]
fn search_record_wire_format() {
    let records = search(&sample_dataset(), "A");
    let value = serde_json::to_value(&records[0]).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "Player",
        "Tournament",
        "Tournament Rating",
        "Shots",
        "Shot+",
        "Adjusted Rating",
        "Year",
    ] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert_eq!(value["Shot+"], 50.0);
    assert_eq!(value["Year"], 2020);
}

#[test]
fn leaderboard_record_wire_format() {
    let records = leaderboard(&sample_dataset());
    let value = serde_json::to_value(&records[0]).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "Player",
        "Total Shots",
        "Weighted Shot+",
        "Weighted Tournament Rating",
        "Adjusted Rating",
    ] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
}
