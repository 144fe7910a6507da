use serde_json::{json, Value};
use the_scorecard_evaluation::aggregate::aggregate_player_level;
use the_scorecard_evaluation::flatten::flatten_records;
use the_scorecard_evaluation::normalize::normalize;
use the_scorecard_evaluation::score::weighted_sum;
use the_scorecard_evaluation::{
    pipeline, FinalScoreRecord, Kpi, NormalizationMode, PlayerEntry, ScoringConfig, Weights,
};

fn snapshot(value: Value) -> Vec<PlayerEntry> {
    serde_json::from_value(value).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// A match where `puuid` went `kills`/0/0 on team 100 against one enemy.
fn stomp(match_id: &str, puuid: &str, kills: u32) -> Value {
    json!({
        "metadata": { "matchId": match_id },
        "info": {
            "participants": [
                { "puuid": puuid, "teamId": 100, "kills": kills, "win": true, "timePlayed": 1500 },
                { "puuid": "enemy", "teamId": 200, "kills": 0 },
            ],
        },
    })
}

fn two_player_fixture() -> Vec<PlayerEntry> {
    snapshot(json!([
        {
            "puuid": "puuid-a",
            "summonerName": "Alpha",
            "matches": [{
                "metadata": { "matchId": "EUW1_1" },
                "info": { "participants": [
                    {
                        "puuid": "puuid-a", "teamId": 100, "win": true,
                        "kills": 6, "deaths": 2, "assists": 4, "timePlayed": 1800,
                        "totalDamageDealtToChampions": 30000,
                        "totalMinionsKilled": 200, "neutralMinionsKilled": 40,
                        "goldEarned": 12000, "visionScore": 30, "timeCCingOthers": 20,
                        "dragonKills": 1, "turretTakedowns": 2,
                        "challenges": { "soloKills": 2, "teamDamagePercentage": 0.3 },
                    },
                    { "puuid": "ally-a", "teamId": 100, "kills": 4 },
                    { "puuid": "enemy-a", "teamId": 200, "kills": 5 },
                ]},
            }],
        },
        {
            "puuid": "puuid-b",
            "summonerName": "Bravo",
            "matches": [{
                "metadata": { "matchId": "EUW1_2" },
                "info": { "participants": [
                    { "puuid": "enemy-b", "teamId": 100, "kills": 10 },
                    {
                        "puuid": "puuid-b", "teamId": 200, "win": false,
                        "kills": 2, "deaths": 4, "assists": 12, "timePlayed": 1200,
                        "totalDamageDealtToChampions": 16000,
                        "totalMinionsKilled": 100, "goldEarned": 8000,
                        "visionScore": 60, "timeCCingOthers": 45,
                        "baronKills": 1, "riftHeraldTakedowns": 1, "turretKills": 3,
                        "challenges": { "damagePerMinute": 900, "teamDamagePercentage": 0.2 },
                    },
                    { "puuid": "ally-b", "teamId": 200, "kills": 6 },
                ]},
            }],
        },
    ]))
}

#[test]
fn end_to_end_two_players() {
    let records = pipeline::run(&two_player_fixture(), &ScoringConfig::default());
    assert_eq!(records.len(), 2);

    let (a, b) = (&records[0], &records[1]);
    assert_eq!((a.puuid(), a.summoner_name()), ("puuid-a", "Alpha"));
    assert_eq!((b.puuid(), b.summoner_name()), ("puuid-b", "Bravo"));

    assert_close(a.kpi(Kpi::Kda), 5.0);
    assert_close(a.kpi(Kpi::Dpm), 1000.0);
    assert_close(a.kpi(Kpi::KillParticipation), 1.0);
    assert_close(a.kpi(Kpi::ObjectivesTaken), 3.0);
    assert_close(b.kpi(Kpi::Kda), 3.5);
    assert_close(b.kpi(Kpi::Dpm), 900.0);
    assert_close(b.kpi(Kpi::KillParticipation), 1.75);
    assert_close(b.kpi(Kpi::ObjectivesTaken), 5.0);

    // Both farmed 400 gold per minute.
    assert_eq!(a.score(Kpi::Gpm), 50.0);
    assert_eq!(b.score(Kpi::Gpm), 50.0);
    assert_eq!(a.score(Kpi::TeamDamagePct), 100.0);
    assert_eq!(b.score(Kpi::VisionPerMin), 100.0);

    assert_close(a.solo_score, 92.5);
    assert_close(a.team_score, 20.0);
    assert_close(a.overall_score, 56.25);
    assert_close(b.solo_score, 7.5);
    assert_close(b.team_score, 80.0);
    assert_close(b.overall_score, 43.75);
}

#[test]
fn scores_stay_in_range_and_overall_is_the_average() {
    let mut players = two_player_fixture();
    players.extend(snapshot(json!([
        { "puuid": "c", "matches": [stomp("M1", "c", 1), stomp("M2", "c", 9)] },
        { "puuid": "d", "matches": [stomp("M3", "d", 30)] },
    ])));

    for mode in [NormalizationMode::MinMax, NormalizationMode::ZScore] {
        let config = ScoringConfig {
            normalization_mode: mode,
            ..Default::default()
        };
        let records = pipeline::run(&players, &config);
        assert_eq!(records.len(), 4);
        for record in &records {
            for kpi in Kpi::ALL {
                let score = record.score(kpi);
                assert!((0.0..=100.0).contains(&score), "{mode:?} {kpi}: {score}");
            }
            assert_eq!(
                record.overall_score,
                0.5 * record.solo_score + 0.5 * record.team_score
            );
        }
    }
}

#[test]
fn constant_columns_are_neutral_in_both_modes() {
    let players = snapshot(json!([
        { "puuid": "a", "matches": [stomp("M1", "a", 3)] },
        { "puuid": "b", "matches": [stomp("M2", "b", 7)] },
        { "puuid": "c", "matches": [stomp("M3", "c", 11)] },
    ]));

    for mode in [NormalizationMode::MinMax, NormalizationMode::ZScore] {
        let config = ScoringConfig {
            normalization_mode: mode,
            ..Default::default()
        };
        for record in pipeline::run(&players, &config) {
            // Everyone won with full kill participation.
            assert_eq!(record.score(Kpi::Winrate), 50.0);
            assert_eq!(record.score(Kpi::KillParticipation), 50.0);
            assert_eq!(record.score(Kpi::Gpm), 50.0);
        }
    }
}

#[test]
fn single_player_scores_are_neutral() {
    let players = snapshot(json!([{ "puuid": "solo", "matches": [stomp("M1", "solo", 4)] }]));
    let records = pipeline::run(&players, &ScoringConfig::default());
    assert_eq!(records.len(), 1);
    assert_close(records[0].solo_score, 50.0);
    assert_close(records[0].team_score, 50.0);
    assert_close(records[0].overall_score, 50.0);
}

#[test]
fn matches_are_truncated_in_input_order() {
    let matches: Vec<Value> = (1..=5).map(|k| stomp(&format!("M{k}"), "p", k)).collect();
    let players = snapshot(json!([{ "puuid": "p", "matches": matches }]));
    let config = ScoringConfig {
        max_matches_per_player: 2,
        ..Default::default()
    };

    let rows = flatten_records(&players, &config);
    let ids: Vec<_> = rows.iter().map(|row| row.match_id.as_deref()).collect();
    assert_eq!(ids, [Some("M1"), Some("M2")]);

    let aggregates = aggregate_player_level(&rows);
    assert_eq!(aggregates[0].matches, 2);
    assert_eq!(aggregates[0].kpis[Kpi::Kda], 1.5);

    let unbounded = ScoringConfig {
        max_matches_per_player: 0,
        ..Default::default()
    };
    assert_eq!(flatten_records(&players, &unbounded).len(), 5);
}

#[test]
fn matches_without_the_player_are_skipped() {
    let players = snapshot(json!([
        {
            "puuid": "p",
            "summonerName": "Present",
            "matches": [
                stomp("M1", "someone-else", 3),
                { "matchId": "M2", "info": { "participants": [] } },
                { "matchId": "M3" },
                stomp("M4", "p", 2),
            ],
        },
        { "puuid": "ghost", "matches": [stomp("M5", "someone-else", 1)] },
        { "puuid": "idle", "matches": [] },
        { "summonerName": "No Id", "matches": [stomp("M6", "p", 8)] },
    ]));

    let rows = flatten_records(&players, &ScoringConfig::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].match_id.as_deref(), Some("M4"));

    let aggregates = aggregate_player_level(&rows);
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].puuid, "p");
    assert_eq!(aggregates[0].summoner_name, "Present");
}

#[test]
fn entries_for_the_same_player_are_merged() {
    let players = snapshot(json!([
        { "puuid": "p", "summonerName": "First", "matches": [stomp("M1", "p", 2)] },
        { "puuid": "p", "summonerName": "Second", "matches": [stomp("M2", "p", 4)] },
    ]));
    let aggregates = aggregate_player_level(&flatten_records(&players, &ScoringConfig::default()));

    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].summoner_name, "First");
    assert_eq!(aggregates[0].kpis[Kpi::Kda], 3.0);
    assert_eq!(aggregates[0].kpis[Kpi::Winrate], 1.0);
}

#[test]
fn unweighted_kpis_and_unknown_weights_score_fifty() {
    let config = ScoringConfig {
        weights_solo: Weights::from([(Kpi::Kda, 1.0)]),
        weights_team: [("clutch_factor", 1.0)].into_iter().collect(),
        ..Default::default()
    };
    assert_eq!(config.weighted_kpis().into_iter().collect::<Vec<_>>(), [Kpi::Kda]);

    let aggregates = aggregate_player_level(&flatten_records(&two_player_fixture(), &config));
    let normalized = normalize(aggregates, &config.weighted_kpis(), config.normalization_mode);

    assert_eq!(normalized[0].scores[Kpi::Kda], 100.0);
    assert_eq!(normalized[0].scores[Kpi::Dpm], 50.0);
    assert_eq!(weighted_sum(&normalized[0], &config.weights_team), 50.0);

    let record = FinalScoreRecord::from_normalized(normalized[1].clone(), &config);
    assert_eq!(record.solo_score, 0.0);
    assert_eq!(record.team_score, 50.0);
    assert_eq!(record.overall_score, 25.0);
}

#[test]
fn skewed_weights_are_not_rescaled() {
    let config = ScoringConfig {
        weights_solo: Weights::from([(Kpi::Kda, 2.0)]),
        ..Default::default()
    };
    let records = pipeline::run(&two_player_fixture(), &config);
    assert_eq!(config.weights_solo.total(), 2.0);
    assert_eq!(records[0].solo_score, 200.0);
}

#[test]
fn overflowing_kpis_fall_back_to_zero() {
    let players = snapshot(json!([
        { "puuid": "a", "matches": [{ "matchId": "M1", "info": { "participants": [
            { "puuid": "a", "teamId": 100, "kills": 1e308, "assists": 1e308 },
        ]}}]},
        { "puuid": "b", "matches": [stomp("M2", "b", 1)] },
    ]));

    for mode in [NormalizationMode::MinMax, NormalizationMode::ZScore] {
        let config = ScoringConfig {
            normalization_mode: mode,
            ..Default::default()
        };
        let records = pipeline::run(&players, &config);
        assert_eq!(records[0].kpi(Kpi::Kda), 0.0);
        assert_eq!(records[0].kpi(Kpi::KillParticipation), 0.0);
        for record in &records {
            for kpi in Kpi::ALL {
                let score = record.score(kpi);
                assert!((0.0..=100.0).contains(&score), "{mode:?} {kpi}: {score}");
            }
            assert!(record.overall_score.is_finite());
        }
    }
}

#[test]
fn empty_snapshot_gives_empty_table() {
    assert!(pipeline::run(&[], &ScoringConfig::default()).is_empty());
}

#[test]
fn output_columns_follow_the_table_contract() {
    let columns = FinalScoreRecord::columns();
    assert_eq!(columns.len(), 29);
    assert_eq!(columns[..3], ["puuid", "summonerName", "kda"]);
    assert_eq!(columns[3], "winrate");
    assert_eq!(columns[13], "objectives_taken");
    assert_eq!(columns[14], "kda_score");
    assert_eq!(columns[25], "objectives_taken_score");
    assert_eq!(columns[26..], ["solo_score", "team_score", "overall_score"]);

    let records = pipeline::run(&two_player_fixture(), &ScoringConfig::default());
    let values = records[0].values();
    assert_eq!(values.len(), columns.len() - 2);
    assert_eq!(values[0], records[0].kpi(Kpi::Kda));
    assert_eq!(values[26], records[0].overall_score);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ScoringConfig = toml::from_str(
        r#"
        max_matches_per_player = 10
        normalization_mode = "z-score"

        [weights_solo]
        kda = 0.5
        winrate = 0.5
        "#,
    )
    .unwrap();

    assert_eq!(config.max_matches_per_player, 10);
    assert_eq!(config.normalization_mode, NormalizationMode::ZScore);
    assert_eq!(config.weights_solo, Weights::from([(Kpi::Kda, 0.5), (Kpi::Winrate, 0.5)]));
    assert_eq!(config.weights_team, ScoringConfig::default().weights_team);

    assert_eq!("Z-Score".parse(), Ok(NormalizationMode::ZScore));
    assert_eq!("minmax".parse(), Ok(NormalizationMode::MinMax));
    assert!("rank".parse::<NormalizationMode>().is_err());

    let config: ScoringConfig = toml::from_str("").unwrap();
    assert_eq!(config, ScoringConfig::default());
    assert_eq!(config.match_limit(), Some(50));
}
