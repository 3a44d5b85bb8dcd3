//! Integration tests for the fixture context: validation, the three formats, and the result shape.

use chrono::NaiveDate;
use club_fixtures::{
    check_generation, FixtureContext, FixtureError, FixtureKind, GenerationRequest, MatchState,
    Participant, Slot, TournamentFormat, DEFAULT_VENUE,
};
use std::collections::HashSet;

fn participants(n: i64) -> Vec<Participant> {
    (1..=n).map(|i| Participant::individual(i, format!("P{i}"))).collect()
}

fn request(n: i64) -> GenerationRequest {
    GenerationRequest::new(
        42,
        participants(n),
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
    )
}

fn generate(format: TournamentFormat, n: i64) -> club_fixtures::GenerationResult {
    FixtureContext::new(format).generate_fixtures(&request(n)).unwrap()
}

#[test]
fn from_code_maps_tournament_types() {
    assert_eq!(FixtureContext::from_code(0).unwrap().format(), TournamentFormat::League);
    assert_eq!(FixtureContext::from_code(1).unwrap().format(), TournamentFormat::Elimination);
    assert_eq!(
        FixtureContext::from_code(2).unwrap().format(),
        TournamentFormat::GroupsAndElimination
    );
    assert_eq!(FixtureContext::from_code(3), Err(FixtureError::UnknownFormat(3)));
    assert_eq!("elimination".parse::<TournamentFormat>(), Ok(TournamentFormat::Elimination));
    assert_eq!("2".parse::<TournamentFormat>(), Ok(TournamentFormat::GroupsAndElimination));
}

#[test]
fn numeric_type_strings_out_of_range_are_unknown_formats() {
    assert_eq!("3".parse::<TournamentFormat>(), Err(FixtureError::UnknownFormat(3)));
    assert_eq!("300".parse::<TournamentFormat>(), Err(FixtureError::UnknownFormat(300)));
    assert_eq!(
        "99999999999999999999999".parse::<TournamentFormat>(),
        Err(FixtureError::UnknownFormat(u64::MAX))
    );
    assert!(matches!("swiss".parse::<TournamentFormat>(), Err(FixtureError::Validation(_))));
}

#[test]
fn state_and_kind_serialize_as_codes() {
    assert_eq!(MatchState::Scheduled.code(), 0);
    assert_eq!(MatchState::InProgress.code(), 1);
    assert_eq!(MatchState::Finished.code(), 2);
    assert_eq!(MatchState::Walkover.code(), 3);
    assert_eq!(FixtureKind::LeagueRound.code(), 0);
    assert_eq!(FixtureKind::EliminationRound.code(), 1);
    assert_eq!(FixtureKind::GroupRound.code(), 2);

    let r = generate(TournamentFormat::Elimination, 5);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["matches"][0]["state"], 3);
    assert_eq!(json["matches"][1]["state"], 0);
    assert_eq!(json["fixtures"][0]["kind"], 1);

    let league = serde_json::to_value(generate(TournamentFormat::League, 4)).unwrap();
    assert_eq!(league["fixtures"][0]["kind"], 0);
    let groups = serde_json::to_value(generate(TournamentFormat::GroupsAndElimination, 4)).unwrap();
    assert_eq!(groups["fixtures"][0]["kind"], 2);

    let back: club_fixtures::GenerationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
    assert!(serde_json::from_value::<MatchState>(serde_json::json!(7)).is_err());
}

#[test]
fn back_references_are_copied_through() {
    let list = vec![
        Participant::team(1, "Los Halcones").with_team(501),
        Participant::individual(2, "Ana").with_member(77),
        Participant::individual(3, "Luis").with_member(78).with_team(501),
    ];
    assert!(list[0].is_team && list[0].team_id == Some(501) && list[0].member_id.is_none());
    assert_eq!((list[2].member_id, list[2].team_id), (Some(78), Some(501)));

    let json = serde_json::to_value(&list[1]).unwrap();
    assert_eq!(json["member_id"], 77);
    let parsed: Participant = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, list[1]);

    let req = GenerationRequest::new(
        42,
        list,
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
    );
    let r = FixtureContext::new(TournamentFormat::League).generate_fixtures(&req).unwrap();
    assert_eq!(r.matches.len(), 3);
}

#[test]
fn info_names_the_strategy() {
    assert_eq!(FixtureContext::new(TournamentFormat::League).info().name, "Liga");
}

#[test]
fn group_stage_with_three_requires_four() {
    let ctx = FixtureContext::new(TournamentFormat::GroupsAndElimination);
    let outcome = ctx.validate_participants(&participants(3));
    assert!(!outcome.valid);
    assert!(outcome.message.contains("at least 4"), "{}", outcome.message);
    assert!(matches!(ctx.generate_fixtures(&request(3)), Err(FixtureError::Validation(_))));
}

#[test]
fn every_format_needs_two() {
    for format in TournamentFormat::ALL {
        let outcome = FixtureContext::new(format).validate_participants(&participants(1));
        assert!(!outcome.valid);
    }
    let league = FixtureContext::new(TournamentFormat::League);
    assert!(league.validate_participants(&participants(2)).valid);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut list = participants(4);
    list.push(Participant::team(2, "Again"));
    for format in TournamentFormat::ALL {
        let outcome = FixtureContext::new(format).validate_participants(&list);
        assert!(!outcome.valid);
        assert!(outcome.message.contains("more than once"));
    }
}

#[test]
fn start_after_end_is_rejected() {
    let mut req = request(4);
    std::mem::swap(&mut req.start_date, &mut req.end_date);
    let err = FixtureContext::new(TournamentFormat::League).generate_fixtures(&req);
    assert!(matches!(err, Err(FixtureError::Validation(_))));
}

#[test]
fn league_of_five() {
    let r = generate(TournamentFormat::League, 5);
    assert_eq!(r.fixtures.len(), 5);
    assert_eq!(r.matches.len(), 10);
    assert_eq!(r.fixtures[0].name, "Jornada 1");
    assert_eq!(r.fixtures[4].name, "Jornada 5");
    assert!(r.fixtures.iter().all(|f| f.kind == FixtureKind::LeagueRound && f.group.is_none()));
    for (i, _) in r.fixtures.iter().enumerate() {
        assert_eq!(r.matches_in_fixture(i).count(), 2);
    }

    let pairs: HashSet<_> = r
        .matches
        .iter()
        .map(|m| {
            let (a, b) = (m.participant_a.unwrap(), m.participant_b.unwrap());
            (a.min(b), a.max(b))
        })
        .collect();
    assert_eq!(pairs.len(), 10);
    assert!(r.metadata.progression.is_empty());
    assert_eq!(r.metadata.rounds, 5);
}

#[test]
fn matches_copy_tournament_data() {
    let req = request(4);
    let r = FixtureContext::new(TournamentFormat::League).generate_fixtures(&req).unwrap();
    for f in &r.fixtures {
        assert_eq!(f.tournament_id, 42);
        assert_eq!(f.start_date, req.start_date);
        assert_eq!(f.end_date, req.end_date);
    }
    for m in &r.matches {
        assert_eq!(m.tournament_id, 42);
        assert_eq!(m.date_time.date(), req.start_date);
        assert_eq!(m.venue, DEFAULT_VENUE);
        assert_eq!(m.state, MatchState::Scheduled);
        assert_eq!(m.referee_id, None);
    }
}

#[test]
fn elimination_of_five() {
    let r = generate(TournamentFormat::Elimination, 5);
    let names: Vec<_> = r.fixtures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Cuartos de Final", "Semifinal", "Final"]);
    assert_eq!(r.matches.len(), 7);
    assert_eq!(r.metadata.bracket_size, Some(8));
    assert_eq!(r.metadata.byes, 3);

    let walkovers: Vec<_> = r.matches.iter().filter(|m| m.state == MatchState::Walkover).collect();
    assert_eq!(walkovers.len(), 3);
    assert!(walkovers.iter().all(|m| m.participant_b.is_none()));

    // Round 1 real match: seeds 4 and 5.
    assert_eq!((r.matches[1].participant_a, r.matches[1].participant_b), (Some(4), Some(5)));
    // Semifinal fed by walkover + real match, and by two walkovers.
    assert_eq!((r.matches[4].participant_a, r.matches[4].participant_b), (Some(1), None));
    assert_eq!((r.matches[5].participant_a, r.matches[5].participant_b), (Some(2), Some(3)));
    // Final fully TBD.
    assert_eq!((r.matches[6].participant_a, r.matches[6].participant_b), (None, None));

    let link = r.link_from(1).unwrap();
    assert_eq!((link.to_match, link.slot), (4, Slot::B));
    assert_eq!(r.links_into(6).count(), 2);
    assert!(r.link_from(0).is_none());
    assert!(r.link_from(6).is_none());
}

#[test]
fn bracket_view_distinguishes_tbd_bye_and_decided() {
    let r = generate(TournamentFormat::Elimination, 5);

    let bye = r.matches[0].bracket_view(None);
    assert!(bye.has_result && !bye.both_known);
    assert_eq!(bye.winner, Some(1));

    let tbd = r.matches[6].bracket_view(None);
    assert!(!tbd.has_result && !tbd.both_known);

    let mut played = r.matches[1].clone();
    played.state = MatchState::Finished;
    let decided = played.bracket_view(Some(5));
    assert!(decided.has_result && decided.both_known);
    assert_eq!(decided.winner, Some(5));
}

#[test]
fn groups_and_elimination_of_eight() {
    let r = generate(TournamentFormat::GroupsAndElimination, 8);
    assert_eq!(r.metadata.groups, 2);
    assert_eq!(r.metadata.bracket_size, Some(4));
    assert_eq!(r.metadata.byes, 0);

    let group_fixtures: Vec<_> = r
        .fixtures
        .iter()
        .filter(|f| f.kind == FixtureKind::GroupRound)
        .collect();
    assert_eq!(group_fixtures.len(), 6);
    assert_eq!(group_fixtures[0].name, "Grupo A - Jornada 1");
    assert_eq!(group_fixtures[3].group.as_deref(), Some("B"));
    for (i, f) in r.fixtures.iter().enumerate() {
        if f.kind == FixtureKind::GroupRound {
            assert_eq!(r.matches_in_fixture(i).count(), 2);
        }
    }

    // Group A is the odd seeds, group B the even ones.
    let group_a: HashSet<_> = r
        .matches_in_fixture(0)
        .flat_map(|(_, m)| [m.participant_a.unwrap(), m.participant_b.unwrap()])
        .collect();
    assert_eq!(group_a, HashSet::from([1, 3, 5, 7]));

    let ko: Vec<_> = r
        .matches
        .iter()
        .enumerate()
        .filter(|(_, m)| r.fixtures[m.fixture_ref].kind == FixtureKind::EliminationRound)
        .collect();
    assert_eq!(ko.len(), 3);
    assert!(ko.iter().all(|(_, m)| m.participant_a.is_none() && m.participant_b.is_none()));

    let names: Vec<_> = r
        .fixtures
        .iter()
        .filter(|f| f.kind == FixtureKind::EliminationRound)
        .map(|f| (f.name.as_str(), f.round_number))
        .collect();
    assert_eq!(names, vec![("Semifinal", 1), ("Final", 2)]);

    // Semifinals: 1A vs 2B, 1B vs 2A.
    let first_ko = ko[0].0;
    let a = r.qualifier_for(first_ko, Slot::A).unwrap();
    let b = r.qualifier_for(first_ko, Slot::B).unwrap();
    assert_eq!((a.group.as_str(), a.position), ("A", 1));
    assert_eq!((b.group.as_str(), b.position), ("B", 2));
    assert_eq!(r.metadata.qualifier_slots.len(), 4);
    assert_eq!(r.metadata.progression.len(), 2);
}

#[test]
fn groups_with_byes_keep_qualifier_sources() {
    let r = generate(TournamentFormat::GroupsAndElimination, 12);
    assert_eq!(r.metadata.groups, 3);
    assert_eq!(r.metadata.bracket_size, Some(8));
    assert_eq!(r.metadata.byes, 2);

    for (i, m) in r.matches.iter().enumerate() {
        if m.state == MatchState::Walkover {
            let q = r.qualifier_for(i, Slot::A).unwrap();
            assert_eq!(q.position, 1);
            assert!(r.link_from(i).is_none());
        }
    }
    check_generation(&r, &participants(12)).unwrap();
}

#[test]
fn small_group_stage_has_uneven_groups() {
    let r = generate(TournamentFormat::GroupsAndElimination, 5);
    let a_rounds = r.fixtures.iter().filter(|f| f.group.as_deref() == Some("A")).count();
    let b_rounds = r.fixtures.iter().filter(|f| f.group.as_deref() == Some("B")).count();
    assert_eq!((a_rounds, b_rounds), (3, 1));
    assert_eq!(r.metadata.rounds, 3);
}

#[test]
fn invariant_check_flags_unsourced_null_slots() {
    let mut r = generate(TournamentFormat::Elimination, 4);
    r.metadata.progression.clear();
    assert!(matches!(
        check_generation(&r, &participants(4)),
        Err(FixtureError::InvariantViolation(_))
    ));
}

#[test]
fn invariant_check_flags_unknown_participants() {
    let mut r = generate(TournamentFormat::League, 4);
    r.matches[0].participant_a = Some(99);
    assert!(matches!(
        check_generation(&r, &participants(4)),
        Err(FixtureError::InvariantViolation(_))
    ));
}

#[test]
fn same_input_same_output() {
    for format in TournamentFormat::ALL {
        let a = serde_json::to_string(&generate(format, 11)).unwrap();
        let b = serde_json::to_string(&generate(format, 11)).unwrap();
        assert_eq!(a, b);
    }
}
