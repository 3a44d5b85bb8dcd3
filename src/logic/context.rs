//! Fixture context: picks the strategy for a tournament format and assembles the result.

use crate::logic::elimination::{build_bracket, round_name, Bracket};
use crate::logic::grouping::{group_count, group_label, partition};
use crate::logic::invariants::check_generation;
use crate::logic::round_robin::build_round_robin;
use crate::logic::validation::{self, ValidationOutcome};
use crate::models::{
    Fixture, FixtureError, FixtureKind, GenerationMetadata, GenerationRequest, GenerationResult,
    Match, MatchState, Participant, ParticipantId, QualifierSlot, Slot, SlotLink, TournamentFormat,
};
use serde::{Deserialize, Serialize};

/// Group members that reach the elimination phase.
pub const ADVANCERS_PER_GROUP: u32 = 2;

/// Strategy description for response messages.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StrategyInfo {
    pub name: String,
    pub format: TournamentFormat,
    pub code: u8,
}

/// Per-request strategy selector. Holds no state besides the chosen format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixtureContext {
    format: TournamentFormat,
}

impl FixtureContext {
    pub fn new(format: TournamentFormat) -> Self {
        Self { format }
    }

    /// Context for a numeric tournament type (0 league, 1 elimination, 2 groups + elimination).
    pub fn from_code(code: u8) -> Result<Self, FixtureError> {
        TournamentFormat::from_code(code).map(Self::new)
    }

    pub fn format(&self) -> TournamentFormat {
        self.format
    }

    pub fn info(&self) -> StrategyInfo {
        StrategyInfo {
            name: self.format.name().to_string(),
            format: self.format,
            code: self.format.code(),
        }
    }

    pub fn validate_participants(&self, participants: &[Participant]) -> ValidationOutcome {
        let outcome = validation::validate_participants(self.format, participants);
        if !outcome.valid {
            log::warn!("{}: {}", self.format.name(), outcome.message);
        }
        outcome
    }

    /// Generate every fixture and match of the tournament.
    ///
    /// Rejects invalid input instead of emitting a partial structure, and checks the
    /// assembled result before returning it.
    pub fn generate_fixtures(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, FixtureError> {
        if let Err(e) = validation::validate_request(self.format, request) {
            log::warn!(
                "tournament {}: {} rejected: {}",
                request.tournament_id,
                self.format.name(),
                e
            );
            return Err(e);
        }

        let mut builder = ResultBuilder::new(request, self.format);
        match self.format {
            TournamentFormat::League => builder.league()?,
            TournamentFormat::Elimination => builder.elimination()?,
            TournamentFormat::GroupsAndElimination => builder.groups_and_elimination()?,
        }
        let result = builder.finish();

        if let Err(e) = check_generation(&result, &request.participants) {
            log::error!("tournament {}: {}", request.tournament_id, e);
            return Err(e);
        }

        log::info!(
            "tournament {}: generated {} ({} fixtures, {} matches, {} byes)",
            request.tournament_id,
            result.metadata.strategy,
            result.metadata.fixture_count,
            result.metadata.match_count,
            result.metadata.byes
        );
        Ok(result)
    }
}

/// Group standing that will fill an elimination slot.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Qualifier {
    group: String,
    position: u32,
}

/// Accumulates fixtures and matches for one call.
struct ResultBuilder<'a> {
    request: &'a GenerationRequest,
    fixtures: Vec<Fixture>,
    matches: Vec<Match>,
    metadata: GenerationMetadata,
}

impl<'a> ResultBuilder<'a> {
    fn new(request: &'a GenerationRequest, format: TournamentFormat) -> Self {
        Self {
            request,
            fixtures: Vec::new(),
            matches: Vec::new(),
            metadata: GenerationMetadata {
                strategy: format.name().to_string(),
                format: format.code(),
                ..GenerationMetadata::default()
            },
        }
    }

    fn league(&mut self) -> Result<(), FixtureError> {
        let ids: Vec<ParticipantId> = self.request.participants.iter().map(|p| p.id).collect();
        self.metadata.rounds = self.round_robin_phase(&ids, None)?;
        Ok(())
    }

    fn elimination(&mut self) -> Result<(), FixtureError> {
        let ids: Vec<ParticipantId> = self.request.participants.iter().map(|p| p.id).collect();
        let bracket = build_bracket(&ids)?;
        self.elimination_phase(&bracket, |id| Some(*id));
        self.metadata.rounds = self.metadata.elimination_rounds;
        Ok(())
    }

    fn groups_and_elimination(&mut self) -> Result<(), FixtureError> {
        let ids: Vec<ParticipantId> = self.request.participants.iter().map(|p| p.id).collect();
        let groups = partition(&ids, group_count(ids.len()));

        let mut rounds = 0;
        for (g, members) in groups.iter().enumerate() {
            let label = group_label(g);
            rounds = rounds.max(self.round_robin_phase(members, Some(label.as_str()))?);
        }
        self.metadata.rounds = rounds;
        self.metadata.groups = groups.len();

        // Winners first, then runners-up: standard seeding keeps winners apart.
        let qualifiers: Vec<Qualifier> = (1..=ADVANCERS_PER_GROUP)
            .flat_map(|position| {
                (0..groups.len()).map(move |g| Qualifier {
                    group: group_label(g),
                    position,
                })
            })
            .collect();
        let bracket = build_bracket(&qualifiers)?;
        let indices = self.elimination_phase(&bracket, |_| None);

        for (round, round_indices) in bracket.rounds.iter().zip(&indices) {
            for (m, &match_index) in round.matches.iter().zip(round_indices) {
                for (slot, q) in [(Slot::A, &m.a), (Slot::B, &m.b)] {
                    if let Some(q) = q {
                        self.metadata.qualifier_slots.push(QualifierSlot {
                            match_index,
                            slot,
                            group: q.group.clone(),
                            position: q.position,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Emit one fixture per round-robin round. Returns the number of rounds.
    fn round_robin_phase(
        &mut self,
        ids: &[ParticipantId],
        group: Option<&str>,
    ) -> Result<u32, FixtureError> {
        if ids.len() < 2 {
            return Err(FixtureError::InvariantViolation(format!(
                "round robin for {} entrants (group {:?})",
                ids.len(),
                group
            )));
        }
        let kind = if group.is_some() {
            FixtureKind::GroupRound
        } else {
            FixtureKind::LeagueRound
        };

        let rounds = build_round_robin(ids);
        for (r, round) in rounds.iter().enumerate() {
            let round_number = r as u32 + 1;
            let name = match group {
                Some(label) => format!("Grupo {} - Jornada {}", label, round_number),
                None => format!("Jornada {}", round_number),
            };
            let fixture_ref = self.push_fixture(kind, name, round_number, group);
            for &(a, b) in &round.pairings {
                self.push_match(fixture_ref, Some(a), Some(b), MatchState::Scheduled);
            }
        }
        Ok(rounds.len() as u32)
    }

    /// Emit one fixture per bracket round and translate bracket links into match indices.
    /// Returns the match indices of every bracket round.
    fn elimination_phase<T, F>(&mut self, bracket: &Bracket<T>, to_id: F) -> Vec<Vec<usize>>
    where
        T: Clone,
        F: Fn(&T) -> Option<ParticipantId>,
    {
        let total_rounds = bracket.rounds.len() as u32;
        let mut indices = Vec::with_capacity(bracket.rounds.len());

        for (r, round) in bracket.rounds.iter().enumerate() {
            let round_number = r as u32 + 1;
            let fixture_ref = self.push_fixture(
                FixtureKind::EliminationRound,
                round_name(round_number, total_rounds),
                round_number,
                None,
            );
            let round_indices: Vec<usize> = round
                .matches
                .iter()
                .map(|m| {
                    let state = if m.walkover {
                        MatchState::Walkover
                    } else {
                        MatchState::Scheduled
                    };
                    self.push_match(
                        fixture_ref,
                        m.a.as_ref().and_then(&to_id),
                        m.b.as_ref().and_then(&to_id),
                        state,
                    )
                })
                .collect();
            indices.push(round_indices);
        }

        self.metadata.progression.extend(bracket.links.iter().map(|l| {
            let from_match = indices[l.round as usize - 1][l.index];
            let to_match = indices[l.next_round as usize - 1][l.next_index];
            SlotLink {
                round: l.round,
                index: l.index,
                next_round: l.next_round,
                next_index: l.next_index,
                slot: l.slot,
                from_match,
                to_match,
            }
        }));
        self.metadata.elimination_rounds = total_rounds;
        self.metadata.byes = bracket.byes;
        self.metadata.bracket_size = Some(bracket.size);
        indices
    }

    fn push_fixture(
        &mut self,
        kind: FixtureKind,
        name: String,
        round_number: u32,
        group: Option<&str>,
    ) -> usize {
        self.fixtures.push(Fixture {
            kind,
            tournament_id: self.request.tournament_id,
            name,
            round_number,
            group: group.map(str::to_string),
            start_date: self.request.start_date,
            end_date: self.request.end_date,
        });
        self.fixtures.len() - 1
    }

    fn push_match(
        &mut self,
        fixture_ref: usize,
        participant_a: Option<ParticipantId>,
        participant_b: Option<ParticipantId>,
        state: MatchState,
    ) -> usize {
        self.matches.push(Match {
            tournament_id: self.request.tournament_id,
            fixture_ref,
            participant_a,
            participant_b,
            date_time: self.request.start_date.and_time(chrono::NaiveTime::MIN),
            venue: self.request.venue().to_string(),
            state,
            referee_id: None,
        });
        self.matches.len() - 1
    }

    fn finish(mut self) -> GenerationResult {
        self.metadata.fixture_count = self.fixtures.len();
        self.metadata.match_count = self.matches.len();
        GenerationResult {
            fixtures: self.fixtures,
            matches: self.matches,
            metadata: self.metadata,
        }
    }
}
