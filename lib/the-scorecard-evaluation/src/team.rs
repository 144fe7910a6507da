use crate::model::Participant;
use std::collections::HashMap;

/// Total kills per team identifier for one match.
///
/// Participants without a team identifier are summed under team 0 along with
/// any participant that really is on team 0.
pub fn team_kills_by_team(participants: &[Participant]) -> HashMap<i64, f64> {
    let mut totals = HashMap::new();
    for participant in participants {
        *totals.entry(participant.team_id()).or_default() += participant.kills();
    }
    totals
}
