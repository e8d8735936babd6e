use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Holes played per round; holes are numbered 1..=18.
pub const HOLES_PER_ROUND: u8 = 18;

/// One team's entered strokes on one hole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub team_id: Uuid,
    pub hole: u8,
    pub strokes: u32,
}

/// The full score grid for a round, keyed by (team, hole)
///
/// Holds raw entered strokes only. Which team won a hole's skin and for how
/// much is derived by the skins evaluator, never entered here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreCard {
    entries: BTreeMap<(Uuid, u8), u32>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ScoreEntry>) -> Self {
        let mut card = Self::new();
        for entry in entries {
            card.record(entry.team_id, entry.hole, entry.strokes);
        }
        card
    }

    /// Records a team's strokes for a hole, replacing any earlier entry.
    pub fn record(&mut self, team_id: Uuid, hole: u8, strokes: u32) {
        self.entries.insert((team_id, hole), strokes);
    }

    pub fn strokes_for(&self, team_id: Uuid, hole: u8) -> Option<u32> {
        self.entries.get(&(team_id, hole)).copied()
    }

    /// Summed strokes across all 18 holes, `None` if any hole is missing.
    pub fn team_total(&self, team_id: Uuid) -> Option<u32> {
        (1..=HOLES_PER_ROUND)
            .map(|hole| self.strokes_for(team_id, hole))
            .sum()
    }

    /// First (hole) gap in this team's card, if scoring is unfinished.
    pub fn first_missing_hole(&self, team_id: Uuid) -> Option<u8> {
        (1..=HOLES_PER_ROUND).find(|&hole| self.strokes_for(team_id, hole).is_none())
    }

    pub fn is_complete_for(&self, team_id: Uuid) -> bool {
        self.first_missing_hole(team_id).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_total_requires_all_holes() {
        let team = Uuid::new_v4();
        let mut card = ScoreCard::new();
        for hole in 1..=17 {
            card.record(team, hole, 4);
        }
        assert_eq!(card.team_total(team), None);
        assert_eq!(card.first_missing_hole(team), Some(18));

        card.record(team, 18, 5);
        assert_eq!(card.team_total(team), Some(17 * 4 + 5));
        assert!(card.is_complete_for(team));
    }

    #[test]
    fn test_from_entries_builds_the_grid() {
        let team = Uuid::new_v4();
        let entries = (1..=HOLES_PER_ROUND).map(|hole| ScoreEntry {
            team_id: team,
            hole,
            strokes: u32::from(hole) % 3 + 3,
        });
        let card = ScoreCard::from_entries(entries);
        assert!(card.is_complete_for(team));
        assert_eq!(card.strokes_for(team, 1), Some(4));
    }

    #[test]
    fn test_record_replaces_earlier_entry() {
        let team = Uuid::new_v4();
        let mut card = ScoreCard::new();
        card.record(team, 3, 6);
        card.record(team, 3, 5);
        assert_eq!(card.strokes_for(team, 3), Some(5));
    }
}
