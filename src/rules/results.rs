//! Round and session results.
//!
//! Both winner policies take the first maximum in roster order. Ties
//! for first are not shared: the other tied players lose the round.

use crate::core::{Player, PlayerId};

/// Outcome of one completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    /// Player awarded the win.
    pub winner: PlayerId,
    /// All players in roster order, tallies already updated.
    pub standings: Vec<Player>,
}

impl std::fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self.standings.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Index of the round winner: highest score, earliest seat on ties.
///
/// Returns `None` only for an empty roster.
#[must_use]
pub fn round_winner(players: &[Player]) -> Option<usize> {
    let mut order: Vec<usize> = (0..players.len()).collect();
    // Stable sort keeps roster order among equal scores
    order.sort_by(|&a, &b| players[b].score().cmp(&players[a].score()));
    order.first().copied()
}

/// Index of the session winner: most wins, earliest seat on ties.
#[must_use]
pub fn session_winner(players: &[Player]) -> Option<usize> {
    players
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u32)>, (i, p)| match best {
            Some((_, wins)) if wins >= p.wins() => best,
            _ => Some((i, p.wins())),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_scores(scores: &[u32]) -> Vec<Player> {
        PlayerId::all(scores.len())
            .zip(scores)
            .map(|(id, &score)| {
                let mut p = Player::new(id);
                p.set_score(score);
                p
            })
            .collect()
    }

    fn with_wins(wins: &[u32]) -> Vec<Player> {
        PlayerId::all(wins.len())
            .zip(wins)
            .map(|(id, &w)| {
                let mut p = Player::new(id);
                for _ in 0..w {
                    p.add_win();
                }
                p
            })
            .collect()
    }

    #[test]
    fn test_round_winner_first_max() {
        assert_eq!(round_winner(&with_scores(&[10, 25, 25, 3])), Some(1));
        assert_eq!(round_winner(&with_scores(&[0, 0])), Some(0));
        assert_eq!(round_winner(&with_scores(&[1, 2, 3])), Some(2));
        assert_eq!(round_winner(&[]), None);
    }

    #[test]
    fn test_session_winner_first_max() {
        assert_eq!(session_winner(&with_wins(&[0, 2, 2, 1])), Some(1));
        assert_eq!(session_winner(&with_wins(&[0, 0, 0])), Some(0));
        assert_eq!(session_winner(&with_wins(&[1, 0, 3])), Some(2));
        assert_eq!(session_winner(&[]), None);
    }

    #[test]
    fn test_summary_display() {
        let summary = RoundSummary {
            winner: PlayerId::new(1),
            standings: with_scores(&[4, 0]),
        };
        assert_eq!(
            summary.to_string(),
            "Player 1: score 4, wins 0, losses 0\nPlayer 2: score 0, wins 0, losses 0"
        );
    }
}
