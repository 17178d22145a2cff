//! Ship, captain and crew scoring.
//!
//! A turn scores only when a held 6 (ship), a held 5 (captain) and a
//! held 4 (crew) are all aboard. The score is then the cargo: the sum
//! of every other die. One die per role is set aside, chosen as the
//! first held match in table order, so a second 6 or 5 still counts
//! as cargo.

use smallvec::SmallVec;

use crate::dice::{Die, DieId};

/// Face of the ship.
pub const SHIP: u8 = 6;
/// Face of the captain.
pub const CAPTAIN: u8 = 5;
/// Face of the crew.
pub const CREW: u8 = 4;

/// Faces in the order they are auto-held.
pub const AUTO_HOLD_FACES: [u8; 3] = [SHIP, CAPTAIN, CREW];

/// Which dice filled each role and what the rest adds up to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub ship: Option<DieId>,
    pub captain: Option<DieId>,
    pub crew: Option<DieId>,
    /// Sum of the dice not serving as ship, captain or crew.
    /// Only meaningful when `qualified()`.
    pub cargo: u32,
}

impl ScoreOutcome {
    /// Ship, captain and crew are all held.
    #[must_use]
    pub fn qualified(&self) -> bool {
        self.ship.is_some() && self.captain.is_some() && self.crew.is_some()
    }

    /// Points the turn is worth.
    #[must_use]
    pub fn points(&self) -> u32 {
        if self.qualified() {
            self.cargo
        } else {
            0
        }
    }
}

/// Whether any held die shows `face`.
#[must_use]
pub fn is_holding(dice: &[Die], face: u8) -> bool {
    dice.iter().any(|d| d.is_held() && d.shows(face))
}

/// Score a set of dice.
///
/// Role dice are excluded by index, never removed from a copy, so two
/// dice with the same face are never both excluded or both counted.
#[must_use]
pub fn score_dice(dice: &[Die]) -> ScoreOutcome {
    let mut excluded: SmallVec<[bool; 8]> = SmallVec::from_elem(false, dice.len());

    let mut take = |face: u8| -> Option<DieId> {
        let index = dice
            .iter()
            .enumerate()
            .position(|(i, d)| !excluded[i] && d.is_held() && d.shows(face))?;
        excluded[index] = true;
        Some(dice[index].id())
    };

    let ship = take(SHIP);
    let captain = take(CAPTAIN);
    let crew = take(CREW);

    let mut outcome = ScoreOutcome {
        ship,
        captain,
        crew,
        cargo: 0,
    };

    if outcome.qualified() {
        outcome.cargo = dice
            .iter()
            .zip(excluded.iter())
            .filter(|(_, skip)| !**skip)
            .map(|(d, _)| u32::from(d.face_value().unwrap_or(0)))
            .sum();
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DIE_SIDES;

    fn hand(faces: &[(u8, bool)]) -> Vec<Die> {
        faces
            .iter()
            .enumerate()
            .map(|(i, &(face, held))| {
                let id = DieId::from_index(i).unwrap();
                let mut die = Die::showing(id, DIE_SIDES, face).unwrap();
                if held {
                    die.hold();
                }
                die
            })
            .collect()
    }

    #[test]
    fn test_full_crew_scores_cargo() {
        let dice = hand(&[(6, true), (5, true), (4, true), (3, false), (2, false)]);
        let outcome = score_dice(&dice);

        assert!(outcome.qualified());
        assert_eq!(outcome.ship, Some(DieId('a')));
        assert_eq!(outcome.captain, Some(DieId('b')));
        assert_eq!(outcome.crew, Some(DieId('c')));
        assert_eq!(outcome.points(), 5);
    }

    #[test]
    fn test_missing_crew_scores_zero() {
        let dice = hand(&[(6, true), (5, true), (6, false), (6, false), (6, false)]);
        let outcome = score_dice(&dice);

        assert!(!outcome.qualified());
        assert_eq!(outcome.crew, None);
        assert_eq!(outcome.points(), 0);
    }

    #[test]
    fn test_unheld_roles_do_not_count() {
        let dice = hand(&[(6, true), (5, true), (4, false), (3, false), (2, false)]);
        assert_eq!(score_dice(&dice).points(), 0);
    }

    #[test]
    fn test_duplicate_faces_count_as_cargo() {
        // Second 6 and second 5 are cargo
        let dice = hand(&[(6, true), (6, true), (5, true), (5, false), (4, true)]);
        let outcome = score_dice(&dice);

        assert_eq!(outcome.ship, Some(DieId('a')));
        assert_eq!(outcome.captain, Some(DieId('c')));
        assert_eq!(outcome.crew, Some(DieId('e')));
        assert_eq!(outcome.points(), 11);
    }

    #[test]
    fn test_role_order_independent_of_position() {
        let dice = hand(&[(1, false), (4, true), (6, true), (3, false), (5, true)]);
        assert_eq!(score_dice(&dice).points(), 4);
    }

    #[test]
    fn test_three_dice_only_roles() {
        let dice = hand(&[(4, true), (5, true), (6, true)]);
        let outcome = score_dice(&dice);
        assert!(outcome.qualified());
        assert_eq!(outcome.points(), 0);
    }

    #[test]
    fn test_is_holding() {
        let dice = hand(&[(6, true), (5, false)]);
        assert!(is_holding(&dice, SHIP));
        assert!(!is_holding(&dice, CAPTAIN));
        assert!(!is_holding(&dice, CREW));
    }
}
