//! A single die with a held/free state.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Stable die label: `a` for the first die, `b` for the second, ...
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieId(pub char);

impl DieId {
    /// Label for the die at `index` in the table's dice (0-based).
    ///
    /// Returns `None` past `z`; `GameConfig::validate` caps dice at 26.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| i < 26)
            .map(|i| Self(char::from(b'a' + i)))
    }

    #[must_use]
    pub fn label(self) -> char {
        self.0
    }
}

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A die with a fixed number of sides.
///
/// The face is `None` until the first roll and again after `reset`.
/// A held die keeps its face across rolls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    id: DieId,
    sides: u8,
    face: Option<u8>,
    held: bool,
}

impl Die {
    /// Create an unrolled, free die.
    #[must_use]
    pub fn new(id: DieId, sides: u8) -> Self {
        assert!(sides > 0, "a die needs at least one side");
        Self {
            id,
            sides,
            face: None,
            held: false,
        }
    }

    /// Create a free die already showing `face`, for setting up hands.
    ///
    /// Returns `None` if `face` is not in `1..=sides`.
    #[doc(hidden)]
    #[must_use]
    pub fn showing(id: DieId, sides: u8, face: u8) -> Option<Self> {
        (1..=sides).contains(&face).then(|| Self {
            face: Some(face),
            ..Self::new(id, sides)
        })
    }

    /// Roll the die unless it is held.
    pub fn roll(&mut self, rng: &mut GameRng) {
        if !self.held {
            self.face = Some(rng.roll_die(self.sides));
        }
    }

    pub fn hold(&mut self) {
        self.held = true;
    }

    /// Free the die and clear its face until the next roll.
    pub fn reset(&mut self) {
        self.held = false;
        self.face = None;
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Current face, `None` if not rolled since the last reset.
    #[must_use]
    pub fn face_value(&self) -> Option<u8> {
        self.face
    }

    /// Whether the die currently shows `face`.
    #[must_use]
    pub fn shows(&self, face: u8) -> bool {
        self.face == Some(face)
    }

    #[must_use]
    pub fn id(&self) -> DieId {
        self.id
    }

    #[must_use]
    pub fn sides(&self) -> u8 {
        self.sides
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.face {
            Some(face) => write!(f, "{}: {}", self.id, face)?,
            None => write!(f, "{}: -", self.id)?,
        }
        if self.held {
            write!(f, " [held]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_id_labels() {
        assert_eq!(DieId::from_index(0), Some(DieId('a')));
        assert_eq!(DieId::from_index(4).map(DieId::label), Some('e'));
        assert_eq!(DieId::from_index(25), Some(DieId('z')));
    }

    #[test]
    fn test_die_id_out_of_range() {
        assert_eq!(DieId::from_index(26), None);
        assert_eq!(DieId::from_index(300), None);
    }

    #[test]
    fn test_new_die_is_unrolled_and_free() {
        let die = Die::new(DieId('a'), 6);
        assert_eq!(die.face_value(), None);
        assert!(!die.is_held());
        assert_eq!(die.sides(), 6);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = GameRng::new(42);
        let mut die = Die::new(DieId('a'), 6);
        for _ in 0..200 {
            die.roll(&mut rng);
            let face = die.face_value().unwrap();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_held_die_keeps_face() {
        let mut rng = GameRng::new(3);
        let mut die = Die::new(DieId('b'), 6);
        die.roll(&mut rng);
        let face = die.face_value();

        die.hold();
        die.hold();
        assert!(die.is_held());

        for _ in 0..50 {
            die.roll(&mut rng);
            assert_eq!(die.face_value(), face);
        }
    }

    #[test]
    fn test_held_unrolled_die_stays_unrolled() {
        let mut rng = GameRng::new(3);
        let mut die = Die::new(DieId('c'), 6);
        die.hold();
        die.roll(&mut rng);
        assert_eq!(die.face_value(), None);
    }

    #[test]
    fn test_reset_frees_and_clears() {
        let mut die = Die::showing(DieId('a'), 6, 5).unwrap();
        die.hold();
        die.reset();
        assert!(!die.is_held());
        assert_eq!(die.face_value(), None);
    }

    #[test]
    fn test_shows() {
        let die = Die::showing(DieId('a'), 6, 4).unwrap();
        assert!(die.shows(4));
        assert!(!die.shows(5));
        assert!(!Die::new(DieId('a'), 6).shows(4));
    }

    #[test]
    fn test_showing_rejects_bad_face() {
        assert_eq!(Die::showing(DieId('a'), 6, 7), None);
        assert_eq!(Die::showing(DieId('a'), 6, 0), None);
        assert!(Die::showing(DieId('a'), 6, 6).is_some());
    }

    #[test]
    fn test_die_display() {
        let mut die = Die::showing(DieId('c'), 6, 6).unwrap();
        assert_eq!(die.to_string(), "c: 6");
        die.hold();
        assert_eq!(die.to_string(), "c: 6 [held]");
        assert_eq!(Die::new(DieId('d'), 6).to_string(), "d: -");
    }
}
