//! Text rendering of engine state for console drivers.

use crate::core::Player;
use crate::dice::Die;

/// One line per die in table order.
#[must_use]
pub fn dice_lines(dice: &[Die]) -> String {
    dice.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Closing line naming the session winner.
#[must_use]
pub fn winner_banner(player: &Player) -> String {
    let plural = if player.wins() == 1 { "" } else { "s" };
    format!(
        "{} is the overall winner with {} win{}",
        player.id(),
        player.wins(),
        plural
    )
}
