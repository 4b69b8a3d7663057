//! Turn scoring.
//!
//! `FaceValue` adds up the base value of every tile placed this turn.
//! Bonus squares play no part.
//!
//! `Premium` scales each tile by its square's letter multiplier, then
//! scales the total by every word multiplier under the placed tiles.
//! There is no word detection, so all placements count as one move.
//! Totals saturate at `u32::MAX`.

use crate::board::bonus_at;
use crate::core::ScoringRule;

use super::Placement;

/// Points earned by one turn's placements.
pub fn turn_score<'a, I>(rule: ScoringRule, placements: I) -> u32
where
    I: IntoIterator<Item = &'a Placement>,
{
    match rule {
        ScoringRule::FaceValue => placements
            .into_iter()
            .map(|p| u32::from(p.tile.value()))
            .fold(0u32, u32::saturating_add),
        ScoringRule::Premium => {
            let mut letters = 0u32;
            let mut word = 1u32;
            for placement in placements {
                let value = u32::from(placement.tile.value());
                match bonus_at(placement.position) {
                    Some(bonus) => {
                        letters = letters.saturating_add(value * bonus.letter_multiplier());
                        word = word.saturating_mul(bonus.word_multiplier());
                    }
                    None => letters = letters.saturating_add(value),
                }
            }
            letters.saturating_mul(word)
        }
    }
}
