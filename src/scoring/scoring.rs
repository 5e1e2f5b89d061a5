use crate::game::word::Word;

/// `(Σ points × letter multiplier) × Π word multiplier`, where multipliers
/// only count for live letters. Wildcards carry 0 points.
pub fn word_score(word: &Word) -> u32 {
    let (sum, word_multiplier) =
        word.letters()
            .iter()
            .fold((0, 1), |(sum, multiplier), letter| {
                if letter.live {
                    (
                        sum + letter.points * letter.bonus.letter_multiplier(),
                        multiplier * letter.bonus.word_multiplier(),
                    )
                } else {
                    (sum + letter.points, multiplier)
                }
            });

    sum * word_multiplier
}

/// Total for a move: every word that contains at least one live letter.
pub fn move_score(words: &[Word]) -> u32 {
    words
        .iter()
        .filter(|word| word.include_in_scoring())
        .map(word_score)
        .sum()
}
