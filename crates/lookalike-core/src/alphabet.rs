// Lookalike Alphabet
// The fixed set of lowercase Russian Cyrillic letters accepted as input

use std::collections::HashSet;
use std::sync::OnceLock;

/// Twenty consonants
pub const CONSONANTS: [char; 20] = [
    'б', 'в', 'г', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц', 'ч', 'ш',
    'щ',
];

/// Ten vowels
pub const VOWELS: [char; 10] = ['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

/// The semivowel
pub const SEMIVOWELS: [char; 1] = ['й'];

/// The two modifier letters ("signs")
pub const SIGNS: [char; 2] = ['ъ', 'ь'];

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = CONSONANTS.len() + VOWELS.len() + SEMIVOWELS.len() + SIGNS.len();

fn alphabet_set() -> &'static HashSet<char> {
    static ALPHABET: OnceLock<HashSet<char>> = OnceLock::new();
    ALPHABET.get_or_init(|| letters().collect())
}

/// Iterate over every letter of the alphabet (consonants, vowels, semivowel, signs)
pub fn letters() -> impl Iterator<Item = char> {
    CONSONANTS
        .into_iter()
        .chain(VOWELS)
        .chain(SEMIVOWELS)
        .chain(SIGNS)
}

/// Check whether a code point belongs to the alphabet.
///
/// Only lowercase letters are members; uppercase Cyrillic, Latin letters,
/// digits and punctuation are all outside the alphabet.
pub fn is_letter(c: char) -> bool {
    alphabet_set().contains(&c)
}
