//! Guess alphabets
//!
//! A [`Symbol`] is one cell of a guess: a letter for the word game or a digit
//! for the code game. Letters compare through their normalized form so that
//! `É` and `E` score the same.

use std::fmt;

/// One cell of a secret or guess
pub trait Symbol: Copy + Eq + fmt::Debug + fmt::Display {
    /// Interpret a key press as a symbol of this alphabet
    ///
    /// Returns `None` for keys outside the alphabet.
    fn from_key(key: char) -> Option<Self>;

    /// Form used for comparisons and dictionary lookups
    #[must_use]
    fn normalized(self) -> Self {
        self
    }
}

impl Symbol for char {
    /// Accepts `A-Z` and `Ç` in either case, returned upper-cased
    fn from_key(key: char) -> Option<Self> {
        let mut upper = key.to_uppercase();
        let ch = upper.next()?;
        if upper.next().is_some() {
            return None;
        }
        (ch.is_ascii_uppercase() || ch == 'Ç').then_some(ch)
    }

    fn normalized(self) -> Self {
        strip_accent(self).to_ascii_uppercase()
    }
}

/// Strip the diacritic from a Latin-1 letter
///
/// Covers the letters whose canonical decomposition is a base letter plus a
/// combining mark. Anything else is returned unchanged.
///
/// # Examples
/// ```
/// use termo::core::strip_accent;
///
/// assert_eq!(strip_accent('ã'), 'a');
/// assert_eq!(strip_accent('Ç'), 'C');
/// assert_eq!(strip_accent('x'), 'x');
/// ```
#[must_use]
pub const fn strip_accent(c: char) -> char {
    match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Case-fold and strip diacritics
///
/// # Examples
/// ```
/// use termo::core::normalize;
///
/// assert_eq!(normalize("Ação"), "ACAO");
/// assert_eq!(normalize("pêssego"), "PESSEGO");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(strip_accent)
        .flat_map(char::to_uppercase)
        .collect()
}
