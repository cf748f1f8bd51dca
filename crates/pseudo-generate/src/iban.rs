//! IBAN generation with ISO 13616 check digits.
//!
//! BBAN layouts use `n` for a digit, `a` for an upper-case letter and `c`
//! for an alphanumeric character.

use pseudo_model::Locale;
use rand::Rng;

const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Country code and BBAN layout used for a locale.
fn country_layout(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::DeDe => ("DE", "nnnnnnnnnnnnnnnnnn"),
        Locale::FrFr => ("FR", "nnnnnnnnnncccccccccccnn"),
        Locale::PtBr => ("BR", "nnnnnnnnnnnnnnnnnnnnnnnac"),
        Locale::En | Locale::ZhCn | Locale::JaJp => ("GB", "aaaannnnnnnnnnnnnn"),
    }
}

/// Generate a random IBAN for the locale's country.
pub fn generate_iban<R: Rng>(locale: Locale, rng: &mut R) -> String {
    let (country, layout) = country_layout(locale);
    let bban: String = layout
        .bytes()
        .map(|kind| {
            let alphabet = match kind {
                b'a' => LETTERS,
                b'c' => ALPHANUMERIC,
                _ => DIGITS,
            };
            char::from(alphabet[rng.random_range(0..alphabet.len())])
        })
        .collect();
    let check = 98 - mod97(&format!("{bban}{country}00"));
    format!("{country}{check:02}{bban}")
}

/// Returns true when `iban` has a valid structure and check digits.
pub fn is_valid_iban(iban: &str) -> bool {
    let compact: String = iban.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() < 5 || !compact.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    let (head, bban) = compact.split_at(4);
    mod97(&format!("{bban}{head}")) == 1
}

/// Remainder of the numeric expansion of `value` modulo 97.
///
/// Letters expand to two digits (`A` = 10 ... `Z` = 35).
fn mod97(value: &str) -> u32 {
    value.chars().fold(0u32, |acc, ch| match ch.to_digit(36) {
        Some(d) if d >= 10 => (acc * 100 + d) % 97,
        Some(d) => (acc * 10 + d) % 97,
        None => acc,
    })
}
