//! Random strings.

use std::sync::LazyLock;

use rand::Rng;

static ALPHANUMERIC: LazyLock<Vec<char>> =
    LazyLock::new(|| ('0'..='9').chain('A'..='Z').chain('a'..='z').collect());

static BASIC_LATIN: LazyLock<Vec<char>> = LazyLock::new(|| (' '..='~').collect());

/// ASCII digits followed by upper- and lowercase ASCII letters.
#[must_use]
pub fn alphanumeric_characters() -> &'static [char] {
    &ALPHANUMERIC
}

/// Every printable ASCII character, U+0020 through U+007E.
#[must_use]
pub fn basic_latin_characters() -> &'static [char] {
    &BASIC_LATIN
}

/// Returns a string of `count` characters, each chosen uniformly (with
/// replacement) from `characters`.
///
/// # Panics
///
/// Panics if `characters` is empty and `count` is not zero.
pub fn random_string<G: Rng + ?Sized>(characters: &[char], count: usize, rng: &mut G) -> String {
    assert!(
        !characters.is_empty() || count == 0,
        "count must be 0 if characters is empty"
    );

    (0..count)
        .map(|_| characters[rng.random_range(0..characters.len())])
        .collect()
}

/// Returns `count` random characters from [`alphanumeric_characters`].
pub fn random_alphanumeric_string<G: Rng + ?Sized>(count: usize, rng: &mut G) -> String {
    random_string(alphanumeric_characters(), count, rng)
}

/// Returns `count` random characters from [`basic_latin_characters`].
pub fn random_basic_latin_string<G: Rng + ?Sized>(count: usize, rng: &mut G) -> String {
    random_string(basic_latin_characters(), count, rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::generator::SeedableGenerator;

    #[test]
    fn test_character_sets_have_expected_members() {
        assert_eq!(alphanumeric_characters().len(), 62);
        assert!(alphanumeric_characters().iter().all(char::is_ascii_alphanumeric));

        assert_eq!(basic_latin_characters().len(), 95);
        assert_eq!(basic_latin_characters().first(), Some(&' '));
        assert_eq!(basic_latin_characters().last(), Some(&'~'));
    }

    #[test]
    fn test_random_string_uses_only_given_characters() {
        let mut rng = SeedableGenerator::new(50);
        let characters: Vec<char> = "🤓👾💀💩".chars().collect();

        let string = random_string(&characters, 200, &mut rng);

        assert_eq!(string.chars().count(), 200);
        assert!(string.chars().all(|c| characters.contains(&c)));
        let used: HashSet<char> = string.chars().collect();
        assert_eq!(used.len(), characters.len());
    }

    #[test]
    fn test_random_string_with_zero_count_is_empty() {
        let mut rng = SeedableGenerator::new(51);

        assert_eq!(random_string(&['x'], 0, &mut rng), "");
        assert_eq!(random_string(&[], 0, &mut rng), "");
    }

    #[test]
    #[should_panic(expected = "count must be 0 if characters is empty")]
    fn test_random_string_from_no_characters_panics() {
        let mut rng = SeedableGenerator::new(52);
        random_string(&[], 3, &mut rng);
    }

    #[test]
    fn test_random_alphanumeric_string() {
        let mut rng = SeedableGenerator::new(53);

        let string = random_alphanumeric_string(64, &mut rng);

        assert_eq!(string.len(), 64);
        assert!(string.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_basic_latin_string() {
        let mut rng = SeedableGenerator::new(54);

        let string = random_basic_latin_string(64, &mut rng);

        assert_eq!(string.len(), 64);
        assert!(string.chars().all(|c| (' '..='~').contains(&c)));
    }

    #[test]
    fn test_random_string_is_reproducible() {
        let mut a = SeedableGenerator::new(55);
        let mut b = SeedableGenerator::new(55);

        assert_eq!(
            random_alphanumeric_string(32, &mut a),
            random_alphanumeric_string(32, &mut b)
        );
    }
}
