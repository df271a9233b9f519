//! Syllable heuristic deciding whether a term needs a stress pattern
//!
//! Syllables are approximated by counting runs of vowel-like letters
//! (`a e i o u y`, case-insensitive). This is not a linguistic rule: silent-e
//! words ("time") and split vowels ("idea") miscount. The behavior is kept as
//! is because it decides which terms prompt the operator for a stressed form.

/// Count contiguous runs of vowel-like characters in `word`
pub fn vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut in_group = false;

    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    groups
}

/// A word with at most one vowel group needs no stress marker
pub fn is_monosyllabic(word: &str) -> bool {
    vowel_groups(word) <= 1
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
