use deunicode::deunicode;
use itertools::Itertools;

/// Lowercase words joined by `_`, e.g. `Add Example - terms` becomes `add_example_terms`.
///
/// Words break on any non alphanumeric character, on lower to upper case transitions,
/// before the last capital of an acronym followed by a lowercase letter and between
/// letters and digits. Apostrophes are dropped so `Don't` stays a single word.
/// Accented letters are transliterated first, `Société` gives `societe`.
pub fn snake_case(input: &str) -> String {
    words(&deunicode(input))
        .into_iter()
        .map(|word| word.to_lowercase())
        .join("_")
}

fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect();

    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }

        let previous = i.checked_sub(1).and_then(|p| chars.get(p)).copied();
        if let Some(previous) = previous {
            if is_boundary(previous, c, chars.get(i + 1).copied()) {
                flush(&mut current, &mut words);
            }
        }

        current.push(c);
    }
    flush(&mut current, &mut words);

    words
}

fn is_boundary(previous: char, current: char, next: Option<char>) -> bool {
    if !previous.is_alphanumeric() {
        return false;
    }

    (previous.is_lowercase() && current.is_uppercase())
        || (previous.is_alphabetic() && current.is_numeric())
        || (previous.is_numeric() && current.is_alphabetic())
        || (previous.is_uppercase() && current.is_uppercase() && next.is_some_and(char::is_lowercase))
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
