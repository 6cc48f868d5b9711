//! Shared string utilities for identifier generation.

const SEPARATOR: char = '\0';

/// Split a string into words.
///
/// Word boundaries are placed between a lowercase letter or digit and a
/// following uppercase letter, between an uppercase letter and an
/// uppercase-then-lowercase pair (`HTMLParser` -> `HTML`, `Parser`), and at
/// every run of characters that are not ASCII letters or digits.
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();

    // lower|digit -> Upper
    let mut first = Vec::with_capacity(chars.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        first.push(c);
        if (c.is_ascii_lowercase() || c.is_ascii_digit())
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_uppercase())
        {
            first.push(SEPARATOR);
            first.push(chars[i + 1]);
            i += 2;
            continue;
        }
        i += 1;
    }

    // Upper -> Upper lower
    let mut second = Vec::with_capacity(first.len() + 4);
    let mut i = 0;
    while i < first.len() {
        let c = first[i];
        second.push(c);
        if c.is_ascii_uppercase()
            && first.get(i + 1).is_some_and(|n| n.is_ascii_uppercase())
            && first.get(i + 2).is_some_and(|n| n.is_ascii_lowercase())
        {
            second.push(SEPARATOR);
            second.push(first[i + 1]);
            second.push(first[i + 2]);
            i += 3;
            continue;
        }
        i += 1;
    }

    second
        .split(|c| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.iter().collect())
        .collect()
}

fn pascal_word(word: &str, index: usize) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            if index > 0 && first.is_ascii_digit() {
                format!("_{first}{rest}")
            } else {
                format!("{}{rest}", first.to_uppercase())
            }
        }
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| pascal_word(word, i))
        .collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                pascal_word(word, i)
            }
        })
        .collect()
}

/// Convert a string to CONSTANT_CASE (e.g., "helloWorld" -> "HELLO_WORLD")
pub fn to_constant_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
