//! English singularization for model names.
//!
//! Only the last word of a name is singularized, so `blog_posts` becomes
//! `blog_post` and `BlogPosts` becomes `BlogPost`. The rule set is small and
//! explicit: uncountable words, a handful of irregular plurals, then ordered
//! suffix rules where the first match wins.

/// Words that are the same in singular and plural.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
    "traffic",
];

/// Singular words ending in "s" that the suffix rules would cut short.
const SINGULAR_S: &[&str] = &[
    "alias", "atlas", "bias", "bus", "canvas", "gas", "iris", "lens", "plus",
];

/// Plurals that no suffix rule handles.
const IRREGULAR: &[(&str, &str)] = &[
    ("aliases", "alias"),
    ("atlases", "atlas"),
    ("biases", "bias"),
    ("buses", "bus"),
    ("caches", "cache"),
    ("canvases", "canvas"),
    ("children", "child"),
    ("cookies", "cookie"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("gases", "gas"),
    ("geese", "goose"),
    ("lenses", "lens"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("oxen", "ox"),
    ("people", "person"),
    ("statuses", "status"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// `(plural suffix, singular suffix)`, tried in order.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("shes", "sh"),
    ("ches", "ch"),
    ("zzes", "zz"),
    ("xes", "x"),
    ("ies", "y"),
    ("ss", "ss"),
    ("us", "us"),
    ("is", "is"),
    ("s", ""),
];

/// Shortest stem a suffix rule may leave behind.
const MIN_STEM: usize = 2;

/// Singularize the last word of `s`, keeping everything before it intact.
///
/// Trailing separators are preserved. Words that are already singular come
/// back unchanged.
pub fn singularize(s: &str) -> String {
    let end = s.trim_end_matches(|c: char| !c.is_alphanumeric()).len();
    let (body, tail) = s.split_at(end);
    let (head, word) = body.split_at(last_word_start(body));
    format!("{head}{}{tail}", singularize_word(word))
}

/// Byte offset where the last word starts: after the last separator or at
/// the last lower-to-upper case hump.
fn last_word_start(s: &str) -> usize {
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (i, c) in s.char_indices() {
        if !c.is_alphanumeric() {
            start = i + c.len_utf8();
        } else if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            start = i;
        }
        prev = Some(c);
    }
    start
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty()
        || UNCOUNTABLE.contains(&lower.as_str())
        || SINGULAR_S.contains(&lower.as_str())
    {
        return word.to_string();
    }

    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return match_case(word, singular);
    }

    for (suffix, replacement) in SUFFIX_RULES {
        let Some(split) = word.len().checked_sub(suffix.len()) else {
            continue;
        };
        if split < MIN_STEM || !word.is_char_boundary(split) {
            continue;
        }
        let (stem, matched) = word.split_at(split);
        if !matched.eq_ignore_ascii_case(suffix) {
            continue;
        }
        if matched.chars().all(|c| c.is_uppercase()) {
            return format!("{stem}{}", replacement.to_uppercase());
        }
        return format!("{stem}{replacement}");
    }

    word.to_string()
}

/// Apply the casing of `original` (lower, Capitalized or UPPER) to `word`.
fn match_case(original: &str, word: &str) -> String {
    let mut chars = original.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            if original.chars().count() > 1 && chars.all(|c| c.is_uppercase()) {
                word.to_uppercase()
            } else {
                let mut rest = word.chars();
                rest.next()
                    .map(|c| c.to_uppercase().chain(rest).collect())
                    .unwrap_or_default()
            }
        }
        _ => word.to_string(),
    }
}
