//! Resource name inflection
//!
//! Pluralizes, singularizes and camel-cases resource names so route
//! segments (`users`), view directories and dynamic parameters (`:userId`)
//! can be derived from a single name.
//!
//! Rules are matched in order, most specific first; the first match wins.
//! Only the last word of a compound name (`blog_post`, `blog-post`) is inflected.

use heck::ToLowerCamelCase;
use once_cell::sync::Lazy;
use regex::Regex;

/// A single regex substitution rule
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: Regex::new(&format!("(?i){}", pattern)).unwrap(),
            replacement,
        })
        .collect()
}

static PLURALS: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"(quiz)$", "${1}zes"),
        (r"^(oxen)$", "${1}"),
        (r"^(ox)$", "${1}en"),
        (r"^(m|l)ice$", "${1}ice"),
        (r"^(m|l)ouse$", "${1}ice"),
        (r"(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        (r"(x|ch|ss|sh)$", "${1}es"),
        (r"([^aeiouy]|qu)y$", "${1}ies"),
        (r"(hive)$", "${1}s"),
        (r"(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
        (r"sis$", "ses"),
        (r"([ti])a$", "${1}a"),
        (r"([ti])um$", "${1}a"),
        (r"(buffal|tomat)o$", "${1}oes"),
        (r"(bu)s$", "${1}ses"),
        (r"(alias|status)$", "${1}es"),
        (r"(octop|vir)i$", "${1}i"),
        (r"(octop|vir)us$", "${1}i"),
        (r"^(ax|test)is$", "${1}es"),
        (r"s$", "s"),
        (r"$", "s"),
    ])
});

static SINGULARS: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"(database)s$", "${1}"),
        (r"(quiz)zes$", "${1}"),
        (r"(matr)ices$", "${1}ix"),
        (r"(vert|ind)ices$", "${1}ex"),
        (r"^(ox)en", "${1}"),
        (r"(alias|status)(es)?$", "${1}"),
        (r"(octop|vir)(us|i)$", "${1}us"),
        (r"^(a)x[ie]s$", "${1}xis"),
        (r"(cris|test)(is|es)$", "${1}is"),
        (r"(shoe)s$", "${1}"),
        (r"(o)es$", "${1}"),
        (r"(bus)(es)?$", "${1}"),
        (r"^(m|l)ice$", "${1}ouse"),
        (r"(x|ch|ss|sh)es$", "${1}"),
        (r"(m)ovies$", "${1}ovie"),
        (r"(s)eries$", "${1}eries"),
        (r"([^aeiouy]|qu)ies$", "${1}y"),
        (r"([lr])ves$", "${1}f"),
        (r"(tive)s$", "${1}"),
        (r"(hive)s$", "${1}"),
        (r"([^f])ves$", "${1}fe"),
        (r"(^analy)(sis|ses)$", "${1}sis"),
        (
            r"((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
            "${1}sis",
        ),
        (r"([ti])a$", "${1}um"),
        (r"(n)ews$", "${1}ews"),
        (r"(ss)$", "${1}"),
        (r"s$", ""),
    ])
});

/// (singular, plural)
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

#[derive(Clone, Copy)]
enum Number {
    Singular,
    Plural,
}

/// Returns the plural form of a word
///
/// # Examples
///
/// ```
/// use rhtmx_crud::inflect::pluralize;
///
/// assert_eq!(pluralize("user"), "users");
/// assert_eq!(pluralize("users"), "users");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("person"), "people");
/// assert_eq!(pluralize("blog_post"), "blog_posts");
/// ```
pub fn pluralize(word: &str) -> String {
    inflect(word, &PLURALS, Number::Plural)
}

/// Returns the singular form of a word
///
/// # Examples
///
/// ```
/// use rhtmx_crud::inflect::singularize;
///
/// assert_eq!(singularize("users"), "user");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("people"), "person");
/// assert_eq!(singularize("addresses"), "address");
/// ```
pub fn singularize(word: &str) -> String {
    inflect(word, &SINGULARS, Number::Singular)
}

/// Lower camel case: `blog_post` → `blogPost`
///
/// # Examples
///
/// ```
/// use rhtmx_crud::inflect::camelize;
///
/// assert_eq!(camelize("blog_post"), "blogPost");
/// assert_eq!(camelize("line-item"), "lineItem");
/// assert_eq!(camelize("user"), "user");
/// ```
pub fn camelize(word: &str) -> String {
    word.to_lower_camel_case()
}

fn inflect(word: &str, rules: &[Rule], number: Number) -> String {
    if word.is_empty() {
        return String::new();
    }

    let (head, last) = split_last_word(word);
    let lower = last.to_lowercase();

    if UNCOUNTABLES.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some(replacement) = irregular(&lower, number) {
        return format!("{}{}", head, match_case(last, replacement));
    }

    // Anchored rules (`^(m|l)ouse$`) must see the last word alone
    match rules.iter().find(|rule| rule.pattern.is_match(last)) {
        Some(rule) => format!("{}{}", head, rule.pattern.replace(last, rule.replacement)),
        None => word.to_string(),
    }
}

fn irregular(lower: &str, number: Number) -> Option<&'static str> {
    IRREGULARS.iter().find_map(|&(singular, plural)| {
        if lower == singular || lower == plural {
            Some(match number {
                Number::Singular => singular,
                Number::Plural => plural,
            })
        } else {
            None
        }
    })
}

/// Splits `blog_post` into (`blog_`, `post`)
fn split_last_word(word: &str) -> (&str, &str) {
    match word.rfind(|c: char| c == '_' || c == '-' || c == ' ') {
        Some(i) => word.split_at(i + 1),
        None => ("", word),
    }
}

/// Keeps a leading capital from the original word
fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = replacement.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(r)) if first.is_uppercase() => {
            r.to_uppercase().chain(chars).collect()
        }
        _ => replacement.to_string(),
    }
}
