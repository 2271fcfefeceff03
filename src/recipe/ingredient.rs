//! Ingredients: parsing free-text ingredient lines and formatting amounts.

use crate::recipe_api::ApiIngredient;

/// Long unit names and the short form they are replaced with.
const UNIT_ABBREVIATIONS: [(&str, &str); 8] = [
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

/// The units recognised after abbreviation.
const UNITS: [&str; 7] = ["tbsp", "tsp", "oz", "cup", "pound", "kg", "g"];

/// The largest denominator used when showing a fractional amount.
const MAX_DENOMINATOR: u64 = 16;

/// An amount of something needed for a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub amount: f64,
    /// A short unit such as "cup", or empty for a plain count.
    pub unit: String,
    pub name: String,
}

impl Ingredient {
    /// Convert an ingredient returned by the recipe API.
    ///
    /// Structured fields are used when they are complete, otherwise the
    /// original text of the line is parsed.
    pub fn from_api(ingredient: &ApiIngredient) -> Self {
        match (ingredient.amount, &ingredient.original) {
            (Some(amount), _) if amount > 0.0 && !ingredient.name.is_empty() => Self {
                amount,
                unit: ingredient.unit.clone(),
                name: ingredient.name.clone(),
            },
            (_, Some(original)) => parse_ingredient(original),
            (amount, None) => Self {
                amount: amount.filter(|amount| *amount > 0.0).unwrap_or(1.0),
                unit: ingredient.unit.clone(),
                name: ingredient.name.clone(),
            },
        }
    }
}

/// Split a free-text ingredient line such as "4 1/2 cups mushrooms" into an
/// amount, a short unit and the rest of the text.
///
/// The line is lowercased, long unit names are abbreviated and parenthesised
/// notes are removed. When no unit is found, a leading whole number is used as
/// the amount. Anything else gets an amount of one and the whole line as its
/// name.
pub fn parse_ingredient(text: &str) -> Ingredient {
    let mut text = text.to_lowercase();
    for (long, short) in UNIT_ABBREVIATIONS {
        text = text.replacen(long, short, 1);
    }
    let text = remove_parentheses(&text);
    let words: Vec<&str> = text.split_whitespace().collect();

    if let Some(unit_index) = words.iter().position(|word| UNITS.contains(word)) {
        let amount = parse_mixed_number(&words[..unit_index]).unwrap_or(1.0);

        return Ingredient {
            amount,
            unit: words[unit_index].to_owned(),
            name: words[unit_index + 1..].join(" "),
        };
    }

    match words.first().and_then(|word| leading_whole_number(word)) {
        Some(amount) => Ingredient {
            amount,
            unit: String::new(),
            name: words[1..].join(" "),
        },
        None => Ingredient {
            amount: 1.0,
            unit: String::new(),
            name: words.join(" "),
        },
    }
}

/// Remove every "(...)" note along with the spaces around it.
fn remove_parentheses(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|close| open + close) else {
            break;
        };

        result.push_str(rest[..open].trim_end_matches(' '));
        result.push(' ');
        rest = rest[close + 1..].trim_start_matches(' ');
    }

    result.push_str(rest);
    result
}

/// Add up amounts such as ["4", "1/2"] or ["1-1/2"].
///
/// Returns `None` if there are no words or any word is not a number.
fn parse_mixed_number(words: &[&str]) -> Option<f64> {
    if words.is_empty() {
        return None;
    }

    words
        .iter()
        .flat_map(|word| word.split('-'))
        .map(parse_number)
        .sum()
}

fn parse_number(word: &str) -> Option<f64> {
    match word.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.parse().ok()?;
            let denominator: f64 = denominator.parse().ok()?;

            (denominator != 0.0).then(|| numerator / denominator)
        }
        None => word.parse().ok(),
    }
}

/// The whole number at the start of `word`, ignoring zero.
fn leading_whole_number(word: &str) -> Option<f64> {
    let end = word
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(word.len());

    word[..end]
        .parse::<u32>()
        .ok()
        .filter(|number| *number > 0)
        .map(f64::from)
}

/// Show an amount as a whole or mixed number, e.g. 2.5 becomes "2 1/2".
///
/// Amounts that are zero, negative or not a number are shown as "?".
pub fn format_count(amount: f64) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return "?".to_owned();
    }

    let mut whole = amount.trunc() as u64;
    let (mut numerator, denominator) = closest_fraction(amount.fract());

    if numerator == denominator {
        whole += 1;
        numerator = 0;
    }

    match (whole, numerator) {
        (whole, 0) => whole.to_string(),
        (0, numerator) => format!("{numerator}/{denominator}"),
        (whole, numerator) => format!("{whole} {numerator}/{denominator}"),
    }
}

/// The fraction closest to `fraction` (between zero and one) with a
/// denominator of at most [MAX_DENOMINATOR], preferring smaller denominators.
fn closest_fraction(fraction: f64) -> (u64, u64) {
    let mut best = (0, 1);
    let mut best_error = f64::INFINITY;

    for denominator in 1..=MAX_DENOMINATOR {
        let numerator = (fraction * denominator as f64).round();
        let error = (fraction - numerator / denominator as f64).abs();

        if error + 1e-9 < best_error {
            best = (numerator as u64, denominator);
            best_error = error;
        }
    }

    best
}
