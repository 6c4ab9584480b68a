use std::cmp::Ordering;

/// Strips common Latin diacritics from an already-lowercased character.
fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Compares two labels the way a locale collator would for Latin text:
///
/// 1. letters ignoring accents and case,
/// 2. then accents (unaccented first),
/// 3. then case (lowercase first),
/// 4. then raw code points, so that distinct strings never compare equal.
pub(crate) fn collate(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| s.chars().map(lowercase).map(base_letter).collect::<Vec<_>>();
    let secondary = |s: &str| {
        s.chars()
            .map(lowercase)
            .map(|c| base_letter(c) != c)
            .collect::<Vec<_>>()
    };
    let tertiary = |s: &str| {
        s.chars()
            .map(|c| c.is_uppercase())
            .collect::<Vec<_>>()
    };

    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| tertiary(a).cmp(&tertiary(b)))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring match. An empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::str::FromStr as _;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::entities::{Posting, PostingId, Unit};

    pub(crate) fn posting(id: &str, category: &str, date: &str, unit: &str, amount: &str) -> Posting {
        Posting {
            id: PostingId(id.to_string()),
            category: category.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: format!("Pagamento ref. {}", category),
            origin: "Fornecedor F".to_string(),
            unit: Unit::from(unit),
            amount: Decimal::from_str(amount).unwrap(),
        }
    }
}
