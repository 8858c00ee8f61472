use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two display names the way a human-facing list orders them.
///
/// Three levels, each consulted only when the previous one ties:
/// base letters (accents and case removed), then accents, then case with
/// lowercase first. The result is a total order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| b.cmp(a))
}

/// Lowercased name with combining marks stripped and stroked letters folded
fn base_letters(name: &str) -> String {
    let mut key = String::with_capacity(name.len());

    for c in name.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            // no canonical decomposition for these
            'Ø' | 'ø' => key.push('o'),
            'Æ' | 'æ' => key.push_str("ae"),
            'Œ' | 'œ' => key.push_str("oe"),
            'Ł' | 'ł' => key.push('l'),
            'Đ' | 'đ' => key.push('d'),
            'Þ' | 'þ' => key.push_str("th"),
            'ß' => key.push_str("ss"),
            other => key.extend(other.to_lowercase()),
        }
    }

    key
}

/// Lowercased name in decomposed form, accents kept
fn accented(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(locale_compare("alliyan", "John"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "adam"), Ordering::Greater);
        // Byte order would put "Zed" first
        assert_eq!(locale_compare("adam", "Zed"), Ordering::Less);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        assert_eq!(locale_compare("Émile", "Zed"), Ordering::Less);
        assert_eq!(locale_compare("Ørjan", "Paul"), Ordering::Less);
        assert_eq!(locale_compare("Ángel", "Bea"), Ordering::Less);
        assert_eq!(locale_compare("Çelik", "Dana"), Ordering::Less);
        assert_eq!(locale_compare("Dana", "Çelik"), Ordering::Greater);
    }

    #[test]
    fn test_unaccented_before_accented_on_base_tie() {
        assert_eq!(locale_compare("Emile", "Émile"), Ordering::Less);
        assert_eq!(locale_compare("Émile", "Emile"), Ordering::Greater);
    }

    #[test]
    fn test_accent_outranks_case() {
        // accent difference decides before case difference
        assert_eq!(locale_compare("EMILE", "émile"), Ordering::Less);
    }

    #[test]
    fn test_composed_and_decomposed_forms_agree_on_base() {
        let composed = "Jos\u{e9}";
        let decomposed = "Jose\u{301}";
        assert_eq!(base_letters(composed), base_letters(decomposed));
        assert_eq!(accented(composed), accented(decomposed));
    }

    #[test]
    fn test_lowercase_first_on_case_only_difference() {
        assert_eq!(locale_compare("alice", "Alice"), Ordering::Less);
        assert_eq!(locale_compare("Alice", "alice"), Ordering::Greater);
    }

    #[test]
    fn test_equal_names() {
        assert_eq!(locale_compare("John", "John"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("Jo", "john"), Ordering::Less);
    }
}
