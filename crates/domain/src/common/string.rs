//! String conversion utilities.

/// Converts an empty `String` to `None`, otherwise returns `Some(value)`.
///
/// Wire requests carry optional identifiers as empty strings; this turns
/// them back into a proper `Option`.
///
/// # Examples
///
/// ```
/// use charforge_domain::common::some_if_not_empty;
///
/// assert_eq!(some_if_not_empty("hill-dwarf".to_string()), Some("hill-dwarf".to_string()));
/// assert_eq!(some_if_not_empty(String::new()), None);
/// ```
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Extension trait for strings providing `into_option` as a method.
///
/// # Examples
///
/// ```
/// use charforge_domain::common::StringExt;
///
/// assert_eq!("elf".to_string().into_option(), Some("elf".to_string()));
/// assert_eq!(String::new().into_option(), None);
/// ```
pub trait StringExt {
    /// Converts this string to `None` if empty, otherwise `Some(self)`.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        some_if_not_empty(self)
    }
}

/// Turns a kebab- or snake-case identifier into a display label.
///
/// # Examples
///
/// ```
/// use charforge_domain::common::humanize_id;
///
/// assert_eq!(humanize_id("animal-handling"), "Animal Handling");
/// assert_eq!(humanize_id("sleight_of_hand"), "Sleight Of Hand");
/// ```
pub fn humanize_id(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_some_if_not_empty_with_content() {
        assert_eq!(
            some_if_not_empty("high-elf".to_string()),
            Some("high-elf".to_string())
        );
    }

    #[test]
    fn test_some_if_not_empty_empty_string() {
        assert_eq!(some_if_not_empty(String::new()), None);
    }

    #[test]
    fn test_string_ext_whitespace_is_not_empty() {
        assert_eq!(" ".to_string().into_option(), Some(" ".to_string()));
    }

    #[test]
    fn test_humanize_single_word() {
        assert_eq!(humanize_id("athletics"), "Athletics");
    }

    #[test]
    fn test_humanize_collapses_repeated_separators() {
        assert_eq!(humanize_id("deep--speech"), "Deep Speech");
        assert_eq!(humanize_id(""), "");
    }
}
