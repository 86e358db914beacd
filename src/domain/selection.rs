//! Pure parsing for interactive menu selections and confirmations.
//!
//! The menu loops in `app::interact` absorb malformed input by re-prompting, so
//! both parsers are total functions returning `Option`.

/// Parse a menu selection against `option_count` options.
///
/// Accepts integers in `0..=option_count`, where 0 means back/finish. Anything
/// else, including non-numeric input, yields `None`.
pub fn parse_selection(input: &str, option_count: usize) -> Option<usize> {
    let selected: i64 = input.trim().parse().ok()?;
    if selected < 0 || selected > option_count as i64 {
        return None;
    }
    Some(selected as usize)
}

/// Parse a yes/no answer, case-insensitively.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_in_range_are_accepted() {
        assert_eq!(parse_selection("0", 3), Some(0));
        assert_eq!(parse_selection("1", 3), Some(1));
        assert_eq!(parse_selection("3", 3), Some(3));
        assert_eq!(parse_selection(" 2 ", 3), Some(2));
    }

    #[test]
    fn selections_out_of_range_are_rejected() {
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
        assert_eq!(parse_selection("1", 0), None);
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("two", 3), None);
        assert_eq!(parse_selection("1.5", 3), None);
    }

    #[test]
    fn confirmations_match_y_and_n_case_insensitively() {
        assert_eq!(parse_confirmation("y"), Some(true));
        assert_eq!(parse_confirmation("Y"), Some(true));
        assert_eq!(parse_confirmation("n"), Some(false));
        assert_eq!(parse_confirmation("N"), Some(false));
        assert_eq!(parse_confirmation("yes"), None);
        assert_eq!(parse_confirmation(""), None);
    }
}
