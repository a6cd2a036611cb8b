//! Sender/date block prepended to generated letters.

use chrono::NaiveDate;

/// Placeholder lines the writer fills in after copying the letter.
pub const SENDER_PLACEHOLDERS: [&str; 3] =
    ["[Your Address]", "[Your Phone Number]", "[Your Email Address]"];

/// Date format of the header (`Month D, YYYY`).
pub const HEADER_DATE_FORMAT: &str = "%B %-d, %Y";

/// Render the header block for `date`, including the trailing blank line.
pub fn letter_header(date: NaiveDate) -> String {
    format!("{}\n\n{}\n\n", SENDER_PLACEHOLDERS.join("\n"), date.format(HEADER_DATE_FORMAT))
}

/// Prefix a generated body with the header block.
///
/// An empty (or whitespace-only) body yields an empty string: a header
/// with no letter under it is never produced.
pub fn finalize_letter(body: &str, date: NaiveDate) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    let mut letter = letter_header(date);
    letter.push_str(body);
    letter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn header_has_placeholders_blank_line_and_date() {
        assert_eq!(
            letter_header(date(2024, 3, 5)),
            "[Your Address]\n[Your Phone Number]\n[Your Email Address]\n\nMarch 5, 2024\n\n"
        );
    }

    #[test]
    fn day_is_not_zero_padded() {
        assert!(letter_header(date(2025, 11, 9)).contains("\nNovember 9, 2025\n"));
        assert!(letter_header(date(2025, 12, 31)).contains("\nDecember 31, 2025\n"));
    }

    #[test]
    fn body_follows_header_unmodified() {
        let body = "Dear Sir,\n\nI am writing...\n";
        let letter = finalize_letter(body, date(2024, 1, 15));

        let lines: Vec<_> = letter.lines().collect();
        assert_eq!(&lines[..3], SENDER_PLACEHOLDERS);
        assert_eq!(&lines[3..5], ["", "January 15, 2024"]);
        assert_eq!(lines[5], "");
        assert!(letter.ends_with(body));
        assert_eq!(&letter[letter.len() - body.len()..], body);
    }

    #[test]
    fn empty_body_produces_no_header() {
        assert_eq!(finalize_letter("", date(2024, 1, 15)), "");
        assert_eq!(finalize_letter("  \n\t", date(2024, 1, 15)), "");
    }
}
