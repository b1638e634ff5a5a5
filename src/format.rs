//! Positional template formatting
//!
//! Resolved templates use composite-format placeholders: `{0}`, `{1}`,
//! and so on, with `{{` and `}}` as literal braces. The engine produces
//! the template and the ordered argument list; this module performs the
//! final substitution.

/// Substitute positional arguments into a template.
///
/// Placeholders referencing a missing argument are left in the output
/// verbatim, so a malformed template degrades visibly instead of
/// producing an empty hole.
///
/// # Examples
///
/// ```
/// use lingo::format_positional;
///
/// let args = vec!["3".to_string(), "cart".to_string()];
/// assert_eq!(
///     format_positional("You have {0} items in {1}", &args),
///     "You have 3 items in cart"
/// );
/// assert_eq!(format_positional("{{0}} and {0}", &args), "{0} and 3");
/// ```
pub fn format_positional(template: &str, args: &[String]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                result.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                result.push('}');
            }
            '{' => {
                let mut digits = String::new();
                while let Some(d) = chars.peek() {
                    if d.is_ascii_digit() {
                        digits.push(*d);
                        chars.next();
                    } else {
                        break;
                    }
                }

                let closed = chars.peek() == Some(&'}');
                let index = digits.parse::<usize>().ok();

                match (closed, index) {
                    (true, Some(i)) if i < args.len() => {
                        chars.next();
                        result.push_str(&args[i]);
                    }
                    _ => {
                        // Not a valid in-range placeholder: emit verbatim
                        result.push('{');
                        result.push_str(&digits);
                    }
                }
            }
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_substitution() {
        assert_eq!(
            format_positional("You have {0} item", &args(&["1"])),
            "You have 1 item"
        );
    }

    #[test]
    fn test_multiple_and_repeated() {
        assert_eq!(
            format_positional("{1}, {0}, {1}", &args(&["a", "b"])),
            "b, a, b"
        );
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(
            format_positional("{{literal}} {0}", &args(&["x"])),
            "{literal} x"
        );
    }

    #[test]
    fn test_out_of_range_left_verbatim() {
        assert_eq!(format_positional("{0} {5}", &args(&["x"])), "x {5}");
    }

    #[test]
    fn test_unclosed_brace_left_verbatim() {
        assert_eq!(format_positional("{0 and {0}", &args(&["x"])), "{0 and x");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(format_positional("plain text", &args(&["x"])), "plain text");
    }

    #[test]
    fn test_empty_args() {
        assert_eq!(format_positional("{0}", &[]), "{0}");
    }
}
