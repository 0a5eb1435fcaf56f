//! Small pure helpers for rendering scheme identifiers as human text.

/// Lowercase a scheme identifier and turn underscores into spaces.
///
/// `INSTANT_HEALTH` → `instant health`. Idempotent on input that is
/// already lowercase and space-joined.
pub fn humanize(name: impl AsRef<str>) -> String {
    name.as_ref().to_lowercase().replace('_', " ")
}

/// [`humanize`] a name, then capitalize the first letter of every word.
///
/// `INSTANT_HEALTH` → `Instant Health`. Word spacing is preserved as-is.
pub fn title_case(name: impl AsRef<str>) -> String {
    humanize(name)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => {
                    let mut s = c.to_uppercase().to_string();
                    s.extend(chars);
                    s
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove two-character decorative color markup (`§x` / `&x`) from a string.
///
/// Recognized code characters are `0-9`, `a-f`, `k-o`, `r` and the hex
/// marker `x`, case-insensitive. `§x`-prefixed hex colors are six more
/// two-character pairs and strip the same way. Anything else after a
/// marker character is kept untouched.
pub fn strip_color_codes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if (c == '§' || c == '&')
            && chars
                .peek()
                .is_some_and(|&next| is_color_code(next.to_ascii_lowercase()))
        {
            chars.next();
            continue;
        }
        out.push(c);
    }

    out
}

fn is_color_code(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f' | 'k'..='o' | 'r' | 'x')
}
