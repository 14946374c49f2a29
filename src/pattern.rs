use regex::Regex;

use crate::error::SearchError;

/// Compile a `?`/`*` wildcard pattern into an anchored [`Regex`].
///
/// `?` becomes `.` (exactly one character), `*` becomes `.*` (any run,
/// including empty). Literal runs go through [`regex::escape`], so every
/// metacharacter the regex engine recognizes is matched literally. The result
/// is anchored on both ends: the pattern must cover the whole base name, a
/// full match rather than a substring search.
///
/// An empty pattern compiles to `^$` and matches only an empty name, which no
/// filesystem entry has.
pub(crate) fn compile(pattern: &str) -> Result<Regex, SearchError> {
    let mut re = String::with_capacity(pattern.len() + 2);
    let mut literal = String::new();
    re.push('^');
    for ch in pattern.chars() {
        match ch {
            '?' | '*' => {
                re.push_str(&regex::escape(&literal));
                literal.clear();
                re.push_str(if ch == '?' { "." } else { ".*" });
            }
            other => literal.push(other),
        }
    }
    re.push_str(&regex::escape(&literal));
    re.push('$');
    Regex::new(&re).map_err(|e| SearchError::InvalidPattern(e.to_string()))
}
