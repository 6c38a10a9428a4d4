//! Parsing of `(x, y)` coordinate pairs.
//!
//! Shared by the port file and the interactive `create`/`position`
//! commands, which write coordinates the same way.

use sn_core::Point;

/// Pull a coordinate pair off a whitespace token stream.
///
/// Accepts `(x,y)` as one token or `(x,` `y)` as two.  Returns the raw text
/// of the pair, or `None` if the stream ran out.
pub fn take_point<'a, I>(tokens: &mut I) -> Option<String>
where
    I: Iterator<Item = &'a str>,
{
    let first = tokens.next()?;
    if first.ends_with(')') {
        return Some(first.to_owned());
    }
    let second = tokens.next()?;
    Some(format!("{first}{second}"))
}

/// Parse `(x, y)` into a finite [`Point`].  Parentheses are optional.
pub fn parse_point(text: &str) -> Option<Point> {
    let inner: String = text
        .chars()
        .filter(|&c| c != '(' && c != ')')
        .map(|c| if c == ',' { ' ' } else { c })
        .collect();

    let mut parts = inner.split_whitespace();
    let x = parts.next()?.parse::<f64>().ok()?;
    let y = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Point::checked(x, y).ok()
}
