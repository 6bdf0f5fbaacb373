//! Human-readable list joining.

/// Joins items as prose: `a`, `a and b`, `a, b, and c`.
#[must_use]
pub fn humanize_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let leading: Vec<&str> = head.iter().map(|item| item.as_ref()).collect();
            format!("{}, and {}", leading.join(", "), last.as_ref())
        }
    }
}
