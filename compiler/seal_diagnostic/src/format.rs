//! Message text for exhaustiveness diagnostics.

/// Headline for a switch on `base_name`.
///
/// Any missing coverage makes the switch non-exhaustive; otherwise the only
/// reason to report is a catch-all arm that can never be reached.
pub fn main_message<S: AsRef<str>>(base_name: &str, missing: &[S]) -> String {
    if missing.is_empty() {
        format!("Switch on {base_name} has redundant default arm")
    } else {
        format!("Switch on {base_name} is not exhaustive")
    }
}

/// `"Matched: a, b; Missing: c"`, omitting empty parts.
///
/// Both lists are sorted byte-wise ascending before joining, regardless of
/// the order they are passed in.
pub fn detail_message<M, N>(matched: &[M], missing: &[N]) -> String
where
    M: AsRef<str>,
    N: AsRef<str>,
{
    let mut parts = Vec::with_capacity(2);
    if !matched.is_empty() {
        parts.push(format!("Matched: {}", sorted_join(matched)));
    }
    if !missing.is_empty() {
        parts.push(format!("Missing: {}", sorted_join(missing)));
    }
    parts.join("; ")
}

fn sorted_join<S: AsRef<str>>(names: &[S]) -> String {
    let mut names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    names.sort_unstable();
    names.join(", ")
}
