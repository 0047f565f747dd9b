/// Turns raw input text into candidate tokens.
///
/// Lowercases, replaces anything that is not a lowercase ASCII letter,
/// digit, or whitespace with a space, then splits on whitespace runs.
/// Never fails; empty input yields an empty sequence.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
