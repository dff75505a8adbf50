//! Parenthesis balance check, run before any parsing.

/// True when every `(` has a matching `)` and no `)` comes before its opener.
pub fn is_balanced(input: &str) -> bool {
    let mut depth = 0usize;

    for c in input.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    depth == 0
}
