/// Converts a `CamelCase` identifier to `snake_case`.
///
/// Every ASCII uppercase letter starts a new word: it is lowercased and, unless
/// it is the first character, preceded by an underscore. All other characters,
/// including existing underscores, are kept as-is. Acronyms are not treated
/// specially, so `UserID` becomes `user_i_d`.
pub fn snake_case(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 4);

    for (i, ch) in src.char_indices() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
