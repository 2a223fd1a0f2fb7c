/// Derive the URL-safe key for a card name: lowercase, each run of
/// whitespace collapsed to a single `-`.
///
/// Lowercasing runs over the whole string so context-sensitive mappings
/// (Greek final sigma) match a browser's `toLowerCase`.
pub fn slugify(name: &str) -> String {
    let mut collapsed = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                collapsed.push('-');
                in_space = true;
            }
        } else {
            collapsed.push(ch);
            in_space = false;
        }
    }
    collapsed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("The High Priestess"), "the-high-priestess");
        assert_eq!(slugify("Wheel of Fortune"), "wheel-of-fortune");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("The  Hanged\tMan"), "the-hanged-man");
    }

    #[test]
    fn keeps_punctuation() {
        assert_eq!(slugify("Judgement"), "judgement");
        assert_eq!(slugify("Temperance, Again"), "temperance,-again");
    }

    #[test]
    fn final_sigma_follows_word_end() {
        // "ΟΔΟΣ Σ": the sigma ending a word takes its final form
        assert_eq!(slugify("\u{39f}\u{394}\u{39f}\u{3a3} \u{3a3}"), "\u{3bf}\u{3b4}\u{3bf}\u{3c2}-\u{3c3}");
    }
}
