//! Region Calculator
//!
//! Pure functions computing the R1/R2 regions (standard Snowball
//! definition) and the language-specific RV region from a codepoint
//! sequence. All of them are total over any input, the empty word
//! included, and always return offsets in `[0, len]`.

/// Start of the region after the first non-vowel that follows a vowel,
/// scanning left to right from `from`. No such transition yields `len`
/// (an empty region at the end of the word).
fn after_vowel_non_vowel<F>(chars: &[char], from: usize, is_vowel: &F) -> usize
where
    F: Fn(char) -> bool,
{
    let mut seen_vowel = false;
    for (idx, &ch) in chars.iter().enumerate().skip(from) {
        if is_vowel(ch) {
            seen_vowel = true;
        } else if seen_vowel {
            return idx + 1;
        }
    }
    chars.len()
}

/// Compute R1 and R2. R2 is R1 applied to R1's own content.
pub fn r1_r2<F>(chars: &[char], is_vowel: F) -> (usize, usize)
where
    F: Fn(char) -> bool,
{
    let r1 = after_vowel_non_vowel(chars, 0, &is_vowel);
    let r2 = after_vowel_non_vowel(chars, r1, &is_vowel);
    (r1, r2)
}

/// Compute R1 and R2 with per-language prefix exceptions: a listed
/// prefix forces the R1 start to the end of that prefix before the
/// general scan runs (English uses "gener", "commun", "arsen").
pub fn r1_r2_with_exceptions<F>(chars: &[char], is_vowel: F, prefixes: &[&str]) -> (usize, usize)
where
    F: Fn(char) -> bool,
{
    for prefix in prefixes {
        let plen = prefix.chars().count();
        if plen <= chars.len() && chars[..plen].iter().copied().eq(prefix.chars()) {
            let r2 = after_vowel_non_vowel(chars, plen, &is_vowel);
            return (plen, r2);
        }
    }
    r1_r2(chars, is_vowel)
}

/// RV Pattern A (e.g. Russian): the region after the first vowel in the
/// word; no vowel at all yields the end of the word.
pub fn rv_after_first_vowel<F>(chars: &[char], is_vowel: F) -> usize
where
    F: Fn(char) -> bool,
{
    for (idx, &ch) in chars.iter().enumerate() {
        if is_vowel(ch) {
            return idx + 1;
        }
    }
    chars.len()
}

/// RV Pattern B (e.g. French): after the third codepoint when the word
/// begins with two vowels or with one of the prefixes "par", "col",
/// "tap"; otherwise after the first vowel not in initial position; end
/// of the word as a fallback.
pub fn rv_french<F>(chars: &[char], is_vowel: F) -> usize
where
    F: Fn(char) -> bool,
{
    let len = chars.len();
    for prefix in ["par", "col", "tap"] {
        if len >= 3 && chars[..3].iter().copied().eq(prefix.chars()) {
            return 3;
        }
    }
    if len > 1 && is_vowel(chars[0]) && is_vowel(chars[1]) {
        return 3.min(len);
    }
    for idx in 1..len {
        if is_vowel(chars[idx]) {
            return idx + 1;
        }
    }
    len
}

/// Spanish RV: second letter a consonant -> after the next following
/// vowel; first two letters vowels -> after the next following
/// consonant; consonant-vowel start -> after the third codepoint; end
/// of the word as a fallback.
pub fn rv_spanish<F>(chars: &[char], is_vowel: F) -> usize
where
    F: Fn(char) -> bool,
{
    let len = chars.len();
    if len < 3 {
        return len;
    }
    if !is_vowel(chars[1]) {
        for idx in 2..len {
            if is_vowel(chars[idx]) {
                return idx + 1;
            }
        }
        return len;
    }
    if is_vowel(chars[0]) {
        for idx in 2..len {
            if !is_vowel(chars[idx]) {
                return idx + 1;
            }
        }
        return len;
    }
    3
}
