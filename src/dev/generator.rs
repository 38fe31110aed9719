// src/dev/generator.rs
// Random words over {a, b} for fuzzing and sweeps, plus a reference oracle.

use rand::Rng;

/// aⁿbⁿ followed by the end-marker.
pub fn anbn(n: usize) -> String {
    let mut s = String::with_capacity(2 * n + 1);
    s.extend(std::iter::repeat_n('a', n));
    s.extend(std::iter::repeat_n('b', n));
    s.push('$');
    s
}

/// aⁿbᵐ followed by the end-marker.
pub fn anbm(n: usize, m: usize) -> String {
    let mut s = String::with_capacity(n + m + 1);
    s.extend(std::iter::repeat_n('a', n));
    s.extend(std::iter::repeat_n('b', m));
    s.push('$');
    s
}

/// Random word (without `$`) of length at most `max_len`.
///
/// Half the draws are aⁿbᵐ with |n - m| ≤ 1, so members and near-misses both
/// show up often; the rest are uniform over {a, b}*.
pub fn gen_word<R: Rng + ?Sized>(rng: &mut R, max_len: usize) -> String {
    if rng.random_bool(0.5) {
        let n = rng.random_range(0..=max_len / 2);
        let m = match rng.random_range(0..3u8) {
            0 => n.saturating_sub(1),
            1 => n,
            _ => n + 1,
        };
        let m = m.min(max_len - n);
        let mut s = anbm(n, m);
        s.pop();
        s
    } else {
        let len = rng.random_range(0..=max_len);
        (0..len)
            .map(|_| if rng.random_bool(0.5) { 'a' } else { 'b' })
            .collect()
    }
}

/// Direct membership check by counting; `$` is ignored if present.
pub fn is_anbn(word: &str) -> bool {
    let w = word.strip_suffix('$').unwrap_or(word);
    let n = w.chars().take_while(|&c| c == 'a').count();
    let rest = &w[n..];
    rest.chars().all(|c| c == 'b') && rest.len() == n
}
