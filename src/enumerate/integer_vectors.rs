//! Weight vectors for semistandard enumeration.

/// All vectors of `parts` non-negative integers summing to `n`, in
/// lexicographically descending order.
pub fn integer_vectors(n: usize, parts: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut cur = Vec::with_capacity(parts);
    rec(n, parts, &mut cur, &mut out);
    out
}

fn rec(n: usize, parts: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if parts == 0 {
        if n == 0 {
            out.push(cur.clone());
        }
        return;
    }
    for first in (0..=n).rev() {
        cur.push(first);
        rec(n - first, parts - 1, cur, out);
        cur.pop();
    }
}
