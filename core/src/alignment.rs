//! LCS-based opcode alignment shared by the word and text-block differs.
//!
//! Produces difflib-style opcode runs (`equal`/`replace`/`delete`/`insert`)
//! over two token sequences. Token equality is exact; callers normalize
//! beforehand when fuzzier matching is wanted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// One aligned run: half-open index ranges into the old (`i1..i2`) and new
/// (`j1..j2`) sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Opcode {
    pub tag: OpTag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

/// Align two sequences into opcode runs.
///
/// When the DP table would exceed `work_limit` cells the alignment falls back
/// to positional opcodes (common prefix/suffix, one replace run in between)
/// instead of failing; pages large enough to trip this produce a coarser but
/// still complete diff.
pub(crate) fn opcodes<T: PartialEq>(old: &[T], new: &[T], work_limit: usize) -> Vec<Opcode> {
    if old.len().saturating_mul(new.len()) > work_limit {
        return positional_opcodes(old, new);
    }
    let pairs = lcs_pairs(old, new);
    opcodes_from_pairs(&pairs, old.len(), new.len())
}

/// Matched index pairs of a longest common subsequence, in order.
fn lcs_pairs<T: PartialEq>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let n = old.len();
    let m = new.len();
    if n == 0 || m == 0 {
        return Vec::new();
    }

    // Flat (n+1) x (m+1) DP table; sizes are bounded by the work limit.
    let stride = m + 1;
    let mut dp = vec![0u32; (n + 1) * stride];
    for i in 1..=n {
        for j in 1..=m {
            dp[i * stride + j] = if old[i - 1] == new[j - 1] {
                dp[(i - 1) * stride + (j - 1)] + 1
            } else {
                dp[(i - 1) * stride + j].max(dp[i * stride + (j - 1)])
            };
        }
    }

    let mut pairs = Vec::with_capacity(dp[n * stride + m] as usize);
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if dp[(i - 1) * stride + j] > dp[i * stride + (j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();
    pairs
}

fn opcodes_from_pairs(pairs: &[(usize, usize)], n: usize, m: usize) -> Vec<Opcode> {
    let mut ops = Vec::new();
    let mut i = 0;
    let mut j = 0;
    let mut idx = 0;
    while idx < pairs.len() {
        let (pi, pj) = pairs[idx];
        push_gap(&mut ops, i, pi, j, pj);

        // Extend the equal run over consecutive matched pairs.
        let start = idx;
        while idx + 1 < pairs.len()
            && pairs[idx + 1] == (pairs[idx].0 + 1, pairs[idx].1 + 1)
        {
            idx += 1;
        }
        let run = idx - start + 1;
        ops.push(Opcode {
            tag: OpTag::Equal,
            i1: pi,
            i2: pi + run,
            j1: pj,
            j2: pj + run,
        });
        i = pi + run;
        j = pj + run;
        idx += 1;
    }
    push_gap(&mut ops, i, n, j, m);
    ops
}

fn push_gap(ops: &mut Vec<Opcode>, i1: usize, i2: usize, j1: usize, j2: usize) {
    let tag = if i1 < i2 && j1 < j2 {
        OpTag::Replace
    } else if i1 < i2 {
        OpTag::Delete
    } else if j1 < j2 {
        OpTag::Insert
    } else {
        return;
    };
    ops.push(Opcode { tag, i1, i2, j1, j2 });
}

/// Coarse fallback alignment: trim the common prefix and suffix, then treat
/// whatever remains as a single non-equal run.
fn positional_opcodes<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Opcode> {
    let n = old.len();
    let m = new.len();

    let mut prefix = 0;
    while prefix < n && prefix < m && old[prefix] == new[prefix] {
        prefix += 1;
    }
    let mut suffix = 0;
    while suffix < n - prefix && suffix < m - prefix && old[n - 1 - suffix] == new[m - 1 - suffix] {
        suffix += 1;
    }

    let mut ops = Vec::new();
    if prefix > 0 {
        ops.push(Opcode {
            tag: OpTag::Equal,
            i1: 0,
            i2: prefix,
            j1: 0,
            j2: prefix,
        });
    }
    push_gap(&mut ops, prefix, n - suffix, prefix, m - suffix);
    if suffix > 0 {
        ops.push(Opcode {
            tag: OpTag::Equal,
            i1: n - suffix,
            i2: n,
            j1: m - suffix,
            j2: m,
        });
    }
    ops
}
