/// Compute effective limit with precedence: `--limit` flag -> configured default.
///
/// A zero flag falls back to the default rather than listing nothing.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    flag.filter(|limit| *limit > 0).unwrap_or(configured)
}
