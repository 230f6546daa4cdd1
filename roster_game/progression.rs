//! Level progression derived from experience.
//!
//! Experience needed to reach level `n` follows the triangular curve
//! `50 * n * (n + 1)`, so level 1 starts at 100 XP, level 2 at 300 XP,
//! level 3 at 600 XP and so on.

/// Level reached with the given amount of experience.
///
/// Evaluated in floating point and truncated toward zero.
pub fn derive_level(experience: i32) -> i32 {
    let radicand = 2500.0 + 200.0 * f64::from(experience);
    ((radicand.sqrt() - 50.0) / 100.0) as i32
}

/// Experience still missing to reach `level + 1`.
pub fn derive_until_next_level(level: i32, experience: i32) -> i32 {
    50 * (level + 1) * (level + 2) - experience
}
