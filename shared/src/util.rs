/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as a table id.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so the
/// persisted record stays readable by a browser front end):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
///
/// Uniqueness within a store is enforced by the caller, see
/// `EntityStore::next_id` in floor-editor.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Largest integer a JavaScript number represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
