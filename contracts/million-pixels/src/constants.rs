use near_sdk::NearToken;

/// Pixels on the full canvas.
pub const TOTAL_PIXELS: u32 = 1_000_000;
/// Pixels per tradable block (a 10x10 square).
pub const PIXELS_PER_BLOCK: u32 = 100;
/// Number of addressable blocks; valid ids are `0..BLOCK_SUPPLY`.
pub const BLOCK_SUPPLY: u32 = TOTAL_PIXELS / PIXELS_PER_BLOCK;

/// Fixed price of a never-owned block: 0.1 NEAR.
pub const INITIAL_SALE_PRICE: NearToken = NearToken::from_millinear(100);
