//! Current-weight projection, one formula per category.
//!
//! Every exponent is `days` floor-divided by the growth period. For a
//! positive divisor `div_euclid` rounds toward negative infinity, so a birth
//! date in the future yields a negative exponent and a projected weight below
//! the birth weight.

const MAMMAL_RATE: f64 = 1.1;
const MAMMAL_PERIOD_DAYS: i64 = 60;
const MAMMAL_CAP_DAYS: i64 = 300;

const FISH_RATE: f64 = 1.05;
const FISH_PERIOD_DAYS: i64 = 80;
const FISH_CAP_DAYS: i64 = 240;

const AMPHIBIAN_SPURT_RATE: f64 = 1.05;
const AMPHIBIAN_SPURT_PERIODS: i32 = 3;
const AMPHIBIAN_SLOW_RATE: f64 = 1.03;
const AMPHIBIAN_PERIOD_DAYS: i64 = 120;

fn periods(days: i64, period: i64) -> i32 {
    // 天數再大，指數也不會超出 i32
    days.div_euclid(period)
        .clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// `birth_weight * 1.1^floor(min(days, 300) / 60)`
pub fn mammal_weight(birth_weight: f64, days_since_birth: i64) -> f64 {
    let exponent = periods(days_since_birth.min(MAMMAL_CAP_DAYS), MAMMAL_PERIOD_DAYS);
    birth_weight * MAMMAL_RATE.powi(exponent)
}

/// `birth_weight * 1.05^floor(min(days, 240) / 80)`
pub fn fish_weight(birth_weight: f64, days_since_birth: i64) -> f64 {
    let exponent = periods(days_since_birth.min(FISH_CAP_DAYS), FISH_PERIOD_DAYS);
    birth_weight * FISH_RATE.powi(exponent)
}

/// The lesser of two curves evaluated at the same period count `k`:
/// `birth_weight * 1.05^3 * 1.03^k` and `birth_weight * 1.05^k`.
pub fn amphibian_weight(birth_weight: f64, days_since_birth: i64) -> f64 {
    let k = periods(days_since_birth, AMPHIBIAN_PERIOD_DAYS);
    let spurt_then_slow = birth_weight
        * AMPHIBIAN_SPURT_RATE.powi(AMPHIBIAN_SPURT_PERIODS)
        * AMPHIBIAN_SLOW_RATE.powi(k);
    let steady = birth_weight * AMPHIBIAN_SPURT_RATE.powi(k);
    spurt_then_slow.min(steady)
}
