//! Arithmetic shared by the derived snapshot fields.
//!
//! Every helper here is total: division by zero yields `0`, never NaN or
//! infinity, because the graphs and tables plot whatever comes back.

/// Integer measurement types stored in snapshot base fields.
pub trait Measure: Copy + Default + PartialEq {
    fn to_f64(self) -> f64;
    fn saturating_add(self, other: Self) -> Self;
}

impl Measure for i32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn saturating_add(self, other: Self) -> Self {
        i32::saturating_add(self, other)
    }
}

impl Measure for u32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn saturating_add(self, other: Self) -> Self {
        u32::saturating_add(self, other)
    }
}

impl Measure for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn saturating_add(self, other: Self) -> Self {
        i64::saturating_add(self, other)
    }
}

/// `100 * value / total`, or `0` when `total` is zero.
///
/// Computed in `f64` so large `i64` money values cannot overflow before the
/// division.
pub fn percent<T: Measure>(value: T, total: T) -> f32 {
    if total == T::default() {
        return 0.0;
    }
    (100.0 * value.to_f64() / total.to_f64()) as f32
}

/// Nullable [`percent`]: `None` if either side is `None`.
pub fn percent_opt<T: Measure>(value: Option<T>, total: Option<T>) -> Option<f32> {
    match (value, total) {
        (Some(value), Some(total)) => Some(percent(value, total)),
        _ => None,
    }
}

/// `value / population`, `0` for an empty city, `None` if the value itself is
/// not available.
pub fn per_capita<T: Measure>(value: Option<T>, population: u32) -> Option<f32> {
    let value = value?;
    if population == 0 {
        return Some(0.0);
    }
    Some((value.to_f64() / f64::from(population)) as f32)
}

/// Average level for building counts indexed by level, where `counts[0]` is
/// level 1.
pub fn weighted_level_average(counts: &[u32]) -> f32 {
    let mut weighted = 0.0_f64;
    let mut total = 0.0_f64;
    for (i, &count) in counts.iter().enumerate() {
        let level = (i + 1) as f64;
        weighted += level * f64::from(count);
        total += f64::from(count);
    }
    if total == 0.0 {
        0.0
    } else {
        (weighted / total) as f32
    }
}

/// Saturating sum.
pub fn total<T: Measure>(values: &[T]) -> T {
    values
        .iter()
        .fold(T::default(), |acc, &v| acc.saturating_add(v))
}

/// Sum treating missing values as zero.
pub fn total_nullable<T: Measure>(values: &[Option<T>]) -> T {
    values
        .iter()
        .fold(T::default(), |acc, v| acc.saturating_add(v.unwrap_or_default()))
}

/// Sum of the present values; `None` only when every value is missing.
pub fn total_present<T: Measure>(values: &[Option<T>]) -> Option<T> {
    if values.iter().all(Option::is_none) {
        None
    } else {
        Some(total_nullable(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_zero_total_is_zero() {
        assert_eq!(percent(5_i32, 0), 0.0);
        assert_eq!(percent(-5_i32, 0), 0.0);
        assert_eq!(percent(5_u32, 0), 0.0);
        assert_eq!(percent(i64::MAX, 0), 0.0);
        assert_eq!(percent(0_u32, 0), 0.0);
    }

    #[test]
    fn test_percent_nonzero_total() {
        assert!((percent(50_i32, 200) - 25.0).abs() < 1e-5);
        assert!((percent(3_u32, 4) - 75.0).abs() < 1e-5);
        assert!((percent(1_i64, 3) - 33.333_332).abs() < 1e-4);
        // Over capacity is reported as-is.
        assert!((percent(150_u32, 100) - 150.0).abs() < 1e-5);
    }

    #[test]
    fn test_percent_large_i64_does_not_overflow() {
        let value = i64::MAX / 2;
        let result = percent(value, i64::MAX);
        assert!(result.is_finite());
        assert!((result - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_percent_opt() {
        assert_eq!(percent_opt(None, Some(10_u32)), None);
        assert_eq!(percent_opt(Some(10_u32), None), None);
        assert_eq!(percent_opt::<u32>(None, None), None);
        assert_eq!(percent_opt(Some(10_u32), Some(0)), Some(0.0));
        let v = percent_opt(Some(1_i64), Some(4)).unwrap();
        assert!((v - 25.0).abs() < 1e-5);
    }

    #[test]
    fn test_per_capita() {
        assert_eq!(per_capita::<i64>(None, 100), None);
        assert_eq!(per_capita(Some(500_i64), 0), Some(0.0));
        let v = per_capita(Some(500_i64), 100).unwrap();
        assert!((v - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_weighted_level_average() {
        assert_eq!(weighted_level_average(&[10, 0, 0, 0, 0]), 1.0);
        assert_eq!(weighted_level_average(&[0, 0, 0, 0, 0]), 0.0);
        assert_eq!(weighted_level_average(&[1, 1, 1, 1, 1]), 3.0);
        assert_eq!(weighted_level_average(&[0, 0, 4]), 3.0);
        assert_eq!(weighted_level_average(&[]), 0.0);
    }

    #[test]
    fn test_totals() {
        assert_eq!(total(&[1_u32, 2, 3]), 6);
        assert_eq!(total(&[u32::MAX, 1]), u32::MAX);
        assert_eq!(total_nullable(&[Some(1_i64), None, Some(2)]), 3);
        assert_eq!(total_present::<u32>(&[None, None]), None);
        assert_eq!(total_present(&[None, Some(4_u32)]), Some(4));
    }
}
