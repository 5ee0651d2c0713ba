//! Linear and band scales: data values → plot-area pixels.
//!
//! Rounding policy:
//! - Tick increments are 1, 2, 5 or 10 times a power of ten, picked so that
//!   roughly `count` ticks cover the domain (thresholds √50, √10, √2).
//! - `nice` widens a domain outward to multiples of that increment and repeats
//!   until the increment stops changing (at most 10 rounds).
//! - A zero-width domain maps every value to the middle of the range.

use serde::{Deserialize, Serialize};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

fn step_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Tick increment for `[start, stop]` aiming at `count` ticks.
///
/// Positive results are the step itself. For steps below 1 the result is
/// `-1 / step` (e.g. `-5.0` means 0.2), which keeps tick arithmetic exact.
/// Returns 0 when no sensible increment exists.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    if !(step.is_finite() && step > 0.0) {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powi(power as i32);
    let factor = step_factor(error);
    if power >= 0.0 {
        factor * 10f64.powi(power as i32)
    } else {
        -10f64.powi(-power as i32) / factor
    }
}

/// Evenly spaced round values inside `[start, stop]`, in the domain's direction.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    let mut out: Vec<f64> = if inc > 0.0 {
        let (i0, i1) = ((lo / inc).ceil() as i64, (hi / inc).floor() as i64);
        (i0..=i1).map(|i| i as f64 * inc).collect()
    } else if inc < 0.0 {
        let inv = -inc;
        let (i0, i1) = ((lo * inv).ceil() as i64, (hi * inv).floor() as i64);
        (i0..=i1).map(|i| i as f64 / inv).collect()
    } else {
        Vec::new()
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Extend `[start, stop]` outward to round tick boundaries.
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !(start.is_finite() && stop.is_finite()) || start == stop || count == 0 {
        return (start, stop);
    }
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if step == prestep {
            break;
        } else if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        prestep = step;
    }
    if reverse { (hi, lo) } else { (lo, hi) }
}

/// Continuous linear mapping `domain → range`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        r0 + t * (r1 - r0)
    }

    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (px - r0) / span };
        d0 + t * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Same scale with the domain widened by [`nice`].
    pub fn nice(self, count: usize) -> Self {
        Self {
            domain: nice(self.domain.0, self.domain.1, count),
            ..self
        }
    }
}

/// Discrete band scale over ordinals (years).
///
/// The domain is sorted ascending and deduplicated. Inner and outer padding are
/// the same fraction of a step; bands are centered in the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: Vec<i32>,
    range: (f64, f64),
    padding: f64,
    step: f64,
    start: f64,
}

/// Gap between bands as a fraction of the step.
pub const BAND_PADDING: f64 = 0.1;

impl BandScale {
    pub fn new(ordinals: impl IntoIterator<Item = i32>, range: (f64, f64), padding: f64) -> Self {
        let mut domain: Vec<i32> = ordinals.into_iter().collect();
        domain.sort_unstable();
        domain.dedup();

        let padding = padding.clamp(0.0, 1.0);
        let (lo, hi) = if range.1 < range.0 {
            (range.1, range.0)
        } else {
            range
        };
        let n = domain.len() as f64;
        let step = (hi - lo) / (n - padding + padding * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - padding)) * 0.5;
        Self {
            domain,
            range,
            padding,
            step,
            start,
        }
    }

    pub fn domain(&self) -> &[i32] {
        &self.domain
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn band_width(&self) -> f64 {
        self.step * (1.0 - self.padding)
    }

    /// Left edge of the band for `ordinal`, if it is part of the domain.
    pub fn position(&self, ordinal: i32) -> Option<f64> {
        self.domain
            .binary_search(&ordinal)
            .ok()
            .map(|i| self.start + self.step * i as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn increments_follow_1_2_5() {
        assert_eq!(tick_increment(0.0, 30000.0, 10), 2000.0);
        assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
        assert_eq!(tick_increment(1970.0, 2020.0, 10), 5.0);
        // 0.2 encoded as -5
        assert_eq!(tick_increment(0.0, 1.7, 10), -5.0);
        assert_eq!(tick_increment(5.0, 5.0, 10), 0.0);
    }

    #[test]
    fn nice_widens_until_stable() {
        assert_eq!(nice(0.0, 30000.0, 10), (0.0, 30000.0));
        assert_eq!(nice(0.0, 31234.0, 10), (0.0, 35000.0));
        assert_eq!(nice(0.0, 0.93, 10), (0.0, 1.0));
        assert_eq!(nice(3.0, 3.0, 10), (3.0, 3.0));
    }

    #[test]
    fn ticks_cover_domain() {
        let t = ticks(1970.0, 2020.0, 10);
        assert_eq!(t.first(), Some(&1970.0));
        assert_eq!(t.last(), Some(&2020.0));
        assert_eq!(t.len(), 11);
        let small = ticks(0.0, 1.0, 5);
        assert_eq!(small, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        let rev = ticks(10.0, 0.0, 2);
        assert_eq!(rev, vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn linear_maps_and_inverts() {
        let s = LinearScale::new((0.0, 150.0), (290.0, 0.0));
        assert!(close(s.apply(0.0), 290.0));
        assert!(close(s.apply(150.0), 0.0));
        assert!(close(s.apply(75.0), 145.0));
        assert!(close(s.invert(145.0), 75.0));
        let flat = LinearScale::new((4.0, 4.0), (0.0, 100.0));
        assert!(close(flat.apply(4.0), 50.0));
    }

    #[test]
    fn band_geometry() {
        let b = BandScale::new([2001, 2000, 2001, 2002], (0.0, 310.0), BAND_PADDING);
        assert_eq!(b.domain(), &[2000, 2001, 2002]);
        // step = 310 / (3 - 0.1 + 0.2) = 100
        assert!(close(b.step(), 100.0));
        assert!(close(b.band_width(), 90.0));
        assert!(close(b.position(2000).unwrap(), 10.0));
        assert!(close(b.position(2002).unwrap(), 210.0));
        assert_eq!(b.position(1999), None);
    }
}
