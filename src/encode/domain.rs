use crate::error::EncodeError;
use crate::models::Record;
use serde::{Deserialize, Serialize};

use super::scale::nice;

/// Tick count the "nice" upper bound is rounded against.
pub const NICE_TICKS: usize = 10;

/// Extents used to build a chart's scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub ordinal_min: i32,
    pub ordinal_max: i32,
    pub value_min: f64,
    pub value_max: f64,
}

/// How the value extent is padded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainOptions {
    /// Multiplier on the observed maximum (1.0 = none).
    pub headroom: f64,
    /// Round the upper bound up to a tick boundary after applying headroom.
    pub nice: bool,
    /// Pin the ordinal extent instead of taking it from the data.
    pub ordinal_range: Option<(i32, i32)>,
}

impl Default for DomainOptions {
    fn default() -> Self {
        Self {
            headroom: 1.0,
            nice: false,
            ordinal_range: None,
        }
    }
}

/// Compute `{ ordinal_min, ordinal_max, 0, max(value) * headroom }`.
///
/// The result does not depend on record order. An all-zero dataset gets an
/// upper bound of 1 so downstream scales never collapse.
///
/// # Errors
/// - [`EncodeError::EmptyDataset`] for no records
/// - [`EncodeError::NonFiniteValue`] when any value is NaN or infinite
/// - [`EncodeError::InvalidHeadroom`] for a headroom that is not finite and positive
pub fn compute_domain(records: &[Record], opts: &DomainOptions) -> Result<Domain, EncodeError> {
    if !(opts.headroom.is_finite() && opts.headroom > 0.0) {
        return Err(EncodeError::InvalidHeadroom(opts.headroom));
    }
    let first = records.first().ok_or(EncodeError::EmptyDataset)?;

    let mut ordinal_min = first.ordinal;
    let mut ordinal_max = first.ordinal;
    let mut max_value = f64::NEG_INFINITY;
    for r in records {
        if !r.value.is_finite() {
            return Err(EncodeError::NonFiniteValue {
                category: r.category.clone(),
                ordinal: r.ordinal,
                value: r.value,
            });
        }
        ordinal_min = ordinal_min.min(r.ordinal);
        ordinal_max = ordinal_max.max(r.ordinal);
        max_value = max_value.max(r.value);
    }
    if let Some((lo, hi)) = opts.ordinal_range {
        ordinal_min = lo.min(hi);
        ordinal_max = lo.max(hi);
    }

    let mut value_max = max_value * opts.headroom;
    if opts.nice {
        value_max = nice(0.0, value_max, NICE_TICKS).1;
    }
    if value_max <= 0.0 {
        value_max = 1.0;
    }

    Ok(Domain {
        ordinal_min,
        ordinal_max,
        value_min: 0.0,
        value_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(headroom: f64, nice: bool) -> DomainOptions {
        DomainOptions {
            headroom,
            nice,
            ordinal_range: None,
        }
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(
            compute_domain(&[], &DomainOptions::default()),
            Err(EncodeError::EmptyDataset)
        );
    }

    #[test]
    fn headroom_applies_before_nice() {
        let recs = vec![Record::new("Japan", 2000, 100.0), Record::new("Korea", 2001, 40.0)];
        let d = compute_domain(&recs, &opts(1.5, false)).unwrap();
        assert_eq!(d.value_max, 150.0);
        assert_eq!(d.value_min, 0.0);
        assert_eq!((d.ordinal_min, d.ordinal_max), (2000, 2001));

        // 150 rounds up to the next multiple of the 20-wide tick step
        let d = compute_domain(&recs, &opts(1.5, true)).unwrap();
        assert_eq!(d.value_max, 160.0);

        let d = compute_domain(&[Record::new("Japan", 2000, 31234.0)], &opts(1.0, true)).unwrap();
        assert_eq!(d.value_max, 35000.0);
    }

    #[test]
    fn rejects_bad_input() {
        let nan = vec![Record::new("China", 1990, f64::NAN)];
        assert!(matches!(
            compute_domain(&nan, &DomainOptions::default()),
            Err(EncodeError::NonFiniteValue { ordinal: 1990, .. })
        ));
        let ok = vec![Record::new("China", 1990, 1.0)];
        assert_eq!(
            compute_domain(&ok, &opts(0.0, false)),
            Err(EncodeError::InvalidHeadroom(0.0))
        );
    }

    #[test]
    fn zero_and_pinned_extents() {
        let recs = vec![Record::new("Korea", 1985, 0.0)];
        let d = compute_domain(
            &recs,
            &DomainOptions {
                ordinal_range: Some((2020, 1970)),
                ..DomainOptions::default()
            },
        )
        .unwrap();
        assert_eq!(d.value_max, 1.0);
        assert_eq!((d.ordinal_min, d.ordinal_max), (1970, 2020));
    }
}
