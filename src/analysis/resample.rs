/// Hourly-mean resampling of station time series.
///
/// The native CO-OPS cadence is 6 minutes; the model-comparison scripts
/// work at one hour. Each output value is the arithmetic mean of the
/// non-missing native samples whose timestamp falls inside that hour.
/// Hours inside the series span with no usable samples yield a missing
/// value, not an error, so the hourly file keeps a continuous clock.
///
/// Pure and deterministic; no side effects.

use chrono::{Duration, NaiveDateTime, Timelike};
use std::collections::BTreeMap;

use crate::model::{Cadence, ObsRecord, ObsSeries};

/// Truncate a timestamp to the start of its hour.
fn truncate_to_hour(t: NaiveDateTime) -> NaiveDateTime {
    t - Duration::minutes(t.minute() as i64)
        - Duration::seconds(t.second() as i64)
        - Duration::nanoseconds(t.nanosecond() as i64)
}

/// Resample a series to one-hour cadence by bucketed averaging.
///
/// The output covers every whole hour from the first sample's hour
/// through the last sample's hour, inclusive. Missing native samples
/// are skipped when averaging; a bucket with nothing usable produces a
/// record with `value: None`. Resampling an already-hourly series
/// returns the same values (the mean of a single sample is itself).
pub fn hourly_mean(series: &ObsSeries) -> ObsSeries {
    let mut buckets: BTreeMap<NaiveDateTime, (f64, u32)> = BTreeMap::new();

    for record in &series.records {
        let hour = truncate_to_hour(record.timestamp);
        let entry = buckets.entry(hour).or_insert((0.0, 0));
        if let Some(v) = record.value {
            entry.0 += v;
            entry.1 += 1;
        }
    }

    let mut records = Vec::new();
    if let (Some(first), Some(last)) = (
        buckets.keys().next().copied(),
        buckets.keys().next_back().copied(),
    ) {
        let mut hour = first;
        while hour <= last {
            let value = match buckets.get(&hour) {
                Some((sum, n)) if *n > 0 => Some(sum / f64::from(*n)),
                _ => None,
            };
            records.push(ObsRecord { timestamp: hour, value });
            hour += Duration::hours(1);
        }
    }

    ObsSeries {
        product: series.product,
        cadence: Cadence::OneHour,
        records,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
