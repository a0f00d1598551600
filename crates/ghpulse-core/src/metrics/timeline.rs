use crate::metrics::TimelineBucket;
use chrono::{DateTime, Days, Local, NaiveDate, Utc};

/// Days covered by the commit timeline, today included
pub const TIMELINE_DAYS: usize = 30;

/// Zero-filled per-day commit counts for the trailing window ending on `today`
#[derive(Debug, Clone)]
pub struct CommitTimeline {
    start: NaiveDate,
    buckets: Vec<TimelineBucket>,
}

impl CommitTimeline {
    pub fn ending_on(today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(TIMELINE_DAYS as u64 - 1))
            .unwrap_or(NaiveDate::MIN);

        let buckets = start
            .iter_days()
            .take(TIMELINE_DAYS)
            .map(|date| TimelineBucket { date, count: 0 })
            .collect();

        Self { start, buckets }
    }

    /// Window ending on the local calendar date of now
    #[cfg(test)]
    pub fn ending_today() -> Self {
        Self::ending_on(Local::now().date_naive())
    }

    /// Count one commit on `date`. Returns false when the date is outside the window.
    pub fn record(&mut self, date: NaiveDate) -> bool {
        let offset = date.signed_duration_since(self.start).num_days();
        if offset < 0 {
            return false;
        }

        match self.buckets.get_mut(offset as usize) {
            Some(bucket) => {
                bucket.count += 1;
                true
            }
            None => false,
        }
    }

    /// Count one commit by its author timestamp, bucketed on the local calendar date
    pub fn record_timestamp(&mut self, timestamp: DateTime<Utc>) -> bool {
        self.record(timestamp.with_timezone(&Local).date_naive())
    }

    #[cfg(test)]
    pub fn buckets(&self) -> &[TimelineBucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<TimelineBucket> {
        self.buckets
    }
}
