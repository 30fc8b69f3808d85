use url::Url;

use crate::types::{DownloadRecord, DownloadStatus, MediaFormat, Quality};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Empty,
    Invalid(url::ParseError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Empty => write!(f, "Please enter a valid URL"),
            SubmitError::Invalid(_) => write!(f, "Please enter a valid URL format"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// What a timer tick did to a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Progress moved forward; keep ticking.
    Advanced(f32),
    /// The record is pending or paused; nothing changed and the timer
    /// stays alive.
    Inert,
    /// This tick pushed progress to 100 and flipped the record to
    /// completed.
    Completed,
    /// The record is already terminal or unknown; the timer should die.
    Stopped,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::Completed | TickOutcome::Stopped)
    }
}

/// The owned download queue. Pure state transitions, no timers and no DOM;
/// the manager layers scheduling and notifications on top.
#[derive(Debug, Default)]
pub struct DownloadQueue {
    records: Vec<DownloadRecord>,
    last_id: u64,
}

impl DownloadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submission and prepend a new pending record, newest first.
    ///
    /// `now_ms` seeds the record id; ids stay unique and increasing even
    /// when two submissions land in the same millisecond.
    pub fn submit(
        &mut self,
        raw_url: &str,
        format: MediaFormat,
        quality: Quality,
        now_ms: u64,
    ) -> Result<u64, SubmitError> {
        if raw_url.trim().is_empty() {
            return Err(SubmitError::Empty);
        }
        let parsed = Url::parse(raw_url).map_err(SubmitError::Invalid)?;

        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.records.insert(
            0,
            DownloadRecord {
                id,
                url: raw_url.to_string(),
                title: display_title(&parsed),
                format,
                quality,
                progress: 0.0,
                status: DownloadStatus::Pending,
            },
        );
        Ok(id)
    }

    /// The one-shot `Pending -> Downloading` edge, fired after the start
    /// delay. Returns false if the record moved on (or never existed).
    pub fn begin(&mut self, id: u64) -> bool {
        match self.record_mut(id) {
            Some(rec) if rec.status == DownloadStatus::Pending => {
                rec.status = DownloadStatus::Downloading;
                true
            }
            _ => false,
        }
    }

    /// Advance a downloading record by `step` percent, clamped to 100.
    /// Hitting 100 flips the record to completed in the same call.
    pub fn tick(&mut self, id: u64, step: f32) -> TickOutcome {
        let Some(rec) = self.record_mut(id) else {
            return TickOutcome::Stopped;
        };
        match rec.status {
            DownloadStatus::Downloading => {
                rec.progress = (rec.progress + step.max(0.0)).min(100.0);
                if rec.progress >= 100.0 {
                    rec.progress = 100.0;
                    rec.status = DownloadStatus::Completed;
                    TickOutcome::Completed
                } else {
                    TickOutcome::Advanced(rec.progress)
                }
            }
            DownloadStatus::Pending | DownloadStatus::Paused => TickOutcome::Inert,
            DownloadStatus::Completed | DownloadStatus::Error => TickOutcome::Stopped,
        }
    }

    /// Flip `Downloading <-> Paused`, preserving progress. Any other state
    /// is a no-op and returns None.
    pub fn toggle(&mut self, id: u64) -> Option<DownloadStatus> {
        let rec = self.record_mut(id)?;
        let next = match rec.status {
            DownloadStatus::Downloading => DownloadStatus::Paused,
            DownloadStatus::Paused => DownloadStatus::Downloading,
            _ => return None,
        };
        rec.status = next;
        Some(next)
    }

    pub fn get(&self, id: u64) -> Option<&DownloadRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Read-only copy for rendering, newest first.
    pub fn snapshot(&self) -> Vec<DownloadRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record_mut(&mut self, id: u64) -> Option<&mut DownloadRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }
}

fn display_title(url: &Url) -> String {
    format!("Video from {}", url.host_str().unwrap_or("unknown source"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_with_one(url: &str) -> (DownloadQueue, u64) {
        let mut q = DownloadQueue::new();
        let id = q
            .submit(url, MediaFormat::Mp4, Quality::P720, 1_000)
            .unwrap();
        (q, id)
    }

    #[test]
    fn valid_submission_prepends_a_pending_record() {
        let mut q = DownloadQueue::new();
        let first = q
            .submit("https://example.com/a", MediaFormat::Mp4, Quality::P720, 10)
            .unwrap();
        let second = q
            .submit("https://example.org/b", MediaFormat::Webm, Quality::P1080, 20)
            .unwrap();

        let snap = q.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].id, second);
        assert_eq!(snap[1].id, first);
        assert_eq!(snap[0].status, DownloadStatus::Pending);
        assert_eq!(snap[0].progress, 0.0);
    }

    #[test]
    fn title_derives_from_the_hostname() {
        let (q, id) = queue_with_one("https://example.com/watch?v=abc");
        assert_eq!(q.get(id).unwrap().title, "Video from example.com");
    }

    #[test]
    fn hostless_urls_get_the_fallback_title() {
        let (q, id) = queue_with_one("mailto:someone@example.com");
        assert_eq!(q.get(id).unwrap().title, "Video from unknown source");
    }

    #[test]
    fn blank_submissions_are_rejected() {
        let mut q = DownloadQueue::new();
        assert_eq!(
            q.submit("", MediaFormat::Mp4, Quality::P720, 1),
            Err(SubmitError::Empty)
        );
        assert_eq!(
            q.submit("   ", MediaFormat::Mp4, Quality::P720, 2),
            Err(SubmitError::Empty)
        );
        assert!(q.is_empty());
    }

    #[test]
    fn malformed_submissions_are_rejected_without_mutation() {
        let mut q = DownloadQueue::new();
        let err = q
            .submit("not a url", MediaFormat::Mp3, Quality::P480, 1)
            .unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert!(q.is_empty());
    }

    #[test]
    fn submitted_selections_are_kept_verbatim() {
        let mut q = DownloadQueue::new();
        let id = q
            .submit("https://example.com/video", MediaFormat::Mp3, Quality::P360, 7)
            .unwrap();
        let rec = q.get(id).unwrap();
        assert_eq!(rec.format, MediaFormat::Mp3);
        assert_eq!(rec.quality, Quality::P360);
        assert_eq!(rec.url, "https://example.com/video");
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut q = DownloadQueue::new();
        let a = q
            .submit("https://a.test/x", MediaFormat::Mp4, Quality::P720, 500)
            .unwrap();
        let b = q
            .submit("https://b.test/y", MediaFormat::Mp4, Quality::P720, 500)
            .unwrap();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn begin_fires_the_pending_edge_exactly_once() {
        let (mut q, id) = queue_with_one("https://example.com/v");
        assert!(q.begin(id));
        assert_eq!(q.get(id).unwrap().status, DownloadStatus::Downloading);
        assert!(!q.begin(id));
    }

    #[test]
    fn pending_records_ignore_ticks_before_begin() {
        let (mut q, id) = queue_with_one("https://example.com/v");
        assert_eq!(q.tick(id, 10.0), TickOutcome::Inert);
        assert_eq!(q.get(id).unwrap().progress, 0.0);
    }

    #[test]
    fn ticks_advance_monotonically_and_clamp_at_100() {
        let (mut q, id) = queue_with_one("https://example.com/v");
        q.begin(id);

        let mut last = 0.0_f32;
        loop {
            match q.tick(id, 9.5) {
                TickOutcome::Advanced(p) => {
                    assert!(p >= last);
                    assert!(p < 100.0);
                    last = p;
                }
                TickOutcome::Completed => break,
                other => panic!("unexpected outcome: {other:?}"),
            }
        }

        let rec = q.get(id).unwrap();
        assert_eq!(rec.progress, 100.0);
        assert_eq!(rec.status, DownloadStatus::Completed);
    }

    #[test]
    fn completion_reports_exactly_once_then_stops() {
        let (mut q, id) = queue_with_one("https://example.com/v");
        q.begin(id);
        assert_eq!(q.tick(id, 150.0), TickOutcome::Completed);
        assert_eq!(q.tick(id, 10.0), TickOutcome::Stopped);
        assert_eq!(q.get(id).unwrap().progress, 100.0);
        assert_eq!(q.get(id).unwrap().status, DownloadStatus::Completed);
    }

    #[test]
    fn toggle_flips_between_downloading_and_paused() {
        let (mut q, id) = queue_with_one("https://example.com/v");
        q.begin(id);
        q.tick(id, 12.0);
        let before = q.get(id).unwrap().progress;

        assert_eq!(q.toggle(id), Some(DownloadStatus::Paused));
        assert_eq!(q.get(id).unwrap().progress, before);
        assert_eq!(q.toggle(id), Some(DownloadStatus::Downloading));
        assert_eq!(q.get(id).unwrap().progress, before);
    }

    #[test]
    fn paused_records_ignore_ticks() {
        let (mut q, id) = queue_with_one("https://example.com/v");
        q.begin(id);
        q.toggle(id);
        assert_eq!(q.tick(id, 50.0), TickOutcome::Inert);
        assert_eq!(q.get(id).unwrap().progress, 0.0);
        assert_eq!(q.get(id).unwrap().status, DownloadStatus::Paused);
    }

    #[test]
    fn resumed_records_pick_up_where_they_left_off() {
        let (mut q, id) = queue_with_one("https://example.com/v");
        q.begin(id);
        q.tick(id, 40.0);
        q.toggle(id);
        q.tick(id, 40.0);
        q.toggle(id);
        assert_eq!(q.tick(id, 40.0), TickOutcome::Advanced(80.0));
    }

    #[test]
    fn toggle_is_a_noop_for_pending_and_completed() {
        let (mut q, id) = queue_with_one("https://example.com/v");
        assert_eq!(q.toggle(id), None);
        q.begin(id);
        q.tick(id, 200.0);
        assert_eq!(q.toggle(id), None);
        assert_eq!(q.get(id).unwrap().status, DownloadStatus::Completed);
    }

    #[test]
    fn unknown_ids_are_reported_stopped() {
        let mut q = DownloadQueue::new();
        assert_eq!(q.tick(42, 1.0), TickOutcome::Stopped);
        assert_eq!(q.toggle(42), None);
        assert!(!q.begin(42));
        assert!(q.get(42).is_none());
    }

    #[test]
    fn records_are_never_removed() {
        let mut q = DownloadQueue::new();
        let a = q
            .submit("https://one.test/a", MediaFormat::Mp4, Quality::P720, 1)
            .unwrap();
        let b = q
            .submit("https://two.test/b", MediaFormat::Mp3, Quality::P360, 2)
            .unwrap();
        q.begin(a);
        q.tick(a, 200.0);
        q.begin(b);
        q.toggle(b);

        assert_eq!(q.len(), 2);
        assert!(q.get(a).is_some());
        assert!(q.get(b).is_some());
    }

    #[test]
    fn full_lifecycle_runs_to_completion() {
        let mut q = DownloadQueue::new();
        let id = q
            .submit(
                "https://example.com/video",
                MediaFormat::Mp4,
                Quality::P720,
                1_700_000_000_000,
            )
            .unwrap();

        let rec = q.get(id).unwrap();
        assert_eq!(rec.title, "Video from example.com");
        assert_eq!(rec.status, DownloadStatus::Pending);
        assert_eq!(rec.progress, 0.0);

        assert!(q.begin(id));
        assert_eq!(q.get(id).unwrap().status, DownloadStatus::Downloading);

        let mut ticks = 0;
        while !q.tick(id, 7.0).is_terminal() {
            ticks += 1;
            assert!(ticks < 100, "progress never completed");
        }

        let rec = q.get(id).unwrap();
        assert_eq!(rec.status, DownloadStatus::Completed);
        assert_eq!(rec.progress, 100.0);
    }
}
