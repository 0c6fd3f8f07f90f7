//! Transient run state driving progress reporting.

/// Progress through an outline of `total` chapters.
///
/// # Examples
///
/// ```
/// use folio_core::Job;
///
/// let mut job = Job::new(3);
/// assert_eq!(job.advance(), Some(1));
/// assert_eq!(job.remaining(), 2);
/// assert_eq!(job.advance(), Some(2));
/// assert_eq!(job.advance(), Some(3));
/// assert_eq!(job.advance(), None);
/// assert!(job.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    total: usize,
    current: usize,
}

impl Job {
    /// Start a job over `total` chapters.
    pub fn new(total: usize) -> Self {
        Self { total, current: 0 }
    }

    /// Move to the next chapter, returning its 1-based index.
    ///
    /// Returns `None` once every chapter has been started.
    pub fn advance(&mut self) -> Option<usize> {
        if self.current >= self.total {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Total chapters in the job.
    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based index of the chapter in flight, or 0 before the first.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Chapters not yet started.
    pub fn remaining(&self) -> usize {
        self.total - self.current
    }

    /// Whether every chapter has been started.
    pub fn is_complete(&self) -> bool {
        self.current == self.total
    }
}
