//! Rolling-origin train/test folds over a built dataset

use crate::builder::{Sample, WindowedDataset};
use crate::error::{Result, WindowError};

/// One walk-forward fold
///
/// Both slices are contiguous runs of samples in ascending origin order,
/// with the train run ending immediately before the test run starts, so
/// every test origin strictly exceeds every train origin.
#[derive(Debug, Clone, Copy)]
pub struct Fold<'a> {
    /// Training samples for this fold
    pub train: &'a [Sample],
    /// Test samples immediately following the training window
    pub test: &'a [Sample],
}

/// Finite iterator over rolling folds
///
/// Each `rolling_split` call returns a fresh iterator, so re-invoking with
/// identical arguments replays an identical sequence of folds.
#[derive(Debug, Clone)]
pub struct RollingSplit<'a> {
    samples: &'a [Sample],
    train_span: usize,
    test_span: usize,
    stride: usize,
    start: usize,
}

impl<'a> Iterator for RollingSplit<'a> {
    type Item = Fold<'a>;

    fn next(&mut self) -> Option<Fold<'a>> {
        let end = self.start + self.train_span + self.test_span;
        if end > self.samples.len() {
            return None;
        }

        let split = self.start + self.train_span;
        let fold = Fold {
            train: &self.samples[self.start..split],
            test: &self.samples[split..end],
        };
        self.start += self.stride;
        Some(fold)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let window = self.train_span + self.test_span;
        let remaining = if self.start + window > self.samples.len() {
            0
        } else {
            (self.samples.len() - window - self.start) / self.stride + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RollingSplit<'_> {}

impl WindowedDataset {
    /// Slide a train window of `train_span` samples followed by `test_span`
    /// test samples across the dataset, advancing by `stride` per fold
    ///
    /// Fails with `InvalidSpec` when any argument is zero and with
    /// `InsufficientData` when the dataset cannot hold a single fold.
    pub fn rolling_split(
        &self,
        train_span: usize,
        test_span: usize,
        stride: usize,
    ) -> Result<RollingSplit<'_>> {
        if train_span == 0 || test_span == 0 {
            return Err(WindowError::InvalidSpec(
                "train and test spans must cover at least one sample".to_string(),
            ));
        }
        if stride == 0 {
            return Err(WindowError::InvalidSpec(
                "stride must advance by at least one sample".to_string(),
            ));
        }

        let needed = train_span + test_span;
        if self.len() < needed {
            return Err(WindowError::InsufficientData(format!(
                "dataset has {} samples, split needs at least {}",
                self.len(),
                needed
            )));
        }

        Ok(RollingSplit {
            samples: self.samples(),
            train_span,
            test_span,
            stride,
            start: 0,
        })
    }
}
