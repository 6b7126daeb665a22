use super::{Float, LabeledScore, LabeledScores};

/// Iterator over the samples of `LabeledScores` in storage order
pub struct Iter<'a, F> {
    data: &'a LabeledScores<F>,
    idx: usize,
}

impl<'a, F: Float> Iter<'a, F> {
    pub fn new(data: &'a LabeledScores<F>) -> Iter<'a, F> {
        Iter { data, idx: 0 }
    }
}

impl<'a, F: Float> Iterator for Iter<'a, F> {
    type Item = LabeledScore<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.data.len() {
            return None;
        }

        let item = LabeledScore::new(self.data.scores[self.idx], self.data.labels[self.idx]);
        self.idx += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl<'a, F: Float> ExactSizeIterator for Iter<'a, F> {}
