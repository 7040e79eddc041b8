use rand::Rng;

/// A list of items with weights from which items are drawn with a
/// probability proportional to their weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPool<T> {
    entries: Vec<(T, f64)>,
}

impl<T> WeightedPool<T> {
    #[must_use]
    pub fn new(entries: Vec<(T, f64)>) -> Self {
        Self { entries }
    }

    /// Weights the items by the inverse of their rank: the first item has
    /// weight `1`, the second `1/2`, the third `1/3` and so on.
    #[must_use]
    pub fn with_inverse_rank(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (item, 1.0 / (index + 1) as f64))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    /// Returns the first item for which the running sum of the weights reaches
    /// `target`, or the last item if none does.
    #[must_use]
    pub fn pick(&self, target: f64) -> Option<&T> {
        let mut upto = 0.0;
        for (item, weight) in &self.entries {
            upto += weight;
            if upto >= target {
                return Some(item);
            }
        }

        // only reachable through rounding errors
        self.entries.last().map(|(item, _)| item)
    }

    /// Draws an item, `None` if the pool is empty.
    #[must_use]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        let total = self.total_weight();
        if total.is_nan() || total <= 0.0 {
            return self.entries.first().map(|(item, _)| item);
        }

        self.pick(rng.gen_range(0.0..total))
    }

    /// Removes the item together with its weight.
    pub fn remove(&mut self, item: &T) -> Option<(T, f64)>
    where
        T: PartialEq,
    {
        let index = self.entries.iter().position(|(other, _)| other == item)?;

        Some(self.entries.remove(index))
    }
}
