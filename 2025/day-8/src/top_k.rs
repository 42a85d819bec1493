/// Keeps the `capacity` smallest items seen so far, in ascending order.
///
/// Items are inserted at their sorted position (after any equal items already
/// kept) and the list is truncated when it grows past its capacity. To keep the
/// largest items instead, push them wrapped in [`std::cmp::Reverse`].
#[derive(Debug, Clone)]
pub struct TopK<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> TopK<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Offers an item. Returns `true` if it was kept.
    pub fn push(&mut self, item: T) -> bool {
        let index = self.items.partition_point(|kept| kept <= &item);
        if index >= self.capacity {
            return false;
        }
        self.items.insert(index, item);
        self.items.truncate(self.capacity);
        true
    }

    /// Combines two bounded lists, keeping the capacity of `self`.
    pub fn merge(mut self, other: Self) -> Self {
        for item in other.items {
            // `other` is sorted, nothing after a rejected item can make it in.
            if !self.push(item) {
                break;
            }
        }
        self
    }

    /// The item that would be evicted next, once the list is full.
    pub fn worst(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ord> Extend<T> for TopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Collects the `k` smallest items of an iterator, ascending.
pub fn smallest<T: Ord>(iter: impl IntoIterator<Item = T>, k: usize) -> Vec<T> {
    let mut top = TopK::with_capacity(k);
    top.extend(iter);
    top.into_vec()
}
