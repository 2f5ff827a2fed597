/// Patterns of one length stored back to back.
#[derive(Debug, Clone)]
pub struct PatternLevel<T> {
    pub items: Vec<T>,
    pub offsets: Vec<(usize, usize)>,
    pub supports: Vec<usize>,
    pub pattern_len: usize,
}

impl<T: Clone> PatternLevel<T> {
    pub fn new(pattern_len: usize) -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
            pattern_len,
        }
    }

    /// Append a pattern and return its index within the level.
    pub fn add_pattern(&mut self, pattern: &[T], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(pattern);
        self.offsets.push((start, pattern.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }
}

impl<T> PatternLevel<T> {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn get_pattern(&self, idx: usize) -> &[T] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn iter_patterns(&self) -> impl Iterator<Item = (usize, &[T])> {
        (0..self.len()).map(move |idx| (self.supports[idx], self.get_pattern(idx)))
    }
}

/// Bucket mining results by pattern length.
///
/// Level `i` holds the patterns of length `i + 1`, in result order; lengths
/// with no pattern yield empty levels.
pub fn group_by_length<T: Clone>(results: &[(usize, Vec<T>)]) -> Vec<PatternLevel<T>> {
    let mut levels: Vec<PatternLevel<T>> = Vec::new();

    for (support, pattern) in results {
        let size = pattern.len();
        if size == 0 {
            continue;
        }
        while levels.len() < size {
            levels.push(PatternLevel::new(levels.len() + 1));
        }
        levels[size - 1].add_pattern(pattern, *support);
    }
    levels
}
