use super::error::PrefixSpanError;
use super::scan::Match;

/// An ordered collection of symbol sequences.
///
/// The database is read-only once built: mining calls borrow it and never
/// mutate it, so the same instance can be mined repeatedly or from several
/// threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDb<T> {
    sequences: Vec<Vec<T>>,
}

impl<T> SequenceDb<T> {
    pub fn new(sequences: Vec<Vec<T>>) -> Self {
        Self { sequences }
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&[T]> {
        self.sequences.get(idx).map(Vec::as_slice)
    }

    pub fn sequences(&self) -> &[Vec<T>] {
        &self.sequences
    }

    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.sequences.iter().map(Vec::as_slice)
    }

    /// Match set of the empty prefix: every sequence, nothing consumed.
    pub fn root_matches(&self) -> Vec<Match> {
        (0..self.sequences.len()).map(|seq| Match::new(seq, 0)).collect()
    }
}

impl<T: Clone + PartialEq> SequenceDb<T> {
    /// Build a database from a row-major matrix of `width` columns.
    ///
    /// Each row is one sequence; it ends at the first cell equal to `pad`.
    pub fn from_padded(cells: &[T], width: usize, pad: &T) -> Result<Self, PrefixSpanError> {
        if width == 0 {
            if cells.is_empty() {
                return Ok(Self::new(Vec::new()));
            }
            return Err(PrefixSpanError::ShapeMismatch { cells: cells.len(), width });
        }
        if cells.len() % width != 0 {
            return Err(PrefixSpanError::ShapeMismatch { cells: cells.len(), width });
        }

        let sequences = cells
            .chunks(width)
            .map(|row| row.iter().take_while(|&cell| cell != pad).cloned().collect())
            .collect();

        Ok(Self::new(sequences))
    }
}

impl SequenceDb<i64> {
    /// Parse one sequence per line of whitespace-separated integers.
    ///
    /// Blank lines are kept as empty sequences; lines starting with `#` are
    /// skipped.
    pub fn parse(input: &str) -> Result<Self, PrefixSpanError> {
        let mut sequences = Vec::new();

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }

            let sequence = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| PrefixSpanError::Parse {
                        line: idx + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            sequences.push(sequence);
        }

        Ok(Self::new(sequences))
    }
}

impl<T> From<Vec<Vec<T>>> for SequenceDb<T> {
    fn from(sequences: Vec<Vec<T>>) -> Self {
        Self::new(sequences)
    }
}

impl<T> FromIterator<Vec<T>> for SequenceDb<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
