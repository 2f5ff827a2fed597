/// Pattern length bounds shared by every mining mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningConfig {
    minlen: usize,
    maxlen: Option<usize>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            minlen: 1,
            maxlen: None,
        }
    }
}

impl MiningConfig {
    /// `None` or zero falls back to the default for either bound.
    pub fn new(minlen: Option<usize>, maxlen: Option<usize>) -> Self {
        let mut config = Self::default();
        if let Some(minlen) = minlen {
            config = config.with_minlen(minlen);
        }
        if let Some(maxlen) = maxlen {
            config = config.with_maxlen(maxlen);
        }
        config
    }

    pub fn with_minlen(mut self, minlen: usize) -> Self {
        self.minlen = minlen.max(1);
        self
    }

    pub fn with_maxlen(mut self, maxlen: usize) -> Self {
        self.maxlen = (maxlen > 0).then_some(maxlen);
        self
    }

    pub fn minlen(&self) -> usize {
        self.minlen
    }

    pub fn maxlen(&self) -> Option<usize> {
        self.maxlen
    }

    /// Whether a pattern of `len` symbols is reported.
    pub fn accepts(&self, len: usize) -> bool {
        len >= self.minlen && self.maxlen.map_or(true, |maxlen| len <= maxlen)
    }

    /// Whether growth stops at `len` symbols.
    pub fn is_terminal(&self, len: usize) -> bool {
        self.maxlen.is_some_and(|maxlen| len >= maxlen)
    }
}
