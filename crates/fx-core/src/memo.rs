/// Single-entry memo cell: keeps the last computed value and rebuilds it
/// only when the key changes.
///
/// Demos hold one of these per generated artifact so per-frame code can ask
/// for the current output without redoing closed-form work every tick.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    builds: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            builds: 0,
        }
    }
}

impl<K: PartialEq + Clone, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, calling `build` on a miss.
    pub fn get_or_update(&mut self, key: &K, build: impl FnOnce(&K) -> V) -> &V {
        let entry = match self.entry.take() {
            Some((k, v)) if k == *key => (k, v),
            _ => {
                self.builds += 1;
                (key.clone(), build(key))
            }
        };
        &self.entry.insert(entry).1
    }

    /// The cached value, if any, without rebuilding.
    pub fn cached(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, v)| v)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of times a value has been (re)built.
    pub fn builds(&self) -> u64 {
        self.builds
    }
}
