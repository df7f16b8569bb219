use serde::Serialize;

/// Ordered log of fields whose value could not be read and was replaced by a default.
///
/// Entries are appended in discovery order and may repeat. There is no removal: a tracker is
/// created when a decode starts and read once it finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefaultAssumed {
    fields: Vec<String>,
}

impl DefaultAssumed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assumed(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    /// Appends everything a per-row tracker collected.
    pub fn merge(&mut self, other: DefaultAssumed) {
        self.fields.extend(other.fields);
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|entry| entry == field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Running counter handing out 1-based row indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningIndex {
    current: usize,
}

impl RunningIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances and returns the next index; the first call yields 1.
    pub fn next_index(&mut self) -> usize {
        self.current += 1;
        self.current
    }

    pub fn current(&self) -> usize {
        self.current
    }
}
