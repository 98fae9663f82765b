//! Forward cursor over a private copy of an integer sequence.

/// A resettable forward cursor.
///
/// The cursor owns its own copy of the sequence, so later changes to the
/// source do not affect it. The position is always in `[0, len]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqCursor {
    data: Vec<i32>,
    pos: usize,
}

impl SeqCursor {
    /// Copy `values` and place the cursor at the start.
    pub fn new(values: &[i32]) -> Self {
        Self {
            data: values.to_vec(),
            pos: 0,
        }
    }

    /// Whether an element remains at the cursor.
    pub fn has_next(&self) -> bool {
        self.pos != self.data.len()
    }

    /// Element at the cursor, advancing past it. `None` at the end, in
    /// which case the cursor does not move.
    pub fn advance(&mut self) -> Option<i32> {
        let value = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(value)
    }

    /// Move the cursor back to the start.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Scan the whole sequence from the start for `value`.
    ///
    /// On the first match the cursor moves onto it and `true` is returned;
    /// otherwise the cursor is left where it was.
    pub fn find(&mut self, value: i32) -> bool {
        match self.data.iter().position(|&v| v == value) {
            Some(i) => {
                self.pos = i;
                true
            }
            None => false,
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the underlying sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Iterator for SeqCursor {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.data.len() - self.pos;
        (rest, Some(rest))
    }
}
