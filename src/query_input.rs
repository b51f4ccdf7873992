use super::*;

#[derive(Debug, Default)]
pub(crate) struct QueryInput {
  buffer: String,
}

impl QueryInput {
  pub(crate) fn clear(&mut self) {
    self.buffer.clear();
  }

  pub(crate) fn delete_char(&mut self) {
    self.buffer.pop();
  }

  pub(crate) fn insert_char(&mut self, ch: char) {
    self.buffer.push(ch);
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub(crate) fn set(&mut self, text: &str) {
    text.clone_into(&mut self.buffer);
  }

  pub(crate) fn text(&self) -> &str {
    &self.buffer
  }

  /// The longest suffix of the buffer that fits in `width` columns, so the
  /// end of a long city name stays next to the cursor.
  pub(crate) fn visible_tail(&self, width: usize) -> &str {
    let mut start = self.buffer.len();
    let mut used = 0;

    for (index, ch) in self.buffer.char_indices().rev() {
      let ch_width = Span::raw(ch.to_string()).width();

      if used + ch_width > width {
        break;
      }

      used += ch_width;
      start = index;
    }

    &self.buffer[start..]
  }
}
