/// Locations list modal: visibility plus the highlighted row
#[derive(Debug, Clone, Default)]
pub struct LocationListState {
    open: bool,
    highlighted: usize,
}

impl LocationListState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Show the modal with the first row highlighted
    pub fn open(&mut self) {
        self.open = true;
        self.highlighted = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Move down, wrapping to the top after the last of `len` rows
    pub fn highlight_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1) % len;
    }

    /// Move up, wrapping to the bottom before the first of `len` rows
    pub fn highlight_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.highlighted = self.highlighted.checked_sub(1).unwrap_or(len - 1).min(len - 1);
    }
}
