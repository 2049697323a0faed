//! Back/forward browsing history.
//!
//! A pair of stacks around a current page, the way a web browser tracks
//! history. Pages are opaque tokens: the navigator never looks inside them.
//!
//! * Visiting a page pushes the current one onto the back stack and clears
//!   the forward stack
//! * Going back or forward moves the current page onto the opposite stack
//! * Neither stack ever holds the current page itself

/// Browsing history over page tokens of type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigator<T> {
    /// Page being shown, `None` before the first visit
    current: Option<T>,

    /// Earlier pages, most recent last
    back: Vec<T>,

    /// Pages left by going back, most recent last
    forward: Vec<T>,
}

impl<T> PageNavigator<T> {
    /// Creates a navigator with no current page.
    pub fn new() -> Self {
        Self {
            current: None,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// Returns the page being shown.
    pub fn current_page(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns whether [`PageNavigator::go_back`] would move.
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Returns whether [`PageNavigator::go_forward`] would move.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Makes `page` current.
    ///
    /// The previous current page, if any, goes onto the back stack. The
    /// forward stack is always cleared.
    pub fn visit_page(&mut self, page: T) {
        if let Some(previous) = self.current.replace(page) {
            self.back.push(previous);
        }
        self.forward.clear();
    }

    /// Returns to the previous page.
    ///
    /// # Returns
    ///
    /// The new current page, or `None` if there is no previous page; in that
    /// case nothing changes.
    pub fn go_back(&mut self) -> Option<&T> {
        let previous = self.back.pop()?;
        if let Some(current) = self.current.replace(previous) {
            self.forward.push(current);
        }
        self.current.as_ref()
    }

    /// Moves to the page left by the last [`PageNavigator::go_back`].
    ///
    /// # Returns
    ///
    /// The new current page, or `None` if there is no next page; in that case
    /// nothing changes.
    pub fn go_forward(&mut self) -> Option<&T> {
        let next = self.forward.pop()?;
        if let Some(current) = self.current.replace(next) {
            self.back.push(current);
        }
        self.current.as_ref()
    }
}

impl<T> Default for PageNavigator<T> {
    fn default() -> Self {
        Self::new()
    }
}
