use std::cell::Cell;
use std::rc::Rc;

/// Page-view scoped memory of whether a callback was ever delivered.
/// Clones share the same flag. Nothing is written to storage.
#[derive(Clone, Debug, Default)]
pub struct SubmissionSession {
    submitted: Rc<Cell<bool>>,
}

impl SubmissionSession {
    #[cfg(test)]
    pub fn new(submitted: bool) -> Self {
        Self {
            submitted: Rc::new(Cell::new(submitted)),
        }
    }

    pub fn has_submitted(&self) -> bool {
        self.submitted.get()
    }

    pub fn mark_submitted(&self) {
        self.submitted.set(true);
    }
}

impl PartialEq for SubmissionSession {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.submitted, &other.submitted)
    }
}
