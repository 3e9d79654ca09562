use std::cell::Cell;
use std::rc::Rc;

/// Bumps the shared counter when dropped.
pub(crate) struct DropCounter(pub Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::DropCounter;

    #[test]
    fn drop_counter_counts_each_drop() {
        let drops = Rc::new(Cell::new(0));
        drop(DropCounter(drops.clone()));
        drop(DropCounter(drops.clone()));
        assert_eq!(drops.get(), 2);
    }
}
