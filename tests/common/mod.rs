use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times values sharing the same counter were dropped.
#[derive(Debug)]
pub struct DropCounter {
	drops: Rc<Cell<usize>>,
}

impl DropCounter {
	pub fn new(drops: &Rc<Cell<usize>>) -> Self {
		Self { drops: drops.clone() }
	}
}

impl Drop for DropCounter {
	fn drop(&mut self) {
		self.drops.set(self.drops.get() + 1);
	}
}

#[allow(dead_code)]
pub fn counter() -> Rc<Cell<usize>> {
	Rc::new(Cell::new(0))
}
