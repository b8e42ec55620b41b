use std::cell::Cell;
use std::rc::Rc;

/// An element that bumps a shared counter when dropped, for checking that
/// structural operations release nodes
#[derive(Clone, Debug)]
pub struct DropTally {
    pub value: i32,
    drops: Rc<Cell<usize>>,
}

impl DropTally {
    pub fn new(value: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
