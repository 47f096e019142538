use std::cell::{RefCell, RefMut};
use std::io::Write;

/// One invocation of the tool: where output goes and whether it is colored
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
    color: bool,
}

impl Session {
    pub fn new(writer: Box<dyn Write>, color: bool) -> Self {
        Session {
            writer: RefCell::new(writer),
            color,
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn color(&self) -> bool {
        self.color
    }
}
