use std::fmt;

use crate::skiplist::SkipList;

// Level by level rendering, top express lane first:
//   L1: HEAD -> 3 -> NIL
//   L0: HEAD -> 1 -> 3 -> 5 -> NIL
// Only goes through the public node view. No stable format.
impl<T: fmt::Display> fmt::Display for SkipList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut level = self.height();
        let mut sentinel = self.head().down();
        while let Some(start) = sentinel {
            level -= 1;
            write!(f, "L{}: HEAD", level)?;
            let mut cur = start.next();
            while let Some(node) = cur {
                match node.value() {
                    Some(value) => write!(f, " -> {}", value)?,
                    None => write!(f, " -> ?")?,
                }
                cur = node.next();
            }
            writeln!(f, " -> NIL")?;
            sentinel = start.down();
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SkipList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> SkipList<T> {
    pub fn print(&self) {
        print!("{}", self);
    }
}
