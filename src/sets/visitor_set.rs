/// Per-vertex membership used by the traversals to track visited and pending vertices.
pub trait VisitorSet {
    fn get(&self, i: usize) -> bool;
    fn set(&mut self, i: usize);
    fn unset(&mut self, i: usize);
}
