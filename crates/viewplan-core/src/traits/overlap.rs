/// Decides whether two views can possibly share content.
///
/// The planner only consumes the answer; computing it (bounding boxes,
/// registrations) belongs to the caller.
pub trait OverlapDetection<V> {
    fn overlaps(&self, a: &V, b: &V) -> bool;
}

impl<V, F> OverlapDetection<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    fn overlaps(&self, a: &V, b: &V) -> bool {
        self(a, b)
    }
}
