use super::route::Route;

/// Client-side router the navbar pushes destinations into.
pub trait Navigator: Send + Sync {
    fn push(&self, route: &Route);
}
