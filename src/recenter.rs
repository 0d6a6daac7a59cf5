//! The map widget's "recenter on the current marker" capability.

/// Recenters the map on its marker. Called on every fresh search.
pub trait Recenter {
	fn recenter(&mut self);
}

impl<F> Recenter for F
where
	F: FnMut(),
{
	fn recenter(&mut self) {
		self()
	}
}

/// Recenter implementation for pages without a map.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMap;

impl Recenter for NoMap {
	fn recenter(&mut self) {}
}
