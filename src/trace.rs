//! Search statistics, logged with `log::trace!` when the `log` Feature is enabled.
//! Without the Feature, everything in here compiles to nothing.

#[cfg(feature = "log")]
use std::time::Instant;

pub(crate) struct SearchTrace {
	#[cfg(feature = "log")]
	algorithm: &'static str,
	#[cfg(feature = "log")]
	started: Instant,
	#[cfg(feature = "log")]
	expanded: usize,
}

impl SearchTrace {
	#[inline]
	pub(crate) fn start(algorithm: &'static str) -> SearchTrace {
		#[cfg(not(feature = "log"))]
		let _ = algorithm;
		SearchTrace {
			#[cfg(feature = "log")]
			algorithm,
			#[cfg(feature = "log")]
			started: Instant::now(),
			#[cfg(feature = "log")]
			expanded: 0,
		}
	}

	/// counts one expanded Vertex
	#[inline]
	pub(crate) fn expand(&mut self) {
		#[cfg(feature = "log")]
		{
			self.expanded += 1;
		}
	}

	#[inline]
	pub(crate) fn finish(self, found: bool) {
		#[cfg(feature = "log")]
		log::trace!(
			"{}: {} after expanding {} Vertices in {:?}",
			self.algorithm,
			if found { "found a Path" } else { "no Path" },
			self.expanded,
			self.started.elapsed()
		);
		#[cfg(not(feature = "log"))]
		let _ = found;
	}
}
