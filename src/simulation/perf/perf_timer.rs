//! Wall-clock timing for perf stats: `Date.now()` on wasm, `Instant` elsewhere.

/// Running phase timer
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    /// `Some(timer)` only while perf metrics are enabled
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(Self::start)
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Add the elapsed time of an optional timer to `slot`
#[inline]
pub(crate) fn accumulate(timer: Option<PerfTimer>, slot: &mut f64) {
    if let Some(t) = timer {
        *slot += t.elapsed_ms();
    }
}
