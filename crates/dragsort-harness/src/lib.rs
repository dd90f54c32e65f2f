#![forbid(unsafe_code)]

//! Test fixtures for dragsort.
//!
//! - [`MockSurface`]: stacked items in a scrollable viewport, with capture
//!   and offset bookkeeping.
//! - [`RecordingHost`]: a real backing `Vec` plus a log of every callback.
//! - [`GestureScript`]: deterministic, time-stamped input timelines.
//!
//! Tests and benches build a controller with [`list`] and drive it with a
//! script or by hand.

pub mod host;
pub mod script;
pub mod surface;

pub use host::{HostCall, RecordingHost};
pub use script::{GestureScript, ScriptInput, ScriptStep};
pub use surface::{CaptureCall, MockSurface, ScrollRequest};

use dragsort::{ConfigError, ReorderConfig, ReorderController};
use dragsort_core::logging::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Controller over mock parts.
pub type MockController = ReorderController<MockSurface, RecordingHost>;

/// `count` rows of `extent` px in a viewport `viewport_len` px long, with the
/// default configuration.
#[must_use]
pub fn list(count: usize, extent: f32, viewport_len: f32) -> MockController {
    ReorderController::with_default_config(
        MockSurface::uniform(count, extent, viewport_len),
        RecordingHost::new(count),
    )
}

/// Controller over `surface` with a validated `config`.
pub fn list_with(
    config: ReorderConfig,
    surface: MockSurface,
) -> Result<MockController, ConfigError> {
    let count = dragsort::Surface::item_count(&surface);
    ReorderController::new(config, surface, RecordingHost::new(count))
}

/// Route `tracing` output to the test writer. Filter with `DRAGSORT_LOG`;
/// defaults to `warn`. Safe to call from every test.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
