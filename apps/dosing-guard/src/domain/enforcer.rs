//! Limit enforcement: per-band accessors and clamp-and-audit.
//!
//! `LimitEnforcer` is the only gate between the dosing algorithm and the
//! values it is allowed to act on. Accessors expose the active band's
//! bound for each clinical parameter; `clamp_and_audit` forces arbitrary
//! caller-supplied values into their windows and leaves an audit trail
//! whenever it had to change one.
//!
//! Ordering guarantee within one clamp: the error log line is written
//! first (synchronous, primary record), then the audit write is
//! dispatched fire-and-forget, then the user alert fires. The clamp
//! return value never waits on the audit store.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::application::ports::{
    AlertSeverity, AlertSink, AuditStore, LabelKey, LabelResolver, SettingsStore,
};

use super::events::ClampEvent;
use super::limits;
use super::profile::ProfileResolver;

/// Clamp `value` into `[low, high]`, floor first, ceiling second.
///
/// The order decides which bound wins if the window is ever inverted:
/// `max` then `min` means the ceiling does. Callers normalize the window
/// before reaching this, so with a well-formed window the order is
/// immaterial.
#[allow(clippy::manual_clamp)] // f64::clamp panics on an inverted window
fn clamp_to_window(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

/// Normalize a caller-supplied bound window.
///
/// `low > high` is a caller contract violation: asserted in development
/// builds; in release the bounds are swapped and the defect logged loudly
/// so clamping still lands inside `[min(low, high), max(low, high)]`.
fn normalize_window(parameter: &str, low: f64, high: f64) -> (f64, f64) {
    if low > high {
        debug_assert!(
            false,
            "inverted limit window for {parameter}: [{low}, {high}]"
        );
        tracing::error!(parameter, low, high, "inverted limit window, swapping bounds");
        (high, low)
    } else {
        (low, high)
    }
}

/// Enforces the safety envelope around every dosing parameter.
///
/// Accessors re-resolve the risk band on every call; nothing is cached,
/// so a profile change is reflected by the very next query. The audit
/// side effect inside [`clamp_and_audit`](Self::clamp_and_audit) is the
/// only asynchronous operation: it is spawned onto the current Tokio
/// runtime and tracked so [`shutdown`](Self::shutdown) can dispose all
/// in-flight writes at teardown.
pub struct LimitEnforcer {
    resolver: ProfileResolver,
    labels: Arc<dyn LabelResolver>,
    audit: Arc<dyn AuditStore>,
    alerts: Arc<dyn AlertSink>,
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl LimitEnforcer {
    /// Create an enforcer wired to its four collaborators.
    ///
    /// `setting_key` is the preference key holding the risk-band setting,
    /// normally [`super::profile::SETTING_PATIENT_PROFILE`].
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        labels: Arc<dyn LabelResolver>,
        audit: Arc<dyn AuditStore>,
        alerts: Arc<dyn AlertSink>,
        setting_key: impl Into<String>,
    ) -> Self {
        Self {
            resolver: ProfileResolver::new(settings, labels.clone(), setting_key),
            labels,
            audit,
            alerts,
            tracker: TaskTracker::new(),
            cancel: CancellationToken::new(),
        }
    }

    // ------------------------------------------------------------------
    // Per-parameter accessors. All pure, total, side-effect free; each
    // one re-indexes its table by a fresh band resolution.
    // ------------------------------------------------------------------

    /// Maximum single bolus for the active band, in insulin units.
    pub fn max_bolus(&self) -> f64 {
        limits::MAX_BOLUS.get(self.resolver.resolve())
    }

    /// Maximum IOB under the legacy algorithm for the active band.
    pub fn max_iob_legacy(&self) -> f64 {
        limits::MAX_IOB_LEGACY.get(self.resolver.resolve())
    }

    /// Maximum IOB under the supermicrobolus algorithm for the active band.
    pub fn max_iob_smb(&self) -> f64 {
        limits::MAX_IOB_SMB.get(self.resolver.resolve())
    }

    /// Maximum basal rate for the active band, in units per hour.
    pub fn max_basal(&self) -> f64 {
        limits::MAX_BASAL.get(self.resolver.resolve())
    }

    /// Minimum insulin action duration for the active band, in hours.
    pub fn min_dia(&self) -> f64 {
        limits::MIN_DIA.get(self.resolver.resolve())
    }

    /// Maximum insulin action duration for the active band, in hours.
    pub fn max_dia(&self) -> f64 {
        limits::MAX_DIA.get(self.resolver.resolve())
    }

    /// Minimum insulin-to-carb ratio for the active band.
    pub fn min_ic(&self) -> f64 {
        limits::MIN_IC.get(self.resolver.resolve())
    }

    /// Maximum insulin-to-carb ratio for the active band.
    pub fn max_ic(&self) -> f64 {
        limits::MAX_IC.get(self.resolver.resolve())
    }

    /// Minimum insulin sensitivity factor, band-independent, mg/dL.
    pub const fn min_isf(&self) -> f64 {
        limits::MIN_ISF
    }

    /// Maximum insulin sensitivity factor, band-independent, mg/dL.
    pub const fn max_isf(&self) -> f64 {
        limits::MAX_ISF
    }

    /// IOB ceiling under the zero-IOB policy: no insulin on board at all.
    pub const fn max_iob_zero_policy(&self) -> f64 {
        limits::MAX_IOB_ZERO_POLICY
    }

    // ------------------------------------------------------------------
    // Verification and clamping
    // ------------------------------------------------------------------

    /// True iff `low <= value <= high`, inclusive both ends.
    pub fn is_within_range(&self, value: f64, low: f64, high: f64) -> bool {
        low <= value && value <= high
    }

    /// Clamp `value` into `[low, high]`, auditing when it had to change.
    ///
    /// In-range values are returned untouched with zero side effects.
    /// Out-of-range values are clamped and exactly one [`ClampEvent`] is
    /// emitted: an error log line, a fire-and-forget audit record, and a
    /// user alert, in that order. The returned value is always inside the
    /// (normalized) window; this function never fails.
    ///
    /// Must be called from within a Tokio runtime: the audit write is
    /// spawned onto it.
    pub fn clamp_and_audit(&self, value: f64, parameter: &str, low: f64, high: f64) -> f64 {
        let (low, high) = normalize_window(parameter, low, high);
        if self.is_within_range(value, low, high) {
            return value;
        }

        let clamped = clamp_to_window(value, low, high);
        let message = self.build_message(parameter, value, clamped);
        self.emit(ClampEvent::new(parameter, value, clamped, message));
        clamped
    }

    /// True iff `value` required no clamping.
    ///
    /// Equal to `clamp_and_audit(value, ..) == value`. The clamp side
    /// effects still fire on violation even though only the boolean is
    /// returned; the audit is authoritative either way.
    pub fn check_hard_limits(&self, value: f64, parameter: &str, low: f64, high: f64) -> bool {
        self.clamp_and_audit(value, parameter, low, high) == value
    }

    /// Dispose all in-flight audit writes and wait for the tracker to
    /// drain.
    ///
    /// An in-flight write may be dropped; the synchronous log line is the
    /// primary record and the audit store is a best-effort trail.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        self.tracker.close();
        self.tracker.wait().await;
    }

    fn build_message(&self, parameter: &str, original: f64, clamped: f64) -> String {
        let mut msg = self.labels.format(LabelKey::ValueOutOfRange, &[parameter]);
        msg.push_str(".\n");
        msg.push_str(&self.labels.format(
            LabelKey::ValueLimitedTo,
            &[&original.to_string(), &clamped.to_string()],
        ));
        msg
    }

    fn emit(&self, event: ClampEvent) {
        // Log first: synchronous and not cancellable.
        tracing::error!(
            parameter = %event.parameter,
            original = event.original,
            clamped = event.clamped,
            "{}",
            event.message
        );
        self.dispatch_audit(event.message.clone());
        self.alerts.notify(&event.message, AlertSeverity::Error);
    }

    /// Dispatch one audit write, fire-and-forget.
    ///
    /// The task is raced against the shutdown token so teardown can
    /// dispose pending writes en masse. A failed write is logged at warn
    /// and swallowed.
    fn dispatch_audit(&self, message: String) {
        let audit = Arc::clone(&self.audit);
        let cancel = self.cancel.clone();
        self.tracker.spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::debug!("audit write cancelled during shutdown");
                }
                res = audit.record_announcement(&message) => {
                    if let Err(e) = res {
                        tracing::warn!(error = %e, "audit write failed");
                    }
                }
            }
        });
    }
}
