//! 模拟的异步 Wi-Fi 扫描状态机。
//!
//! The real device starts a radio scan and answers polls until the hardware
//! reports completion. The fake reproduces that protocol with a fixed
//! duration: `start()` arms the scan, `poll()` either rejects, reports
//! not-ready, or consumes the result and goes back to idle.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Minimum time between `start()` and a successful `poll()`.
pub const SCAN_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Running { started_at: Instant },
}

/// Rejections of the start/poll protocol. The display text is what the
/// device puts in the `scan` field of its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("already running")]
    Conflict,

    #[error("not started")]
    NotStarted,

    #[error("not ready")]
    NotReady,
}

/// Single-flight scan controller. Every transition happens under one lock.
#[derive(Debug)]
pub struct ScanController {
    state: Mutex<ScanState>,
}

impl Default for ScanController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanController {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ScanState::Idle),
        }
    }

    /// Arms a new scan. Fails with [`ScanError::Conflict`] while one is outstanding,
    /// in which case the running scan keeps its original start time.
    pub fn start(&self) -> Result<(), ScanError> {
        let mut state = self.lock();
        match *state {
            ScanState::Idle => {
                *state = ScanState::Running {
                    started_at: Instant::now(),
                };
                tracing::info!("📡 Wi-Fi scan started");
                Ok(())
            }
            ScanState::Running { started_at } => {
                tracing::debug!(
                    elapsed_ms = started_at.elapsed().as_millis() as u64,
                    "Scan start rejected: already running"
                );
                Err(ScanError::Conflict)
            }
        }
    }

    /// Checks the outstanding scan.
    ///
    /// On success the controller is back to [`ScanState::Idle`] and the
    /// elapsed scan time is returned; the caller owns the result from here,
    /// nothing is kept for a second poll.
    pub fn poll(&self) -> Result<Duration, ScanError> {
        let mut state = self.lock();
        let elapsed = verdict(*state)?;

        *state = ScanState::Idle;
        tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "✅ Wi-Fi scan consumed");
        Ok(elapsed)
    }

    /// Same verdict as [`poll`](Self::poll) but leaves the scan in place.
    pub fn check_ready(&self) -> Result<Duration, ScanError> {
        verdict(*self.lock())
    }

    pub fn state(&self) -> ScanState {
        *self.lock()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state(), ScanState::Running { .. })
    }

    // 每个临界区结束时状态都是完整的，锁中毒可以直接恢复
    fn lock(&self) -> MutexGuard<'_, ScanState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// 按优先级判定：未开始 > 未就绪 > 就绪
fn verdict(state: ScanState) -> Result<Duration, ScanError> {
    let started_at = match state {
        ScanState::Idle => return Err(ScanError::NotStarted),
        ScanState::Running { started_at } => started_at,
    };

    let elapsed = Instant::now().saturating_duration_since(started_at);
    if elapsed < SCAN_DURATION {
        tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "Scan polled early");
        return Err(ScanError::NotReady);
    }
    Ok(elapsed)
}
