/// Skips redundant redraws while nothing is moving.
///
/// During a run the mover changes every tick, so every frame is drawn. In
/// setup or after the run ends the frame is static: it is redrawn as soon as
/// its fingerprint changes, otherwise at most once per `idle_interval_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.idle_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Force the next call to render.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
