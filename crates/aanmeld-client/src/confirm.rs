use std::time::Duration;

use tracing::info;

/// Where a confirmed registration sends the visitor.
pub const REDIRECT_URL: &str = "https://samenwerktwijkbijduurstede.nl";

const TICK: Duration = Duration::from_secs(1);

/// Navigation capability injected into the confirmation, so tests (and the
/// CLI) decide what "going to the website" means.
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Pure countdown state: a fixed number of one-second ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    total: u32,
}

impl Countdown {
    pub fn new(ticks: u32) -> Self {
        Self {
            remaining: ticks,
            total: ticks,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Fraction elapsed, for progress displays.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        f64::from(self.total - self.remaining) / f64::from(self.total)
    }

    /// One tick down; returns the seconds left afterwards.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

/// Post-submit confirmation: counts five seconds down and then redirects.
/// Manual dismissal redirects immediately.
pub struct Confirmation<N: Navigator> {
    countdown: Countdown,
    navigator: N,
    url: String,
}

impl<N: Navigator> Confirmation<N> {
    pub fn new(navigator: N) -> Self {
        Self::with_url(navigator, REDIRECT_URL)
    }

    pub fn with_url(navigator: N, url: impl Into<String>) -> Self {
        Self {
            countdown: Countdown::new(5),
            navigator,
            url: url.into(),
        }
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Advances one tick; navigates when the countdown reaches zero. Returns
    /// the seconds left so a display can narrate them.
    pub fn tick(&mut self) -> u32 {
        if self.countdown.is_done() {
            return 0;
        }
        let remaining = self.countdown.tick();
        if remaining == 0 {
            self.redirect();
        }
        remaining
    }

    /// Early dismissal: skip the rest of the countdown and go now.
    pub fn dismiss(self) {
        self.redirect();
    }

    fn redirect(&self) {
        info!(url = %self.url, "redirecting after confirmation");
        self.navigator.navigate(&self.url);
    }

    /// Timer-driven variant for async callers; one real second per tick.
    pub async fn run<F: FnMut(u32)>(mut self, mut on_tick: F) {
        while !self.countdown.is_done() {
            tokio::time::sleep(TICK).await;
            let remaining = self.tick();
            on_tick(remaining);
        }
    }
}
