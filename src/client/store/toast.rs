/// Transient notification state, provided at the app root. One message at a
/// time; showing a new one resets the dismissal countdown.
#[derive(Clone, Default)]
pub struct ToastState {
    pub message: Option<String>,
    pub ticks_left: u32,
}

/// Seconds a toast stays visible.
const TOAST_TICKS: u32 = 5;

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.ticks_left = TOAST_TICKS;
    }

    pub fn dismiss(&mut self) {
        self.message = None;
        self.ticks_left = 0;
    }

    /// One countdown step; clears the message when the countdown runs out.
    pub fn tick(&mut self) {
        if self.message.is_none() {
            return;
        }

        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left == 0 {
            self.message = None;
        }
    }
}
