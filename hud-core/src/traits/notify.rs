//! Update notification
//!
//! The renderer signals its host when battery/heater state changes so the
//! parent layout can be refreshed. There is no payload: the host re-reads
//! whatever it needs.

/// Receiver of "something changed" notifications
pub trait UpdateNotifier {
    /// Request a layout refresh / redraw
    fn notify(&mut self);
}

/// Ignore notifications
impl UpdateNotifier for () {
    fn notify(&mut self) {}
}

impl<F: FnMut()> UpdateNotifier for F {
    fn notify(&mut self) {
        self()
    }
}

/// Wake a task waiting on a screen-update signal
#[cfg(feature = "embassy")]
impl<M> UpdateNotifier for &embassy_sync::signal::Signal<M, ()>
where
    M: embassy_sync::blocking_mutex::raw::RawMutex,
{
    fn notify(&mut self) {
        self.signal(());
    }
}
