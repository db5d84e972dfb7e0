//! Source of the server's current listening port.

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

/// Supplies the port substituted when a URL carries no explicit port.
///
/// The parser deliberately uses the server's own listen port here rather than
/// a protocol default such as 80 or 443.
pub trait PortSource {
    fn listen_port(&self) -> u16;
}

impl PortSource for u16 {
    fn listen_port(&self) -> u16 {
        *self
    }
}

/// A port that is set once the listener is bound and read by every parse.
impl PortSource for AtomicU16 {
    fn listen_port(&self) -> u16 {
        self.load(Ordering::Relaxed)
    }
}

impl<T: PortSource + ?Sized> PortSource for &T {
    fn listen_port(&self) -> u16 {
        (**self).listen_port()
    }
}

impl<T: PortSource + ?Sized> PortSource for Arc<T> {
    fn listen_port(&self) -> u16 {
        (**self).listen_port()
    }
}
