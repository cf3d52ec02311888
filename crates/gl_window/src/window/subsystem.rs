//! Shared video subsystem handle
//!
//! The windowing library's video subsystem is process-wide. Instead of every
//! window probing and toggling it on its own, windows share one
//! [`VideoSubsystem`] and take a [`VideoLease`] while they need it. The first
//! lease brings the subsystem up and dropping the last one shuts it down.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use super::backend::Platform;
use super::error::{WindowError, WindowResult};

struct Shared<P: Platform> {
    platform: RefCell<P>,
    leases: Cell<usize>,
}

/// Reference-counted handle to the platform's video subsystem
///
/// Cloning is cheap and yields a handle to the same subsystem. The handle is
/// `!Send`; all windows sharing it live on one thread.
pub struct VideoSubsystem<P: Platform> {
    shared: Rc<Shared<P>>,
}

impl<P: Platform> VideoSubsystem<P> {
    /// Wrap a platform. Nothing is initialized until the first lease.
    pub fn new(platform: P) -> Self {
        Self {
            shared: Rc::new(Shared {
                platform: RefCell::new(platform),
                leases: Cell::new(0),
            }),
        }
    }

    /// Claim the subsystem, initializing it if it is not already active
    pub fn acquire(&self) -> WindowResult<VideoLease<P>> {
        {
            let mut platform = self.shared.platform.borrow_mut();
            if !platform.is_video_active() {
                if let Err(e) = platform.init_video() {
                    log::error!("Unable to initialize video subsystem. {e}");
                    return Err(WindowError::SubsystemInit(e));
                }
                log::debug!("Video subsystem initialized");
            }
        }

        self.shared.leases.set(self.shared.leases.get() + 1);
        Ok(VideoLease {
            shared: Rc::clone(&self.shared),
        })
    }

    /// Whether the platform reports the subsystem as running
    pub fn is_active(&self) -> bool {
        self.shared.platform.borrow().is_video_active()
    }

    /// Number of outstanding leases
    pub fn lease_count(&self) -> usize {
        self.shared.leases.get()
    }

    /// Shared access to the platform
    pub fn platform(&self) -> Ref<'_, P> {
        self.shared.platform.borrow()
    }

    pub(crate) fn platform_mut(&self) -> RefMut<'_, P> {
        self.shared.platform.borrow_mut()
    }
}

impl<P: Platform> Clone for VideoSubsystem<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

/// A window's claim on the video subsystem
///
/// Dropping the last lease quits the subsystem if it is still active.
pub struct VideoLease<P: Platform> {
    shared: Rc<Shared<P>>,
}

impl<P: Platform> Drop for VideoLease<P> {
    fn drop(&mut self) {
        let remaining = self.shared.leases.get().saturating_sub(1);
        self.shared.leases.set(remaining);

        if remaining == 0 {
            let mut platform = self.shared.platform.borrow_mut();
            if platform.is_video_active() {
                platform.quit_video();
                log::debug!("Video subsystem shut down");
            }
        }
    }
}
