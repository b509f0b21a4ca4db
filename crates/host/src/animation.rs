/// Identifies one scheduled frame callback (a `requestAnimationFrame` id in
/// the browser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Host mechanism that runs a callback on the next display frame.
///
/// Implementations must never deliver a handle after `cancel_frame` has been
/// called with it.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, String>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Running always carries the handle of the single pending callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Paused,
    Running(FrameHandle),
}

/// Play/pause state machine for the self-rescheduling frame loop.
pub struct AnimationController<S: FrameScheduler> {
    scheduler: S,
    state: AnimationState,
}

impl<S: FrameScheduler> AnimationController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: AnimationState::Paused,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == AnimationState::Paused
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Schedule the first frame. No-op while already running.
    pub fn play(&mut self) -> Result<(), String> {
        if let AnimationState::Running(_) = self.state {
            return Ok(());
        }
        let handle = self.scheduler.request_frame()?;
        self.state = AnimationState::Running(handle);
        Ok(())
    }

    /// Cancel the pending frame. No-op while already paused.
    pub fn pause(&mut self) {
        if let AnimationState::Running(handle) = self.state {
            self.scheduler.cancel_frame(handle);
            self.state = AnimationState::Paused;
        }
    }

    pub fn toggle(&mut self) -> Result<(), String> {
        if self.is_paused() {
            self.play()
        } else {
            self.pause();
            Ok(())
        }
    }

    /// Whether a fired callback should run its frame body: only the pending
    /// handle of a running loop qualifies.
    pub fn begin_frame(&self, handle: FrameHandle) -> bool {
        self.state == AnimationState::Running(handle)
    }

    /// Chain the successor frame. If scheduling fails the loop stops and the
    /// controller falls back to `Paused`.
    pub fn end_frame(&mut self) -> Result<(), String> {
        if self.is_paused() {
            return Ok(());
        }
        match self.scheduler.request_frame() {
            Ok(handle) => {
                self.state = AnimationState::Running(handle);
                Ok(())
            }
            Err(e) => {
                self.state = AnimationState::Paused;
                Err(e)
            }
        }
    }
}
