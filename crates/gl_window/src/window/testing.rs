//! Recording fakes for the windowing library and function loader

use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;

use super::backend::{ContextHints, DisplayMode, Platform, PlatformResult, SwapInterval};
use super::loader::{DriverInfo, FunctionLoader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    InitVideo,
    QuitVideo,
    ContextHints(ContextHints),
    CreateSurface { title: String, width: u32, height: u32 },
    CreateContext(u32),
    DestroyContext(u32),
    DestroySurface(u32),
    DisplayMode(u32, DisplayMode),
    SwapInterval(u32, SwapInterval),
    SwapBuffers(u32),
    PollEvents(u32),
    SetShouldClose(u32, bool),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<Call>,
    video_active: bool,
    next_id: u32,
    fail_init_video: Option<String>,
    fail_create_surface: Option<String>,
    fail_create_context: Option<String>,
    fail_display_mode: Option<String>,
    fail_swap_interval: Option<String>,
    close_requested: bool,
    current_context: Option<u32>,
    pending_events: Vec<&'static str>,
}

impl FakeState {
    fn outcome(&mut self, call: Call, failure: Option<String>) -> PlatformResult<()> {
        self.calls.push(call);
        failure.map_or(Ok(()), Err)
    }
}

/// Platform double that records every call
pub(crate) struct FakePlatform {
    state: Rc<RefCell<FakeState>>,
}

/// Test-side view of a [`FakePlatform`] that outlives the window under test
#[derive(Clone)]
pub(crate) struct FakeProbe {
    state: Rc<RefCell<FakeState>>,
}

pub(crate) struct FakeSurface {
    pub id: u32,
}

pub(crate) struct FakeContext {
    pub surface_id: u32,
}

impl FakePlatform {
    pub fn new() -> (Self, FakeProbe) {
        let state = Rc::new(RefCell::new(FakeState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            FakeProbe { state },
        )
    }
}

impl FakeProbe {
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.state.borrow().calls.iter().filter(|c| *c == call).count()
    }

    pub fn count_matching(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    pub fn set_video_active(&self, active: bool) {
        self.state.borrow_mut().video_active = active;
    }

    pub fn video_active(&self) -> bool {
        self.state.borrow().video_active
    }

    pub fn request_close(&self) {
        self.state.borrow_mut().close_requested = true;
    }

    /// Surface id whose context is current on the thread
    pub fn current_context(&self) -> Option<u32> {
        self.state.borrow().current_context
    }

    pub fn push_event(&self, event: &'static str) {
        self.state.borrow_mut().pending_events.push(event);
    }

    pub fn fail_init_video(&self, message: &str) {
        self.state.borrow_mut().fail_init_video = Some(message.to_string());
    }

    pub fn fail_create_surface(&self, message: &str) {
        self.state.borrow_mut().fail_create_surface = Some(message.to_string());
    }

    pub fn fail_create_context(&self, message: &str) {
        self.state.borrow_mut().fail_create_context = Some(message.to_string());
    }

    pub fn fail_display_mode(&self, message: &str) {
        self.state.borrow_mut().fail_display_mode = Some(message.to_string());
    }

    pub fn fail_swap_interval(&self, message: &str) {
        self.state.borrow_mut().fail_swap_interval = Some(message.to_string());
    }
}

impl Platform for FakePlatform {
    type Surface = FakeSurface;
    type Context = FakeContext;
    type Event = &'static str;

    fn init_video(&mut self) -> PlatformResult<()> {
        let mut state = self.state.borrow_mut();
        let failure = state.fail_init_video.clone();
        state.video_active = failure.is_none();
        state.outcome(Call::InitVideo, failure)
    }

    fn is_video_active(&self) -> bool {
        self.state.borrow().video_active
    }

    fn quit_video(&mut self) {
        let mut state = self.state.borrow_mut();
        state.video_active = false;
        state.calls.push(Call::QuitVideo);
    }

    fn set_context_hints(&mut self, hints: ContextHints) {
        self.state.borrow_mut().calls.push(Call::ContextHints(hints));
    }

    fn create_surface(&mut self, title: &str, width: u32, height: u32) -> PlatformResult<FakeSurface> {
        let mut state = self.state.borrow_mut();
        let failure = state.fail_create_surface.clone();
        let call = Call::CreateSurface {
            title: title.to_string(),
            width,
            height,
        };
        state.outcome(call, failure)?;
        state.next_id += 1;
        Ok(FakeSurface { id: state.next_id })
    }

    fn create_context(&mut self, surface: &mut FakeSurface) -> PlatformResult<FakeContext> {
        let mut state = self.state.borrow_mut();
        let failure = state.fail_create_context.clone();
        state.outcome(Call::CreateContext(surface.id), failure)?;
        state.current_context = Some(surface.id);
        Ok(FakeContext { surface_id: surface.id })
    }

    fn destroy_context(&mut self, surface: &mut FakeSurface, context: FakeContext) {
        let mut state = self.state.borrow_mut();
        if state.current_context == Some(surface.id) {
            state.current_context = None;
        }
        state.calls.push(Call::DestroyContext(context.surface_id));
    }

    fn destroy_surface(&mut self, surface: FakeSurface) {
        self.state.borrow_mut().calls.push(Call::DestroySurface(surface.id));
    }

    fn set_display_mode(&mut self, surface: &mut FakeSurface, mode: DisplayMode) -> PlatformResult<()> {
        let mut state = self.state.borrow_mut();
        let failure = state.fail_display_mode.clone();
        state.outcome(Call::DisplayMode(surface.id, mode), failure)
    }

    fn set_swap_interval(&mut self, surface: &mut FakeSurface, interval: SwapInterval) -> PlatformResult<()> {
        let mut state = self.state.borrow_mut();
        let failure = state.fail_swap_interval.clone();
        state.current_context = Some(surface.id);
        state.outcome(Call::SwapInterval(surface.id, interval), failure)
    }

    fn swap_buffers(&mut self, surface: &mut FakeSurface) {
        self.state.borrow_mut().calls.push(Call::SwapBuffers(surface.id));
    }

    fn proc_address(&mut self, _surface: &mut FakeSurface, _name: &str) -> *const c_void {
        std::ptr::null()
    }

    fn poll_events(&mut self, surface: &mut FakeSurface) -> Vec<&'static str> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::PollEvents(surface.id));
        std::mem::take(&mut state.pending_events)
    }

    fn should_close(&self, _surface: &FakeSurface) -> bool {
        self.state.borrow().close_requested
    }

    fn set_should_close(&mut self, surface: &mut FakeSurface, should_close: bool) {
        let mut state = self.state.borrow_mut();
        state.close_requested = should_close;
        state.calls.push(Call::SetShouldClose(surface.id, should_close));
    }
}

/// Loader double; resolves a fixed symbol list and reports fixed driver strings
#[derive(Default)]
pub(crate) struct FakeLoader {
    pub failure: Option<String>,
    pub resolved: Vec<String>,
}

impl FakeLoader {
    pub const SYMBOLS: [&'static str; 2] = ["glGetString", "glViewport"];

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            resolved: Vec::new(),
        }
    }
}

impl FunctionLoader for FakeLoader {
    fn load(&mut self, resolve: &mut dyn FnMut(&str) -> *const c_void) -> Result<(), String> {
        for symbol in Self::SYMBOLS {
            resolve(symbol);
            self.resolved.push(symbol.to_string());
        }
        self.failure.clone().map_or(Ok(()), Err)
    }

    fn driver_info(&self) -> DriverInfo {
        DriverInfo {
            renderer: "Fake Renderer".to_string(),
            version: "3.3.0 Core".to_string(),
            shading_language: "3.30".to_string(),
        }
    }
}
