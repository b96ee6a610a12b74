//! The dispatcher-facing behavior contract.

/// Tells the dispatcher whether a key event was fully handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumption {
    /// The event is consumed; no further binding on the same key position runs.
    Opaque,
    /// The event passes through to any further bindings on the same position.
    Transparent,
}

/// A keymap binding that refers to a behavior by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorBinding {
    /// Name of the behavior instance this binding invokes.
    pub behavior_dev: &'static str,
    /// First binding parameter.
    pub param1: u32,
    /// Second binding parameter.
    pub param2: u32,
}

impl BehaviorBinding {
    /// Creates a binding to `behavior_dev` with both parameters zeroed.
    pub const fn new(behavior_dev: &'static str) -> Self {
        Self {
            behavior_dev,
            param1: 0,
            param2: 0,
        }
    }

    /// Sets the binding parameters.
    pub const fn with_params(mut self, param1: u32, param2: u32) -> Self {
        self.param1 = param1;
        self.param2 = param2;
        self
    }
}

/// Where and when a binding was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindingEvent {
    /// Active keymap layer.
    pub layer: u8,
    /// Key position in the matrix.
    pub position: u32,
    /// Event time in milliseconds since boot.
    pub timestamp: i64,
}

impl BindingEvent {
    pub const fn new(layer: u8, position: u32, timestamp: i64) -> Self {
        Self {
            layer,
            position,
            timestamp,
        }
    }
}

/// A keymap behavior, invoked synchronously by the dispatcher.
///
/// Both callbacks are infallible from the dispatcher's point of view. An
/// implementation that hits a hardware error while handling an event logs it
/// and still returns its usual [`Consumption`].
pub trait Behavior {
    /// Called when a key bound to this behavior is pressed.
    fn on_pressed(&mut self, binding: &BehaviorBinding, event: BindingEvent) -> Consumption;

    /// Called when a key bound to this behavior is released.
    fn on_released(&mut self, binding: &BehaviorBinding, event: BindingEvent) -> Consumption;
}
