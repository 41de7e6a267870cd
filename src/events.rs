/// Discrete events the host feeds into [`crate::Behaviors::dispatch`].
///
/// Frame ticks are not events; they go through [`crate::Behaviors::tick`]
/// together with the current clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A click anywhere on the page. `target` is the innermost element hit;
    /// controllers decide relevance by containment, like bubbling listeners.
    Click { target: String },
    /// Pointer entered an element.
    MouseEnter { target: String },
    /// An input element lost focus.
    Blur { target: String },
    /// A form was submitted. Default submission is always suppressed;
    /// validation runs instead.
    Submit { target: String },
    /// The viewport scroll offset changed. The new offset is read from the
    /// page, not carried in the event.
    Scroll,
}
