use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that renders into a given [`Rect`] area.
///
/// State changes flow through [`update`](Component::update) as messages; the
/// returned [`Command`] carries any follow-up or notification messages. A
/// parent decides *where* a component renders by passing a sub-region of the
/// frame to [`view`](Component::view).
///
/// # Composition pattern
///
/// To embed one component inside another, wrap the child's message type in a
/// variant of the parent message and use [`Command::map`] to translate
/// commands:
///
/// ```rust,ignore
/// use trellis_core::{Command, Component};
/// use ratatui::layout::Rect;
/// use ratatui::Frame;
///
/// struct App { tree: TreeView }
///
/// enum AppMsg { Tree(tree::Message) }
///
/// impl Component for App {
///     type Message = AppMsg;
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Tree(m) => self.tree.update(m).map(AppMsg::Tree),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame, area: Rect) {
///         self.tree.view(frame, area);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parents typically wrap this in one of their own message variants so
    /// that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return follow-up messages.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A hint for input routing: a parent can query `focused()` to decide
    /// which child should receive keyboard events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
