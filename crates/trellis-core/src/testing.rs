use crate::command::Command;
use crate::component::Component;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Component`] without a real
/// terminal.
///
/// `TestComponent` exercises the update/view cycle in a plain `#[test]`
/// function — no TTY required. Messages emitted by `update` are collected in
/// a pending queue: flush them back into the component with
/// [`drain_messages`](TestComponent::drain_messages), or pull them out for
/// assertions with [`take_messages`](TestComponent::take_messages).
///
/// # Example
///
/// ```rust,ignore
/// use trellis_core::testing::TestComponent;
///
/// let mut harness = TestComponent::new(TreeView::new(nodes));
/// harness.component_mut().focus();
/// harness.send(Message::Activate("docs".into()));
/// harness.drain_messages();
/// assert!(harness.component().state().is_expanded("docs"));
///
/// let output = harness.render_string(40, 5);
/// assert!(output.contains("Documents"));
/// ```
pub struct TestComponent<C: Component> {
    component: C,
    pending: Vec<C::Message>,
}

impl<C: Component> TestComponent<C> {
    /// Wrap a component for headless testing.
    pub fn new(component: C) -> Self {
        Self {
            component,
            pending: Vec::new(),
        }
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Messages produced by the update are enqueued, not dispatched; call
    /// [`drain_messages`](TestComponent::drain_messages) to flush them.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.pending.extend(cmd.into_messages());
    }

    /// Dispatch all pending messages back into the component.
    ///
    /// Repeats until no new messages are generated, which covers chaining
    /// scenarios where one update emits a message that triggers another.
    pub fn drain_messages(&mut self) {
        while !self.pending.is_empty() {
            let messages: Vec<_> = self.pending.drain(..).collect();
            for msg in messages {
                let cmd = self.component.update(msg);
                self.pending.extend(cmd.into_messages());
            }
        }
    }

    /// Remove and return the pending messages without dispatching them.
    ///
    /// Useful for asserting on the notifications a component emitted.
    pub fn take_messages(&mut self) -> Vec<C::Message> {
        self.pending.drain(..).collect()
    }

    /// Get a shared reference to the component for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component for direct test setup.
    ///
    /// This bypasses the message-driven update cycle, which is handy for
    /// arranging state (e.g. focusing) before sending messages.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                self.component.view(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the component and return the visible content as a string.
    ///
    /// Each row of the buffer is concatenated into a line; rows are
    /// separated by newlines. Trailing whitespace within a row is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }
}
