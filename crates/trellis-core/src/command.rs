/// A side effect returned from [`Component::update`](crate::Component::update).
///
/// The whole engine is single-threaded and synchronous — every state
/// transition runs to completion before the next event is processed — so the
/// command language is synchronous too: a command is nothing but zero or
/// more immediate messages. Components use it to emit notifications (and to
/// chain imperative messages) without the caller having to thread return
/// values around.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Emit a notification message:
/// let cmd = Command::message(Msg::Toggled(id, true));
///
/// // Emit several:
/// let cmd = Command::batch([Command::message(a), Command::message(b)]);
/// ```
pub struct Command<Msg: Send + 'static> {
    inner: CommandInner<Msg>,
}

enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// A command that does nothing.
    pub fn none() -> Self {
        Self {
            inner: CommandInner::None,
        }
    }

    /// A command that delivers one message immediately.
    pub fn message(msg: Msg) -> Self {
        Self {
            inner: CommandInner::Message(msg),
        }
    }

    /// Combine several commands; their messages are delivered in order.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        Self {
            inner: CommandInner::Batch(cmds.into_iter().collect()),
        }
    }

    /// Whether this command carries no messages at all.
    pub fn is_none(&self) -> bool {
        match &self.inner {
            CommandInner::None => true,
            CommandInner::Message(_) => false,
            CommandInner::Batch(cmds) => cmds.iter().all(Command::is_none),
        }
    }

    /// Lift this command's messages into a parent message type.
    ///
    /// Used when composing a child component into a parent: the parent wraps
    /// the child's messages in one of its own variants.
    pub fn map<N, F>(self, f: F) -> Command<N>
    where
        N: Send + 'static,
        F: Fn(Msg) -> N,
    {
        self.map_ref(&f)
    }

    fn map_ref<N, F>(self, f: &F) -> Command<N>
    where
        N: Send + 'static,
        F: Fn(Msg) -> N,
    {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(cmds.into_iter().map(|c| c.map_ref(f)).collect()),
            },
        }
    }

    /// Collapse the command into its messages, in delivery order.
    ///
    /// This is the runtime primitive: an event loop calls `update`, drains
    /// the returned command with `into_messages`, dispatches those messages,
    /// and repeats until the queue is empty.
    pub fn into_messages(self) -> Vec<Msg> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect(self, out: &mut Vec<Msg>) {
        match self.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => out.push(msg),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_messages() {
        let cmd: Command<u32> = Command::none();
        assert!(cmd.is_none());
        assert!(cmd.into_messages().is_empty());
    }

    #[test]
    fn message_yields_one() {
        let cmd = Command::message(7u32);
        assert!(!cmd.is_none());
        assert_eq!(cmd.into_messages(), vec![7]);
    }

    #[test]
    fn batch_preserves_order() {
        let cmd = Command::batch([
            Command::message(1u32),
            Command::none(),
            Command::batch([Command::message(2), Command::message(3)]),
        ]);
        assert_eq!(cmd.into_messages(), vec![1, 2, 3]);
    }

    #[test]
    fn batch_of_nones_is_none() {
        let cmd: Command<u32> = Command::batch([Command::none(), Command::none()]);
        assert!(cmd.is_none());
    }

    #[test]
    fn map_lifts_nested_messages() {
        let cmd = Command::batch([Command::message(1u32), Command::message(2)]);
        let mapped = cmd.map(|n| format!("n={n}"));
        assert_eq!(mapped.into_messages(), vec!["n=1", "n=2"]);
    }
}
