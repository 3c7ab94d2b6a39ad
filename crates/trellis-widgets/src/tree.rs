//! Expandable tree view component with per-node activation, a secondary
//! action channel, icon resolution, and keyboard navigation over the
//! flattened rows.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use trellis_core::command::Command;
use trellis_core::component::Component;
use trellis_core::{Activation, Node, TreeState};

use crate::key::{Binding, KeyCombination, KeyMap};
use crate::runeutil;

/// Messages for the tree view component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the tree for handling.
    KeyPress(KeyEvent),
    /// Activate the node with the given id: toggles a branch, clicks a leaf.
    Activate(String),
    /// Trigger the secondary action for the node with the given id.
    Action(String),
    /// Collapse every branch.
    CollapseAll,
    /// Notification: the branch with the given id was toggled
    /// (`true` = now expanded).
    Toggled(String, bool),
    /// Notification: the leaf with the given id was clicked.
    Clicked(String),
    /// Notification: the secondary action fired for the given id.
    ActionFired(String),
}

/// Configurable key bindings for the tree view.
///
/// Each field is a [`Binding`](crate::key::Binding) mapping one or more key
/// combinations to an action; the defaults match vim-style navigation.
pub struct TreeKeyBindings {
    /// Move the cursor up one visible row. Default: Up, k
    pub up: Binding,
    /// Move the cursor down one visible row. Default: Down, j
    pub down: Binding,
    /// Move to the first row. Default: Home
    pub first: Binding,
    /// Move to the last row. Default: End, G
    pub last: Binding,
    /// Activate the node under the cursor. Default: Enter, Space
    pub activate: Binding,
    /// Collapse the branch under the cursor. Default: Left, h
    pub collapse: Binding,
    /// Expand the branch under the cursor. Default: Right, l
    pub expand: Binding,
    /// Secondary action for the node under the cursor. Default: a
    pub action: Binding,
    /// Collapse every branch. Default: c
    pub collapse_all: Binding,
}

impl Default for TreeKeyBindings {
    fn default() -> Self {
        Self {
            up: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Up),
                    KeyCombination::new(KeyCode::Char('k')),
                ],
                "Up",
            ),
            down: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Down),
                    KeyCombination::new(KeyCode::Char('j')),
                ],
                "Down",
            ),
            first: Binding::new(KeyCombination::new(KeyCode::Home), "First"),
            last: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::End),
                    KeyCombination::new(KeyCode::Char('G')),
                    KeyCombination::shift(KeyCode::Char('G')),
                ],
                "Last",
            ),
            activate: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Enter),
                    KeyCombination::new(KeyCode::Char(' ')),
                ],
                "Toggle / open",
            ),
            collapse: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Left),
                    KeyCombination::new(KeyCode::Char('h')),
                ],
                "Collapse",
            ),
            expand: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Right),
                    KeyCombination::new(KeyCode::Char('l')),
                ],
                "Expand",
            ),
            action: Binding::new(KeyCombination::new(KeyCode::Char('a')), "Actions"),
            collapse_all: Binding::new(KeyCombination::new(KeyCode::Char('c')), "Collapse all"),
        }
    }
}

impl KeyMap for TreeKeyBindings {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.up, &self.down, &self.activate, &self.action]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.up, &self.down, &self.first, &self.last],
            vec![&self.activate, &self.collapse, &self.expand],
            vec![&self.action, &self.collapse_all],
        ]
    }
}

/// Resolves a purely advisory icon glyph for a node.
///
/// Receives the node and whether it is currently expanded; returning `None`
/// renders no icon. The engine never inspects the result — it flows straight
/// into the row line.
pub type IconResolver = Box<dyn Fn(&Node, bool) -> Option<String> + Send>;

/// Style configuration for the tree view.
#[derive(Debug, Clone)]
pub struct TreeStyle {
    /// Style applied to branch labels.
    pub branch: Style,
    /// Style applied to leaf labels.
    pub leaf: Style,
    /// Style applied to the label on the cursor row.
    pub selected: Style,
    /// Glyph rendered before an expanded branch (e.g. "▾ ").
    pub expander_expanded: String,
    /// Glyph rendered before a collapsed branch (e.g. "▸ ").
    pub expander_collapsed: String,
    /// Indentation in columns per depth level.
    pub indent: usize,
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            branch: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            leaf: Style::default(),
            selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            expander_expanded: "▾ ".to_string(),
            expander_collapsed: "▸ ".to_string(),
            indent: 2,
        }
    }
}

/// An expandable tree view over a caller-supplied node hierarchy.
///
/// The widget wraps a [`TreeState`] engine: the engine owns expansion state
/// and event dispatch, the widget adds a cursor over the visible rows,
/// keyboard handling, and rendering. Activating a branch toggles it;
/// activating a leaf emits [`Message::Clicked`] (and invokes the engine's
/// click hook, when one is set). The secondary action channel is reachable
/// on any node regardless of leaf/branch status.
///
/// Parents match on the notification messages for side effects:
///
/// ```ignore
/// match msg {
///     AppMsg::Tree(tree::Message::Clicked(id)) => self.open_file(&id),
///     AppMsg::Tree(tree::Message::ActionFired(id)) => self.show_menu(&id),
///     AppMsg::Tree(m) => return self.tree.update(m).map(AppMsg::Tree),
/// }
/// ```
pub struct TreeView {
    state: TreeState,
    cursor: usize,
    focus: bool,
    style: TreeStyle,
    block: Option<Block<'static>>,
    icon_resolver: Option<IconResolver>,
    key_bindings: TreeKeyBindings,
}

impl TreeView {
    /// Create a tree view for the given root nodes, everything collapsed.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            state: TreeState::new(nodes),
            cursor: 0,
            focus: false,
            style: TreeStyle::default(),
            block: None,
            icon_resolver: None,
            key_bindings: TreeKeyBindings::default(),
        }
    }

    /// Set the tree style configuration.
    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }

    /// Set an optional block (border/chrome) around the tree.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set custom key bindings.
    pub fn with_key_bindings(mut self, bindings: TreeKeyBindings) -> Self {
        self.key_bindings = bindings;
        self
    }

    /// Get a reference to the current key bindings.
    pub fn key_bindings(&self) -> &TreeKeyBindings {
        &self.key_bindings
    }

    /// Set the advisory icon resolver called per row with `(node, expanded)`.
    pub fn with_icon_resolver(
        mut self,
        resolver: impl Fn(&Node, bool) -> Option<String> + Send + 'static,
    ) -> Self {
        self.icon_resolver = Some(Box::new(resolver));
        self
    }

    /// Set the engine hook invoked when a leaf is activated.
    pub fn with_on_click(mut self, hook: impl FnMut(&Node) + Send + 'static) -> Self {
        self.state = self.state.with_on_click(hook);
        self
    }

    /// Set the engine hook invoked by the secondary action channel.
    pub fn with_on_action(mut self, hook: impl FnMut(&Node) + Send + 'static) -> Self {
        self.state = self.state.with_on_action(hook);
        self
    }

    /// Give focus to the tree, enabling keyboard navigation.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove focus from the tree.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Shared access to the underlying engine.
    pub fn state(&self) -> &TreeState {
        &self.state
    }

    /// Mutable access to the underlying engine.
    ///
    /// Direct expansion changes through the engine are picked up on the next
    /// draw; call [`clamp_cursor`](TreeView::clamp_cursor) afterwards if the
    /// change can shrink the row list.
    pub fn state_mut(&mut self) -> &mut TreeState {
        &mut self.state
    }

    /// Replace the tree, keeping expansion state for ids common to both.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.state.set_nodes(nodes);
        self.clamp_cursor();
    }

    /// The cursor position within the visible rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The node under the cursor, if the tree is non-empty.
    pub fn selected_node(&self) -> Option<&Node> {
        self.state.visible_rows().nth(self.cursor).map(|row| row.node)
    }

    /// Number of currently visible rows.
    pub fn row_count(&self) -> usize {
        self.state.visible_len()
    }

    /// Clamp the cursor into the current row range.
    pub fn clamp_cursor(&mut self) {
        let len = self.state.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn row_at_cursor(&self) -> Option<(String, bool)> {
        self.state
            .visible_rows()
            .nth(self.cursor)
            .map(|row| (row.node.id().to_string(), row.node.is_leaf()))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        if self.key_bindings.up.matches(&key) {
            self.cursor = self.cursor.saturating_sub(1);
            Command::none()
        } else if self.key_bindings.down.matches(&key) {
            if self.cursor + 1 < self.state.visible_len() {
                self.cursor += 1;
            }
            Command::none()
        } else if self.key_bindings.first.matches(&key) {
            self.cursor = 0;
            Command::none()
        } else if self.key_bindings.last.matches(&key) {
            self.cursor = self.state.visible_len().saturating_sub(1);
            Command::none()
        } else if self.key_bindings.activate.matches(&key) {
            match self.row_at_cursor() {
                Some((id, _)) => Command::message(Message::Activate(id)),
                None => Command::none(),
            }
        } else if self.key_bindings.collapse.matches(&key) {
            // Only an expanded branch collapses; anything else is a no-op.
            match self.row_at_cursor() {
                Some((id, false)) if self.state.is_expanded(&id) => {
                    Command::message(Message::Activate(id))
                }
                _ => Command::none(),
            }
        } else if self.key_bindings.expand.matches(&key) {
            match self.row_at_cursor() {
                Some((id, false)) if !self.state.is_expanded(&id) => {
                    Command::message(Message::Activate(id))
                }
                _ => Command::none(),
            }
        } else if self.key_bindings.action.matches(&key) {
            match self.row_at_cursor() {
                Some((id, _)) => Command::message(Message::Action(id)),
                None => Command::none(),
            }
        } else if self.key_bindings.collapse_all.matches(&key) {
            Command::message(Message::CollapseAll)
        } else {
            Command::none()
        }
    }
}

impl Component for TreeView {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::Activate(id) => match self.state.activate(&id) {
                Activation::Toggled(expanded) => {
                    // A collapse can shrink the row list out from under the
                    // cursor.
                    self.clamp_cursor();
                    Command::message(Message::Toggled(id, expanded))
                }
                Activation::Clicked => Command::message(Message::Clicked(id)),
                Activation::Ignored => Command::none(),
            },
            Message::Action(id) => {
                if self.state.action(&id) {
                    Command::message(Message::ActionFired(id))
                } else {
                    Command::none()
                }
            }
            Message::CollapseAll => {
                self.state.collapse_all();
                self.clamp_cursor();
                Command::none()
            }
            // Toggled, Clicked, and ActionFired are notifications emitted by
            // the arms above. State is already updated when they are built,
            // so they are no-ops internally; parents match on them for side
            // effects.
            Message::Toggled(..) | Message::Clicked(_) | Message::ActionFired(_) => {
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Scroll so the cursor row stays visible.
        let visible_height = inner.height as usize;
        let scroll_offset = if self.cursor >= visible_height {
            self.cursor - visible_height + 1
        } else {
            0
        };

        let mut lines: Vec<Line> = Vec::new();
        for (i, row) in self
            .state
            .visible_rows()
            .enumerate()
            .skip(scroll_offset)
            .take(visible_height)
        {
            let node = row.node;
            let is_selected = i == self.cursor;
            let expanded = !node.is_leaf() && self.state.is_expanded(node.id());

            let mut spans = Vec::new();
            if row.depth > 0 {
                spans.push(Span::raw(" ".repeat(row.depth * self.style.indent)));
            }

            // Leaves get a blank slot so labels line up with siblings.
            let expander = if node.is_leaf() {
                "  "
            } else if expanded {
                self.style.expander_expanded.as_str()
            } else {
                self.style.expander_collapsed.as_str()
            };
            spans.push(Span::raw(expander));

            if let Some(ref resolver) = self.icon_resolver {
                if let Some(icon) = resolver(node, expanded) {
                    spans.push(Span::raw(icon));
                    spans.push(Span::raw(" "));
                }
            }

            let used: usize = spans
                .iter()
                .map(|s| runeutil::display_width(s.content.as_ref()))
                .sum();
            let avail = (inner.width as usize).saturating_sub(used);
            let label = runeutil::truncate(&runeutil::sanitize(node.label()), avail);

            let label_style = if is_selected {
                self.style.selected
            } else if node.is_leaf() {
                self.style.leaf
            } else {
                self.style.branch
            };
            spans.push(Span::styled(label, label_style));

            lines.push(Line::from(spans));
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "(empty)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
