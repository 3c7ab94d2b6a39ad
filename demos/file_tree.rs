//! File-explorer style tree view.
//!
//! Demonstrates the `TreeView` widget with a sample directory tree,
//! extension-based icon resolution, and a status line fed by the widget's
//! notification messages.
//!
//! Run with: `cargo run --example file_tree`

use std::collections::VecDeque;
use std::io;

use trellis::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use trellis::crossterm::execute;
use trellis::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use trellis::ratatui::backend::CrosstermBackend;
use trellis::ratatui::layout::{Constraint, Direction, Layout};
use trellis::ratatui::style::{Color, Style};
use trellis::ratatui::text::{Line, Span};
use trellis::ratatui::widgets::{Block, Borders, Paragraph};
use trellis::ratatui::Terminal;
use trellis::widgets::key::KeyMap;
use trellis::widgets::tree::{self, TreeView};
use trellis::{Component, Node};

fn sample_tree() -> Vec<Node> {
    vec![
        Node::branch(
            "1",
            "Documents",
            vec![
                Node::branch(
                    "1-1",
                    "Work",
                    vec![
                        Node::leaf("1-1-1", "report.pdf"),
                        Node::leaf("1-1-2", "presentation.pptx"),
                        Node::leaf("1-1-3", "budget.xlsx"),
                    ],
                ),
                Node::branch(
                    "1-2",
                    "Personal",
                    vec![
                        Node::branch(
                            "1-2-1",
                            "photos",
                            vec![
                                Node::leaf("1-2-1-1", "vacation.jpg"),
                                Node::leaf("1-2-1-2", "family.png"),
                            ],
                        ),
                        Node::branch(
                            "1-2-2",
                            "music",
                            vec![
                                Node::leaf("1-2-2-1", "playlist.mp3"),
                                Node::leaf("1-2-2-2", "album.flac"),
                            ],
                        ),
                    ],
                ),
            ],
        ),
        Node::branch(
            "2",
            "Projects",
            vec![Node::branch(
                "2-1",
                "trellis",
                vec![
                    Node::branch(
                        "2-1-1",
                        "src",
                        vec![
                            Node::leaf("2-1-1-1", "main.rs"),
                            Node::leaf("2-1-1-2", "tree.rs"),
                        ],
                    ),
                    Node::leaf("2-1-2", "Cargo.toml"),
                    Node::leaf("2-1-3", "README.md"),
                ],
            )],
        ),
    ]
}

/// Icon per node, keyed by file extension for leaves.
fn file_icon(node: &Node, expanded: bool) -> Option<String> {
    if !node.is_leaf() {
        return Some(if expanded { "\u{1F4C2}" } else { "\u{1F4C1}" }.to_string());
    }
    let extension = match node.label().rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    };
    let icon = match extension.as_str() {
        "rs" | "ts" | "tsx" | "js" | "jsx" => "\u{2328} ",
        "json" | "md" | "toml" | "pdf" | "pptx" | "xlsx" => "\u{1F4C4}",
        "jpg" | "png" | "gif" | "svg" => "\u{1F5BC} ",
        "mp3" | "flac" | "wav" => "\u{1F3B5}",
        "mp4" | "avi" | "mov" => "\u{1F3AC}",
        _ => "\u{1F4C3}",
    };
    Some(icon.to_string())
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Up => "\u{2191}".into(),
        KeyCode::Down => "\u{2193}".into(),
        KeyCode::Left => "\u{2190}".into(),
        KeyCode::Right => "\u{2192}".into(),
        KeyCode::Enter => "enter".into(),
        KeyCode::Char(' ') => "space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Home => "home".into(),
        KeyCode::End => "end".into(),
        other => format!("{other:?}").to_lowercase(),
    }
}

fn help_line(tree: &TreeView) -> Paragraph<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, binding) in tree.key_bindings().short_help().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" \u{B7} "));
        }
        let keys = binding
            .keys
            .iter()
            .map(|k| key_label(k.code))
            .collect::<Vec<_>>()
            .join("/");
        spans.push(Span::styled(keys, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}", binding.description)));
    }
    spans.push(Span::raw(" \u{B7} "));
    spans.push(Span::styled("q", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" quit"));
    Paragraph::new(Line::from(spans))
}

fn label_of(tree: &TreeView, id: &str) -> String {
    tree.state()
        .find(id)
        .map(|node| node.label().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut tree = TreeView::new(sample_tree())
        .with_block(
            Block::default()
                .borders(Borders::ALL)
                .title("File Explorer"),
        )
        .with_icon_resolver(file_icon);
    tree.focus();

    let mut status = String::from("Navigate with the arrow keys; Enter toggles or opens.");

    loop {
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(frame.area());
            tree.view(frame, chunks[0]);
            frame.render_widget(
                Paragraph::new(status.as_str()).style(Style::default().fg(Color::DarkGray)),
                chunks[1],
            );
            frame.render_widget(help_line(&tree), chunks[2]);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                break;
            }
            // Synchronous message pump: dispatch the key, then every message
            // the updates produce, until the queue drains.
            let mut queue = VecDeque::from([tree::Message::KeyPress(key)]);
            while let Some(msg) = queue.pop_front() {
                match &msg {
                    tree::Message::Clicked(id) => {
                        status = format!("Opened {}", label_of(&tree, id));
                    }
                    tree::Message::ActionFired(id) => {
                        status = format!("Actions for {}", label_of(&tree, id));
                    }
                    tree::Message::Toggled(id, expanded) => {
                        let verb = if *expanded { "Expanded" } else { "Collapsed" };
                        status = format!("{} {}", verb, label_of(&tree, id));
                    }
                    _ => {}
                }
                queue.extend(tree.update(msg).into_messages());
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}
