use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{GameOutcome, GameState, Grid, Player, WinLine};

use super::app::DropAnimation;

/// A piece mid-fall this frame: drawn at `draw_row`, hiding its committed
/// cell at `target_row`.
struct FallingPiece {
    column: usize,
    draw_row: usize,
    target_row: usize,
    player: Player,
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: Option<&str>,
    animation: Option<DropAnimation>,
) {
    // Selector row, two borders, and the indicator row around the grid.
    let board_height = game_state.grid().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, animation, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let current_player = game_state.current_player();

    let status = match game_state.outcome() {
        Some(GameOutcome::Won { player, .. }) => format!("Game Over — {} wins", player.name()),
        Some(GameOutcome::Tied) => "Game Over — Tie".to_string(),
        None => format!("{}'s Turn", current_player.name()),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    animation: Option<DropAnimation>,
    area: Rect,
) {
    let grid = game_state.grid();

    let win_line = match game_state.outcome() {
        Some(GameOutcome::Won { line, .. }) => Some(line),
        _ => None,
    };

    // Resolve the falling piece once per frame.
    let falling = animation.and_then(|anim| {
        let draw_row = anim.current_row();
        (draw_row < anim.target_row).then_some(FallingPiece {
            column: anim.column,
            draw_row,
            target_row: anim.target_row,
            player: anim.player,
        })
    });

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..grid.cols() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw(" "));
    lines.push(Line::from(col_line));

    let horizontal_rule = "═".repeat(grid.cols() * 3);
    lines.push(Line::from(format!("  ╔{horizontal_rule}╗")));

    for row in 0..grid.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..grid.cols() {
            row_spans.push(cell_span(grid, row, col, win_line, falling.as_ref()));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{horizontal_rule}╝")));

    // Selection indicator, dimmed when the column has no room left
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..grid.cols() {
        if col == selected_column {
            let color = if grid.is_column_full(col) {
                Color::DarkGray
            } else {
                Color::Cyan
            };
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(color)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw(" "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn cell_span(
    grid: &Grid,
    row: usize,
    col: usize,
    win_line: Option<WinLine>,
    falling: Option<&FallingPiece>,
) -> Span<'static> {
    if let Some(piece) = falling {
        if col == piece.column {
            if row == piece.draw_row {
                return Span::styled(" ● ", Style::default().fg(player_color(piece.player)));
            }
            // The landed cell stays visually empty until the piece arrives.
            if row == piece.target_row {
                return Span::styled(" . ", Style::default().fg(Color::DarkGray));
            }
        }
    }

    match grid.get(row, col) {
        Some(player) => {
            let mut style = Style::default().fg(player_color(player));
            if win_line.is_some_and(|line| line.contains(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Span::styled(" ● ", style)
        }
        None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter/Space: Drop  |  R: New Game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
