use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::{BoardGeometry, COLUMNS_PER_CELL, GAME_OVER_LABEL, GLYPH_CELL, Palette};
use crate::game::{GameState, Lifecycle};
use crate::snake::Cell;
use crate::ui::centered;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, palette: &Palette) {
    let [hud_area, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    render_hud(frame, hud_area, state.score, state.high_score);

    match state.lifecycle() {
        Lifecycle::Idle => render_start_menu(frame, body),
        Lifecycle::Running => {
            let _ = render_board(frame, body, state, palette);
        }
        Lifecycle::Over => {
            if render_board(frame, body, state, palette).is_some() {
                frame
                    .buffer_mut()
                    .set_style(body, Style::new().add_modifier(Modifier::DIM));
            }
            render_game_over_menu(
                frame,
                body,
                state.score,
                state.high_score,
                state.death_reason,
            );
        }
    }
}

/// Terminal size of the bordered board for `geometry`.
#[must_use]
pub fn board_size(geometry: BoardGeometry) -> (u16, u16) {
    let side = geometry.grid_side();
    (
        side.saturating_mul(COLUMNS_PER_CELL).saturating_add(2),
        side.saturating_add(2),
    )
}

/// Paints the board, snake, food and the game-over label into `area`.
///
/// Returns the board rect, or `None` when `area` is too small and a notice
/// was drawn instead.
pub fn render_board(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    palette: &Palette,
) -> Option<Rect> {
    let (width, height) = board_size(state.geometry());
    if area.width < width || area.height < height {
        render_too_small(frame, area, width, height);
        return None;
    }

    let board = centered(area, width, height);
    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let background = Style::new().bg(palette.board);
    let buffer = frame.buffer_mut();
    buffer.set_style(inner, background);

    for segment in state.snake.segments() {
        paint_cell(frame, inner, *segment, background.fg(palette.snake));
    }
    paint_cell(frame, inner, state.food.position, background.fg(palette.food));

    if state.lifecycle() == Lifecycle::Over {
        let label_width = u16::try_from(GAME_OVER_LABEL.width()).unwrap_or(inner.width);
        let x = inner.x + inner.width.saturating_sub(label_width) / 2;
        let y = inner.y + inner.height / 2;
        frame.buffer_mut().set_string(
            x,
            y,
            GAME_OVER_LABEL,
            background.fg(palette.overlay).add_modifier(Modifier::BOLD),
        );
    }

    Some(board)
}

fn paint_cell(frame: &mut Frame<'_>, inner: Rect, cell: Cell, style: Style) {
    let Some((x, y)) = cell_to_terminal(inner, cell) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, GLYPH_CELL, style);
}

fn cell_to_terminal(inner: Rect, cell: Cell) -> Option<(u16, u16)> {
    let column = u16::try_from(cell.x).ok()?.checked_mul(COLUMNS_PER_CELL)?;
    let row = u16::try_from(cell.y).ok()?;

    let x = inner.x.checked_add(column)?;
    let y = inner.y.checked_add(row)?;
    if x + COLUMNS_PER_CELL > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    let notice = centered(area, area.width, 2);
    let min_height = height.saturating_add(2);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Terminal too small"),
            Line::from(format!("enlarge to at least {width}x{min_height}")),
        ])
        .alignment(Alignment::Center)
        .style(Style::new().fg(Color::Yellow)),
        notice,
    );
}
