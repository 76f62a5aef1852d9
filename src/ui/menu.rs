use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::DeathReason;
use crate::ui::centered;

const START_POPUP_SIZE: (u16, u16) = (36, 9);
const GAME_OVER_POPUP_SIZE: (u16, u16) = (36, 12);

/// Draws the idle screen with its Start Game button.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered(area, START_POPUP_SIZE.0, START_POPUP_SIZE.1);
    frame.render_widget(Clear, popup);

    let block = Block::bordered().title(" snake ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [title_row, button_row, footer_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );
    frame.render_widget(
        Paragraph::new(button("Start Game")).alignment(Alignment::Center),
        button_row,
    );
    frame.render_widget(
        Paragraph::new(vec![Line::from("Arrows steer, [Q]/[Esc] quits")])
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer_row,
    );
}

/// Draws the game-over modal on top of the dimmed board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    death_reason: Option<DeathReason>,
) {
    let popup = centered(area, GAME_OVER_POPUP_SIZE.0, GAME_OVER_POPUP_SIZE.1);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Game Over").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Your Score: "),
            Span::styled(score.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("High Score: "),
            Span::styled(high_score.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        })
        .style(Style::default().fg(Color::DarkGray)),
        Line::from(""),
        button("Restart Game"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn button(label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[ {label} ]"),
            Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Enter", Style::default().fg(Color::DarkGray)),
    ])
}
