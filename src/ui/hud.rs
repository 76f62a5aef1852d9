use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Draws the always-visible `Score: N | High Score: M` line.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, high_score: u32) {
    frame.render_widget(
        Paragraph::new(score_line(score, high_score)).alignment(Alignment::Center),
        area,
    );
}

fn score_line(score: u32, high_score: u32) -> Line<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score: ", bold),
        Span::styled(score.to_string(), bold.fg(Color::Green)),
        Span::styled(" | High Score: ", bold),
        Span::styled(high_score.to_string(), bold.fg(Color::Red)),
    ])
}
