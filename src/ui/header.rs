use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::quiz::QuizState;
use crate::ui::app::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, QUIZ_ACCENT};

/// Streak indicator never shows more than this many flames, however long
/// the streak runs.
const MAX_FLAMES: u32 = 4;

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, quiz: &QuizState, screen: &Screen) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(QUIZ_ACCENT);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Quizterm", accent_style),
        ];

        if matches!(screen, Screen::Quiz) && quiz.total_questions() > 0 {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!(
                    "Question {} of {}",
                    quiz.current_index + 1,
                    quiz.total_questions()
                ),
                text_style,
            ));
            if quiz.streak > 0 {
                let flames = quiz.streak.min(MAX_FLAMES) as usize;
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled("🔥".repeat(flames), accent_style));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
