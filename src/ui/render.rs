use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::quiz::{Question, QuizState};
use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    CORRECT, HEADER_TEXT, INCORRECT, OPTION_SELECTED_BG, QUIZ_ACCENT,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.quiz(), app.screen()), header);

    frame.render_widget(Clear, body);
    let body_widget = match app.screen() {
        Screen::Loading => loading_widget(),
        Screen::LoadError { message } => error_widget(message),
        Screen::Quiz => quiz_widget(app.quiz()),
        Screen::Results => results_widget(app.quiz()),
    };
    frame.render_widget(body_widget, body);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(app.screen(), footer), footer);
}

fn loading_widget() -> Paragraph<'static> {
    let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    Paragraph::new(Line::from(Span::styled("Loading questions...", style)))
        .alignment(Alignment::Center)
}

fn error_widget(message: &str) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            "Failed to load questions",
            Style::default().fg(INCORRECT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn quiz_widget(quiz: &QuizState) -> Paragraph<'static> {
    let Some(question) = quiz.current_question() else {
        // Empty question set: nothing to ask.
        return Paragraph::new(Line::from(Span::styled(
            "No questions available.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
    };

    let mut lines = vec![
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (index, option) in question.options.iter().enumerate() {
        lines.push(option_line(quiz, question, index, option));
    }

    if quiz.answer_revealed {
        lines.push(Line::from(""));
        lines.push(feedback_line(quiz, question));
        if let Some(message) = &quiz.streak_message {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(QUIZ_ACCENT).add_modifier(Modifier::BOLD),
            )));
        }
    }

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Per-option visual state: default, selected, correct or incorrect.
/// Correct/incorrect styling is only active after the reveal.
fn option_line(
    quiz: &QuizState,
    question: &Question,
    index: usize,
    option: &str,
) -> Line<'static> {
    let is_selected = quiz.selected_answer == Some(index);
    let mut style = Style::default().fg(HEADER_TEXT);

    if quiz.answer_revealed {
        if index == question.correct_option_index {
            style = style.fg(CORRECT).add_modifier(Modifier::BOLD);
        } else if is_selected {
            style = style.fg(INCORRECT);
        } else {
            style = style.add_modifier(Modifier::DIM);
        }
    }
    if is_selected {
        style = style.bg(OPTION_SELECTED_BG);
    }

    Line::from(Span::styled(format!("  {}. {}", index + 1, option), style))
}

fn feedback_line(quiz: &QuizState, question: &Question) -> Line<'static> {
    let correct = quiz.selected_answer == Some(question.correct_option_index);
    if correct {
        Line::from(Span::styled(
            "Correct!",
            Style::default().fg(CORRECT).add_modifier(Modifier::BOLD),
        ))
    } else {
        let answer = question
            .options
            .get(question.correct_option_index)
            .map(String::as_str)
            .unwrap_or("?");
        Line::from(Span::styled(
            format!("Wrong! Correct answer: {answer}"),
            Style::default().fg(INCORRECT),
        ))
    }
}

fn results_widget(quiz: &QuizState) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            "Quiz complete!",
            Style::default().fg(QUIZ_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Score: {} / {} ({}%)",
                quiz.score,
                quiz.total_questions(),
                quiz.score_percentage()
            ),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!("Highest streak: {}", quiz.highest_streak),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to play again.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];
    Paragraph::new(lines).alignment(Alignment::Center)
}
