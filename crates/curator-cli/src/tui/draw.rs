use super::Pane;
use curator_core::flow::{Flow, Screen};
use curator_core::onboarding::{Onboarding, OnboardingStep};
use curator_core::session::DashboardSession;
use curator_core::types::{Goal, Personality, TimeSlot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub(crate) fn draw(f: &mut Frame, flow: &Flow, cursor: usize, pane: Pane) {
    match flow.screen() {
        Screen::Welcome => draw_welcome(f),
        Screen::Onboarding => draw_onboarding(f, flow.onboarding(), cursor),
        Screen::Dashboard => {
            if let Some(session) = flow.session() {
                draw_dashboard(f, session, cursor, pane);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Welcome
// ---------------------------------------------------------------------------

fn draw_welcome(f: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Habitual Curator",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Discover quirky, science-backed micro-habits that actually fit your life."),
        Line::from(""),
        Line::from("No 5am yoga classes. No perfect morning routines."),
        Line::from("Just tiny, delightful changes that stick."),
        Line::from(""),
        Line::from(Span::styled(
            "  ★ AI-powered habit matching",
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            "  ♥ Personality-based suggestions",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "  ◷ 2-minute micro-habits",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to find your perfect habits",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Takes 2 minutes · Completely personalized",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let card = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, centered(f.area(), 60, 18));

    render_help(f, help_area(f.area()), " Enter: begin  |  q / Esc: quit");
}

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

fn draw_onboarding(f: &mut Frame, onboarding: &Onboarding, cursor: usize) {
    let area = centered(f.area(), 64, 22);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // progress dots + title + subtitle
            Constraint::Min(3),    // step content
            Constraint::Length(1), // nav hint
        ])
        .split(area);

    let step = onboarding.step();
    let dots: String = OnboardingStep::all()
        .iter()
        .map(|s| if s.index() <= step.index() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let header = Paragraph::new(vec![
        Line::from(Span::styled(dots, Style::default().fg(Color::Magenta))),
        Line::from(Span::styled(
            step.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            step.subtitle(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(header, chunks[0]);

    let content = match step {
        OnboardingStep::Name => vec![Line::from(format!("> {}▌", onboarding.name()))],
        OnboardingStep::Personality => Personality::all()
            .iter()
            .enumerate()
            .map(|(i, p)| {
                option_line(
                    i == cursor,
                    onboarding.personality() == Some(*p),
                    &format!("{} — {}", p.label(), p.describe()),
                )
            })
            .collect(),
        OnboardingStep::Goals => Goal::all()
            .iter()
            .enumerate()
            .map(|(i, g)| option_line(i == cursor, onboarding.goals().contains(g), g.label()))
            .collect(),
        OnboardingStep::Preferences => TimeSlot::all()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                option_line(i == cursor, onboarding.preferences().contains(t), t.label())
            })
            .collect(),
    };
    let body = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);

    let next = if step.is_last() {
        "Start my journey"
    } else {
        "next"
    };
    let hint = if onboarding.can_proceed() {
        format!(" Enter: {next}  |  ←: previous  |  Esc: quit")
    } else {
        " complete this step to continue".to_string()
    };
    render_help(f, chunks[2], &hint);
}

fn option_line(under_cursor: bool, selected: bool, text: &str) -> Line<'static> {
    let marker = if selected { "[x]" } else { "[ ]" };
    let pointer = if under_cursor { "▸" } else { " " };
    let style = if under_cursor {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{pointer} {marker} {text}"), style))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

fn draw_dashboard(f: &mut Frame, session: &DashboardSession, cursor: usize, pane: Pane) {
    let progress = session.progress();
    let suggestions_height = if session.suggested().is_empty() {
        0
    } else {
        session.suggested().len() as u16 + 3
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // greeting
            Constraint::Length(3),                  // progress panel
            Constraint::Min(5),                     // today's habits
            Constraint::Length(suggestions_height), // suggestions
            Constraint::Length(2),                  // personalization note
            Constraint::Length(1),                  // help
        ])
        .split(f.area());

    let greeting = Paragraph::new(format!(
        " {}  Ready for some delightfully small wins today?",
        session.greeting()
    ))
    .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(greeting, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Today's Progress — streak: {} days — {}",
            progress.streak,
            progress.mood.message()
        )))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress.ratio)
        .label(format!(
            "{}/{} done ({}%)",
            progress.completed,
            progress.total,
            (progress.ratio * 100.0).round() as u32
        ));
    f.render_widget(gauge, chunks[1]);

    render_today(f, chunks[2], session, cursor, pane);
    if !session.suggested().is_empty() {
        render_suggestions(f, chunks[3], session, cursor, pane);
    }

    let note = Paragraph::new(format!(
        " Why these habits? {}",
        session.profile.personalization_note()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: false });
    f.render_widget(note, chunks[4]);

    render_help(
        f,
        chunks[5],
        " Tab: switch list  |  ↑/↓: move  |  Space: done/undone  |  Enter: try suggestion  |  q: quit",
    );
}

fn render_today(f: &mut Frame, area: Rect, session: &DashboardSession, cursor: usize, pane: Pane) {
    let lines: Vec<Line> = session
        .current()
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let done = session.is_completed(&h.id);
            let pointer = if pane == Pane::Today && i == cursor {
                "▸"
            } else {
                " "
            };
            let check = if done { "✓" } else { " " };
            let mut style = if done {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            if pane == Pane::Today && i == cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            let suffix = if done {
                "  ✨ Great job! Small wins lead to big changes."
            } else {
                ""
            };
            Line::from(Span::styled(
                format!(
                    "{pointer} [{check}] {} ({}, {}){suffix}",
                    h.title, h.duration, h.category
                ),
                style,
            ))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(format!(
        "Today's Micro-Habits ({}/{} done)",
        session.completed_count(),
        session.total_count()
    ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_suggestions(
    f: &mut Frame,
    area: Rect,
    session: &DashboardSession,
    cursor: usize,
    pane: Pane,
) {
    let lines: Vec<Line> = session
        .suggested()
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let pointer = if pane == Pane::Suggestions && i == cursor {
                "▸"
            } else {
                " "
            };
            let style = if pane == Pane::Suggestions && i == cursor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{pointer} {} ({}) — {}", h.title, h.duration, h.science_note),
                style,
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("★ More habits curated for you");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn render_help(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn help_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    }
}

/// Center a fixed-size card inside the full frame, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
