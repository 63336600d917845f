// SPDX-License-Identifier: Apache-2.0

//! Live results TUI using ratatui.
//!
//! Re-fetches the poll on a fixed interval and redraws the tallies. The
//! refresh is read-only; between refreshes the view simply shows the counts
//! from the last point-in-time read.

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use pollbox_core::{Poll, PollId, PollRepository};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Live view state.
struct App {
    /// Whether to quit the application.
    should_quit: bool,
    /// Latest snapshot of the poll, refreshed on the fixed interval.
    poll: Option<Poll>,
    /// Refresh interval between reads.
    refresh_interval: Duration,
}

impl App {
    fn new(refresh_interval_ms: u64) -> Self {
        Self {
            should_quit: false,
            poll: None,
            refresh_interval: Duration::from_millis(refresh_interval_ms),
        }
    }
}

/// Run the live results view until 'q' or Esc is pressed.
pub fn run_live(
    repository: &PollRepository,
    poll_id: &PollId,
    refresh_interval_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(refresh_interval_ms);
    app.poll = repository.get_poll(poll_id)?;
    let mut last_refresh = Instant::now();

    // Main loop
    loop {
        terminal.draw(|frame| render(frame, &app))?;

        if last_refresh.elapsed() >= app.refresh_interval {
            // Keep the stale snapshot if a read fails mid-session.
            if let Ok(poll) = repository.get_poll(poll_id) {
                app.poll = poll;
            }
            last_refresh = Instant::now();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Results
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    // Title
    let title = Paragraph::new(" LIVE POLL RESULTS ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(title, main_layout[0]);

    match &app.poll {
        Some(poll) => render_poll(frame, main_layout[1], poll),
        None => {
            let missing = Paragraph::new("Poll not found")
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(missing, main_layout[1]);
        }
    }

    // Footer
    let refresh_secs = app.refresh_interval.as_millis() as f64 / 1000.0;
    let footer = Paragraph::new(format!(
        " Press 'q' to quit • updates every {:.1}s ",
        refresh_secs
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, main_layout[2]);
}

fn render_poll(frame: &mut Frame, area: Rect, poll: &Poll) {
    // Summary on top, one gauge row per option below.
    let mut constraints = vec![Constraint::Length(4)];
    constraints.extend(poll.options.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let summary = Paragraph::new(vec![
        Line::from(Span::styled(
            poll.question.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!("{} votes", poll.total_votes)),
            Span::raw(" • "),
            Span::raw(format!(
                "created {}",
                poll.created_at.format("%Y-%m-%d %H:%M UTC")
            )),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(summary, layout[0]);

    let leader_id = poll.leader().map(|opt| opt.id.clone());

    for (index, option) in poll.options.iter().enumerate() {
        let percentage = poll.percentage(option.votes);
        let is_leader = Some(&option.id) == leader_id.as_ref();
        let color = if is_leader { Color::Yellow } else { Color::Blue };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(
                        " {}{} ",
                        option.text,
                        if is_leader { " 🏆" } else { "" }
                    ))
                    .borders(Borders::ALL),
            )
            .gauge_style(Style::default().fg(color))
            .percent(percentage.min(100) as u16)
            .label(format!("{} votes ({}%)", option.votes, percentage));
        frame.render_widget(gauge, layout[index + 1]);
    }
}
