//! Roster - terminal user directory
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - screen state and navigation
//! - Network Layer (Tokio) - async user fetches with retry

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use roster_tui::config::Config;
use roster_tui::constants::{APP_NAME, LOG_FILE};
use roster_tui::messages::ui_events::key_to_ui_event;
use roster_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent, View};
use roster_tui::ui::{centered_rect, detail_lines, spinner_frame, user_list_item};
use roster_tui::{AppActor, NetworkActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, path = %Config::path().display(), "Ignoring config file");
        Config::default()
    });
    tracing::info!(base_url = %config.base_url, page_size = config.page_size, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(&config, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(config, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut tick = 0usize;

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state, tick))?;
        tick = tick.wrapping_add(1);

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.view, current_state.show_help)
                {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState, tick: usize) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title bar
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);

    match state.view {
        View::List => draw_user_list(f, state, chunks[1], tick),
        View::Detail => draw_user_detail(f, state, chunks[1]),
    }

    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(state.base_url.clone(), Style::default().fg(Color::Gray)),
    ];
    f.render_widget(Paragraph::new(Line::from(title)), area);
}

fn draw_user_list(f: &mut Frame, state: &RenderState, area: Rect, tick: usize) {
    let title = if state.is_loading {
        format!(" Users {} ", spinner_frame(tick))
    } else {
        format!(" Users ({}) ", state.users.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    if state.users.is_empty() {
        let placeholder = if state.is_loading {
            "Loading users..."
        } else {
            "No users. Press 'r' to load."
        };
        let paragraph = Paragraph::new(placeholder)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .users
        .iter()
        .enumerate()
        .map(|(i, user)| user_list_item(user, i == state.selected))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_user_detail(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(user) = &state.detail else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" {} ", user.username));

    let detail = Paragraph::new(detail_lines(user))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let bar = if let Some(error) = &state.error {
        Paragraph::new(format!(" {} ", error)).style(Style::default().fg(Color::Red))
    } else {
        let status = match state.view {
            View::List if state.is_loading => String::from(" Loading... "),
            View::List => format!(
                " ↑/↓:select | Enter:details | r:reload | ?:help | q:quit  [{} cached] ",
                state.cached_users
            ),
            View::Detail => String::from(" Esc:back | ?:help | q:quit "),
        };
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 ROSTER - Keyboard Shortcuts

 USERS
   ↑ / ↓  (k / j)     Select user
   Enter              Show details
   r                  Reload list

 DETAILS
   Esc / Backspace    Back to list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
