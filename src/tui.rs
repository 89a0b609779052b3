//! Full-screen front end. `Screen` holds what is shown and reacts to keys;
//! `TuiInterface` owns the terminal and draws it.

use crate::game_state::{GameInterface, UserAction};
use crate::round::{Rejection, RoundView};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ALERT_WIDTH_PERCENT: u16 = 60;
const ALERT_HEIGHT: u16 = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const BASE_WORD_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    /// Rejection alert is open; typing is blocked until it is dismissed.
    ShowingAlert(Rejection),
}

/// Screen model: round snapshot, pending input, and messages.
#[derive(Debug)]
struct Screen {
    base_word: String,
    used_words: Vec<String>,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl Screen {
    fn new() -> Self {
        Self {
            base_word: String::new(),
            used_words: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringWord,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    fn sync_round(&mut self, view: &RoundView) {
        self.base_word = view.base_word.to_string();
        self.used_words = view.used_words.to_vec();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return None;
        }

        match self.state {
            TuiState::EnteringWord => self.handle_word_input(key),
            TuiState::ShowingAlert(_) => {
                self.handle_alert_input(key);
                None
            }
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('n' | 'N') if has_ctrl => {
                info_log!("handle_word_input() - Ctrl+N pressed, returning NewGame");
                return Some(UserAction::NewGame);
            }
            KeyCode::Char(c) if has_ctrl || has_alt => {
                debug_log!(
                    "handle_word_input() - Ignoring '{}' with modifier: {:?}",
                    c,
                    key.modifiers
                );
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.current_input.chars().count() < MAX_INPUT_LENGTH {
                    self.current_input.push(c);
                } else {
                    self.error_message = format!("Words are at most {MAX_INPUT_LENGTH} letters!");
                }
            }
            KeyCode::Char(' ') => {}
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                info_log!(
                    "handle_word_input() - Enter pressed with '{}'",
                    self.current_input
                );
                return Some(UserAction::Submit(self.current_input.clone()));
            }
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            _ => {
                debug_log!("handle_word_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_alert_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.state = TuiState::EnteringWord;
            self.status = "Try another word".to_string();
        }
    }

    fn show_accepted(&mut self, word: &str, view: &RoundView) {
        self.sync_round(view);
        self.current_input.clear();
        self.message = format!("✓ {word}");
        self.status = format!("{} words found", self.used_words.len());
    }

    fn show_rejection(&mut self, rejection: Rejection) {
        self.state = TuiState::ShowingAlert(rejection);
        self.message.clear();
        self.status = rejection.title().to_string();
    }

    fn show_new_game(&mut self, view: &RoundView) {
        self.sync_round(view);
        self.current_input.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringWord;
        self.message = format!("New game started: {}", self.base_word);
        self.status = "New game - Enter your first word".to_string();
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    screen: Screen,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            screen: Screen::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let screen = &self.screen;
        self.terminal.draw(|f| render(f, screen))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(self.screen.handle_key(key)),
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, view: &RoundView) {
        self.screen.sync_round(view);
        self.screen.status = "Ready - Enter your first word".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Error handling input: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, word: &str, view: &RoundView) {
        self.screen.show_accepted(word, view);
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: Rejection) {
        self.screen.show_rejection(rejection);
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, view: &RoundView) {
        self.screen.show_new_game(view);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.screen.message = "Exiting...".to_string();
        self.screen.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn render(f: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Base word
            Constraint::Length(3), // Input
            Constraint::Min(5),    // Used words
            Constraint::Length(3), // Status line
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_base_word(f, chunks[1], &screen.base_word);
    render_input(f, chunks[2], &screen.current_input, &screen.error_message);
    render_used_words(f, chunks[3], &screen.used_words, &screen.message);
    render_status(f, chunks[4], &screen.status);
    render_instructions(f, chunks[5], screen.state);

    if let TuiState::ShowingAlert(rejection) = screen.state {
        render_alert(f, rejection);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("WORD SCRAMBLE")
        .style(HEADER_STYLE)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_base_word(f: &mut Frame, area: Rect, base_word: &str) {
    let paragraph = Paragraph::new(Span::styled(base_word.to_uppercase(), BASE_WORD_STYLE))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Make words out of")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, area: Rect, current_input: &str, error_message: &str) {
    let mut spans = vec![Span::raw(" "), Span::raw(current_input), Span::raw("_")];
    if !error_message.is_empty() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(error_message, ERROR_STYLE));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Enter your word here")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String], message: &str) {
    let mut lines = Vec::new();

    if !message.is_empty() {
        lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        lines.push(Line::from(""));
    }

    for word in used_words {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", word.chars().count()), BADGE_STYLE),
            Span::raw(" "),
            Span::styled(word.as_str(), SUCCESS_STYLE),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!("Your words ({})", used_words.len()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let status_text = if status.is_empty() { "Ready" } else { status };
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::EnteringWord => "Type a word | ENTER: Submit | CTRL+N: New Game | ESC: Quit",
        TuiState::ShowingAlert(_) => "ENTER / ESC: OK",
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_alert(f: &mut Frame, rejection: Rejection) {
    let area = centered_rect(ALERT_WIDTH_PERCENT, ALERT_HEIGHT, f.area());
    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(rejection.message())),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", HEADER_STYLE)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(rejection.title(), ERROR_STYLE))
                .borders(Borders::ALL),
        );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_percent.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(screen: &mut Screen, word: &str) {
        for c in word.chars() {
            assert_eq!(screen.handle_key(press(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut screen = Screen::new();
        type_word(&mut screen, "Tin");
        assert_eq!(screen.current_input, "Tin");
        assert_eq!(
            screen.handle_key(press(KeyCode::Enter)),
            Some(UserAction::Submit("Tin".to_string()))
        );
    }

    #[test]
    fn test_backspace_removes_last_letter() {
        let mut screen = Screen::new();
        type_word(&mut screen, "tint");
        screen.handle_key(press(KeyCode::Backspace));
        assert_eq!(screen.current_input, "tin");
    }

    #[test]
    fn test_non_letter_is_rejected() {
        let mut screen = Screen::new();
        screen.handle_key(press(KeyCode::Char('4')));
        assert!(screen.current_input.is_empty());
        assert!(screen.error_message.contains("'4'"));
    }

    #[test]
    fn test_ctrl_n_starts_new_game() {
        let mut screen = Screen::new();
        let key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key(key), Some(UserAction::NewGame));
        assert!(screen.current_input.is_empty());
    }

    #[test]
    fn test_esc_exits() {
        let mut screen = Screen::new();
        assert_eq!(screen.handle_key(press(KeyCode::Esc)), Some(UserAction::Exit));
    }

    #[test]
    fn test_alert_blocks_typing_until_dismissed() {
        let mut screen = Screen::new();
        type_word(&mut screen, "dog");
        screen.show_rejection(Rejection::NotPossible);

        assert_eq!(screen.handle_key(press(KeyCode::Char('x'))), None);
        assert_eq!(screen.current_input, "dog");
        // ESC dismisses the alert rather than quitting.
        assert_eq!(screen.handle_key(press(KeyCode::Esc)), None);
        assert_eq!(screen.state, TuiState::EnteringWord);
        assert_eq!(screen.current_input, "dog");
    }

    #[test]
    fn test_accepted_word_clears_input() {
        let mut screen = Screen::new();
        type_word(&mut screen, "tin");
        let used = vec!["tin".to_string()];
        let view = RoundView {
            base_word: "listen",
            used_words: &used,
        };
        screen.show_accepted("tin", &view);
        assert!(screen.current_input.is_empty());
        assert_eq!(screen.used_words, used);
        assert_eq!(screen.base_word, "listen");
    }

    #[test]
    fn test_new_game_resets_screen() {
        let mut screen = Screen::new();
        type_word(&mut screen, "abc");
        screen.show_rejection(Rejection::NotReal);
        let view = RoundView {
            base_word: "triangle",
            used_words: &[],
        };
        screen.show_new_game(&view);
        assert_eq!(screen.state, TuiState::EnteringWord);
        assert!(screen.current_input.is_empty());
        assert!(screen.used_words.is_empty());
        assert_eq!(screen.base_word, "triangle");
    }

    #[test]
    fn test_render_shows_base_word_and_alert() {
        let mut screen = Screen::new();
        let used = vec!["tin".to_string()];
        screen.sync_round(&RoundView {
            base_word: "listen",
            used_words: &used,
        });
        screen.show_rejection(Rejection::AlreadyUsed);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, &screen)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("LISTEN"));
        assert!(text.contains("Word used already"));
        assert!(text.contains("tin"));
    }

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 7, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.x, 20);
        assert!(rect.y + rect.height <= area.height);
    }

    #[test]
    fn test_centered_rect_on_very_wide_terminal() {
        let area = Rect::new(0, 0, 1200, 40);
        let rect = centered_rect(60, 7, area);
        assert_eq!(rect.width, 720);
        assert_eq!(rect.x, 240);
        assert!(rect.x + rect.width <= area.width);
    }

    #[test]
    fn test_render_alert_on_very_wide_terminal() {
        let mut screen = Screen::new();
        screen.show_rejection(Rejection::NotReal);

        let mut terminal = Terminal::new(TestBackend::new(1200, 40)).unwrap();
        terminal.draw(|f| render(f, &screen)).unwrap();
    }
}
