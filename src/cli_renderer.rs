use crate::color::Color;
use crate::coord::Direction;
use crate::game::Game;
use crate::renderer::{Input, Renderer};
use crate::viewport::ViewportRect;
use crate::world::GameState;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Terminal columns per game pixel, so cells come out roughly square.
const COLUMNS_PER_CELL: u16 = 2;

pub struct CliRenderer {
    last_render: Instant,
    target_frame_time: Duration,
    viewport: ViewportRect,
    board_size: (u32, u32),
    active: bool,
}

impl CliRenderer {
    pub fn new() -> Self {
        Self {
            last_render: Instant::now(),
            // ~30 FPS
            target_frame_time: Duration::from_millis(33),
            viewport: ViewportRect::new(0.0, 0.0, 0.0, 0.0),
            board_size: (0, 0),
            active: false,
        }
    }

    fn cell_color(color: Color) -> style::Color {
        match color {
            Color::Background => style::Color::Black,
            Color::Snake => style::Color::Green,
            Color::Food => style::Color::Blue,
            Color::Fail => style::Color::Red,
        }
    }

    fn draw_info(&self, game: &Game, stdout: &mut io::Stdout) -> io::Result<()> {
        let row = game.height() as u16;
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            ResetColor,
            terminal::Clear(ClearType::UntilNewLine),
            Print(format!("Length: {}  Score: {}", game.snake_len(), game.score())),
            cursor::MoveTo(0, row + 1),
            terminal::Clear(ClearType::UntilNewLine),
            Print("Controls: Click / Arrow Keys to turn | R: Restart | Q: Quit"),
            cursor::MoveTo(0, row + 2),
            terminal::Clear(ClearType::UntilNewLine),
        )?;

        match game.state() {
            GameState::Won => {
                queue!(
                    stdout,
                    SetForegroundColor(style::Color::Green),
                    Print("BOARD FULL! Click to play again"),
                    ResetColor
                )?;
            }
            GameState::Lost => {
                queue!(
                    stdout,
                    SetForegroundColor(style::Color::Red),
                    Print("GAME OVER! Click to restart"),
                    ResetColor
                )?;
            }
            GameState::Playing => {}
        }

        Ok(())
    }

    fn map_mouse(&self, event: MouseEvent) -> Option<Input> {
        if !matches!(event.kind, MouseEventKind::Down(_)) {
            return None;
        }
        let (width, height) = self.board_size;
        self.viewport
            .to_game_space(event.column as f64, event.row as f64, width, height)
            .filter(|&(x, y)| x < width as i32 && y < height as i32)
            .map(|(x, y)| Input::Click { x, y })
    }

    fn map_key(event: KeyEvent) -> Option<Input> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        match event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Input::Quit),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::Restart),
            KeyCode::Up => Some(Input::Direction(Direction::Up)),
            KeyCode::Down => Some(Input::Direction(Direction::Down)),
            KeyCode::Left => Some(Input::Direction(Direction::Left)),
            KeyCode::Right => Some(Input::Direction(Direction::Right)),
            _ => None,
        }
    }
}

impl Renderer for CliRenderer {
    fn init(&mut self, game: &Game) -> io::Result<()> {
        self.board_size = (game.width(), game.height());
        self.viewport = ViewportRect::new(
            0.0,
            0.0,
            (game.width() as u16 * COLUMNS_PER_CELL) as f64,
            game.height() as f64,
        );

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.active = true;
        log::debug!("terminal initialized for {}x{} board", game.width(), game.height());
        Ok(())
    }

    fn render(&mut self, game: &Game) -> io::Result<()> {
        if self.last_render.elapsed() < self.target_frame_time {
            return Ok(());
        }
        self.last_render = Instant::now();

        let mut stdout = io::stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        for y in 0..game.height() as i32 {
            for x in 0..game.width() as i32 {
                let color = Self::cell_color(game.color_at(x, y).unwrap_or(Color::Background));
                queue!(stdout, SetBackgroundColor(color), Print("  "))?;
            }
            queue!(stdout, ResetColor, Print("\r\n"))?;
        }

        self.draw_info(game, &mut stdout)?;

        stdout.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen,
            ResetColor
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Option<Input>> {
        if event::poll(Duration::from_millis(10))? {
            return Ok(match event::read()? {
                Event::Key(key) => Self::map_key(key),
                Event::Mouse(mouse) => self.map_mouse(mouse),
                _ => None,
            });
        }
        Ok(None)
    }
}

impl Drop for CliRenderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn sized_renderer() -> CliRenderer {
        let mut renderer = CliRenderer::new();
        renderer.board_size = (30, 30);
        renderer.viewport = ViewportRect::new(0.0, 0.0, 60.0, 30.0);
        renderer
    }

    #[test]
    fn test_mouse_press_maps_two_columns_per_cell() {
        let renderer = sized_renderer();
        assert_eq!(renderer.map_mouse(press(0, 0)), Some(Input::Click { x: 0, y: 0 }));
        assert_eq!(renderer.map_mouse(press(5, 7)), Some(Input::Click { x: 2, y: 7 }));
        assert_eq!(renderer.map_mouse(press(59, 29)), Some(Input::Click { x: 29, y: 29 }));
    }

    #[test]
    fn test_clicks_on_info_lines_are_ignored() {
        let renderer = sized_renderer();
        assert_eq!(renderer.map_mouse(press(3, 31)), None);
        assert_eq!(renderer.map_mouse(press(80, 3)), None);
    }

    #[test]
    fn test_mouse_release_ignored() {
        let renderer = sized_renderer();
        let mut event = press(4, 4);
        event.kind = MouseEventKind::Up(MouseButton::Left);
        assert_eq!(renderer.map_mouse(event), None);
    }

    #[test]
    fn test_key_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(CliRenderer::map_key(key(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(CliRenderer::map_key(key(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(CliRenderer::map_key(key(KeyCode::Char('r'))), Some(Input::Restart));
        assert_eq!(
            CliRenderer::map_key(key(KeyCode::Left)),
            Some(Input::Direction(Direction::Left))
        );
        assert_eq!(CliRenderer::map_key(key(KeyCode::Char('x'))), None);
    }
}
