use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use scroll_picker::event::LINE_WHEEL_DELTA;
use scroll_picker::{Input, Item, Picker, PickerOptions};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Pixels per terminal row. Pointer positions are scaled by this so the
/// picker's pixel thresholds keep their meaning.
const CELL_HEIGHT: f32 = 16.0;
const TOP: u16 = 2;
const LEFT: u16 = 4;
const WIDTH: u16 = 20;
const VISIBLE_ROWS: u16 = 5;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("picker.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // Even months are unavailable.
    let items = MONTHS.iter().enumerate().map(|(i, name)| {
        if i % 2 == 1 {
            Item::disabled(*name)
        } else {
            Item::new(*name)
        }
    });
    let options = PickerOptions::new(items)
        .viewport_top(TOP as f32 * CELL_HEIGHT)
        .on_change(|item, index| log::info!("selected {} ({})", item.label, index));
    let mut picker = Picker::new(options, CELL_HEIGHT).map_err(io::Error::other)?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout, &mut picker);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout, picker: &mut Picker) -> io::Result<()> {
    loop {
        let now = Instant::now();
        picker.tick(now);
        draw(stdout, picker, now)?;

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }

        let now = Instant::now();
        match event::read()? {
            CrosstermEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down => {
                    picker.wheel(LINE_WHEEL_DELTA, now);
                }
                KeyCode::Up => {
                    picker.wheel(-LINE_WHEEL_DELTA, now);
                }
                _ => {}
            },
            CrosstermEvent::Mouse(mouse) => {
                if let Some(input) = Input::from_mouse(&mouse, CELL_HEIGHT) {
                    picker.handle(input, now);
                }
            }
            _ => {}
        }
    }
}

fn draw(stdout: &mut io::Stdout, picker: &Picker, now: Instant) -> io::Result<()> {
    let geometry = picker.geometry();
    let translate = picker.rendered_translate(now);

    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    for (index, item) in picker.items().iter().enumerate() {
        let slot = ((translate + index as f32 * geometry.row_height) / CELL_HEIGHT).round();
        if slot < 0.0 || slot >= VISIBLE_ROWS as f32 {
            continue;
        }

        let pad = (WIDTH as usize).saturating_sub(item.display_width()) / 2;
        let text = format!("{}{}", " ".repeat(pad), item.label);
        queue!(stdout, cursor::MoveTo(LEFT, TOP + slot as u16))?;

        if item.disabled {
            queue!(stdout, SetForegroundColor(Color::DarkGrey))?;
        } else if slot as usize == geometry.offset {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            stdout,
            Print(format!("{:<width$}", text, width = WIDTH as usize)),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }

    queue!(
        stdout,
        cursor::MoveTo(LEFT, TOP + VISIBLE_ROWS + 1),
        Print(format!(
            "selected: {}  (drag, wheel or arrows; q to quit)",
            picker.selected_item().label
        ))
    )?;
    stdout.flush()
}
