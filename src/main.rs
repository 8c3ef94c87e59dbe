// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/u64->f32 in gauge calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 for pixel coordinates
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Menu system demo in a simulator window.
//!
//! Drives the menu widget with a keyboard standing in for the device's
//! keypad, next to the home screen dashboard (CPU/RAM gauges, volume bar)
//! and the header/footer chrome:
//!
//! - `1` / `2` / `3`: the three select keys, top to bottom
//! - `Up` / `Down`: previous / next page (or scroll, inside an application)
//! - `Left`: back
//! - `H`: home
//!
//! The menu tree is the classic demo shape: a headless home menu of three
//! compact buttons, a headed main menu with a settings sub-menu, and an
//! "Apps" item that opens a notification viewer application. The gauges are
//! fed by a sampler thread reading `/proc`, the original's system-stats
//! polling moved off the frame loop.

use std::cell::Cell;
use std::fmt::Write as _;
use std::fs;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{Local, Timelike};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String as HeaplessString;
use log::info;

use podmenu::animations::fade_color;
use podmenu::colors::{
    BLACK, CPU_GREEN, CRITICAL_RED, GREEN, NOTICE_YELLOW, PRIMARY, RAM_ORANGE, WARNING_AMBER,
    WHITE, YELLOW,
};
use podmenu::config::{
    FRAME_TIME_HIGH, FRAME_TIME_LOW, MENU_ITEM_GAP, MENU_ITEM_STRIDE, MENU_WIDTH_COLLAPSED,
    PAGE_AREA_HEIGHT, PAGE_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use podmenu::menu::types::ItemsSource;
use podmenu::styles::{ICON_FONT, LABEL_FONT, MIDDLE_LEFT};
use podmenu::widgets::{draw_footer, draw_gauge, draw_header, draw_menu_item, draw_volume_bar};
use podmenu::{
    ActionResult, Application, Button, FpsController, FrameBuffer, Item, Menu, MenuWidget,
    dispatch_button,
};

// =============================================================================
// Demo Layout
// =============================================================================

/// Page area between header and footer.
const PAGE_AREA: Rectangle = Rectangle::new(
    Point::new(0, 24),
    Size::new(SCREEN_WIDTH, PAGE_AREA_HEIGHT),
);

/// Menu column while the home screen dashboard is visible.
const MENU_COLUMN: Rectangle = Rectangle::new(
    Point::new(0, 24),
    Size::new(MENU_WIDTH_COLLAPSED, PAGE_AREA_HEIGHT),
);

/// Dashboard gauge geometry, centered in the column right of the menu.
const GAUGE_RADIUS: u32 = 34;
const CPU_GAUGE_CENTER: Point = Point::new(157, 70);
const RAM_GAUGE_CENTER: Point = Point::new(157, 162);

/// Volume bar in the rightmost column.
const VOLUME_BAR: Rectangle = Rectangle::new(Point::new(221, 34), Size::new(12, 172));
const VOLUME_LEVEL: f32 = 40.0;

/// Footer status glyphs, right to left: camera, lan, mic off, bluetooth,
/// wifi off.
const STATUS_GLYPHS: [(char, Rgb565); 5] = [
    ('c', GREEN),
    ('n', WHITE),
    ('m', WHITE),
    ('b', WHITE),
    ('w', WHITE),
];

// =============================================================================
// Frame Pacing
// =============================================================================

/// Lets the widget steer the loop's frame period: fast while transitions
/// animate, slow while the screen is idle.
struct FramePacer(Rc<Cell<Duration>>);

impl FpsController for FramePacer {
    fn activate_high_fps_mode(&mut self) {
        self.0.set(FRAME_TIME_HIGH);
    }

    fn activate_low_fps_mode(&mut self) {
        self.0.set(FRAME_TIME_LOW);
    }
}

// =============================================================================
// System Load Sampling
// =============================================================================

/// One sample for the home screen gauges.
#[derive(Clone, Copy, Default)]
struct SystemLoad {
    cpu_percent: f32,
    ram_percent: f32,
}

/// Cumulative (idle, total) jiffies from the first line of `/proc/stat`.
fn read_cpu_times() -> Option<(u64, u64)> {
    let stat = fs::read_to_string("/proc/stat").ok()?;
    let line = stat.lines().next()?;
    let mut fields = line.split_whitespace();
    if fields.next()? != "cpu" {
        return None;
    }
    let values: Vec<u64> = fields.filter_map(|field| field.parse().ok()).collect();
    if values.len() < 5 {
        return None;
    }
    // idle + iowait count as idle time
    Some((values[3] + values[4], values.iter().sum()))
}

fn cpu_percent(previous: (u64, u64), current: (u64, u64)) -> f32 {
    let (idle_a, total_a) = previous;
    let (idle_b, total_b) = current;
    let total = total_b.saturating_sub(total_a);
    if total == 0 {
        return 0.0;
    }
    let busy = total.saturating_sub(idle_b.saturating_sub(idle_a));
    busy as f32 / total as f32 * 100.0
}

fn read_ram_percent() -> Option<f32> {
    let meminfo = fs::read_to_string("/proc/meminfo").ok()?;
    let mut total = None;
    let mut available = None;
    for line in meminfo.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            total = parse_kib(rest);
        } else if let Some(rest) = line.strip_prefix("MemAvailable:") {
            available = parse_kib(rest);
        }
    }
    let (total, available) = (total?, available?);
    if total == 0 {
        return None;
    }
    Some((1.0 - available as f32 / total as f32) * 100.0)
}

fn parse_kib(rest: &str) -> Option<u64> {
    rest.split_whitespace().next()?.parse().ok()
}

/// Sample CPU and RAM once a second on a worker thread. The receiver side
/// just keeps the latest value; the thread exits when the receiver is gone.
fn spawn_load_sampler() -> mpsc::Receiver<SystemLoad> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut previous = read_cpu_times();
        loop {
            thread::sleep(Duration::from_secs(1));
            let current = read_cpu_times();
            let cpu = match (previous, current) {
                (Some(a), Some(b)) => cpu_percent(a, b),
                _ => 0.0,
            };
            previous = current;
            let load = SystemLoad {
                cpu_percent: cpu,
                ram_percent: read_ram_percent().unwrap_or(0.0),
            };
            if tx.send(load).is_err() {
                return;
            }
        }
    });
    rx
}

// =============================================================================
// Notification Viewer Application
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Importance {
    Low,
    Medium,
    High,
    Critical,
}

impl Importance {
    const fn color(self) -> Rgb565 {
        match self {
            Importance::Low => PRIMARY,
            Importance::Medium => NOTICE_YELLOW,
            Importance::High => WARNING_AMBER,
            Importance::Critical => CRITICAL_RED,
        }
    }

    const fn glyph(self) -> &'static str {
        match self {
            Importance::Low => "-",
            Importance::Medium => "i",
            Importance::High => "^",
            Importance::Critical => "!",
        }
    }
}

/// The demo notifications, cycled through by the "Apps" item.
const NOTIFICATIONS: [(&str, &str, Importance); 4] = [
    (
        "Low priority",
        "Something happened but it is not important and this content is very \
         long since we need a very long content to check the scrollability of \
         the widget",
        Importance::Low,
    ),
    (
        "Medium priority",
        "Something happened and it is somehow important",
        Importance::Medium,
    ),
    (
        "High priority",
        "Something happened and it is important",
        Importance::High,
    ),
    (
        "Critical priority",
        "Something happened and it is critically important",
        Importance::Critical,
    ),
];

const NOTIFICATION_LINE_HEIGHT: i32 = 12;
const NOTIFICATION_SCROLL_STEP: i32 = 24;
const NOTIFICATION_COLUMNS: usize = 36;

/// Top of the scrollable body, below the subject row.
const NOTIFICATION_BODY_TOP: i32 = 36;

/// The dismiss button occupies the bottom item slot, so the body ends where
/// that slot begins.
const NOTIFICATION_BUTTON_TOP: i32 = (MENU_ITEM_GAP + 2 * MENU_ITEM_STRIDE) as i32;

const NOTIFICATION_BODY_HEIGHT: i32 = NOTIFICATION_BUTTON_TOP - NOTIFICATION_BODY_TOP;

/// Full-screen notification viewer: importance-colored accent, the subject
/// line, a scrollable body, and a compact dismiss button in the bottom slot.
struct NotificationApp {
    title: String,
    subject: String,
    lines: Vec<String>,
    importance: Importance,
    scroll: i32,
    dismissed: Rc<Cell<bool>>,
}

impl NotificationApp {
    fn new(index: usize) -> Self {
        let (subject, content, importance) = NOTIFICATIONS[index % NOTIFICATIONS.len()];
        Self {
            title: format!("Notification ({}/{})", index % NOTIFICATIONS.len() + 1, NOTIFICATIONS.len()),
            subject: subject.to_owned(),
            lines: wrap_text(content, NOTIFICATION_COLUMNS),
            importance,
            scroll: 0,
            dismissed: Rc::new(Cell::new(false)),
        }
    }

    fn max_scroll(&self) -> i32 {
        let text_height = self.lines.len() as i32 * NOTIFICATION_LINE_HEIGHT;
        (text_height - NOTIFICATION_BODY_HEIGHT).max(0)
    }

    fn dismiss_item(&self) -> Item {
        let dismissed = Rc::clone(&self.dismissed);
        Item::action("", move || {
            dismissed.set(true);
            ActionResult::Nothing
        })
        .with_icon("x")
        .with_color(BLACK)
        .with_background(self.importance.color())
        .short()
    }
}

impl Application for NotificationApp {
    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn draw(&self, frame: &mut FrameBuffer, area: Rectangle, fade: u8) {
        let accent = fade_color(self.importance.color(), fade);
        let text_color = fade_color(WHITE, fade);

        frame
            .fill_solid(
                &Rectangle::new(area.top_left, Size::new(area.size.width, 4)),
                accent,
            )
            .ok();

        let mut clipped = frame.clipped(&area);
        Text::with_text_style(
            self.importance.glyph(),
            area.top_left + Point::new(8, 18),
            MonoTextStyle::new(ICON_FONT, accent),
            MIDDLE_LEFT,
        )
        .draw(&mut clipped)
        .ok();
        Text::with_text_style(
            &self.subject,
            area.top_left + Point::new(26, 18),
            MonoTextStyle::new(LABEL_FONT, accent),
            MIDDLE_LEFT,
        )
        .draw(&mut clipped)
        .ok();

        let body_top = area.top_left.y + NOTIFICATION_BODY_TOP;
        let body = Rectangle::new(
            Point::new(area.top_left.x, body_top),
            Size::new(area.size.width, NOTIFICATION_BODY_HEIGHT as u32),
        );
        let mut body_view = frame.clipped(&body);
        let style = MonoTextStyle::new(LABEL_FONT, text_color);
        for (row, line) in self.lines.iter().enumerate() {
            let y = body_top + NOTIFICATION_LINE_HEIGHT / 2 + row as i32 * NOTIFICATION_LINE_HEIGHT
                - self.scroll;
            Text::with_text_style(
                line,
                Point::new(area.top_left.x + 8, y),
                style,
                MIDDLE_LEFT,
            )
            .draw(&mut body_view)
            .ok();
        }

        let mut button_view = frame.clipped(&area);
        draw_menu_item(
            &mut button_view,
            Point::new(area.top_left.x + 2, area.top_left.y + NOTIFICATION_BUTTON_TOP),
            area.size.width.saturating_sub(4),
            &self.dismiss_item(),
            fade,
        );
    }

    fn go_up(&mut self) {
        self.scroll = (self.scroll - NOTIFICATION_SCROLL_STEP).max(0);
    }

    fn go_down(&mut self) {
        self.scroll = (self.scroll + NOTIFICATION_SCROLL_STEP).min(self.max_scroll());
    }

    fn item(&self, slot: usize) -> Option<Item> {
        (slot == PAGE_SIZE - 1).then(|| self.dismiss_item())
    }

    fn is_closed(&self) -> bool {
        self.dismissed.get()
    }
}

/// Greedy word wrap. Words longer than `columns` get a line of their own
/// and are clipped visually.
fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > columns {
            lines.push(std::mem::take(&mut line));
        }
        if line.is_empty() {
            line.push_str(word);
        } else {
            line.push(' ');
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// =============================================================================
// Demo Menu Tree
// =============================================================================

fn settings_menu() -> Menu {
    Menu::headed(
        "Settings",
        "Please choose",
        "This is sub heading",
        vec![
            Item::action("WiFi", || {
                info!("WiFi selected");
                ActionResult::Nothing
            })
            .with_icon("w"),
            Item::action("Bluetooth", || {
                info!("Bluetooth selected");
                ActionResult::Nothing
            })
            .with_icon("b"),
            Item::action("Audio", || {
                info!("Audio selected");
                ActionResult::Nothing
            })
            .with_icon("v"),
        ],
    )
}

fn main_menu() -> Menu {
    // Each press of "Apps" opens the next demo notification
    let next_notification = Rc::new(Cell::new(0usize));
    Menu::headed(
        "Main",
        "What are you going to do?",
        "Choose from the options",
        vec![
            Item::sub_menu("Settings", settings_menu()).with_icon("*"),
            Item::application("Apps", move || {
                let index = next_notification.get();
                next_notification.set(index + 1);
                Box::new(NotificationApp::new(index))
            })
            .with_icon("#"),
            Item::action("About", || {
                info!("About selected");
                ActionResult::Nothing
            })
            .with_icon("i"),
        ],
    )
}

fn home_menu() -> Menu {
    Menu::headless(
        "Dashboard",
        vec![
            Item::sub_menu("", main_menu()).with_icon("=").short(),
            Item::sub_menu(
                "",
                Menu::headless("Notifications", ItemsSource::lazy(Vec::new)),
            )
            .with_icon("i")
            .with_color(YELLOW)
            .short(),
            Item::action("Turn off", || {
                info!("Turning off");
                ActionResult::Nothing
            })
            .with_icon("o")
            .short(),
        ],
    )
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> Result<()> {
    env_logger::init();

    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Pod Menu", &output_settings);

    display.clear(BLACK)?;
    window.update(&display);

    // Frame period shared with the widget's transition engine
    let frame_period = Rc::new(Cell::new(FRAME_TIME_LOW));
    let mut widget = MenuWidget::with_fps_controller(Box::new(FramePacer(Rc::clone(&frame_period))));
    widget.set_root_menu(home_menu());

    let load_rx = spawn_load_sampler();
    let mut load = SystemLoad::default();

    let mut frame = FrameBuffer::new();
    let mut last_tick = Instant::now();

    info!("demo started");

    loop {
        let frame_start = Instant::now();

        // ======================================================================
        // Input
        // ======================================================================

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let button = match keycode {
                        Keycode::Num1 => Some(Button::TopLeft),
                        Keycode::Num2 => Some(Button::MiddleLeft),
                        Keycode::Num3 => Some(Button::BottomLeft),
                        Keycode::Up => Some(Button::Up),
                        Keycode::Down => Some(Button::Down),
                        Keycode::Left => Some(Button::Back),
                        Keycode::H => Some(Button::Home),
                        _ => None,
                    };
                    if let Some(button) = button {
                        dispatch_button(&mut widget, button);
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // State Updates
        // ======================================================================

        while let Ok(sample) = load_rx.try_recv() {
            load = sample;
        }

        let dt = last_tick.elapsed();
        last_tick = Instant::now();
        widget.tick(dt);

        // ======================================================================
        // Drawing
        // ======================================================================

        frame.clear_to(BLACK);

        let depth = widget.depth();
        if depth == 0 {
            widget.draw(&mut frame, MENU_COLUMN);
            draw_gauge(
                &mut frame,
                CPU_GAUGE_CENTER,
                GAUGE_RADIUS,
                load.cpu_percent,
                "CPU",
                CPU_GREEN,
            );
            draw_gauge(
                &mut frame,
                RAM_GAUGE_CENTER,
                GAUGE_RADIUS,
                load.ram_percent,
                "RAM",
                RAM_ORANGE,
            );
            draw_volume_bar(&mut frame, VOLUME_BAR, VOLUME_LEVEL);
        } else {
            widget.draw(&mut frame, PAGE_AREA);
        }

        let title = widget.title();
        draw_header(&mut frame, title.as_deref());

        let now = Local::now();
        let mut clock: HeaplessString<8> = HeaplessString::new();
        let _ = write!(clock, "{:02}:{:02}", now.hour(), now.minute());
        draw_footer(&mut frame, depth, &clock, &STATUS_GLYPHS);

        frame.present(&mut display)?;
        window.update(&display);

        // ======================================================================
        // Frame Pacing
        // ======================================================================

        let elapsed = frame_start.elapsed();
        let period = frame_period.get();
        if elapsed < period {
            thread::sleep(period - elapsed);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
