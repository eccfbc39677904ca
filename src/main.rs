use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

mod constants;
mod deck;
mod gesture;
mod hud;
mod notify;
mod panel;
mod quiz;
mod state;
mod texture_loader;

use crate::constants::*;
use crate::deck::Deck;
use crate::gesture::{Swipe, SwipeTracker};
use crate::hud::{Chrome, MenuLayout, NoticeLayout, WidgetLayout, contains};
use crate::notify::Notifications;
use crate::state::{NavAction, Navigator, slide_at_fraction};

/// Windowed slide-deck viewer
#[derive(Parser, Debug)]
#[command(name = "deckview")]
#[command(about = "Present a directory of slides (images plus optional deck.toml)")]
#[command(version)]
struct Args {
    /// Deck directory
    deck: PathBuf,

    /// Slide to open at (1-based); out of range falls back to the first
    #[arg(long, default_value_t = 1)]
    start: usize,

    /// Window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _ = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .try_init();

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("deckview")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_WARNING);
    // Escape is reserved for closing the menu, not the window
    rl.set_exit_key(None);

    // --- Load Deck ---
    let mut deck = Deck::load(&mut rl, &thread, &args.deck)?;
    rl.set_window_title(&thread, &deck.title);

    let mut nav = Navigator::new(deck.len());
    // --start routes through go_to, so bad values stay on slide 0
    nav.go_to(args.start.saturating_sub(1));
    deck.activate(nav.current());

    let mut swipe = SwipeTracker::new();
    let mut notices = Notifications::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;

        let chrome = Chrome::compute(screen_width, screen_height);
        let menu = MenuLayout::compute(screen_height, deck.len());
        let notice_layout = NoticeLayout::compute(screen_width);

        // --- Input ---
        if let Some(action) = key_action(&rl) {
            dispatch(action, &mut nav, &mut deck);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            swipe.begin(point.x, point.y);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            // A long horizontal drag navigates; anything shorter is a click
            match swipe.finish(point.x, point.y) {
                Some(Swipe::Forward) => dispatch(NavAction::Next, &mut nav, &mut deck),
                Some(Swipe::Backward) => dispatch(NavAction::Previous, &mut nav, &mut deck),
                None => handle_click(
                    point,
                    &mut nav,
                    &mut deck,
                    &mut notices,
                    &chrome,
                    &menu,
                    &notice_layout,
                ),
            }
        }

        notices.update(dt);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(16, 16, 20, 255));
        if let Some(slide) = deck.slides.get(nav.current()) {
            hud::draw_slide(&mut d, slide, screen_width, screen_height);
        }
        hud::draw_chrome(&mut d, &nav, &chrome);
        if nav.menu_open() {
            hud::draw_menu(&mut d, &deck, &menu);
        }
        hud::draw_notice(&mut d, &notices, &notice_layout);
    }

    Ok(())
}

fn key_action(rl: &RaylibHandle) -> Option<NavAction> {
    use raylib::consts::KeyboardKey::*;

    if rl.is_key_pressed(KEY_LEFT) || rl.is_key_pressed(KEY_UP) {
        Some(NavAction::Previous)
    } else if rl.is_key_pressed(KEY_RIGHT) || rl.is_key_pressed(KEY_DOWN) || rl.is_key_pressed(KEY_SPACE) {
        Some(NavAction::Next)
    } else if rl.is_key_pressed(KEY_HOME) {
        Some(NavAction::First)
    } else if rl.is_key_pressed(KEY_END) {
        Some(NavAction::Last)
    } else if rl.is_key_pressed(KEY_ESCAPE) {
        Some(NavAction::CloseMenu)
    } else {
        None
    }
}

fn dispatch(action: NavAction, nav: &mut Navigator, deck: &mut Deck) {
    debug!("nav action: {:?}", action);
    if nav.apply(action) {
        deck.activate(nav.current());
    }
}

/// Route a click to whatever it landed on. First hit wins; clicks that
/// land on nothing interactive are dropped.
fn handle_click(
    point: Vector2,
    nav: &mut Navigator,
    deck: &mut Deck,
    notices: &mut Notifications,
    chrome: &Chrome,
    menu: &MenuLayout,
    notice_layout: &NoticeLayout,
) {
    if notices.current().is_some() && contains(&notice_layout.close, point) {
        notices.dismiss();
        return;
    }

    if nav.menu_open() {
        if contains(&menu.close, point) {
            dispatch(NavAction::CloseMenu, nav, deck);
            return;
        }
        for (i, rect) in menu.items.iter().enumerate() {
            if contains(rect, point) {
                dispatch(NavAction::GoTo(i), nav, deck);
                dispatch(NavAction::CloseMenu, nav, deck);
                return;
            }
        }
        if contains(&menu.panel, point) {
            return; // clicks inside the panel stop here
        }
    }

    if contains(&chrome.bar, point) {
        if contains(&chrome.prev, point) && !nav.at_first() {
            dispatch(NavAction::Previous, nav, deck);
        } else if contains(&chrome.next, point) && !nav.at_last() {
            dispatch(NavAction::Next, nav, deck);
        } else if contains(&chrome.menu_button, point) {
            dispatch(NavAction::ToggleMenu, nav, deck);
        }
        return;
    }

    if contains(&chrome.progress_bar, point) {
        let fraction = (point.x - chrome.progress_bar.x) / chrome.progress_bar.width;
        let target = slide_at_fraction(fraction, nav.total());
        dispatch(NavAction::GoTo(target), nav, deck);
        return;
    }

    // Widgets on the active slide
    if let Some(slide) = deck.active_slide_mut() {
        let widgets = WidgetLayout::compute(slide);

        if let (Some(details), Some(rect)) = (slide.details.as_mut(), widgets.details_button.as_ref()) {
            if contains(rect, point) {
                details.toggle();
                return;
            }
        }

        if let (Some(quiz), Some(rect)) = (slide.quiz.as_mut(), widgets.quiz_button.as_ref()) {
            if contains(rect, point) {
                quiz.toggle();
                return;
            }
            for (i, option_rect) in widgets.quiz_options.iter().enumerate() {
                if contains(option_rect, point) {
                    if let Some((message, kind)) = quiz.select(i) {
                        notices.show(message, kind);
                    }
                    return;
                }
            }
        }
    }
}
