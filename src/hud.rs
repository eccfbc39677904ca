use raylib::prelude::*;

use crate::constants::*;
use crate::deck::{Deck, Slide};
use crate::notify::{Notifications, NotifyKind};
use crate::quiz::OptionMark;
use crate::state::Navigator;

const TITLE_SIZE: i32 = 40;
const BODY_SIZE: i32 = 20;
const BODY_LINE_HEIGHT: f32 = 28.0;
const WIDGET_BUTTON_HEIGHT: f32 = 34.0;
const OPTION_HEIGHT: f32 = 34.0;
const MARGIN: f32 = 40.0;

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

fn faded(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

fn kind_colors(kind: NotifyKind) -> (Color, Color) {
    // (background, text) per kind
    match kind {
        NotifyKind::Success => (Color::new(212, 237, 218, 255), Color::new(21, 87, 36, 255)),
        NotifyKind::Error => (Color::new(248, 215, 218, 255), Color::new(114, 28, 36, 255)),
        NotifyKind::Info => (Color::new(209, 236, 241, 255), Color::new(12, 84, 96, 255)),
    }
}

/// Bottom chrome: prev/next buttons, counter, menu toggle, and the
/// clickable progress bar above them.
pub struct Chrome {
    pub bar: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub menu_button: Rectangle,
    pub progress_bar: Rectangle,
}

impl Chrome {
    pub fn compute(screen_width: f32, screen_height: f32) -> Chrome {
        let bar = Rectangle::new(
            0.0,
            screen_height - CHROME_HEIGHT,
            screen_width,
            CHROME_HEIGHT,
        );
        let button_y = bar.y + 10.0;
        let button_h = CHROME_HEIGHT - 20.0;
        Chrome {
            bar,
            prev: Rectangle::new(16.0, button_y, NAV_BUTTON_WIDTH, button_h),
            next: Rectangle::new(
                screen_width - NAV_BUTTON_WIDTH - 16.0,
                button_y,
                NAV_BUTTON_WIDTH,
                button_h,
            ),
            menu_button: Rectangle::new(NAV_BUTTON_WIDTH + 32.0, button_y, 80.0, button_h),
            progress_bar: Rectangle::new(
                0.0,
                bar.y - PROGRESS_HEIGHT,
                screen_width,
                PROGRESS_HEIGHT,
            ),
        }
    }
}

/// Slide-index menu overlay, when open.
pub struct MenuLayout {
    pub panel: Rectangle,
    pub close: Rectangle,
    pub items: Vec<Rectangle>,
}

impl MenuLayout {
    pub fn compute(screen_height: f32, slide_count: usize) -> MenuLayout {
        let panel = Rectangle::new(0.0, 0.0, MENU_WIDTH, screen_height - CHROME_HEIGHT);
        let close = Rectangle::new(panel.width - 40.0, 12.0, 28.0, 28.0);
        let items = (0..slide_count)
            .map(|i| {
                Rectangle::new(
                    8.0,
                    52.0 + i as f32 * MENU_ITEM_HEIGHT,
                    panel.width - 16.0,
                    MENU_ITEM_HEIGHT - 4.0,
                )
            })
            .collect();
        MenuLayout { panel, close, items }
    }
}

/// Interactive regions of the active slide's widgets.
pub struct WidgetLayout {
    pub details_button: Option<Rectangle>,
    pub quiz_button: Option<Rectangle>,
    pub quiz_options: Vec<Rectangle>,
}

impl WidgetLayout {
    pub fn compute(slide: &Slide) -> WidgetLayout {
        let mut y = widgets_top(slide);
        let mut layout = WidgetLayout {
            details_button: None,
            quiz_button: None,
            quiz_options: Vec::new(),
        };

        if let Some(details) = &slide.details {
            layout.details_button = Some(Rectangle::new(MARGIN, y, 320.0, WIDGET_BUTTON_HEIGHT));
            y += WIDGET_BUTTON_HEIGHT + 8.0;
            if details.expanded {
                y += details.text.lines().count() as f32 * BODY_LINE_HEIGHT + 16.0;
            }
        }

        if let Some(quiz) = &slide.quiz {
            layout.quiz_button = Some(Rectangle::new(MARGIN, y, 320.0, WIDGET_BUTTON_HEIGHT));
            y += WIDGET_BUTTON_HEIGHT + 8.0;
            if quiz.open {
                y += BODY_LINE_HEIGHT + 8.0; // question line
                for _ in &quiz.options {
                    layout
                        .quiz_options
                        .push(Rectangle::new(MARGIN + 16.0, y, 420.0, OPTION_HEIGHT));
                    y += OPTION_HEIGHT + 6.0;
                }
            }
        }

        layout
    }
}

fn widgets_top(slide: &Slide) -> f32 {
    let body_lines = slide.body.as_deref().map_or(0, |b| b.lines().count());
    MARGIN + TITLE_SIZE as f32 + 24.0 + body_lines as f32 * BODY_LINE_HEIGHT + 16.0
}

/// Notification box, pinned top-right.
pub struct NoticeLayout {
    pub panel: Rectangle,
    pub close: Rectangle,
}

impl NoticeLayout {
    pub fn compute(screen_width: f32) -> NoticeLayout {
        let panel = Rectangle::new(screen_width - NOTIFY_WIDTH - 20.0, 20.0, NOTIFY_WIDTH, 64.0);
        let close = Rectangle::new(panel.x + panel.width - 36.0, panel.y + 12.0, 24.0, 24.0);
        NoticeLayout { panel, close }
    }
}

// --- Drawing ---

pub fn draw_slide(d: &mut RaylibDrawHandle, slide: &Slide, screen_width: f32, screen_height: f32) {
    let content_height = screen_height - CHROME_HEIGHT - PROGRESS_HEIGHT;

    if let Some(texture) = &slide.texture {
        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scale = (screen_width / tex_width).min(content_height / tex_height);
        let drawn_width = tex_width * scale;
        let drawn_height = tex_height * scale;
        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - drawn_width) / 2.0,
                (content_height - drawn_height) / 2.0,
                drawn_width,
                drawn_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    d.draw_text(&slide.title, MARGIN as i32, MARGIN as i32, TITLE_SIZE, Color::RAYWHITE);

    if let Some(body) = &slide.body {
        let mut y = MARGIN + TITLE_SIZE as f32 + 24.0;
        for line in body.lines() {
            d.draw_text(line, MARGIN as i32, y as i32, BODY_SIZE, Color::LIGHTGRAY);
            y += BODY_LINE_HEIGHT;
        }
    }

    draw_widgets(d, slide);
}

fn draw_widgets(d: &mut RaylibDrawHandle, slide: &Slide) {
    let layout = WidgetLayout::compute(slide);

    if let (Some(details), Some(button)) = (&slide.details, &layout.details_button) {
        draw_button(d, button, &details.button_label(), Color::DARKBLUE, 1.0);
        if details.expanded {
            let mut y = button.y + button.height + 12.0;
            for line in details.text.lines() {
                d.draw_text(line, (MARGIN + 8.0) as i32, y as i32, BODY_SIZE, Color::LIGHTGRAY);
                y += BODY_LINE_HEIGHT;
            }
        }
    }

    if let (Some(quiz), Some(button)) = (&slide.quiz, &layout.quiz_button) {
        draw_button(d, button, quiz.trigger_label(), Color::DARKPURPLE, 1.0);
        if quiz.open {
            let question_y = button.y + button.height + 12.0;
            d.draw_text(&quiz.question, MARGIN as i32, question_y as i32, BODY_SIZE, Color::RAYWHITE);
            for (i, rect) in layout.quiz_options.iter().enumerate() {
                let (background, label_color) = match quiz.mark(i) {
                    OptionMark::Correct => (Color::new(21, 87, 36, 255), Color::RAYWHITE),
                    OptionMark::Incorrect => (Color::new(114, 28, 36, 255), Color::RAYWHITE),
                    OptionMark::Neutral => (Color::new(60, 60, 70, 255), Color::LIGHTGRAY),
                };
                let alpha = if quiz.answered() { 0.8 } else { 1.0 };
                d.draw_rectangle_rec(*rect, faded(background, alpha));
                d.draw_text(
                    &quiz.options[i].label,
                    (rect.x + 10.0) as i32,
                    (rect.y + 8.0) as i32,
                    BODY_SIZE,
                    faded(label_color, alpha),
                );
            }
        }
    }
}

pub fn draw_chrome(d: &mut RaylibDrawHandle, nav: &Navigator, chrome: &Chrome) {
    d.draw_rectangle_rec(chrome.bar, Color::new(24, 24, 30, 255));

    // Progress: track plus fill proportional to position
    d.draw_rectangle_rec(chrome.progress_bar, Color::new(50, 50, 60, 255));
    let fill = Rectangle::new(
        chrome.progress_bar.x,
        chrome.progress_bar.y,
        chrome.progress_bar.width * nav.progress_percent() / 100.0,
        chrome.progress_bar.height,
    );
    d.draw_rectangle_rec(fill, Color::SKYBLUE);

    let prev_alpha = if nav.at_first() { DIMMED_ALPHA } else { 1.0 };
    let next_alpha = if nav.at_last() { DIMMED_ALPHA } else { 1.0 };
    draw_button(d, &chrome.prev, "< Prev", Color::DARKGRAY, prev_alpha);
    draw_button(d, &chrome.next, "Next >", Color::DARKGRAY, next_alpha);
    draw_button(d, &chrome.menu_button, "Menu", Color::DARKGRAY, 1.0);

    let counter = nav.counter_text();
    let width = d.measure_text(&counter, BODY_SIZE);
    d.draw_text(
        &counter,
        (chrome.bar.width / 2.0) as i32 - width / 2,
        (chrome.bar.y + 18.0) as i32,
        BODY_SIZE,
        Color::RAYWHITE,
    );
}

pub fn draw_menu(d: &mut RaylibDrawHandle, deck: &Deck, layout: &MenuLayout) {
    d.draw_rectangle_rec(layout.panel, Color::new(18, 18, 24, 240));
    d.draw_text("Slides", 16, 18, BODY_SIZE, Color::RAYWHITE);
    draw_button(d, &layout.close, "x", Color::DARKGRAY, 1.0);

    for (i, rect) in layout.items.iter().enumerate() {
        let slide = &deck.slides[i];
        if slide.active {
            d.draw_rectangle_rec(*rect, Color::new(70, 110, 160, 255));
        }
        let label = format!("{}. {}", i + 1, slide.title);
        let color = if slide.active { Color::RAYWHITE } else { Color::LIGHTGRAY };
        d.draw_text(&label, (rect.x + 8.0) as i32, (rect.y + 8.0) as i32, BODY_SIZE, color);
    }
}

pub fn draw_notice(d: &mut RaylibDrawHandle, notices: &Notifications, layout: &NoticeLayout) {
    let Some(notice) = notices.current() else {
        return;
    };
    let alpha = notices.alpha();
    let (background, text) = kind_colors(notice.kind);
    d.draw_rectangle_rec(layout.panel, faded(background, alpha));
    let message = format!("{} {}", notice.kind.icon(), notice.message);
    d.draw_text(
        &message,
        (layout.panel.x + 14.0) as i32,
        (layout.panel.y + 22.0) as i32,
        BODY_SIZE,
        faded(text, alpha),
    );
    d.draw_text(
        "x",
        (layout.close.x + 7.0) as i32,
        (layout.close.y + 3.0) as i32,
        BODY_SIZE,
        faded(text, alpha),
    );
}

fn draw_button(
    d: &mut RaylibDrawHandle,
    rect: &Rectangle,
    label: &str,
    background: Color,
    alpha: f32,
) {
    d.draw_rectangle_rec(*rect, faded(background, alpha));
    d.draw_rectangle_lines_ex(*rect, 1.0, faded(Color::GRAY, alpha));
    d.draw_text(
        label,
        (rect.x + 10.0) as i32,
        (rect.y + (rect.height - BODY_SIZE as f32) / 2.0) as i32,
        BODY_SIZE,
        faded(Color::RAYWHITE, alpha),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_edges() {
        let rect = Rectangle::new(10.0, 10.0, 100.0, 50.0);
        assert!(contains(&rect, Vector2::new(10.0, 10.0)));
        assert!(contains(&rect, Vector2::new(109.0, 59.0)));
        assert!(!contains(&rect, Vector2::new(110.0, 10.0)));
        assert!(!contains(&rect, Vector2::new(9.0, 10.0)));
    }

    #[test]
    fn chrome_spans_the_window() {
        let chrome = Chrome::compute(1280.0, 720.0);
        assert_eq!(chrome.progress_bar.width, 1280.0);
        assert_eq!(chrome.bar.y, 720.0 - CHROME_HEIGHT);
        assert!(chrome.next.x + chrome.next.width <= 1280.0);
    }

    #[test]
    fn menu_has_one_item_rect_per_slide() {
        let layout = MenuLayout::compute(720.0, 7);
        assert_eq!(layout.items.len(), 7);
        assert!(layout.items.iter().all(|r| r.x >= layout.panel.x
            && r.x + r.width <= layout.panel.x + layout.panel.width));
    }

    #[test]
    fn faded_scales_alpha_only() {
        let c = faded(Color::new(10, 20, 30, 200), 0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 100));
    }
}
