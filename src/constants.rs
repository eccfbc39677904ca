pub const WINDOW_WIDTH: i32 = 1280;            // Default window width
pub const WINDOW_HEIGHT: i32 = 720;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const SWIPE_THRESHOLD: f32 = 50.0;         // Minimum horizontal drag to count as a swipe (pixels)

pub const NOTIFY_DURATION: f32 = 5.0;          // Time a notification stays on screen (seconds)
pub const NOTIFY_FADE: f32 = 0.3;              // Fade-out length at the end of that time (seconds)

pub const CHROME_HEIGHT: f32 = 56.0;           // Bottom navigation bar height
pub const PROGRESS_HEIGHT: f32 = 8.0;          // Progress bar height (top edge of the chrome bar)
pub const NAV_BUTTON_WIDTH: f32 = 96.0;        // Prev/Next button width
pub const MENU_WIDTH: f32 = 320.0;             // Slide-index menu overlay width
pub const MENU_ITEM_HEIGHT: f32 = 36.0;        // One row in the menu overlay
pub const NOTIFY_WIDTH: f32 = 400.0;           // Notification box width
pub const DIMMED_ALPHA: f32 = 0.5;             // Opacity for disabled nav buttons
