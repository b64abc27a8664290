pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe (strictly greater)
pub const TRACK_ANIMATION_DURATION: f32 = 0.5; // Duration of the carousel strip slide (seconds)

pub const NAV_HEIGHT: f32 = 64.0;             // Height of the fixed navigation bar
pub const NAV_SCROLLED_THRESHOLD: f32 = 50.0; // Scroll offset after which the bar is drawn "scrolled"
pub const NAV_ACTIVE_OFFSET: f32 = 200.0;     // Look-ahead used to pick the active section
pub const NAV_COLLAPSE_WIDTH: i32 = 768;      // Below this width the links collapse behind a toggle
pub const SMOOTH_SCROLL_DURATION: f32 = 0.6;  // Duration of a nav-link scroll (seconds)
pub const WHEEL_SCROLL_STEP: f32 = 60.0;      // Page units per mouse wheel notch

pub const PARALLAX_SPEED: f32 = 0.5;          // Hero offset per scrolled unit
pub const REVEAL_DURATION: f32 = 0.6;         // Fade-in duration of a section (seconds)
pub const REVEAL_STAGGER: f32 = 0.1;          // Delay between sections revealed in the same frame (seconds)
pub const REVEAL_OFFSET: f32 = 20.0;          // Vertical offset of a hidden section
pub const LAZY_LOAD_MARGIN: f32 = 50.0;       // Distance from the viewport at which textures load

pub const SHAKE_DURATION: f32 = 0.5;          // Passcode field shake after a wrong attempt (seconds)
pub const SHAKE_AMPLITUDE: f32 = 8.0;         // Maximum horizontal jitter of the shake

// SHA-256 of "open sesame"
pub const DEFAULT_PASSCODE_HASH: &str = "41ef4bb0b23661e66301aac36066912dac037827b4ae63a7b1165a5aa93ed4eb";

pub const DEFAULT_CAROUSELS: [&str; 2] = ["lf", "hf"];
pub const ABOUT_SECTION_ID: &str = "about";
pub const LOOSE_SECTION_ID: &str = "work";

pub const PAGE_FADE_DURATION: f32 = 0.5;      // Whole-page fade-in after launch (seconds)
pub const PROGRESS_DURATION: f32 = 0.1;       // Scroll progress bar easing (seconds)
pub const PROGRESS_HEIGHT: i32 = 3;           // Thickness of the scroll progress bar
pub const CURSOR_RADIUS: f32 = 10.0;          // Ring drawn around the pointer
pub const CURSOR_HOVER_SCALE: f32 = 1.5;      // Ring growth over interactive targets
pub const CURSOR_DURATION: f32 = 0.2;         // Ring growth easing (seconds)
pub const MAGNETIC_STRENGTH: f32 = 0.1;       // Fraction of the pointer offset a button follows
pub const TILT_DIVISOR: f32 = 20.0;           // Pointer distance per degree of card tilt
pub const TILT_LIFT: f32 = 8.0;               // Hovered cards rise by this much
