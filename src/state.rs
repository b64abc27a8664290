#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ViewerState {
    Locked,   // Passcode screen covers the page
    Browsing, // Page, galleries and navigation receive input
    Zoomed,   // Lightbox owns input until dismissed
}
