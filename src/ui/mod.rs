//! Local view state for the storefront pages. None of it touches the network.

mod gallery;
mod quantity;

pub use gallery::Gallery;
pub use quantity::Quantity;

/// Open/closed state of the mobile navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
