/// Image carousel on the detail page.
///
/// `selected` is 1-based and always within `1..=images.len()`. With no images
/// there is nothing to select and it is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    selected: Option<usize>,
}

impl Gallery {
    /// Adopts a newly loaded product's images and goes back to the first one.
    ///
    /// Called on every product change, even when the new product shares the
    /// previous one's images.
    pub fn reset(&mut self, images: &[String]) {
        self.images = images.to_vec();
        self.selected = if self.images.is_empty() { None } else { Some(1) };
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn current_image(&self) -> Option<&str> {
        let index = self.selected?.checked_sub(1)?;
        self.images.get(index).map(String::as_str)
    }

    /// Thumbnail click. Positions outside `1..=images.len()` are ignored.
    pub fn select(&mut self, position: usize) -> bool {
        if position == 0 || position > self.images.len() {
            return false;
        }
        self.selected = Some(position);
        true
    }

    /// Thumbnails are only worth showing when there is something to switch to.
    pub fn shows_thumbnails(&self) -> bool {
        self.images.len() > 1
    }

    /// Horizontal translation of the image strip for a slide of `display_width` pixels.
    pub fn slide_offset(&self, display_width: u32) -> i64 {
        let steps = self.selected.map_or(0, |selected| selected.saturating_sub(1));
        -(i64::try_from(steps).unwrap_or(i64::MAX) * i64::from(display_width))
    }
}
