/// Project gallery state: the image set, the carousel cursor and the
/// per-image fallback cells.
///
/// None of this touches the UI directly; `ui::modal` reads it and the
/// update loop mutates it in response to messages.

use iced::widget::image::Handle;

use super::data::Project;

/// Images used when a project ships no gallery of its own.
/// The project's cover is shown first, followed by the first three of these.
pub const DEFAULT_GALLERY: [&str; 4] = [
    "projects/deen-app.jpg",
    "projects/e-invoice.jpg",
    "projects/business-directory.jpg",
    "projects/stock-management.jpg",
];

/// Ordered, never-empty list of image references for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImageSet {
    images: Vec<String>,
}

#[allow(clippy::len_without_is_empty)]
impl GalleryImageSet {
    /// Build a set from a first image and any number of followers.
    /// Taking the first image separately makes an empty set unrepresentable.
    pub fn new(first: impl Into<String>, rest: impl IntoIterator<Item = String>) -> Self {
        let mut images = vec![first.into()];
        images.extend(rest);
        Self { images }
    }

    /// Gallery for a project, substituting the default set when the
    /// project has none (or an empty one)
    pub fn for_project(project: &Project) -> Self {
        match project.gallery.as_deref() {
            Some([first, rest @ ..]) => Self::new(first.clone(), rest.iter().cloned()),
            _ => Self::new(
                project.image.clone(),
                DEFAULT_GALLERY[..3].iter().map(|s| s.to_string()),
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }
}

/// Bounded circular counter over a gallery of `len` images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    cursor: usize,
}

impl Carousel {
    /// Start at the first image. A zero length is treated as one.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            cursor: 0,
        }
    }

    pub fn for_set(set: &GalleryImageSet) -> Self {
        Self::new(set.len())
    }

    /// Index of the image on screen
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Navigation buttons, counter and dots only exist for multi-image galleries
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.cursor = (self.cursor + self.len - 1) % self.len;
    }

    /// Select an image directly; out-of-range indices clamp to the last image
    pub fn jump_to(&mut self, index: usize) {
        self.cursor = index.min(self.len - 1);
    }
}

/// Load state of one rendered image
#[derive(Debug, Clone, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Displayed(Handle),
    Failed,
}

/// One image slot with placeholder fallback.
///
/// `Failed` is terminal: once an image fails it stays a placeholder
/// for the lifetime of the cell.
#[derive(Debug, Clone)]
pub struct ImageCell {
    pub src: String,
    pub caption: String,
    state: ImageLoadState,
}

impl ImageCell {
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: caption.into(),
            state: ImageLoadState::Loading,
        }
    }

    pub fn state(&self) -> &ImageLoadState {
        &self.state
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ImageLoadState::Failed)
    }

    /// Decoded image arrived. Ignored once the cell has failed.
    pub fn loaded(&mut self, handle: Handle) {
        if !self.is_failed() {
            self.state = ImageLoadState::Displayed(handle);
        }
    }

    /// Load-failure signal; switches permanently to the placeholder
    pub fn fail(&mut self) {
        self.state = ImageLoadState::Failed;
    }
}

/// Everything the project modal owns while it is open
#[derive(Debug, Clone)]
pub struct GalleryModal {
    /// Index into `Portfolio::projects`
    pub project: usize,
    /// Distinguishes load results of this opening from earlier ones
    pub session: u64,
    pub images: GalleryImageSet,
    pub carousel: Carousel,
    pub cells: Vec<ImageCell>,
}

impl GalleryModal {
    pub fn open(project_index: usize, project: &Project, session: u64) -> Self {
        let images = GalleryImageSet::for_project(project);
        let carousel = Carousel::for_set(&images);
        let cells = images
            .iter()
            .map(|src| ImageCell::new(src, project.title.clone()))
            .collect();

        Self {
            project: project_index,
            session,
            images,
            carousel,
            cells,
        }
    }

    /// Cell for the image under the cursor
    pub fn current_cell(&self) -> &ImageCell {
        &self.cells[self.carousel.cursor()]
    }

    pub fn cell_mut(&mut self, slot: usize) -> Option<&mut ImageCell> {
        self.cells.get_mut(slot)
    }
}
