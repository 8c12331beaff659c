use chrono::Datelike;
use iced::keyboard::{self, key};
use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Rectangle, Subscription, Task, Theme};
use std::path::PathBuf;

mod assets;
mod error;
mod state;
mod ui;

use assets::Slot;
use state::config::AppConfig;
use state::data::Portfolio;
use state::gallery::{GalleryModal, ImageCell};
use state::nav::{self, NavState, Section, Seek};
use state::typewriter::Typewriter;

/// Main application state
struct Folio {
    portfolio: Portfolio,
    assets_dir: PathBuf,
    theme: Theme,
    /// Scroll position and what the nav bar derives from it
    nav: NavState,
    typewriter: Typewriter,
    /// Hero profile photo
    photo: ImageCell,
    /// One cover cell per project, same order as `portfolio.projects`
    cards: Vec<ImageCell>,
    /// Open project modal; `None` when closed
    modal: Option<GalleryModal>,
    /// Incremented on every modal opening
    sessions: u64,
    /// Short feedback line shown in the nav bar
    status: String,
    year: i32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The page scrollable moved
    PageScrolled(scrollable::Viewport),
    /// On-screen rectangle of a section (None when scrolled out of view)
    SectionBounds(Section, Option<Rectangle>),
    NavigateTo(Section),
    /// Where things sit after a nav jump toward a section never seen yet
    SectionMeasured {
        target: Section,
        step: u8,
        viewport: Option<Rectangle>,
        sections: Vec<(Section, Option<Rectangle>)>,
    },
    ScrollToTop,
    TypewriterTick,
    /// User clicked a project card
    OpenProject(usize),
    /// Close button, backdrop click or Escape
    CloseModal,
    NextImage,
    PreviousImage,
    SelectImage(usize),
    /// Background image decode finished
    ImageLoaded(Slot, Result<Handle, String>),
    CopyLink(String),
}

fn page_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

impl Folio {
    /// Create a new instance of the application and start loading
    /// the hero photo and project covers
    fn new(config: AppConfig, portfolio: Portfolio) -> (Self, Task<Message>) {
        let assets_dir = config.assets_dir.clone();
        log::info!("🖼  Serving images from {}", assets_dir.display());

        let photo = ImageCell::new(portfolio.profile.photo.clone(), portfolio.profile.name.clone());
        let cards: Vec<ImageCell> = portfolio
            .projects
            .iter()
            .map(|p| ImageCell::new(p.image.clone(), p.title.clone()))
            .collect();

        let mut loads = vec![load(&assets_dir, Slot::Photo, &photo.src)];
        loads.extend(
            cards
                .iter()
                .enumerate()
                .map(|(i, cell)| load(&assets_dir, Slot::Card(i), &cell.src)),
        );

        let app = Folio {
            typewriter: Typewriter::new(portfolio.profile.titles.clone()),
            theme: ui::theme::build(config.theme),
            portfolio,
            assets_dir,
            nav: NavState::default(),
            photo,
            cards,
            modal: None,
            sessions: 0,
            status: String::new(),
            year: chrono::Local::now().year(),
        };

        (app, Task::batch(loads))
    }

    fn title(&self) -> String {
        format!("{} · Portfolio", self.portfolio.profile.name)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageScrolled(viewport) => {
                self.nav
                    .scrolled_to(viewport.absolute_offset().y, viewport.bounds().y);

                // Ask every section where it is on screen; scroll-spy runs on the answers
                Task::batch(Section::ALL.iter().map(|&section| {
                    container::visible_bounds(section.container_id())
                        .map(move |bounds| Message::SectionBounds(section, bounds))
                }))
            }
            Message::SectionBounds(section, bounds) => {
                self.nav.section_bounds(section, bounds);
                Task::none()
            }
            Message::NavigateTo(section) => match self.nav.anchor(section) {
                Some(y) => scrollable::scroll_to(page_id(), scrollable::AbsoluteOffset { x: 0.0, y }),
                None => scrollable::snap_to(
                    page_id(),
                    scrollable::RelativeOffset {
                        x: 0.0,
                        y: NavState::estimated_fraction(section),
                    },
                )
                .chain(measure(section, 0)),
            },
            Message::SectionMeasured {
                target,
                step,
                viewport,
                sections,
            } => {
                let Some(viewport) = viewport else {
                    return Task::none();
                };
                let visible: Vec<(Section, Rectangle)> = sections
                    .into_iter()
                    .filter_map(|(section, rect)| rect.map(|rect| (section, rect)))
                    .collect();

                match nav::seek(target, viewport, &visible) {
                    Seek::Land(dy) => scroll_by(dy),
                    Seek::Step(dy) if step < nav::MAX_SEEK_STEPS => {
                        scroll_by(dy).chain(measure(target, step + 1))
                    }
                    Seek::Step(_) | Seek::Lost => {
                        log::debug!("Gave up seeking {:?} after {} steps", target, step);
                        Task::none()
                    }
                }
            }
            Message::ScrollToTop => scrollable::snap_to(page_id(), scrollable::RelativeOffset::START),
            Message::TypewriterTick => {
                self.typewriter.tick();
                Task::none()
            }
            Message::OpenProject(index) => {
                let Some(project) = self.portfolio.projects.get(index) else {
                    return Task::none();
                };

                // Every opening starts fresh: cursor at 0, new cells
                self.sessions += 1;
                let modal = GalleryModal::open(index, project, self.sessions);
                log::info!(
                    "📂 Opened '{}' ({} images)",
                    project.title,
                    modal.images.len()
                );

                let loads: Vec<Task<Message>> = modal
                    .images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        let slot = Slot::Gallery {
                            session: modal.session,
                            index: i,
                        };
                        load(&self.assets_dir, slot, src)
                    })
                    .collect();

                self.modal = Some(modal);
                Task::batch(loads)
            }
            Message::CloseModal => {
                if let Some(modal) = self.modal.take() {
                    log::debug!("Closed project modal #{}", modal.project);
                }
                Task::none()
            }
            Message::NextImage => {
                if let Some(modal) = &mut self.modal {
                    modal.carousel.advance();
                }
                Task::none()
            }
            Message::PreviousImage => {
                if let Some(modal) = &mut self.modal {
                    modal.carousel.retreat();
                }
                Task::none()
            }
            Message::SelectImage(index) => {
                if let Some(modal) = &mut self.modal {
                    modal.carousel.jump_to(index);
                }
                Task::none()
            }
            Message::ImageLoaded(slot, result) => {
                self.image_loaded(slot, result);
                Task::none()
            }
            Message::CopyLink(url) => {
                self.status = format!("Copied {} to clipboard", url);
                iced::clipboard::write(url)
            }
        }
    }

    /// Route a load result to its cell. Results for a modal session
    /// that has since been closed or replaced are dropped.
    fn image_loaded(&mut self, slot: Slot, result: Result<Handle, String>) {
        let cell = match slot {
            Slot::Photo => Some(&mut self.photo),
            Slot::Card(i) => self.cards.get_mut(i),
            Slot::Gallery { session, index } => self
                .modal
                .as_mut()
                .filter(|modal| modal.session == session)
                .and_then(|modal| modal.cell_mut(index)),
        };

        let Some(cell) = cell else {
            return;
        };

        match result {
            Ok(handle) => cell.loaded(handle),
            Err(e) => {
                log::warn!("⚠️  Image unavailable, showing placeholder: {}", e);
                cell.fail();
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let portfolio = &self.portfolio;

        let page = column![
            ui::sections::hero(portfolio, &self.photo, &self.typewriter),
            ui::sections::about(portfolio),
            ui::sections::skills(portfolio),
            ui::sections::experience(portfolio),
            ui::sections::education(portfolio),
            ui::projects::projects(portfolio, &self.cards),
            ui::sections::footer(portfolio, self.year),
        ]
        .padding([0, 48])
        .max_width(ui::theme::CONTENT_MAX_W);

        let page = scrollable(container(page).center_x(Length::Fill))
            .id(page_id())
            .on_scroll(Message::PageScrolled)
            .height(Length::Fill);
        let page = container(page).id(nav::viewport_id()).height(Length::Fill);

        let body = column![
            ui::nav::bar(&portfolio.profile.initials, &self.nav, &self.status),
            page,
        ];

        match &self.modal {
            Some(modal) => match portfolio.projects.get(modal.project) {
                Some(project) => ui::modal::overlay(body, modal, project),
                None => body.into(),
            },
            None => body.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if !self.typewriter.is_idle() {
            subscriptions.push(
                iced::time::every(self.typewriter.delay()).map(|_| Message::TypewriterTick),
            );
        }

        if self.modal.is_some() {
            subscriptions.push(keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseModal),
                _ => None,
            }));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn scroll_by(dy: f32) -> Task<Message> {
    scrollable::scroll_by(page_id(), scrollable::AbsoluteOffset { x: 0.0, y: dy })
}

/// Query the page viewport and every section's on-screen rectangle
fn measure(target: Section, step: u8) -> Task<Message> {
    container::visible_bounds(nav::viewport_id()).then(move |viewport| {
        Task::batch(Section::ALL.iter().map(|&section| {
            container::visible_bounds(section.container_id()).map(move |rect| (section, rect))
        }))
        .collect()
        .map(move |sections| Message::SectionMeasured {
            target,
            step,
            viewport,
            sections,
        })
    })
}

/// Start decoding one image for `slot`
fn load(assets_dir: &std::path::Path, slot: Slot, src: &str) -> Task<Message> {
    Task::perform(
        assets::load_image(assets_dir.to_path_buf(), src.to_string()),
        move |result| Message::ImageLoaded(slot, result),
    )
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"))
        .init();

    let config = AppConfig::load();

    let (portfolio, source) = match state::content::load(config.content_path.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("❌ No usable portfolio content: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "🎨 Folio initialized with {} projects (content: {})",
        portfolio.projects.len(),
        source
    );

    let window_size = config.window_size();

    iced::application(Folio::title, Folio::update, Folio::view)
        .theme(Folio::theme)
        .subscription(Folio::subscription)
        .window_size(window_size)
        .centered()
        .run_with(move || Folio::new(config, portfolio))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Folio {
        let portfolio = state::content::embedded().unwrap();
        let config = AppConfig {
            assets_dir: PathBuf::from("/nonexistent"),
            ..AppConfig::default()
        };
        Folio::new(config, portfolio).0
    }

    fn pixel() -> Handle {
        Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255])
    }

    #[test]
    fn test_open_project_starts_at_first_image() {
        let mut app = app();
        let _ = app.update(Message::OpenProject(0));

        let modal = app.modal.as_ref().unwrap();
        assert_eq!(modal.carousel.cursor(), 0);
        assert_eq!(modal.images.len(), 6);
    }

    #[test]
    fn test_navigation_messages_move_cursor() {
        let mut app = app();
        let _ = app.update(Message::OpenProject(1));

        let _ = app.update(Message::NextImage);
        let _ = app.update(Message::NextImage);
        let _ = app.update(Message::PreviousImage);
        assert_eq!(app.modal.as_ref().unwrap().carousel.cursor(), 1);

        let _ = app.update(Message::SelectImage(3));
        assert_eq!(app.modal.as_ref().unwrap().carousel.cursor(), 3);
    }

    #[test]
    fn test_reopen_resets_cursor() {
        let mut app = app();
        let _ = app.update(Message::OpenProject(2));
        let _ = app.update(Message::SelectImage(4));
        let _ = app.update(Message::CloseModal);
        assert!(app.modal.is_none());

        let _ = app.update(Message::OpenProject(2));
        assert_eq!(app.modal.as_ref().unwrap().carousel.cursor(), 0);
    }

    #[test]
    fn test_stale_gallery_results_are_dropped() {
        let mut app = app();
        let _ = app.update(Message::OpenProject(0));
        let old_session = app.modal.as_ref().unwrap().session;
        let _ = app.update(Message::CloseModal);
        let _ = app.update(Message::OpenProject(0));

        let _ = app.update(Message::ImageLoaded(
            Slot::Gallery {
                session: old_session,
                index: 0,
            },
            Err("gone".into()),
        ));

        assert!(!app.modal.as_ref().unwrap().cells[0].is_failed());
    }

    #[test]
    fn test_gallery_failure_only_touches_its_slot() {
        let mut app = app();
        let _ = app.update(Message::OpenProject(0));
        let _ = app.update(Message::NextImage);
        let session = app.modal.as_ref().unwrap().session;

        let _ = app.update(Message::ImageLoaded(
            Slot::Gallery { session, index: 0 },
            Ok(pixel()),
        ));
        let _ = app.update(Message::ImageLoaded(
            Slot::Gallery { session, index: 2 },
            Err("missing".into()),
        ));

        let modal = app.modal.as_ref().unwrap();
        assert_eq!(modal.carousel.cursor(), 1);
        assert!(modal.cells[2].is_failed());
        assert!(!modal.cells[0].is_failed());
        assert!(!modal.cells[1].is_failed());
    }

    #[test]
    fn test_card_failure_is_permanent() {
        let mut app = app();
        let _ = app.update(Message::ImageLoaded(Slot::Card(3), Err("missing".into())));
        let _ = app.update(Message::ImageLoaded(Slot::Card(3), Ok(pixel())));

        assert!(app.cards[3].is_failed());
        assert!(!app.cards[2].is_failed());
    }

    #[test]
    fn test_measured_section_without_viewport_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::SectionMeasured {
            target: Section::Projects,
            step: 0,
            viewport: None,
            sections: Vec::new(),
        });
        assert_eq!(app.nav.offset_y, 0.0);
    }

    #[test]
    fn test_navigation_without_modal_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::NextImage);
        let _ = app.update(Message::SelectImage(2));
        assert!(app.modal.is_none());
    }
}
