use std::time::Instant;

use crate::assistant::AssistantOverlay;
use crate::assistant::session::{SessionFactory, SimulatedSession};
use crate::config::Config;
use crate::content::Catalog;
use crate::nav::arbitrator::{Delegated, SectionArbitrator};
use crate::nav::autoplay::AutoplayTimer;
use crate::nav::router::{InputOwner, InputRouter};
use crate::nav::{NavEvent, REGION_ORDER, RegionId, RegionSet};
use crate::ui::theme::Theme;

pub struct App {
    pub catalog: Catalog,
    pub regions: RegionSet,
    pub arbitrator: SectionArbitrator,
    pub router: InputRouter,
    pub overlay: AssistantOverlay,
    pub autoplay: AutoplayTimer,
    pub active_tab: usize,
    pub footer_notice: Option<String>,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
    session_factory: SessionFactory,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let catalog = Catalog::load();
        Self::with_parts(config, catalog, SimulatedSession::factory())
    }

    /// Assembly used by both `new` and the integration tests, which swap
    /// in a scripted session factory.
    pub fn with_parts(config: Config, catalog: Catalog, session_factory: SessionFactory) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let mut regions = RegionSet::new(
            catalog.nav_tabs.len(),
            catalog.hero_slides.len(),
            catalog.apps.len(),
            catalog.recommended.len(),
        );
        let arbitrator = SectionArbitrator::new(REGION_ORDER.to_vec(), &mut regions);
        let autoplay = AutoplayTimer::new(config.autoplay_interval());

        let mut app = Self {
            catalog,
            regions,
            arbitrator,
            router: InputRouter::new(),
            overlay: AssistantOverlay::new(),
            autoplay,
            active_tab: 0,
            footer_notice: None,
            theme,
            config,
            should_quit: false,
            session_factory,
        };
        app.refresh_autoplay(Instant::now());
        app
    }

    /// Route one semantic navigation event to its single owner.
    pub fn handle_nav(&mut self, event: NavEvent) {
        match self.router.owner() {
            InputOwner::Overlay => {
                self.overlay.handle(event);
                if !self.overlay.is_open() {
                    // Close restores routing; the arbitrator's index was
                    // never touched, so the old region is still active.
                    self.router.grant(InputOwner::Sections);
                }
            }
            InputOwner::Sections => {
                match self.arbitrator.handle(event, &mut self.regions) {
                    Delegated::Activated { region, index } => {
                        self.apply_activation(region, index);
                    }
                    Delegated::Moved | Delegated::Ignored => {}
                }
            }
        }
        self.refresh_autoplay(Instant::now());
    }

    /// Tick work: deferred focus sync, autoplay, and session notices.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(id) = self.arbitrator.take_pending_sync() {
            // The settle step: re-clamp the entered region's cursor against
            // its current item count before the focus indicator lands.
            let count = self.expected_item_count(id);
            self.regions.get_mut(id).set_item_count(count);
        }
        if self.autoplay.poll(now) {
            self.regions.get_mut(RegionId::Hero).advance();
        }
        self.overlay.drain_notices();
        self.refresh_autoplay(now);
    }

    pub fn hero_cursor(&self) -> usize {
        self.regions.get(RegionId::Hero).cursor()
    }

    fn expected_item_count(&self, id: RegionId) -> usize {
        match id {
            RegionId::NavBar => self.catalog.nav_tabs.len() + 1,
            RegionId::Hero => self.catalog.hero_slides.len(),
            RegionId::AppGrid => self.catalog.apps.len(),
            RegionId::ContentRow => self.catalog.recommended.len(),
        }
    }

    fn apply_activation(&mut self, region: RegionId, index: usize) {
        match region {
            RegionId::NavBar => {
                if index == self.catalog.nav_tabs.len() {
                    self.open_overlay();
                } else {
                    self.active_tab = index;
                }
            }
            RegionId::Hero => {
                if let Some(slide) = self.catalog.hero_slides.get(index) {
                    self.footer_notice = Some(format!("Playing {}", slide.title));
                }
            }
            RegionId::AppGrid => {
                if let Some(app) = self.catalog.apps.get(index) {
                    self.footer_notice = Some(format!("Launching {}...", app.name));
                }
            }
            RegionId::ContentRow => {
                if let Some(item) = self.catalog.recommended.get(index) {
                    self.footer_notice = Some(format!("Playing {}", item.title));
                }
            }
        }
    }

    fn open_overlay(&mut self) {
        self.overlay.open(&self.session_factory);
        if self.overlay.is_open() {
            self.router.grant(InputOwner::Overlay);
        }
    }

    /// The autoplay timer runs only while the carousel is unattended:
    /// focusing it cancels the timer, unfocusing re-arms a fresh interval.
    fn refresh_autoplay(&mut self, now: Instant) {
        let should_run =
            self.config.autoplay_enabled && !self.regions.get(RegionId::Hero).is_focused();
        if should_run && !self.autoplay.is_armed() {
            self.autoplay.arm(now);
        } else if !should_run && self.autoplay.is_armed() {
            self.autoplay.cancel();
        }
    }
}
