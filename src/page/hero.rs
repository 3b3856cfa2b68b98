use crate::{
    controller::scroll_controller::ScrollTimelineController,
    foundation::core::Viewport,
    foundation::error::TimelineResult,
    host::{HeadlessHost, RenderHost},
    page::{
        config::PageConfig,
        layout::{HeroTargets, PageLayout},
        motion,
    },
};

/// A mounted hero page: its layout and the controller animating it.
pub struct HeroPage<H: RenderHost> {
    layout: PageLayout,
    controller: ScrollTimelineController<H>,
}

impl<H: RenderHost> HeroPage<H> {
    /// Build the page for `config`, register its elements with `host`, start the intro and bind
    /// the scroll exit to the hero section.
    ///
    /// The host must already show the page's nodes; ids it does not know are skipped.
    #[tracing::instrument(skip(host, config))]
    pub fn mount(host: H, config: &PageConfig) -> TimelineResult<Self> {
        let layout = PageLayout::build(config)?;
        let intro = motion::intro_timeline(&layout.targets)?;
        let exit = motion::scroll_timeline(&layout.targets)?;
        let trigger = motion::scroll_trigger()?;

        let mut controller = ScrollTimelineController::new(host);
        controller.mount(&layout.targets.mount_slots());
        controller.play_intro(intro);
        controller.bind_scroll(layout.targets.container, trigger, exit);
        Ok(Self { layout, controller })
    }

    /// Page tree.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Animated element ids.
    pub fn targets(&self) -> &HeroTargets {
        &self.layout.targets
    }

    /// The controller, for introspection.
    pub fn controller(&self) -> &ScrollTimelineController<H> {
        &self.controller
    }

    /// The controller, for forwarding host callbacks.
    pub fn controller_mut(&mut self) -> &mut ScrollTimelineController<H> {
        &mut self.controller
    }

    /// Release everything the page registered. Idempotent.
    pub fn unmount(&mut self) {
        self.controller.unmount();
    }
}

impl HeroPage<HeadlessHost> {
    /// Lay the page out in a fresh [`HeadlessHost`] of `viewport` size and mount it there.
    pub fn headless(config: &PageConfig, viewport: Viewport) -> TimelineResult<Self> {
        let layout = PageLayout::build(config)?;
        let mut host = HeadlessHost::new(viewport);
        layout.attach_to(&mut host, viewport);
        Self::mount(host, config)
    }
}
