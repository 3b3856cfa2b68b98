//! Static description of the page markup: sections, the animated nodes inside the pinned hero,
//! and a simple block layout used to measure them.

use crate::{
    foundation::core::{ElementId, Length, Rect, Viewport},
    foundation::error::TimelineResult,
    host::HeadlessHost,
    page::{
        assets::{HeroImage, asset_url},
        config::PageConfig,
        motion::PIN_DISTANCE_VH,
    },
};

/// What a node renders.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum NodeKind {
    /// Document root.
    Page,
    /// The pinned hero section (scroll trigger).
    HeroSection,
    /// Blurred decorative glow behind the headline.
    Glow,
    /// Headline container.
    Headline,
    /// One headline word group.
    Word {
        /// Rendered text.
        text: String,
    },
    /// Stats row container.
    StatsRow,
    /// One statistic.
    Stat {
        /// Figure.
        value: String,
        /// Caption.
        label: String,
        /// Accent colour token.
        accent: String,
    },
    /// Hero image wrapper.
    HeroImage {
        /// Resolved asset URL.
        src: String,
        /// Alternative text.
        alt: String,
    },
    /// Section following the hero.
    ContentSection {
        /// Heading text.
        title: String,
        /// Paragraph text.
        body: String,
    },
    /// Closing band.
    EndBand {
        /// Caption text.
        text: String,
    },
}

/// How a node is placed inside its parent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Stacked below the previous block sibling, full parent width.
    Block {
        /// Block height.
        height: Length,
    },
    /// A block that gets pinned while scrolling. `spacing` is reserved after it, as a pin spacer,
    /// so the blocks that follow start where the region lands once released.
    PinnedBlock {
        /// Block height.
        height: Length,
        /// Pinned scroll distance.
        spacing: Length,
    },
    /// Fractional rect of the parent (`x`, `y`, `w`, `h` in `[0, 1]`).
    Inset {
        /// Left edge fraction.
        x: f64,
        /// Top edge fraction.
        y: f64,
        /// Width fraction.
        w: f64,
        /// Height fraction.
        h: f64,
    },
    /// Horizontally centered, sized by width and aspect ratio, bottom edge relative to the
    /// parent's bottom (negative hangs below it).
    BottomAnchored {
        /// Width as a fraction of the parent.
        width: f64,
        /// Height over width.
        aspect: f64,
        /// Bottom offset as a fraction of parent height.
        bottom: f64,
    },
}

/// A node in the page tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    /// Element identity.
    pub id: ElementId,
    /// Rendered content.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Placement inside the parent.
    pub placement: Placement,
    /// Child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Elements the page animates.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct HeroTargets {
    /// Pinned hero section, the scroll trigger.
    pub container: ElementId,
    /// Headline words, in stagger order.
    pub headline_words: Vec<ElementId>,
    /// Stats row container.
    pub stats_block: ElementId,
    /// Individual stats, in stagger order.
    pub stat_items: Vec<ElementId>,
    /// Hero image wrapper.
    pub hero_image: ElementId,
}

impl HeroTargets {
    /// Every animated element plus the trigger, as mount slots.
    pub fn mount_slots(&self) -> Vec<Option<ElementId>> {
        let mut slots = vec![Some(self.container)];
        slots.extend(self.headline_words.iter().copied().map(Some));
        slots.push(Some(self.stats_block));
        slots.extend(self.stat_items.iter().copied().map(Some));
        slots.push(Some(self.hero_image));
        slots
    }
}

/// A node with its measured rect.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MeasuredNode {
    /// Element identity.
    pub id: ElementId,
    /// Document-space rect.
    pub rect: Rect,
}

/// The whole page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageLayout {
    /// Root node.
    pub root: Node,
    /// Animated elements.
    pub targets: HeroTargets,
    /// Minimum document height.
    pub min_height: Length,
}

struct Ids(u32);

impl Ids {
    fn next(&mut self) -> ElementId {
        self.0 += 1;
        ElementId(self.0)
    }
}

impl PageLayout {
    /// Build the page tree for `config`.
    pub fn build(config: &PageConfig) -> TimelineResult<Self> {
        config.validate()?;
        let mut ids = Ids(0);
        let root_id = ids.next();
        let container = ids.next();

        let glow = Node {
            id: ids.next(),
            kind: NodeKind::Glow,
            placement: Placement::Inset {
                x: 0.2,
                y: 0.1,
                w: 0.6,
                h: 0.4,
            },
            children: Vec::new(),
        };

        let headline_id = ids.next();
        let words: Vec<Node> = spread(config.headline.len())
            .zip(&config.headline)
            .map(|((x, w), text)| Node {
                id: ids.next(),
                kind: NodeKind::Word { text: text.clone() },
                placement: Placement::Inset { x, y: 0.0, w, h: 1.0 },
                children: Vec::new(),
            })
            .collect();
        let headline = Node {
            id: headline_id,
            kind: NodeKind::Headline,
            placement: Placement::Inset {
                x: 0.1,
                y: 0.3,
                w: 0.8,
                h: 0.12,
            },
            children: words,
        };

        let stats_id = ids.next();
        let stats: Vec<Node> = spread(config.stats.len())
            .zip(&config.stats)
            .map(|((x, w), stat)| Node {
                id: ids.next(),
                kind: NodeKind::Stat {
                    value: stat.value.clone(),
                    label: stat.label.clone(),
                    accent: stat.accent.clone(),
                },
                placement: Placement::Inset { x, y: 0.0, w, h: 1.0 },
                children: Vec::new(),
            })
            .collect();
        let stats_row = Node {
            id: stats_id,
            kind: NodeKind::StatsRow,
            placement: Placement::Inset {
                x: 0.2,
                y: 0.48,
                w: 0.6,
                h: 0.12,
            },
            children: stats,
        };

        let image = &config.hero_image;
        let hero_image = Node {
            id: ids.next(),
            kind: NodeKind::HeroImage {
                src: asset_url(config, &image.file),
                alt: image.alt.clone(),
            },
            placement: Placement::BottomAnchored {
                width: 0.9,
                aspect: f64::from(image.height) / f64::from(image.width),
                bottom: -0.05,
            },
            children: Vec::new(),
        };

        let targets = HeroTargets {
            container,
            headline_words: headline.children.iter().map(|n| n.id).collect(),
            stats_block: stats_row.id,
            stat_items: stats_row.children.iter().map(|n| n.id).collect(),
            hero_image: hero_image.id,
        };

        let hero = Node {
            id: container,
            kind: NodeKind::HeroSection,
            placement: Placement::PinnedBlock {
                height: Length::Vh(100.0),
                spacing: Length::Vh(PIN_DISTANCE_VH),
            },
            children: vec![glow, headline, stats_row, hero_image],
        };
        let content = Node {
            id: ids.next(),
            kind: NodeKind::ContentSection {
                title: config.content.title.clone(),
                body: config.content.body.clone(),
            },
            placement: Placement::Block {
                height: Length::Vh(100.0),
            },
            children: Vec::new(),
        };
        let end = Node {
            id: ids.next(),
            kind: NodeKind::EndBand {
                text: config.content.footer.clone(),
            },
            placement: Placement::Block {
                height: Length::Vh(50.0),
            },
            children: Vec::new(),
        };

        Ok(Self {
            root: Node {
                id: root_id,
                kind: NodeKind::Page,
                placement: Placement::Block {
                    height: Length::Vh(300.0),
                },
                children: vec![hero, content, end],
            },
            targets,
            min_height: Length::Vh(300.0),
        })
    }

    /// Document-space rects of every node, parents before children.
    ///
    /// Rects are unpinned and untransformed. The page is at least `min_height` tall and grows to
    /// fit its blocks and pin spacers.
    pub fn measure(&self, viewport: Viewport) -> Vec<MeasuredNode> {
        let mut out = Vec::new();
        let page_height = self
            .min_height
            .resolve(viewport)
            .max(flow_height(&self.root, viewport));
        let root = Rect::new(0.0, 0.0, viewport.width, page_height);
        out.push(MeasuredNode {
            id: self.root.id,
            rect: root,
        });
        measure_children(&self.root, root, viewport, &mut out);
        out
    }

    /// Attach every node to a headless host at its measured rect.
    pub fn attach_to(&self, host: &mut HeadlessHost, viewport: Viewport) {
        for node in self.measure(viewport) {
            host.attach(node.id, node.rect);
        }
    }

    /// Size the hero image from an inspected file; a broken image keeps the declared size.
    pub fn size_hero_image(&mut self, image: &HeroImage, config: &PageConfig) {
        let aspect_ratio = image.aspect(config);
        if let Some(node) = node_mut(&mut self.root, self.targets.hero_image)
            && let Placement::BottomAnchored { aspect, .. } = &mut node.placement
        {
            *aspect = aspect_ratio;
        }
    }

    /// Find a node by id.
    pub fn node(&self, id: ElementId) -> Option<&Node> {
        fn find(node: &Node, id: ElementId) -> Option<&Node> {
            if node.id == id {
                return Some(node);
            }
            node.children.iter().find_map(|c| find(c, id))
        }
        find(&self.root, id)
    }
}

fn node_mut(node: &mut Node, id: ElementId) -> Option<&mut Node> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter_mut().find_map(|c| node_mut(c, id))
}

/// Height taken by a node's block children, pin spacers included.
fn flow_height(node: &Node, viewport: Viewport) -> f64 {
    node.children
        .iter()
        .map(|child| match child.placement {
            Placement::Block { height } => height.resolve(viewport),
            Placement::PinnedBlock { height, spacing } => {
                height.resolve(viewport) + spacing.resolve(viewport)
            }
            Placement::Inset { .. } | Placement::BottomAnchored { .. } => 0.0,
        })
        .sum()
}

/// `(x, w)` fractions splitting a row into `n` equal cells with a small gutter.
fn spread(n: usize) -> impl Iterator<Item = (f64, f64)> {
    let cell = 1.0 / n.max(1) as f64;
    let gutter = cell * 0.1;
    (0..n).map(move |i| (i as f64 * cell + gutter / 2.0, cell - gutter))
}

fn measure_children(parent: &Node, rect: Rect, viewport: Viewport, out: &mut Vec<MeasuredNode>) {
    let mut cursor = rect.y0;
    for child in &parent.children {
        let r = match child.placement {
            Placement::Block { height } => {
                let h = height.resolve(viewport);
                let r = Rect::new(rect.x0, cursor, rect.x1, cursor + h);
                cursor += h;
                r
            }
            Placement::PinnedBlock { height, spacing } => {
                let h = height.resolve(viewport);
                let r = Rect::new(rect.x0, cursor, rect.x1, cursor + h);
                cursor += h + spacing.resolve(viewport);
                r
            }
            Placement::Inset { x, y, w, h } => Rect::new(
                rect.x0 + rect.width() * x,
                rect.y0 + rect.height() * y,
                rect.x0 + rect.width() * (x + w),
                rect.y0 + rect.height() * (y + h),
            ),
            Placement::BottomAnchored {
                width,
                aspect,
                bottom,
            } => {
                let w = rect.width() * width;
                let h = w * aspect;
                let x0 = rect.x0 + (rect.width() - w) / 2.0;
                let y1 = rect.y1 - rect.height() * bottom;
                Rect::new(x0, y1 - h, x0 + w, y1)
            }
        };
        out.push(MeasuredNode { id: child.id, rect: r });
        measure_children(child, r, viewport, out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/layout.rs"]
mod tests;
