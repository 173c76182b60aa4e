//! Fixed `(layout, variant)` table deciding how a slide is arranged

use crate::error::{RenderError, RenderResult};
use formdeck_model::{ContentItem, ContentKind, Layout};

/// One selectable arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutVariant {
    pub layout: Layout,
    pub id: &'static str,
    pub name: &'static str,
    pub plan: LayoutPlan,
}

/// Structural decisions for a slide body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub container: Container,
    pub ordering: ContentOrdering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// Centered column across the whole slide
    FullWidth,
    /// Two columns, `ratio` percent on the left
    Divided { ratio: u8 },
    /// Padded box; `bordered` draws its outline
    Boxed { bordered: bool },
    /// Box split into left and right halves
    BoxedColumns,
    /// Box split into top and bottom halves
    BoxedRows,
}

impl Container {
    pub fn class_name(self) -> &'static str {
        match self {
            Container::FullWidth => "layout-full-width",
            Container::Divided { .. } => "layout-divided",
            Container::Boxed { .. } => "layout-boxed",
            Container::BoxedColumns => "layout-boxed-columns",
            Container::BoxedRows => "layout-boxed-rows",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrdering {
    /// Every item, as stored
    DocumentOrder,
    /// Stored order with media items left out
    WithoutMedia,
}

impl ContentOrdering {
    pub fn arrange<'a>(self, content: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        let is_media = |item: &&ContentItem| item.kind() == ContentKind::Media;
        match self {
            ContentOrdering::DocumentOrder => content.iter().collect(),
            ContentOrdering::WithoutMedia => content.iter().filter(|i| !is_media(i)).collect(),
        }
    }
}

const fn variant(
    layout: Layout,
    id: &'static str,
    name: &'static str,
    container: Container,
    ordering: ContentOrdering,
) -> LayoutVariant {
    LayoutVariant {
        layout,
        id,
        name,
        plan: LayoutPlan {
            container,
            ordering,
        },
    }
}

pub const VARIANTS: &[LayoutVariant] = &[
    variant(Layout::FullWidth, "fw-1", "Right Aligned", Container::FullWidth, ContentOrdering::WithoutMedia),
    variant(Layout::FullWidth, "fw-2", "Split Content", Container::FullWidth, ContentOrdering::DocumentOrder),
    variant(Layout::DividedLr, "dlr-1", "70/30 Split", Container::Divided { ratio: 70 }, ContentOrdering::DocumentOrder),
    variant(Layout::DividedLr, "dlr-2", "Custom Split", Container::Divided { ratio: 50 }, ContentOrdering::DocumentOrder),
    variant(Layout::BoxedFull, "bf-1", "Padded Box", Container::Boxed { bordered: false }, ContentOrdering::DocumentOrder),
    variant(Layout::BoxedFull, "bf-2", "Bordered Box", Container::Boxed { bordered: true }, ContentOrdering::DocumentOrder),
    variant(Layout::BoxedLr, "bdlr-1", "Stacked Right", Container::BoxedColumns, ContentOrdering::DocumentOrder),
    variant(Layout::BoxedLr, "bdlr-2", "Grid Layout", Container::BoxedColumns, ContentOrdering::DocumentOrder),
    variant(Layout::BoxedUd, "bdud-1", "Stacked Bottom", Container::BoxedRows, ContentOrdering::DocumentOrder),
    variant(Layout::BoxedUd, "bdud-2", "Mixed Layout", Container::BoxedRows, ContentOrdering::DocumentOrder),
];

const FALLBACK_PLAN: LayoutPlan = LayoutPlan {
    container: Container::FullWidth,
    ordering: ContentOrdering::DocumentOrder,
};

/// Variants offered for `layout`, in display order
pub fn variants_for(layout: Layout) -> impl Iterator<Item = &'static LayoutVariant> {
    VARIANTS.iter().filter(move |v| v.layout == layout)
}

pub fn lookup(layout: Layout, variant: &str) -> RenderResult<&'static LayoutVariant> {
    VARIANTS
        .iter()
        .find(|v| v.layout == layout && v.id == variant)
        .ok_or_else(|| RenderError::UnknownVariant {
            layout,
            variant: variant.to_string(),
        })
}

/// Plan for rendering; unknown pairs keep document order in a full-width column
pub fn plan_for(layout: Layout, variant: &str) -> LayoutPlan {
    lookup(layout, variant)
        .map(|v| v.plan)
        .unwrap_or(FALLBACK_PLAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck_model::{ButtonDesign, MediaDesign, TextDesign};

    fn content() -> Vec<ContentItem> {
        vec![
            ContentItem::text("text_1", TextDesign::default()),
            ContentItem::media("media_1", MediaDesign::default()),
            ContentItem::button("button_1", ButtonDesign::default()),
        ]
    }

    fn ids(items: Vec<&ContentItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_full_width_variants_differ() {
        let content = content();
        let fw1 = plan_for(Layout::FullWidth, "fw-1").ordering.arrange(&content);
        let fw2 = plan_for(Layout::FullWidth, "fw-2").ordering.arrange(&content);

        assert_eq!(ids(fw1), vec!["text_1", "button_1"]);
        assert_eq!(ids(fw2), vec!["text_1", "media_1", "button_1"]);
    }

    #[test]
    fn test_every_layout_has_two_variants() {
        for layout in Layout::ALL {
            assert_eq!(variants_for(layout).count(), 2, "{}", layout);
        }
    }

    #[test]
    fn test_unknown_pairs() {
        assert!(lookup(Layout::FullWidth, "dlr-1").is_err());
        assert_eq!(plan_for(Layout::BoxedUd, "nope"), FALLBACK_PLAN);
        assert_eq!(
            lookup(Layout::BoxedLr, "bdlr-2").unwrap().name,
            "Grid Layout"
        );
    }
}
