use crate::background::resolve_background;
use crate::fonts::{FontCollector, FontLoader};
use crate::layout::{plan_for, Container};
use crate::styles::{
    button_style, description_style, error_message_style, input_style, media_style,
    question_style, text_style,
};
use crate::vdom::{VNode, VirtualCanvas};
use formdeck_model::{
    ButtonDesign, ContentBody, ContentItem, Form, GeneralSettings, MediaDesign, MediaType,
    NavItem, NavigationLayout, QuestionDesign, QuestionType, RatingStyle, SelectType, Selection,
    Slide, SlideKind, TextDesign,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

pub const DEFAULT_LOGO: &str = "/images/brandLogo/brandLogo.png";
pub const NO_SLIDE_SELECTED: &str = "No Slide Selected";

const RATING_EMOJI: [&str; 5] = ["😞", "🙁", "😐", "🙂", "😄"];

#[derive(Debug, Clone)]
pub struct ProjectorOptions {
    /// Logo shown when the form has no brand logo
    pub default_logo: String,
    pub branding_label: String,
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        Self {
            default_logo: DEFAULT_LOGO.to_string(),
            branding_label: "Built with formdeck".to_string(),
        }
    }
}

/// Pure projection of a form and its selection onto a virtual canvas
#[derive(Debug, Clone, Default)]
pub struct Projector {
    options: ProjectorOptions,
}

struct SlideContext<'a> {
    form: &'a Form,
    slide: &'a Slide,
    selected_content: Option<&'a str>,
}

impl SlideContext<'_> {
    fn settings(&self) -> &GeneralSettings {
        &self.form.settings.general
    }

    fn global_font(&self) -> &str {
        &self.form.settings.general.font_family
    }

    fn navigation(&self) -> NavigationLayout {
        self.form.settings.navigation.navigation_layout
    }
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ProjectorOptions) -> Self {
        Self { options }
    }

    /// Render the selected slide, or a placeholder when no slide is selected
    #[instrument(skip_all, fields(form = %form.name, slide = selection.slide_id().unwrap_or("-")))]
    pub fn render(&self, form: &Form, selection: &Selection) -> VirtualCanvas {
        let mut canvas = VirtualCanvas::new(form.name.clone());

        let mut fonts = FontLoader::new();
        for family in FontCollector::collect(form) {
            if let Some(url) = fonts.request(&family) {
                canvas.add_stylesheet(url);
            }
        }

        let Some(slide) = selection.slide_id().and_then(|id| form.find_slide(id)) else {
            debug!("No slide selected, rendering placeholder");
            canvas.add_node(placeholder());
            return canvas;
        };

        let ctx = SlideContext {
            form,
            slide,
            selected_content: selection.content_id(),
        };

        canvas.slide_id = Some(slide.id.clone());
        canvas.add_node(self.render_slide(&ctx));

        info!(
            slide = %slide.id,
            items = slide.content.len(),
            stylesheets = canvas.stylesheets.len(),
            "Slide projection complete"
        );
        canvas
    }

    fn render_slide(&self, ctx: &SlideContext<'_>) -> VNode {
        let slide = ctx.slide;
        debug!(layout = %slide.layout, variant = %slide.variant, "Rendering slide");

        VNode::element("section")
            .with_key(slide.id.clone())
            .with_class("formdeck-slide")
            .with_attr("data-slide-id", slide.id.clone())
            .with_attr("data-slide-type", slide.kind.as_str())
            .with_attr("data-layout", slide.layout.as_str())
            .with_attr("data-variant", slide.variant.clone())
            .with_styles(resolve_background(&slide.background))
            .with_child(self.render_header(ctx))
            .with_child(self.render_body(ctx))
            .with_child(self.render_footer(ctx))
    }

    fn render_header(&self, ctx: &SlideContext<'_>) -> VNode {
        let settings = ctx.settings();
        let logo = if settings.brand_logo.is_empty() {
            self.options.default_logo.clone()
        } else {
            settings.brand_logo.clone()
        };

        let mut header = VNode::element("header").with_class("formdeck-header").with_child(
            VNode::element("img")
                .with_class("formdeck-brand-logo")
                .with_attr("src", logo)
                .with_attr("alt", "Brand Logo"),
        );

        if settings.header_nav_menu {
            header = header.with_child(nav_menu("formdeck-header-nav", &settings.header_nav_menu_items));
        }
        header
    }

    fn render_body(&self, ctx: &SlideContext<'_>) -> VNode {
        let plan = plan_for(ctx.slide.layout, &ctx.slide.variant);

        let mut body = VNode::element("main")
            .with_class(format!("formdeck-content {}", plan.container.class_name()))
            .with_attr("data-role", "background");
        body = match plan.container {
            Container::FullWidth => body
                .with_style("display", "flex")
                .with_style("flex-direction", "column")
                .with_style("align-items", "center"),
            Container::Divided { ratio } => body
                .with_style("display", "grid")
                .with_style(
                    "grid-template-columns",
                    format!("{}% {}%", ratio, 100 - ratio),
                ),
            Container::Boxed { bordered } => {
                let body = body.with_style("padding", "32px");
                if bordered {
                    body.with_style("border", "1px solid #e2e8f0")
                } else {
                    body
                }
            }
            Container::BoxedColumns => body
                .with_style("display", "grid")
                .with_style("grid-template-columns", "1fr 1fr"),
            Container::BoxedRows => body
                .with_style("display", "grid")
                .with_style("grid-template-rows", "auto auto"),
        };

        for item in plan.ordering.arrange(&ctx.slide.content) {
            body = body.with_child(self.render_item(ctx, item));
        }

        if ctx.navigation() == NavigationLayout::Floating && ctx.slide.kind != SlideKind::Welcome {
            body = body.with_child(navigation_menu(NavigationLayout::Floating));
        }
        body
    }

    fn render_footer(&self, ctx: &SlideContext<'_>) -> VNode {
        let settings = ctx.settings();
        let mut footer = VNode::element("footer").with_class("formdeck-footer");

        if settings.footer_nav_menu {
            footer = footer.with_child(nav_menu("formdeck-footer-nav", &settings.footer_nav_menu_items));
        }

        let shows_bottom_nav = !matches!(ctx.slide.kind, SlideKind::Welcome | SlideKind::Thankyou);
        if ctx.navigation() == NavigationLayout::Bottom && shows_bottom_nav {
            footer = footer
                .with_style("background-color", "#f5f5f5")
                .with_child(navigation_menu(NavigationLayout::Bottom));
        }

        if settings.show_branding {
            footer = footer.with_child(
                VNode::element("span")
                    .with_class("formdeck-branding")
                    .with_child(VNode::text(self.options.branding_label.clone())),
            );
        }
        footer
    }

    fn render_item(&self, ctx: &SlideContext<'_>, item: &ContentItem) -> VNode {
        let mut wrapper = VNode::element("div")
            .with_key(item.id.clone())
            .with_class("formdeck-item")
            .with_attr("data-content-id", item.id.clone())
            .with_attr("data-content-type", item.kind().as_str());
        if ctx.selected_content == Some(item.id.as_str()) {
            wrapper = wrapper.with_attr("data-selected", "true");
        }

        let global_font = ctx.global_font();
        let inner = match &item.body {
            ContentBody::Text { text_design } => render_text(text_design, global_font),
            ContentBody::Media { media_design } => render_media(media_design),
            ContentBody::Button { button_design } => render_button(button_design, global_font),
            ContentBody::Question { question_design } => {
                render_question(&item.id, question_design, global_font)
            }
        };
        wrapper.with_child(inner)
    }
}

fn placeholder() -> VNode {
    VNode::element("div")
        .with_class("formdeck-placeholder")
        .with_style("min-height", "525px")
        .with_style("display", "flex")
        .with_style("align-items", "center")
        .with_style("justify-content", "center")
        .with_child(VNode::element("p").with_child(VNode::text(NO_SLIDE_SELECTED)))
}

fn nav_menu(class: &str, items: &[NavItem]) -> VNode {
    VNode::element("nav").with_class(class).with_children(
        items
            .iter()
            .map(|item| {
                VNode::element("a")
                    .with_key(item.id.clone())
                    .with_attr("href", item.url.clone())
                    .with_child(VNode::text(item.name.clone()))
            })
            .collect(),
    )
}

fn navigation_menu(layout: NavigationLayout) -> VNode {
    let layout_name = match layout {
        NavigationLayout::Bottom => "bottom",
        NavigationLayout::Floating => "floating",
    };
    VNode::element("div")
        .with_class("formdeck-navigation")
        .with_attr("data-layout", layout_name)
        .with_child(
            VNode::element("button")
                .with_attr("data-action", "previous")
                .with_child(VNode::text("Previous")),
        )
        .with_child(
            VNode::element("button")
                .with_attr("data-action", "next")
                .with_child(VNode::text("Next")),
        )
}

/// Serialized name of a unit enum value (`InputType::Email` → `"email"`)
fn wire_name<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_value(value)
        .ok()?
        .as_str()
        .map(str::to_string)
}

fn with_wire_attr<T: Serialize>(node: VNode, attr: &str, value: Option<&T>) -> VNode {
    match value.and_then(wire_name) {
        Some(name) => node.with_attr(attr, name),
        None => node,
    }
}

fn render_text(design: &TextDesign, global_font: &str) -> VNode {
    let node = VNode::element("div")
        .with_class("formdeck-text")
        .with_styles(text_style(design, global_font))
        .with_child(VNode::text(design.text.clone().unwrap_or_default()));
    with_wire_attr(node, "data-text-type", design.kind.as_ref())
}

fn render_media(design: &MediaDesign) -> VNode {
    let source = design.media.clone().unwrap_or_default();
    let element = match design.media_type {
        Some(MediaType::Video) => VNode::element("video")
            .with_attr("src", source)
            .with_attr("controls", "controls")
            .with_attr("preload", "metadata"),
        _ => VNode::element("img").with_attr("src", source).with_attr(
            "alt",
            design
                .media_alt
                .clone()
                .unwrap_or_else(|| "Media content".to_string()),
        ),
    }
    .with_styles(media_style(design));

    match design.media_caption.as_ref().filter(|c| !c.is_empty()) {
        Some(caption) => VNode::element("figure").with_child(element).with_child(
            VNode::element("figcaption").with_child(VNode::text(caption.clone())),
        ),
        None => element,
    }
}

fn render_button(design: &ButtonDesign, global_font: &str) -> VNode {
    let mut button = VNode::element("button")
        .with_class("formdeck-button")
        .with_styles(button_style(design, global_font))
        .with_child(VNode::text(
            design
                .button_text
                .clone()
                .unwrap_or_else(|| "Button".to_string()),
        ));
    if let Some(url) = design.button_url.as_ref().filter(|u| !u.is_empty()) {
        button = button.with_attr("data-href", url.clone());
    }
    button
}

fn render_question(id: &str, design: &QuestionDesign, global_font: &str) -> VNode {
    let required = design.question_required.unwrap_or(false);

    let mut heading = VNode::element("h2")
        .with_class("formdeck-question-text")
        .with_styles(question_style(design, global_font))
        .with_child(VNode::text(
            design
                .question_text
                .clone()
                .unwrap_or_else(|| "What is your question?".to_string()),
        ));
    if required {
        heading = heading.with_child(
            VNode::element("span")
                .with_class("formdeck-required")
                .with_child(VNode::text("*")),
        );
    }

    let mut question = VNode::element("div")
        .with_class("formdeck-question")
        .with_child(heading);

    let description_enabled = design.question_description_enabled != Some(false);
    if let Some(description) = design
        .question_description
        .as_ref()
        .filter(|d| description_enabled && !d.is_empty())
    {
        question = question.with_child(
            VNode::element("p")
                .with_class("formdeck-question-description")
                .with_styles(description_style(design, global_font))
                .with_child(VNode::text(description.clone())),
        );
    }

    let input = match design.question_type.unwrap_or_default() {
        QuestionType::Text => render_text_input(id, design, global_font),
        QuestionType::SingleSelect => render_select(id, design, SelectType::Radio),
        QuestionType::MultiSelect => render_select(id, design, SelectType::Checkbox),
        QuestionType::Rating => render_rating(design),
        QuestionType::Slider => render_slider(id, design),
    };
    question = question.with_child(input);

    let shows_message = design.show_validation_message != Some(false);
    if let Some(message) = design
        .question_error_message
        .as_ref()
        .filter(|m| shows_message && !m.is_empty())
    {
        question = question.with_child(
            VNode::element("p")
                .with_class("formdeck-error")
                .with_attr("hidden", "hidden")
                .with_styles(error_message_style(design))
                .with_child(VNode::text(message.clone())),
        );
    }
    question
}

fn render_text_input(id: &str, design: &QuestionDesign, global_font: &str) -> VNode {
    let mut input = VNode::element("input")
        .with_attr("name", id)
        .with_attr(
            "type",
            design
                .input_type
                .as_ref()
                .and_then(wire_name)
                .unwrap_or_else(|| "text".to_string()),
        )
        .with_attr(
            "placeholder",
            design
                .question_placeholder
                .clone()
                .unwrap_or_else(|| "Enter your answer".to_string()),
        )
        .with_styles(input_style(design, global_font));
    if design.question_required.unwrap_or(false) {
        input = input.with_attr("required", "required");
    }
    input = with_wire_attr(input, "data-variant", design.input_variant.as_ref());
    input = with_wire_attr(input, "data-size", design.input_size.as_ref());
    with_wire_attr(input, "data-validation", design.validation.as_ref())
}

fn render_select(id: &str, design: &QuestionDesign, default_type: SelectType) -> VNode {
    let options = design.question_options.clone().unwrap_or_default();
    let select_type = design.select_type.unwrap_or(default_type);

    let group = if select_type == SelectType::Dropdown {
        VNode::element("select").with_attr("name", id).with_children(
            options
                .iter()
                .map(|option| {
                    VNode::element("option")
                        .with_attr("value", option.clone())
                        .with_child(VNode::text(option.clone()))
                })
                .collect(),
        )
    } else {
        let input_type = if select_type == SelectType::Checkbox {
            "checkbox"
        } else {
            "radio"
        };
        VNode::element("div").with_class("formdeck-options").with_children(
            options
                .iter()
                .map(|option| {
                    VNode::element("label")
                        .with_child(
                            VNode::element("input")
                                .with_attr("type", input_type)
                                .with_attr("name", id)
                                .with_attr("value", option.clone()),
                        )
                        .with_child(VNode::text(option.clone()))
                })
                .collect(),
        )
    };

    let group = with_wire_attr(group, "data-layout", design.select_layout.as_ref());
    with_wire_attr(group, "data-style", design.select_style.as_ref())
}

fn render_rating(design: &QuestionDesign) -> VNode {
    let max = design.rating_max.unwrap_or(5).max(1);
    let style = design.rating_style.unwrap_or(RatingStyle::Star);
    let color = design
        .rating_empty_color
        .clone()
        .unwrap_or_else(|| "#d1d5db".to_string());

    let symbols = (1..=max).map(|value| {
        let symbol = match style {
            RatingStyle::Star => "★".to_string(),
            RatingStyle::Heart => "♥".to_string(),
            RatingStyle::Number => value.to_string(),
            RatingStyle::Emoji => {
                let index = (value - 1) as usize % RATING_EMOJI.len();
                RATING_EMOJI[index].to_string()
            }
        };
        VNode::element("span")
            .with_attr("data-value", value.to_string())
            .with_style("color", color.clone())
            .with_child(VNode::text(symbol))
    });

    let group = VNode::element("div")
        .with_class("formdeck-rating")
        .with_children(symbols.collect());
    with_wire_attr(group, "data-size", design.rating_size.as_ref())
}

fn render_slider(id: &str, design: &QuestionDesign) -> VNode {
    use crate::color::format_number;

    let min = design.slider_min.unwrap_or(0.0);
    let max = design.slider_max.unwrap_or(100.0);
    let value = design.slider_default_value.unwrap_or(min);

    let mut input = VNode::element("input")
        .with_attr("type", "range")
        .with_attr("name", id)
        .with_attr("min", format_number(min))
        .with_attr("max", format_number(max))
        .with_attr("step", format_number(design.slider_step.unwrap_or(1.0)))
        .with_attr("value", format_number(value));
    if let Some(color) = design.slider_color.as_ref() {
        input = input.with_style("accent-color", color.clone());
    }
    input = with_wire_attr(input, "data-orientation", design.slider_orientation.as_ref());

    let mut slider = VNode::element("div")
        .with_class("formdeck-slider")
        .with_child(input);
    if design.slider_show_value.unwrap_or(false) {
        slider = slider.with_child(
            VNode::element("output").with_child(VNode::text(format_number(value))),
        );
    }
    slider
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck_model::{InputType, QuestionDesign};

    #[test]
    fn test_wire_names() {
        assert_eq!(wire_name(&InputType::Email).as_deref(), Some("email"));
        assert_eq!(wire_name(&QuestionType::SingleSelect).as_deref(), Some("single_select"));
    }

    #[test]
    fn test_rating_renders_max_symbols() {
        let design = QuestionDesign {
            question_type: Some(QuestionType::Rating),
            rating_max: Some(3),
            rating_style: Some(RatingStyle::Number),
            ..Default::default()
        };
        let node = render_rating(&design);
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.text_content(), "123");
    }

    #[test]
    fn test_dropdown_select() {
        let design = QuestionDesign {
            question_options: Some(vec!["Red".into(), "Blue".into()]),
            select_type: Some(SelectType::Dropdown),
            ..Default::default()
        };
        let node = render_select("question_1", &design, SelectType::Radio);
        assert_eq!(node.tag(), Some("select"));
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_text_input_attributes() {
        let design = QuestionDesign {
            input_type: Some(InputType::Email),
            question_required: Some(true),
            ..Default::default()
        };
        let node = render_text_input("question_1", &design, "Nunito");
        assert_eq!(node.attr("type"), Some("email"));
        assert_eq!(node.attr("required"), Some("required"));
        assert_eq!(node.attr("placeholder"), Some("Enter your answer"));
        assert_eq!(node.style("font-family"), Some("Nunito"));
    }
}
