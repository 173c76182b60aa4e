//! # Design sub-objects
//!
//! Each content kind owns one design struct whose fields are all optional,
//! plus a closed patch enum with one variant per field. A patch names the
//! field and carries a value of that field's type, so a mistyped property
//! or value is a compile error rather than a silent runtime write.
//!
//! Patches serialize adjacently tagged:
//!
//! ```json
//! { "property": "font_size", "value": "24px" }
//! ```

use serde::{Deserialize, Serialize};

/// Declares a design struct, its field enum and its patch enum from one
/// field list.
///
/// `field: Type => Variant` declares `field: Option<Type>`,
/// `Field::Variant` and `Patch::Variant(Type)`; `as "wire"` overrides the
/// serialized name of all three. `Patch::Clear(Field)` unsets a field.
macro_rules! design {
    (
        $(#[$meta:meta])*
        $name:ident / $field_enum:ident / $patch:ident, rename_all = $case:tt {
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $ty:ty => $variant:ident $(as $wire:tt)?,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = $case)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $(#[serde(rename = $wire)])?
                pub $field: Option<$ty>,
            )*
        }

        #[doc = concat!("Names one field of [`", stringify!($name), "`]")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = $case)]
        pub enum $field_enum {
            $(
                $(#[serde(rename = $wire)])?
                $variant,
            )*
        }

        impl $field_enum {
            /// Rust field name
            pub fn property(self) -> &'static str {
                match self {
                    $( $field_enum::$variant => stringify!($field), )*
                }
            }
        }

        #[doc = concat!("Single-field update for [`", stringify!($name), "`]")]
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "property", content = "value", rename_all = $case)]
        pub enum $patch {
            $(
                $(#[serde(rename = $wire)])?
                $variant($ty),
            )*
            /// Unset the named field
            Clear($field_enum),
        }

        impl $name {
            /// Write the patched field; every other field is left as is
            pub fn apply(&mut self, patch: $patch) {
                match patch {
                    $( $patch::$variant(value) => self.$field = Some(value), )*
                    $patch::Clear(field) => match field {
                        $( $field_enum::$variant => self.$field = None, )*
                    },
                }
            }

            /// Patches turning `committed` into `self`, including unset fields
            pub fn changes_from(&self, committed: &Self) -> Vec<$patch> {
                let mut changes = Vec::new();
                $(
                    if self.$field != committed.$field {
                        changes.push(match &self.$field {
                            Some(value) => $patch::$variant(value.clone()),
                            None => $patch::Clear($field_enum::$variant),
                        });
                    }
                )*
                changes
            }
        }

        impl $patch {
            /// Rust field name targeted by this patch
            pub fn property(&self) -> &'static str {
                match self {
                    $( $patch::$variant(_) => stringify!($field), )*
                    $patch::Clear(field) => field.property(),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Header,
    Subheader,
    Body,
    Caption,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    Text,
    SingleSelect,
    MultiSelect,
    Rating,
    Slider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    Floating,
    Sticky,
    Icon,
    Outlined,
    Filled,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    Sm,
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    Email,
    Number,
    Phone,
    Url,
    Password,
    Date,
    Time,
    Zipcode,
    Creditcard,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomValidation {
    /// `/regex/` or a literal expected value
    pub pattern: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectType {
    Radio,
    Checkbox,
    Dropdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectLayout {
    Vertical,
    Horizontal,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectStyle {
    Default,
    Card,
    Button,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingStyle {
    Star,
    Heart,
    Number,
    Emoji,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

design! {
    /// Styling for a text block
    TextDesign / TextDesignField / TextDesignPatch, rename_all = "snake_case" {
        /// Markup shown in the block
        text: String => Text,
        kind: TextKind => Kind as "type",
        font_family: String => FontFamily,
        font_size: String => FontSize,
        font_color: String => FontColor,
        font_alignment: String => FontAlignment,
        font_weight: String => FontWeight,
        font_style: String => FontStyle,
        font_decoration: String => FontDecoration,
        /// Word spacing in px, unitless
        font_spacing: String => FontSpacing,
        font_line_height: String => FontLineHeight,
        /// Letter spacing in px, unitless
        font_letter_spacing: String => FontLetterSpacing,
        font_tracking: String => FontTracking,
        font_transform: String => FontTransform,
    }
}

design! {
    /// Source and placement of an image or video block
    MediaDesign / MediaDesignField / MediaDesignPatch, rename_all = "camelCase" {
        media: String => Media,
        media_type: MediaType => MediaType,
        media_alt: String => MediaAlt,
        media_caption: String => MediaCaption,
        media_description: String => MediaDescription,
        media_width: String => MediaWidth,
        media_height: String => MediaHeight,
        media_position: String => MediaPosition,
        media_alignment: String => MediaAlignment,
        media_overlay: bool => MediaOverlay,
        media_overlay_color: String => MediaOverlayColor,
        media_overlay_opacity: f64 => MediaOverlayOpacity,
        media_overlay_position: String => MediaOverlayPosition,
    }
}

design! {
    /// Question configuration: answer type, validation, and input styling
    QuestionDesign / QuestionDesignField / QuestionDesignPatch, rename_all = "snake_case" {
        question_type: QuestionType => QuestionType,
        question_text: String => QuestionText,
        question_options: Vec<String> => QuestionOptions,
        question_required: bool => QuestionRequired,
        question_description: String => QuestionDescription,
        question_description_enabled: bool => QuestionDescriptionEnabled,
        question_placeholder: String => QuestionPlaceholder,
        question_error_message: String => QuestionErrorMessage,

        input_type: InputType => InputType,
        input_variant: InputVariant => InputVariant,
        input_size: ControlSize => InputSize,
        input_width: String => InputWidth,
        input_height: String => InputHeight,
        input_border_radius: String => InputBorderRadius,
        input_border_color: String => InputBorderColor,
        input_border_width: String => InputBorderWidth,
        input_background_color: String => InputBackgroundColor,
        input_text_color: String => InputTextColor,
        input_placeholder_color: String => InputPlaceholderColor,
        input_focus_color: String => InputFocusColor,
        input_error_color: String => InputErrorColor,
        input_font_size: String => InputFontSize,
        input_font_weight: String => InputFontWeight,
        input_font_family: String => InputFontFamily,
        input_padding: String => InputPadding,
        input_margin: String => InputMargin,

        validation: ValidationKind => Validation,
        custom_validation: CustomValidation => CustomValidation,
        validate_on_change: bool => ValidateOnChange,
        validate_on_blur: bool => ValidateOnBlur,
        show_validation_message: bool => ShowValidationMessage,

        select_type: SelectType => SelectType,
        select_layout: SelectLayout => SelectLayout,
        select_style: SelectStyle => SelectStyle,
        select_max_selections: u32 => SelectMaxSelections,
        select_min_selections: u32 => SelectMinSelections,

        rating_max: u32 => RatingMax,
        rating_style: RatingStyle => RatingStyle,
        rating_size: ControlSize => RatingSize,
        rating_color: String => RatingColor,
        rating_empty_color: String => RatingEmptyColor,
        rating_hover_color: String => RatingHoverColor,

        slider_min: f64 => SliderMin,
        slider_max: f64 => SliderMax,
        slider_step: f64 => SliderStep,
        slider_default_value: f64 => SliderDefaultValue,
        slider_show_value: bool => SliderShowValue,
        slider_show_ticks: bool => SliderShowTicks,
        slider_orientation: Orientation => SliderOrientation,
        slider_color: String => SliderColor,
        slider_track_color: String => SliderTrackColor,
        slider_thumb_color: String => SliderThumbColor,

        question_font_size: String => QuestionFontSize,
        question_font_color: String => QuestionFontColor,
        question_font_weight: String => QuestionFontWeight,
        question_font_family: String => QuestionFontFamily,
        question_alignment: Alignment => QuestionAlignment,
        question_description_alignment: Alignment => QuestionDescriptionAlignment,
        question_description_font_size: String => QuestionDescriptionFontSize,
        question_error_message_alignment: Alignment => QuestionErrorMessageAlignment,
        question_error_message_font_size: String => QuestionErrorMessageFontSize,
        question_margin: String => QuestionMargin,
        question_padding: String => QuestionPadding,
    }
}

design! {
    /// Label, link, and styling of a call-to-action button
    ButtonDesign / ButtonDesignField / ButtonDesignPatch, rename_all = "snake_case" {
        button_text: String => ButtonText,
        button_url: String => ButtonUrl,
        button_color: String => ButtonColor,
        button_background_color: String => ButtonBackgroundColor,
        button_border_color: String => ButtonBorderColor,
        button_border_radius: String => ButtonBorderRadius,
        button_font_size: String => ButtonFontSize,
        button_font_weight: String => ButtonFontWeight,
        button_width: String => ButtonWidth,
        button_shadow: String => ButtonShadow,
    }
}
