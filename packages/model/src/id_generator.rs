use crate::content::ContentKind;
use crate::slide::Slide;
use crc32fast::Hasher;

/// Generate a stable document ID from a form file path using CRC32
pub fn form_document_id(path: &str) -> String {
    let mut buff = String::from(path);
    if !path.starts_with("file://") {
        buff = format!("file://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Next free `question_<n>` id, starting from one past the question count
pub fn next_question_id(slides: &[Slide]) -> String {
    let question_count = slides
        .iter()
        .filter(|slide| slide.kind == crate::slide::SlideKind::Question)
        .count();

    let mut n = question_count + 1;
    loop {
        let candidate = format!("question_{}", n);
        if !slides.iter().any(|slide| slide.id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Next free `<kind>_<n>` content id within a slide
pub fn next_content_id(slide: &Slide, kind: ContentKind) -> String {
    let mut n = slide.content.len() + 1;
    loop {
        let candidate = format!("{}_{}", kind, n);
        if slide.find_content(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}

/// `Question_1` → `Question_1_COPY_1`, `Question_1_COPY_1` → `Question_1_COPY_2`
pub fn duplicate_name(name: &str) -> String {
    if let Some((base, number)) = name.rsplit_once("_COPY_") {
        if let Ok(copy) = number.parse::<u32>() {
            return format!("{}_COPY_{}", base, copy + 1);
        }
    }
    format!("{}_COPY_1", name)
}

/// Appends ` (Copy)` unless the description already mentions a copy
pub fn duplicate_description(description: &str) -> String {
    if description.to_lowercase().contains("copy") {
        description.to_string()
    } else {
        format!("{} (Copy)", description)
    }
}
