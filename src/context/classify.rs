//! Element type inference.

use super::inspect::{attributes, classes, selectors, ElementInspector};
use super::ElementType;

/// Best-effort classification of an element into an [`ElementType`]
///
/// Returning `None` is legitimate: the context builder degrades to the `none`
/// type.
pub trait TypeInference {
    fn infer(&self, element: &dyn ElementInspector) -> Option<ElementType>;
}

/// Infers the type from the element's child structure and attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralInference;

impl TypeInference for StructuralInference {
    fn infer(&self, element: &dyn ElementInspector) -> Option<ElementType> {
        let has_image = element.count_descendants(selectors::IMAGE_CONTAINER) > 0;
        let has_text = element.count_descendants(selectors::TRANSLATION_GROUP) > 0;

        if element.count_descendants(selectors::LINK_GRID) > 0 {
            return Some(ElementType::BookLinkGrid);
        }

        if element.has_class(classes::CANVAS_BUTTON) {
            return match (has_image, has_text) {
                (true, true) => Some(ElementType::NavigationImageWithLabelButton),
                (true, false) => Some(ElementType::NavigationImageButton),
                (false, true) => Some(ElementType::NavigationLabelButton),
                (false, false) => None,
            };
        }

        if element.count_descendants(selectors::VIDEO_CONTAINER) > 0 {
            return Some(ElementType::Video);
        }
        if element.count_descendants(selectors::AUDIO_ICON) > 0 {
            return Some(ElementType::Sound);
        }
        if has_image {
            return Some(ElementType::Image);
        }
        if element.count_descendants(selectors::RECTANGLE) > 0 {
            return Some(ElementType::Rectangle);
        }
        if has_text {
            return match element.attribute(attributes::BUBBLE_STYLE) {
                Some("caption") | Some("none") => Some(ElementType::Caption),
                _ => Some(ElementType::Speech),
            };
        }

        None
    }
}
