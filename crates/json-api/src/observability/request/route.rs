//! Route templates for span names and metric labels.

use uuid::Uuid;

/// Replace id segments so every cart shares one label.
///
/// An id that follows `product` or `products` becomes `{product}`, any other id `{cart}`.
pub(super) fn route_template(path: &str) -> String {
    let mut template = String::with_capacity(path.len());
    let mut previous = "";

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        template.push('/');

        if Uuid::parse_str(segment).is_ok() {
            template.push_str(match previous {
                "product" | "products" => "{product}",
                _ => "{cart}",
            });
        } else {
            template.push_str(segment);
        }

        previous = segment;
    }

    if template.is_empty() {
        template.push('/');
    }

    template
}
