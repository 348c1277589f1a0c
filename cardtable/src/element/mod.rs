mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect every element in the tree, in document order, whose attribute
/// `key` equals `value`.
pub fn find_by_attr<'a>(root: &'a Element, key: &str, value: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_attr(root, key, value, &mut found);
    found
}

fn collect_by_attr<'a>(element: &'a Element, key: &str, value: &str, found: &mut Vec<&'a Element>) {
    if element.get_attr(key) == Some(value) {
        found.push(element);
    }

    for child in element.content.children() {
        collect_by_attr(child, key, value, found);
    }
}
