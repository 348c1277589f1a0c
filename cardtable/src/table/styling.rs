//! Container style resolution shared by tables, rows and cells.

use crate::config::{ContainerStyleDefinition, HostConfig};
use crate::types::Color;

/// Style every card starts from.
pub const DEFAULT_STYLE: &str = "default";

/// An element with an optional named container style.
///
/// Style names are checked against the host registry on every read; a
/// name the host does not know behaves as if it were not set.
pub trait Stylable {
    /// The style name as written in the document.
    fn style_name(&self) -> Option<&str>;

    /// The style name, if the host knows it.
    fn known_style(&self, host: &HostConfig) -> Option<&str> {
        self.style_name()
            .filter(|name| host.container_styles.contains(name))
    }

    /// This element's own known style, else the style it inherits.
    fn effective_style<'a>(&'a self, host: &HostConfig, inherited: &'a str) -> &'a str {
        self.known_style(host).unwrap_or(inherited)
    }

    /// Definition of the effective style, falling back to `default`.
    fn style_definition<'h>(&self, host: &'h HostConfig) -> &'h ContainerStyleDefinition {
        host.container_styles.get_or_default(self.known_style(host))
    }

    /// An element paints its own background only when its style differs
    /// from the one it sits on.
    fn has_background(&self, host: &HostConfig, inherited: &str) -> bool {
        self.known_style(host)
            .is_some_and(|name| !name.eq_ignore_ascii_case(inherited))
    }

    fn background_color(&self, host: &HostConfig, inherited: &str) -> Option<Color> {
        if self.has_background(host, inherited) {
            self.style_definition(host).background_color()
        } else {
            None
        }
    }
}
