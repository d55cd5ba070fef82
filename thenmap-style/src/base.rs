//! Fixed presentation rules.

/// Base style rules installed once at initialization, independent of any
/// caller data: default region fill, borders, the hover affordance, and
/// the dimmed loading state used while a data source fetch is in flight.
///
/// The hover rule references the `sepia` filter that document annotation
/// inserts into the map's `<defs>` section.
pub const BASE_RULES: &str = "\
path{fill:#e2e2e2;stroke:#ffffff;stroke-width:1}\n\
path:hover{filter:url(#sepia)}\n\
.loading_data{opacity:0.5}\n";
