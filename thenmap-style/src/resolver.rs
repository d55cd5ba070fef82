//! Color expression resolution.
//!
//! Accepts `"#99cccc"`, `"99cccc"`, `"green"` and `"rgb(1,32,42)"`.
//! Anything else resolves to the fallback color — malformed caller data
//! must degrade gracefully, never abort rendering.

use regex_lite::Regex;
use std::sync::LazyLock;
use thenmap_types::ResolvedColor;
use tracing::trace;

/// Fallback color for inputs that cannot be resolved.
pub const DEFAULT_COLOR: &str = "#e2e2e2";

static HEX_PREFIXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid pattern"));

static HEX_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("valid pattern"));

static RGB_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*\)$").expect("valid pattern")
});

/// Color names every SVG-capable surface can render, sorted for lookup.
static NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure",
    "beige", "bisque", "black", "blanchedalmond", "blue",
    "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson",
    "cyan", "darkblue", "darkcyan", "darkgoldenrod", "darkgray",
    "darkgreen", "darkgrey", "darkkhaki", "darkmagenta", "darkolivegreen",
    "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet",
    "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue",
    "firebrick", "floralwhite", "forestgreen", "fuchsia", "gainsboro",
    "ghostwhite", "gold", "goldenrod", "gray", "green",
    "greenyellow", "grey", "honeydew", "hotpink", "indianred",
    "indigo", "ivory", "khaki", "lavender", "lavenderblush",
    "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink",
    "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey",
    "lightsteelblue", "lightyellow", "lime", "limegreen", "linen",
    "magenta", "maroon", "mediumaquamarine", "mediumblue", "mediumorchid",
    "mediumpurple", "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin",
    "navajowhite", "navy", "oldlace", "olive", "olivedrab",
    "orange", "orangered", "orchid", "palegoldenrod", "palegreen",
    "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru",
    "pink", "plum", "powderblue", "purple", "red",
    "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown",
    "seagreen", "seashell", "sienna", "silver", "skyblue",
    "slateblue", "slategray", "slategrey", "snow", "springgreen",
    "steelblue", "tan", "teal", "thistle", "tomato",
    "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

/// Validates and normalizes raw color expressions.
///
/// `resolve` is total: unrecognized input returns the fallback color
/// rather than an error.
#[derive(Debug, Clone)]
pub struct ColorResolver {
    fallback: ResolvedColor,
}

impl ColorResolver {
    /// Creates a resolver with the default fallback ([`DEFAULT_COLOR`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_fallback(DEFAULT_COLOR)
    }

    /// Creates a resolver with a custom fallback.
    ///
    /// The fallback itself is trusted to be renderable.
    #[must_use]
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            fallback: ResolvedColor::new(fallback),
        }
    }

    /// Returns the configured fallback color.
    #[must_use]
    pub fn fallback(&self) -> &ResolvedColor {
        &self.fallback
    }

    /// Resolves a raw color expression, first match wins:
    ///
    /// 1. `#`-prefixed 6-digit hex — accepted as-is, case preserved
    /// 2. bare 6-digit hex — `#` prepended
    /// 3. allow-listed name, matched case-insensitively — lowercased
    /// 4. `rgb(r,g,b)` triple, 1–3 digits per component, optional internal
    ///    whitespace — lowercased (components are not range-checked here)
    /// 5. anything else — the fallback
    ///
    /// 3-digit shorthand hex is not supported.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> ResolvedColor {
        let trimmed = raw.trim();

        if HEX_PREFIXED.is_match(trimmed) {
            return ResolvedColor::new(trimmed);
        }
        if HEX_BARE.is_match(trimmed) {
            return ResolvedColor::new(format!("#{trimmed}"));
        }

        let lowered = trimmed.to_lowercase();
        if NAMED_COLORS.binary_search(&lowered.as_str()).is_ok() {
            return ResolvedColor::new(lowered);
        }
        if RGB_TRIPLE.is_match(trimmed) {
            return ResolvedColor::new(lowered);
        }

        trace!("unrecognized color {raw:?}, using fallback {}", self.fallback);
        self.fallback.clone()
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::new()
    }
}
