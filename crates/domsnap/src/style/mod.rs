//! Style inlining: significance filtering plus the source/clone walk.

mod inline;
mod significance;

pub use inline::StyleInliner;
pub use significance::SignificanceTable;

/// Properties worth carrying into inline styles. Visual fidelity of the
/// snapshot depends on these; everything else the browser computes is
/// noise for a static copy.
pub const IMPORTANT_PROPERTIES: &[&str] = &[
    // Layout
    "display",
    "position",
    "top",
    "left",
    "right",
    "bottom",
    "width",
    "height",
    "min-width",
    "min-height",
    "max-width",
    "max-height",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "border",
    "border-width",
    "border-style",
    "border-color",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-radius",
    "box-sizing",
    "overflow",
    "overflow-x",
    "overflow-y",
    "float",
    "clear",
    "z-index",
    // Font and text
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "font-variant",
    "line-height",
    "text-align",
    "text-decoration",
    "text-transform",
    "text-indent",
    "text-shadow",
    "letter-spacing",
    "word-spacing",
    "color",
    "white-space",
    "word-wrap",
    "word-break",
    // Background
    "background",
    "background-color",
    "background-image",
    "background-repeat",
    "background-position",
    "background-size",
    "background-attachment",
    // Visual effects
    "opacity",
    "visibility",
    "transform",
    "transform-origin",
    "box-shadow",
    "filter",
    // Flexbox
    "flex",
    "flex-direction",
    "flex-wrap",
    "flex-basis",
    "flex-grow",
    "flex-shrink",
    "justify-content",
    "align-items",
    "align-self",
    "align-content",
    // Grid
    "grid",
    "grid-template-columns",
    "grid-template-rows",
    "grid-gap",
    "grid-column",
    "grid-row",
    "grid-area",
];

/// Smaller property list for synthesized pseudo-elements.
pub const PSEUDO_PROPERTIES: &[&str] = &[
    "display",
    "position",
    "top",
    "left",
    "right",
    "bottom",
    "width",
    "height",
    "margin",
    "padding",
    "border",
    "background",
    "color",
    "font-size",
    "font-weight",
    "text-decoration",
    "opacity",
    "z-index",
    "transform",
    "box-shadow",
    "border-radius",
];

/// Animation and transition properties, extracted separately because their
/// significance test compares against the no-op defaults rather than the
/// layout-default table.
pub const ANIMATION_PROPERTIES: &[&str] = &[
    "animation",
    "animation-name",
    "animation-duration",
    "animation-timing-function",
    "animation-delay",
    "animation-iteration-count",
    "animation-direction",
    "animation-fill-mode",
    "animation-play-state",
    "transition",
    "transition-property",
    "transition-duration",
    "transition-timing-function",
    "transition-delay",
];
