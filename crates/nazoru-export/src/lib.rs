//! nazoru-export: Pure SVG serializers (sans-IO)
//!
//! Converts digit guides and trace replays into SVG strings: dotted
//! guide documents for printable worksheets and sample/ink overlays
//! for replay diagnostics.

pub mod svg;

pub use svg::{GuideStyle, to_guide_svg, to_overlay_svg};
