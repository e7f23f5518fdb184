//! The shortcode handler collection.
//!
//! One module per shortcode. Category-validated handlers (alert, emph,
//! label, marker, panel) share a pattern: normalize the raw signal to
//! lower-case, fall back to a documented default when it is not in the
//! handler's allow-list, and interpolate the (usually markdown-compiled)
//! payload into a fixed template. Code handlers treat the payload as literal
//! text; the figure handler is the only one with derived quantities.

mod alert;
mod code;
mod emph;
mod figure;
mod label;
mod marker;
mod panel;

pub use alert::{Alert, AlertSignal};
pub use code::{Code, CodeBlock};
pub use emph::{Emph, EmphSignal};
pub use figure::{Dimension, Figure, Unit};
pub use label::{Label, LabelSignal};
pub use marker::{Marker, MarkerSignal};
pub use panel::{Panel, PanelSignal};
