//! Declarative chart-specification types.
//!
//! Everything here is plain serializable data consumed as-is by an external
//! rendering layer; composition logic lives in [`crate::charts`].

pub mod layout;
pub mod spec;
pub mod trace;

pub use spec::{FIGURE_JSON_SCHEMA_V1, Figure, FigureConfig, FigureJsonContractV1, Frame};
pub use layout::{
    Annotation, Axis, AxisKind, Button, Font, GeoLayout, Layout, Slider, Step, Title, UpdateMenu,
};
pub use trace::{
    ColorSpec, Coord, Line, Marker, MarkerLine, Orientation, SizeSpec, Trace, TraceKind,
    Visibility,
};
