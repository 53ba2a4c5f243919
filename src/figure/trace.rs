use serde::{Deserialize, Serialize};

/// Supported trace families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceKind {
    #[serde(rename = "scatter")]
    Scatter,
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "scattergeo")]
    ScatterGeo,
}

/// Axis coordinate: an integer day index, a number, or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coord {
    Int(i64),
    Num(f64),
    Label(String),
}

impl From<i64> for Coord {
    fn from(value: i64) -> Self {
        Coord::Int(value)
    }
}

impl From<usize> for Coord {
    fn from(value: usize) -> Self {
        Coord::Int(value as i64)
    }
}

impl From<f64> for Coord {
    fn from(value: f64) -> Self {
        Coord::Num(value)
    }
}

impl From<&str> for Coord {
    fn from(value: &str) -> Self {
        Coord::Label(value.to_owned())
    }
}

impl From<String> for Coord {
    fn from(value: String) -> Self {
        Coord::Label(value)
    }
}

/// Trace visibility: shown, hidden, or collapsed into the legend.
///
/// Serialized in the conventional dashboard form: `true`, `false`, or the
/// string `"legendonly"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    LegendOnly,
    Hidden,
}

impl Serialize for Visibility {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Visibility::Visible => serializer.serialize_bool(true),
            Visibility::Hidden => serializer.serialize_bool(false),
            Visibility::LegendOnly => serializer.serialize_str("legendonly"),
        }
    }
}

impl<'de> Deserialize<'de> for Visibility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Mode(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(Visibility::Visible),
            Raw::Flag(false) => Ok(Visibility::Hidden),
            Raw::Mode(mode) if mode == "legendonly" => Ok(Visibility::LegendOnly),
            Raw::Mode(mode) => Err(serde::de::Error::custom(format!(
                "unknown visibility mode: {mode}"
            ))),
        }
    }
}

/// Bar orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

/// Scalar-or-per-point color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

/// Scalar-or-per-point marker size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Single(f64),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkerLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

/// One declarative chart trace.
///
/// Only set fields serialize, so the JSON stays close to the form charting
/// front-ends expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x: Vec<Coord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y: Vec<Coord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub textposition: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customdata: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locationmode: Option<String>,
}

impl Trace {
    #[must_use]
    fn new(kind: TraceKind) -> Self {
        Self {
            kind,
            name: None,
            x: Vec::new(),
            y: Vec::new(),
            mode: None,
            line: None,
            marker: None,
            text: Vec::new(),
            textposition: Vec::new(),
            hovertemplate: None,
            hoverinfo: None,
            customdata: Vec::new(),
            visible: None,
            orientation: None,
            locations: Vec::new(),
            locationmode: None,
        }
    }

    #[must_use]
    pub fn scatter() -> Self {
        Self::new(TraceKind::Scatter)
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::new(TraceKind::Bar)
    }

    #[must_use]
    pub fn scatter_geo() -> Self {
        Self::new(TraceKind::ScatterGeo)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_x(mut self, x: Vec<Coord>) -> Self {
        self.x = x;
        self
    }

    #[must_use]
    pub fn with_y(mut self, y: Vec<Coord>) -> Self {
        self.y = y;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }

    #[must_use]
    pub fn with_textposition(mut self, positions: Vec<String>) -> Self {
        self.textposition = positions;
        self
    }

    #[must_use]
    pub fn with_hovertemplate(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_hoverinfo(mut self, info: impl Into<String>) -> Self {
        self.hoverinfo = Some(info.into());
        self
    }

    #[must_use]
    pub fn with_customdata(mut self, customdata: Vec<f64>) -> Self {
        self.customdata = customdata;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: Visibility) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    #[must_use]
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    #[must_use]
    pub fn with_locationmode(mut self, mode: impl Into<String>) -> Self {
        self.locationmode = Some(mode.into());
        self
    }
}
