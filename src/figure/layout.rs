use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Font {
    #[must_use]
    pub fn sized(size: f64) -> Self {
        Self {
            family: None,
            size: Some(size),
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "log")]
    Log,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<String>,
}

impl Axis {
    #[must_use]
    pub fn titled(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            title: Some(Title::new(text).with_font(Font::sized(font_size))),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: AxisKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: [f64; 2]) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn with_autorange(mut self, autorange: impl Into<String>) -> Self {
        self.autorange = Some(autorange.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,
    pub showarrow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bordercolor: Option<String>,
}

impl Annotation {
    #[must_use]
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: None,
            y: None,
            xref: None,
            xanchor: None,
            yanchor: None,
            showarrow: false,
            font: None,
            bgcolor: None,
            bordercolor: None,
        }
    }

    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_xref(mut self, xref: impl Into<String>) -> Self {
        self.xref = Some(xref.into());
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }
}

/// One animation navigation step, paired one-to-one with a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub label: String,
    /// Name of the frame this step jumps to.
    pub target: String,
    pub frame_duration_ms: u32,
    pub transition_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    /// Index of the initially selected step.
    pub active: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value_prefix: Option<String>,
    pub transition_ms: u32,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub method: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub args: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
    pub buttons: Vec<Button>,
}

impl UpdateMenu {
    /// Conventional play control for frame-animated figures.
    #[must_use]
    pub fn play_button(frame_duration_ms: u32, transition_ms: u32) -> Self {
        Self {
            kind: "buttons".to_owned(),
            active: None,
            buttons: vec![Button {
                label: "Play".to_owned(),
                method: "animate".to_owned(),
                args: serde_json::json!({
                    "frame_duration_ms": frame_duration_ms,
                    "transition_ms": transition_ms,
                    "mode": "immediate",
                }),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coastlinecolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countrycolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countrywidth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_showlegend(mut self, showlegend: bool) -> Self {
        self.showlegend = Some(showlegend);
        self
    }

    #[must_use]
    pub fn with_hovermode(mut self, hovermode: impl Into<String>) -> Self {
        self.hovermode = Some(hovermode.into());
        self
    }

    #[must_use]
    pub fn with_xaxis(mut self, axis: Axis) -> Self {
        self.xaxis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_yaxis(mut self, axis: Axis) -> Self {
        self.yaxis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_geo(mut self, geo: GeoLayout) -> Self {
        self.geo = Some(geo);
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    #[must_use]
    pub fn with_sliders(mut self, sliders: Vec<Slider>) -> Self {
        self.sliders = sliders;
        self
    }

    #[must_use]
    pub fn with_updatemenus(mut self, updatemenus: Vec<UpdateMenu>) -> Self {
        self.updatemenus = updatemenus;
        self
    }
}
