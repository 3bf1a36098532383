//! Search-result boxes passed to an image page as repeated `box` parameters.
//!
//! A box is `x,y WxH optional text` in coordinates relative to the image
//! width, e.g. `0.036886,0.740071 0.898778x0.108414 I BYEN MED DE KENDTE`.

use crate::query::query_values;

pub const BOX_PARAM: &str = "box";

#[derive(Clone, Debug, PartialEq)]
pub struct ResultBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub text: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BoxParseError {
    #[error("box is empty")]
    Empty,
    #[error("expected `x,y` but got `{0}`")]
    Position(String),
    #[error("expected `WxH` after the position")]
    MissingSize,
    #[error("expected `WxH` but got `{0}`")]
    Size(String),
    #[error("{field} is not a finite number: `{value}`")]
    Number { field: &'static str, value: String },
    #[error("box has negative size {w}x{h}")]
    NegativeSize { w: f64, h: f64 },
}

fn number(field: &'static str, value: &str) -> Result<f64, BoxParseError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(BoxParseError::Number {
            field,
            value: value.to_string(),
        }),
    }
}

impl std::str::FromStr for ResultBox {
    type Err = BoxParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let pos = parts.next().ok_or(BoxParseError::Empty)?;
        let size = parts.next().ok_or(BoxParseError::MissingSize)?;

        let (x, y) = pos
            .split_once(',')
            .ok_or_else(|| BoxParseError::Position(pos.to_string()))?;
        let (w, h) = size
            .split_once('x')
            .ok_or_else(|| BoxParseError::Size(size.to_string()))?;
        let (x, y) = (number("x", x)?, number("y", y)?);
        let (w, h) = (number("width", w)?, number("height", h)?);
        if w < 0.0 || h < 0.0 {
            return Err(BoxParseError::NegativeSize { w, h });
        }

        Ok(ResultBox {
            x,
            y,
            w,
            h,
            text: parts.collect::<Vec<_>>().join(" "),
        })
    }
}

/// Parse every `box` parameter of `search`. Malformed entries are logged and skipped.
pub fn result_boxes(search: &str) -> Vec<ResultBox> {
    query_values(search, BOX_PARAM)
        .into_iter()
        .filter_map(|raw| match raw.parse::<ResultBox>() {
            Ok(b) => Some(b),
            Err(e) => {
                log::warn!("ignoring box `{}`: {}", raw, e);
                None
            }
        })
        .collect()
}
