//! Structured text templates for department recommendations.
//!
//! A template is an ordered list of literal and placeholder segments.
//! Parameters are computed first and rendered separately.

use std::fmt::Write;

/// A named placeholder inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateParam {
    Action,
    ReverseAction,
    Percentage,
    Number,
    Margin,
}

/// One piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Param(TemplateParam),
}

/// Values substituted into placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateParams {
    pub action: String,
    pub reverse_action: String,
    pub percentage: i64,
    pub number: i64,
    pub margin: f64,
}

impl TemplateParams {
    /// Copy with the reverse-action phrase lower-cased, as triggers read it.
    pub fn for_trigger(&self) -> Self {
        Self {
            reverse_action: self.reverse_action.to_lowercase(),
            ..self.clone()
        }
    }

    fn write_param(&self, out: &mut String, param: TemplateParam) {
        // Writing to a String cannot fail.
        let _ = match param {
            TemplateParam::Action => write!(out, "{}", self.action),
            TemplateParam::ReverseAction => write!(out, "{}", self.reverse_action),
            TemplateParam::Percentage => write!(out, "{}", self.percentage),
            TemplateParam::Number => write!(out, "{}", self.number),
            TemplateParam::Margin => write!(out, "{:.1}", self.margin),
        };
    }
}

/// Static text template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    segments: &'static [Segment],
}

impl Template {
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    pub fn render(&self, params: &TemplateParams) -> String {
        let mut out = String::new();
        for segment in self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(param) => params.write_param(&mut out, *param),
            }
        }
        out
    }
}
