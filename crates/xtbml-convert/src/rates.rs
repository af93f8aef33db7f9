//! Extraction of numeric rate values from `<Values>` blocks.
//!
//! [`RateParser`] is a small state machine driven one token at a time. It
//! sits `Outside` until a table's `<Values>` opens, then tracks the stack of
//! open `<Axis>` elements. Depth alone decides the shape of each `<Y>` value:
//!
//! - depth 0 or 1 (ultimate table): the value's `t` is the age, and the
//!   point has no duration;
//! - depth 2 or more (select table): the outermost axis' `t` is the age and
//!   the value's `t` is the duration.
//!
//! When a value has no `t` of its own, the innermost enclosing axis' `t`
//! stands in for it, so both `<Axis><Y t="40">` and `<Axis t="40"><Y>`
//! layouts resolve to age 40.

use xtbml_model::RatePoint;

use crate::error::{ConvertError, Result};
use crate::table_meta::TABLE;
use crate::xml::{StartTag, Token, XmlCursor};

const VALUES: &str = "Values";
const AXIS: &str = "Axis";
const VALUE: &str = "Y";
const TIER_ATTR: &str = "t";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ValuesState {
    #[default]
    Outside,
    /// Inside a table's `<Values>`; one entry per open `<Axis>`, holding its
    /// `t` attribute when it parsed as an integer.
    InValues { axes: Vec<Option<i64>> },
}

/// Streaming rate extractor shared by [`parse_rates`] and the document
/// assembler.
#[derive(Debug, Default)]
pub struct RateParser {
    points: Vec<RatePoint>,
    table: Option<usize>,
    state: ValuesState,
}

impl RateParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordinal of the most recently opened table.
    pub fn table_index(&self) -> Option<usize> {
        self.table
    }

    pub fn in_values(&self) -> bool {
        matches!(self.state, ValuesState::InValues { .. })
    }

    /// Number of `<Axis>` elements currently open inside `<Values>`.
    pub fn axis_depth(&self) -> usize {
        match &self.state {
            ValuesState::Outside => 0,
            ValuesState::InValues { axes } => axes.len(),
        }
    }

    /// Age context from the outermost open axis, if it carried one.
    pub fn current_age(&self) -> Option<i64> {
        match &self.state {
            ValuesState::InValues { axes } => axes.first().copied().flatten(),
            ValuesState::Outside => None,
        }
    }

    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    /// `<Table>` start: next ordinal, and any unfinished values are abandoned.
    pub fn open_table(&mut self) {
        self.table = Some(self.table.map_or(0, |index| index + 1));
        self.state = ValuesState::Outside;
    }

    /// `<Values>` start. Ignored before the first table.
    pub fn open_values(&mut self) {
        if self.table.is_some() {
            self.state = ValuesState::InValues { axes: Vec::new() };
        }
    }

    /// `<Values>` end.
    pub fn close_values(&mut self) {
        self.state = ValuesState::Outside;
    }

    /// `<Axis>` start with its raw `t` attribute.
    pub fn open_axis(&mut self, tier: Option<&str>) {
        if let ValuesState::InValues { axes } = &mut self.state {
            axes.push(parse_tier(tier));
        }
    }

    /// `<Axis>` end. Leaving depth 1 clears the age context.
    pub fn close_axis(&mut self) {
        if let ValuesState::InValues { axes } = &mut self.state {
            axes.pop();
        }
    }

    /// A `<Y>` value with its raw `t` attribute and text content.
    ///
    /// Ignored outside `<Values>`. Blank text yields a point with no rate.
    /// The text is validated before the age and duration are resolved.
    pub fn push_value(&mut self, tier: Option<&str>, text: &str) -> Result<()> {
        let ValuesState::InValues { axes } = &self.state else {
            return Ok(());
        };
        // `InValues` is only entered once a table is open.
        let table = self.table.unwrap_or_default();
        let rate = parse_rate(table, text)?;
        let own_tier = parse_tier(tier);
        let enclosing_tier = axes.last().copied().flatten();

        let (age, duration) = if axes.len() > 1 {
            let age = axes[0].ok_or(ConvertError::MissingAgeIdentifier { table })?;
            let duration = own_tier
                .or(enclosing_tier)
                .ok_or(ConvertError::MissingDurationIdentifier { table })?;
            (age, Some(duration))
        } else {
            let age = own_tier
                .or(enclosing_tier)
                .ok_or(ConvertError::MissingAgeIdentifier { table })?;
            (age, None)
        };

        self.points.push(RatePoint {
            table,
            age,
            duration,
            rate,
        });
        Ok(())
    }

    /// Feed one token. A `<Y>` start inside `<Values>` consumes the value
    /// element through its end tag.
    pub(crate) fn consume(&mut self, cursor: &mut XmlCursor<'_>, token: &Token) -> Result<()> {
        match token {
            Token::Start(tag) => self.consume_start(cursor, tag),
            Token::End(_) if token.is_end(AXIS) => {
                self.close_axis();
                Ok(())
            }
            Token::End(_) if token.is_end(VALUES) => {
                self.close_values();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn consume_start(&mut self, cursor: &mut XmlCursor<'_>, tag: &StartTag) -> Result<()> {
        if tag.is(TABLE) {
            self.open_table();
        } else if tag.is(VALUES) {
            self.open_values();
        } else if tag.is(AXIS) {
            self.open_axis(tag.attr(TIER_ATTR));
        } else if tag.is(VALUE) && self.in_values() {
            let text = cursor.element_text()?;
            self.push_value(tag.attr(TIER_ATTR), &text)?;
        }
        Ok(())
    }

    /// All points in document order. Fails when none were found.
    pub fn finish(self) -> Result<Vec<RatePoint>> {
        if self.points.is_empty() {
            return Err(ConvertError::NoRateData);
        }
        Ok(self.points)
    }
}

/// Extract every rate point of a document in a single pass.
pub fn parse_rates(input: &[u8]) -> Result<Vec<RatePoint>> {
    let mut cursor = XmlCursor::new(input);
    let mut parser = RateParser::new();
    while let Some(token) = cursor.next_token()? {
        parser.consume(&mut cursor, &token)?;
    }
    parser.finish()
}

/// Integer `t` attribute; anything unparsable counts as absent.
fn parse_tier(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

fn parse_rate(table: usize, text: &str) -> Result<Option<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(rate) if rate.is_finite() => Ok(Some(rate)),
        _ => Err(ConvertError::InvalidRateValue {
            table,
            value: text.to_string(),
        }),
    }
}
